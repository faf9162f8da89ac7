use crate::cluster::MAX_RADIUS;
use crate::error::GalleryError;
use serde::Deserialize;
use std::time::Duration;

/// Host-tunable gallery settings. Every field has a default, so `{}` is a
/// valid configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Cluster radius in hex rings.
    pub radius: u32,
    /// Viewport padding in CSS pixels around the fitted cluster.
    pub padding: f32,
    /// Safety factor applied after fitting the cluster into the viewport.
    pub fit_scale: f32,
    /// Tiles further than this outside the viewport are skipped.
    pub cull_margin: f32,
    /// Pointer travel below which a press counts as a click.
    pub click_threshold: f32,
    /// Flip length in seconds.
    pub flip_duration: f32,
    /// Upper bound on a single frame step in seconds.
    pub max_frame_dt: f32,
    pub log_level: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            radius: 2,
            padding: 24.0,
            fit_scale: 0.9,
            cull_margin: 100.0,
            click_threshold: 5.0,
            flip_duration: 0.35,
            max_frame_dt: 0.05,
            log_level: "info".to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn from_json(json: &str) -> Result<Self, GalleryError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Self = serde_json::from_str(json).map_err(GalleryError::ConfigJson)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), GalleryError> {
        if self.radius > MAX_RADIUS {
            return Err(GalleryError::Config(format!(
                "radius must be <= {MAX_RADIUS}, got {}",
                self.radius
            )));
        }
        let fields = [
            ("padding", self.padding),
            ("fit_scale", self.fit_scale),
            ("cull_margin", self.cull_margin),
            ("click_threshold", self.click_threshold),
            ("flip_duration", self.flip_duration),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(GalleryError::Config(format!("{name} must be finite and >= 0")));
            }
        }
        if self.flip_duration == 0.0 {
            return Err(GalleryError::Config("flip_duration must be > 0".into()));
        }
        if self.fit_scale == 0.0 {
            return Err(GalleryError::Config("fit_scale must be > 0".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn flip_duration(&self) -> Duration {
        Duration::from_secs_f32(self.flip_duration)
    }

    #[inline]
    pub fn max_frame_dt(&self) -> Duration {
        Duration::from_secs_f32(self.max_frame_dt)
    }

    /// `log_level` as a `log` filter, defaulting to `Info` when unrecognized.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
