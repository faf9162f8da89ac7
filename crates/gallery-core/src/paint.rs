//! Drawing surface abstraction.
//!
//! The gallery issues canvas-style immediate-mode calls through [`Painter`].
//! Coordinates are CSS pixels; the implementation owns the device pixel
//! ratio transform.

use crate::item::ItemId;
use glam::Vec2;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);
    pub const PLACEHOLDER: Rgba = Rgba::rgb(0x2b, 0x2b, 0x2b);
    pub const HONEY: Rgba = Rgba::rgb(0xe4, 0xa0, 0x10);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Parse `#rrggbb` or `#rgb`, ignoring surrounding whitespace.
    pub fn parse_hex(s: &str) -> Option<Rgba> {
        let hex = s.trim().strip_prefix('#')?;
        let digit = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
        let pair = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Rgba::rgb(pair(0)?, pair(2)?, pair(4)?)),
            3 => Some(Rgba::rgb(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
            _ => None,
        }
    }
}

impl fmt::Display for Rgba {
    /// CSS `rgba(...)` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// A `target`-sized rect centered on the origin that an image of
    /// `image` size covers completely, preserving aspect ratio.
    pub fn cover(image: Vec2, target: Vec2) -> Self {
        let scale = (target.x / image.x).max(target.y / image.y);
        let size = image * scale;
        Self {
            origin: -size / 2.0,
            size,
        }
    }
}

/// Shadow used as a soft glow around strokes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Rgba,
    pub blur: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font: &'static str,
    pub color: Rgba,
    pub align: TextAlign,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub inner: Rgba,
    pub outer: Rgba,
}

/// Colors the host can restyle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub accent: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Rgba::HONEY,
        }
    }
}

pub trait Painter {
    /// Current backing store size in device pixels.
    fn backing_size(&self) -> (u32, u32);
    /// Reallocate the backing store and reset the transform to `dpr`.
    fn resize(&mut self, width_px: u32, height_px: u32, dpr: f32);

    fn clear(&mut self, width: f32, height: f32);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, sx: f32, sy: f32);
    fn set_alpha(&mut self, alpha: f32);
    fn set_glow(&mut self, glow: Option<Glow>);

    /// Replace the current path with a closed polygon.
    fn polygon(&mut self, points: &[Vec2]);
    /// Replace the current path with a rounded rectangle.
    fn rounded_rect(&mut self, rect: Rect, radius: f32);
    fn fill(&mut self, color: Rgba);
    fn stroke(&mut self, color: Rgba, width: f32);
    fn clip(&mut self);

    /// Natural size of the loaded artwork for `id`, if any.
    fn artwork_size(&self, id: &ItemId) -> Option<Vec2>;
    fn draw_artwork(&mut self, id: &ItemId, dest: Rect);

    fn measure_text(&mut self, text: &str, font: &'static str) -> f32;
    /// Draw text vertically centered on `at.y`.
    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle);

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, area: Rect);
}
