//! Band-energy extraction from a live spectrum.
//!
//! The platform side provides an [`AudioGraph`] that knows how to wire an
//! analyser into its audio pipeline. [`SignalAnalyzer`] owns the one-time
//! connection and reduces each spectrum read to a [`BandEnergy`].

use crate::error::GalleryError;

/// Half-open frequency ranges in Hz: sub, low, mid, high.
pub const BANDS_HZ: [(f32, f32); 4] = [
    (20.0, 60.0),
    (60.0, 250.0),
    (250.0, 2000.0),
    (2000.0, 20000.0),
];

/// FFT size requested from the platform analyser.
pub const FFT_SIZE: u32 = 2048;

/// Mean normalized magnitude per band, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BandEnergy {
    pub sub: f32,
    pub low: f32,
    pub mid: f32,
    pub high: f32,
}

impl BandEnergy {
    pub const ZERO: BandEnergy = BandEnergy {
        sub: 0.0,
        low: 0.0,
        mid: 0.0,
        high: 0.0,
    };

    pub fn as_array(&self) -> [f32; 4] {
        [self.sub, self.low, self.mid, self.high]
    }
}

/// Average byte magnitudes (0..=255) into the four bands.
///
/// Bin `i` sits at `i * nyquist / bins.len()`. Bins outside every band are
/// ignored and a band with no bins reads as 0.
pub fn band_energies(bins: &[u8], sample_rate: f32) -> BandEnergy {
    if bins.is_empty() || sample_rate.is_nan() || sample_rate <= 0.0 {
        return BandEnergy::ZERO;
    }
    let nyquist = sample_rate / 2.0;
    let bin_width = nyquist / bins.len() as f32;

    let mut sums = [0.0_f32; 4];
    let mut counts = [0_u32; 4];
    for (i, &b) in bins.iter().enumerate() {
        let freq = i as f32 * bin_width;
        if let Some(band) = BANDS_HZ
            .iter()
            .position(|&(lo, hi)| freq >= lo && freq < hi)
        {
            sums[band] += b as f32 / 255.0;
            counts[band] += 1;
        }
    }
    let avg = |k: usize| {
        if counts[k] > 0 {
            sums[k] / counts[k] as f32
        } else {
            0.0
        }
    };
    BandEnergy {
        sub: avg(0),
        low: avg(1),
        mid: avg(2),
        high: avg(3),
    }
}

/// A connected analyser that can be sampled.
pub trait SpectrumTap {
    fn sample_rate(&self) -> f32;
    fn bin_count(&self) -> usize;
    /// Fill `out` (already `bin_count` long) with byte magnitudes.
    fn read_byte_frequencies(&self, out: &mut [u8]);
}

/// Platform audio pipeline that can produce a [`SpectrumTap`] once.
pub trait AudioGraph {
    type Tap: SpectrumTap;
    fn connect(&mut self) -> Result<Self::Tap, GalleryError>;
}

pub struct SignalAnalyzer<G: AudioGraph> {
    graph: G,
    tap: Option<G::Tap>,
    buf: Vec<u8>,
}

impl<G: AudioGraph> SignalAnalyzer<G> {
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            tap: None,
            buf: Vec::new(),
        }
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.tap.is_some()
    }

    /// Wire the analyser into the audio graph. Must be called from a user
    /// gesture on platforms that gate audio. No-op once connected; a failed
    /// attempt leaves the analyzer unconnected so a later gesture can retry.
    pub fn connect(&mut self) {
        if self.tap.is_some() {
            return;
        }
        match self.graph.connect() {
            Ok(tap) => {
                self.buf.resize(tap.bin_count(), 0);
                log::info!(
                    "[analyzer] connected bins={} rate={}",
                    tap.bin_count(),
                    tap.sample_rate()
                );
                self.tap = Some(tap);
            }
            Err(e) => log::error!("[analyzer] connect failed: {}", e),
        }
    }

    /// Current band energies, or zeros when not connected.
    pub fn get_analysis(&mut self) -> BandEnergy {
        let Some(tap) = &self.tap else {
            return BandEnergy::ZERO;
        };
        let bins = tap.bin_count();
        if self.buf.len() != bins {
            self.buf.resize(bins, 0);
        }
        tap.read_byte_frequencies(&mut self.buf);
        band_energies(&self.buf, tap.sample_rate())
    }
}
