// Host-side tests for band extraction and the analyzer lifecycle, driven by
// a scripted audio graph.

use gallery_core::*;
use std::cell::Cell;
use std::rc::Rc;

// 40960 Hz over 1024 bins puts bin i at exactly i * 20 Hz.
const RATE: f32 = 40_960.0;
const BINS: usize = 1024;

struct ScriptedTap {
    rate: f32,
    bins: Vec<u8>,
}

impl SpectrumTap for ScriptedTap {
    fn sample_rate(&self) -> f32 {
        self.rate
    }

    fn bin_count(&self) -> usize {
        self.bins.len()
    }

    fn read_byte_frequencies(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.bins);
    }
}

struct ScriptedGraph {
    attempts: Rc<Cell<u32>>,
    failures_left: u32,
    bins: Vec<u8>,
}

impl AudioGraph for ScriptedGraph {
    type Tap = ScriptedTap;

    fn connect(&mut self) -> Result<ScriptedTap, GalleryError> {
        self.attempts.set(self.attempts.get() + 1);
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(GalleryError::AudioGraph("context blocked".into()));
        }
        Ok(ScriptedTap {
            rate: RATE,
            bins: self.bins.clone(),
        })
    }
}

fn analyzer(bins: Vec<u8>, failures: u32) -> (SignalAnalyzer<ScriptedGraph>, Rc<Cell<u32>>) {
    let attempts = Rc::new(Cell::new(0));
    let graph = ScriptedGraph {
        attempts: attempts.clone(),
        failures_left: failures,
        bins,
    };
    (SignalAnalyzer::new(graph), attempts)
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn full_scale_spectrum_reads_one_everywhere() {
    let e = band_energies(&[255; BINS], RATE);
    for v in e.as_array() {
        assert!(close(v, 1.0), "{e:?}");
    }
}

#[test]
fn bands_average_their_own_bins() {
    let mut bins = vec![0u8; BINS];
    // sub: 20 Hz and 40 Hz
    bins[1] = 255;
    bins[2] = 0;
    // low: 60..=240 Hz
    for b in &mut bins[3..=12] {
        *b = 51;
    }
    // high: 2000..=19980 Hz
    for b in &mut bins[100..=999] {
        *b = 255;
    }
    let e = band_energies(&bins, RATE);
    assert!(close(e.sub, 0.5), "sub {}", e.sub);
    assert!(close(e.low, 0.2), "low {}", e.low);
    assert!(close(e.mid, 0.0), "mid {}", e.mid);
    assert!(close(e.high, 1.0), "high {}", e.high);
}

#[test]
fn bins_outside_every_band_are_ignored() {
    let mut bins = vec![0u8; BINS];
    bins[0] = 255;
    for b in &mut bins[1000..] {
        *b = 255;
    }
    assert_eq!(band_energies(&bins, RATE), BandEnergy::ZERO);
}

#[test]
fn band_with_no_bins_reads_zero() {
    // 8 bins over 4 kHz sit at multiples of 500 Hz: nothing below 250 Hz
    // except the ignored DC bin.
    let e = band_energies(&[255; 8], 8_000.0);
    assert_eq!(e.sub, 0.0);
    assert_eq!(e.low, 0.0);
    assert!(close(e.mid, 1.0));
    assert!(close(e.high, 1.0));
}

#[test]
fn degenerate_inputs_read_zero() {
    assert_eq!(band_energies(&[], RATE), BandEnergy::ZERO);
    assert_eq!(band_energies(&[200; 16], 0.0), BandEnergy::ZERO);
    assert_eq!(band_energies(&[200; 16], -1.0), BandEnergy::ZERO);
    assert_eq!(band_energies(&[200; 16], f32::NAN), BandEnergy::ZERO);
}

#[test]
fn energies_stay_in_unit_range() {
    let bins: Vec<u8> = (0..BINS).map(|i| (i * 37 % 256) as u8).collect();
    let e = band_energies(&bins, 48_000.0);
    for v in e.as_array() {
        assert!((0.0..=1.0).contains(&v), "{e:?}");
    }
}

#[test]
fn unconnected_analyzer_reads_zero_without_touching_graph() {
    let (mut a, attempts) = analyzer(vec![255; BINS], 0);
    assert!(!a.is_connected());
    assert_eq!(a.get_analysis(), BandEnergy::ZERO);
    assert_eq!(attempts.get(), 0);
}

#[test]
fn connect_is_idempotent() {
    let (mut a, attempts) = analyzer(vec![255; BINS], 0);
    a.connect();
    a.connect();
    a.connect();
    assert!(a.is_connected());
    assert_eq!(attempts.get(), 1);
    assert!(close(a.get_analysis().high, 1.0));
}

#[test]
fn failed_connect_can_be_retried() {
    let (mut a, attempts) = analyzer(vec![255; BINS], 1);
    a.connect();
    assert!(!a.is_connected());
    assert_eq!(a.get_analysis(), BandEnergy::ZERO);

    a.connect();
    assert!(a.is_connected());
    assert_eq!(attempts.get(), 2);
    assert!(close(a.get_analysis().sub, 1.0));
}

#[test]
fn fft_size_and_bands_are_fixed() {
    assert_eq!(FFT_SIZE, 2048);
    assert_eq!(BANDS_HZ[0], (20.0, 60.0));
    assert_eq!(BANDS_HZ[3], (2000.0, 20000.0));
}

// Routes its source once and reuses it on later attempts, failing the
// analyser stage until `failures_left` runs out.
struct RoutedGraph {
    sources_created: Rc<Cell<u32>>,
    routed: bool,
    failures_left: u32,
}

impl AudioGraph for RoutedGraph {
    type Tap = ScriptedTap;

    fn connect(&mut self) -> Result<ScriptedTap, GalleryError> {
        if !self.routed {
            self.sources_created.set(self.sources_created.get() + 1);
            self.routed = true;
        }
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(GalleryError::AudioGraph("analyser stage".into()));
        }
        Ok(ScriptedTap {
            rate: RATE,
            bins: vec![255; BINS],
        })
    }
}

#[test]
fn retries_reuse_the_routed_source() {
    let sources = Rc::new(Cell::new(0));
    let mut a = SignalAnalyzer::new(RoutedGraph {
        sources_created: sources.clone(),
        routed: false,
        failures_left: 2,
    });
    a.connect();
    a.connect();
    assert!(!a.is_connected());
    a.connect();
    assert!(a.is_connected());
    assert_eq!(sources.get(), 1);
}
