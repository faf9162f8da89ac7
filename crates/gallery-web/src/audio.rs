use gallery_core::{AudioGraph, GalleryError, SpectrumTap, FFT_SIZE};
use wasm_bindgen::JsValue;
use web_sys as web;

fn graph_err(stage: &str, e: JsValue) -> GalleryError {
    GalleryError::AudioGraph(format!("{stage}: {e:?}"))
}

/// Context plus the element source. An element can be routed into WebAudio
/// only once, so this pair is kept across connect attempts.
#[derive(Clone)]
struct RoutedElement {
    audio_ctx: web::AudioContext,
    source: web::MediaElementAudioSourceNode,
}

/// The host's `<audio>` element and, once routed, its WebAudio source.
pub struct MediaElementGraph {
    element: web::HtmlMediaElement,
    routed: Option<RoutedElement>,
}

impl MediaElementGraph {
    pub fn new(element: web::HtmlMediaElement) -> Self {
        Self {
            element,
            routed: None,
        }
    }

    fn route(&mut self) -> Result<RoutedElement, GalleryError> {
        if let Some(r) = &self.routed {
            return Ok(r.clone());
        }
        let audio_ctx = web::AudioContext::new().map_err(|e| graph_err("AudioContext", e))?;
        let source = match audio_ctx.create_media_element_source(&self.element) {
            Ok(s) => s,
            Err(e) => {
                // Nothing holds the context past this point.
                let _ = audio_ctx.close();
                return Err(graph_err("MediaElementSource", e));
            }
        };
        let routed = RoutedElement { audio_ctx, source };
        self.routed = Some(routed.clone());
        Ok(routed)
    }
}

/// element -> analyser -> destination, so playback stays audible.
pub struct WebAnalyserTap {
    audio_ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    _source: web::MediaElementAudioSourceNode,
}

impl AudioGraph for MediaElementGraph {
    type Tap = WebAnalyserTap;

    /// Later failures keep the routed context for the next attempt.
    fn connect(&mut self) -> Result<WebAnalyserTap, GalleryError> {
        let RoutedElement { audio_ctx, source } = self.route()?;
        let analyser = audio_ctx
            .create_analyser()
            .map_err(|e| graph_err("AnalyserNode", e))?;
        analyser.set_fft_size(FFT_SIZE);
        source
            .connect_with_audio_node(&analyser)
            .map_err(|e| graph_err("source->analyser", e))?;
        analyser
            .connect_with_audio_node(&audio_ctx.destination())
            .map_err(|e| graph_err("analyser->destination", e))?;
        // Contexts created outside a gesture start suspended.
        let _ = audio_ctx.resume();
        Ok(WebAnalyserTap {
            audio_ctx,
            analyser,
            _source: source,
        })
    }
}

impl SpectrumTap for WebAnalyserTap {
    fn sample_rate(&self) -> f32 {
        self.audio_ctx.sample_rate()
    }

    fn bin_count(&self) -> usize {
        self.analyser.frequency_bin_count() as usize
    }

    fn read_byte_frequencies(&self, out: &mut [u8]) {
        self.analyser.get_byte_frequency_data(out);
    }
}
