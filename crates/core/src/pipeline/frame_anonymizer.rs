use std::time::Instant;

use crate::blurring::domain::frame_blurrer::FrameBlurrer;
use crate::blurring::infrastructure::cpu_rectangular_blurrer::CpuRectangularBlurrer;
use crate::codec::domain::frame_codec::FrameCodec;
use crate::codec::infrastructure::image_codec::ImageCodec;
use crate::detection::infrastructure::ssd_region_detector::SsdRegionDetector;
use crate::embedding::domain::face_embedding::AllowList;
use crate::embedding::infrastructure::embedding_extractor::EmbeddingExtractor;
use crate::inference::domain::face_networks::FaceNetworks;
use crate::selection::domain::blur_region_selector::BlurRegionSelector;
use crate::selection::infrastructure::pass_through_selector::PassThroughSelector;
use crate::shared::error::{InferenceError, PipelineError};
use crate::shared::frame::Frame;
use crate::shared::region::ImageRegion;

/// Single-frame anonymizing pipeline: decode → extract → select → blur → encode.
///
/// Stateless between calls; one instance can serve frames from several
/// threads, with forward passes serialized per network by the network handles.
pub struct FrameAnonymizer {
    codec: Box<dyn FrameCodec>,
    extractor: EmbeddingExtractor,
    selector: Box<dyn BlurRegionSelector>,
    blurrer: Box<dyn FrameBlurrer>,
}

impl FrameAnonymizer {
    /// Default wiring: SSD detector, pass-through selection, 80×80 box blur,
    /// raw pixel output.
    pub fn new(networks: &FaceNetworks) -> Self {
        let detector = SsdRegionDetector::with_defaults(networks.detector.clone());
        let extractor =
            EmbeddingExtractor::with_defaults(Box::new(detector), networks.embedder.clone());
        Self::from_parts(
            Box::new(ImageCodec::default()),
            extractor,
            Box::new(PassThroughSelector),
            Box::new(CpuRectangularBlurrer::default()),
        )
    }

    pub fn from_parts(
        codec: Box<dyn FrameCodec>,
        extractor: EmbeddingExtractor,
        selector: Box<dyn BlurRegionSelector>,
        blurrer: Box<dyn FrameBlurrer>,
    ) -> Self {
        Self {
            codec,
            extractor,
            selector,
            blurrer,
        }
    }

    /// Decodes `encoded`, blurs every face and re-encodes the result.
    ///
    /// `output_hint` (historically a file name) does not affect processing.
    /// On error the frame is dropped; nothing is retried.
    pub fn process_frame(
        &self,
        encoded: &[u8],
        output_hint: &str,
    ) -> Result<Vec<u8>, PipelineError> {
        let started = Instant::now();
        let mut frame = self.codec.decode(encoded)?;
        let regions = self.anonymize(&mut frame)?;
        let output = self.codec.encode(&frame)?;

        log::debug!(
            "Frame {output_hint:?} ({}x{}): blurred {} regions in {:.1}ms",
            frame.width(),
            frame.height(),
            regions.len(),
            started.elapsed().as_secs_f64() * 1000.0
        );
        Ok(output)
    }

    /// Runs the pixel pipeline on a decoded frame in place.
    ///
    /// Returns the image-space regions that were blurred, in blur order.
    pub fn anonymize(&self, frame: &mut Frame) -> Result<Vec<ImageRegion>, InferenceError> {
        let started = Instant::now();
        let faces = self.extractor.extract(frame)?;
        let extract_ms = started.elapsed().as_secs_f64() * 1000.0;

        let regions = self.selector.select(&faces, &AllowList::empty());

        let started = Instant::now();
        self.blurrer.blur(frame, &regions);
        log::trace!(
            "extract {extract_ms:.1}ms, blur {:.1}ms",
            started.elapsed().as_secs_f64() * 1000.0
        );
        Ok(regions)
    }
}
