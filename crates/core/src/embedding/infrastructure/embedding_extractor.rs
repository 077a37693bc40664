//! Per-face embedding extraction on top of a region detector.
//!
//! Resizes the frame to a fixed detection width, detects faces there, embeds
//! each large-enough crop and maps its region back to image space.

use std::sync::Arc;

use ndarray::Array4;

use crate::detection::domain::region_detector::RegionDetector;
use crate::embedding::domain::face_embedding::FaceEmbedding;
use crate::inference::domain::inference_network::InferenceNetwork;
use crate::shared::constants::{
    DETECTION_IMAGE_WIDTH, EMBEDDER_INPUT_SIZE, EMBEDDER_SCALE, MIN_FACE_SIZE,
};
use crate::shared::error::InferenceError;
use crate::shared::frame::Frame;
use crate::shared::region::{DetectionRegion, ResizeScale};

pub struct EmbeddingExtractor {
    detector: Box<dyn RegionDetector>,
    embedder: Arc<dyn InferenceNetwork>,
    target_width: u32,
    min_face_size: i32,
}

impl EmbeddingExtractor {
    pub fn new(
        detector: Box<dyn RegionDetector>,
        embedder: Arc<dyn InferenceNetwork>,
        target_width: u32,
        min_face_size: i32,
    ) -> Self {
        Self {
            detector,
            embedder,
            target_width,
            min_face_size,
        }
    }

    /// 600-pixel detection width, 20-pixel minimum face.
    pub fn with_defaults(
        detector: Box<dyn RegionDetector>,
        embedder: Arc<dyn InferenceNetwork>,
    ) -> Self {
        Self::new(detector, embedder, DETECTION_IMAGE_WIDTH, MIN_FACE_SIZE)
    }

    /// Embeds every detected face of `frame`, in detector order.
    ///
    /// Faces smaller than the minimum size in detection space are skipped.
    /// Returned regions are in the coordinate space of `frame`.
    pub fn extract(&self, frame: &Frame) -> Result<Vec<FaceEmbedding>, InferenceError> {
        if frame.is_empty() {
            return Ok(Vec::new());
        }

        let scale = ResizeScale::for_width(frame.width(), frame.height(), self.target_width);
        let (rw, rh) = scale.resized_size();
        let resized = frame.resized(rw, rh);

        let regions = self.detector.detect(&resized)?;
        let mut faces = Vec::with_capacity(regions.len());
        for region in &regions {
            if region.width < self.min_face_size || region.height < self.min_face_size {
                log::trace!("Skipping undersized face {region:?}");
                continue;
            }
            if !region.lies_within(rw, rh) {
                log::trace!("Skipping face outside {rw}x{rh} detection frame {region:?}");
                continue;
            }
            let features = self.embed(&resized, region)?;
            faces.push(FaceEmbedding::new(features, scale.rescale(region)));
        }

        log::debug!(
            "Embedded {} of {} detected faces (scale {:.3})",
            faces.len(),
            regions.len(),
            scale.factor()
        );
        Ok(faces)
    }

    fn embed(&self, resized: &Frame, region: &DetectionRegion) -> Result<Vec<f32>, InferenceError> {
        // Caller checked `lies_within` on the resized frame.
        let face = resized.cropped(
            region.x as u32,
            region.y as u32,
            region.width as u32,
            region.height as u32,
        );
        let output = self.embedder.forward(preprocess(&face, EMBEDDER_INPUT_SIZE))?;
        Ok(output.iter().copied().collect())
    }
}

/// Resize face crop to `size × size`, scale to [0,1], NCHW in R, G, B plane order.
fn preprocess(face: &Frame, size: usize) -> Array4<f32> {
    let resized = face.resized(size as u32, size as u32);
    let src = resized.as_ndarray();
    Array4::from_shape_fn((1, 3, size, size), |(_, c, y, x)| {
        src[[y, x, c]] as f32 * EMBEDDER_SCALE
    })
}
