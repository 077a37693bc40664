//! Face detector for the res10 single-shot (SSD) network.
//!
//! Handles blob preprocessing, the forward pass and decoding of the
//! `[1, 1, N, 7]` output table into pixel-space regions.

use std::sync::Arc;

use ndarray::Array4;

use crate::detection::domain::detection_tensor::DetectionTensor;
use crate::detection::domain::region_detector::RegionDetector;
use crate::inference::domain::inference_network::InferenceNetwork;
use crate::shared::constants::{
    DETECTOR_CONFIDENCE, DETECTOR_INPUT_SIZE, DETECTOR_MEAN_BGR, DETECTOR_SCALE,
};
use crate::shared::error::InferenceError;
use crate::shared::frame::Frame;
use crate::shared::region::DetectionRegion;

/// Default confidence threshold. Candidates must score strictly above it.
pub const DEFAULT_CONFIDENCE: f64 = DETECTOR_CONFIDENCE;

pub struct SsdRegionDetector {
    network: Arc<dyn InferenceNetwork>,
    confidence: f64,
}

impl SsdRegionDetector {
    pub fn new(network: Arc<dyn InferenceNetwork>, confidence: f64) -> Self {
        Self {
            network,
            confidence,
        }
    }

    pub fn with_defaults(network: Arc<dyn InferenceNetwork>) -> Self {
        Self::new(network, DEFAULT_CONFIDENCE)
    }
}

impl RegionDetector for SsdRegionDetector {
    fn detect(&self, frame: &Frame) -> Result<Vec<DetectionRegion>, InferenceError> {
        if frame.is_empty() {
            return Ok(Vec::new());
        }
        let (fw, fh) = (frame.width(), frame.height());

        // 1. Preprocess: resize to 300x300, BGR planes, mean subtraction
        let blob = preprocess(frame, DETECTOR_INPUT_SIZE);

        // 2. Inference
        let output = self.network.forward(blob)?;
        let tensor = DetectionTensor::from_output(self.network.name(), output)?;

        // 3. Confidence filter (in the tensor's precision) + geometry check
        let threshold = self.confidence as f32;
        let regions: Vec<DetectionRegion> = tensor
            .rows()
            .filter(|c| c.confidence > threshold)
            .filter_map(|c| {
                let region = c.region_in(fw, fh);
                if region.is_none() {
                    log::trace!("Dropping out-of-bounds detection {c:?} for {fw}x{fh} frame");
                }
                region
            })
            .collect();

        log::debug!(
            "Detector kept {} of {} candidates on {fw}x{fh} frame",
            regions.len(),
            tensor.len()
        );
        Ok(regions)
    }
}

/// Resize frame to `size × size` and build an NCHW blob in B, G, R plane
/// order with the detector means subtracted.
fn preprocess(frame: &Frame, size: usize) -> Array4<f32> {
    let resized = frame.resized(size as u32, size as u32);
    let src = resized.as_ndarray();
    Array4::from_shape_fn((1, 3, size, size), |(_, c, y, x)| {
        // Frames are RGB; plane 0 is blue.
        (src[[y, x, 2 - c]] as f32 - DETECTOR_MEAN_BGR[c]) * DETECTOR_SCALE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::infrastructure::replay_network::ReplayNetwork;
    use approx::assert_relative_eq;
    use ndarray::ArrayD;
    use rstest::rstest;

    /// `(confidence, x1, y1, x2, y2)` rows packed as a `[1, 1, N, 7]` tensor.
    fn detections(rows: &[(f32, f32, f32, f32, f32)]) -> ArrayD<f32> {
        let data = rows
            .iter()
            .flat_map(|&(conf, x1, y1, x2, y2)| [0.0, 1.0, conf, x1, y1, x2, y2])
            .collect();
        ArrayD::from_shape_vec(vec![1, 1, rows.len(), 7], data).unwrap()
    }

    fn detector(rows: &[(f32, f32, f32, f32, f32)]) -> (SsdRegionDetector, Arc<ReplayNetwork>) {
        let network = Arc::new(ReplayNetwork::new("detector", detections(rows)));
        (SsdRegionDetector::with_defaults(network.clone()), network)
    }

    #[test]
    fn test_preprocess_shape() {
        let frame = Frame::filled(600, 400, [128, 128, 128]);
        let blob = preprocess(&frame, 300);
        assert_eq!(blob.shape(), &[1, 3, 300, 300]);
    }

    #[test]
    fn test_preprocess_swaps_to_bgr_and_subtracts_means() {
        let frame = Frame::filled(50, 50, [10, 20, 30]);
        let blob = preprocess(&frame, 300);
        assert_relative_eq!(blob[[0, 0, 0, 0]], 30.0 - 104.0);
        assert_relative_eq!(blob[[0, 1, 150, 150]], 20.0 - 177.0);
        assert_relative_eq!(blob[[0, 2, 299, 299]], 10.0 - 123.0);
    }

    #[test]
    fn test_detect_feeds_fixed_size_blob() {
        let (det, network) = detector(&[]);
        det.detect(&Frame::filled(600, 337, [0, 0, 0])).unwrap();
        assert_eq!(network.calls(), 1);
        assert_eq!(network.last_input().unwrap().shape(), &[1, 3, 300, 300]);
    }

    #[test]
    fn test_no_detections_is_empty_not_error() {
        let (det, _) = detector(&[]);
        let regions = det.detect(&Frame::filled(600, 400, [0, 0, 0])).unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn test_coordinates_scale_by_input_frame_not_blob() {
        let (det, _) = detector(&[(0.9, 0.25, 0.25, 0.5, 0.5)]);
        let regions = det.detect(&Frame::filled(600, 400, [0, 0, 0])).unwrap();
        assert_eq!(regions, vec![DetectionRegion::new(150, 100, 150, 100)]);
    }

    #[rstest]
    #[case::at_threshold(0.2, 0)]
    #[case::just_above(0.2000001, 1)]
    #[case::below(0.1, 0)]
    #[case::zero(0.0, 0)]
    #[case::confident(0.99, 1)]
    fn test_confidence_is_strictly_greater(#[case] confidence: f32, #[case] expected: usize) {
        let (det, _) = detector(&[(confidence, 0.1, 0.1, 0.4, 0.4)]);
        let regions = det.detect(&Frame::filled(600, 400, [0, 0, 0])).unwrap();
        assert_eq!(regions.len(), expected);
    }

    #[test]
    fn test_custom_threshold() {
        let network = Arc::new(ReplayNetwork::new(
            "detector",
            detections(&[(0.6, 0.1, 0.1, 0.4, 0.4), (0.4, 0.5, 0.5, 0.9, 0.9)]),
        ));
        let det = SsdRegionDetector::new(network, 0.5);
        let regions = det.detect(&Frame::filled(100, 100, [0, 0, 0])).unwrap();
        assert_eq!(regions, vec![DetectionRegion::new(10, 10, 30, 30)]);
    }

    #[test]
    fn test_invalid_geometry_silently_dropped() {
        let (det, _) = detector(&[
            (0.9, 0.6, 0.1, 0.4, 0.5),  // inverted x
            (0.9, 0.1, 0.1, 1.3, 0.5),  // past right edge
            (0.9, -0.1, 0.1, 0.2, 0.5), // negative
            (0.9, 0.1, 0.1, 0.2, 0.5),  // valid
        ]);
        let regions = det.detect(&Frame::filled(100, 100, [0, 0, 0])).unwrap();
        assert_eq!(regions, vec![DetectionRegion::new(10, 10, 10, 40)]);
    }

    #[test]
    fn test_network_row_order_preserved() {
        let (det, _) = detector(&[
            (0.3, 0.7, 0.7, 0.9, 0.9),
            (0.95, 0.1, 0.1, 0.3, 0.3),
            (0.5, 0.4, 0.4, 0.6, 0.6),
        ]);
        let regions = det.detect(&Frame::filled(100, 100, [0, 0, 0])).unwrap();
        let xs: Vec<i32> = regions.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![70, 10, 40]);
    }

    #[test]
    fn test_regions_always_inside_frame() {
        let rows: Vec<_> = (0..40)
            .map(|i| {
                let t = i as f32 / 40.0;
                (0.5, t - 0.2, 1.1 - t, t + 0.1, t * 1.5)
            })
            .collect();
        let (det, _) = detector(&rows);
        for region in det.detect(&Frame::filled(600, 450, [0, 0, 0])).unwrap() {
            assert!(region.lies_within(600, 450), "{region:?} escapes frame");
        }
    }

    #[test]
    fn test_malformed_output_is_inference_error() {
        let network = Arc::new(ReplayNetwork::new("detector", ArrayD::zeros(vec![1, 1, 3, 5])));
        let det = SsdRegionDetector::with_defaults(network);
        let err = det.detect(&Frame::filled(100, 100, [0, 0, 0])).unwrap_err();
        assert!(matches!(err, InferenceError::UnexpectedShape { .. }));
    }
}
