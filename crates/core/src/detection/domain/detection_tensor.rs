//! Decoding of the SSD detector's raw output.
//!
//! The network emits a `[batch, 1, N, 7]` tensor; each of the `N` rows is
//! `[batch, class, confidence, x1, y1, x2, y2]` with corners normalized to
//! `[0, 1]`.

use ndarray::{Array2, ArrayD, ArrayView1};

use crate::shared::constants::DETECTION_ROW_LEN;
use crate::shared::error::InferenceError;
use crate::shared::region::DetectionRegion;

/// One row of the detector output table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandidateDetection {
    pub batch: f32,
    pub class: f32,
    pub confidence: f32,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CandidateDetection {
    fn from_row(row: ArrayView1<'_, f32>) -> Self {
        Self {
            batch: row[0],
            class: row[1],
            confidence: row[2],
            x1: row[3],
            y1: row[4],
            x2: row[5],
            y2: row[6],
        }
    }

    /// Pixel rectangle in a `width × height` image, or `None` when the
    /// corners are inverted or fall outside the image.
    ///
    /// Normalized coordinates are scaled in `f32` and truncated toward zero.
    pub fn region_in(&self, width: u32, height: u32) -> Option<DetectionRegion> {
        let x1 = (self.x1 * width as f32) as i32;
        let y1 = (self.y1 * height as f32) as i32;
        let x2 = (self.x2 * width as f32) as i32;
        let y2 = (self.y2 * height as f32) as i32;

        let (w, h) = (width as i32, height as i32);
        let in_x = |v: i32| (0..=w).contains(&v);
        let in_y = |v: i32| (0..=h).contains(&v);
        if x1 > x2 || y1 > y2 || !in_x(x1) || !in_x(x2) || !in_y(y1) || !in_y(y2) {
            return None;
        }
        Some(DetectionRegion::from_corners(x1, y1, x2, y2))
    }
}

/// The detector output viewed as an `N × 7` table.
#[derive(Clone, Debug)]
pub struct DetectionTensor {
    table: Array2<f32>,
}

impl DetectionTensor {
    /// Accepts any 4-D tensor whose last axis holds the seven row fields.
    pub fn from_output(network: &str, output: ArrayD<f32>) -> Result<Self, InferenceError> {
        let shape = output.shape().to_vec();
        let unexpected = || InferenceError::UnexpectedShape {
            network: network.to_string(),
            shape: shape.clone(),
            expected: "[batch, 1, N, 7]",
        };
        if shape.len() != 4 || shape[3] != DETECTION_ROW_LEN {
            return Err(unexpected());
        }
        let rows = output.len() / DETECTION_ROW_LEN;
        let table = output
            .as_standard_layout()
            .into_owned()
            .into_shape_with_order((rows, DETECTION_ROW_LEN))
            .map_err(|_| unexpected())?;
        Ok(Self { table })
    }

    pub fn len(&self) -> usize {
        self.table.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.table.nrows() == 0
    }

    /// Rows in network order.
    pub fn rows(&self) -> impl Iterator<Item = CandidateDetection> + '_ {
        self.table.rows().into_iter().map(CandidateDetection::from_row)
    }
}
