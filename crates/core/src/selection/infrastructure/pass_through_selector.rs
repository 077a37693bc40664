use crate::embedding::domain::face_embedding::{AllowList, FaceEmbedding};
use crate::selection::domain::blur_region_selector::BlurRegionSelector;
use crate::shared::region::ImageRegion;

/// Blurs every detected face, in detection order. The allow list is ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassThroughSelector;

impl BlurRegionSelector for PassThroughSelector {
    fn select(&self, faces: &[FaceEmbedding], _allow_list: &AllowList) -> Vec<ImageRegion> {
        faces.iter().map(|face| face.region).collect()
    }
}
