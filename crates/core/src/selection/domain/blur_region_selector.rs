use crate::embedding::domain::face_embedding::{AllowList, FaceEmbedding};
use crate::shared::region::ImageRegion;

/// Decides which embedded faces get blurred.
///
/// Allow-list matching (keeping known faces visible) belongs in an
/// implementation of this trait; the similarity rule and its threshold are
/// not defined yet.
pub trait BlurRegionSelector: Send + Sync {
    fn select(&self, faces: &[FaceEmbedding], allow_list: &AllowList) -> Vec<ImageRegion>;
}
