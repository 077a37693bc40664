use crate::shared::region::ImageRegion;

/// A face feature vector together with the image-space region it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceEmbedding {
    pub features: Vec<f32>,
    pub region: ImageRegion,
}

impl FaceEmbedding {
    pub fn new(features: Vec<f32>, region: ImageRegion) -> Self {
        Self { features, region }
    }
}

/// Reference embeddings of faces that must stay unblurred.
///
/// The pipeline always passes an empty list; no matching rule is defined yet.
/// Selectors that implement matching read the vectors through [`Self::references`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AllowList {
    references: Vec<Vec<f32>>,
}

impl AllowList {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(references: Vec<Vec<f32>>) -> Self {
        Self { references }
    }

    pub fn references(&self) -> &[Vec<f32>] {
        &self.references
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}
