//! Per-frame face anonymization.
//!
//! A frame is decoded, faces are located by an SSD detector on a 600-pixel
//! wide copy, each face is embedded, the faces to hide are selected and their
//! regions are blurred in the original frame before it is re-encoded.
//! [`pipeline::frame_anonymizer::FrameAnonymizer`] is the entry point.

pub mod blurring {
    pub mod domain {
        pub mod frame_blurrer;
    }
    pub mod infrastructure;
}

pub mod codec {
    pub mod domain {
        pub mod frame_codec;
    }
    pub mod infrastructure;
}

pub mod detection {
    pub mod domain {
        pub mod detection_tensor;
        pub mod region_detector;
    }
    pub mod infrastructure;
}

pub mod embedding {
    pub mod domain {
        pub mod face_embedding;
    }
    pub mod infrastructure;
}

pub mod inference {
    pub mod domain {
        pub mod face_networks;
        pub mod inference_network;
    }
    pub mod infrastructure;
}

pub mod pipeline {
    pub mod frame_anonymizer;
}

pub mod selection {
    pub mod domain {
        pub mod blur_region_selector;
    }
    pub mod infrastructure;
}

pub mod shared {
    pub mod constants;
    pub mod error;
    pub mod frame;
    pub mod region;
}

pub use inference::domain::face_networks::FaceNetworks;
pub use pipeline::frame_anonymizer::FrameAnonymizer;
pub use shared::error::{CodecError, InferenceError, ModelLoadError, PipelineError};
