/// Side of the square detector input blob.
pub const DETECTOR_INPUT_SIZE: usize = 300;

/// Per-channel means subtracted from detector input, in B, G, R order.
pub const DETECTOR_MEAN_BGR: [f32; 3] = [104.0, 177.0, 123.0];

/// Detector input pixel scale.
pub const DETECTOR_SCALE: f32 = 1.0;

/// Candidates at or below this confidence are discarded.
pub const DETECTOR_CONFIDENCE: f64 = 0.2;

/// Columns of one detector output row: batch, class, confidence, x1, y1, x2, y2.
pub const DETECTION_ROW_LEN: usize = 7;

/// Width the frame is resized to before detection.
pub const DETECTION_IMAGE_WIDTH: u32 = 600;

/// Faces narrower or shorter than this (detection-space pixels) are not embedded.
pub const MIN_FACE_SIZE: i32 = 20;

/// Side of the square embedder input blob.
pub const EMBEDDER_INPUT_SIZE: usize = 96;

/// Embedder input pixel scale.
pub const EMBEDDER_SCALE: f32 = 1.0 / 255.0;

/// Smoothing kernel side used to anonymize a face region.
pub const BLUR_KERNEL_SIZE: usize = 80;
