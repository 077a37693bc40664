use std::io::Cursor;

use crate::codec::domain::frame_codec::FrameCodec;
use crate::shared::error::CodecError;
use crate::shared::frame::Frame;

/// What [`ImageCodec::encode`] produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputEncoding {
    /// The frame's flat pixel buffer: row-major, RGB-interleaved, no padding.
    #[default]
    Raw,
    /// A PNG file in memory.
    Png,
}

/// Frame codec backed by the `image` crate.
///
/// Decodes any format the crate recognizes (PNG, JPEG, BMP, WebP, ...) into
/// RGB8, dropping alpha.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCodec {
    output: OutputEncoding,
}

impl ImageCodec {
    pub fn new(output: OutputEncoding) -> Self {
        Self { output }
    }
}

impl FrameCodec for ImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Frame, CodecError> {
        let img = image::load_from_memory(bytes)
            .map_err(CodecError::Decode)?
            .to_rgb8();
        let (width, height) = img.dimensions();
        Ok(Frame::new(img.into_raw(), width, height))
    }

    fn encode(&self, frame: &Frame) -> Result<Vec<u8>, CodecError> {
        match self.output {
            // Frames own a single contiguous buffer, so this is already the
            // gap-free layout callers expect.
            OutputEncoding::Raw => Ok(frame.data().to_vec()),
            OutputEncoding::Png => {
                let img =
                    image::RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
                        .ok_or(CodecError::Layout {
                            len: frame.data().len(),
                            width: frame.width(),
                            height: frame.height(),
                        })?;
                let mut out = Cursor::new(Vec::new());
                img.write_to(&mut out, image::ImageFormat::Png)
                    .map_err(CodecError::Encode)?;
                Ok(out.into_inner())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Frame {
        let data = (0..height)
            .flat_map(|y| (0..width).flat_map(move |x| [x as u8, y as u8, (x + y) as u8]))
            .collect();
        Frame::new(data, width, height)
    }

    fn png_bytes(frame: &Frame) -> Vec<u8> {
        ImageCodec::new(OutputEncoding::Png).encode(frame).unwrap()
    }

    #[test]
    fn test_decode_png() {
        let frame = gradient(20, 10);
        let decoded = ImageCodec::default().decode(&png_bytes(&frame)).unwrap();
        assert_eq!(decoded, frame);
    }

    #[test]
    fn test_decode_drops_alpha() {
        let rgba = image::RgbaImage::from_pixel(4, 3, image::Rgba([10, 20, 30, 40]));
        let mut bytes = Cursor::new(Vec::new());
        rgba.write_to(&mut bytes, image::ImageFormat::Png).unwrap();

        let frame = ImageCodec::default().decode(bytes.get_ref()).unwrap();
        assert_eq!(frame.data().len(), 4 * 3 * 3);
        assert!(frame.data().chunks(3).all(|px| px == [10, 20, 30]));
    }

    #[test]
    fn test_decode_garbage_is_error() {
        let err = ImageCodec::default().decode(b"not an image").unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    #[test]
    fn test_decode_empty_is_error() {
        assert!(ImageCodec::default().decode(&[]).is_err());
    }

    #[test]
    fn test_raw_encode_is_flat_interleaved_buffer() {
        let frame = gradient(3, 2);
        let raw = ImageCodec::default().encode(&frame).unwrap();
        assert_eq!(raw.len(), 3 * 2 * 3);
        // row 1, column 2 → [x, y, x + y]
        assert_eq!(&raw[(3 + 2) * 3..(3 + 2) * 3 + 3], &[2, 1, 3]);
    }

    #[test]
    fn test_png_encode_has_signature() {
        let png = png_bytes(&gradient(8, 8));
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
