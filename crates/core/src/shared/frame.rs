use ndarray::ArrayView3;

/// Interleaved channels per pixel. Frames are always RGB8.
pub const CHANNELS: usize = 3;

/// A single decoded image frame: contiguous RGB bytes in row-major order.
///
/// Format conversion happens at codec boundaries only; the buffer is never
/// strided, so handing it back to a caller never needs a compaction copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * CHANNELS,
            "data length must equal width * height * 3"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// A frame filled with a single RGB color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let data = rgb
            .iter()
            .copied()
            .cycle()
            .take((width as usize) * (height as usize) * CHANNELS)
            .collect();
        Self::new(data, width, height)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> usize {
        CHANNELS
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    /// Resamples the frame to `width × height` with a triangle (bilinear) filter.
    pub fn resized(&self, width: u32, height: u32) -> Frame {
        if width == self.width && height == self.height {
            return self.clone();
        }
        let view = image::ImageBuffer::<image::Rgb<u8>, &[u8]>::from_raw(
            self.width,
            self.height,
            &self.data[..],
        )
        .expect("Frame data length must match dimensions");
        let resized =
            image::imageops::resize(&view, width, height, image::imageops::FilterType::Triangle);
        Frame::new(resized.into_raw(), width, height)
    }

    /// Copies the `width × height` block whose top-left corner is `(x, y)`.
    ///
    /// The block must lie inside the frame.
    pub fn cropped(&self, x: u32, y: u32, width: u32, height: u32) -> Frame {
        debug_assert!(x + width <= self.width && y + height <= self.height);
        let fw = self.width as usize;
        let row_len = width as usize * CHANNELS;
        let mut data = Vec::with_capacity(row_len * height as usize);
        for row in 0..height as usize {
            let offset = ((y as usize + row) * fw + x as usize) * CHANNELS;
            data.extend_from_slice(&self.data[offset..offset + row_len]);
        }
        Frame::new(data, width, height)
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, CHANNELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 12]; // 2x2x3
        let frame = Frame::new(data.clone(), 2, 2);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.channels(), 3);
        assert_eq!(frame.data(), &data[..]);
    }

    #[test]
    fn test_data_mut_allows_modification() {
        let mut frame = Frame::new(vec![0u8; 6], 2, 1);
        frame.data_mut()[0] = 255;
        assert_eq!(frame.data()[0], 255);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * 3")]
    fn test_mismatched_data_length_panics_in_debug() {
        Frame::new(vec![0u8; 10], 2, 2);
    }

    #[test]
    fn test_filled_repeats_color() {
        let frame = Frame::filled(3, 2, [1, 2, 3]);
        assert_eq!(frame.data().len(), 18);
        assert!(frame.data().chunks(3).all(|px| px == [1, 2, 3]));
    }

    #[test]
    fn test_as_ndarray_pixel_access() {
        // 2x2 RGB: set pixel (row=1, col=0) to red
        let mut data = vec![0u8; 12];
        data[6] = 255;
        let frame = Frame::new(data, 2, 2);
        let arr = frame.as_ndarray();
        assert_eq!(arr.shape(), &[2, 2, 3]);
        assert_eq!(arr[[1, 0, 0]], 255);
        assert_eq!(arr[[1, 0, 1]], 0);
    }

    #[test]
    fn test_resized_dimensions() {
        let frame = Frame::filled(1200, 800, [10, 20, 30]);
        let small = frame.resized(600, 400);
        assert_eq!((small.width(), small.height()), (600, 400));
        assert_eq!(small.data().len(), 600 * 400 * 3);
        // A uniform image stays uniform under resampling.
        assert!(small.data().chunks(3).all(|px| px == [10, 20, 30]));
    }

    #[test]
    fn test_resized_same_size_is_copy() {
        let frame = Frame::filled(4, 4, [7, 7, 7]);
        assert_eq!(frame.resized(4, 4), frame);
    }

    #[test]
    fn test_cropped_copies_block() {
        // 3x2 frame, pixel value encodes its column
        let data: Vec<u8> = (0..2).flat_map(|_| (0..3u8).flat_map(|c| [c, c, c])).collect();
        let frame = Frame::new(data, 3, 2);
        let crop = frame.cropped(1, 1, 2, 1);
        assert_eq!((crop.width(), crop.height()), (2, 1));
        assert_eq!(crop.data(), &[1, 1, 1, 2, 2, 2]);
    }
}
