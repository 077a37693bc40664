/// ROI rectangle within a frame, used to pass region coordinates without many arguments.
#[derive(Clone, Copy, Debug)]
pub struct RoiRect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

/// Precompute a 1D Gaussian kernel of the given size.
///
/// `kernel_size` must be odd and >= 1. Sigma is derived as `kernel_size / 6.0`.
pub fn gaussian_kernel_1d(kernel_size: usize) -> Vec<f32> {
    debug_assert!(kernel_size >= 1 && kernel_size % 2 == 1);
    let sigma = kernel_size as f64 / 6.0;
    let half = (kernel_size / 2) as f64;
    let weights: Vec<f64> = (0..kernel_size)
        .map(|i| {
            let x = i as f64 - half;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = weights.iter().sum();
    weights.iter().map(|&v| (v / sum) as f32).collect()
}

/// Convolve rows then columns with the same 1D kernel, reusing `temp`.
///
/// The kernel anchor is `kernel.len() / 2`, so an even-sized kernel reaches
/// one pixel further before the anchor than after it. Samples beyond the
/// buffer edge replicate the edge pixel.
pub fn separable_convolve(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    kernel: &[f32],
    temp: &mut Vec<f32>,
) {
    if kernel.len() <= 1 || width == 0 || height == 0 {
        return;
    }
    let anchor = (kernel.len() / 2) as isize;
    temp.resize(width * height * channels, 0.0);

    // Horizontal pass: data → temp
    for y in 0..height {
        let row = y * width;
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sx = (x as isize + k as isize - anchor).clamp(0, width as isize - 1);
                    sum += data[(row + sx as usize) * channels + c] as f32 * w;
                }
                temp[(row + x) * channels + c] = sum;
            }
        }
    }

    // Vertical pass: temp → data
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sy = (y as isize + k as isize - anchor).clamp(0, height as isize - 1);
                    sum += temp[(sy as usize * width + x) * channels + c] * w;
                }
                data[(y * width + x) * channels + c] = sum.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

/// Box-filter rows then columns with running sums, reusing `sums`.
///
/// Same anchor and edge replication as [`separable_convolve`] with `size`
/// equal taps, but each sample costs the same whatever the window size.
/// Sums stay integral, so every output is the exact window mean rounded half up.
pub fn separable_box_blur(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    size: usize,
    sums: &mut Vec<u32>,
) {
    if size <= 1 || width == 0 || height == 0 {
        return;
    }
    let anchor = size / 2;
    sums.resize(width * height * channels, 0);

    // Horizontal pass: data → sums
    for y in 0..height {
        let row = y * width;
        for c in 0..channels {
            let at = |x: usize| u32::from(data[(row + x) * channels + c]);
            let mut sum: u32 = (0..size).map(|k| at(shifted(k, anchor, width))).sum();
            for x in 0..width {
                sums[(row + x) * channels + c] = sum;
                sum -= at(shifted(x, anchor, width));
                sum += at(shifted(x + size, anchor, width));
            }
        }
    }

    // Vertical pass: sums → data
    let area = (size * size) as u64;
    for x in 0..width {
        for c in 0..channels {
            let at = |y: usize| u64::from(sums[(y * width + x) * channels + c]);
            let mut sum: u64 = (0..size).map(|k| at(shifted(k, anchor, height))).sum();
            for y in 0..height {
                data[(y * width + x) * channels + c] = ((sum + area / 2) / area) as u8;
                sum -= at(shifted(y, anchor, height));
                sum += at(shifted(y + size, anchor, height));
            }
        }
    }
}

/// `i - anchor` clamped to `[0, len)`.
fn shifted(i: usize, anchor: usize, len: usize) -> usize {
    i.saturating_sub(anchor).min(len - 1)
}

/// Copy a rectangular ROI out of frame data into a reusable buffer.
pub fn extract_roi(
    data: &[u8],
    frame_width: usize,
    channels: usize,
    rect: RoiRect,
    roi: &mut Vec<u8>,
) {
    let row_len = rect.w * channels;
    roi.clear();
    roi.reserve(row_len * rect.h);
    for row in 0..rect.h {
        let offset = ((rect.y + row) * frame_width + rect.x) * channels;
        roi.extend_from_slice(&data[offset..offset + row_len]);
    }
}

/// Write an ROI buffer back into frame data.
pub fn write_roi_back(
    data: &mut [u8],
    roi: &[u8],
    frame_width: usize,
    channels: usize,
    rect: RoiRect,
) {
    let row_len = rect.w * channels;
    for (row, src) in roi.chunks_exact(row_len).take(rect.h).enumerate() {
        let offset = ((rect.y + row) * frame_width + rect.x) * channels;
        data[offset..offset + row_len].copy_from_slice(src);
    }
}
