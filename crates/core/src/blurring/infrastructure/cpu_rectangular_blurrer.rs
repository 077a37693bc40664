use crate::blurring::domain::frame_blurrer::FrameBlurrer;
use crate::shared::constants::BLUR_KERNEL_SIZE;
use crate::shared::frame::Frame;
use crate::shared::region::ImageRegion;

use super::convolution::{self, RoiRect};

/// Default smoothing kernel side.
pub const DEFAULT_KERNEL_SIZE: usize = BLUR_KERNEL_SIZE;

/// Smoothing kernel shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SmoothingFilter {
    /// Normalized box filter (equal weights).
    #[default]
    Box,
    /// Gaussian weights; the kernel size is rounded up to the next odd number.
    Gaussian,
}

/// CPU rectangular blurrer using a separable smoothing kernel.
///
/// Blurs exactly the pixels of each (frame-clipped) region. Samples past the
/// region edge replicate the edge, so the blur has a hard rectangular
/// boundary with no feathering. Overlapping regions are blurred again in
/// list order.
pub struct CpuRectangularBlurrer {
    filter: SmoothingFilter,
    kernel_size: usize,
    /// Gaussian taps; empty for the box filter, which uses running sums.
    weights: Vec<f32>,
}

impl CpuRectangularBlurrer {
    pub fn new(filter: SmoothingFilter, kernel_size: usize) -> Self {
        let (kernel_size, weights) = match filter {
            SmoothingFilter::Box => (kernel_size.max(1), Vec::new()),
            SmoothingFilter::Gaussian => {
                let weights = convolution::gaussian_kernel_1d(kernel_size | 1);
                (weights.len(), weights)
            }
        };
        log::info!("Using CPU {filter:?} blur (kernel_size={kernel_size})");
        Self {
            filter,
            kernel_size,
            weights,
        }
    }

    pub fn kernel_size(&self) -> usize {
        self.kernel_size
    }
}

impl Default for CpuRectangularBlurrer {
    fn default() -> Self {
        Self::new(SmoothingFilter::Box, DEFAULT_KERNEL_SIZE)
    }
}

impl FrameBlurrer for CpuRectangularBlurrer {
    fn blur(&self, frame: &mut Frame, regions: &[ImageRegion]) {
        let (fw, fh) = (frame.width(), frame.height());
        let channels = frame.channels();
        let data = frame.data_mut();
        let mut roi = Vec::new();
        let mut sums = Vec::new();
        let mut temp = Vec::new();

        for region in regions {
            let Some(r) = region.clipped_to(fw, fh) else {
                continue;
            };
            let rect = RoiRect {
                x: r.x as usize,
                y: r.y as usize,
                w: r.width as usize,
                h: r.height as usize,
            };

            convolution::extract_roi(data, fw as usize, channels, rect, &mut roi);
            match self.filter {
                SmoothingFilter::Box => convolution::separable_box_blur(
                    &mut roi,
                    rect.w,
                    rect.h,
                    channels,
                    self.kernel_size,
                    &mut sums,
                ),
                SmoothingFilter::Gaussian => convolution::separable_convolve(
                    &mut roi,
                    rect.w,
                    rect.h,
                    channels,
                    &self.weights,
                    &mut temp,
                ),
            }
            convolution::write_roi_back(data, &roi, fw as usize, channels, rect);
        }
    }
}
