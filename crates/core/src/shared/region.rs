use std::marker::PhantomData;

/// Coordinates of the resized copy that was fed to the detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectionSpace {}

/// Coordinates of the original, full-resolution frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSpace {}

/// An axis-aligned integer rectangle tagged with the coordinate space it lives in.
///
/// Regions in different spaces are distinct types; [`ResizeScale::rescale`]
/// is the only way to turn a detection-space region into an image-space one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region<S> {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    space: PhantomData<S>,
}

pub type DetectionRegion = Region<DetectionSpace>;
pub type ImageRegion = Region<ImageSpace>;

impl<S> Region<S> {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            space: PhantomData,
        }
    }

    /// Builds a region from corner coordinates `(x1, y1)`-`(x2, y2)`.
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// True when the region is non-inverted and inside a `width × height` image.
    pub fn lies_within(&self, width: u32, height: u32) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.width >= 0
            && self.height >= 0
            && i64::from(self.right()) <= i64::from(width)
            && i64::from(self.bottom()) <= i64::from(height)
    }

    /// Intersection with a `width × height` image, `None` if nothing remains.
    pub fn clipped_to(&self, width: u32, height: u32) -> Option<Self> {
        let x1 = self.x.max(0);
        let y1 = self.y.max(0);
        let x2 = i64::from(self.right()).min(i64::from(width)) as i32;
        let y2 = i64::from(self.bottom()).min(i64::from(height)) as i32;
        let clipped = Self::from_corners(x1, y1, x2, y2);
        (!clipped.is_empty()).then_some(clipped)
    }
}

/// Proportional resize that maps an image to a fixed target width.
///
/// `factor = original_width / target_width`; the resized height is
/// `original_height / factor`, truncated and never below one pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeScale {
    factor: f64,
    width: u32,
    height: u32,
}

impl ResizeScale {
    pub fn for_width(original_width: u32, original_height: u32, target_width: u32) -> Self {
        let factor = f64::from(original_width) / f64::from(target_width);
        // Exact floor of `h * target / w`; the f64 quotient can land just below an integer.
        let height = u64::from(original_height) * u64::from(target_width)
            / u64::from(original_width.max(1));
        let height = u32::try_from(height).unwrap_or(u32::MAX).max(1);
        Self {
            factor,
            width: target_width,
            height,
        }
    }

    /// Multiplier from detection space back to image space.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Size of the resized (detection-space) image.
    pub fn resized_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Scales all four geometric fields by the factor, truncating toward zero.
    ///
    /// Because truncation never rounds up, a region inside the resized image
    /// stays inside the original image.
    pub fn rescale(&self, region: &DetectionRegion) -> ImageRegion {
        let scale = |v: i32| (f64::from(v) * self.factor) as i32;
        ImageRegion::new(
            scale(region.x),
            scale(region.y),
            scale(region.width),
            scale(region.height),
        )
    }
}
