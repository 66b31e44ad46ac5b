//! Points, sizes, unit points and rectangles in layout units.
//!
//! Everything is `f64` and signed. A [`Size`] doubles as a displacement
//! vector: offsets are sizes whose components may be negative.

use core::ops::{Add, Sub};

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// Width × height in layout units.
///
/// Used both as a dimension and as a displacement. Nothing here enforces
/// non-negative values; the sizing engine clamps rendered dimensions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero width and height.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Same value on both axes.
    pub const fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    /// Raise each component to at least `min`.
    ///
    /// NaN components become `min`.
    pub fn at_least(self, min: f64) -> Self {
        Self::new(self.width.max(min), self.height.max(min))
    }

    /// Apply `f` to each component.
    pub fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::new(f(self.width), f(self.height))
    }
}

/// A location in layout coordinates. `y` grows downward.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Displace a point by a size used as a vector.
impl Add<Size> for Point {
    type Output = Point;

    fn add(self, offset: Size) -> Point {
        Point::new(self.x + offset.width, self.y + offset.height)
    }
}

/// Displacement between two points.
impl Sub for Point {
    type Output = Size;

    fn sub(self, other: Point) -> Size {
        Size::new(self.x - other.x, self.y - other.y)
    }
}

/// A point expressed as fractions of a rectangle's width and height.
///
/// `(0.0, 0.0)` is the top-leading corner, `(1.0, 1.0)` the bottom-trailing
/// corner. Values outside `0.0..=1.0` are allowed and extrapolate.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct UnitPoint {
    pub x: f64,
    pub y: f64,
}

impl UnitPoint {
    pub const TOP_LEADING: Self = Self::new(0.0, 0.0);
    pub const TOP: Self = Self::new(0.5, 0.0);
    pub const TOP_TRAILING: Self = Self::new(1.0, 0.0);
    pub const LEADING: Self = Self::new(0.0, 0.5);
    pub const CENTER: Self = Self::new(0.5, 0.5);
    pub const TRAILING: Self = Self::new(1.0, 0.5);
    pub const BOTTOM_LEADING: Self = Self::new(0.0, 1.0);
    pub const BOTTOM: Self = Self::new(0.5, 1.0);
    pub const BOTTOM_TRAILING: Self = Self::new(1.0, 1.0);

    /// Create a new unit point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scale a size by this point's fractions: `(x·width, y·height)`.
    pub fn of(self, size: Size) -> Size {
        Size::new(self.x * size.width, self.y * size.height)
    }
}

/// Axis-aligned rectangle in layout coordinates.
///
/// Width and height may be negative; the `min_*`/`max_*` accessors
/// standardize so that `min_x <= mid_x <= max_x` always holds.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect with the given origin and size.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Rect at the origin with the given size.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn min_x(&self) -> f64 {
        self.x.min(self.x + self.width)
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.x.max(self.x + self.width)
    }

    pub fn min_y(&self) -> f64 {
        self.y.min(self.y + self.height)
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn max_y(&self) -> f64 {
        self.y.max(self.y + self.height)
    }

    /// The point at `unit` fractions of this rect, measured from `min_x`/`min_y`.
    pub fn point_at(&self, unit: UnitPoint) -> Point {
        Point::new(
            self.min_x() + unit.x * self.width.abs(),
            self.min_y() + unit.y * self.height.abs(),
        )
    }

    /// Round edges to the pixel grid of a display with `scale` pixels per unit.
    ///
    /// Edges are rounded independently, so a frame's width can change by
    /// up to one pixel. A non-positive or non-finite scale returns `self`.
    pub fn snapped(self, scale: f64) -> Self {
        if !(scale.is_finite() && scale > 0.0) {
            return self;
        }
        let snap = |v: f64| (v * scale).round() / scale;
        let min_x = snap(self.min_x());
        let min_y = snap(self.min_y());
        let max_x = snap(self.max_x());
        let max_y = snap(self.max_y());
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// A size proposal from the host where either dimension may be left open.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ProposedSize {
    /// Proposed width, `None` when the host leaves it unspecified.
    pub width: Option<f64>,
    /// Proposed height, `None` when the host leaves it unspecified.
    pub height: Option<f64>,
}

impl ProposedSize {
    /// Substitute for unspecified dimensions.
    pub const DEFAULT_DIMENSION: f64 = 10.0;

    /// Neither dimension specified.
    pub const UNSPECIFIED: Self = Self::new(None, None);

    /// Zero on both axes.
    pub const ZERO: Self = Self::new(Some(0.0), Some(0.0));

    /// Create a proposal.
    pub const fn new(width: Option<f64>, height: Option<f64>) -> Self {
        Self { width, height }
    }

    /// Fill unspecified dimensions with [`DEFAULT_DIMENSION`](Self::DEFAULT_DIMENSION).
    pub fn replacing_unspecified(self) -> Size {
        self.replacing_unspecified_by(Size::square(Self::DEFAULT_DIMENSION))
    }

    /// Fill unspecified dimensions from `fallback`.
    pub fn replacing_unspecified_by(self, fallback: Size) -> Size {
        Size::new(
            self.width.unwrap_or(fallback.width),
            self.height.unwrap_or(fallback.height),
        )
    }
}

impl From<Size> for ProposedSize {
    fn from(size: Size) -> Self {
        Self::new(Some(size.width), Some(size.height))
    }
}
