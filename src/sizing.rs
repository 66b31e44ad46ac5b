//! Sizing rules and their resolution against a container size.
//!
//! Each child carries two [`SizingRule`]s: one for its rendered size and one
//! for its displacement from the stack's anchor. The same rule syntax is
//! evaluated in both roles; only [`Resolution`] differs.
//!
//! # Example
//!
//! ```
//! use zenstack::{ReferenceSizes, Resolution, Size, SizingRule};
//!
//! // Ears that shrink as the face grows, never below one unit.
//! let ears = SizingRule::slope_intercept(-0.2, 80.0);
//! let refs = ReferenceSizes::default();
//!
//! let small_face = ears.resolve(Size::square(100.0), refs, Resolution::Size);
//! assert_eq!(small_face, Size::square(60.0));
//!
//! let huge_face = ears.resolve(Size::square(1000.0), refs, Resolution::Size);
//! assert_eq!(huge_face, Size::square(1.0));
//! ```

#[cfg(feature = "alloc")]
use alloc::sync::Arc;
use core::fmt;

use crate::geometry::{Size, UnitPoint};

/// Smallest width or height a size-mode resolution can produce.
pub const MIN_DIMENSION: f64 = 1.0;

/// Which role a rule is resolved for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Rendered dimensions. Results are clamped to [`MIN_DIMENSION`].
    #[default]
    Size,
    /// Displacement from the anchor. Negative and zero values are kept.
    Offset,
}

impl Resolution {
    /// Map a `for_offset` flag to a resolution mode.
    pub const fn from_offset_flag(for_offset: bool) -> Self {
        if for_offset { Self::Offset } else { Self::Size }
    }

    /// Whether results are displacements rather than rendered dimensions.
    pub const fn is_offset(self) -> bool {
        matches!(self, Self::Offset)
    }
}

/// The stack's two calibration container sizes for [`SizingRule::References`].
///
/// When the container is exactly `small`, a reference rule yields its own
/// `small` value; at `big` it yields its `big` value. Anything else is a
/// linear interpolation, or extrapolation outside the pair.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ReferenceSizes {
    pub small: Size,
    pub big: Size,
}

impl ReferenceSizes {
    pub const fn new(small: Size, big: Size) -> Self {
        Self { small, big }
    }

    /// Per-axis interpolation factors for `container`.
    ///
    /// An axis where `small == big` has factor 0. Factors are not clamped.
    pub fn factors(&self, container: Size) -> (f64, f64) {
        (
            interpolation_factor(container.width, self.small.width, self.big.width),
            interpolation_factor(container.height, self.small.height, self.big.height),
        )
    }

    /// Interpolate between a rule's `small` and `big` values for `container`.
    pub fn interpolate(&self, container: Size, small: Size, big: Size) -> Size {
        let (fw, fh) = self.factors(container);
        Size::new(
            small.width + fw * (big.width - small.width),
            small.height + fh * (big.height - small.height),
        )
    }
}

fn interpolation_factor(current: f64, small: f64, big: f64) -> f64 {
    if small == big {
        0.0
    } else {
        (current - small) / (big - small)
    }
}

/// A host-supplied mapping from container size to a resolved size.
///
/// The function must be pure and cheap; the engine calls it once per
/// resolution and applies no clamping or validation to its output.
#[derive(Clone)]
pub struct SizingFn(Repr);

#[derive(Clone)]
enum Repr {
    Pointer(fn(Size) -> Size),
    #[cfg(feature = "alloc")]
    Shared(Arc<dyn Fn(Size) -> Size + Send + Sync>),
}

impl SizingFn {
    /// Wrap a plain function. Available without `alloc`.
    pub const fn new(f: fn(Size) -> Size) -> Self {
        Self(Repr::Pointer(f))
    }

    /// Wrap a capturing closure.
    #[cfg(feature = "alloc")]
    pub fn shared(f: impl Fn(Size) -> Size + Send + Sync + 'static) -> Self {
        Self(Repr::Shared(Arc::new(f)))
    }

    /// Invoke the function.
    pub fn call(&self, container: Size) -> Size {
        match &self.0 {
            Repr::Pointer(f) => f(container),
            #[cfg(feature = "alloc")]
            Repr::Shared(f) => f(container),
        }
    }
}

impl PartialEq for SizingFn {
    /// Identity comparison: equal only when wrapping the same function.
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Repr::Pointer(a), Repr::Pointer(b)) => core::ptr::fn_addr_eq(*a, *b),
            #[cfg(feature = "alloc")]
            (Repr::Shared(a), Repr::Shared(b)) => Arc::ptr_eq(a, b),
            #[cfg(feature = "alloc")]
            _ => false,
        }
    }
}

impl fmt::Debug for SizingFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Pointer(_) => f.write_str("SizingFn(fn)"),
            #[cfg(feature = "alloc")]
            Repr::Shared(_) => f.write_str("SizingFn(closure)"),
        }
    }
}

impl From<fn(Size) -> Size> for SizingFn {
    fn from(f: fn(Size) -> Size) -> Self {
        Self::new(f)
    }
}

/// How a child's size or offset is derived from the container size.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SizingRule {
    /// Full container size for sizing, no displacement for offsets.
    #[default]
    Unspecified,
    /// Fraction of the container on each axis.
    Fraction(UnitPoint),
    /// Linear interpolation between two values calibrated against the
    /// stack's [`ReferenceSizes`].
    References { small: Size, big: Size },
    /// `container · m + b` on each axis.
    SlopeIntercept { m: f64, b: f64 },
    /// A literal size that ignores the container.
    Fixed(Size),
    /// Arbitrary host function of the container size.
    Custom(SizingFn),
}

impl SizingRule {
    pub const fn fraction(x: f64, y: f64) -> Self {
        Self::Fraction(UnitPoint::new(x, y))
    }

    pub const fn references(small: Size, big: Size) -> Self {
        Self::References { small, big }
    }

    pub const fn slope_intercept(m: f64, b: f64) -> Self {
        Self::SlopeIntercept { m, b }
    }

    pub const fn fixed(width: f64, height: f64) -> Self {
        Self::Fixed(Size::new(width, height))
    }

    /// Rule backed by a plain function.
    pub const fn custom(f: fn(Size) -> Size) -> Self {
        Self::Custom(SizingFn::new(f))
    }

    /// Rule backed by a capturing closure.
    #[cfg(feature = "alloc")]
    pub fn custom_shared(f: impl Fn(Size) -> Size + Send + Sync + 'static) -> Self {
        Self::Custom(SizingFn::shared(f))
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }

    /// Resolve this rule for a container.
    ///
    /// `references` is only read by [`References`](Self::References).
    /// In [`Resolution::Size`] every axis is clamped to [`MIN_DIMENSION`],
    /// except for `Unspecified` (the container passes through untouched)
    /// and `Custom` (the function's output is returned as is).
    pub fn resolve(&self, container: Size, references: ReferenceSizes, mode: Resolution) -> Size {
        let raw = match self {
            Self::Unspecified if mode.is_offset() => return Size::ZERO,
            Self::Unspecified => return container,
            Self::Custom(f) => return f.call(container),
            Self::Fraction(fraction) => fraction.of(container),
            Self::References { small, big } => references.interpolate(container, *small, *big),
            Self::SlopeIntercept { m, b } => container.map(|axis| axis * m + b),
            Self::Fixed(size) => *size,
        };
        if mode.is_offset() { raw } else { raw.at_least(MIN_DIMENSION) }
    }
}

impl From<Size> for SizingRule {
    fn from(size: Size) -> Self {
        Self::Fixed(size)
    }
}

impl From<UnitPoint> for SizingRule {
    fn from(fraction: UnitPoint) -> Self {
        Self::Fraction(fraction)
    }
}
