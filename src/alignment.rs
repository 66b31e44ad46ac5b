//! The nine alignment positions and their anchor geometry.
//!
//! An [`Alignment`] is used twice during placement: as a concrete point in
//! the container ([`Alignment::anchor_point`]) and as the pivot inside each
//! child ([`Alignment::unit_point`]). Pinning the child's pivot to the
//! container's anchor is what makes a top-trailing stack hug its top-trailing
//! corner.
//!
//! ```text
//!     TopLeading ────── Top ────── TopTrailing
//!         │                             │
//!      Leading        Center        Trailing
//!         │                             │
//!   BottomLeading ─── Bottom ─── BottomTrailing
//! ```

use core::fmt;

use crate::geometry::{Point, Rect, UnitPoint};

/// Horizontal component of an [`Alignment`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    Leading,
    #[default]
    Center,
    Trailing,
}

/// Vertical component of an [`Alignment`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

/// One of nine anchor positions: three vertical × three horizontal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    TopLeading,
    Top,
    TopTrailing,
    Leading,
    #[default]
    Center,
    Trailing,
    BottomLeading,
    Bottom,
    BottomTrailing,
}

impl Alignment {
    /// All nine alignments in row-major order, indexed by [`index()`](Self::index).
    pub const ALL: [Self; 9] = [
        Self::TopLeading,
        Self::Top,
        Self::TopTrailing,
        Self::Leading,
        Self::Center,
        Self::Trailing,
        Self::BottomLeading,
        Self::Bottom,
        Self::BottomTrailing,
    ];

    /// Combine horizontal and vertical components.
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        use HorizontalAlignment as H;
        use VerticalAlignment as V;
        match (vertical, horizontal) {
            (V::Top, H::Leading) => Self::TopLeading,
            (V::Top, H::Center) => Self::Top,
            (V::Top, H::Trailing) => Self::TopTrailing,
            (V::Center, H::Leading) => Self::Leading,
            (V::Center, H::Center) => Self::Center,
            (V::Center, H::Trailing) => Self::Trailing,
            (V::Bottom, H::Leading) => Self::BottomLeading,
            (V::Bottom, H::Center) => Self::Bottom,
            (V::Bottom, H::Trailing) => Self::BottomTrailing,
        }
    }

    /// Alignment from its row-major index (0–8).
    ///
    /// Out-of-range values resolve to [`Center`](Self::Center).
    pub fn from_index(index: u8) -> Self {
        Self::ALL
            .get(index as usize)
            .copied()
            .unwrap_or(Self::Center)
    }

    /// Row-major index (0–8), the inverse of [`from_index`](Self::from_index).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Parse a name such as `topTrailing`, `top-trailing`, `Top Trailing`
    /// or `topright`. Case, spaces, `-` and `_` are ignored.
    ///
    /// Returns `None` for anything else; callers that need a total mapping
    /// use `.unwrap_or_default()` to fall back to [`Center`](Self::Center).
    pub fn from_name(name: &str) -> Option<Self> {
        let mut buf = [0u8; 16];
        let mut len = 0;
        for b in name.bytes() {
            if matches!(b, b' ' | b'-' | b'_') {
                continue;
            }
            if len == buf.len() {
                return None;
            }
            buf[len] = b.to_ascii_lowercase();
            len += 1;
        }
        let key = &buf[..len];
        let alignment = match key {
            b"topleading" | b"topleft" => Self::TopLeading,
            b"top" | b"topcenter" => Self::Top,
            b"toptrailing" | b"topright" => Self::TopTrailing,
            b"leading" | b"left" | b"centerleading" | b"middleleft" => Self::Leading,
            b"center" | b"middle" | b"middlecenter" => Self::Center,
            b"trailing" | b"right" | b"centertrailing" | b"middleright" => Self::Trailing,
            b"bottomleading" | b"bottomleft" => Self::BottomLeading,
            b"bottom" | b"bottomcenter" => Self::Bottom,
            b"bottomtrailing" | b"bottomright" => Self::BottomTrailing,
            _ => return None,
        };
        Some(alignment)
    }

    /// Horizontal component.
    pub const fn horizontal(self) -> HorizontalAlignment {
        match self {
            Self::TopLeading | Self::Leading | Self::BottomLeading => HorizontalAlignment::Leading,
            Self::Top | Self::Center | Self::Bottom => HorizontalAlignment::Center,
            Self::TopTrailing | Self::Trailing | Self::BottomTrailing => {
                HorizontalAlignment::Trailing
            }
        }
    }

    /// Vertical component.
    pub const fn vertical(self) -> VerticalAlignment {
        match self {
            Self::TopLeading | Self::Top | Self::TopTrailing => VerticalAlignment::Top,
            Self::Leading | Self::Center | Self::Trailing => VerticalAlignment::Center,
            Self::BottomLeading | Self::Bottom | Self::BottomTrailing => VerticalAlignment::Bottom,
        }
    }

    /// Pivot inside a child's own bounds, as fractions of its size.
    pub const fn unit_point(self) -> UnitPoint {
        match self {
            Self::TopLeading => UnitPoint::TOP_LEADING,
            Self::Top => UnitPoint::TOP,
            Self::TopTrailing => UnitPoint::TOP_TRAILING,
            Self::Leading => UnitPoint::LEADING,
            Self::Center => UnitPoint::CENTER,
            Self::Trailing => UnitPoint::TRAILING,
            Self::BottomLeading => UnitPoint::BOTTOM_LEADING,
            Self::Bottom => UnitPoint::BOTTOM,
            Self::BottomTrailing => UnitPoint::BOTTOM_TRAILING,
        }
    }

    /// The concrete point in `rect` this alignment refers to.
    ///
    /// Leading/center/trailing pick `min_x`/`mid_x`/`max_x`; top/center/bottom
    /// pick `min_y`/`mid_y`/`max_y`.
    pub fn anchor_point(self, rect: Rect) -> Point {
        let x = match self.horizontal() {
            HorizontalAlignment::Leading => rect.min_x(),
            HorizontalAlignment::Center => rect.mid_x(),
            HorizontalAlignment::Trailing => rect.max_x(),
        };
        let y = match self.vertical() {
            VerticalAlignment::Top => rect.min_y(),
            VerticalAlignment::Center => rect.mid_y(),
            VerticalAlignment::Bottom => rect.max_y(),
        };
        Point::new(x, y)
    }

    /// Human-readable label, e.g. `"Bottom Trailing"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::TopLeading => "Top Leading",
            Self::Top => "Top",
            Self::TopTrailing => "Top Trailing",
            Self::Leading => "Leading",
            Self::Center => "Center",
            Self::Trailing => "Trailing",
            Self::BottomLeading => "Bottom Leading",
            Self::Bottom => "Bottom",
            Self::BottomTrailing => "Bottom Trailing",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Rect {
    /// Shorthand for [`Alignment::anchor_point`].
    pub fn alignment_point(&self, alignment: Alignment) -> Point {
        alignment.anchor_point(*self)
    }
}
