//! Scaling stack: places every child relative to one alignment anchor.
//!
//! The host proposes a container size, then asks the stack to place its
//! children. Each child's size rule and offset rule are resolved against the
//! container independently, so children never influence each other.
//!
//! # Example
//!
//! ```
//! use zenstack::{Alignment, Child, Point, ProposedSize, Rect, ScalingStack, Size, SizingRule};
//!
//! let stack = ScalingStack::new(Alignment::Center);
//! let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
//! let children = [Child::new("face").with_size(SizingRule::fraction(0.5, 0.5))];
//!
//! let mut placed = Vec::new();
//! stack.place_children(bounds, ProposedSize::from(bounds.size()), &children, |_, child, p| {
//!     placed.push((child.element, p));
//! });
//!
//! let (_, p) = placed[0];
//! assert_eq!(p.proposal, Size::new(100.0, 100.0));
//! assert_eq!(p.position, Point::new(100.0, 100.0));
//! assert_eq!(p.frame().origin(), Point::new(50.0, 50.0));
//! ```

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::alignment::Alignment;
use crate::geometry::{Point, ProposedSize, Rect, Size, UnitPoint};
use crate::sizing::{ReferenceSizes, Resolution, SizingRule};

/// A host element annotated with its sizing and offset rules.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Child<E = ()> {
    /// The host's element, carried through to the placement callback.
    pub element: E,
    /// Rule for the proposed size. Defaults to the full container.
    pub size: SizingRule,
    /// Rule for the displacement from the anchor. Defaults to none.
    pub offset: SizingRule,
}

impl<E> Child<E> {
    /// A child with both rules unspecified.
    pub fn new(element: E) -> Self {
        Self {
            element,
            size: SizingRule::Unspecified,
            offset: SizingRule::Unspecified,
        }
    }

    /// Set the sizing rule.
    pub fn with_size(mut self, rule: impl Into<SizingRule>) -> Self {
        self.size = rule.into();
        self
    }

    /// Set the offset rule.
    pub fn with_offset(mut self, rule: impl Into<SizingRule>) -> Self {
        self.offset = rule.into();
        self
    }
}

/// Where and how large to place one child.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Placement {
    /// Target point in the container's coordinate space: anchor + offset.
    pub position: Point,
    /// Pivot inside the child that is pinned to `position`.
    pub anchor: UnitPoint,
    /// Size proposed to the child.
    pub proposal: Size,
}

impl Placement {
    /// The child's frame, assuming it accepts the proposed size.
    pub fn frame(&self) -> Rect {
        let origin = Point::new(
            self.position.x - self.anchor.x * self.proposal.width,
            self.position.y - self.anchor.y * self.proposal.height,
        );
        Rect::from_origin_size(origin, self.proposal)
    }
}

/// Layout that scales and positions children relative to an alignment anchor.
///
/// Built once and treated as immutable; builder methods consume `self`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScalingStack {
    /// Anchor in the container and pivot in each child.
    pub alignment: Alignment,
    /// Calibration sizes for [`SizingRule::References`].
    pub references: ReferenceSizes,
}

impl ScalingStack {
    /// A stack with zero reference sizes.
    pub const fn new(alignment: Alignment) -> Self {
        Self {
            alignment,
            references: ReferenceSizes::new(Size::ZERO, Size::ZERO),
        }
    }

    /// Set the alignment.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the container sizes that [`SizingRule::References`] rules are
    /// calibrated against.
    pub fn references(mut self, small: Size, big: Size) -> Self {
        self.references = ReferenceSizes::new(small, big);
        self
    }

    /// The stack takes whatever space it is offered.
    pub fn size_that_fits(&self, proposal: ProposedSize) -> Size {
        proposal.replacing_unspecified()
    }

    /// Resolve one rule against `container` using this stack's references.
    pub fn resolve(&self, rule: &SizingRule, container: Size, mode: Resolution) -> Size {
        rule.resolve(container, self.references, mode)
    }

    /// Compute the placement of a single child.
    pub fn place_child<E>(&self, bounds: Rect, container: Size, child: &Child<E>) -> Placement {
        let proposal = self.resolve(&child.size, container, Resolution::Size);
        let offset = self.resolve(&child.offset, container, Resolution::Offset);
        Placement {
            position: self.alignment.anchor_point(bounds) + offset,
            anchor: self.alignment.unit_point(),
            proposal,
        }
    }

    /// Place every child, calling `place(index, child, placement)` in order.
    ///
    /// `bounds` is where the stack was put by its parent; `proposal` is the
    /// size it was offered, with unspecified dimensions filled the same way
    /// as [`size_that_fits`](Self::size_that_fits).
    pub fn place_children<E, F>(
        &self,
        bounds: Rect,
        proposal: ProposedSize,
        children: &[Child<E>],
        mut place: F,
    ) where
        F: FnMut(usize, &Child<E>, Placement),
    {
        let container = proposal.replacing_unspecified();
        #[cfg(feature = "tracing")]
        tracing::trace!(
            alignment = %self.alignment,
            width = container.width,
            height = container.height,
            children = children.len(),
            "placing children"
        );
        for (index, child) in children.iter().enumerate() {
            let placement = self.place_child(bounds, container, child);
            #[cfg(feature = "tracing")]
            tracing::trace!(
                index,
                x = placement.position.x,
                y = placement.position.y,
                width = placement.proposal.width,
                height = placement.proposal.height,
                "placed child"
            );
            place(index, child, placement);
        }
    }

    /// Placements for all children, in child order.
    #[cfg(feature = "alloc")]
    pub fn placements<E>(
        &self,
        bounds: Rect,
        proposal: ProposedSize,
        children: &[Child<E>],
    ) -> Vec<Placement> {
        let mut out = Vec::with_capacity(children.len());
        self.place_children(bounds, proposal, children, |_, _, p| out.push(p));
        out
    }

    /// Like [`placements`](Self::placements), spreading children across the
    /// rayon thread pool. Output order and values match the sequential call.
    #[cfg(feature = "parallel")]
    pub fn par_placements<E: Sync>(
        &self,
        bounds: Rect,
        proposal: ProposedSize,
        children: &[Child<E>],
    ) -> Vec<Placement> {
        use rayon::prelude::*;

        let container = proposal.replacing_unspecified();
        children
            .par_iter()
            .map(|child| self.place_child(bounds, container, child))
            .collect()
    }
}
