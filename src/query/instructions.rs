//! Parsed representation of a query string and its conversion to core types.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::alignment::Alignment;
use crate::geometry::{ProposedSize, Size};
use crate::sizing::SizingRule;
use crate::stack::{Child, ScalingStack};

/// Rules parsed for one child index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChildRules {
    /// `size` / `size.N`.
    pub size: Option<SizingRule>,
    /// `offset` / `offset.N`.
    pub offset: Option<SizingRule>,
}

/// Parsed query instructions.
///
/// Produced by [`crate::query::parse()`]. Every field is optional; absent
/// fields take the core defaults when converted.
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Instructions {
    /// Stack alignment (`align`, `alignment`).
    pub alignment: Option<Alignment>,
    /// Small reference container size (`small`).
    pub small: Option<Size>,
    /// Big reference container size (`big`).
    pub big: Option<Size>,
    /// Proposed container width (`w`, `width`).
    pub w: Option<f64>,
    /// Proposed container height (`h`, `height`).
    pub h: Option<f64>,
    /// Per-child rules keyed by child index.
    pub children: BTreeMap<usize, ChildRules>,
}

impl Instructions {
    /// Create empty instructions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the stack. Missing alignment is center; missing references are zero.
    pub fn to_stack(&self) -> ScalingStack {
        ScalingStack::new(self.alignment.unwrap_or_default())
            .references(self.small.unwrap_or_default(), self.big.unwrap_or_default())
    }

    /// The proposed container size; missing dimensions stay unspecified.
    pub fn proposal(&self) -> ProposedSize {
        ProposedSize::new(self.w, self.h)
    }

    /// Number of children addressed by the query (highest index + 1).
    ///
    /// Saturates at `usize::MAX` for instructions built by hand with that index.
    pub fn child_count(&self) -> usize {
        self.children
            .keys()
            .next_back()
            .map_or(0, |&i| i.saturating_add(1))
    }

    /// Size and offset rules for child `index`, unspecified when absent.
    pub fn child_rules(&self, index: usize) -> (SizingRule, SizingRule) {
        match self.children.get(&index) {
            Some(rules) => (
                rules.size.clone().unwrap_or_default(),
                rules.offset.clone().unwrap_or_default(),
            ),
            None => (SizingRule::Unspecified, SizingRule::Unspecified),
        }
    }

    /// Attach parsed rules to host elements, pairing the Nth element with
    /// the rules for child N. Rules for indices past the last element are
    /// ignored.
    pub fn to_children<E>(&self, elements: impl IntoIterator<Item = E>) -> Vec<Child<E>> {
        elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                let (size, offset) = self.child_rules(index);
                Child::new(element).with_size(size).with_offset(offset)
            })
            .collect()
    }
}
