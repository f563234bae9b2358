//! Main-axis distribution shared by every stack.
//!
//! Given each visible child's measured main size and constraints, decide how
//! much of the available main extent each child gets. The policy is a
//! parameter of the stack: the built-in variants cover natural packing, equal
//! shares and weighted shares, and `Custom` lets the host plug its own.

use std::fmt;
use std::rc::Rc;

/// One child as seen by the distribution step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MainItem {
    /// Measured size on the main axis.
    pub measured: f32,
    /// Effective minimum on the main axis.
    pub min: f32,
    /// Effective maximum on the main axis (`INFINITY` when unbounded).
    pub max: f32,
    /// Fixed main size, if the child is pinned.
    pub fixed: Option<f32>,
}

impl MainItem {
    #[inline]
    fn natural(&self) -> f32 {
        self.fixed.unwrap_or(self.measured)
    }

    #[inline]
    fn clamp(&self, value: f32) -> f32 {
        match self.fixed {
            Some(fixed) => fixed,
            None => value.min(self.max).max(self.min),
        }
    }
}

/// A host-supplied distribution policy.
pub trait DistributionPolicy {
    /// Return one main size per item. `available` excludes insets but includes
    /// the spacing between items.
    fn allocate(&self, items: &[MainItem], available: f32, spacing: f32) -> Vec<f32>;
}

/// How a stack divides its main axis among children.
#[derive(Clone, Default)]
pub enum Distribution {
    /// Natural sizes, packed at the leading edge.
    #[default]
    Start,
    /// Natural sizes, centered.
    Center,
    /// Natural sizes, packed at the trailing edge.
    End,
    /// Free space shared evenly among children without a fixed main size.
    Equal,
    /// Free space shared in proportion to weights (missing weights count as 1).
    Weighted(Vec<f32>),
    /// Host-supplied policy.
    Custom(Rc<dyn DistributionPolicy>),
}

impl fmt::Debug for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::Start => f.write_str("Start"),
            Distribution::Center => f.write_str("Center"),
            Distribution::End => f.write_str("End"),
            Distribution::Equal => f.write_str("Equal"),
            Distribution::Weighted(weights) => f.debug_tuple("Weighted").field(weights).finish(),
            Distribution::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Distribution {
    /// Whether children are given shares of the free space (as opposed to
    /// their natural size).
    pub fn is_proportional(&self) -> bool {
        matches!(self, Distribution::Equal | Distribution::Weighted(_))
    }
}

/// Result of distributing the main axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Allocation {
    /// Main size for each item, in order.
    pub sizes: Vec<f32>,
    /// Offset of the first item from the content origin.
    pub leading: f32,
}

/// Divide `available` among `items`.
///
/// An unbounded `available` falls back to natural sizes for every policy.
pub fn distribute(
    distribution: &Distribution,
    items: &[MainItem],
    available: f32,
    spacing: f32,
) -> Allocation {
    if items.is_empty() {
        return Allocation::default();
    }

    let gaps = spacing * (items.len() - 1) as f32;
    let natural: Vec<f32> = items.iter().map(MainItem::natural).collect();

    if !available.is_finite() {
        return Allocation { sizes: natural, leading: 0.0 };
    }

    match distribution {
        Distribution::Start | Distribution::Center | Distribution::End => {
            let used: f32 = natural.iter().sum::<f32>() + gaps;
            let free = (available - used).max(0.0);
            let leading = match distribution {
                Distribution::Center => free / 2.0,
                Distribution::End => free,
                _ => 0.0,
            };
            Allocation { sizes: natural, leading }
        }
        Distribution::Equal => share(items, available, gaps, |_| 1.0),
        Distribution::Weighted(weights) => share(items, available, gaps, |index| {
            weights.get(index).copied().unwrap_or(1.0).max(0.0)
        }),
        Distribution::Custom(policy) => {
            let mut sizes = policy.allocate(items, available, spacing);
            sizes.truncate(items.len());
            sizes.extend(natural.iter().skip(sizes.len()));
            Allocation { sizes, leading: 0.0 }
        }
    }
}

/// Proportional split of the space left after fixed items and gaps.
fn share(items: &[MainItem], available: f32, gaps: f32, weight: impl Fn(usize) -> f32) -> Allocation {
    let fixed_total: f32 = items.iter().filter_map(|item| item.fixed).sum();
    let free = (available - gaps - fixed_total).max(0.0);
    let total_weight: f32 = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.fixed.is_none())
        .map(|(index, _)| weight(index))
        .sum();

    let sizes = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let portion = if total_weight > 0.0 {
                free * weight(index) / total_weight
            } else {
                0.0
            };
            item.clamp(portion)
        })
        .collect();

    Allocation { sizes, leading: 0.0 }
}

// =========================================================================
// Tests
// =========================================================================
