//! Min/max/fixed size constraints.
//!
//! Every node (cell or stack) carries one `SizeConstraints`. A component of
//! `0.0` means "unconstrained". A positive fixed component pins that axis and
//! overrides min/max on it; the two axes are independent.

use crate::primitives::Size;

use super::length::Axis;

/// Size constraints for a layout node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeConstraints {
    pub min: Size,
    pub max: Size,
    pub fixed: Size,
}

impl SizeConstraints {
    /// No constraints on either axis.
    pub const NONE: Self = Self {
        min: Size::ZERO,
        max: Size::ZERO,
        fixed: Size::ZERO,
    };

    /// Fixed size on both axes.
    #[inline]
    pub fn fixed(size: Size) -> Self {
        Self {
            fixed: size,
            ..Self::NONE
        }
    }

    /// Fixed extent on `axis`, if any.
    #[inline]
    pub fn fixed_on(&self, axis: Axis) -> Option<f32> {
        let value = axis.main_of(self.fixed);
        (value > 0.0).then_some(value)
    }

    /// Effective minimum on `axis` (fixed wins).
    #[inline]
    pub fn effective_min(&self, axis: Axis) -> f32 {
        self.fixed_on(axis).unwrap_or_else(|| axis.main_of(self.min))
    }

    /// Effective maximum on `axis` (fixed wins). `f32::INFINITY` when unbounded.
    #[inline]
    pub fn effective_max(&self, axis: Axis) -> f32 {
        if let Some(fixed) = self.fixed_on(axis) {
            return fixed;
        }
        let max = axis.main_of(self.max);
        if max > 0.0 { max } else { f32::INFINITY }
    }

    /// Resolve one component: pin to fixed, else clamp into [min, max].
    ///
    /// A max smaller than min loses: the min is applied last.
    #[inline]
    pub fn resolve_on(&self, axis: Axis, value: f32) -> f32 {
        if let Some(fixed) = self.fixed_on(axis) {
            return fixed;
        }
        let mut result = value;
        let max = axis.main_of(self.max);
        if max > 0.0 && result > max {
            result = max;
        }
        let min = axis.main_of(self.min);
        if min > 0.0 && result < min {
            result = min;
        }
        result
    }

    /// Resolve both components of `size`.
    #[inline]
    pub fn resolve(&self, size: Size) -> Size {
        Size::new(
            self.resolve_on(Axis::Horizontal, size.width),
            self.resolve_on(Axis::Vertical, size.height),
        )
    }

    /// Size to propose to content: fixed axes are replaced by the fixed value,
    /// bounded axes are capped at max.
    #[inline]
    pub fn proposal(&self, proposed: Size) -> Size {
        let on = |axis: Axis| {
            let value = axis.main_of(proposed);
            match self.fixed_on(axis) {
                Some(fixed) => fixed,
                None => value.min(self.effective_max(axis)),
            }
        };
        Size::new(on(Axis::Horizontal), on(Axis::Vertical))
    }

    /// Whether both axes are pinned.
    #[inline]
    pub fn is_fully_fixed(&self) -> bool {
        self.fixed.width > 0.0 && self.fixed.height > 0.0
    }

    pub fn set_min_on(&mut self, axis: Axis, value: f32) {
        set_component(&mut self.min, axis, value);
    }

    pub fn set_max_on(&mut self, axis: Axis, value: f32) {
        set_component(&mut self.max, axis, value);
    }

    pub fn set_fixed_on(&mut self, axis: Axis, value: f32) {
        set_component(&mut self.fixed, axis, value);
    }
}

fn set_component(size: &mut Size, axis: Axis, value: f32) {
    match axis {
        Axis::Horizontal => size.width = value,
        Axis::Vertical => size.height = value,
    }
}
