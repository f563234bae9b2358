//! Axis and alignment types.
//!
//! `Axis` also carries the main/cross projections that let the stack code be
//! written once for both orientations.

use serde::{Deserialize, Serialize};

use crate::primitives::{Rect, Size};

/// Direction of flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Left to right. For a grid: row-major placement.
    #[default]
    Horizontal,
    /// Top to bottom. For a grid: column-major placement.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Component of `size` along this axis.
    #[inline]
    pub fn main_of(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Component of `size` across this axis.
    #[inline]
    pub fn cross_of(self, size: Size) -> f32 {
        self.cross().main_of(size)
    }

    /// Build a size from main/cross components.
    #[inline]
    pub fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// Build a rect from main/cross offsets and extents.
    #[inline]
    pub fn rect(self, main_offset: f32, cross_offset: f32, main: f32, cross: f32) -> Rect {
        match self {
            Axis::Horizontal => Rect::new(main_offset, cross_offset, main, cross),
            Axis::Vertical => Rect::new(cross_offset, main_offset, cross, main),
        }
    }

    /// Origin of `rect` along this axis.
    #[inline]
    pub fn start_of(self, rect: Rect) -> f32 {
        match self {
            Axis::Horizontal => rect.x,
            Axis::Vertical => rect.y,
        }
    }
}

/// Placement of content inside its frame, along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisAlignment {
    /// Pack against the leading edge (left / top).
    Start,
    /// Center in the available extent.
    Center,
    /// Pack against the trailing edge (right / bottom).
    End,
    /// Stretch to the full extent.
    #[default]
    Fill,
}

impl AxisAlignment {
    /// Resolve (offset, extent) of content of `content` length inside `available`.
    pub fn resolve(self, content: f32, available: f32) -> (f32, f32) {
        let extent = content.min(available).max(0.0);
        match self {
            AxisAlignment::Fill => (0.0, available),
            AxisAlignment::Start => (0.0, extent),
            AxisAlignment::Center => ((available - extent) / 2.0, extent),
            AxisAlignment::End => (available - extent, extent),
        }
    }
}

/// Alignment on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentAlignment {
    pub vertical: AxisAlignment,
    pub horizontal: AxisAlignment,
}

impl ContentAlignment {
    pub const FILL: Self = Self {
        vertical: AxisAlignment::Fill,
        horizontal: AxisAlignment::Fill,
    };

    pub const CENTER: Self = Self {
        vertical: AxisAlignment::Center,
        horizontal: AxisAlignment::Center,
    };

    pub fn new(vertical: AxisAlignment, horizontal: AxisAlignment) -> Self {
        Self { vertical, horizontal }
    }
}
