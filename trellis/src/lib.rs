//! Trellis - manual frame layout for grids of host elements.
//!
//! This crate computes frames; it does not draw. The host supplies elements
//! (anything implementing [`Element`]), places them in a [`Grid`] or
//! [`Stack`], and receives a frame per element after each layout pass.
//!
//! - Cells, stacks and grids (`layout`)
//! - Geometry primitives
//! - Declarative configuration (JSON via serde)

pub mod config;
pub mod element;
pub mod layout;
pub mod primitives;

mod error;

pub use config::GridConfig;
pub use element::{Element, ElementId, Placeholder};
pub use error::ConfigError;
pub use layout::{Axis, Cell, Distribution, Grid, GridSnapshot, LayoutHooks, LayoutNode, SizeConstraints, Stack};
pub use primitives::{EdgeInsets, Point, Rect, Size};
