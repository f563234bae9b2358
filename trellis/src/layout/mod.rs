//! Layout system for Trellis.
//!
//! Three building blocks, composed bottom-up:
//!
//! ```text
//! Cell (one element) -> Stack (ordered nodes on one axis) -> Grid (stack of row stacks)
//! ```
//!
//! Sizing asks children what they need (`fitting_size`), then frames are
//! handed top-down (`set_frame`). Nothing here owns host content; elements
//! are handles that receive frames.

pub mod cache;
pub mod cell;
pub mod child;
pub mod constraints;
pub mod distribution;
pub mod hooks;
pub mod length;
pub mod snapshot;

// stack must come before grid (grid is built from stacks)
pub mod stack;
pub mod grid;

pub use cache::FittingCache;
pub use cell::Cell;
pub use child::LayoutNode;
pub use constraints::SizeConstraints;
pub use distribution::{Allocation, Distribution, DistributionPolicy, MainItem, distribute};
pub use grid::{Grid, Track};
pub use hooks::LayoutHooks;
pub use length::{Axis, AxisAlignment, ContentAlignment};
pub use snapshot::GridSnapshot;
pub use stack::Stack;
