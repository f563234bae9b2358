//! Element contract.
//!
//! An element is an opaque handle to host content (a view, a widget, a
//! terminal pane). The engine queries its preferred size and assigns it a
//! frame, but never creates or destroys it. Handles are cloned into cells, so
//! implementations are expected to be cheap to clone and share their state.

use std::cell::Cell as StdCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::primitives::{Rect, Size};

/// Stable identity of an element, used for attach bookkeeping and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

/// Content that can be placed in a [`Cell`](crate::layout::Cell).
pub trait Element: Clone {
    /// Stable identity of this element.
    fn id(&self) -> ElementId;

    /// Preferred size when offered `proposed`.
    fn size_that_fits(&self, proposed: Size) -> Size;

    /// Receive the final frame computed by the layout pass.
    fn set_frame(&mut self, frame: Rect);

    /// Hidden elements collapse when their stack ignores hidden content.
    fn is_hidden(&self) -> bool {
        false
    }
}

/// Shared state behind a [`Placeholder`].
#[derive(Debug, Default)]
struct PlaceholderState {
    frame: StdCell<Rect>,
    hidden: StdCell<bool>,
    frame_updates: StdCell<u32>,
}

/// A fixed-size element with shared frame state.
///
/// Clones share the same frame, so a handle kept by the host observes the
/// frame assigned to the clone held by a cell.
#[derive(Debug, Clone)]
pub struct Placeholder {
    id: ElementId,
    size: Size,
    state: Rc<PlaceholderState>,
}

impl Placeholder {
    pub fn new(id: u64, size: Size) -> Self {
        Self {
            id: ElementId(id),
            size,
            state: Rc::new(PlaceholderState::default()),
        }
    }

    /// Last frame assigned by a layout pass.
    pub fn frame(&self) -> Rect {
        self.state.frame.get()
    }

    /// Number of times a layout pass assigned a frame.
    pub fn frame_updates(&self) -> u32 {
        self.state.frame_updates.get()
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.state.hidden.set(hidden);
    }

    pub fn intrinsic_size(&self) -> Size {
        self.size
    }
}

impl Element for Placeholder {
    fn id(&self) -> ElementId {
        self.id
    }

    fn size_that_fits(&self, _proposed: Size) -> Size {
        self.size
    }

    fn set_frame(&mut self, frame: Rect) {
        self.state.frame.set(frame);
        self.state.frame_updates.set(self.state.frame_updates.get() + 1);
    }

    fn is_hidden(&self) -> bool {
        self.state.hidden.get()
    }
}
