//! Host callbacks around layout passes.
//!
//! The engine calls these at fixed points but does not interpret them:
//! `will_layout` before child frames are assigned, `did_layout` after, and
//! `will_size_that_fits` before a fitting size is computed.

use std::fmt;

use crate::primitives::{Rect, Size};

type FrameHook = Box<dyn Fn(Rect)>;
type SizeHook = Box<dyn Fn(Size)>;

/// Optional callbacks invoked by a stack or grid.
#[derive(Default)]
pub struct LayoutHooks {
    will_layout: Option<FrameHook>,
    did_layout: Option<FrameHook>,
    will_size_that_fits: Option<SizeHook>,
}

impl LayoutHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the node's frame before children are assigned frames.
    pub fn on_will_layout(mut self, hook: impl Fn(Rect) + 'static) -> Self {
        self.will_layout = Some(Box::new(hook));
        self
    }

    /// Called with the node's frame after children were assigned frames.
    pub fn on_did_layout(mut self, hook: impl Fn(Rect) + 'static) -> Self {
        self.did_layout = Some(Box::new(hook));
        self
    }

    /// Called with the proposed size before a fitting size is computed.
    pub fn on_will_size_that_fits(mut self, hook: impl Fn(Size) + 'static) -> Self {
        self.will_size_that_fits = Some(Box::new(hook));
        self
    }

    pub(crate) fn will_layout(&self, frame: Rect) {
        if let Some(hook) = self.will_layout.as_ref() {
            hook(frame);
        }
    }

    pub(crate) fn did_layout(&self, frame: Rect) {
        if let Some(hook) = self.did_layout.as_ref() {
            hook(frame);
        }
    }

    pub(crate) fn will_size_that_fits(&self, proposed: Size) {
        if let Some(hook) = self.will_size_that_fits.as_ref() {
            hook(proposed);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.will_layout.is_none() && self.did_layout.is_none() && self.will_size_that_fits.is_none()
    }
}

impl fmt::Debug for LayoutHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutHooks")
            .field("will_layout", &self.will_layout.is_some())
            .field("did_layout", &self.did_layout.is_some())
            .field("will_size_that_fits", &self.will_size_that_fits.is_some())
            .finish()
    }
}
