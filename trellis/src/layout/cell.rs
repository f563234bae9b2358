//! Cell - sizing wrapper around one element.
//!
//! A cell reports the size its element wants (clamped or pinned by its
//! constraints) and, once the parent stack has decided its frame, positions
//! the element inside that frame using alignment and padding.

use crate::element::Element;
use crate::primitives::{EdgeInsets, Rect, Size};

use super::constraints::SizeConstraints;
use super::length::{Axis, ContentAlignment};

/// A leaf of the layout tree. Holds zero or one element handle.
#[derive(Debug, Clone)]
pub struct Cell<E> {
    element: Option<E>,
    pub(crate) constraints: SizeConstraints,
    alignment: ContentAlignment,
    padding: EdgeInsets,
    hidden: bool,
    debug: bool,
    frame: Rect,
}

impl<E> Default for Cell<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> Cell<E> {
    /// A cell with no element.
    pub fn empty() -> Self {
        Self {
            element: None,
            constraints: SizeConstraints::NONE,
            alignment: ContentAlignment::FILL,
            padding: EdgeInsets::ZERO,
            hidden: false,
            debug: false,
            frame: Rect::ZERO,
        }
    }

    /// A cell wrapping `element`.
    pub fn new(element: E) -> Self {
        Self {
            element: Some(element),
            ..Self::empty()
        }
    }

    pub fn with_alignment(mut self, alignment: ContentAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_constraints(mut self, constraints: SizeConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_min_size(mut self, size: Size) -> Self {
        self.constraints.min = size;
        self
    }

    pub fn with_max_size(mut self, size: Size) -> Self {
        self.constraints.max = size;
        self
    }

    pub fn with_fixed_size(mut self, size: Size) -> Self {
        self.constraints.fixed = size;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn element(&self) -> Option<&E> {
        self.element.as_ref()
    }

    pub fn element_mut(&mut self) -> Option<&mut E> {
        self.element.as_mut()
    }

    /// Replace the target element, returning the previous one.
    pub fn set_element(&mut self, element: Option<E>) -> Option<E> {
        std::mem::replace(&mut self.element, element)
    }

    pub fn take_element(&mut self) -> Option<E> {
        self.element.take()
    }

    pub fn constraints(&self) -> &SizeConstraints {
        &self.constraints
    }

    pub fn constraints_mut(&mut self) -> &mut SizeConstraints {
        &mut self.constraints
    }

    pub fn alignment(&self) -> ContentAlignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: ContentAlignment) {
        self.alignment = alignment;
    }

    pub fn padding(&self) -> EdgeInsets {
        self.padding
    }

    pub fn set_padding(&mut self, padding: EdgeInsets) {
        self.padding = padding;
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Frame assigned by the last layout pass.
    pub fn frame(&self) -> Rect {
        self.frame
    }
}

impl<E: Element> Cell<E> {
    /// Whether this cell collapses under an ignore-hidden stack.
    ///
    /// A cell without an element is not hidden: it still holds its slot.
    pub fn is_hidden(&self) -> bool {
        self.hidden || self.element.as_ref().is_some_and(Element::is_hidden)
    }

    /// Size this cell wants when offered `fitting`.
    ///
    /// Empty cells measure as zero before constraints are applied.
    pub fn measured_size(&self, fitting: Size) -> Size {
        let proposal = self.constraints.proposal(fitting);
        let content = match &self.element {
            Some(element) => element
                .size_that_fits(proposal.deflate(&self.padding))
                .inflate(&self.padding),
            None => Size::ZERO,
        };
        self.constraints.resolve(content)
    }

    /// Take `frame` and place the element inside it.
    pub fn assign(&mut self, frame: Rect) {
        self.frame = frame;
        let inner = frame.inset(&self.padding);
        let Some(element) = self.element.as_mut() else {
            return;
        };

        let intrinsic = element.size_that_fits(inner.size());
        let (dx, width) = self
            .alignment
            .horizontal
            .resolve(Axis::Horizontal.main_of(intrinsic), inner.width);
        let (dy, height) = self
            .alignment
            .vertical
            .resolve(Axis::Vertical.main_of(intrinsic), inner.height);

        let target = Rect::new(inner.x + dx, inner.y + dy, width, height);
        if self.debug {
            tracing::trace!("cell {:?} -> element {:?}", frame, target);
        }
        element.set_frame(target);
    }
}

// =========================================================================
// Tests
// =========================================================================
