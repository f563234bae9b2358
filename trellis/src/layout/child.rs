//! Layout node enum.
//!
//! Every child of a stack is either a leaf cell or a nested stack. Code that
//! needs to treat rows differently from cells (the grid's constraint fan-out)
//! matches on the variant instead of inspecting types at runtime.
//!
//! Nested stacks are boxed to break the size recursion.

use crate::element::Element;
use crate::primitives::{Rect, Size};

use super::cell::Cell;
use super::constraints::SizeConstraints;
use super::stack::Stack;

/// A child of a [`Stack`].
#[derive(Debug)]
pub enum LayoutNode<E> {
    /// A leaf holding zero or one element.
    Leaf(Cell<E>),
    /// A nested stack (a grid row, for instance).
    Stack(Box<Stack<E>>),
}

impl<E> From<Cell<E>> for LayoutNode<E> {
    fn from(cell: Cell<E>) -> Self {
        LayoutNode::Leaf(cell)
    }
}

impl<E> From<Stack<E>> for LayoutNode<E> {
    fn from(stack: Stack<E>) -> Self {
        LayoutNode::Stack(Box::new(stack))
    }
}

impl<E> Default for LayoutNode<E> {
    fn default() -> Self {
        LayoutNode::Leaf(Cell::empty())
    }
}

impl<E> LayoutNode<E> {
    pub fn as_cell(&self) -> Option<&Cell<E>> {
        match self {
            LayoutNode::Leaf(cell) => Some(cell),
            LayoutNode::Stack(_) => None,
        }
    }

    pub fn as_cell_mut(&mut self) -> Option<&mut Cell<E>> {
        match self {
            LayoutNode::Leaf(cell) => Some(cell),
            LayoutNode::Stack(_) => None,
        }
    }

    pub fn as_stack(&self) -> Option<&Stack<E>> {
        match self {
            LayoutNode::Stack(stack) => Some(stack),
            LayoutNode::Leaf(_) => None,
        }
    }

    pub fn as_stack_mut(&mut self) -> Option<&mut Stack<E>> {
        match self {
            LayoutNode::Stack(stack) => Some(stack),
            LayoutNode::Leaf(_) => None,
        }
    }

    pub fn constraints(&self) -> &SizeConstraints {
        match self {
            LayoutNode::Leaf(cell) => cell.constraints(),
            LayoutNode::Stack(stack) => stack.constraints(),
        }
    }

    pub fn constraints_mut(&mut self) -> &mut SizeConstraints {
        match self {
            LayoutNode::Leaf(cell) => cell.constraints_mut(),
            LayoutNode::Stack(stack) => stack.constraints_mut(),
        }
    }

    pub fn set_debug(&mut self, debug: bool) {
        match self {
            LayoutNode::Leaf(cell) => cell.set_debug(debug),
            LayoutNode::Stack(stack) => stack.set_debug(debug),
        }
    }

    /// Frame assigned by the last layout pass.
    pub fn frame(&self) -> Rect {
        match self {
            LayoutNode::Leaf(cell) => cell.frame(),
            LayoutNode::Stack(stack) => stack.frame(),
        }
    }

    /// Drop memoized sizes in this subtree.
    pub(crate) fn invalidate(&mut self) {
        if let LayoutNode::Stack(stack) = self {
            stack.set_needs_layout();
        }
    }
}

impl<E: Element> LayoutNode<E> {
    pub(crate) fn is_hidden(&self) -> bool {
        match self {
            LayoutNode::Leaf(cell) => cell.is_hidden(),
            LayoutNode::Stack(stack) => stack.is_hidden(),
        }
    }

    /// Size this node wants when offered `fitting`.
    pub(crate) fn measured_size(&self, fitting: Size) -> Size {
        match self {
            LayoutNode::Leaf(cell) => cell.measured_size(fitting),
            LayoutNode::Stack(stack) => stack.fitting_size(fitting),
        }
    }

    /// Assign the final frame, recursing into nested stacks.
    pub(crate) fn assign(&mut self, frame: Rect) {
        match self {
            LayoutNode::Leaf(cell) => cell.assign(frame),
            LayoutNode::Stack(stack) => stack.set_frame(frame),
        }
    }
}
