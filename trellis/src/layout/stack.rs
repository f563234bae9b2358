//! Stack - ordered arrangement of nodes along one axis.
//!
//! Children are laid out in insertion order. Sizing is bottom-up
//! (`fitting_size` asks each child what it needs), frame assignment is
//! top-down (`set_frame` divides the frame among children and recurses).
//!
//! ## Visibility
//!
//! With `ignore_hidden` on (the default), hidden children take no space and
//! contribute no spacing. A cell without an element is *not* hidden; it keeps
//! its slot so grid columns stay aligned.

use crate::element::Element;
use crate::primitives::{EdgeInsets, Rect, Size};

use super::cache::FittingCache;
use super::cell::Cell;
use super::child::LayoutNode;
use super::constraints::SizeConstraints;
use super::distribution::{Distribution, MainItem, distribute};
use super::hooks::LayoutHooks;
use super::length::Axis;

/// A linear layout container.
#[derive(Debug)]
pub struct Stack<E> {
    axis: Axis,
    distribution: Distribution,
    /// Gap between consecutive visible children.
    spacing: f32,
    /// Insets between the frame and the children.
    edge_insets: EdgeInsets,
    /// The stack's own min/max/fixed size.
    pub(crate) constraints: SizeConstraints,
    /// When positive, fitting height is `width * height_ratio`.
    height_ratio: f32,
    ignore_hidden: bool,
    /// When off, the stack reports the proposed size instead of its content size.
    intrinsic_size_enabled: bool,
    hidden: bool,
    debug: bool,
    nodes: Vec<LayoutNode<E>>,
    frame: Rect,
    needs_layout: bool,
    cache: FittingCache,
    hooks: LayoutHooks,
}

impl<E> Stack<E> {
    /// Create an empty stack.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            distribution: Distribution::Start,
            spacing: 0.0,
            edge_insets: EdgeInsets::ZERO,
            constraints: SizeConstraints::NONE,
            height_ratio: 0.0,
            ignore_hidden: true,
            intrinsic_size_enabled: true,
            hidden: false,
            debug: false,
            nodes: Vec::new(),
            frame: Rect::ZERO,
            needs_layout: true,
            cache: FittingCache::new(),
            hooks: LayoutHooks::default(),
        }
    }

    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_edge_insets(mut self, insets: EdgeInsets) -> Self {
        self.edge_insets = insets;
        self
    }

    pub fn with_constraints(mut self, constraints: SizeConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_height_ratio(mut self, ratio: f32) -> Self {
        self.height_ratio = ratio;
        self
    }

    pub fn with_ignore_hidden(mut self, ignore_hidden: bool) -> Self {
        self.ignore_hidden = ignore_hidden;
        self
    }

    pub fn with_intrinsic_size(mut self, enabled: bool) -> Self {
        self.intrinsic_size_enabled = enabled;
        self
    }

    pub fn with_hooks(mut self, hooks: LayoutHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Add a child (builder form of [`push`](Self::push)).
    pub fn child(mut self, node: impl Into<LayoutNode<E>>) -> Self {
        self.push(node);
        self
    }

    // =====================================================================
    // Properties
    // =====================================================================

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
        self.invalidate();
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    pub fn set_distribution(&mut self, distribution: Distribution) {
        self.distribution = distribution;
        self.invalidate();
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing;
        self.invalidate();
    }

    pub fn edge_insets(&self) -> EdgeInsets {
        self.edge_insets
    }

    pub fn set_edge_insets(&mut self, insets: EdgeInsets) {
        self.edge_insets = insets;
        self.invalidate();
    }

    pub fn constraints(&self) -> &SizeConstraints {
        &self.constraints
    }

    pub fn constraints_mut(&mut self) -> &mut SizeConstraints {
        self.invalidate();
        &mut self.constraints
    }

    pub fn height_ratio(&self) -> f32 {
        self.height_ratio
    }

    pub fn set_height_ratio(&mut self, ratio: f32) {
        self.height_ratio = ratio;
        self.invalidate();
    }

    pub fn ignores_hidden(&self) -> bool {
        self.ignore_hidden
    }

    pub fn set_ignore_hidden(&mut self, ignore_hidden: bool) {
        self.ignore_hidden = ignore_hidden;
        self.invalidate();
    }

    pub fn is_intrinsic_size_enabled(&self) -> bool {
        self.intrinsic_size_enabled
    }

    pub fn set_intrinsic_size_enabled(&mut self, enabled: bool) {
        self.intrinsic_size_enabled = enabled;
        self.invalidate();
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
        self.invalidate();
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn set_hooks(&mut self, hooks: LayoutHooks) {
        self.hooks = hooks;
    }

    /// Frame assigned by the last layout pass.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn fitting_cache(&self) -> &FittingCache {
        &self.cache
    }

    // =====================================================================
    // Children
    // =====================================================================

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[LayoutNode<E>] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut LayoutNode<E>> {
        self.invalidate();
        self.nodes.iter_mut()
    }

    /// Leaf cells, skipping nested stacks.
    pub fn cells(&self) -> impl Iterator<Item = &Cell<E>> {
        self.nodes.iter().filter_map(LayoutNode::as_cell)
    }

    pub fn node(&self, index: usize) -> Option<&LayoutNode<E>> {
        self.nodes.get(index)
    }

    pub fn node_mut(&mut self, index: usize) -> Option<&mut LayoutNode<E>> {
        self.invalidate();
        self.nodes.get_mut(index)
    }

    pub fn first(&self) -> Option<&LayoutNode<E>> {
        self.nodes.first()
    }

    pub fn last(&self) -> Option<&LayoutNode<E>> {
        self.nodes.last()
    }

    pub fn first_mut(&mut self) -> Option<&mut LayoutNode<E>> {
        self.invalidate();
        self.nodes.first_mut()
    }

    pub fn last_mut(&mut self) -> Option<&mut LayoutNode<E>> {
        self.invalidate();
        self.nodes.last_mut()
    }

    /// Append a child and return it.
    pub fn push(&mut self, node: impl Into<LayoutNode<E>>) -> &mut LayoutNode<E> {
        self.invalidate();
        let index = self.nodes.len();
        self.nodes.push(node.into());
        &mut self.nodes[index]
    }

    /// Insert a child at `index` (`index == len` appends).
    ///
    /// Returns `None` and leaves the stack untouched when `index > len`.
    pub fn insert(&mut self, node: impl Into<LayoutNode<E>>, index: usize) -> Option<&mut LayoutNode<E>> {
        if index > self.nodes.len() {
            tracing::debug!("stack insert: index {} out of range ({} nodes)", index, self.nodes.len());
            return None;
        }
        self.invalidate();
        self.nodes.insert(index, node.into());
        self.nodes.get_mut(index)
    }

    /// Remove the child at `index`. Out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) -> Option<LayoutNode<E>> {
        if index >= self.nodes.len() {
            tracing::debug!("stack remove: index {} out of range ({} nodes)", index, self.nodes.len());
            return None;
        }
        self.invalidate();
        Some(self.nodes.remove(index))
    }

    /// Remove the last child, if any.
    pub fn remove_last(&mut self) -> Option<LayoutNode<E>> {
        self.invalidate();
        self.nodes.pop()
    }

    pub fn remove_all(&mut self) {
        self.invalidate();
        self.nodes.clear();
    }

    /// Grow with empty cells or shrink from the tail until `len() == count`.
    pub fn set_number_of_cells(&mut self, count: usize) {
        if count == self.nodes.len() {
            return;
        }
        self.invalidate();
        self.nodes.truncate(count);
        self.nodes.resize_with(count, LayoutNode::default);
    }

    // =====================================================================
    // Invalidation
    // =====================================================================

    /// Mark this stack dirty and drop its memoized fitting size.
    fn invalidate(&mut self) {
        self.needs_layout = true;
        self.cache.clear();
    }

    /// Mark this subtree dirty. Use after element content changed.
    pub fn set_needs_layout(&mut self) {
        self.invalidate();
        for node in &mut self.nodes {
            node.invalidate();
        }
    }
}

impl<E: Element> Stack<E> {
    fn is_visible(&self, node: &LayoutNode<E>) -> bool {
        !(self.ignore_hidden && node.is_hidden())
    }

    fn visible_indices(&self) -> Vec<usize> {
        (0..self.nodes.len())
            .filter(|&index| self.is_visible(&self.nodes[index]))
            .collect()
    }

    /// Build distribution input for the visible children, measured against
    /// the content `proposal`.
    fn main_items(&self, visible: &[usize], proposal: Size) -> (Vec<MainItem>, Vec<Size>) {
        let axis = self.axis;
        let mut items = Vec::with_capacity(visible.len());
        let mut measured = Vec::with_capacity(visible.len());
        for &index in visible {
            let node = &self.nodes[index];
            let size = node.measured_size(proposal);
            let constraints = node.constraints();
            items.push(MainItem {
                measured: axis.main_of(size),
                min: constraints.effective_min(axis),
                max: constraints.effective_max(axis),
                fixed: constraints.fixed_on(axis),
            });
            measured.push(size);
        }
        (items, measured)
    }

    /// Size this stack needs when offered `proposed`.
    ///
    /// Main axis: sum of visible children plus spacing and insets. Cross
    /// axis: largest child plus insets. The result is resolved against the
    /// stack's own constraints. Memoized for the last proposal.
    pub fn fitting_size(&self, proposed: Size) -> Size {
        self.hooks.will_size_that_fits(proposed);
        if let Some(size) = self.cache.get(proposed) {
            return size;
        }
        let size = self.compute_fitting_size(proposed);
        self.cache.insert(proposed, size);
        size
    }

    fn compute_fitting_size(&self, proposed: Size) -> Size {
        if self.constraints.is_fully_fixed() {
            return self.constraints.fixed;
        }

        let axis = self.axis;
        let content = self.constraints.proposal(proposed).deflate(&self.edge_insets);
        let visible = self.visible_indices();
        let (items, mut measured) = self.main_items(&visible, content);

        // Proportional policies hand each child a share of the main axis;
        // re-measure with that share so cross sizes are height-for-width.
        let content_main = axis.main_of(content);
        if self.distribution.is_proportional() && content_main.is_finite() {
            let allocation = distribute(&self.distribution, &items, content_main, self.spacing);
            let content_cross = axis.cross_of(content);
            for (slot, &index) in visible.iter().enumerate() {
                let share = axis.size(allocation.sizes[slot], content_cross);
                measured[slot] = self.nodes[index].measured_size(share);
            }
        }

        let mut main: f32 = measured.iter().map(|size| axis.main_of(*size)).sum();
        if visible.len() > 1 {
            main += self.spacing * (visible.len() - 1) as f32;
        }
        let cross = measured
            .iter()
            .map(|size| axis.cross_of(*size))
            .fold(0.0f32, f32::max);

        let mut size = axis.size(main, cross).inflate(&self.edge_insets);

        if !self.intrinsic_size_enabled {
            if proposed.width.is_finite() {
                size.width = proposed.width;
            }
            if proposed.height.is_finite() {
                size.height = proposed.height;
            }
        }
        if self.height_ratio > 0.0 {
            size.height = size.width * self.height_ratio;
        }

        let size = self.constraints.resolve(size);
        if self.debug {
            tracing::trace!("stack {:?} fits {:?} in {:?}", axis, size, proposed);
        }
        size
    }

    /// Assign this stack's frame and lay out its children.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.layout();
    }

    /// Re-run the layout pass if something changed since the last one.
    pub fn layout_if_needed(&mut self) {
        if self.needs_layout {
            self.layout();
        }
    }

    /// Divide the current frame among visible children, in order.
    pub fn layout(&mut self) {
        self.hooks.will_layout(self.frame);

        let axis = self.axis;
        let content = self.frame.inset(&self.edge_insets);
        let content_size = content.size();
        let content_main = axis.main_of(content_size);
        let content_cross = axis.cross_of(content_size);

        let visible = self.visible_indices();
        let (items, _) = self.main_items(&visible, content_size);
        let allocation = distribute(&self.distribution, &items, content_main, self.spacing);

        let cross_start = axis.cross().start_of(content);
        let mut offset = axis.start_of(content) + allocation.leading;
        for (slot, &index) in visible.iter().enumerate() {
            let main = allocation.sizes[slot];
            let node = &mut self.nodes[index];
            let cross = node.constraints().resolve_on(axis.cross(), content_cross);
            node.assign(axis.rect(offset, cross_start, main, cross));
            offset += main + self.spacing;
        }

        if self.debug {
            tracing::trace!(
                "stack {:?} laid out {} of {} nodes in {:?}",
                axis,
                visible.len(),
                self.nodes.len(),
                self.frame
            );
        }

        self.needs_layout = false;
        self.hooks.did_layout(self.frame);
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Placeholder;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn view(id: u64, width: f32, height: f32) -> Placeholder {
        Placeholder::new(id, Size::new(width, height))
    }

    fn row_of(views: &[Placeholder]) -> Stack<Placeholder> {
        let mut stack = Stack::new(Axis::Horizontal);
        for v in views {
            stack.push(Cell::new(v.clone()));
        }
        stack
    }

    #[test]
    fn test_stack_new() {
        let stack: Stack<Placeholder> = Stack::new(Axis::Vertical);
        assert!(stack.is_empty());
        assert_eq!(stack.axis(), Axis::Vertical);
        assert!(stack.needs_layout());
    }

    #[test]
    fn test_fitting_size_empty() {
        let stack: Stack<Placeholder> = Stack::new(Axis::Horizontal).with_edge_insets(EdgeInsets::all(4.0));
        assert_eq!(stack.fitting_size(Size::new(100.0, 100.0)), Size::new(8.0, 8.0));
    }

    #[test]
    fn test_fitting_size_sums_main_and_maxes_cross() {
        let stack = row_of(&[view(1, 30.0, 10.0), view(2, 20.0, 25.0)])
            .with_spacing(5.0)
            .with_edge_insets(EdgeInsets::new(1.0, 2.0, 3.0, 4.0));
        // main: 30 + 20 + 5 + 2 + 4, cross: 25 + 1 + 3
        assert_eq!(stack.fitting_size(Size::new(500.0, 500.0)), Size::new(61.0, 29.0));
    }

    #[test]
    fn test_fitting_size_vertical() {
        let mut stack = Stack::new(Axis::Vertical).with_spacing(2.0);
        stack.push(Cell::new(view(1, 30.0, 10.0)));
        stack.push(Cell::new(view(2, 20.0, 25.0)));
        assert_eq!(stack.fitting_size(Size::new(500.0, 500.0)), Size::new(30.0, 37.0));
    }

    #[test]
    fn test_fitting_size_respects_own_constraints() {
        let stack = row_of(&[view(1, 30.0, 10.0), view(2, 20.0, 25.0)]).with_constraints(SizeConstraints {
            min: Size::new(0.0, 40.0),
            max: Size::new(45.0, 0.0),
            fixed: Size::ZERO,
        });
        assert_eq!(stack.fitting_size(Size::new(500.0, 500.0)), Size::new(45.0, 40.0));
    }

    #[test]
    fn test_fitting_size_fully_fixed_short_circuits() {
        let stack = row_of(&[view(1, 300.0, 100.0)])
            .with_constraints(SizeConstraints::fixed(Size::new(10.0, 10.0)));
        assert_eq!(stack.fitting_size(Size::new(500.0, 500.0)), Size::new(10.0, 10.0));
    }

    #[test]
    fn test_fitting_size_height_ratio() {
        let stack = row_of(&[view(1, 40.0, 10.0)]).with_height_ratio(0.5);
        assert_eq!(stack.fitting_size(Size::new(500.0, 500.0)), Size::new(40.0, 20.0));
    }

    #[test]
    fn test_fitting_size_intrinsic_disabled_uses_proposal() {
        let stack = row_of(&[view(1, 40.0, 10.0)]).with_intrinsic_size(false);
        assert_eq!(stack.fitting_size(Size::new(300.0, 200.0)), Size::new(300.0, 200.0));
        assert_eq!(stack.fitting_size(Size::new(300.0, f32::INFINITY)), Size::new(300.0, 10.0));
    }

    #[test]
    fn test_hidden_children_take_no_space_or_spacing() {
        let hidden = view(2, 50.0, 50.0);
        hidden.set_hidden(true);
        let stack = row_of(&[view(1, 30.0, 10.0), hidden, view(3, 20.0, 10.0)]).with_spacing(10.0);
        assert_eq!(stack.fitting_size(Size::new(500.0, 500.0)), Size::new(60.0, 10.0));
    }

    #[test]
    fn test_hidden_children_counted_when_not_ignored() {
        let hidden = view(2, 50.0, 50.0);
        hidden.set_hidden(true);
        let stack = row_of(&[view(1, 30.0, 10.0), hidden]).with_ignore_hidden(false);
        assert_eq!(stack.fitting_size(Size::new(500.0, 500.0)), Size::new(80.0, 50.0));
    }

    #[test]
    fn test_empty_cells_keep_their_slot() {
        let mut stack = row_of(&[view(1, 30.0, 10.0)]).with_distribution(Distribution::Equal);
        stack.push(Cell::empty());
        stack.set_frame(Rect::new(0.0, 0.0, 100.0, 10.0));
        assert_eq!(stack.nodes()[1].frame(), Rect::new(50.0, 0.0, 50.0, 10.0));
    }

    #[test]
    fn test_layout_start_packs_natural_sizes() {
        let a = view(1, 30.0, 10.0);
        let b = view(2, 20.0, 10.0);
        let mut stack = row_of(&[a.clone(), b.clone()]).with_spacing(5.0);
        stack.set_frame(Rect::new(10.0, 20.0, 200.0, 40.0));

        assert_eq!(a.frame(), Rect::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(b.frame(), Rect::new(45.0, 20.0, 20.0, 40.0));
        assert!(!stack.needs_layout());
    }

    #[test]
    fn test_layout_equal_divides_frame() {
        let a = view(1, 30.0, 10.0);
        let b = view(2, 20.0, 10.0);
        let mut stack = row_of(&[a.clone(), b.clone()])
            .with_distribution(Distribution::Equal)
            .with_spacing(10.0)
            .with_edge_insets(EdgeInsets::all(5.0));
        stack.set_frame(Rect::new(0.0, 0.0, 120.0, 30.0));

        // content 110 wide, minus 10 spacing = 100, two ways
        assert_eq!(a.frame(), Rect::new(5.0, 5.0, 50.0, 20.0));
        assert_eq!(b.frame(), Rect::new(65.0, 5.0, 50.0, 20.0));
    }

    #[test]
    fn test_layout_end_distribution() {
        let a = view(1, 30.0, 10.0);
        let mut stack = row_of(&[a.clone()]).with_distribution(Distribution::End);
        stack.set_frame(Rect::new(0.0, 0.0, 100.0, 10.0));
        assert_eq!(a.frame(), Rect::new(70.0, 0.0, 30.0, 10.0));
    }

    #[test]
    fn test_layout_cross_axis_respects_child_constraints() {
        let a = view(1, 30.0, 10.0);
        let mut stack = Stack::new(Axis::Horizontal);
        stack.push(Cell::new(a.clone()).with_max_size(Size::new(0.0, 12.0)));
        stack.set_frame(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(a.frame().height, 12.0);
    }

    #[test]
    fn test_nested_stack_recurses() {
        let a = view(1, 30.0, 10.0);
        let b = view(2, 30.0, 10.0);
        let inner = row_of(&[a.clone(), b.clone()]).with_distribution(Distribution::Equal);
        let mut outer: Stack<Placeholder> = Stack::new(Axis::Vertical)
            .with_edge_insets(EdgeInsets::all(10.0))
            .child(inner);
        outer.set_frame(Rect::new(0.0, 0.0, 120.0, 100.0));

        assert_eq!(outer.nodes()[0].frame(), Rect::new(10.0, 10.0, 100.0, 10.0));
        assert_eq!(b.frame(), Rect::new(60.0, 10.0, 50.0, 10.0));
    }

    #[test]
    fn test_insert_and_remove_out_of_range_are_noops() {
        let mut stack = row_of(&[view(1, 10.0, 10.0)]);
        assert!(stack.insert(Cell::empty(), 5).is_none());
        assert!(stack.remove(3).is_none());
        assert_eq!(stack.len(), 1);

        assert!(stack.insert(Cell::empty(), 1).is_some());
        assert_eq!(stack.len(), 2);
        assert!(stack.node(1).and_then(LayoutNode::as_cell).is_some_and(|c| c.element().is_none()));
    }

    #[test]
    fn test_first_last_accessors() {
        let stack = row_of(&[view(1, 10.0, 10.0), view(2, 10.0, 10.0)]);
        let first = stack.first().and_then(LayoutNode::as_cell).and_then(Cell::element);
        let last = stack.last().and_then(LayoutNode::as_cell).and_then(Cell::element);
        assert_eq!(first.map(|v| v.id().0), Some(1));
        assert_eq!(last.map(|v| v.id().0), Some(2));
    }

    #[test]
    fn test_set_number_of_cells_grows_and_shrinks_from_tail() {
        let mut stack = row_of(&[view(1, 10.0, 10.0), view(2, 10.0, 10.0)]);
        stack.set_number_of_cells(4);
        assert_eq!(stack.len(), 4);
        assert!(stack.cells().nth(3).is_some_and(|c| c.element().is_none()));

        stack.set_number_of_cells(1);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.cells().next().and_then(Cell::element).map(|v| v.id().0), Some(1));
    }

    #[test]
    fn test_fitting_size_is_memoized_until_mutation() {
        let mut stack = row_of(&[view(1, 10.0, 10.0)]);
        let proposal = Size::new(100.0, 100.0);
        stack.fitting_size(proposal);
        stack.fitting_size(proposal);
        assert_eq!(stack.fitting_cache().stats(), (1, 1));

        stack.set_spacing(4.0);
        assert!(stack.fitting_cache().is_empty());
    }

    #[test]
    fn test_set_needs_layout_clears_nested_caches() {
        let inner = row_of(&[view(1, 10.0, 10.0)]);
        let mut outer: Stack<Placeholder> = Stack::new(Axis::Vertical).child(inner);
        outer.fitting_size(Size::new(100.0, 100.0));
        assert!(!outer.nodes()[0].as_stack().is_some_and(|s| s.fitting_cache().is_empty()));

        outer.set_needs_layout();
        assert!(outer.nodes()[0].as_stack().is_some_and(|s| s.fitting_cache().is_empty()));
        assert!(outer.needs_layout());
    }

    #[test]
    fn test_hooks_invoked_around_layout() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b, c) = (log.clone(), log.clone(), log.clone());
        let mut stack = row_of(&[view(1, 10.0, 10.0)]).with_hooks(
            LayoutHooks::new()
                .on_will_layout(move |_| a.borrow_mut().push("will"))
                .on_did_layout(move |_| b.borrow_mut().push("did"))
                .on_will_size_that_fits(move |_| c.borrow_mut().push("fits")),
        );

        stack.fitting_size(Size::new(50.0, 50.0));
        stack.set_frame(Rect::new(0.0, 0.0, 50.0, 50.0));

        assert_eq!(*log.borrow(), vec!["fits", "will", "did"]);
    }

    #[test]
    fn test_layout_if_needed_skips_clean_stack() {
        let a = view(1, 10.0, 10.0);
        let mut stack = row_of(&[a.clone()]);
        stack.set_frame(Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(a.frame_updates(), 1);

        stack.layout_if_needed();
        assert_eq!(a.frame_updates(), 1);

        stack.set_needs_layout();
        stack.layout_if_needed();
        assert_eq!(a.frame_updates(), 2);
    }
}
