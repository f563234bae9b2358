//! Grid - two-dimensional arrangement built from stacks.
//!
//! A grid owns one vertical outer stack whose children are horizontal row
//! stacks, each holding `columns` cells:
//!
//! ```text
//! Grid -> outer Stack (vertical) -> row Stacks (horizontal) -> Cells -> Elements
//! ```
//!
//! The grid's `axis` only selects the placement order: row-major for
//! `Horizontal`, column-major for `Vertical`. Row height and column width
//! constraints are fanned out to every row and every cell whenever they, or
//! the topology, change, so all rows always have the same number of cells
//! and the same constraints.

use std::fmt;

use crate::element::Element;
use crate::primitives::{EdgeInsets, Rect, Size};

use super::cell::Cell;
use super::child::LayoutNode;
use super::constraints::SizeConstraints;
use super::distribution::Distribution;
use super::hooks::LayoutHooks;
use super::length::Axis;
use super::snapshot::GridSnapshot;
use super::stack::Stack;

/// Min/max/fixed extent applied uniformly to every row (height) or every
/// column (width). Zero means unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Track {
    pub min: f32,
    pub max: f32,
    pub fixed: f32,
}

impl Track {
    /// Write all three components on `axis`. A positive fixed value wins
    /// over min/max when the constraints are resolved.
    fn apply(&self, constraints: &mut SizeConstraints, axis: Axis) {
        constraints.set_fixed_on(axis, self.fixed);
        constraints.set_min_on(axis, self.min);
        constraints.set_max_on(axis, self.max);
    }
}

/// A fresh cell carrying the current column constraints.
fn new_cell<E>(column: Track, debug: bool) -> Cell<E> {
    let mut cell = Cell::empty().with_debug(debug);
    column.apply(cell.constraints_mut(), Axis::Horizontal);
    cell
}

/// A grid of elements.
pub struct Grid<E> {
    axis: Axis,
    is_auto_size: bool,
    columns: usize,
    /// Floor for width-driven column counts.
    initial_columns: usize,
    row_track: Track,
    column_track: Track,
    horizontal_spacing: f32,
    debug: bool,
    views: Vec<E>,
    stack: Stack<E>,
    bounds: Rect,
    /// Bounds size seen by the last width-driven arrangement.
    last_size: Option<Size>,
    needs_layout: bool,
    hooks: LayoutHooks,
    attach: Option<Box<dyn FnMut(&E)>>,
}

impl<E: fmt::Debug> fmt::Debug for Grid<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("axis", &self.axis)
            .field("is_auto_size", &self.is_auto_size)
            .field("rows", &self.stack.len())
            .field("columns", &self.columns)
            .field("row_track", &self.row_track)
            .field("column_track", &self.column_track)
            .field("views", &self.views)
            .field("bounds", &self.bounds)
            .field("needs_layout", &self.needs_layout)
            .finish_non_exhaustive()
    }
}

impl<E: Element> Default for Grid<E> {
    fn default() -> Self {
        Self::new(Axis::Horizontal)
    }
}

impl<E: Element> Grid<E> {
    /// Create an empty grid (no rows, no columns).
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            is_auto_size: false,
            columns: 0,
            initial_columns: 0,
            row_track: Track::default(),
            column_track: Track::default(),
            horizontal_spacing: 0.0,
            debug: false,
            views: Vec::new(),
            stack: Stack::new(Axis::Vertical).with_distribution(Distribution::Equal),
            bounds: Rect::ZERO,
            last_size: None,
            needs_layout: true,
            hooks: LayoutHooks::default(),
            attach: None,
        }
    }

    /// Create a grid with `rows` rows of `columns` empty cells.
    pub fn with_dimensions(axis: Axis, columns: usize, rows: usize) -> Self {
        let mut grid = Self::new(axis);
        grid.set_rows(rows);
        grid.set_columns(columns);
        grid
    }

    /// Create a grid and run `configure` against it before returning it.
    pub fn build(axis: Axis, configure: impl FnOnce(&mut Self)) -> Self {
        let mut grid = Self::new(axis);
        configure(&mut grid);
        grid
    }

    // =====================================================================
    // Configuration
    // =====================================================================

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Change the placement order and re-arrange.
    pub fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
        self.arrange_views(true);
    }

    pub fn is_auto_size(&self) -> bool {
        self.is_auto_size
    }

    /// Derive the row (or column) count from the number of views. Turning
    /// it on re-arranges any current views.
    pub fn set_auto_size(&mut self, auto_size: bool) {
        self.is_auto_size = auto_size;
        if auto_size {
            self.arrange_views(true);
        }
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Set the debug flag on the grid, every row and every cell.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
        self.stack.set_debug(debug);
        for node in self.stack.nodes_mut() {
            if let LayoutNode::Stack(row) = node {
                row.set_debug(debug);
                for cell in row.nodes_mut() {
                    cell.set_debug(debug);
                }
            }
        }
    }

    pub fn edge_insets(&self) -> EdgeInsets {
        self.stack.edge_insets()
    }

    pub fn set_edge_insets(&mut self, insets: EdgeInsets) {
        self.stack.set_edge_insets(insets);
        self.set_needs_layout();
    }

    pub fn min_size(&self) -> Size {
        self.stack.constraints().min
    }

    pub fn set_min_size(&mut self, size: Size) {
        self.stack.constraints_mut().min = size;
        self.set_needs_layout();
    }

    pub fn max_size(&self) -> Size {
        self.stack.constraints().max
    }

    pub fn set_max_size(&mut self, size: Size) {
        self.stack.constraints_mut().max = size;
        self.set_needs_layout();
    }

    pub fn fixed_size(&self) -> Size {
        self.stack.constraints().fixed
    }

    pub fn set_fixed_size(&mut self, size: Size) {
        self.stack.constraints_mut().fixed = size;
        self.set_needs_layout();
    }

    pub fn height_ratio(&self) -> f32 {
        self.stack.height_ratio()
    }

    pub fn set_height_ratio(&mut self, ratio: f32) {
        self.stack.set_height_ratio(ratio);
        self.set_needs_layout();
    }

    pub fn is_intrinsic_size_enabled(&self) -> bool {
        self.stack.is_intrinsic_size_enabled()
    }

    pub fn set_intrinsic_size_enabled(&mut self, enabled: bool) {
        self.stack.set_intrinsic_size_enabled(enabled);
        self.set_needs_layout();
    }

    /// Gap between rows.
    pub fn vertical_spacing(&self) -> f32 {
        self.stack.spacing()
    }

    pub fn set_vertical_spacing(&mut self, spacing: f32) {
        self.stack.set_spacing(spacing);
        self.set_needs_layout();
    }

    /// Gap between cells within a row.
    pub fn horizontal_spacing(&self) -> f32 {
        self.horizontal_spacing
    }

    pub fn set_horizontal_spacing(&mut self, spacing: f32) {
        self.horizontal_spacing = spacing;
        for node in self.stack.nodes_mut() {
            if let LayoutNode::Stack(row) = node {
                row.set_spacing(spacing);
            }
        }
        self.set_needs_layout();
    }

    pub fn set_hooks(&mut self, hooks: LayoutHooks) {
        self.hooks = hooks;
    }

    /// Install the capability used to attach newly supplied views to the
    /// host's view tree.
    pub fn set_attach_handler(&mut self, handler: impl FnMut(&E) + 'static) {
        self.attach = Some(Box::new(handler));
    }

    // =====================================================================
    // Row / column constraints
    // =====================================================================

    pub fn row_track(&self) -> Track {
        self.row_track
    }

    pub fn column_track(&self) -> Track {
        self.column_track
    }

    pub fn min_row_height(&self) -> f32 {
        self.row_track.min
    }

    pub fn set_min_row_height(&mut self, height: f32) {
        self.row_track.min = height;
        self.apply_row_track();
    }

    pub fn max_row_height(&self) -> f32 {
        self.row_track.max
    }

    pub fn set_max_row_height(&mut self, height: f32) {
        self.row_track.max = height;
        self.apply_row_track();
    }

    pub fn fixed_row_height(&self) -> f32 {
        self.row_track.fixed
    }

    pub fn set_fixed_row_height(&mut self, height: f32) {
        self.row_track.fixed = height;
        self.apply_row_track();
    }

    pub fn min_column_width(&self) -> f32 {
        self.column_track.min
    }

    pub fn set_min_column_width(&mut self, width: f32) {
        self.column_track.min = width;
        self.apply_column_track();
    }

    pub fn max_column_width(&self) -> f32 {
        self.column_track.max
    }

    /// A positive max column width also enables width-driven column counts.
    pub fn set_max_column_width(&mut self, width: f32) {
        self.column_track.max = width;
        self.apply_column_track();
    }

    pub fn fixed_column_width(&self) -> f32 {
        self.column_track.fixed
    }

    pub fn set_fixed_column_width(&mut self, width: f32) {
        self.column_track.fixed = width;
        self.apply_column_track();
    }

    /// Push the row track into every row's own constraints.
    fn apply_row_track(&mut self) {
        let track = self.row_track;
        for node in self.stack.nodes_mut() {
            if let LayoutNode::Stack(row) = node {
                track.apply(row.constraints_mut(), Axis::Vertical);
            }
        }
        self.set_needs_layout();
    }

    /// Push the column track into every cell of every row.
    fn apply_column_track(&mut self) {
        let track = self.column_track;
        for node in self.stack.nodes_mut() {
            if let LayoutNode::Stack(row) = node {
                for cell in row.nodes_mut() {
                    track.apply(cell.constraints_mut(), Axis::Horizontal);
                }
            }
        }
        self.set_needs_layout();
    }

    // =====================================================================
    // Topology
    // =====================================================================

    pub fn rows(&self) -> usize {
        self.stack.len()
    }

    /// Grow or shrink to `rows` rows. Setting the current count is a no-op;
    /// zero removes every row. Views are re-placed in traversal order.
    pub fn set_rows(&mut self, rows: usize) {
        if rows == self.stack.len() {
            return;
        }
        self.resize_rows(rows);
        self.replace_views();
    }

    fn resize_rows(&mut self, rows: usize) {
        let count = self.stack.len();
        if rows == count {
            return;
        }
        tracing::debug!("grid rows {} -> {}", count, rows);
        if rows == 0 {
            self.stack.remove_all();
        }
        while self.stack.len() > rows {
            self.stack.remove_last();
        }
        while self.stack.len() < rows {
            let row = self.new_row();
            self.stack.push(row);
        }
        self.set_needs_layout();
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Set the number of cells in every row. The value also becomes the
    /// floor for width-driven column counts.
    pub fn set_columns(&mut self, columns: usize) {
        self.initial_columns = columns;
        if columns == self.columns {
            return;
        }
        self.resize_columns(columns);
        self.replace_views();
    }

    /// Fan a new per-row cell count out to every row, then re-apply the
    /// column constraints so new cells match the old ones.
    fn resize_columns(&mut self, columns: usize) {
        if columns != self.columns {
            tracing::debug!("grid columns {} -> {}", self.columns, columns);
        }
        self.columns = columns;
        let debug = self.debug;
        for node in self.stack.nodes_mut() {
            if let LayoutNode::Stack(row) = node {
                row.set_number_of_cells(columns);
                for cell in row.nodes_mut() {
                    cell.set_debug(debug);
                }
            }
        }
        self.apply_column_track();
    }

    /// A row with the current column count, spacing, debug flag and
    /// row/column constraints.
    fn new_row(&self) -> Stack<E> {
        let mut row = Stack::new(Axis::Horizontal)
            .with_distribution(Distribution::Equal)
            .with_spacing(self.horizontal_spacing);
        row.set_debug(self.debug);
        self.row_track.apply(row.constraints_mut(), Axis::Vertical);
        for _ in 0..self.columns {
            row.push(new_cell(self.column_track, self.debug));
        }
        row
    }

    /// Append a row and return it.
    pub fn add_row(&mut self) -> &mut Stack<E> {
        let row = self.new_row();
        self.stack.push(row);
        self.set_needs_layout();
        self.replace_views();
        match self.stack.last_mut() {
            Some(LayoutNode::Stack(row)) => row,
            _ => unreachable!("grid rows are stacks"),
        }
    }

    /// Insert a row at `index` (`index == rows()` appends). Out of range is a no-op.
    pub fn insert_row(&mut self, index: usize) -> Option<&mut Stack<E>> {
        if index > self.stack.len() {
            tracing::debug!("insert_row: index {} out of range ({} rows)", index, self.stack.len());
            return None;
        }
        let row = self.new_row();
        self.stack.insert(row, index);
        self.set_needs_layout();
        self.replace_views();
        self.row_mut(index)
    }

    /// Remove the row at `index`. Out of range is a no-op.
    pub fn remove_row(&mut self, index: usize) -> Option<Stack<E>> {
        let removed = self.stack.remove(index)?;
        self.set_needs_layout();
        self.replace_views();
        match removed {
            LayoutNode::Stack(row) => Some(*row),
            LayoutNode::Leaf(_) => None,
        }
    }

    /// Remove the last row. No-op on an empty grid.
    pub fn remove_last_row(&mut self) -> Option<Stack<E>> {
        match self.stack.len() {
            0 => {
                tracing::debug!("remove_last_row: grid has no rows");
                None
            }
            count => self.remove_row(count - 1),
        }
    }

    /// Append a cell to every row.
    pub fn add_column(&mut self) {
        let (track, debug) = (self.column_track, self.debug);
        for node in self.stack.nodes_mut() {
            if let LayoutNode::Stack(row) = node {
                row.push(new_cell(track, debug));
            }
        }
        self.columns += 1;
        self.set_needs_layout();
        self.replace_views();
    }

    /// Insert a cell at `index` in every row. Returns false (and changes
    /// nothing) when `index > columns()`.
    pub fn insert_column(&mut self, index: usize) -> bool {
        if index > self.columns {
            tracing::debug!("insert_column: index {} out of range ({} columns)", index, self.columns);
            return false;
        }
        let (track, debug) = (self.column_track, self.debug);
        for node in self.stack.nodes_mut() {
            if let LayoutNode::Stack(row) = node {
                row.insert(new_cell(track, debug), index);
            }
        }
        self.columns += 1;
        self.set_needs_layout();
        self.replace_views();
        true
    }

    /// Remove the cell at `index` from every row. Out of range is a no-op.
    pub fn remove_column(&mut self, index: usize) -> bool {
        if index >= self.columns {
            tracing::debug!("remove_column: index {} out of range ({} columns)", index, self.columns);
            return false;
        }
        for node in self.stack.nodes_mut() {
            if let LayoutNode::Stack(row) = node {
                row.remove(index);
            }
        }
        self.columns -= 1;
        self.set_needs_layout();
        self.replace_views();
        true
    }

    /// Remove the last cell from every row. No-op when there are no columns.
    pub fn remove_last_column(&mut self) -> bool {
        match self.columns {
            0 => false,
            count => self.remove_column(count - 1),
        }
    }

    /// Remove every row. The column count is kept for rows added later.
    pub fn remove_all_cells(&mut self) {
        self.resize_rows(0);
    }

    // =====================================================================
    // Access
    // =====================================================================

    pub fn row(&self, index: usize) -> Option<&Stack<E>> {
        self.stack.node(index)?.as_stack()
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut Stack<E>> {
        self.stack.node_mut(index)?.as_stack_mut()
    }

    pub fn first_row(&self) -> Option<&Stack<E>> {
        self.stack.first()?.as_stack()
    }

    pub fn last_row(&self) -> Option<&Stack<E>> {
        self.stack.last()?.as_stack()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell<E>> {
        self.row(row)?.node(column)?.as_cell()
    }

    pub fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut Cell<E>> {
        self.row_mut(row)?.node_mut(column)?.as_cell_mut()
    }

    /// Every cell in row-major order.
    pub fn all_cells(&self) -> impl Iterator<Item = &Cell<E>> {
        self.stack
            .nodes()
            .iter()
            .filter_map(LayoutNode::as_stack)
            .flat_map(Stack::cells)
    }

    /// Last cell of the last row, optionally the last one holding an element.
    pub fn last_cell(&self, containing_element: bool) -> Option<&Cell<E>> {
        let row = self.last_row()?;
        if containing_element {
            row.cells().filter(|cell| cell.element().is_some()).last()
        } else {
            row.cells().last()
        }
    }

    /// The outer (vertical) stack.
    pub fn stack(&self) -> &Stack<E> {
        &self.stack
    }

    pub fn view_at(&self, row: usize, column: usize) -> Option<&E> {
        self.cell(row, column)?.element()
    }

    /// Elements in `row`, left to right. Empty when out of range.
    pub fn views_at_row(&self, row: usize) -> Vec<&E> {
        self.row(row)
            .map(|stack| stack.cells().filter_map(Cell::element).collect())
            .unwrap_or_default()
    }

    /// Elements in `column`, top to bottom. Empty when out of range.
    pub fn views_at_column(&self, column: usize) -> Vec<&E> {
        (0..self.rows())
            .filter_map(|row| self.view_at(row, column))
            .collect()
    }

    // =====================================================================
    // Views
    // =====================================================================

    pub fn views(&self) -> &[E] {
        &self.views
    }

    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Replace the element list and re-arrange.
    ///
    /// Elements not present in the previous list are passed to the attach
    /// handler first. An empty list clears every slot.
    pub fn set_views(&mut self, views: Vec<E>) {
        if let Some(attach) = self.attach.as_mut() {
            for view in &views {
                let id = view.id();
                if !self.views.iter().any(|old| old.id() == id) {
                    attach(view);
                }
            }
        }

        tracing::debug!("grid views {} -> {}", self.views.len(), views.len());
        self.views = views;
        if self.views.is_empty() {
            self.clear_slots();
            self.set_needs_layout();
            return;
        }
        self.arrange_views(true);
    }

    fn clear_slots(&mut self) {
        for node in self.stack.nodes_mut() {
            if let LayoutNode::Stack(row) = node {
                for cell in row.nodes_mut() {
                    if let Some(cell) = cell.as_cell_mut() {
                        cell.set_element(None);
                    }
                }
            }
        }
    }

    /// Slots in placement order: row-major for a horizontal grid,
    /// column-major for a vertical one.
    fn slot_order(&self) -> Vec<(usize, usize)> {
        let rows = self.rows();
        match self.axis {
            Axis::Horizontal => (0..rows)
                .flat_map(|row| {
                    let len = self.row(row).map_or(0, Stack::len);
                    (0..len).map(move |column| (row, column))
                })
                .collect(),
            Axis::Vertical => (0..self.columns)
                .flat_map(|column| (0..rows).map(move |row| (row, column)))
                .collect(),
        }
    }

    /// Recompute counts and place `views[i]` into the i-th slot.
    ///
    /// With `auto_columns`, a horizontal grid with a positive max column
    /// width first derives its column count from the available width and,
    /// if that changed, re-enters once with `auto_columns` off.
    pub fn arrange_views(&mut self, auto_columns: bool) {
        let view_count = self.views.len();
        if view_count == 0 {
            return;
        }

        if self.is_auto_size {
            match self.axis {
                Axis::Horizontal if self.columns > 0 => {
                    let fit_rows = view_count.div_ceil(self.columns).max(1);
                    self.resize_rows(fit_rows);
                }
                Axis::Vertical if self.rows() > 0 => {
                    let fit_columns = view_count.div_ceil(self.rows()).max(1);
                    if fit_columns != self.columns {
                        self.resize_columns(fit_columns);
                    }
                }
                _ => {}
            }
        }

        if self.axis == Axis::Horizontal && auto_columns && self.column_track.max > 0.0 {
            let available = self.bounds.size();
            self.last_size = Some(available);
            // Columns past the view count would stay empty.
            let floor = self.initial_columns.max(1);
            let ceiling = view_count.max(floor);
            let by_width = (available.width / self.column_track.max).floor() as usize;
            let fit_columns = by_width.clamp(floor, ceiling);
            if fit_columns != self.columns {
                tracing::debug!(
                    "grid width {} fits {} columns of at most {}",
                    available.width,
                    fit_columns,
                    self.column_track.max
                );
                self.resize_columns(fit_columns);
                self.arrange_views(false);
                return;
            }
        }

        self.place_views();
    }

    /// After a structural edit, put `views[i]` back into the i-th slot.
    fn replace_views(&mut self) {
        if !self.views.is_empty() {
            self.place_views();
        }
    }

    /// Place `views[i]` into the i-th slot in traversal order, clear the
    /// remaining slots, then run the layout pass.
    fn place_views(&mut self) {
        let view_count = self.views.len();
        let slots = self.slot_order();
        if view_count > slots.len() {
            tracing::debug!("place_views: {} views for {} slots", view_count, slots.len());
        }
        for (index, (row, column)) in slots.into_iter().enumerate() {
            let element = self.views.get(index).cloned();
            if let Some(cell) = self.cell_mut(row, column) {
                cell.set_element(element);
            }
        }
        tracing::trace!("placed {} views into {}x{}", view_count, self.rows(), self.columns);

        self.set_needs_layout();
        self.layout_if_needed();
    }

    /// Structural summary: counts plus the element id in every slot.
    pub fn snapshot(&self) -> GridSnapshot {
        let slots = self
            .stack
            .nodes()
            .iter()
            .filter_map(LayoutNode::as_stack)
            .map(|row| {
                row.cells()
                    .map(|cell| cell.element().map(Element::id))
                    .collect()
            })
            .collect();
        GridSnapshot {
            rows: self.rows(),
            columns: self.columns,
            slots,
        }
    }

    // =====================================================================
    // Sizing and layout
    // =====================================================================

    /// Size the grid needs when offered `size`.
    pub fn size_that_fits(&self, size: Size) -> Size {
        self.hooks.will_size_that_fits(size);
        self.stack.fitting_size(size)
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Set the grid's own frame. Takes effect on the next layout pass.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if bounds != self.bounds {
            self.bounds = bounds;
            self.needs_layout = true;
        }
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Mark the whole tree dirty (and drop memoized sizes).
    pub fn set_needs_layout(&mut self) {
        self.needs_layout = true;
        self.stack.set_needs_layout();
    }

    pub fn layout_if_needed(&mut self) {
        if self.needs_layout {
            self.layout();
        }
    }

    /// Run a layout pass.
    ///
    /// With a positive max column width, a bounds size different from the
    /// last one re-runs the arrangement first (which finishes the pass).
    pub fn layout(&mut self) {
        if self.column_track.max > 0.0 && self.last_size != Some(self.bounds.size()) && !self.views.is_empty() {
            self.last_size = Some(self.bounds.size());
            self.arrange_views(true);
            if !self.needs_layout {
                return;
            }
        }

        self.hooks.will_layout(self.bounds);
        if self.stack.frame() != self.bounds || self.stack.needs_layout() {
            self.stack.set_frame(self.bounds);
        }
        self.needs_layout = false;
        self.hooks.did_layout(self.bounds);
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementId, Placeholder};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn views(count: u64) -> Vec<Placeholder> {
        (0..count).map(|id| Placeholder::new(id, Size::new(20.0, 10.0))).collect()
    }

    fn ids(views: &[&Placeholder]) -> Vec<u64> {
        views.iter().map(|v| v.id().0).collect()
    }

    fn assert_rectangular(grid: &Grid<Placeholder>) {
        for row in 0..grid.rows() {
            assert_eq!(grid.row(row).map(Stack::len), Some(grid.columns()), "row {row}");
        }
    }

    #[test]
    fn test_grid_new_is_empty() {
        let grid: Grid<Placeholder> = Grid::new(Axis::Horizontal);
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.columns(), 0);
        assert_eq!(grid.view_count(), 0);
    }

    #[test]
    fn test_with_dimensions() {
        let grid: Grid<Placeholder> = Grid::with_dimensions(Axis::Horizontal, 3, 2);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 3);
        assert_rectangular(&grid);
    }

    #[test]
    fn test_build_runs_configuration() {
        let grid: Grid<Placeholder> = Grid::build(Axis::Vertical, |grid| {
            grid.set_rows(2);
            grid.set_columns(2);
            grid.set_vertical_spacing(4.0);
        });
        assert_eq!(grid.axis(), Axis::Vertical);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.vertical_spacing(), 4.0);
    }

    #[test]
    fn test_set_rows_grow_shrink_zero() {
        let mut grid: Grid<Placeholder> = Grid::with_dimensions(Axis::Horizontal, 2, 1);
        grid.set_rows(4);
        assert_eq!(grid.rows(), 4);
        assert_rectangular(&grid);

        grid.set_rows(2);
        assert_eq!(grid.rows(), 2);

        grid.set_rows(0);
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.columns(), 2);
    }

    #[test]
    fn test_new_rows_carry_row_and_column_constraints() {
        let mut grid: Grid<Placeholder> = Grid::with_dimensions(Axis::Horizontal, 2, 0);
        grid.set_fixed_row_height(44.0);
        grid.set_min_column_width(30.0);
        grid.set_horizontal_spacing(6.0);
        grid.set_rows(1);

        let row = grid.row(0).expect("row");
        assert_eq!(row.constraints().fixed_on(Axis::Vertical), Some(44.0));
        assert_eq!(row.spacing(), 6.0);
        assert!(row.cells().all(|cell| cell.constraints().effective_min(Axis::Horizontal) == 30.0));
    }

    #[test]
    fn test_row_constraints_fan_out_to_existing_rows() {
        let mut grid: Grid<Placeholder> = Grid::with_dimensions(Axis::Horizontal, 2, 3);
        grid.set_min_row_height(20.0);
        grid.set_max_row_height(80.0);
        for row in 0..3 {
            let constraints = grid.row(row).expect("row").constraints();
            assert_eq!(constraints.effective_min(Axis::Vertical), 20.0);
            assert_eq!(constraints.effective_max(Axis::Vertical), 80.0);
        }
    }

    #[test]
    fn test_fixed_column_width_overrides_min_max() {
        let mut grid: Grid<Placeholder> = Grid::with_dimensions(Axis::Horizontal, 3, 2);
        grid.set_min_column_width(10.0);
        grid.set_max_column_width(200.0);
        grid.set_fixed_column_width(50.0);

        for cell in grid.all_cells() {
            assert_eq!(cell.constraints().effective_min(Axis::Horizontal), 50.0);
            assert_eq!(cell.constraints().effective_max(Axis::Horizontal), 50.0);
        }

        grid.set_fixed_column_width(0.0);
        let cell = grid.cell(0, 0).expect("cell");
        assert_eq!(cell.constraints().effective_min(Axis::Horizontal), 10.0);
        assert_eq!(cell.constraints().effective_max(Axis::Horizontal), 200.0);
    }

    #[test]
    fn test_add_and_insert_column_keep_grid_rectangular() {
        let mut grid: Grid<Placeholder> = Grid::with_dimensions(Axis::Horizontal, 2, 3);
        grid.set_fixed_column_width(25.0);
        grid.add_column();
        assert!(grid.insert_column(0));
        assert_eq!(grid.columns(), 4);
        assert_rectangular(&grid);
        assert!(grid.all_cells().all(|cell| cell.constraints().fixed_on(Axis::Horizontal) == Some(25.0)));

        assert!(!grid.insert_column(9));
        assert_eq!(grid.columns(), 4);
    }

    #[test]
    fn test_remove_column_out_of_range_is_noop() {
        let mut grid: Grid<Placeholder> = Grid::with_dimensions(Axis::Horizontal, 2, 2);
        assert!(!grid.remove_column(2));
        assert!(grid.remove_column(0));
        assert!(grid.remove_last_column());
        assert!(!grid.remove_last_column());
        assert_eq!(grid.columns(), 0);
        assert_rectangular(&grid);
    }

    #[test]
    fn test_insert_and_remove_row() {
        let mut grid: Grid<Placeholder> = Grid::with_dimensions(Axis::Horizontal, 2, 2);
        assert!(grid.insert_row(1).is_some());
        assert!(grid.insert_row(5).is_none());
        assert_eq!(grid.rows(), 3);
        assert_rectangular(&grid);

        assert!(grid.remove_row(7).is_none());
        assert!(grid.remove_row(0).is_some());
        assert_eq!(grid.rows(), 2);
    }

    #[test]
    fn test_remove_last_row_on_empty_grid() {
        let mut grid: Grid<Placeholder> = Grid::with_dimensions(Axis::Horizontal, 2, 1);
        assert!(grid.remove_last_row().is_some());
        assert!(grid.remove_last_row().is_none());
        assert_eq!(grid.rows(), 0);
    }

    #[test]
    fn test_set_views_row_major() {
        let mut grid = Grid::with_dimensions(Axis::Horizontal, 2, 2);
        grid.set_views(views(3));

        assert_eq!(grid.view_at(0, 0).map(|v| v.id()), Some(ElementId(0)));
        assert_eq!(grid.view_at(0, 1).map(|v| v.id()), Some(ElementId(1)));
        assert_eq!(grid.view_at(1, 0).map(|v| v.id()), Some(ElementId(2)));
        assert!(grid.view_at(1, 1).is_none());
    }

    #[test]
    fn test_views_at_row_and_column() {
        let mut grid = Grid::with_dimensions(Axis::Horizontal, 3, 2);
        grid.set_views(views(5));

        assert_eq!(ids(&grid.views_at_row(0)), vec![0, 1, 2]);
        assert_eq!(ids(&grid.views_at_row(1)), vec![3, 4]);
        assert_eq!(ids(&grid.views_at_column(1)), vec![1, 4]);
        assert!(grid.views_at_row(9).is_empty());
        assert!(grid.views_at_column(9).is_empty());
        assert!(grid.view_at(9, 0).is_none());
    }

    #[test]
    fn test_fewer_views_clears_trailing_slots() {
        let mut grid = Grid::with_dimensions(Axis::Horizontal, 2, 2);
        grid.set_views(views(4));
        grid.set_views(views(2));
        assert!(grid.view_at(1, 0).is_none());
        assert!(grid.view_at(1, 1).is_none());
        assert_eq!(grid.view_count(), 2);
    }

    #[test]
    fn test_empty_views_clear_every_slot() {
        let mut grid = Grid::with_dimensions(Axis::Horizontal, 2, 2);
        grid.set_views(views(4));
        grid.set_views(Vec::new());
        assert!(grid.all_cells().all(|cell| cell.element().is_none()));
    }

    #[test]
    fn test_attach_handler_sees_only_new_views() {
        let attached = Rc::new(RefCell::new(Vec::new()));
        let sink = attached.clone();
        let mut grid = Grid::with_dimensions(Axis::Horizontal, 2, 2);
        grid.set_attach_handler(move |view: &Placeholder| sink.borrow_mut().push(view.id().0));

        let all = views(3);
        grid.set_views(all[..2].to_vec());
        grid.set_views(all.clone());

        assert_eq!(*attached.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_last_cell() {
        let mut grid = Grid::with_dimensions(Axis::Horizontal, 3, 1);
        grid.set_views(views(2));
        assert!(grid.last_cell(false).is_some_and(|cell| cell.element().is_none()));
        assert_eq!(
            grid.last_cell(true).and_then(Cell::element).map(|v| v.id()),
            Some(ElementId(1))
        );
    }

    #[test]
    fn test_layout_assigns_equal_cells() {
        let all = views(4);
        let mut grid = Grid::with_dimensions(Axis::Horizontal, 2, 2);
        grid.set_horizontal_spacing(10.0);
        grid.set_vertical_spacing(10.0);
        grid.set_views(all.clone());
        grid.set_bounds(Rect::new(0.0, 0.0, 210.0, 110.0));
        grid.layout_if_needed();

        assert_eq!(all[0].frame(), Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(all[1].frame(), Rect::new(110.0, 0.0, 100.0, 50.0));
        assert_eq!(all[3].frame(), Rect::new(110.0, 60.0, 100.0, 50.0));
        assert!(!grid.needs_layout());
    }

    #[test]
    fn test_size_that_fits() {
        let mut grid = Grid::with_dimensions(Axis::Horizontal, 3, 2);
        grid.set_horizontal_spacing(5.0);
        grid.set_vertical_spacing(2.0);
        grid.set_edge_insets(EdgeInsets::all(1.0));
        grid.set_views(views(6));

        // width: 3 * 20 + 2 * 5 + 2, height: 2 * 10 + 2 + 2
        assert_eq!(grid.size_that_fits(Size::new(1000.0, 1000.0)), Size::new(72.0, 24.0));
    }

    #[test]
    fn test_size_that_fits_with_fixed_row_height() {
        let mut grid = Grid::with_dimensions(Axis::Horizontal, 2, 3);
        grid.set_fixed_row_height(30.0);
        grid.set_views(views(6));
        assert_eq!(grid.size_that_fits(Size::new(1000.0, 1000.0)).height, 90.0);
    }

    #[test]
    fn test_grid_hooks() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b, c) = (log.clone(), log.clone(), log.clone());
        let mut grid: Grid<Placeholder> = Grid::with_dimensions(Axis::Horizontal, 1, 1);
        grid.set_hooks(
            LayoutHooks::new()
                .on_will_layout(move |_| a.borrow_mut().push("will"))
                .on_did_layout(move |_| b.borrow_mut().push("did"))
                .on_will_size_that_fits(move |_| c.borrow_mut().push("fits")),
        );

        grid.size_that_fits(Size::new(100.0, 100.0));
        grid.set_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));
        grid.layout_if_needed();
        grid.layout_if_needed();

        assert_eq!(*log.borrow(), vec!["fits", "will", "did"]);
    }

    #[test]
    fn test_debug_fans_out() {
        let mut grid: Grid<Placeholder> = Grid::with_dimensions(Axis::Horizontal, 2, 2);
        grid.set_debug(true);
        assert!(grid.row(1).is_some_and(Stack::debug));
        assert!(grid.all_cells().all(Cell::debug));

        grid.add_column();
        assert!(grid.all_cells().all(Cell::debug));
    }

    #[test]
    fn test_snapshot_reports_slots() {
        let mut grid = Grid::with_dimensions(Axis::Horizontal, 2, 2);
        grid.set_views(views(3));
        let snapshot = grid.snapshot();
        assert_eq!(snapshot.rows, 2);
        assert_eq!(snapshot.columns, 2);
        assert_eq!(
            snapshot.slots,
            vec![
                vec![Some(ElementId(0)), Some(ElementId(1))],
                vec![Some(ElementId(2)), None],
            ]
        );
    }
}
