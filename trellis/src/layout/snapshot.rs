//! Serializable view of a grid's structure.

use serde::{Deserialize, Serialize};

use crate::element::ElementId;

/// Row/column counts and the element id held by every slot.
///
/// `slots[row][column]` is `None` for an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub rows: usize,
    pub columns: usize,
    pub slots: Vec<Vec<Option<ElementId>>>,
}

impl GridSnapshot {
    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().flatten().filter(|slot| slot.is_some()).count()
    }

    /// Position of `id`, if placed.
    pub fn position_of(&self, id: ElementId) -> Option<(usize, usize)> {
        self.slots.iter().enumerate().find_map(|(row, slots)| {
            slots
                .iter()
                .position(|slot| *slot == Some(id))
                .map(|column| (row, column))
        })
    }
}
