//! Aggregate displays keyed by item.

use std::collections::HashMap;

use crate::page::{ItemId, RatingDisplay};
use crate::submit::SubmissionResult;

/// Every aggregate display on the page, indexed by the item it summarises.
///
/// An item may be shown by several displays (a listing card and a detail
/// panel, say); publishing a result patches all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayBoard {
    displays: Vec<RatingDisplay>,
    subscribers: HashMap<ItemId, Vec<usize>>,
}

impl DisplayBoard {
    /// Builds a board from displays in document order.
    #[must_use]
    pub fn new(displays: Vec<RatingDisplay>) -> Self {
        let mut board = Self::default();
        for display in displays {
            board.subscribe(display);
        }
        board
    }

    fn subscribe(&mut self, display: RatingDisplay) {
        let index = self.displays.len();
        self.subscribers
            .entry(display.item_id().clone())
            .or_default()
            .push(index);
        self.displays.push(display);
    }

    /// Applies a result to every display of its item and returns how many
    /// were patched.
    pub fn publish(&mut self, result: &SubmissionResult) -> usize {
        let Some(indices) = self.subscribers.get(&result.item_id) else {
            tracing::debug!(item_id = %result.item_id, "no display subscribed");
            return 0;
        };
        let mut patched = 0;
        for &index in indices {
            if let Some(display) = self.displays.get_mut(index) {
                display.apply_summary(&result.average, result.count);
                patched += 1;
            }
        }
        tracing::debug!(item_id = %result.item_id, patched, "displays updated");
        patched
    }

    /// All displays in document order.
    #[must_use]
    pub fn displays(&self) -> &[RatingDisplay] {
        &self.displays
    }

    /// Displays summarising one item, in document order.
    ///
    /// The iterator borrows only the board, so the key may be a temporary.
    pub fn displays_for<'a>(
        &'a self,
        item_id: &ItemId,
    ) -> impl Iterator<Item = &'a RatingDisplay> + use<'a> {
        self.subscribers
            .get(item_id)
            .into_iter()
            .flatten()
            .filter_map(|&index| self.displays.get(index))
    }
}
