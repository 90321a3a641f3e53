//! Screen Positioning
//!
//! Splicing a screen to a new place in the flat list. Both moves return a
//! fresh list and leave `self` untouched. Callers validate legality first.

use crate::list::ScreenList;

impl ScreenList {
    /// Nest the screen at `from` under the screen at `parent`.
    ///
    /// The moved screen lands right after the parent's last existing child,
    /// or right after the parent when it has none yet.
    pub fn nest_under(&self, from: usize, parent: usize) -> Option<ScreenList> {
        if from == parent || from >= self.items.len() || parent >= self.items.len() {
            return None;
        }
        let parent_id = self.items[parent].id.clone();

        let mut items = self.items.clone();
        let mut moved = items.remove(from);
        moved.parent_id = Some(parent_id.clone());

        let parent_at = items.iter().position(|item| item.id == parent_id)?;
        let insert_at = items
            .iter()
            .rposition(|item| item.parent_id.as_ref() == Some(&parent_id))
            .map_or(parent_at + 1, |last_sibling| last_sibling + 1);

        items.insert(insert_at, moved);
        Some(ScreenList { items })
    }

    /// Move the screen at `from` to root level, in front of the row at
    /// `target`. `target` is an index into the list before removal.
    pub fn reorder_before(&self, from: usize, target: usize) -> Option<ScreenList> {
        if from == target || from >= self.items.len() || target >= self.items.len() {
            return None;
        }
        // Removal shifts everything after `from` up by one
        let insert_at = if from < target { target - 1 } else { target };
        if insert_at == from && self.items[from].parent_id.is_none() {
            return None;
        }

        let mut items = self.items.clone();
        let mut moved = items.remove(from);
        moved.parent_id = None;
        items.insert(insert_at.min(items.len()), moved);
        Some(ScreenList { items })
    }
}
