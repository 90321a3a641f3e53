//! Drag/Drop Controller
//!
//! Reorder-and-nest state machine over a `ScreenList`.
//!
//! `Idle` -> `Dragging` on begin, `Dragging` -> `Dragging` on every pointer
//! sample, back to `Idle` on drop or cancel. Everything is synchronous; the
//! UI feeds native drag events in through [`reduce`].

use serde::{Deserialize, Serialize};

use crate::error::MoveRejected;
use crate::list::ScreenList;
use crate::notice::Notice;
use crate::screen::ScreenId;

/// Horizontal band of a row that means "nest under this row"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NestZone {
    /// Pointer offset fraction above which a hover nests instead of reorders
    #[serde(default = "default_nest_threshold")]
    pub threshold: f64,
}

fn default_nest_threshold() -> f64 {
    0.75
}

impl Default for NestZone {
    fn default() -> Self {
        Self { threshold: default_nest_threshold() }
    }
}

impl NestZone {
    pub fn is_nest(&self, offset_fraction: f64) -> bool {
        offset_fraction > self.threshold
    }
}

/// Where the pointer currently is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Flat list index of the hovered row
    pub hovered_index: usize,
    /// Horizontal pointer offset within the row, 0.0 (left) to 1.0 (right)
    pub offset_fraction: f64,
}

/// A legal pending drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTarget {
    pub index: usize,
    pub is_nested: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        dragged: ScreenId,
        target: Option<DropTarget>,
    },
}

/// Result of applying a drop
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    Moved(ScreenList),
    /// Nothing to apply (no drag, no legal target, stale target)
    NoTarget,
    Rejected(MoveRejected),
}

impl DragState {
    pub fn begin(dragged: ScreenId) -> Self {
        DragState::Dragging { dragged, target: None }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn dragged(&self) -> Option<&ScreenId> {
        match self {
            DragState::Dragging { dragged, .. } => Some(dragged),
            DragState::Idle => None,
        }
    }

    pub fn target(&self) -> Option<DropTarget> {
        match self {
            DragState::Dragging { target, .. } => *target,
            DragState::Idle => None,
        }
    }

    /// Recompute the candidate target for a pointer sample.
    ///
    /// Illegal candidates clear the target rather than erroring.
    pub fn retarget(&mut self, list: &ScreenList, pointer: PointerSample, zone: &NestZone) {
        if let DragState::Dragging { dragged, target } = self {
            *target = evaluate(list, dragged, pointer, zone);
        }
    }

    /// The pointer left a row: keep dragging, forget the candidate
    pub fn clear_target(&mut self) {
        if let DragState::Dragging { target, .. } = self {
            *target = None;
        }
    }

    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }

    /// Apply the last legal target and return to `Idle`.
    pub fn complete(&mut self, list: &ScreenList) -> DropOutcome {
        let state = std::mem::take(self);
        let DragState::Dragging { dragged, target: Some(target) } = state else {
            return DropOutcome::NoTarget;
        };
        let Some(from) = list.position(&dragged) else {
            return DropOutcome::NoTarget;
        };
        // The list may have changed since the last pointer sample
        match list.get(target.index) {
            Some(row) if row.id != dragged => {}
            _ => return DropOutcome::NoTarget,
        }

        if target.is_nested {
            if list.has_children(&dragged) {
                tracing::debug!(screen = %dragged, "nest refused: screen has nested screens");
                return DropOutcome::Rejected(MoveRejected::HasNestedScreens { id: dragged });
            }
            match list.nest_under(from, target.index) {
                Some(moved) => {
                    tracing::debug!(screen = %dragged, from, parent_index = target.index, "screen nested");
                    DropOutcome::Moved(moved)
                }
                None => DropOutcome::NoTarget,
            }
        } else {
            match list.reorder_before(from, target.index) {
                Some(moved) => {
                    tracing::debug!(screen = %dragged, from, to = target.index, "screen reordered");
                    DropOutcome::Moved(moved)
                }
                None => DropOutcome::NoTarget,
            }
        }
    }
}

fn evaluate(list: &ScreenList, dragged: &ScreenId, pointer: PointerSample, zone: &NestZone) -> Option<DropTarget> {
    list.find(dragged)?;
    let hovered = list.get(pointer.hovered_index)?;
    if &hovered.id == dragged {
        return None;
    }
    let is_nested = zone.is_nest(pointer.offset_fraction);
    if is_nested {
        if list.is_descendant_of(&hovered.id, dragged) {
            return None;
        }
        // Only one level of nesting
        if hovered.parent_id.is_some() {
            return None;
        }
    }
    Some(DropTarget { index: pointer.hovered_index, is_nested })
}

/// One native drag event, stripped of framework types
#[derive(Debug, Clone, PartialEq)]
pub enum DragInput {
    Begin(ScreenId),
    Over(PointerSample),
    Leave,
    Drop,
    Cancel,
}

/// What a drag event turned into
#[derive(Debug, Clone, PartialEq)]
pub struct Reduced {
    /// The new list, only when it changed
    pub list: Option<ScreenList>,
    pub state: DragState,
    pub notice: Option<Notice>,
}

/// `(list, drag state, event) -> (new list, new drag state, notice)`
pub fn reduce(list: &ScreenList, state: &DragState, input: DragInput, zone: &NestZone) -> Reduced {
    let mut state = state.clone();
    let mut reduced_list = None;
    let mut notice = None;

    match input {
        DragInput::Begin(id) => state = DragState::begin(id),
        DragInput::Over(pointer) => state.retarget(list, pointer, zone),
        DragInput::Leave => state.clear_target(),
        DragInput::Cancel => state.cancel(),
        DragInput::Drop => match state.complete(list) {
            DropOutcome::Moved(moved) => reduced_list = Some(moved),
            DropOutcome::Rejected(err) => notice = Some(Notice::from(err)),
            DropOutcome::NoTarget => {}
        },
    }

    Reduced { list: reduced_list, state, notice }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ids, make_screen};

    fn over(index: usize, fraction: f64) -> DragInput {
        DragInput::Over(PointerSample { hovered_index: index, offset_fraction: fraction })
    }

    /// Run a whole gesture and return the final reduction
    fn gesture(list: &ScreenList, dragged: &str, inputs: Vec<DragInput>) -> Reduced {
        let zone = NestZone::default();
        let mut r = reduce(list, &DragState::Idle, DragInput::Begin(ScreenId::from(dragged)), &zone);
        for input in inputs {
            r = reduce(list, &r.state, input, &zone);
        }
        r
    }

    #[test]
    fn test_nest_zone_boundary() {
        let zone = NestZone::default();
        assert!(!zone.is_nest(0.75));
        assert!(zone.is_nest(0.76));
        assert!(!zone.is_nest(0.2));
    }

    #[test]
    fn test_nest_under_root_sibling() {
        let list = ScreenList::new(vec![make_screen("a", None), make_screen("b", None)]);
        let hovered = gesture(&list, "a", vec![over(1, 0.9)]);
        assert_eq!(hovered.state.target(), Some(DropTarget { index: 1, is_nested: true }));

        let dropped = reduce(&list, &hovered.state, DragInput::Drop, &NestZone::default());
        let moved = dropped.list.expect("list should change");
        assert_eq!(ids(&moved), vec!["b", "a"]);
        assert!(moved.get(0).unwrap().is_root());
        assert_eq!(moved.get(1).unwrap().parent_id, Some(ScreenId::from("b")));
        assert_eq!(dropped.state, DragState::Idle);
        assert!(dropped.notice.is_none());
    }

    #[test]
    fn test_nesting_a_parent_is_rejected_with_notice() {
        let list = ScreenList::new(vec![
            make_screen("a", None),
            make_screen("b", None),
            make_screen("c", Some("a")),
        ]);
        let r = gesture(&list, "a", vec![over(1, 0.9)]);
        assert_eq!(r.state.target(), Some(DropTarget { index: 1, is_nested: true }));

        let dropped = reduce(&list, &r.state, DragInput::Drop, &NestZone::default());
        assert!(dropped.list.is_none());
        let notice = dropped.notice.expect("rejection notice");
        assert!(notice.is_rejection());
        assert_eq!(notice.message, "Screens with nested screens cannot be nested");
        assert_eq!(dropped.state, DragState::Idle);
    }

    #[test]
    fn test_nest_under_own_descendant_has_no_target() {
        let list = ScreenList::new(vec![make_screen("a", None), make_screen("b", Some("a"))]);
        let r = gesture(&list, "a", vec![over(1, 0.9)]);
        assert!(r.state.is_dragging());
        assert_eq!(r.state.target(), None);

        let dropped = reduce(&list, &r.state, DragInput::Drop, &NestZone::default());
        assert!(dropped.list.is_none());
        assert!(dropped.notice.is_none());
    }

    #[test]
    fn test_reorder_to_front() {
        let list = ScreenList::new(vec![make_screen("a", None), make_screen("b", None), make_screen("c", None)]);
        let r = gesture(&list, "c", vec![over(0, 0.2), DragInput::Drop]);
        assert_eq!(ids(r.list.as_ref().unwrap()), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_drop_in_place_leaves_list_alone() {
        let list = ScreenList::new(vec![make_screen("a", None), make_screen("b", None), make_screen("c", None)]);
        let r = gesture(&list, "a", vec![over(1, 0.2), DragInput::Drop]);
        assert!(r.list.is_none());
        assert!(r.notice.is_none());
        assert_eq!(r.state, DragState::Idle);
    }

    #[test]
    fn test_hovering_self_has_no_target() {
        let list = ScreenList::new(vec![make_screen("a", None), make_screen("b", None)]);
        assert_eq!(gesture(&list, "a", vec![over(0, 0.2)]).state.target(), None);
        assert_eq!(gesture(&list, "a", vec![over(0, 0.9)]).state.target(), None);
    }

    #[test]
    fn test_cannot_nest_under_nested_row() {
        let list = ScreenList::new(vec![
            make_screen("a", None),
            make_screen("b", Some("a")),
            make_screen("c", None),
        ]);
        let r = gesture(&list, "c", vec![over(1, 0.9)]);
        assert_eq!(r.state.target(), None);

        // Reordering next to a nested row is fine and leaves c at root level
        let r = gesture(&list, "c", vec![over(1, 0.5), DragInput::Drop]);
        let moved = r.list.unwrap();
        assert_eq!(ids(&moved), vec!["a", "c", "b"]);
        assert!(moved.get(1).unwrap().is_root());
    }

    #[test]
    fn test_later_sample_replaces_candidate() {
        let list = ScreenList::new(vec![make_screen("a", None), make_screen("b", None), make_screen("c", None)]);
        let r = gesture(&list, "a", vec![over(2, 0.9), over(1, 0.1)]);
        assert_eq!(r.state.target(), Some(DropTarget { index: 1, is_nested: false }));

        let r = gesture(&list, "a", vec![over(2, 0.9), over(0, 0.9)]);
        assert_eq!(r.state.target(), None);
    }

    #[test]
    fn test_leave_clears_target_but_keeps_drag() {
        let list = ScreenList::new(vec![make_screen("a", None), make_screen("b", None)]);
        let r = gesture(&list, "a", vec![over(1, 0.9), DragInput::Leave]);
        assert_eq!(r.state.dragged(), Some(&ScreenId::from("a")));
        assert_eq!(r.state.target(), None);
        let r = reduce(&list, &r.state, DragInput::Drop, &NestZone::default());
        assert!(r.list.is_none());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let list = ScreenList::new(vec![make_screen("a", None), make_screen("b", None)]);
        let zone = NestZone::default();

        let idle = reduce(&list, &DragState::Idle, DragInput::Cancel, &zone);
        assert_eq!(idle.state, DragState::Idle);
        assert!(idle.list.is_none());

        let dropped = gesture(&list, "a", vec![over(1, 0.9), DragInput::Drop]);
        let moved = dropped.list.unwrap();
        let after = reduce(&moved, &dropped.state, DragInput::Cancel, &zone);
        assert_eq!(after.state, DragState::Idle);
        assert!(after.list.is_none());
        assert!(after.notice.is_none());
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let list = ScreenList::new(vec![make_screen("a", None)]);
        let mut state = DragState::Idle;
        assert_eq!(state.complete(&list), DropOutcome::NoTarget);
    }

    #[test]
    fn test_stale_target_is_ignored() {
        let list = ScreenList::new(vec![make_screen("a", None), make_screen("b", None), make_screen("c", None)]);
        let r = gesture(&list, "a", vec![over(2, 0.2)]);
        let shrunk = ScreenList::new(vec![make_screen("a", None), make_screen("b", None)]);
        let dropped = reduce(&shrunk, &r.state, DragInput::Drop, &NestZone::default());
        assert!(dropped.list.is_none());
        assert_eq!(dropped.state, DragState::Idle);
    }

    #[test]
    fn test_nested_screen_never_becomes_parent() {
        // b is nested under a; nothing may nest under b
        let list = ScreenList::new(vec![
            make_screen("a", None),
            make_screen("b", Some("a")),
            make_screen("c", None),
            make_screen("d", None),
        ]);
        for dragged in ["a", "c", "d"] {
            for fraction in [0.8, 0.9, 1.0] {
                let r = gesture(&list, dragged, vec![over(1, fraction), DragInput::Drop]);
                if let Some(moved) = r.list {
                    assert!(!moved.has_children(&ScreenId::from("b")));
                }
            }
        }
    }

    #[test]
    fn test_nested_parent_cannot_nest_under_its_child() {
        // a has b; after any gesture a must never end up under b
        let list = ScreenList::new(vec![make_screen("a", None), make_screen("b", Some("a"))]);
        for index in 0..list.len() {
            for fraction in [0.1, 0.5, 0.9] {
                let r = gesture(&list, "a", vec![over(index, fraction), DragInput::Drop]);
                let result = r.list.unwrap_or_else(|| list.clone());
                assert!(!result.is_descendant_of(&ScreenId::from("a"), &ScreenId::from("b")));
            }
        }
    }
}
