//! Screen List
//!
//! Flat, ordered list of screens. Nesting is expressed only through
//! `parent_id`, capped at one level.

use serde::{Deserialize, Serialize};

use crate::error::DeleteRejected;
use crate::screen::{ScreenId, ScreenItem};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenList {
    pub(crate) items: Vec<ScreenItem>,
}

impl ScreenList {
    pub fn new(items: Vec<ScreenItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ScreenItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ScreenItem> {
        self.items.get(index)
    }

    pub fn find(&self, id: &ScreenId) -> Option<&ScreenItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn position(&self, id: &ScreenId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn push(&mut self, item: ScreenItem) {
        self.items.push(item);
    }

    /// Children of `id` in list order
    pub fn children<'a>(&'a self, id: &'a ScreenId) -> impl Iterator<Item = &'a ScreenItem> + 'a {
        self.items
            .iter()
            .filter(move |item| item.parent_id.as_ref() == Some(id))
    }

    pub fn has_children(&self, id: &ScreenId) -> bool {
        self.children(id).next().is_some()
    }

    /// Whether `candidate` sits somewhere below `ancestor`.
    ///
    /// Walks the parent chain upward. The walk is bounded by the list length
    /// so a corrupt chain cannot loop forever.
    pub fn is_descendant_of(&self, candidate: &ScreenId, ancestor: &ScreenId) -> bool {
        let mut current = self.find(candidate).and_then(|item| item.parent_id.as_ref());
        for _ in 0..self.items.len() {
            match current {
                Some(parent) if parent == ancestor => return true,
                Some(parent) => {
                    current = self.find(parent).and_then(|item| item.parent_id.as_ref());
                }
                None => return false,
            }
        }
        false
    }

    /// Replace the description of a screen. Returns false for unknown ids.
    pub fn set_description(&mut self, id: &ScreenId, description: impl Into<String>) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.description = description.into();
                true
            }
            None => false,
        }
    }

    /// Flip `is_expanded` and return the new state
    pub fn toggle_expanded(&mut self, id: &ScreenId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| &item.id == id)?;
        item.is_expanded = !item.is_expanded;
        Some(item.is_expanded)
    }

    /// Remove a childless screen.
    ///
    /// Screens that still have nested screens are refused and the list is
    /// left untouched.
    pub fn delete(&mut self, id: &ScreenId) -> Result<ScreenItem, DeleteRejected> {
        let children = self.children(id).count();
        if children > 0 {
            tracing::debug!(screen = %id, children, "delete refused: screen has nested screens");
            return Err(DeleteRejected::HasNestedScreens { id: id.clone(), children });
        }
        let index = self
            .position(id)
            .ok_or_else(|| DeleteRejected::NotFound { id: id.clone() })?;
        tracing::debug!(screen = %id, index, "screen deleted");
        Ok(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ids, make_screen};

    #[test]
    fn test_children_and_has_children() {
        let list = ScreenList::new(vec![
            make_screen("a", None),
            make_screen("b", Some("a")),
            make_screen("c", None),
            make_screen("d", Some("a")),
        ]);
        let a = ScreenId::from("a");
        let kids: Vec<_> = list.children(&a).map(|i| i.id.as_str()).collect();
        assert_eq!(kids, vec!["b", "d"]);
        assert!(list.has_children(&a));
        assert!(!list.has_children(&ScreenId::from("c")));
    }

    #[test]
    fn test_is_descendant_of() {
        let list = ScreenList::new(vec![
            make_screen("a", None),
            make_screen("b", Some("a")),
            make_screen("c", None),
        ]);
        assert!(list.is_descendant_of(&ScreenId::from("b"), &ScreenId::from("a")));
        assert!(!list.is_descendant_of(&ScreenId::from("a"), &ScreenId::from("b")));
        assert!(!list.is_descendant_of(&ScreenId::from("c"), &ScreenId::from("a")));
        assert!(!list.is_descendant_of(&ScreenId::from("a"), &ScreenId::from("a")));
    }

    #[test]
    fn test_is_descendant_of_terminates_on_corrupt_cycle() {
        let list = ScreenList::new(vec![
            make_screen("a", Some("b")),
            make_screen("b", Some("a")),
            make_screen("c", None),
        ]);
        assert!(!list.is_descendant_of(&ScreenId::from("a"), &ScreenId::from("c")));
    }

    #[test]
    fn test_delete_childless_screen() {
        let mut list = ScreenList::new(vec![make_screen("a", None), make_screen("b", None)]);
        let removed = list.delete(&ScreenId::from("a")).unwrap();
        assert_eq!(removed.id.as_str(), "a");
        assert_eq!(ids(&list), vec!["b"]);
    }

    #[test]
    fn test_delete_nested_child_is_allowed() {
        let mut list = ScreenList::new(vec![make_screen("a", None), make_screen("d", Some("a"))]);
        assert!(list.delete(&ScreenId::from("d")).is_ok());
        assert_eq!(ids(&list), vec!["a"]);
        assert!(!list.has_children(&ScreenId::from("a")));
    }

    #[test]
    fn test_delete_parent_is_refused() {
        let mut list = ScreenList::new(vec![make_screen("a", None), make_screen("d", Some("a"))]);
        let before = list.clone();
        let err = list.delete(&ScreenId::from("a")).unwrap_err();
        assert_eq!(err, DeleteRejected::HasNestedScreens { id: ScreenId::from("a"), children: 1 });
        assert_eq!(err.to_string(), "This screen has nested screens. Delete or move those first.");
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_unknown_is_refused() {
        let mut list = ScreenList::new(vec![make_screen("a", None)]);
        let err = list.delete(&ScreenId::from("zzz")).unwrap_err();
        assert!(matches!(err, DeleteRejected::NotFound { .. }));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_set_description_and_toggle() {
        let mut list = ScreenList::new(vec![make_screen("a", None)]);
        let a = ScreenId::from("a");
        assert!(list.set_description(&a, "Home"));
        assert!(!list.set_description(&ScreenId::from("x"), "nope"));
        assert_eq!(list.find(&a).unwrap().description, "Home");
        assert_eq!(list.toggle_expanded(&a), Some(false));
        assert_eq!(list.toggle_expanded(&a), Some(true));
        assert_eq!(list.toggle_expanded(&ScreenId::from("x")), None);
    }
}
