//! Tree Utilities
//!
//! Helper functions for rendering the flat screen list as a tree.

use crate::models::{ScreenId, ScreenItem, ScreenList};
use std::collections::{HashMap, HashSet};

/// One visible row
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub item: ScreenItem,
    pub depth: usize,
    /// Index in the flat list; this is what drag events report
    pub index: usize,
    pub has_children: bool,
}

/// Render screens as an indented tree using recursive DFS.
///
/// Roots keep their flat order, children follow their parent in flat order
/// unless the parent is collapsed. Screens whose parent is missing show up
/// as roots.
pub fn flatten_tree(list: &ScreenList) -> Vec<DisplayRow> {
    let known: HashSet<&ScreenId> = list.items().iter().map(|item| &item.id).collect();

    // Build parent -> children map, keeping flat indices
    let mut children_map: HashMap<Option<&ScreenId>, Vec<(usize, &ScreenItem)>> = HashMap::new();
    for (index, item) in list.items().iter().enumerate() {
        let parent = item.parent_id.as_ref().filter(|p| known.contains(p));
        children_map.entry(parent).or_default().push((index, item));
    }

    fn collect<'a>(
        parent_id: Option<&'a ScreenId>,
        depth: usize,
        children_map: &HashMap<Option<&'a ScreenId>, Vec<(usize, &'a ScreenItem)>>,
        result: &mut Vec<DisplayRow>,
    ) {
        if let Some(children) = children_map.get(&parent_id) {
            for &(index, item) in children {
                let has_children = children_map.contains_key(&Some(&item.id));
                result.push(DisplayRow {
                    item: item.clone(),
                    depth,
                    index,
                    has_children,
                });
                if item.is_expanded {
                    collect(Some(&item.id), depth + 1, children_map, result);
                }
            }
        }
    }

    let mut result = Vec::new();
    collect(None, 0, &children_map, &mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_screen(id: &str, parent: Option<&str>) -> ScreenItem {
        let mut item = ScreenItem::new(ScreenId::from(id), format!("blob:{}", id));
        item.parent_id = parent.map(ScreenId::from);
        item
    }

    fn shape(rows: &[DisplayRow]) -> Vec<(&str, usize, usize)> {
        rows.iter().map(|r| (r.item.id.as_str(), r.depth, r.index)).collect()
    }

    #[test]
    fn test_flatten_tree() {
        let list = ScreenList::new(vec![
            make_screen("a", None),
            make_screen("b", None),
            make_screen("c", Some("a")),
            make_screen("d", Some("b")),
            make_screen("e", Some("a")),
        ]);

        let rows = flatten_tree(&list);

        assert_eq!(
            shape(&rows),
            vec![("a", 0, 0), ("c", 1, 2), ("e", 1, 4), ("b", 0, 1), ("d", 1, 3)]
        );
        assert!(rows[0].has_children);
        assert!(!rows[1].has_children);
    }

    #[test]
    fn test_collapsed_parent_hides_children() {
        let mut list = ScreenList::new(vec![make_screen("a", None), make_screen("b", Some("a"))]);
        list.toggle_expanded(&ScreenId::from("a"));

        let rows = flatten_tree(&list);

        assert_eq!(shape(&rows), vec![("a", 0, 0)]);
        assert!(rows[0].has_children);
    }

    #[test]
    fn test_missing_parent_shows_as_root() {
        let list = ScreenList::new(vec![make_screen("a", None), make_screen("b", Some("gone"))]);
        assert_eq!(shape(&flatten_tree(&list)), vec![("a", 0, 0), ("b", 0, 1)]);
    }

    #[test]
    fn test_child_listed_before_parent_still_nests() {
        let list = ScreenList::new(vec![make_screen("b", Some("a")), make_screen("a", None)]);
        assert_eq!(shape(&flatten_tree(&list)), vec![("a", 0, 1), ("b", 1, 0)]);
    }
}
