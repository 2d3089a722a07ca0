//! Series selection.

use pracsync_core::BoardItem;

/// Keep only the items whose group title equals `group` exactly.
///
/// Matching is case-sensitive with no trimming: group titles are curated
/// on the board and a near miss must not admit foreign content. Order is
/// preserved.
pub fn filter_by_group(items: Vec<BoardItem>, group: &str) -> Vec<BoardItem> {
    items.into_iter().filter(|item| item.in_group(group)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, group: Option<&str>) -> BoardItem {
        let item = BoardItem::new(id, format!("Practice {id}"));
        match group {
            Some(g) => item.with_group(g),
            None => item,
        }
    }

    #[test]
    fn test_exact_match_only() {
        let items = vec![
            item("1", Some("Elementary Core")),
            item("2", Some("elementary core")),
            item("3", Some("Elementary Core ")),
            item("4", Some("Middle School Core")),
            item("5", None),
            item("6", Some("Elementary Core")),
        ];

        let selected = filter_by_group(items, "Elementary Core");

        let ids: Vec<_> = selected.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "6"]);
    }

    #[test]
    fn test_no_matches() {
        let selected = filter_by_group(vec![item("1", Some("Sound Practices"))], "Transition Practices");
        assert!(selected.is_empty());
    }
}
