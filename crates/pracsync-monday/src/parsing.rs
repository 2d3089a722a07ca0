//! Conversion of Monday.com wire types into core domain types.

use pracsync_core::{BoardItem, BoardPage};

use crate::models::{ItemData, ItemsPageData};

/// Convert one wire item into a `BoardItem`.
///
/// Column values that are JSON `null` are dropped; everything else is kept
/// verbatim for the extractor to interpret.
pub fn parse_item(item: ItemData) -> BoardItem {
    let values = item
        .column_values
        .into_iter()
        .filter_map(|column| column.value.map(|value| (column.id, value)))
        .collect();

    BoardItem {
        id: item.id,
        name: item.name,
        group: item.group.map(|g| g.title),
        values,
    }
}

/// Convert a wire page into a `BoardPage`.
pub fn parse_page(page: ItemsPageData) -> BoardPage {
    BoardPage {
        items: page.items.into_iter().map(parse_item).collect(),
        cursor: page.cursor.filter(|c| !c.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wire_page(value: serde_json::Value) -> ItemsPageData {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parse_item_keeps_group_title_and_values() {
        let page = parse_page(wire_page(json!({
            "cursor": "abc",
            "items": [{
                "id": "101",
                "name": "Body Scan",
                "group": {"id": "topics", "title": "Elementary Core"},
                "column_values": [
                    {"id": "file_mkza76s9", "value": "{\"files\":[]}", "text": "", "type": "file"},
                    {"id": "file_mkzapzwb", "value": null, "text": "", "type": "file"},
                    {"id": "status", "value": "{\"index\":1}", "text": "Done", "type": "status"}
                ]
            }]
        })));

        assert_eq!(page.cursor.as_deref(), Some("abc"));
        let item = &page.items[0];
        assert_eq!(item.id, "101");
        assert_eq!(item.name, "Body Scan");
        assert!(item.in_group("Elementary Core"));
        assert_eq!(item.value("file_mkza76s9"), Some("{\"files\":[]}"));
        assert_eq!(item.value("file_mkzapzwb"), None);
        assert_eq!(item.values.len(), 2);
    }

    #[test]
    fn test_parse_page_drops_empty_cursor() {
        let page = parse_page(wire_page(json!({"cursor": "", "items": []})));
        assert!(page.cursor.is_none());
        assert!(page.is_last());
    }

    #[test]
    fn test_parse_item_without_group() {
        let page = parse_page(wire_page(json!({
            "cursor": null,
            "items": [{"id": "7", "name": "Loose", "group": null, "column_values": []}]
        })));
        assert!(page.items[0].group.is_none());
    }
}
