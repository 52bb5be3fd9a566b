//! Drag-and-drop payload carried as inter-component drag data.

use serde::{Deserialize, Serialize};

/// JSON payload describing the dragged node's origin; the drop handler
/// feeds it into the move operation together with the drop target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    pub node_id: String,
    pub from_parent_id: String,
    pub from_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_camel_case() {
        let payload = DragPayload {
            node_id: "n1".to_string(),
            from_parent_id: "p1".to_string(),
            from_index: 2,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["nodeId"], "n1");
        assert_eq!(json["fromParentId"], "p1");
        assert_eq!(json["fromIndex"], 2);

        let back: DragPayload =
            serde_json::from_str("{\"nodeId\":\"n1\",\"fromParentId\":\"p1\",\"fromIndex\":2}")
                .unwrap();
        assert_eq!(back, payload);
    }
}
