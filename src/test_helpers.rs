#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn project_json(id: &str, status: &str) -> Value {
        json!({
            "id": id,
            "description": format!("Project {}", id),
            "status": status,
            "creationDate": "2024-05-01T10:00:00",
            "updateDate": "2024-05-02T09:30:00"
        })
    }

    pub fn activity_json(id: &str, project_id: &str, status: &str) -> Value {
        json!({
            "id": id,
            "projectId": project_id,
            "description": format!("Activity {}", id),
            "status": status,
            "creationDate": "2024-05-01T10:00:00",
            "updateDate": null
        })
    }

    pub fn page_json(items: &[Value]) -> Value {
        json!({
            "actualPage": 0,
            "totalRecords": items.len(),
            "totalPages": 1,
            "itemList": items
        })
    }
}
