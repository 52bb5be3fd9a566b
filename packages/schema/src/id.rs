use uuid::Uuid;

/// Generate a fresh opaque id for nodes, pages and projects.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
