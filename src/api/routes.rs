//! Resource paths of the actions API.

/// Path of a blueprint's action graph.
pub fn blueprint_graph(
    tenant_id: &str,
    blueprint_id: &str,
) -> String {
    format!("/{}/actions/blueprints/{}/graph", tenant_id, blueprint_id)
}
