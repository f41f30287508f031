use tracing::debug;

use crate::model::ActionGraph;

/// Field names of the form `form_id`, in schema order.
///
/// Returns an empty list when the form does not exist or declares no
/// properties.
pub fn fields_of(
    graph: &ActionGraph,
    form_id: &str,
) -> Vec<String> {
    match graph.form(form_id) {
        Some(form) => form.field_names(),
        None => {
            debug!("form {} not found, no fields", form_id);
            Vec::new()
        }
    }
}
