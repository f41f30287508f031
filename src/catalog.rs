//! Mapping source catalog offered by the field-mapping picker.
//!
//! Global data sources are configuration, not graph data. They are listed
//! before the upstream forms of the node being edited.

use serde::{Deserialize, Serialize};

use crate::graph::Dependency;

/// A fixed set of fields available to every node as prefill sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalDataSource {
    pub id: String,
    pub name: String,
    pub fields: Vec<String>,
}

impl GlobalDataSource {
    pub fn new(
        id: &str,
        name: &str,
        fields: &[&str],
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Built-in global data sources.
pub fn default_sources() -> Vec<GlobalDataSource> {
    vec![
        GlobalDataSource::new(
            "action-properties",
            "Action Properties",
            &["action_id", "action_name", "action_type", "created_at", "created_by", "status"],
        ),
        GlobalDataSource::new(
            "client-organization",
            "Client Organization Properties",
            &["organization_id", "organization_name", "organization_type", "country", "industry", "size"],
        ),
    ]
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, strum::AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SourceKind {
    Global,
    Dependency,
}

/// One selectable group of fields in the mapping picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSource {
    /// global source id or upstream form id, stored as `source_form_id`
    pub id: String,
    pub name: String,
    pub fields: Vec<String>,
    pub kind: SourceKind,
}

/// Global sources first, then `dependencies` in the given order.
pub fn mapping_sources(
    globals: &[GlobalDataSource],
    dependencies: &[Dependency],
) -> Vec<MappingSource> {
    let globals = globals.iter().map(|g| MappingSource {
        id: g.id.clone(),
        name: g.name.clone(),
        fields: g.fields.clone(),
        kind: SourceKind::Global,
    });
    let dependencies = dependencies.iter().map(|d| MappingSource {
        id: d.form_id.clone(),
        name: d.name.clone(),
        fields: d.form_fields.clone(),
        kind: SourceKind::Dependency,
    });
    globals.chain(dependencies).collect()
}

/// Fields whose name contains `query`, ignoring case. An empty query keeps
/// every field.
pub fn filter_fields<'a>(
    fields: &'a [String],
    query: &str,
) -> Vec<&'a str> {
    let query = query.to_lowercase();
    fields.iter().filter(|f| f.to_lowercase().contains(&query)).map(String::as_str).collect()
}
