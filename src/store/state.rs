//! Snapshot types held by the form state store.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::graph::{Dependency, DependencyData};

/// Where a field's prefill value comes from: a global data source or an
/// upstream form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    /// global data source id or form id
    pub source_form_id: String,
    pub source_form_name: String,
    pub source_field_name: String,
}

impl FieldMapping {
    pub fn new(
        source_form_id: impl Into<String>,
        source_form_name: impl Into<String>,
        source_field_name: impl Into<String>,
    ) -> Self {
        Self {
            source_form_id: source_form_id.into(),
            source_form_name: source_form_name.into(),
            source_field_name: source_field_name.into(),
        }
    }

    /// Whether this mapping points at `field_name` on `source_id`.
    pub fn matches(
        &self,
        source_id: &str,
        field_name: &str,
    ) -> bool {
        self.source_form_id == source_id && self.source_field_name == field_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldState {
    pub field_name: String,
    pub value: Option<String>,
    pub prefill_mapping: Option<FieldMapping>,
}

impl FieldState {
    pub fn unmapped(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            value: None,
            prefill_mapping: None,
        }
    }
}

/// Field values and mappings of one node's form, keyed by field name in
/// schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub node_id: String,
    pub form_id: String,
    pub form_name: String,
    pub fields: IndexMap<String, FieldState>,
}

impl FormState {
    pub fn new(
        node_id: impl Into<String>,
        form_id: impl Into<String>,
        form_name: impl Into<String>,
        field_names: &[String],
    ) -> Self {
        Self {
            node_id: node_id.into(),
            form_id: form_id.into(),
            form_name: form_name.into(),
            fields: field_names.iter().map(|name| (name.clone(), FieldState::unmapped(name.as_str()))).collect(),
        }
    }

    /// Mutable field state, created unmapped when the name is new.
    pub(crate) fn field_mut(
        &mut self,
        field_name: &str,
    ) -> &mut FieldState {
        self.fields.entry(field_name.to_string()).or_insert_with(|| FieldState::unmapped(field_name))
    }
}

/// Payload of a node click: the node's form and its upstream dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedNode {
    pub node_id: String,
    pub form_id: String,
    pub form_name: String,
    pub form_fields: Vec<String>,
    pub dependencies: DependencyData,
}

/// The field currently being mapped and the upstream forms offered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMappingTarget {
    pub node_id: String,
    pub form_id: String,
    pub field_name: String,
    pub current_mapping: Option<FieldMapping>,
    pub available_dependencies: Vec<Dependency>,
}

/// Complete store contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    /// key = node id, in the order the nodes were first opened
    pub form_states: IndexMap<String, FormState>,
    pub selected_node: Option<SelectedNode>,
    pub field_mapping_target: Option<FieldMappingTarget>,
}

impl StoreState {
    pub fn form_state(
        &self,
        node_id: &str,
    ) -> Option<&FormState> {
        self.form_states.get(node_id)
    }

    pub fn field_state(
        &self,
        node_id: &str,
        field_name: &str,
    ) -> Option<&FieldState> {
        self.form_states.get(node_id).and_then(|f| f.fields.get(field_name))
    }
}
