//! Commands accepted by the form state store and the reducer applying them.

use tracing::debug;

use crate::store::state::{FieldMapping, FieldMappingTarget, FormState, SelectedNode, StoreState};

/// A single state change. Every command is total: targeting an unknown node
/// leaves the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    /// Create the form state of a node unless one already exists.
    InitializeFormState {
        node_id: String,
        form_id: String,
        form_name: String,
        field_names: Vec<String>,
    },
    /// Replace a field's value, keeping its mapping.
    SetFieldValue {
        node_id: String,
        field_name: String,
        value: String,
    },
    /// Replace a field's mapping; `None` clears it.
    SetFieldMapping {
        node_id: String,
        field_name: String,
        mapping: Option<FieldMapping>,
    },
    /// Initialize the node's form state if needed and mark it as open.
    OpenNodeDetail(SelectedNode),
    CloseNodeDetail,
    OpenFieldMappingPicker(FieldMappingTarget),
    CloseFieldMappingPicker,
    /// Store the mapping for the open picker's field, then close the picker.
    CommitFieldMapping(Option<FieldMapping>),
}

impl StoreState {
    /// Apply `command` and return the resulting state.
    pub fn reduce(
        mut self,
        command: Command,
    ) -> StoreState {
        match command {
            Command::InitializeFormState {
                node_id,
                form_id,
                form_name,
                field_names,
            } => self.initialize_form_state(node_id, form_id, form_name, &field_names),
            Command::SetFieldValue {
                node_id,
                field_name,
                value,
            } => {
                if let Some(form) = self.form_states.get_mut(&node_id) {
                    form.field_mut(&field_name).value = Some(value);
                } else {
                    debug!("no form state for node {}, value of {} dropped", node_id, field_name);
                }
            }
            Command::SetFieldMapping {
                node_id,
                field_name,
                mapping,
            } => self.set_field_mapping(&node_id, &field_name, mapping),
            Command::OpenNodeDetail(selected) => {
                self.initialize_form_state(selected.node_id.clone(), selected.form_id.clone(), selected.form_name.clone(), &selected.form_fields);
                self.selected_node = Some(selected);
            }
            Command::CloseNodeDetail => self.selected_node = None,
            Command::OpenFieldMappingPicker(target) => self.field_mapping_target = Some(target),
            Command::CloseFieldMappingPicker => self.field_mapping_target = None,
            Command::CommitFieldMapping(mapping) => {
                if let Some(target) = self.field_mapping_target.take() {
                    self.set_field_mapping(&target.node_id, &target.field_name, mapping);
                }
            }
        }
        self
    }

    fn initialize_form_state(
        &mut self,
        node_id: String,
        form_id: String,
        form_name: String,
        field_names: &[String],
    ) {
        if self.form_states.contains_key(&node_id) {
            return;
        }
        let form = FormState::new(node_id.clone(), form_id, form_name, field_names);
        self.form_states.insert(node_id, form);
    }

    fn set_field_mapping(
        &mut self,
        node_id: &str,
        field_name: &str,
        mapping: Option<FieldMapping>,
    ) {
        match self.form_states.get_mut(node_id) {
            Some(form) => form.field_mut(field_name).prefill_mapping = mapping,
            None => debug!("no form state for node {}, mapping of {} dropped", node_id, field_name),
        }
    }
}
