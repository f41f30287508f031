use std::mem;

use tracing::trace;

use crate::{
    Config,
    catalog::{self, GlobalDataSource, MappingSource},
    store::{
        command::Command,
        state::{FieldMapping, FieldMappingTarget, FieldState, FormState, SelectedNode, StoreState},
    },
};

/// Session store for per-node form state and the open detail/picker slots.
pub struct FormStore {
    state: StoreState,
    global_sources: Vec<GlobalDataSource>,
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStore {
    /// Empty store offering the built-in global data sources.
    pub fn new() -> Self {
        Self::with_sources(catalog::default_sources())
    }

    /// Empty store offering the global data sources of `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_sources(config.global_sources())
    }

    pub fn with_sources(global_sources: Vec<GlobalDataSource>) -> Self {
        Self {
            state: StoreState::default(),
            global_sources,
        }
    }

    /// Resume from a previously taken snapshot.
    pub fn with_state(
        mut self,
        state: StoreState,
    ) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn into_state(self) -> StoreState {
        self.state
    }

    pub fn global_sources(&self) -> &[GlobalDataSource] {
        &self.global_sources
    }

    /// Apply one command.
    pub fn dispatch(
        &mut self,
        command: Command,
    ) -> &StoreState {
        trace!("store::dispatch({})", command.as_ref());
        let state = mem::take(&mut self.state);
        self.state = state.reduce(command);
        &self.state
    }

    pub fn initialize_form_state(
        &mut self,
        node_id: &str,
        form_id: &str,
        form_name: &str,
        field_names: &[String],
    ) {
        self.dispatch(Command::InitializeFormState {
            node_id: node_id.to_string(),
            form_id: form_id.to_string(),
            form_name: form_name.to_string(),
            field_names: field_names.to_vec(),
        });
    }

    pub fn set_field_value(
        &mut self,
        node_id: &str,
        field_name: &str,
        value: impl Into<String>,
    ) {
        self.dispatch(Command::SetFieldValue {
            node_id: node_id.to_string(),
            field_name: field_name.to_string(),
            value: value.into(),
        });
    }

    pub fn set_field_mapping(
        &mut self,
        node_id: &str,
        field_name: &str,
        mapping: Option<FieldMapping>,
    ) {
        self.dispatch(Command::SetFieldMapping {
            node_id: node_id.to_string(),
            field_name: field_name.to_string(),
            mapping,
        });
    }

    pub fn open_node_detail(
        &mut self,
        selected: SelectedNode,
    ) {
        self.dispatch(Command::OpenNodeDetail(selected));
    }

    pub fn close_node_detail(&mut self) {
        self.dispatch(Command::CloseNodeDetail);
    }

    pub fn open_field_mapping_picker(
        &mut self,
        target: FieldMappingTarget,
    ) {
        self.dispatch(Command::OpenFieldMappingPicker(target));
    }

    pub fn close_field_mapping_picker(&mut self) {
        self.dispatch(Command::CloseFieldMappingPicker);
    }

    /// Save `mapping` for the field of the open picker and close it.
    pub fn commit_field_mapping(
        &mut self,
        mapping: Option<FieldMapping>,
    ) {
        self.dispatch(Command::CommitFieldMapping(mapping));
    }

    pub fn form_state(
        &self,
        node_id: &str,
    ) -> Option<&FormState> {
        self.state.form_state(node_id)
    }

    pub fn field_state(
        &self,
        node_id: &str,
        field_name: &str,
    ) -> Option<&FieldState> {
        self.state.field_state(node_id, field_name)
    }

    pub fn selected_node(&self) -> Option<&SelectedNode> {
        self.state.selected_node.as_ref()
    }

    pub fn field_mapping_target(&self) -> Option<&FieldMappingTarget> {
        self.state.field_mapping_target.as_ref()
    }

    /// Picker payload for `field_name` on the open node: its current mapping
    /// and every direct and transitive dependency. `None` when no node is open.
    pub fn mapping_target(
        &self,
        field_name: &str,
    ) -> Option<FieldMappingTarget> {
        let selected = self.state.selected_node.as_ref()?;
        let current_mapping = self.state.field_state(&selected.node_id, field_name).and_then(|f| f.prefill_mapping.clone());

        Some(FieldMappingTarget {
            node_id: selected.node_id.clone(),
            form_id: selected.form_id.clone(),
            field_name: field_name.to_string(),
            current_mapping,
            available_dependencies: selected.dependencies.all(),
        })
    }

    /// Open the picker for `field_name` on the open node. Returns `false` when
    /// no node is open.
    pub fn open_picker_for(
        &mut self,
        field_name: &str,
    ) -> bool {
        match self.mapping_target(field_name) {
            Some(target) => {
                self.open_field_mapping_picker(target);
                true
            }
            None => false,
        }
    }

    /// Sources offered by the open picker, globals first.
    pub fn mapping_sources(&self) -> Vec<MappingSource> {
        let dependencies = self.state.field_mapping_target.as_ref().map(|t| t.available_dependencies.as_slice()).unwrap_or_default();
        catalog::mapping_sources(&self.global_sources, dependencies)
    }
}
