//! Form and field state for the prefill-mapping session.
//!
//! The store is an owned container: commands go in through
//! [`FormStore::dispatch`] and every read returns `Option` instead of failing
//! on unknown node ids.

mod command;
mod state;
mod store;

pub use command::Command;
pub use state::{FieldMapping, FieldMappingTarget, FieldState, FormState, SelectedNode, StoreState};
pub use store::FormStore;
