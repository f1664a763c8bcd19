//! Actions returned from event handlers for the host to apply.

use serde::{Deserialize, Serialize};

use crate::collection::FeatureCollection;

/// What kind of edit an [`EditAction`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditType {
    /// Intermediate result while a rotate drag is in progress.
    Rotating,
    /// Committed result at the end of the drag.
    Rotated,
}

/// Indexes touched by an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditContext {
    pub feature_indexes: Vec<usize>,
}

/// A proposed or committed change to the edited data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditAction {
    /// The complete collection after the edit.
    pub updated_data: FeatureCollection,
    pub edit_type: EditType,
    pub edit_context: EditContext,
}

/// Side effects requested by a handler, applied by the host in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hand an edit to the host's data store.
    Edit(EditAction),
    /// Change the pointer cursor. `None` restores the default.
    SetCursor(Option<String>),
    /// Suppress the map's default pan for the current drag event.
    CancelPan,
}
