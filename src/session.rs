//! Recorded editing sessions: initial props plus an event log, replayed
//! against a [`RotateMode`] the way a host would drive it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::action::{Action, EditAction};
use crate::collection::FeatureCollection;
use crate::error::GeoEditError;
use crate::guides::GuideFeatureCollection;
use crate::input::{DragEvent, ModeConfig, ModeProps, PointerMoveEvent, ViewState};
use crate::rotate::RotateMode;

/// One recorded host event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionEvent {
    PointerMove(PointerMoveEvent),
    StartDragging(DragEvent),
    Dragging(DragEvent),
    StopDragging(DragEvent),
}

/// A session file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub data: FeatureCollection,
    #[serde(default)]
    pub selected_indexes: Vec<usize>,
    #[serde(default)]
    pub mode_config: ModeConfig,
    #[serde(default)]
    pub view_state: Option<ViewState>,
    #[serde(default)]
    pub events: Vec<SessionEvent>,
}

impl Session {
    /// Parse a session from JSON text.
    pub fn from_json(raw: &str) -> Result<Self, GeoEditError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse a session file.
    pub fn load(path: &Path) -> Result<Self, GeoEditError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Props describing the session's initial state.
    #[must_use]
    pub fn props(&self) -> ModeProps {
        ModeProps {
            data: self.data.clone(),
            selected_indexes: self.selected_indexes.clone(),
            mode_config: self.mode_config,
            view_state: self.view_state,
        }
    }

    /// Guides for the initial state in an idle mode.
    #[must_use]
    pub fn initial_guides(&self, mode: &RotateMode) -> GuideFeatureCollection {
        mode.get_guides(&self.props())
    }

    /// Feed every event to `mode` in order, returning all actions emitted.
    ///
    /// Edit actions are applied to the running data before the next event,
    /// as the host's data store would.
    pub fn replay(&self, mode: &mut RotateMode) -> Replay {
        let mut props = self.props();
        let mut actions = Vec::new();
        for event in &self.events {
            let emitted = match event {
                SessionEvent::PointerMove(e) => mode.handle_pointer_move(e, &props),
                SessionEvent::StartDragging(e) => mode.handle_start_dragging(e, &props),
                SessionEvent::Dragging(e) => mode.handle_dragging(e, &props),
                SessionEvent::StopDragging(e) => mode.handle_stop_dragging(e, &props),
            };
            for action in &emitted {
                if let Action::Edit(edit) = action {
                    props.data = edit.updated_data.clone();
                }
            }
            actions.extend(emitted);
        }
        tracing::info!(events = self.events.len(), actions = actions.len(), "session replayed");
        Replay { actions, final_data: props.data }
    }
}

/// Outcome of [`Session::replay`].
#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    pub actions: Vec<Action>,
    pub final_data: FeatureCollection,
}

impl Replay {
    /// Only the edit actions, in emission order.
    pub fn edits(&self) -> impl Iterator<Item = &EditAction> {
        self.actions.iter().filter_map(|a| match a {
            Action::Edit(edit) => Some(edit),
            _ => None,
        })
    }
}
