//! Rotate mode: turns the selected features about their common centroid
//! while the user drags the rotate handle.
//!
//! Lifecycle: `Idle` → `HandleArmed` (pointer over the handle) → `Rotating`
//! (drag in progress) → `Idle` on drag stop. Each handler takes the event and
//! the host's [`ModeProps`] and returns the [`Action`]s the host must apply.
//!
//! The geometry being rotated is captured once, at drag start. Every drag
//! frame recomputes the angle from the fixed pivot and anchor and rotates the
//! captured geometry, so the result depends only on the current pointer
//! position and never on earlier frames.

#[cfg(test)]
#[path = "rotate_test.rs"]
mod rotate_test;

use tracing::{debug, trace, warn};

use crate::action::{Action, EditAction, EditContext, EditType};
use crate::config::RotateModeConfig;
use crate::geo::{Geometry, Position};
use crate::geomath::{centroid, rotate_about, rotation_angle};
use crate::guides::{GuideFeatureCollection, pivot_marker, selection_guides};
use crate::input::{DragEvent, ModeProps, PointerMoveEvent, RotateState, Snapshot, picked_rotate_handle};

/// A selection that cannot meaningfully rotate: exactly one `Point`.
fn is_single_point(geometries: &[Geometry]) -> bool {
    matches!(geometries, [only] if only.is_point())
}

/// The rotate edit mode.
#[derive(Debug, Clone, Default)]
pub struct RotateMode {
    config: RotateModeConfig,
    state: RotateState,
}

impl RotateMode {
    #[must_use]
    pub fn new(config: RotateModeConfig) -> Self {
        Self { config, state: RotateState::Idle }
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> &RotateState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &RotateModeConfig {
        &self.config
    }

    /// Whether a rotate drag is in progress.
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        matches!(self.state, RotateState::Rotating(_))
    }

    /// The pivot of the gesture in progress.
    #[must_use]
    pub fn pivot(&self) -> Option<Position> {
        match &self.state {
            RotateState::Rotating(snapshot) => Some(snapshot.pivot),
            _ => None,
        }
    }

    /// Cursor the host should show for the current state.
    #[must_use]
    pub fn cursor(&self) -> Option<String> {
        self.state.is_engaged().then(|| self.config.rotate_cursor.clone())
    }

    // --- Input events ---

    /// Re-arm from the current picks (unless a drag is in progress) and
    /// report the cursor.
    pub fn handle_pointer_move(&mut self, event: &PointerMoveEvent, _props: &ModeProps) -> Vec<Action> {
        if !self.is_rotating() {
            let next = match picked_rotate_handle(&event.picks) {
                Some(handle) => RotateState::HandleArmed { handle: handle.clone() },
                None => RotateState::Idle,
            };
            if next.is_engaged() != self.state.is_engaged() {
                debug!(armed = next.is_engaged(), "rotate handle hover changed");
            }
            self.state = next;
        }
        vec![Action::SetCursor(self.cursor())]
    }

    /// Begin rotating if the rotate handle is armed, capturing the selection.
    pub fn handle_start_dragging(&mut self, event: &DragEvent, props: &ModeProps) -> Vec<Action> {
        if !matches!(self.state, RotateState::HandleArmed { .. }) {
            return Vec::new();
        }
        let geometries = props.selected_geometries();
        let Some(pivot) = centroid(&geometries) else {
            debug!("rotate drag ignored: nothing selected");
            return Vec::new();
        };
        let anchor = event.pointer_down_map_coords;
        debug!(?pivot, ?anchor, count = geometries.len(), "rotation started");
        self.state = RotateState::Rotating(Snapshot { geometries, pivot, anchor });
        Vec::new()
    }

    /// Emit an intermediate rotation and hold the map still.
    pub fn handle_dragging(&mut self, event: &DragEvent, props: &ModeProps) -> Vec<Action> {
        if !self.is_rotating() {
            return Vec::new();
        }
        let mut actions = Vec::new();
        if let Some(edit) = self.rotate_action(event.map_coords, EditType::Rotating, props) {
            actions.push(Action::Edit(edit));
        }
        actions.push(Action::CancelPan);
        actions
    }

    /// Commit the rotation and return to idle.
    pub fn handle_stop_dragging(&mut self, event: &DragEvent, props: &ModeProps) -> Vec<Action> {
        if !self.is_rotating() {
            return Vec::new();
        }
        let actions: Vec<Action> = self
            .rotate_action(event.map_coords, EditType::Rotated, props)
            .map(Action::Edit)
            .into_iter()
            .collect();
        debug!("rotation committed");
        self.state = RotateState::Idle;
        actions
    }

    // --- Rotation ---

    /// Rotate the captured geometry to follow `current` and write it into a
    /// copy of `props.data` at the selected indexes.
    ///
    /// Returns `None` when no gesture is in progress. Snapshot geometries and
    /// selected indexes correspond by position; extras on either side are
    /// ignored.
    #[must_use]
    pub fn rotate_action(&self, current: Position, edit_type: EditType, props: &ModeProps) -> Option<EditAction> {
        let RotateState::Rotating(snapshot) = &self.state else {
            return None;
        };
        let angle = rotation_angle(snapshot.pivot, snapshot.anchor, current);
        trace!(angle, ?edit_type, "rotate frame");

        let mut updated = props.data.clone();
        for (&index, geometry) in props.selected_indexes.iter().zip(&snapshot.geometries) {
            let rotated = rotate_about(geometry, angle, snapshot.pivot);
            match updated.replace_geometry(index, rotated) {
                Ok(next) => updated = next,
                Err(e) => warn!(error = %e, "selected index skipped"),
            }
        }

        Some(EditAction {
            updated_data: updated,
            edit_type,
            edit_context: EditContext { feature_indexes: props.selected_indexes.clone() },
        })
    }

    // --- Guides ---

    /// Guide features for the current frame.
    ///
    /// Empty for an empty or single-point selection. While rotating, only
    /// the pivot marker. Otherwise the box outline, rotate handle, and
    /// rotate line.
    #[must_use]
    pub fn get_guides(&self, props: &ModeProps) -> GuideFeatureCollection {
        if let RotateState::Rotating(snapshot) = &self.state {
            if is_single_point(&snapshot.geometries) {
                return GuideFeatureCollection::empty();
            }
            return GuideFeatureCollection::new(vec![pivot_marker(snapshot.pivot)]);
        }

        let geometries = props.selected_geometries();
        if geometries.is_empty() || is_single_point(&geometries) {
            return GuideFeatureCollection::empty();
        }
        selection_guides(&geometries, props.view_bearing(), self.config.handle_divisor)
    }
}
