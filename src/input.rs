//! Input model: pointer and drag events, picks, mode props, and the rotate
//! gesture state machine.
//!
//! The host delivers events in temporal order together with a [`ModeProps`]
//! describing the data being edited. `RotateState` is the active gesture,
//! carrying everything needed to compute a rotation from the same basis on
//! every drag frame.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::collection::FeatureCollection;
use crate::geo::{Feature, Geometry, Position};

/// `guideType` value marking a guide as an interactive edit handle.
pub const GUIDE_TYPE_EDIT_HANDLE: &str = "editHandle";
/// `editHandleType` value marking an edit handle as the rotate handle.
pub const EDIT_HANDLE_TYPE_ROTATE: &str = "rotate";

/// One hit-test result under the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pick {
    /// The picked feature (data or guide).
    pub object: Feature,
    /// Whether the pick came from the guide layer rather than the data.
    #[serde(default)]
    pub is_guide: bool,
}

impl Pick {
    /// Whether this pick is a guide tagged as an edit handle.
    #[must_use]
    pub fn is_edit_handle(&self) -> bool {
        self.is_guide && self.object.property_str("guideType") == Some(GUIDE_TYPE_EDIT_HANDLE)
    }
}

/// The first edit-handle pick, in topmost-first order, if any.
#[must_use]
pub fn picked_edit_handle(picks: &[Pick]) -> Option<&Feature> {
    picks.iter().find(|p| p.is_edit_handle()).map(|p| &p.object)
}

/// The picked edit handle, but only when it is a rotate handle.
#[must_use]
pub fn picked_rotate_handle(picks: &[Pick]) -> Option<&Feature> {
    picked_edit_handle(picks).filter(|h| h.property_str("editHandleType") == Some(EDIT_HANDLE_TYPE_ROTATE))
}

/// Pointer moved without a drag in progress (or during one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerMoveEvent {
    pub map_coords: Position,
    #[serde(default)]
    pub picks: Vec<Pick>,
}

/// Drag start, drag move, or drag stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEvent {
    /// Current pointer position.
    pub map_coords: Position,
    /// Pointer position recorded when the drag began.
    pub pointer_down_map_coords: Position,
}

/// Host mode options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeConfig {
    /// Align the selection box with the view bearing instead of north.
    #[serde(default)]
    pub bearing: bool,
}

/// Current map view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Map rotation in degrees.
    #[serde(default)]
    pub bearing: f64,
}

/// Everything the host hands a mode alongside each event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeProps {
    /// The externally owned data being edited.
    pub data: FeatureCollection,
    /// Indexes into `data` that are currently selected.
    #[serde(default)]
    pub selected_indexes: Vec<usize>,
    #[serde(default)]
    pub mode_config: ModeConfig,
    #[serde(default)]
    pub view_state: Option<ViewState>,
}

impl ModeProps {
    /// Props for `data` with the given selection and default options.
    #[must_use]
    pub fn new(data: FeatureCollection, selected_indexes: Vec<usize>) -> Self {
        Self { data, selected_indexes, ..Self::default() }
    }

    /// Geometries of the selected features, in selection order.
    ///
    /// Indexes with no matching feature are skipped.
    #[must_use]
    pub fn selected_geometries(&self) -> Vec<Geometry> {
        self.selected_indexes
            .iter()
            .filter_map(|&i| self.data.get(i))
            .map(|f| f.geometry.clone())
            .collect()
    }

    /// The view bearing the selection box should follow, if any.
    ///
    /// Only set when the mode opts in, the view is actually rotated, and
    /// something is selected.
    #[must_use]
    pub fn view_bearing(&self) -> Option<f64> {
        if !self.mode_config.bearing || self.selected_indexes.is_empty() {
            return None;
        }
        self.view_state.map(|v| v.bearing).filter(|b| *b != 0.0)
    }
}

/// Geometry captured when a rotate gesture begins.
///
/// Every drag frame of the gesture rotates these geometries about `pivot`,
/// never the output of an earlier frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Selected geometries in selection order.
    pub geometries: Vec<Geometry>,
    /// Centroid of `geometries`; fixed for the whole gesture.
    pub pivot: Position,
    /// Pointer position when the drag began.
    pub anchor: Position,
}

/// Internal state for the rotate gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RotateState {
    /// No handle under the pointer.
    #[default]
    Idle,
    /// The pointer is over the rotate handle; no drag yet.
    HandleArmed {
        /// The picked rotate-handle guide.
        handle: Feature,
    },
    /// A rotate drag is in progress.
    Rotating(Snapshot),
}

impl RotateState {
    /// Whether a handle is under the pointer or being dragged.
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
