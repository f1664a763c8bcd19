use serde_json::json;

use super::*;
use crate::action::EditType;
use crate::geo::Geometry;

fn session_json() -> serde_json::Value {
    let handle = json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [1.5, 1.003] },
        "properties": { "guideType": "editHandle", "editHandleType": "rotate" },
    });
    json!({
        "data": {
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]] }, "properties": {} },
                { "type": "Feature", "geometry": { "type": "Point", "coordinates": [9, 9] }, "properties": {} },
                { "type": "Feature", "geometry": { "type": "Polygon", "coordinates": [[[2, 0], [3, 0], [3, 1], [2, 1], [2, 0]]] }, "properties": {} },
            ],
        },
        "selectedIndexes": [0, 2],
        "events": [
            { "type": "pointerMove", "mapCoords": [1.5, 1.003], "picks": [{ "object": handle, "isGuide": true }] },
            { "type": "startDragging", "mapCoords": [0, 0], "pointerDownMapCoords": [0, 0] },
            { "type": "dragging", "mapCoords": [1, 1], "pointerDownMapCoords": [0, 0] },
            { "type": "stopDragging", "mapCoords": [2, 0], "pointerDownMapCoords": [0, 0] },
        ],
    })
}

fn session() -> Session {
    Session::from_json(&session_json().to_string()).unwrap()
}

#[test]
fn parses_events_in_order() {
    let s = session();
    assert_eq!(s.events.len(), 4);
    assert!(matches!(s.events[0], SessionEvent::PointerMove(_)));
    assert!(matches!(s.events[3], SessionEvent::StopDragging(_)));
    assert_eq!(s.selected_indexes, vec![0, 2]);
}

#[test]
fn optional_fields_default() {
    let mut raw = session_json();
    raw.as_object_mut().unwrap().remove("events");
    raw.as_object_mut().unwrap().remove("selectedIndexes");
    let s = Session::from_json(&raw.to_string()).unwrap();
    assert!(s.events.is_empty());
    assert!(s.selected_indexes.is_empty());
    assert!(!s.mode_config.bearing);
}

#[test]
fn invalid_json_is_error() {
    let err = Session::from_json("[]").unwrap_err();
    assert!(matches!(err, GeoEditError::InvalidJson(_)));
}

#[test]
fn missing_file_is_io_error() {
    let err = Session::load(Path::new("/nonexistent/geoedit/session.json")).unwrap_err();
    assert!(matches!(err, GeoEditError::Io(_)));
}

#[test]
fn replay_emits_rotating_then_rotated() {
    let mut mode = RotateMode::default();
    let replay = session().replay(&mut mode);

    let kinds: Vec<EditType> = replay.edits().map(|e| e.edit_type).collect();
    assert_eq!(kinds, vec![EditType::Rotating, EditType::Rotated]);
    assert!(replay.actions.contains(&Action::CancelPan));
    assert!(!mode.is_rotating());
}

#[test]
fn replay_final_data_is_committed_edit() {
    let mut mode = RotateMode::default();
    let replay = session().replay(&mut mode);
    let last = replay.edits().last().unwrap();
    assert_eq!(replay.final_data, last.updated_data);
    assert_eq!(replay.final_data.get(1).unwrap().geometry, Geometry::Point([9.0, 9.0]));
}

#[test]
fn initial_guides_show_handle() {
    let guides = session().initial_guides(&RotateMode::default());
    assert_eq!(guides.len(), 3);
}

#[test]
fn session_round_trips_through_json() {
    let s = session();
    let again = Session::from_json(&serde_json::to_string(&s).unwrap()).unwrap();
    assert_eq!(again, s);
}
