//! Rotate edit mode for map feature editing.
//!
//! Selected point, line, and polygon features are rotated about their common
//! centroid by dragging a handle above the selection's enveloping box. The
//! host forwards pointer and drag events; handlers return [`action::Action`]s
//! (edits, cursor changes, pan suppression) for the host to apply, and
//! [`rotate::RotateMode::get_guides`] supplies the guide features to draw each
//! frame.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`rotate`] | The rotate mode and its handlers |
//! | [`input`] | Events, picks, mode props, and the gesture state |
//! | [`action`] | Edit actions and handler side effects |
//! | [`guides`] | Selection box, rotate handle, and pivot guides |
//! | [`geo`] | Positions, geometries, features |
//! | [`geomath`] | Centroid, bearing, rotation, bbox, line slicing |
//! | [`collection`] | Immutable, structurally shared feature collection |
//! | [`session`] | Recorded sessions replayed against the mode |
//! | [`config`] | Environment-driven mode configuration |
//! | [`error`] | Crate error type |

pub mod action;
pub mod collection;
pub mod config;
pub mod error;
pub mod geo;
pub mod geomath;
pub mod guides;
pub mod input;
pub mod rotate;
pub mod session;
