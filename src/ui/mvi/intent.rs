//! Marker trait for intents.

/// Something that happened and may change state.
///
/// Intents are closed enums: a reducer matches them exhaustively, so an
/// intent the reducer does not understand cannot be constructed.
pub trait Intent: Send + 'static {}
