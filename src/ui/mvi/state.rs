//! Marker trait for view state.

/// View state: cloneable, comparable for change detection, with a
/// well-defined initial value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
