//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state in response to intents.
///
/// Implementations must be deterministic: no clock, no randomness, no I/O.
/// Side effects (network requests, persistence) belong to the caller that
/// dispatches around the reducer.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Folds a sequence of intents over `state`.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
