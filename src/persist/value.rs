use std::sync::Arc;

use super::store::StateStore;

/// A string value backed by one key of a [`StateStore`].
///
/// The stored value (or `initial` when nothing is stored) is read once on
/// construction. Each later `set` writes through; the startup read never
/// triggers a write. Without a store the value lives in memory only.
pub struct SemiPersistentValue {
    store: Option<Arc<StateStore>>,
    key: &'static str,
    value: String,
}

impl SemiPersistentValue {
    pub fn new(store: Option<Arc<StateStore>>, key: &'static str, initial: &str) -> Self {
        let value = store
            .as_ref()
            .and_then(|store| store.get(key))
            .filter(|stored| !stored.is_empty())
            .unwrap_or_else(|| initial.to_string());
        Self { store, key, value }
    }

    /// In-memory value with no backing file.
    pub fn ephemeral(key: &'static str, initial: &str) -> Self {
        Self::new(None, key, initial)
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value == self.value {
            return;
        }
        self.value = value;
        if let Some(store) = &self.store {
            if let Err(err) = store.set(self.key, &self.value) {
                tracing::warn!(key = self.key, error = %err, "failed to persist value");
            }
        }
    }
}
