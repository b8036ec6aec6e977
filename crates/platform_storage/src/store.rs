//! Snapshot store contract and in-memory adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Storage service holding one raw JSON document per key.
///
/// Implementations are expected to be overwrite-idempotent: saving the same
/// key twice keeps only the latest document. All methods are synchronous;
/// the state core runs single-threaded and never suspends mid-operation.
pub trait SnapshotStore {
    /// Loads the raw JSON document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable.
    fn load_raw(&self, key: &str) -> Result<Option<String>, String>;

    /// Saves a raw JSON document under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or rejects the
    /// write.
    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), String>;

    /// Deletes the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable.
    fn delete_raw(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op snapshot store for unsupported targets and baseline tests.
pub struct NoopSnapshotStore;

impl SnapshotStore for NoopSnapshotStore {
    fn load_raw(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save_raw(&self, _key: &str, _raw_json: &str) -> Result<(), String> {
        Ok(())
    }

    fn delete_raw(&self, _key: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory snapshot store keyed by string.
pub struct MemorySnapshotStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl SnapshotStore for MemorySnapshotStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        Ok(())
    }

    fn delete_raw(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a typed value through a [`SnapshotStore`].
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub fn load_typed_with<S: SnapshotStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_raw(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Serializes and saves a typed value through a [`SnapshotStore`].
///
/// # Errors
///
/// Returns an error when serialization or the store save fails.
pub fn save_typed_with<S: SnapshotStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_raw(key, &raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_store_round_trip_overwrite_and_delete() {
        let store = MemorySnapshotStore::default();
        let store_obj: &dyn SnapshotStore = &store;

        store_obj.save_raw("k", "{\"v\":1}").expect("save");
        store_obj.save_raw("k", "{\"v\":2}").expect("overwrite");
        assert_eq!(
            store_obj.load_raw("k").expect("load"),
            Some("{\"v\":2}".to_string())
        );

        store_obj.delete_raw("k").expect("delete");
        assert_eq!(store_obj.load_raw("k").expect("load"), None);
    }

    #[test]
    fn typed_helpers_round_trip_through_memory_store() {
        let store = MemorySnapshotStore::default();
        save_typed_with(&store, "counter", &41_u32).expect("save");
        assert_eq!(
            load_typed_with::<_, u32>(&store, "counter").expect("load"),
            Some(41)
        );
        assert_eq!(
            load_typed_with::<_, u32>(&store, "missing").expect("load"),
            None
        );
    }

    #[test]
    fn typed_load_surfaces_decode_failures() {
        let store = MemorySnapshotStore::default();
        store.save_raw("bad", "not json").expect("save");
        let err = load_typed_with::<_, u32>(&store, "bad").expect_err("decode should fail");
        assert!(!err.is_empty());
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store = NoopSnapshotStore;
        store.save_raw("k", "{}").expect("save");
        assert_eq!(store.load_raw("k").expect("load"), None);
        store.delete_raw("k").expect("delete");
    }

    #[test]
    fn memory_store_clones_share_contents() {
        let store = MemorySnapshotStore::default();
        let alias = store.clone();
        store.save_raw("shared", "1").expect("save");
        assert_eq!(alias.load_raw("shared").expect("load"), Some("1".to_string()));
    }
}
