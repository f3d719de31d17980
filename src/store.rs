use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::UnwrapThrowExt;

use crate::state::ListState;
use crate::util::local_storage;

/// A string-valued key-value store the bootstrap persists into.
///
/// The page uses [`LocalStorage`]; tests and headless hosts use
/// [`MemoryStore`]. `set` is fire-and-forget: implementations surface write
/// failures however their host does (localStorage throws), and callers do
/// not retry.
pub trait StateStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);
}

/// The browser's `window.localStorage`.
pub struct LocalStorage;

impl StateStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().get_item(key).unwrap_throw()
    }

    fn set(&self, key: &str, value: &str) {
        local_storage().set_item(key, value).unwrap_throw()
    }
}

/// In-memory store. Clones share the same underlying map, so a clone handed
/// to the persistence relay stays observable from the outside.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}

/// Reads the list state stored under `key`.
///
/// A missing entry and an entry that fails to decode are treated the same
/// way: the empty default is returned and nothing is reported. Upgrading the
/// corrupt case to an error would change observable startup behavior, so it
/// stays silent.
pub fn load_state<S, T>(store: &S, key: &str) -> ListState<T>
where
    S: StateStore,
    T: DeserializeOwned,
{
    store
        .get(key)
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

/// Serializes `state` and writes it under `key`, replacing whatever was
/// there before. No merge, no retry.
pub fn save_state<S, T>(store: &S, key: &str, state: &ListState<T>)
where
    S: StateStore,
    T: Serialize,
{
    let json = serde_json::to_string(state).unwrap_throw();

    store.set(key, &json);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entry_loads_default() {
        let store = MemoryStore::new();

        let state: ListState<String> = load_state(&store, "todo_items");
        assert_eq!(state, ListState::default());
    }

    #[test]
    fn stored_entry_round_trips() {
        let store = MemoryStore::new();
        store.set("todo_items", r#"{"nextID":2,"items":["a","b"]}"#);

        let state: ListState<String> = load_state(&store, "todo_items");
        assert_eq!(state.next_id, 2);
        assert_eq!(state.items, vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn corrupt_entry_loads_default() {
        let store = MemoryStore::new();
        store.set("todo_items", "{not json");

        let state: ListState<u32> = load_state(&store, "todo_items");
        assert_eq!(state, ListState::default());
    }

    #[test]
    fn save_overwrites_wholesale() {
        let store = MemoryStore::new();
        store.set("todo_items", r#"{"nextID":9,"items":[1,2,3]}"#);

        save_state(
            &store,
            "todo_items",
            &ListState {
                next_id: 1,
                items: vec![4],
            },
        );

        assert_eq!(
            store.get("todo_items").as_deref(),
            Some(r#"{"nextID":1,"items":[4]}"#)
        );
    }
}
