use futures_signals::signal::{Signal, SignalExt};
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use crate::state::ListState;
use crate::store::{save_state, StateStore};

/// Drains a signal of list states into the store, writing every state it
/// observes under `key`. Resolves when the signal ends.
///
/// This is the signal-shaped flavor of the persistence relay, for
/// applications that expose their persisted state as a
/// [`futures_signals::signal::Mutable`] instead of taking a callback. The
/// application never learns whether a write happened.
pub async fn persist_relay<S, T>(
    store: S,
    key: String,
    states: impl Signal<Item = ListState<T>>,
) where
    S: StateStore,
    T: Serialize,
{
    states
        .for_each(|state| {
            save_state(&store, &key, &state);
            async {}
        })
        .await;
}

/// Runs [`persist_relay`] on the page's event loop for the lifetime of the
/// signal.
pub fn spawn_persist_relay<S, T>(
    store: S,
    key: String,
    states: impl Signal<Item = ListState<T>> + 'static,
) where
    S: StateStore + 'static,
    T: Serialize + 'static,
{
    spawn_local(persist_relay(store, key, states));
}
