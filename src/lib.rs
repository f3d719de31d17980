//! Startup glue for a browser to-do single-page application.
//!
//! This crate owns the boring edges of the page lifecycle: it decodes the
//! persisted list state out of localStorage (falling back to an empty list
//! when there is nothing usable there), mounts an opaque UI application into
//! its container element, relays the application's persistence notifications
//! back into localStorage, and registers the service worker. Everything
//! interesting about the list itself lives behind the [`UiApp`] trait.

mod app;
mod bootstrap;
mod config;
mod relay;
mod service_worker;
mod state;
mod store;
mod util;

pub use app::UiApp;
pub use bootstrap::{bootstrap, bootstrap_with};
pub use config::BootstrapConfig;
pub use relay::{persist_relay, spawn_persist_relay};
pub use state::ListState;
pub use store::{load_state, save_state, LocalStorage, MemoryStore, StateStore};
