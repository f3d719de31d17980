use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::HtmlElement;

use crate::app::UiApp;
use crate::config::BootstrapConfig;
use crate::service_worker;
use crate::state::ListState;
use crate::store::{load_state, save_state, LocalStorage, StateStore};
use crate::util::document;

/// The whole startup sequence, generic over its collaborators: load the
/// persisted state (or the default), mount the application, hook its
/// persistence channel up to the store, and fire the worker-registration
/// hook once.
///
/// [`bootstrap`] instantiates this with the real page; tests instantiate it
/// with a [`MemoryStore`](crate::MemoryStore) and a fake application.
pub fn bootstrap_with<A, S, R>(
    config: &BootstrapConfig,
    app: A,
    container: A::Container,
    store: S,
    register_worker: R,
) -> A::Handle
where
    A: UiApp,
    A::Item: Serialize + DeserializeOwned,
    S: StateStore + 'static,
    R: FnOnce(),
{
    let state: ListState<A::Item> = load_state(&store, &config.storage_key);

    let handle = app.initialize(state, container);

    let key = config.storage_key.clone();

    A::on_persist_request(&handle, move |state| {
        save_state(&store, &key, state);
    });

    register_worker();

    handle
}

/// Boots the application on the page: panic hook and logger first, then the
/// startup sequence against localStorage and the container element named in
/// `config`. A missing container is a deployment error and throws.
pub fn bootstrap<A>(config: &BootstrapConfig, app: A) -> A::Handle
where
    A: UiApp<Container = HtmlElement>,
    A::Item: Serialize + DeserializeOwned,
{
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());

    debug!("mounting into #{}", config.container_id);

    let container = document()
        .get_element_by_id(&config.container_id)
        .unwrap_throw()
        .dyn_into::<HtmlElement>()
        .unwrap_throw();

    bootstrap_with(config, app, container, LocalStorage, service_worker::register)
}
