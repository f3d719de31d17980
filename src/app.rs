use crate::state::ListState;

/// The opaque UI application this crate mounts.
///
/// The bootstrap knows nothing about rendering or list editing; it only
/// needs to construct the application with an initial state and hear about
/// every state it wants persisted. Concrete implementations supply their own
/// item type, mount target, and handle.
pub trait UiApp {
    /// The application's item type. Opaque here; the bootstrap only ever
    /// encodes and decodes it.
    type Item;

    /// What the application mounts into. `web_sys::HtmlElement` on the page;
    /// tests use `()`.
    type Container;

    /// Live handle to the mounted application.
    type Handle;

    /// Constructs and mounts the application with its initial state. Called
    /// exactly once.
    fn initialize(self, state: ListState<Self::Item>, container: Self::Container) -> Self::Handle;

    /// Registers the single persistence callback. The application invokes it
    /// with the full current list state on every mutation it wants saved;
    /// nothing is returned to the application.
    fn on_persist_request<F>(handle: &Self::Handle, callback: F)
    where
        F: FnMut(&ListState<Self::Item>) + 'static;
}
