use crate::util::window;

/// Kicks off service-worker registration for offline caching. The returned
/// promise is dropped on purpose: the original app ignored the outcome, and
/// the cache strategy lives entirely in the worker script.
pub fn register() {
    let _ = window()
        .navigator()
        .service_worker()
        .register("service-worker.js");
}
