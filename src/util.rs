use wasm_bindgen::UnwrapThrowExt;
use web_sys::{Document, Storage, Window};

pub fn window() -> Window {
    web_sys::window().unwrap_throw()
}

pub fn document() -> Document {
    window().document().unwrap_throw()
}

pub fn local_storage() -> Storage {
    window().local_storage().unwrap_throw().unwrap_throw()
}
