use serde_derive::{Deserialize, Serialize};

/// The full persisted to-do list: the next fresh item id plus the ordered
/// items themselves.
///
/// `T` is whatever item type the UI application defines; this crate only
/// ever moves it between JSON and the application, so it stays opaque. The
/// wire name of the counter field is `nextID`, matching the blobs written by
/// earlier deployments of the app so existing storage keeps round-tripping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListState<T> {
    #[serde(rename = "nextID")]
    pub next_id: u32,

    pub items: Vec<T>,
}

// Manual impl so the empty default doesn't demand T: Default.
impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            items: vec![],
        }
    }
}
