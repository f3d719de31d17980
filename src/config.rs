/// Where the bootstrap reads and writes, and where it mounts.
///
/// Passed explicitly into [`bootstrap`](crate::bootstrap) so nothing in this
/// crate reaches for module-level globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// localStorage key holding the serialized list state.
    pub storage_key: String,

    /// `id` of the element the UI application is mounted into.
    pub container_id: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            storage_key: "todo_items".to_owned(),
            container_id: "root".to_owned(),
        }
    }
}
