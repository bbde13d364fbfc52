//! Common traits for GoCD resources

/// Common trait for named GoCD config entities (pipelines, templates, groups)
///
/// GoCD identifies config entities by name, so matching is by name only.
pub trait GocdResource {
    /// Get the resource name
    fn name(&self) -> &str;

    /// Check if the resource matches a requested id
    ///
    /// The wildcard `*` matches every resource.
    fn matches(&self, id: &str) -> bool {
        id == crate::config::defaults::ID || self.name() == id
    }
}
