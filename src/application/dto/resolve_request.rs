/// One top-level package supplied by the caller as a seed for traversal
#[derive(Debug, Clone)]
pub struct EntryDependency {
    /// Package name within the ecosystem
    pub purl_name: String,
    /// Version requirement (a concrete version or a range string)
    pub requirement: String,
    /// Ecosystem the package belongs to
    pub ecosystem: String,
}

impl EntryDependency {
    pub fn new(
        purl_name: impl Into<String>,
        requirement: impl Into<String>,
        ecosystem: impl Into<String>,
    ) -> Self {
        Self {
            purl_name: purl_name.into(),
            requirement: requirement.into(),
            ecosystem: ecosystem.into(),
        }
    }
}

/// Request to resolve the transitive dependency tree of one or more
/// entry packages
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub entries: Vec<EntryDependency>,
    /// Expansion budget: how many levels below the entries to traverse
    pub depth: u32,
}

impl ResolveRequest {
    pub fn new(entries: Vec<EntryDependency>, depth: u32) -> Self {
        Self { entries, depth }
    }
}
