use crate::shared::ResolveError;

/// Fixed registry of supported package ecosystems.
///
/// The knowledge base indexes packages per ecosystem; any job carrying an
/// ecosystem outside this registry fails canonicalization with
/// `ResolveError::InvalidEcosystem` and is skipped by the result handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    Npm,
    Maven,
    Gem,
    Crates,
    Composer,
    Golang,
}

impl Ecosystem {
    /// Canonical lowercase name as used in purl type position
    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Npm => "npm",
            Ecosystem::Maven => "maven",
            Ecosystem::Gem => "gem",
            Ecosystem::Crates => "crates",
            Ecosystem::Composer => "composer",
            Ecosystem::Golang => "golang",
        }
    }

    /// All registered ecosystems
    pub fn all() -> &'static [Ecosystem] {
        &[
            Ecosystem::Npm,
            Ecosystem::Maven,
            Ecosystem::Gem,
            Ecosystem::Crates,
            Ecosystem::Composer,
            Ecosystem::Golang,
        ]
    }
}

impl std::str::FromStr for Ecosystem {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(Ecosystem::Npm),
            "maven" => Ok(Ecosystem::Maven),
            "gem" => Ok(Ecosystem::Gem),
            "crates" => Ok(Ecosystem::Crates),
            "composer" => Ok(Ecosystem::Composer),
            "golang" => Ok(Ecosystem::Golang),
            other => Err(ResolveError::InvalidEcosystem(other.to_string())),
        }
    }
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
