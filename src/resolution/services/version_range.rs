use crate::resolution::domain::{Dependency, DependencyJob, Ecosystem};
use crate::shared::ResolveError;

/// Comparison and range operators stripped from the front of a
/// requirement token. Order matters: two-character operators first.
const RANGE_OPERATORS: [&str; 7] = [">=", "<=", ">", "<", "=", "^", "~"];

/// Deterministically selects one concrete representative version from an
/// ecosystem version-range string.
///
/// The knowledge base indexes concrete versions, not ranges, so every
/// requirement discovered during traversal has to collapse to a single
/// version before it can be looked up again. The selection is
/// first-match-wins, not an exhaustive search:
///
/// 1. Only the first `||` alternative is considered.
/// 2. A hyphen range `A - B` collapses to `A`.
/// 3. A leading comparison operator is stripped and the first version
///    token kept.
/// 4. Wildcard components (`x`, `X`, `*`) become `0` and missing
///    minor/patch components are padded, so `"1"` and `"1.x"` both
///    normalize to `"1.0.0"`. Pre-release and build-metadata suffixes are
///    preserved verbatim.
/// 5. The normalized string must parse as a semantic version.
///
/// Concrete exact versions pass through unchanged. Empty requirements and
/// pure wildcards fail: there is no sensible concrete substitute for `*`.
pub fn pick_first_version_from_range(requirement: &str) -> Result<String, ResolveError> {
    let requirement = requirement.trim();
    if requirement.is_empty() {
        return Err(ResolveError::EmptyRequirement);
    }

    // First alternative of a logical-OR requirement
    let first = requirement
        .split("||")
        .next()
        .unwrap_or_default()
        .trim();
    if first.is_empty() {
        return Err(ResolveError::InvalidRequirement {
            requirement: requirement.to_string(),
            details: "empty first alternative".to_string(),
        });
    }

    // Hyphen range "A - B": take the lower bound. The spaces distinguish
    // it from a pre-release hyphen like 1.2.3-beta.
    let candidate = match first.split_once(" - ") {
        Some((lower, _)) => lower.trim(),
        None => first,
    };

    let stripped = strip_leading_operator(candidate);
    // Compound comparator sets like ">=4.2.1 <5.0.0" keep only the first token
    let token = stripped
        .split_whitespace()
        .next()
        .ok_or_else(|| ResolveError::InvalidRequirement {
            requirement: requirement.to_string(),
            details: "no version token after operator".to_string(),
        })?;

    let normalized = normalize_version(token)?;

    semver::Version::parse(&normalized).map_err(|e| ResolveError::InvalidRequirement {
        requirement: requirement.to_string(),
        details: e.to_string(),
    })?;

    Ok(normalized)
}

/// Converts a job into its canonical `Dependency` identity.
///
/// Builds a versioned package-URL from `(ecosystem, purl_name, version)`,
/// validating the ecosystem against the fixed registry, then strips the
/// version suffix so the bare purl becomes the graph key prefix.
pub fn extract_dependency_from_job(job: &DependencyJob) -> Result<Dependency, ResolveError> {
    let ecosystem: Ecosystem = job.ecosystem.parse()?;

    let name = job.purl_name.trim();
    if name.is_empty() {
        return Err(ResolveError::MalformedPurl {
            name: job.purl_name.clone(),
            reason: "package name is empty".to_string(),
        });
    }
    if name.chars().any(char::is_whitespace) {
        return Err(ResolveError::MalformedPurl {
            name: job.purl_name.clone(),
            reason: "package name contains whitespace".to_string(),
        });
    }
    // npm scope markers are the only legal use of '@' in a name
    if name.chars().skip(1).any(|c| c == '@') {
        return Err(ResolveError::MalformedPurl {
            name: job.purl_name.clone(),
            reason: "package name contains an embedded '@'".to_string(),
        });
    }

    let version = job.version.trim();
    if version.is_empty() {
        return Err(ResolveError::MalformedPurl {
            name: job.purl_name.clone(),
            reason: "version is empty".to_string(),
        });
    }

    let purl = format!("pkg:{}/{}", ecosystem.as_str(), name);
    Dependency::new(purl, version.to_string()).map_err(|e| ResolveError::MalformedPurl {
        name: job.purl_name.clone(),
        reason: e.to_string(),
    })
}

/// Strips one leading range operator, if present, and trims the remainder
fn strip_leading_operator(token: &str) -> &str {
    for op in RANGE_OPERATORS {
        if let Some(rest) = token.strip_prefix(op) {
            return rest.trim_start();
        }
    }
    token
}

fn is_wildcard(component: &str) -> bool {
    matches!(component, "x" | "X" | "*")
}

/// Normalizes a bare version token to a full `major.minor.patch` triple.
///
/// Wildcard components become `0`, missing components are right-padded,
/// and any pre-release/build suffix is carried through untouched. A token
/// whose major component is itself a wildcard fails: picking a concrete
/// version from `*` or `x.x` is meaningless.
fn normalize_version(token: &str) -> Result<String, ResolveError> {
    if token.is_empty() {
        return Err(ResolveError::EmptyRequirement);
    }

    // Split off a pre-release/build suffix before touching the core
    let (core, suffix) = match token.find(['-', '+']) {
        Some(idx) => token.split_at(idx),
        None => (token, ""),
    };

    if core.is_empty() {
        return Err(ResolveError::InvalidRequirement {
            requirement: token.to_string(),
            details: "missing version core".to_string(),
        });
    }

    let mut components: Vec<String> = core.split('.').map(str::to_string).collect();
    if components.len() > 3 {
        return Err(ResolveError::InvalidRequirement {
            requirement: token.to_string(),
            details: "more than three version components".to_string(),
        });
    }

    if is_wildcard(&components[0]) {
        return Err(ResolveError::WildcardRequirement(token.to_string()));
    }

    for component in components.iter_mut() {
        if is_wildcard(component) {
            *component = "0".to_string();
        }
    }
    while components.len() < 3 {
        components.push("0".to_string());
    }

    Ok(format!("{}{}", components.join("."), suffix))
}
