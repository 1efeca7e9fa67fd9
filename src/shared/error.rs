use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - resolution completed (possibly truncated by limits)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (knowledge base error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Validation errors produced by the pure resolution helpers.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// These are always returned synchronously and never panic; the collector
/// recovers from all of them locally (a failed conversion skips one edge,
/// never the whole request).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("invalid ecosystem '{0}': expected one of npm, maven, gem, crates, composer, golang")]
    InvalidEcosystem(String),

    #[error("malformed purl for package '{name}': {reason}")]
    MalformedPurl { name: String, reason: String },

    #[error("version requirement is empty")]
    EmptyRequirement,

    #[error("cannot pick a concrete version from pure wildcard requirement '{0}'")]
    WildcardRequirement(String),

    #[error("invalid version requirement '{requirement}': {details}")]
    InvalidRequirement {
        requirement: String,
        details: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_invalid_ecosystem_display() {
        let error = ResolveError::InvalidEcosystem("pypi".to_string());
        let display = format!("{}", error);
        assert!(display.contains("invalid ecosystem 'pypi'"));
        assert!(display.contains("npm"));
        assert!(display.contains("golang"));
    }

    #[test]
    fn test_malformed_purl_display() {
        let error = ResolveError::MalformedPurl {
            name: "bad name".to_string(),
            reason: "contains whitespace".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("malformed purl"));
        assert!(display.contains("bad name"));
        assert!(display.contains("contains whitespace"));
    }

    #[test]
    fn test_wildcard_requirement_display() {
        let error = ResolveError::WildcardRequirement("*".to_string());
        assert!(format!("{}", error).contains("pure wildcard"));
    }

    #[test]
    fn test_invalid_requirement_display() {
        let error = ResolveError::InvalidRequirement {
            requirement: "not-a-version".to_string(),
            details: "unexpected character".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("not-a-version"));
        assert!(display.contains("unexpected character"));
    }
}
