//! # Error Taxonomy
//!
//! Inventory errors are structural and abort the whole build. Fact decode
//! errors are isolated to one host and are collected as diagnostics.

use std::path::PathBuf;

use thiserror::Error;

use crate::group::GroupKind;

/// A host definition whose `[start:end]` pattern cannot be expanded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unclosed '[' in host pattern '{hostdef}'")]
    UnclosedBracket { hostdef: String },

    #[error("host pattern '[{pattern}]' in '{hostdef}' needs exactly one ':'")]
    MissingSeparator { hostdef: String, pattern: String },

    #[error("host pattern bounds '{start}' and '{end}' in '{hostdef}' are neither integers nor single characters")]
    InvalidBounds {
        hostdef: String,
        start: String,
        end: String,
    },
}

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("line {line_no}: malformed group header '{line}'")]
    HeaderParse { line_no: usize, line: String },

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("[{group}:{kind}] references undefined group '{group_ref}'")]
    UndefinedGroup {
        kind: GroupKind,
        group: String,
        group_ref: String,
    },

    #[error("group '{group}': '{token}' is not a key=value assignment")]
    VarAssignment { group: String, token: String },

    #[error("no closing quotation in line '{line}'")]
    UnbalancedQuote { line: String },

    #[error("failed to read inventory '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A fact snapshot that could not be turned into a host update.
#[derive(Debug, Error)]
pub enum FactDecodeError {
    #[error("failed to read fact file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fact file '{}' is not valid JSON", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("fact file '{}' does not hold a JSON object", path.display())]
    NotAnObject { path: PathBuf },
}

impl FactDecodeError {
    pub fn path(&self) -> &PathBuf {
        match self {
            FactDecodeError::Read { path, .. }
            | FactDecodeError::Json { path, .. }
            | FactDecodeError::NotAnObject { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_group_message_names_both_groups() {
        let err = InventoryError::UndefinedGroup {
            kind: GroupKind::Children,
            group: "all_web".into(),
            group_ref: "web".into(),
        };
        assert_eq!(
            err.to_string(),
            "[all_web:children] references undefined group 'web'"
        );
    }

    #[test]
    fn pattern_error_converts_transparently() {
        let pattern = PatternError::MissingSeparator {
            hostdef: "db[1-3]".into(),
            pattern: "1-3".into(),
        };
        let err: InventoryError = pattern.clone().into();
        assert_eq!(err.to_string(), pattern.to_string());
    }
}
