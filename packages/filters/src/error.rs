//! Error types for the filters

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    /// A referenced annotation's type has no configuration entry at
    /// the attribute-whitelisting stage. Upstream annotation-type
    /// filtering is supposed to make this impossible, so hitting it
    /// is a caller contract violation, not a recoverable condition.
    #[error("no annotation rule configured for type '{0}'")]
    MissingAnnotationRule(String),

    /// A whitelist entry's regex pattern failed to compile.
    #[error("invalid whitelist pattern for attribute '{attribute}': {source}")]
    InvalidPattern {
        attribute: String,
        #[source]
        source: regex::Error,
    },
}
