use thiserror::Error;

/// Errors originating from the core module.
///
/// Transforms themselves never fail: these only surface while building
/// rules, tables, or loading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Range bounds are reversed.
    #[error("Plage invalide : U+{start:04X} > U+{end:04X}")]
    InvalidRange {
        /// First code point of the range.
        start: u32,
        /// Last code point of the range.
        end: u32,
    },

    /// Replacement string has no scalar to anchor the range on.
    #[error("Remplacement vide pour la plage U+{start:04X}..=U+{end:04X}")]
    EmptyReplacement {
        /// First code point of the range.
        start: u32,
        /// Last code point of the range.
        end: u32,
    },

    /// Shifting the replacement across the range leaves the valid `char` space.
    #[error("Remplacement hors Unicode : U+{anchor:04X} + {span} n'est pas un scalaire valide")]
    ReplacementOverflow {
        /// Last scalar of the replacement.
        anchor: u32,
        /// Largest offset applied to it.
        span: u32,
    },

    /// Two rules of the same table match a common code point.
    #[error("Règles qui se chevauchent dans la table {style} : {first} et {second}")]
    OverlappingRules {
        /// Table label.
        style: String,
        /// Debug rendering of the earlier rule.
        first: String,
        /// Debug rendering of the later rule.
        second: String,
    },

    /// Style name not recognised.
    #[error("Style inconnu : {0}")]
    UnknownStyle(String),

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),
}
