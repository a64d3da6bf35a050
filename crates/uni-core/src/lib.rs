/// Transform engine, style tables, and configuration for unistyle.
///
/// This crate holds the character tables for every style and the single
/// apply algorithm shared by all of them. Rien ici ne fait d'I/O, sauf le
/// chargement de la config.

pub mod config;
pub mod engine;
pub mod error;
pub mod rule;
pub mod style;
pub mod styles;
pub mod table;
pub mod utf16;

pub use config::AppConfig;
pub use engine::{Engine, strike};
pub use error::CoreError;
pub use rule::RangeRule;
pub use style::Style;
pub use table::StyleTable;
