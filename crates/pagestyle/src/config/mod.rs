//! Startup configuration.
//!
//! - [`Config`]: the named constants, with built-in defaults
//! - [`Overrides`]: replacement values loaded from [`CUSTOM_CONFIG_FILE`]
//! - [`LayoutMetrics`]: page quantities derived from the merged config
//! - [`ConfigError`]: fatal startup errors
//!
//! Configuration is assembled exactly once: defaults, then the optional
//! override document, then derived metrics. See [`crate::StyleSheet::load`].

mod error;
mod metrics;
pub mod overrides;
mod store;

pub use error::ConfigError;
pub use metrics::{
    LayoutMetrics, TableSpacing, ARTICLE_START_MIN_FRACTION, ARTICLE_START_MIN_FRACTION_INFOBOX,
    MIN_TABLE_FRACTION,
};
pub use overrides::{Overrides, CUSTOM_CONFIG_FILE};
pub use store::Config;
