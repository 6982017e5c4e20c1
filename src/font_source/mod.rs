//! Font-wide parameters
//!
//! Everything a run needs to know about the em box and the stroke weights
//! before any glyph is built.

pub mod metrics;

pub use metrics::{MetricOverrides, Metrics};
