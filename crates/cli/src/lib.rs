//! Delivery note: configuration, rendering, and the sample shipment.

pub mod config;
pub mod demo;
pub mod error;
pub mod report;

pub use config::{OutputFormat, ReportConfig};
pub use error::{ConfigError, ReportError};
pub use report::DeliveryNote;
