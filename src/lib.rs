//!
//! A tolerant Rust parser for the Prometheus [text exposition format](https://prometheus.io/docs/instrumenting/exposition_formats/).
//!
//! ## Features
//!
//! - Parse `metric_name{label="value",...} value` lines into [`MetricRecord`]s, in source order.
//! - Skip `#` comments and blank lines.
//! - Tolerate broken exporters: a line with a malformed label block is dropped, the rest of the scrape is kept.
//! - Read `NaN`, and the `unknown` value some RabbitMQ versions emit, as NaN.
//! - Optional `serde` feature to forward the records downstream.
//!
//! ## Why?
//!
//! Scraping message brokers, JVM runtimes and stream-processing clusters means reading whatever their exporters
//! produce, and some of them do not follow the format to the letter. One bad label value should not cost
//! the whole scrape, but text that is not an exposition at all must be reported.
//!
//! It does not aim for full compliance: there is no support for exemplars, timestamps,
//! `HELP`/`TYPE` metadata or histogram and summary grouping.
//!
//! ## Acknowledgements
//!
//! The parsing heavily relies on [`nom`](https://crates.io/crates/nom).
//!
//! ## Example
//!
//! ```rust
//! let raw = r#"# HELP jvm_info VM version info
//! ## TYPE jvm_info gauge
//! jvm_info{version="11.0.16+8-post-Debian-1deb11u1",vendor="Debian",} 1.0
//! kafka_network_requestmetrics_totaltimems 179494
//! rabbitmq_detailed_queue_messages_ready{queue=""{"command":"OPEN"}""} 5
//! rabbitmq_detailed_disk_space_available_bytes unknown
//! "#;
//!
//! let records = rusty_promtext::parse(raw).unwrap();
//!
//! // The line with the broken label value is skipped.
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[0].key(), "jvm_info");
//! assert_eq!(records[0].attr("version"), Some("11.0.16+8-post-Debian-1deb11u1"));
//! assert_eq!(records[1].value(), 179494.0);
//! assert!(records[2].value().is_nan());
//! ```
//!
//! Or when the input is not an exposition:
//!
//! ```rust
//! let error = rusty_promtext::parse("<html>nope</html>").unwrap_err();
//! println!("{}", error);
//! assert_eq!(error.offset(), 0);
//! ```

/// Label blocks.
pub mod attributes;
mod errors;
/// Metric keys.
pub mod key;
mod record;
mod scanner;
/// Sample values, and their conversion to floats.
pub mod value;

// Re-exports
pub use errors::Expected;
pub use errors::RustyPromTextError;

pub use record::Attributes;
pub use record::MetricRecord;

pub use scanner::parse;
