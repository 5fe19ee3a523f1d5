//! # Kycaml Reports
//!
//! Output side of the generators.
//!
//! - [`writer`]: datasets as indented JSON files
//! - [`TransactionDatasetReport`], [`CustomerDatasetReport`]: one row per
//!   record plus summary statistics
//! - [`CsvExporter`], [`JsonExporter`], [`MarkdownExporter`]: render any
//!   [`ReportData`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use kycaml_reports::{ExportFormat, TransactionDatasetReport};
//!
//! let report = TransactionDatasetReport::new("AML Dataset", transactions);
//! println!("{}", ExportFormat::Markdown.exporter().export(&report));
//! ```

pub mod dataset;
pub mod error;
pub mod exporters;
pub mod writer;

pub use dataset::{CustomerDatasetReport, TransactionDatasetReport};
pub use error::{ReportError, ReportResult};
pub use exporters::{
    CsvExporter, ExportFormat, JsonExporter, MarkdownExporter, ReportData, ReportExporter,
};
pub use writer::{load_json, save_to_json};
