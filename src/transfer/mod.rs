// Public API - what other modules can use
pub use document::{ExportDocument, EXPORT_FORMAT_VERSION};
pub use handlers::{export_scoreboard, import_scoreboard};
pub use service::{ImportSummary, TransferService};

// Internal modules
mod document;
mod handlers;
mod service;
