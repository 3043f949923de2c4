pub mod prefs_store;
pub mod report_service;
pub mod upload_service;

pub use prefs_store::PrefsStore;
pub use report_service::{ExportOutcome, ReportService};
pub use upload_service::{UploadOutcome, UploadService};
