pub mod draft;
pub mod feedback;
pub mod report;
pub mod scoring;
pub mod theme;
pub mod validation;

pub use draft::{EssayDraft, MutationOutcome, WORD_LIMIT};
pub use feedback::{FeedbackView, VISIBLE_LIMIT};
pub use report::{ReportBundle, ReportFormat};
pub use scoring::{PredictResponse, ScoringResult, UploadResponse};
pub use theme::Theme;
pub use validation::ValidationError;
