pub mod session_ctx;
pub mod submission;
pub mod submit_flow;

pub use session_ctx::{SessionCtx, SessionStats};
pub use submission::{SubmissionOutcome, SubmissionState, SubmitError};
pub use submit_flow::SubmitFlow;
