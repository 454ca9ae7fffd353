pub mod log;
pub mod progress_log;
pub mod session;
pub mod validation;

pub use progress_log::{DEFAULT_STORAGE_KEY, ProgressLog};
pub use validation::{ValidDraft, ValidationError, validate};
