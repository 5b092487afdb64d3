pub mod configuration;
pub mod error;
pub mod history;
pub mod prompt;
pub mod session;
pub mod style;

pub use configuration::{AppConfig, GeminiApiConfig};
pub use error::AppError;
pub use history::{HISTORY_LIMIT, HistoryEntry};
pub use session::{GENERATION_FAILED_MESSAGE, SessionSnapshot, SessionState};
pub use style::{AUTO_STYLE_LABEL, BuiltinStyle, CustomStyle, ResolvedStyle};
