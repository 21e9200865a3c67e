pub mod app_state;
pub mod summary_flow;

pub use app_state::{AppEvent, AppState, AppStatus};
pub use summary_flow::{SummaryFlow, NO_FILES_MESSAGE};
