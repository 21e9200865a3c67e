pub mod drive;
pub mod file_record;
pub mod gemini;
pub mod summary;

pub use drive::{DriveFile, DriveFileList};
pub use file_record::{FileKind, FileRecord};
pub use gemini::{GenerateContentRequest, GenerateContentResponse, Part};
pub use summary::SummaryResult;
