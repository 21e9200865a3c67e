pub mod acquisition_service;
pub mod folder_resolver;
pub mod summary_service;

pub use acquisition_service::FileAcquisition;
pub use folder_resolver::extract_folder_id;
pub use summary_service::SummaryService;
