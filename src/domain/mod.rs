mod export_job;
mod extraction_request;
mod flash_status;
mod job_status;
mod mimetype;

pub use export_job::{ExportJob, JobId};
pub use extraction_request::{ExtractionRequest, ValidationError, MAX_MAX_DOCS, MIN_MAX_DOCS};
pub use flash_status::FlashStatus;
pub use job_status::JobStatus;
pub use mimetype::{MimetypeOption, SUPPORTED_MIMETYPES};
