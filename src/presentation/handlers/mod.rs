mod form;
mod health;
mod status;
mod submit;

pub use form::{form_handler, FormViewModel};
pub use health::health_handler;
pub use status::{status_handler, ExportStatusResponse};
pub use submit::{submit_handler, SubmitForm};
