pub mod errors;
pub mod html;
pub mod json;
pub mod static_files;

pub use errors::{error_to_response, json_error_response};
pub use html::{html_response, html_response_with_status};
pub use json::json_response;
pub use static_files::static_file_response;
