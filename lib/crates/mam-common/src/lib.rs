pub mod api;
pub mod config;
pub mod hook;
pub mod validate;

pub use config::ApiConfig;
pub use hook::{
    FileEntry, FileStatus, HookRequest, HookResponse, Operation, Verdict, API_VERSION, FILE_READY,
};
pub use validate::{validate_date_prefix, validate_item_id, validate_metadata_field, CommonError};
