//! lumafmt Core Library
//!
//! Renders video generation task results from the upstream API as
//! human-readable text, tolerating any missing or malformed field.

pub mod error;
pub mod format;
pub mod kind;
pub mod load;
pub mod record;

pub use error::{Result, ResultFormatError};
pub use format::{
    format_batch_task_result, format_error, format_task_result, format_video_result,
};
pub use kind::{ResultKind, is_error_line};
pub use load::{load_response, parse_response};
pub use record::{Field, PLACEHOLDER, Record, is_truthy};
