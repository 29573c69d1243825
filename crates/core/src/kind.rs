use serde_json::Value;
use tracing::debug;

use crate::format::{format_batch_task_result, format_task_result, format_video_result};

/// Which response shape is being formatted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultKind {
    /// A video generation call (`success`, `task_id`, `video_*`, `thumbnail_*`)
    #[default]
    Video,
    /// A single task query (`id`, `request`, `response`)
    Task,
    /// A batch task query (`count`, `items`)
    Batch,
}

impl ResultKind {
    pub fn name(&self) -> &'static str {
        match self {
            ResultKind::Video => "video",
            ResultKind::Task => "task",
            ResultKind::Batch => "batch",
        }
    }

    pub fn format(&self, data: &Value) -> String {
        debug!(kind = self.name(), "formatting response");
        match self {
            ResultKind::Video => format_video_result(data),
            ResultKind::Task => format_task_result(data),
            ResultKind::Batch => format_batch_task_result(data),
        }
    }
}

/// Whether formatted output is an upstream error line rather than a result block.
/// Result blocks open with `Task ID: ` or `Total Tasks: `; the message may span lines.
pub fn is_error_line(output: &str) -> bool {
    output.starts_with("Error: ")
}
