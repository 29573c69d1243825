use serde_json::Value;
use tracing::trace;

use crate::record::Record;

/// Format an upstream error record as `Error: <code> - <message>`
pub fn format_error(error: Record<'_>) -> String {
    let code = error.field_or("code", "unknown");
    let message = error.field_or("message", "Unknown error");
    if code.is_missing() || message.is_missing() {
        trace!("error record incomplete, using defaults");
    }
    format!("Error: {} - {}", code, message)
}

/// Format a video generation result for display
pub fn format_video_result(data: &Value) -> String {
    let data = Record::new(data);
    if !data.is_truthy("success") {
        return format_error(data.nested("error"));
    }

    let lines = [
        format!("Task ID: {}", data.field("task_id")),
        format!("Video ID: {}", data.field("video_id")),
        format!("State: {}", data.field("state")),
        String::new(),
        format!("Prompt: {}", data.field("prompt")),
        String::new(),
        "Video Info:".to_string(),
        format!("  URL: {}", data.field("video_url")),
        format!("  Width: {}", data.field("video_width")),
        format!("  Height: {}", data.field("video_height")),
        String::new(),
        "Thumbnail Info:".to_string(),
        format!("  URL: {}", data.field("thumbnail_url")),
        format!("  Width: {}", data.field("thumbnail_width")),
        format!("  Height: {}", data.field("thumbnail_height")),
        String::new(),
    ];

    lines.join("\n")
}

/// Format a single task query result for display
pub fn format_task_result(data: &Value) -> String {
    let data = Record::new(data);
    if data.contains("error") {
        return format_error(data.nested("error"));
    }

    let request = data.nested("request");
    let response = data.nested("response");

    let mut lines = vec![
        format!("Task ID: {}", data.field("id")),
        format!("Created At: {}", data.field("created_at")),
        String::new(),
        "Request:".to_string(),
        format!("  Action: {}", request.field("action")),
        format!("  Prompt: {}", request.field("prompt")),
        String::new(),
    ];

    if response.is_truthy("success") {
        lines.push("Response: Success".to_string());
        lines.push(String::new());
        lines.extend([
            format!("Video ID: {}", response.field("video_id")),
            format!("Video URL: {}", response.field("video_url")),
            format!(
                "Video Size: {}x{}",
                response.field("video_width"),
                response.field("video_height")
            ),
            format!("State: {}", response.field("state")),
            String::new(),
            format!("Thumbnail URL: {}", response.field("thumbnail_url")),
        ]);
    } else {
        // Unsuccessful responses have no fixed shape; show them as-is.
        lines.push(format!("Response: {}", data.field_or("response", "{}")));
    }

    lines.join("\n")
}

/// Format a batch task query result for display
pub fn format_batch_task_result(data: &Value) -> String {
    let data = Record::new(data);
    if data.contains("error") {
        return format_error(data.nested("error"));
    }

    let mut lines = vec![
        format!("Total Tasks: {}", data.field_or("count", "0")),
        String::new(),
    ];

    for item in data.items("items") {
        let response = item.nested("response");
        lines.extend([
            format!("=== Task: {} ===", item.field("id")),
            format!("Created At: {}", item.field("created_at")),
            format!("Success: {}", response.field_or("success", "False")),
            format!("Video URL: {}", response.field("video_url")),
            String::new(),
        ]);
    }

    lines.join("\n")
}
