use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(render_table(&serde_json::to_value(value)?)),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table(value: &Value) -> String {
    match value {
        Value::Array(items) if items.is_empty() => {
            String::from("No tasks found. Add one with: tally add <description>")
        }
        Value::Array(items) => items
            .iter()
            .map(render_row)
            .collect::<Vec<_>>()
            .join("\n"),
        other => render_row(other),
    }
}

/// One human-readable line per task; non-task payloads fall back to JSON.
fn render_row(value: &Value) -> String {
    let Some(object) = value.as_object() else {
        return value.to_string();
    };

    match (
        object.get("id").and_then(Value::as_i64),
        object.get("description").and_then(Value::as_str),
        object.get("completed").and_then(Value::as_bool),
        object.get("created_at").and_then(Value::as_str),
    ) {
        (Some(id), Some(description), Some(completed), Some(created_at)) => {
            let status = if completed { "[x]" } else { "[ ]" };
            format!(
                "{status} [{id}] {description} (created: {})",
                format_timestamp(created_at)
            )
        }
        _ => value.to_string(),
    }
}

fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw).map_or_else(
        |_| raw.to_string(),
        |parsed| {
            parsed
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        },
    )
}
