//! Record rendering for the two log forms
//!
//! Free-text records render as `[timestamp] [LEVEL] message`, optionally
//! annotated with the request context as trailing `k=v` pairs. Structured
//! records render as one-line JSON with context fields merged underneath
//! the payload. Both forms are newline-delimited on the wire.

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

use super::context::RequestContext;
use super::error::Result;
use super::severity::Severity;

pub const RECORD_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Options for the free-text form.
#[derive(Debug, Clone, Copy)]
pub struct LogOptions {
    /// Append the request context as `| k=v ...` detail.
    pub detail: bool,
    /// Frame the record as its own newline-terminated line.
    pub separate: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            detail: true,
            separate: true,
        }
    }
}

/// Escape newlines, carriage returns and tabs so a crafted message cannot
/// forge additional records.
pub fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Render the free-text form.
pub fn render_text(
    timestamp: DateTime<FixedOffset>,
    severity: Severity,
    message: &str,
    context: Option<&RequestContext>,
    opts: LogOptions,
) -> Vec<u8> {
    let mut output = format!(
        "[{}] [{}] {}",
        timestamp.format(RECORD_TIME_FORMAT),
        severity,
        sanitize_message(message)
    );

    if opts.detail {
        if let Some(ctx) = context.filter(|c| !c.is_empty()) {
            output.push_str(" | ");
            output.push_str(&ctx.format_fields());
        }
    }

    if opts.separate {
        output.push('\n');
    }
    output.into_bytes()
}

/// Render the structured form. Payload fields win over context fields on
/// key collision; `event_time` and `level` are always present.
pub fn render_structured(
    timestamp: DateTime<FixedOffset>,
    severity: Severity,
    mut payload: Map<String, Value>,
    context: Option<&RequestContext>,
) -> Result<Vec<u8>> {
    if let Some(ctx) = context {
        ctx.merge_into(&mut payload);
    }
    payload.insert(
        "event_time".to_string(),
        Value::String(timestamp.format(RECORD_TIME_FORMAT).to_string()),
    );
    payload.insert(
        "level".to_string(),
        Value::String(severity.as_str().to_string()),
    );

    let mut line = serde_json::to_vec(&Value::Object(payload))?;
    line.push(b'\n');
    Ok(line)
}
