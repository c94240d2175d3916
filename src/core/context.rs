//! Request-scoped enrichment context
//!
//! A `RequestContext` carries the contextual key/value data merged into
//! every record emitted during a request (request identity, host, pid,
//! plus host-supplied fields). It is built once per request by the host
//! and passed by reference into log calls, so concurrent requests on the
//! same category stay fully independent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestContext {
    fields: Map<String, Value>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Build a context with the standard process fields plus a request id.
    pub fn capture(request_id: impl Into<String>) -> Self {
        let mut ctx = Self::new();
        ctx.fields
            .insert("request_id".to_string(), Value::String(request_id.into()));
        if let Ok(host) = std::env::var("HOSTNAME") {
            ctx.fields.insert("server_hostname".to_string(), Value::String(host));
        }
        ctx.fields
            .insert("pid".to_string(), Value::Number(std::process::id().into()));
        ctx
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn add_field(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Merge these fields into `target`, without overwriting keys already
    /// present there (event data wins over request context).
    pub fn merge_into(&self, target: &mut Map<String, Value>) {
        for (key, value) in &self.fields {
            if !target.contains_key(key) {
                target.insert(key.clone(), value.clone());
            }
        }
    }

    /// Format fields as `k=v` pairs for plain-text records.
    pub fn format_fields(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| match v {
                Value::String(s) => format!("{}={}", k, s),
                other => format!("{}={}", k, other),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}
