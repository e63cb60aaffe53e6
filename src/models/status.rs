use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Human-readable timestamp layout, e.g. `03/07/2014 09:05:02pm`
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M:%S%P";

/// The subset of a `getstatus` response that gets logged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRecord {
    /// Local time of extraction
    pub timestamp: String,
    /// Milliseconds since the Unix epoch at extraction
    pub unix_timestamp: i64,
    /// User's display name
    pub display_name: String,
    /// Numeric presence status
    pub status: i64,
    /// Free-text status message
    pub status_message: String,
    /// Sametime user name
    #[serde(rename = "username")]
    pub user_name: String,
}

impl StatusRecord {
    /// Decode a response body, keeping only the logged fields
    ///
    /// Absent, mistyped, or undecodable fields fall back to zero values.
    /// Invalid UTF-8 and unpaired surrogate escapes become U+FFFD.
    /// Keys match exactly first, then ignoring ASCII case.
    /// Both timestamps are replaced with `now`.
    pub fn extract(body: &[u8], now: DateTime<Local>) -> Self {
        let lossy = String::from_utf8_lossy(body);
        let json = replace_lone_surrogates(&lossy);
        let value: Value = serde_json::from_str(&json).unwrap_or(Value::Null);
        let fields = value.as_object();

        let field = |key: &str| fields.and_then(|map| lookup(map, key));
        let text = |key: &str| {
            field(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            unix_timestamp: now.timestamp_millis(),
            display_name: text("displayName"),
            status: field("status").and_then(Value::as_i64).unwrap_or_default(),
            status_message: text("statusMessage"),
            user_name: text("username"),
        }
    }

    /// Encode as a single line of JSON, without the trailing newline
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn lookup<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).or_else(|| {
        map.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

/// Rewrite `\uXXXX` escapes naming an unpaired UTF-16 surrogate to `\ufffd`
fn replace_lone_surrogates(text: &str) -> Cow<'_, str> {
    const HIGH: std::ops::Range<u16> = 0xD800..0xDC00;
    const LOW: std::ops::Range<u16> = 0xDC00..0xE000;

    let bytes = text.as_bytes();
    let mut out = String::new();
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' {
            i += 1;
            continue;
        }
        let Some(unit) = utf16_escape(bytes, i) else {
            // Some other escape, including an escaped backslash
            i += 2;
            continue;
        };

        let paired = HIGH.contains(&unit)
            && utf16_escape(bytes, i + 6).is_some_and(|next| LOW.contains(&next));
        if paired {
            i += 12;
            continue;
        }
        if !HIGH.contains(&unit) && !LOW.contains(&unit) {
            i += 6;
            continue;
        }

        out.push_str(&text[copied..i]);
        out.push_str("\\ufffd");
        i += 6;
        copied = i;
    }

    if copied == 0 {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[copied..]);
    Cow::Owned(out)
}

/// Code unit of a `\uXXXX` escape starting at `at`
fn utf16_escape(bytes: &[u8], at: usize) -> Option<u16> {
    let escape = bytes.get(at..at + 6)?;
    if !escape.starts_with(b"\\u") || !escape[2..].iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let hex = std::str::from_utf8(&escape[2..]).ok()?;
    u16::from_str_radix(hex, 16).ok()
}
