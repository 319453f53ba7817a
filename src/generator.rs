//! Settings document loading and code generation.
//!
//! A document is read once into [`UserSettings`], then every entry of
//! [`CODE_TEMPLATES`] is resolved (document value, else table default, else
//! `0`) and rendered into one line of [`GeneratedCode`].

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use log::{debug, trace};
use serde_json::{Map, Value};

use crate::error::CodegenError;
use crate::settings::{self, CODE_TEMPLATES};

// ---------------------------------------------------------------------------
// User settings
// ---------------------------------------------------------------------------

/// Values supplied by a settings document.
///
/// Only known settings are kept; anything else in the document is ignored.
/// Values are kept as written, whatever their JSON type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSettings {
    values: HashMap<String, Value>,
    ignored: Vec<String>,
}

impl UserSettings {
    /// Read and parse the document at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CodegenError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CodegenError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_reader(BufReader::new(file))?;
        debug!(
            "loaded {} with {} known setting(s)",
            path.display(),
            settings.values.len()
        );
        Ok(settings)
    }

    /// Parse a document from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CodegenError> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    /// Build from an already parsed JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, CodegenError> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(CodegenError::NotAnObject {
                found: json_type(&other),
            }),
        }
    }

    fn from_map(map: Map<String, Value>) -> Self {
        let mut settings = Self::default();
        for (key, value) in map {
            if settings::is_known(&key) {
                settings.values.insert(key, value);
            } else {
                settings.ignored.push(key);
            }
        }
        if !settings.ignored.is_empty() {
            debug!("ignoring unknown setting(s): {}", settings.ignored.join(", "));
        }
        settings
    }

    /// The document's value for `name`, if it supplied one.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Keys in the document that do not name a known setting.
    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored
    }
}

impl FromStr for UserSettings {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(value)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Supplied by the settings document.
    User,
    /// Taken from [`settings::DEFAULT_SETTINGS`].
    Default,
    /// Neither had it; `0` was used.
    Fallback,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "document"),
            Self::Default => write!(f, "default"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// A setting value together with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub value: Value,
    pub source: ValueSource,
}

/// Resolve `name`: document value, else table default, else `0`.
pub fn resolve(name: &str, user: &UserSettings) -> Resolved {
    if let Some(n) = user.get(name) {
        return Resolved {
            value: n.clone(),
            source: ValueSource::User,
        };
    }
    match settings::default_for(name) {
        Some(d) => Resolved {
            value: Value::from(d),
            source: ValueSource::Default,
        },
        None => Resolved {
            value: Value::from(0),
            source: ValueSource::Fallback,
        },
    }
}

// ---------------------------------------------------------------------------
// Generated code
// ---------------------------------------------------------------------------

/// Generated statements, one per known setting, in template order.
///
/// `Display` joins the lines with `\n` and adds no trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    lines: Vec<String>,
}

impl GeneratedCode {
    /// The generated statements, in template order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of statements; always `CODE_TEMPLATES.len()`.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether there are no statements. Only possible with an empty template table.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line generated for setting `name`.
    pub fn line_for(&self, name: &str) -> Option<&str> {
        CODE_TEMPLATES
            .iter()
            .position(|t| t.name == name)
            .and_then(|i| self.lines.get(i))
            .map(String::as_str)
    }
}

impl fmt::Display for GeneratedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Generate code for already loaded settings. Never fails.
pub fn generate_from_settings(user: &UserSettings) -> GeneratedCode {
    let lines = CODE_TEMPLATES
        .iter()
        .map(|t| {
            let resolved = resolve(t.name, user);
            trace!("{} = {} ({})", t.name, resolved.value, resolved.source);
            settings::render(t.template, &resolved.value)
        })
        .collect();
    GeneratedCode { lines }
}

/// Read the settings document at `path` and generate code for it.
pub fn generate<P: AsRef<Path>>(path: P) -> Result<GeneratedCode, CodegenError> {
    let user = UserSettings::from_path(path)?;
    Ok(generate_from_settings(&user))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
