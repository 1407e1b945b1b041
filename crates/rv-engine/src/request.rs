//! Typed generation requests and their outputs

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::charset::CharsetPattern;
use crate::color::ColorFormat;

/// One generation call, fully validated by the front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GenerationRequest {
    Integers {
        min: i64,
        max: i64,
        #[serde(default)]
        exclude: BTreeSet<i64>,
        count: usize,
    },
    Floats {
        min: f64,
        max: f64,
        decimals: u32,
        count: usize,
    },
    Colors {
        #[serde(default)]
        format: ColorFormat,
        count: usize,
    },
    Strings {
        length: usize,
        #[serde(default)]
        pattern: CharsetPattern,
        #[serde(default)]
        exclude_chars: String,
        count: usize,
    },
    Template {
        template: String,
        count: usize,
    },
    List {
        items: Vec<String>,
        count: usize,
        #[serde(default)]
        unique: bool,
    },
}

impl GenerationRequest {
    pub fn integers(min: i64, max: i64, exclude: BTreeSet<i64>, count: usize) -> Self {
        Self::Integers {
            min,
            max,
            exclude,
            count,
        }
    }

    pub fn floats(min: f64, max: f64, decimals: u32, count: usize) -> Self {
        Self::Floats {
            min,
            max,
            decimals,
            count,
        }
    }

    pub fn colors(format: ColorFormat, count: usize) -> Self {
        Self::Colors { format, count }
    }

    pub fn strings(
        length: usize,
        pattern: CharsetPattern,
        exclude_chars: impl Into<String>,
        count: usize,
    ) -> Self {
        Self::Strings {
            length,
            pattern,
            exclude_chars: exclude_chars.into(),
            count,
        }
    }

    pub fn template(template: impl Into<String>, count: usize) -> Self {
        Self::Template {
            template: template.into(),
            count,
        }
    }

    pub fn list(items: Vec<String>, count: usize, unique: bool) -> Self {
        Self::List {
            items,
            count,
            unique,
        }
    }

    /// Mode name, as used on the command line
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Integers { .. } => "number",
            Self::Floats { .. } => "float",
            Self::Colors { .. } => "color",
            Self::Strings { .. } => "string",
            Self::Template { .. } => "custom",
            Self::List { .. } => "list",
        }
    }

    /// Requested number of values
    pub fn count(&self) -> usize {
        match self {
            Self::Integers { count, .. }
            | Self::Floats { count, .. }
            | Self::Colors { count, .. }
            | Self::Strings { count, .. }
            | Self::Template { count, .. }
            | Self::List { count, .. } => *count,
        }
    }
}

/// Values produced by one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GenerationOutput {
    Integers(Vec<i64>),
    Floats(Vec<f64>),
    Text(Vec<String>),
}

impl GenerationOutput {
    pub fn len(&self) -> usize {
        match self {
            Self::Integers(v) => v.len(),
            Self::Floats(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One rendered line per value.
    ///
    /// Floats use the shortest round-trip form and always keep a fractional
    /// part (`3.0`, `0.25`).
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Integers(v) => v.iter().map(ToString::to_string).collect(),
            Self::Floats(v) => v.iter().map(|x| format!("{x:?}")).collect(),
            Self::Text(v) => v.clone(),
        }
    }
}
