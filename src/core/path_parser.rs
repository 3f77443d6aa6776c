//! Splits a path into directory, base name and extension.
//!
//! Two strategies are provided. [`parse_by_substring`] scans for the last
//! separators and is total. [`parse_by_pattern`] matches the whole path
//! against `(.+)/(.+)\.(.+)` and returns `None` for anything that lacks a
//! non-empty directory, name or extension. The two agree on
//! `<dir>/<name>.<ext>` and differ elsewhere.

use crate::config::PathOptions;
use crate::domain::model::ParsedPath;
use crate::domain::ports::PathStrategy;
use crate::utils::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;

static DEFAULT_PATTERN: Lazy<PathPattern> = Lazy::new(|| PathPattern {
    regex: Regex::new(r"^(.+)/(.+)\.(.+)$").unwrap(),
});

pub fn parse_by_substring(path: &str) -> ParsedPath {
    parse_by_substring_with(path, &PathOptions::default())
}

pub fn parse_by_substring_with(path: &str, options: &PathOptions) -> ParsedPath {
    let (directory, full_name) = path
        .rsplit_once(options.directory_separator)
        .unwrap_or(("", path));
    let (file_name, extension) = full_name
        .rsplit_once(options.extension_separator)
        .unwrap_or((full_name, ""));

    ParsedPath::new(directory, file_name, extension)
}

pub fn parse_by_pattern(path: &str) -> Option<ParsedPath> {
    DEFAULT_PATTERN.parse(path)
}

/// Compiled `(.+)<dir-sep>(.+)<ext-sep>(.+)` for a given set of separators.
#[derive(Debug, Clone)]
pub struct PathPattern {
    regex: Regex,
}

impl PathPattern {
    pub fn new(options: &PathOptions) -> Result<Self> {
        let pattern = format!(
            r"^(.+){}(.+){}(.+)$",
            regex::escape(&options.directory_separator.to_string()),
            regex::escape(&options.extension_separator.to_string()),
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn parse(&self, path: &str) -> Option<ParsedPath> {
        let Some(caps) = self.regex.captures(path) else {
            tracing::trace!(path, pattern = self.as_str(), "path does not match pattern");
            return None;
        };

        Some(ParsedPath::new(&caps[1], &caps[2], &caps[3]))
    }
}

impl Default for PathPattern {
    fn default() -> Self {
        (*DEFAULT_PATTERN).clone()
    }
}

impl ParsedPath {
    /// Rebuilds the path, leaving out separators whose part is empty.
    pub fn to_path_string(&self, options: &PathOptions) -> String {
        let mut out = String::with_capacity(
            self.directory.len() + self.file_name.len() + self.extension.len() + 2,
        );
        if !self.directory.is_empty() {
            out.push_str(&self.directory);
            out.push(options.directory_separator);
        }
        out.push_str(&self.file_name);
        if !self.extension.is_empty() {
            out.push(options.extension_separator);
            out.push_str(&self.extension);
        }
        out
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubstringStrategy {
    options: PathOptions,
}

impl SubstringStrategy {
    pub fn new(options: PathOptions) -> Self {
        Self { options }
    }
}

impl PathStrategy for SubstringStrategy {
    fn name(&self) -> &'static str {
        "substring"
    }

    fn parse(&self, path: &str) -> Option<ParsedPath> {
        Some(parse_by_substring_with(path, &self.options))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatternStrategy {
    pattern: PathPattern,
}

impl PatternStrategy {
    pub fn new(options: &PathOptions) -> Result<Self> {
        Ok(Self {
            pattern: PathPattern::new(options)?,
        })
    }
}

impl PathStrategy for PatternStrategy {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn parse(&self, path: &str) -> Option<ParsedPath> {
        self.pattern.parse(path)
    }
}
