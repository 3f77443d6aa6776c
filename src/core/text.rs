use crate::config::JoinOptions;
use crate::utils::error::Result;
use regex::Regex;
use std::fmt::Display;

/// Joins `items` using the separator, prefix and postfix from `options`.
pub fn join_to_string<I>(items: I, options: &JoinOptions) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut result = String::from(options.prefix.as_str());
    for (index, element) in items.into_iter().enumerate() {
        if index > 0 {
            result.push_str(&options.separator);
        }
        result.push_str(&element.to_string());
    }
    result.push_str(&options.postfix);
    result
}

pub fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}

/// Replaces the final character. Returns `false` if `s` is empty.
pub fn set_last_char(s: &mut String, value: char) -> bool {
    if s.pop().is_none() {
        return false;
    }
    s.push(value);
    true
}

/// Splits on every occurrence of any literal delimiter.
///
/// At each position delimiters are tried in the given order; empty delimiters are ignored.
pub fn split_on_any(input: &str, delimiters: &[&str]) -> Vec<String> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < input.len() {
        let rest = &input[i..];
        match delimiters
            .iter()
            .find(|d| !d.is_empty() && rest.starts_with(**d))
        {
            Some(delimiter) => {
                parts.push(input[start..i].to_string());
                i += delimiter.len();
                start = i;
            }
            None => {
                i += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    parts.push(input[start..].to_string());
    parts
}

pub fn split_by_pattern(input: &str, pattern: &str) -> Result<Vec<String>> {
    let re = Regex::new(pattern)?;
    Ok(re.split(input).map(str::to_string).collect())
}

/// Strips leading whitespace and `marker` from each line of a multi-line literal.
///
/// A blank first or last line is dropped once. Lines without the marker are kept as-is.
pub fn trim_margin(input: &str, marker: &str) -> String {
    // `lines()` 會吞掉結尾的空行，因此自行切分
    let lines: Vec<&str> = input
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let mut body: &[&str] = &lines;

    if let Some((first, rest)) = body.split_first() {
        if first.trim().is_empty() {
            body = rest;
        }
    }
    if let Some((last, rest)) = body.split_last() {
        if last.trim().is_empty() {
            body = rest;
        }
    }

    body.iter()
        .map(|&line| {
            let trimmed = line.trim_start();
            match trimmed.strip_prefix(marker) {
                Some(stripped) if !marker.is_empty() => stripped,
                _ => line,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
