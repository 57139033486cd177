// *******************************************************************************
// Copyright (c) 2026 Contributors to the Eclipse Foundation
//
// See the NOTICE file(s) distributed with this work for additional
// information regarding copyright ownership.
//
// This program and the accompanying materials are made available under the
// terms of the Apache License Version 2.0 which is available at
// <https://www.apache.org/licenses/LICENSE-2.0>
//
// SPDX-License-Identifier: Apache-2.0
// *******************************************************************************

//! Value rendering.
//! - `ConsoleValue` <-> `tinyjson::JsonValue` conversion.
//! - Compact JSON output for structured sinks.
//! - Inspect-style output for terminals.

use crate::console_value::{ConsoleMap, ConsoleValue};
use crate::error_code::ErrorCode;
use crate::log::error;
use tinyjson::{JsonGenerateError, JsonParseError, JsonValue};

/// Default nesting depth used by inspect rendering.
pub const DEFAULT_INSPECT_DEPTH: u32 = 2;

/// JsonValue -> ConsoleValue conversion.
impl From<JsonValue> for ConsoleValue {
    fn from(val: JsonValue) -> ConsoleValue {
        match val {
            JsonValue::Number(n) => ConsoleValue::Number(n),
            JsonValue::Boolean(b) => ConsoleValue::Boolean(b),
            JsonValue::String(s) => ConsoleValue::String(s),
            JsonValue::Null => ConsoleValue::Null,
            JsonValue::Array(arr) => {
                ConsoleValue::Array(arr.into_iter().map(ConsoleValue::from).collect())
            }
            JsonValue::Object(obj) => ConsoleValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, ConsoleValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// ConsoleValue -> JsonValue conversion.
/// JSON has no `undefined`, it is stored as `null`.
impl From<ConsoleValue> for JsonValue {
    fn from(val: ConsoleValue) -> JsonValue {
        match val {
            ConsoleValue::Undefined | ConsoleValue::Null => JsonValue::Null,
            ConsoleValue::Boolean(b) => JsonValue::Boolean(b),
            ConsoleValue::Number(n) => JsonValue::Number(n),
            ConsoleValue::String(s) => JsonValue::String(s),
            ConsoleValue::Array(arr) => {
                JsonValue::Array(arr.into_iter().map(JsonValue::from).collect())
            }
            ConsoleValue::Object(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// tinyjson::JsonParseError -> ErrorCode::JsonParserError
impl From<JsonParseError> for ErrorCode {
    fn from(cause: JsonParseError) -> Self {
        error!(
            "JSON parser error: line = {}, column = {}",
            cause.line(),
            cause.column()
        );
        ErrorCode::JsonParserError
    }
}

/// tinyjson::JsonGenerateError -> ErrorCode::JsonGeneratorError
impl From<JsonGenerateError> for ErrorCode {
    fn from(cause: JsonGenerateError) -> Self {
        error!("JSON generator error: msg = {}", cause.message());
        ErrorCode::JsonGeneratorError
    }
}

impl ConsoleValue {
    /// Parse JSON text into `ConsoleValue`.
    pub fn parse_json(text: &str) -> Result<ConsoleValue, ErrorCode> {
        let json: JsonValue = text.parse()?;
        Ok(ConsoleValue::from(json))
    }

    /// Render value as compact JSON.
    ///
    /// # Return Values
    ///   * Ok: JSON text
    ///   * `ErrorCode::JsonGeneratorError`: value contains a non-finite number
    pub fn to_json_string(&self) -> Result<String, ErrorCode> {
        let json = JsonValue::from(self.clone());
        Ok(json.stringify()?)
    }

    /// Render value the way `dir` shows it: strings quoted, nesting limited by `depth`.
    /// `None` depth means unlimited.
    pub fn inspect(&self, depth: Option<u32>) -> String {
        let mut out = String::new();
        inspect_into(&mut out, self, 0, depth);
        out
    }

    /// Render value as a top-level log argument: strings raw, everything else inspected.
    pub fn display(&self) -> String {
        match self {
            ConsoleValue::String(s) => s.clone(),
            other => other.inspect(Some(DEFAULT_INSPECT_DEPTH)),
        }
    }
}

/// Join log arguments with single spaces.
pub fn format_args_line(data: &[ConsoleValue]) -> String {
    data.iter()
        .map(ConsoleValue::display)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render number following JS number-to-string rules.
/// Exponent form is used below 1e-6 and from 1e21 on, e.g. `1e-7`, `1e+21`.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n != 0.0 && (n.abs() >= 1e21 || n.abs() < 1e-6) {
        // `{:e}` yields shortest mantissa, e.g. `1.5e-7` or `1e21`.
        let formatted = format!("{n:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else {
        // Shortest round-trip form, integral values without fraction.
        format!("{n}")
    }
}

/// Quote string as JSON, tinyjson only fails on non-finite numbers.
fn json_string_into(out: &mut String, s: &str) {
    match JsonValue::String(s.to_string()).stringify() {
        Ok(quoted) => out.push_str(&quoted),
        Err(_) => out.push_str(&format!("{s:?}")),
    }
}

/// Compact JSON, except `undefined` and non-finite numbers which JSON cannot hold.
/// These render as in the terminal at any depth, so rendering never fails.
pub(crate) fn lenient_json(value: &ConsoleValue) -> String {
    let mut out = String::new();
    lenient_json_into(&mut out, value);
    out
}

fn lenient_json_into(out: &mut String, value: &ConsoleValue) {
    match value {
        ConsoleValue::Undefined => out.push_str("undefined"),
        ConsoleValue::Null => out.push_str("null"),
        ConsoleValue::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        ConsoleValue::Number(n) => out.push_str(&format_number(*n)),
        ConsoleValue::String(s) => json_string_into(out, s),
        ConsoleValue::Array(arr) => {
            out.push('[');
            for (index, item) in arr.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                lenient_json_into(out, item);
            }
            out.push(']');
        }
        ConsoleValue::Object(map) => {
            out.push('{');
            for (index, (key, item)) in map.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                json_string_into(out, key);
                out.push(':');
                lenient_json_into(out, item);
            }
            out.push('}');
        }
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn quote_into(out: &mut String, s: &str) {
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            _ => out.push(c),
        }
    }
    out.push('\'');
}

// Containers nested deeper than `depth` levels below the top are elided.
fn inspect_into(out: &mut String, value: &ConsoleValue, level: u32, depth: Option<u32>) {
    let elided = depth.is_some_and(|max| level > max);
    match value {
        ConsoleValue::Undefined => out.push_str("undefined"),
        ConsoleValue::Null => out.push_str("null"),
        ConsoleValue::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        ConsoleValue::Number(n) => out.push_str(&format_number(*n)),
        ConsoleValue::String(s) => quote_into(out, s),
        ConsoleValue::Array(arr) => {
            if arr.is_empty() {
                out.push_str("[]");
            } else if elided {
                out.push_str("[Array]");
            } else {
                out.push_str("[ ");
                for (index, item) in arr.iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    inspect_into(out, item, level + 1, depth);
                }
                out.push_str(" ]");
            }
        }
        ConsoleValue::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
            } else if elided {
                out.push_str("[Object]");
            } else {
                out.push_str("{ ");
                inspect_map_into(out, map, level + 1, depth);
                out.push_str(" }");
            }
        }
    }
}

fn inspect_map_into(out: &mut String, map: &ConsoleMap, level: u32, depth: Option<u32>) {
    for (index, (key, item)) in map.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        if is_identifier(key) {
            out.push_str(key);
        } else {
            quote_into(out, key);
        }
        out.push_str(": ");
        inspect_into(out, item, level, depth);
    }
}

/// Header of the row key column in tables.
const INDEX_HEADER: &str = "(index)";

/// Header of the column holding primitive rows in tables.
const VALUES_HEADER: &str = "Values";

/// Render array or object as a box-drawing table.
/// Returns `None` for primitive data, which has no tabular form.
pub fn render_table(tabular_data: &ConsoleValue, columns: Option<&[&str]>) -> Option<String> {
    let rows: Vec<(String, &ConsoleValue)> = match tabular_data {
        ConsoleValue::Array(arr) => arr
            .iter()
            .enumerate()
            .map(|(index, row)| (index.to_string(), row))
            .collect(),
        ConsoleValue::Object(map) => map.iter().map(|(key, row)| (key.clone(), row)).collect(),
        _ => return None,
    };

    // Column keys in order of first appearance, unless restricted by caller.
    let keys: Vec<String> = match columns {
        Some(columns) => columns.iter().map(|c| c.to_string()).collect(),
        None => {
            let mut keys: Vec<String> = Vec::new();
            for (_, row) in &rows {
                for key in row_keys(row) {
                    if !keys.contains(&key) {
                        keys.push(key);
                    }
                }
            }
            keys
        }
    };
    let has_values = rows.iter().any(|(_, row)| row.is_primitive());

    let mut header = vec![INDEX_HEADER.to_string()];
    header.extend(keys.iter().cloned());
    if has_values {
        header.push(VALUES_HEADER.to_string());
    }

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|(index, row)| {
            let mut line = vec![index.clone()];
            for key in &keys {
                line.push(row_cell(row, key).map(table_cell).unwrap_or_default());
            }
            if has_values {
                line.push(if row.is_primitive() {
                    table_cell(row)
                } else {
                    String::new()
                });
            }
            line
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|column| {
            body.iter()
                .map(|line| line[column].chars().count())
                .chain(core::iter::once(header[column].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    table_border(&mut out, &widths, '┌', '┬', '┐');
    table_line(&mut out, &widths, &header);
    table_border(&mut out, &widths, '├', '┼', '┤');
    for line in &body {
        table_line(&mut out, &widths, line);
    }
    table_border(&mut out, &widths, '└', '┴', '┘');
    // Drop trailing newline, the console adds its own.
    out.pop();
    Some(out)
}

fn row_keys(row: &ConsoleValue) -> Vec<String> {
    match row {
        ConsoleValue::Array(arr) => (0..arr.len()).map(|i| i.to_string()).collect(),
        ConsoleValue::Object(map) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}

fn row_cell<'a>(row: &'a ConsoleValue, key: &str) -> Option<&'a ConsoleValue> {
    match row {
        ConsoleValue::Array(arr) => key.parse::<usize>().ok().and_then(|i| arr.get(i)),
        ConsoleValue::Object(map) => map.get(key),
        _ => None,
    }
}

fn table_cell(value: &ConsoleValue) -> String {
    value.inspect(Some(0))
}

fn table_border(out: &mut String, widths: &[usize], left: char, middle: char, right: char) {
    out.push(left);
    for (index, width) in widths.iter().enumerate() {
        if index > 0 {
            out.push(middle);
        }
        out.push_str(&"─".repeat(width + 2));
    }
    out.push(right);
    out.push('\n');
}

fn table_line(out: &mut String, widths: &[usize], cells: &[String]) {
    out.push('│');
    for (cell, width) in cells.iter().zip(widths) {
        let padding = width - cell.chars().count();
        out.push(' ');
        out.push_str(cell);
        out.push_str(&" ".repeat(padding + 1));
        out.push('│');
    }
    out.push('\n');
}
