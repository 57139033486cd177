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

use crate::console_value::ConsoleValue;
use crate::error_code::ErrorCode;

/// Label used when a counter, timer or profile is not named.
pub const DEFAULT_LABEL: &str = "default";

/// Non-standard console operations that a console may not provide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `profile`
    Profile,

    /// `profileEnd`
    ProfileEnd,

    /// `timeStamp`
    TimeStamp,
}

impl Capability {
    /// Console method name.
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Profile => "profile",
            Capability::ProfileEnd => "profileEnd",
            Capability::TimeStamp => "timeStamp",
        }
    }
}

/// Options for `dir`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirOptions {
    /// Max nesting depth to render, `None` for unlimited.
    pub depth: Option<u32>,

    /// Request non-enumerable properties, where the console has such a notion.
    pub show_hidden: bool,
}

impl Default for DirOptions {
    fn default() -> Self {
        Self {
            depth: Some(crate::json_format::DEFAULT_INSPECT_DEPTH),
            show_hidden: false,
        }
    }
}

/// Console interface.
///
/// Implemented by anything able to produce console output.
/// Gate forwards to it without altering arguments.
pub trait Console: Send + Sync {
    /// Write `data` as an error if `condition` is false.
    fn assert(&self, condition: bool, data: &[ConsoleValue]) -> Result<(), ErrorCode>;

    /// Clear the console.
    fn clear(&self) -> Result<(), ErrorCode>;

    /// Log number of times `count` was called with this label.
    fn count(&self, label: Option<&str>) -> Result<(), ErrorCode>;

    /// Reset counter for this label.
    fn count_reset(&self, label: Option<&str>) -> Result<(), ErrorCode>;

    /// Debug-level message.
    fn debug(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode>;

    /// Property listing of a single value.
    fn dir(&self, item: &ConsoleValue, options: Option<&DirOptions>) -> Result<(), ErrorCode>;

    /// Element tree of a value, `log` equivalent outside of browsers.
    fn dirxml(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode>;

    /// Error-level message.
    fn error(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode>;

    /// Start nested group.
    fn group(&self, label: Option<&str>) -> Result<(), ErrorCode>;

    /// Start nested group, collapsed where supported.
    fn group_collapsed(&self, label: Option<&str>) -> Result<(), ErrorCode>;

    /// Exit current group.
    fn group_end(&self) -> Result<(), ErrorCode>;

    /// Info-level message.
    fn info(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode>;

    /// Default-level message.
    fn log(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode>;

    /// Tabular data, restricted to `columns` if given.
    fn table(&self, tabular_data: &ConsoleValue, columns: Option<&[&str]>)
        -> Result<(), ErrorCode>;

    /// Start timer.
    fn time(&self, label: Option<&str>) -> Result<(), ErrorCode>;

    /// Stop timer and log elapsed time.
    fn time_end(&self, label: Option<&str>) -> Result<(), ErrorCode>;

    /// Log elapsed time of running timer.
    fn time_log(&self, label: Option<&str>, data: &[ConsoleValue]) -> Result<(), ErrorCode>;

    /// Message with stack trace.
    fn trace(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode>;

    /// Warning-level message.
    fn warn(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode>;

    /// Check whether optional operation is provided.
    /// Queried on every guarded call.
    fn supports(&self, _capability: Capability) -> bool {
        false
    }

    /// Start profile recording.
    fn profile(&self, _name: Option<&str>) -> Result<(), ErrorCode> {
        Ok(())
    }

    /// Stop profile recording.
    fn profile_end(&self, _name: Option<&str>) -> Result<(), ErrorCode> {
        Ok(())
    }

    /// Add marker to profiler timeline.
    fn time_stamp(&self, _label: Option<&str>) -> Result<(), ErrorCode> {
        Ok(())
    }
}
