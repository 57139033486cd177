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

//! Console forwarding to the `log` crate.
//! Records use the `"console"` target.

use crate::console_api::{Capability, Console, DirOptions, DEFAULT_LABEL};
use crate::console_state::ConsoleState;
use crate::console_value::ConsoleValue;
use crate::error_code::ErrorCode;
use crate::json_format::{lenient_json, render_table, DEFAULT_INSPECT_DEPTH};
use log::Level;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Target of emitted log records.
pub const LOG_CONSOLE_TARGET: &str = "console";

impl From<PoisonError<MutexGuard<'_, ConsoleState>>> for ErrorCode {
    fn from(_cause: PoisonError<MutexGuard<'_, ConsoleState>>) -> Self {
        ErrorCode::MutexLockFailed
    }
}

/// Render a single argument: strings raw, other values as compact JSON.
/// `undefined` and non-finite numbers keep their terminal spelling at any depth.
fn render_arg(value: &ConsoleValue) -> String {
    match value {
        ConsoleValue::String(s) => s.clone(),
        other => lenient_json(other),
    }
}

fn render_args(data: &[ConsoleValue]) -> String {
    data.iter().map(render_arg).collect::<Vec<_>>().join(" ")
}

/// Console emitting `log` records.
#[derive(Default)]
pub struct LogConsole {
    state: Mutex<ConsoleState>,
}

impl LogConsole {
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(&self, level: Level, message: &str) -> Result<(), ErrorCode> {
        let state = self.state.lock()?;
        let message = state.indent(message);
        log::log!(target: LOG_CONSOLE_TARGET, level, "{message}");
        Ok(())
    }

    fn start_group(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        if let Some(label) = label {
            self.emit(Level::Info, label)?;
        }
        self.state.lock()?.group_start();
        Ok(())
    }

    /// Emit `Ok` line at info level, `Err` warning at warn level.
    fn emit_outcome(&self, outcome: Result<String, String>) -> Result<(), ErrorCode> {
        match outcome {
            Ok(line) => self.emit(Level::Info, &line),
            Err(warning) => self.emit(Level::Warn, &warning),
        }
    }
}

impl Console for LogConsole {
    fn assert(&self, condition: bool, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        if condition {
            return Ok(());
        }
        if data.is_empty() {
            self.emit(Level::Error, "Assertion failed")
        } else {
            self.emit(
                Level::Error,
                &format!("Assertion failed: {}", render_args(data)),
            )
        }
    }

    fn clear(&self) -> Result<(), ErrorCode> {
        // Log records cannot be retracted.
        Ok(())
    }

    fn count(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        let line = self.state.lock()?.count(label);
        self.emit(Level::Info, &line)
    }

    fn count_reset(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        let outcome = self.state.lock()?.count_reset(label);
        match outcome {
            Ok(()) => Ok(()),
            Err(warning) => self.emit(Level::Warn, &warning),
        }
    }

    fn debug(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.emit(Level::Debug, &render_args(data))
    }

    fn dir(&self, item: &ConsoleValue, options: Option<&DirOptions>) -> Result<(), ErrorCode> {
        let depth = options.map_or(Some(DEFAULT_INSPECT_DEPTH), |options| options.depth);
        self.emit(Level::Info, &item.inspect(depth))
    }

    fn dirxml(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.emit(Level::Info, &render_args(data))
    }

    fn error(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.emit(Level::Error, &render_args(data))
    }

    fn group(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        self.start_group(label)
    }

    fn group_collapsed(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        self.start_group(label)
    }

    fn group_end(&self) -> Result<(), ErrorCode> {
        self.state.lock()?.group_end();
        Ok(())
    }

    fn info(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.emit(Level::Info, &render_args(data))
    }

    fn log(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.emit(Level::Info, &render_args(data))
    }

    fn table(
        &self,
        tabular_data: &ConsoleValue,
        columns: Option<&[&str]>,
    ) -> Result<(), ErrorCode> {
        match render_table(tabular_data, columns) {
            Some(table) => self.emit(Level::Info, &table),
            None => self.emit(Level::Info, &render_arg(tabular_data)),
        }
    }

    fn time(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        let outcome = self.state.lock()?.time(label);
        match outcome {
            Ok(()) => Ok(()),
            Err(warning) => self.emit(Level::Warn, &warning),
        }
    }

    fn time_end(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        let outcome = self.state.lock()?.time_end(label);
        self.emit_outcome(outcome)
    }

    fn time_log(&self, label: Option<&str>, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        let outcome = self.state.lock()?.time_log(label, data);
        self.emit_outcome(outcome)
    }

    fn trace(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        if data.is_empty() {
            self.emit(Level::Trace, "Trace")
        } else {
            self.emit(Level::Trace, &format!("Trace: {}", render_args(data)))
        }
    }

    fn warn(&self, data: &[ConsoleValue]) -> Result<(), ErrorCode> {
        self.emit(Level::Warn, &render_args(data))
    }

    fn supports(&self, capability: Capability) -> bool {
        capability == Capability::TimeStamp
    }

    fn time_stamp(&self, label: Option<&str>) -> Result<(), ErrorCode> {
        let label = label.unwrap_or(DEFAULT_LABEL);
        self.emit(Level::Trace, &format!("timeStamp: {label}"))
    }
}
