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


//! Consoles selectable by name, e.g. from `{"console": "log"}` parameters.

use crate::console_api::Console;
use crate::console_value::{ConsoleMap, ConsoleValue};
use crate::error_code::ErrorCode;
use crate::log::debug;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

/// Parameter key holding the console name.
pub const CONSOLE_PARAMETER: &str = "console";

/// Constructor of a named console.
pub type ConsoleFactoryFn = fn() -> Arc<dyn Console>;

type ConsoleFactories = HashMap<String, ConsoleFactoryFn>;

/// Consoles shipped with the crate: `terminal`, plus `log` with `logging` feature.
fn builtin_consoles() -> ConsoleFactories {
    let mut factories: ConsoleFactories = HashMap::new();
    factories.insert("terminal".to_string(), || {
        Arc::new(crate::terminal_console::TerminalConsole::stdio())
    });
    #[cfg(feature = "logging")]
    factories.insert("log".to_string(), || {
        Arc::new(crate::log_console::LogConsole::new())
    });
    factories
}

/// Process-wide console names. Names are never removed.
static CONSOLE_FACTORIES: LazyLock<Mutex<ConsoleFactories>> =
    LazyLock::new(|| Mutex::new(builtin_consoles()));

impl From<PoisonError<MutexGuard<'_, ConsoleFactories>>> for ErrorCode {
    fn from(_cause: PoisonError<MutexGuard<'_, ConsoleFactories>>) -> Self {
        ErrorCode::MutexLockFailed
    }
}

/// Lookup of consoles by name.
pub struct ConsoleRegistry;

impl ConsoleRegistry {
    /// Construct a fresh console registered under `name`.
    ///
    /// # Return Values
    ///   * Ok: New console instance
    ///   * `ErrorCode::UnknownConsole`: No console registered under `name`
    pub fn from_name(name: &str) -> Result<Arc<dyn Console>, ErrorCode> {
        let factory = *CONSOLE_FACTORIES
            .lock()?
            .get(name)
            .ok_or(ErrorCode::UnknownConsole)?;
        // Factory runs outside the lock, it may itself consult the registry.
        Ok(factory())
    }

    /// Construct the console named by the `console` parameter.
    ///
    /// # Return Values
    ///   * Ok: New console instance
    ///   * `ErrorCode::KeyNotFound`: `console` parameter missing
    ///   * `ErrorCode::InvalidParameters`: `console` parameter is not a string
    ///   * `ErrorCode::UnknownConsole`: No console registered under given name
    pub fn from_parameters(parameters: &ConsoleMap) -> Result<Arc<dyn Console>, ErrorCode> {
        match parameters.get(CONSOLE_PARAMETER) {
            Some(ConsoleValue::String(name)) => Self::from_name(name),
            Some(_) => Err(ErrorCode::InvalidParameters),
            None => Err(ErrorCode::KeyNotFound),
        }
    }

    /// Make a console available under `name`.
    /// Built-in names and earlier registrations cannot be replaced.
    pub fn register(name: &str, factory: ConsoleFactoryFn) -> Result<(), ErrorCode> {
        let mut factories = CONSOLE_FACTORIES.lock()?;
        if factories.contains_key(name) {
            return Err(ErrorCode::ConsoleAlreadyRegistered);
        }
        factories.insert(name.to_string(), factory);
        debug!("console registered: {name}");
        Ok(())
    }
}
