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
use crate::console_api::Console;
use crate::console_registry::{ConsoleRegistry, CONSOLE_PARAMETER};
use crate::console_value::{ConsoleMap, ConsoleValue};
use crate::error_code::ErrorCode;
use crate::gate::Gate;
use crate::log::{debug, warn};
use std::sync::Arc;

/// Parameter key holding the initial `enabled` flag.
pub const ENABLED_PARAMETER: &str = "enabled";

/// Gate builder.
pub struct GateBuilder {
    /// Initial `enabled` flag.
    enabled: Option<bool>,

    /// Console.
    console: Option<Arc<dyn Console>>,

    /// Parameters, used for values not set explicitly.
    parameters: Option<ConsoleMap>,
}

impl Default for GateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GateBuilder {
    /// Create a builder for a gate.
    ///
    /// All settings use default values until changed via the builder API:
    /// gate is disabled and uses the `terminal` console.
    ///
    /// # Return Values
    ///   * GateBuilder instance
    pub fn new() -> Self {
        Self {
            enabled: None,
            console: None,
            parameters: None,
        }
    }

    /// Configure initial `enabled` flag.
    ///
    /// # Parameters
    ///   * `enabled`: forwarding enabled (default: `false`)
    ///
    /// # Return Values
    ///   * GateBuilder instance
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Set console.
    /// Takes precedence over `console` parameter.
    ///
    /// # Parameters
    ///   * `console`: console receiving forwarded calls.
    ///
    /// # Return Values
    ///   * GateBuilder instance
    pub fn console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = Some(console);
        self
    }

    /// Set parameters.
    ///
    /// Recognized keys:
    ///   * `enabled`: `ConsoleValue::Boolean`
    ///   * `console`: `ConsoleValue::String`, name registered in `ConsoleRegistry`
    ///
    /// # Parameters
    ///   * `parameters`: parameter map.
    ///
    /// # Return Values
    ///   * GateBuilder instance
    pub fn parameters(mut self, parameters: ConsoleMap) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Set parameters from JSON object text.
    ///
    /// # Parameters
    ///   * `json`: JSON object, e.g. `{"enabled": true, "console": "log"}`.
    ///
    /// # Return Values
    ///   * Ok: GateBuilder instance
    ///   * `ErrorCode::JsonParserError`: JSON parser error
    ///   * `ErrorCode::InvalidParameters`: JSON is not an object
    pub fn parameters_json(self, json: &str) -> Result<Self, ErrorCode> {
        match ConsoleValue::parse_json(json)? {
            ConsoleValue::Object(parameters) => Ok(self.parameters(parameters)),
            _ => Err(ErrorCode::InvalidParameters),
        }
    }

    /// Resolve `enabled` flag from explicit setting, parameters or default.
    fn resolve_enabled(&self) -> Result<bool, ErrorCode> {
        if let Some(enabled) = self.enabled {
            return Ok(enabled);
        }
        match self
            .parameters
            .as_ref()
            .and_then(|p| p.get(ENABLED_PARAMETER))
        {
            Some(ConsoleValue::Boolean(enabled)) => Ok(*enabled),
            Some(_) => Err(ErrorCode::InvalidParameters),
            None => Ok(false),
        }
    }

    /// Resolve console from explicit setting, parameters or default.
    fn resolve_console(&mut self) -> Result<Arc<dyn Console>, ErrorCode> {
        if let Some(console) = self.console.take() {
            return Ok(console);
        }
        match &self.parameters {
            Some(parameters) if parameters.contains_key(CONSOLE_PARAMETER) => {
                ConsoleRegistry::from_parameters(parameters)
            }
            _ => ConsoleRegistry::from_name("terminal"),
        }
    }

    /// Finalize the builder and create the gate.
    ///
    /// # Return Values
    ///   * Ok: Gate instance
    ///   * `ErrorCode::InvalidParameters`: parameter has unexpected type
    ///   * `ErrorCode::UnknownConsole`: console name not registered
    ///   * `ErrorCode::MutexLockFailed`: registry lock failed
    pub fn build(mut self) -> Result<Gate, ErrorCode> {
        if let Some(parameters) = &self.parameters {
            for key in parameters.keys() {
                if key != ENABLED_PARAMETER && key != CONSOLE_PARAMETER {
                    warn!("unknown gate parameter ignored: {key}");
                }
            }
        }

        let enabled = self.resolve_enabled()?;
        let console = self.resolve_console()?;
        debug!("gate created, enabled: {enabled}");
        Ok(Gate::with_state(console, enabled))
    }
}
