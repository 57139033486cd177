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

//! # Console gate
//!
//! Forwards console-style logging calls to an underlying console, gated by an
//! `enabled` flag. When disabled, every operation is a silent no-op. When enabled,
//! arguments reach the console unchanged and console errors are returned as-is.
//!
//! Non-standard operations (`profile`, `profile_end`, `time_stamp`) are forwarded
//! only if the console reports the matching [`Capability`](console_api::Capability).
//!
//! ```
//! use rust_log_gate::prelude::*;
//! use std::sync::Arc;
//!
//! let mock = MockConsole::default();
//! let gate = GateBuilder::new()
//!     .enabled(true)
//!     .console(Arc::new(mock.clone()))
//!     .build()?;
//!
//! gate.log(&console_args!["hello", 42])?;
//! gate.set_enabled(false);
//! gate.error(&console_args!["boom"])?;
//!
//! assert_eq!(mock.calls(), vec![ConsoleCall::Log(console_args!["hello", 42])]);
//! # Ok::<(), ErrorCode>(())
//! ```

pub mod console_value;

pub mod console_api;
mod console_state;
pub mod console_mock;
pub mod console_registry;
pub mod error_code;
pub mod gate;
pub mod gate_builder;
pub mod json_format;
mod log;
#[cfg(feature = "logging")]
pub mod log_console;
pub mod terminal_console;

/// Common imports.
pub mod prelude {
    pub use crate::console_api::{Capability, Console, DirOptions, DEFAULT_LABEL};
    pub use crate::console_args;
    pub use crate::console_mock::{ConsoleCall, MockConsole};
    pub use crate::console_registry::{ConsoleFactoryFn, ConsoleRegistry};
    pub use crate::console_value::{ConsoleMap, ConsoleValue};
    pub use crate::error_code::ErrorCode;
    pub use crate::gate::Gate;
    pub use crate::gate_builder::GateBuilder;
    #[cfg(feature = "logging")]
    pub use crate::log_console::LogConsole;
    pub use crate::terminal_console::{ConsoleWriter, TerminalConsole};
}
