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
//! Example for basic operations.
//! - Creating gate using `GateBuilder` with terminal console.
//! - Forwarding calls while enabled, silence while disabled.
//! - Capability-guarded operations on a console lacking them.

use rust_log_gate::prelude::*;

fn main() -> Result<(), ErrorCode> {
    // Gates start disabled.
    let gate = GateBuilder::new().build()?;

    println!("-> disabled gate, nothing below is printed");
    gate.log(&console_args!["hidden"])?;
    gate.error(&console_args!["boom"])?;

    println!("-> enabled gate");
    gate.set_enabled(true);
    gate.log(&console_args!["hello", 42])?;
    gate.group(Some("section"))?;
    let items = vec![ConsoleValue::from(1), ConsoleValue::from("two")];
    gate.info(&console_args!["inside group", items])?;
    gate.count(None)?;
    gate.count(None)?;
    gate.group_end()?;

    gate.time(Some("work"))?;
    let rows =
        ConsoleValue::parse_json(r#"[{"name": "a", "size": 1}, {"name": "b", "size": 2}]"#)?;
    gate.table(&rows, None)?;
    gate.time_end(Some("work"))?;

    println!("-> `profile` on terminal console is skipped");
    gate.profile(Some("p1"))?;
    gate.profile_end(Some("p1"))?;

    Ok(())
}
