// SPDX-FileCopyrightText: 2025 Nomadic Labs <contact@nomadic-labs.com>
// SPDX-FileCopyrightText: 2025 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Conformance harness for the RV64M word-sized division and remainder
//! instructions (`divw`, `divuw`, `remw`, `remuw`).
//!
//! The [model] module computes the architecturally mandated result for
//! each operation. The [driver] module runs a device under test — real
//! hardware, a simulator, or the built-in software oracle — through a
//! fixed boundary catalog plus randomised operand pairs and reports
//! every divergence from the model.

pub mod clint;
pub mod driver;
pub mod dut;
pub mod model;

/// Integer register value
pub type XValue = u64;
