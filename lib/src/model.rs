// SPDX-FileCopyrightText: 2025 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Architectural reference model for the operations under test.
//!
//! Every function here is a pure, total function of its operand
//! registers: the target architecture defines a result for all inputs,
//! including zero divisors and the signed overflow pair, so the model
//! never traps and never fails.

pub mod rv64m;
