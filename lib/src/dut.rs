// SPDX-FileCopyrightText: 2025 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Seam between the conformance driver and the device under test.

use crate::model::rv64m;
use crate::XValue;

/// Word-sized M-extension operation under test
///
/// The declaration order is the fixed order in which the suites run.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum WordOp {
    Divw,
    Divuw,
    Remw,
    Remuw,
}

impl WordOp {
    /// Architecturally mandated result for this operation, as computed
    /// by the reference model.
    pub fn reference(self, rs1: XValue, rs2: XValue) -> XValue {
        match self {
            WordOp::Divw => rv64m::run_divw(rs1, rs2),
            WordOp::Divuw => rv64m::run_divuw(rs1, rs2),
            WordOp::Remw => rv64m::run_remw(rs1, rs2),
            WordOp::Remuw => rv64m::run_remuw(rs1, rs2),
        }
    }
}

/// Interface for issuing one operation on the device under test.
///
/// A call corresponds to a single instruction executed on the device:
/// it blocks until the result register value is available and must
/// leave no state behind that is observable by subsequent calls. The
/// driver never issues calls concurrently.
pub trait DivUnit {
    fn execute(&mut self, op: WordOp, rs1: XValue, rs2: XValue) -> XValue;
}

/// Software oracle backing [`DivUnit`] with the reference model itself.
///
/// Lets the driver run without an attached hardware target, which is
/// how the harness self-tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReferenceUnit;

impl DivUnit for ReferenceUnit {
    fn execute(&mut self, op: WordOp, rs1: XValue, rs2: XValue) -> XValue {
        op.reference(rs1, rs2)
    }
}
