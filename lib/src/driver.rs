// SPDX-FileCopyrightText: 2025 Nomadic Labs <contact@nomadic-labs.com>
// SPDX-FileCopyrightText: 2025 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Conformance driver
//!
//! Enumerates the case catalog for each operation, issues every case on
//! the device under test and compares the result against the reference
//! model. A mismatch never aborts the run: the remaining cases of the
//! suite still execute so that one run surfaces every divergence.

use std::fmt;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use strum::IntoEnumIterator;

use crate::clint::Deadline;
use crate::clint::Timer;
use crate::dut::DivUnit;
use crate::dut::WordOp;
use crate::XValue;

/// Operand values whose low words cover the 32-bit boundary cases.
const BOUNDARY_WORDS: [i32; 5] = [0, 1, -1, i32::MAX, i32::MIN];

/// The fixed catalog: the cross product of [BOUNDARY_WORDS] with
/// itself, supplied as sign-consistent 64-bit register values.
pub fn boundary_operands() -> Vec<(XValue, XValue)> {
    let mut pairs = Vec::with_capacity(BOUNDARY_WORDS.len() * BOUNDARY_WORDS.len());
    for rs1 in BOUNDARY_WORDS {
        for rs2 in BOUNDARY_WORDS {
            pairs.push((rs1 as XValue, rs2 as XValue));
        }
    }
    pairs
}

/// A case where the device disagreed with the reference model.
///
/// Rendered as the fixed four-line diagnostic, one labelled 64-bit
/// hexadecimal value per line.
#[derive(
    Clone, Copy, PartialEq, Eq, thiserror::Error, Debug, serde::Serialize, serde::Deserialize,
)]
pub struct Mismatch {
    pub op: WordOp,
    pub rs1: XValue,
    pub rs2: XValue,
    pub expected: XValue,
    pub got: XValue,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RS1   : {:#018x}", self.rs1)?;
        writeln!(f, "RS2   : {:#018x}", self.rs2)?;
        writeln!(f, "Expect: {:#018x}", self.expected)?;
        write!(f, "Got   : {:#018x}", self.got)
    }
}

/// Outcome of one operation's suite
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SuiteOutcome {
    pub op: WordOp,
    /// Number of cases that were issued on the device
    pub cases: usize,
    /// Every diverging case, in issue order
    pub mismatches: Vec<Mismatch>,
}

impl SuiteOutcome {
    /// A suite passes iff every one of its cases passed.
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Aggregate outcome of a whole run
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RunOutcome {
    pub suites: Vec<SuiteOutcome>,
}

impl RunOutcome {
    /// Conjunction over all suites
    pub fn passed(&self) -> bool {
        self.suites.iter().all(SuiteOutcome::passed)
    }

    pub fn total_cases(&self) -> usize {
        self.suites.iter().map(|suite| suite.cases).sum()
    }

    pub fn total_mismatches(&self) -> usize {
        self.suites.iter().map(|suite| suite.mismatches.len()).sum()
    }
}

/// Drives a [`DivUnit`] through the case catalog.
///
/// Cases run strictly in program order, one instruction per call; the
/// driver owns the only mutable run state (the outcome accumulator).
pub struct Driver<U> {
    unit: U,
    random_cases: usize,
    seed: u64,
}

impl<U: DivUnit> Driver<U> {
    /// Driver for the boundary catalog only.
    pub fn new(unit: U) -> Self {
        Self {
            unit,
            random_cases: 0,
            seed: 0,
        }
    }

    /// Driver which follows the boundary catalog with `cases` random
    /// operand pairs per operation. Pairs are drawn from a generator
    /// seeded with `seed` so that a failing run can be replayed
    /// exactly. Both halves of each operand are randomised: the model
    /// must not care about the upper words, and neither may the
    /// device.
    pub fn with_random_cases(unit: U, cases: usize, seed: u64) -> Self {
        Self {
            unit,
            random_cases: cases,
            seed,
        }
    }

    fn check_case(&mut self, op: WordOp, rs1: XValue, rs2: XValue, outcome: &mut SuiteOutcome) {
        let expected = op.reference(rs1, rs2);
        let got = self.unit.execute(op, rs1, rs2);
        outcome.cases += 1;

        // Full 64-bit equality: a result whose low word is correct but
        // whose extension is not is still a defect.
        if got != expected {
            let mismatch = Mismatch {
                op,
                rs1,
                rs2,
                expected,
                got,
            };
            tracing::error!(%op, "{mismatch}");
            outcome.mismatches.push(mismatch);
        }
    }

    /// Run every case of one operation's suite.
    pub fn run_suite(&mut self, op: WordOp) -> SuiteOutcome {
        tracing::debug!(%op, "starting suite");

        let mut outcome = SuiteOutcome {
            op,
            cases: 0,
            mismatches: Vec::new(),
        };

        for (rs1, rs2) in boundary_operands() {
            self.check_case(op, rs1, rs2, &mut outcome);
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        for _ in 0..self.random_cases {
            let rs1 = rng.gen();
            let rs2 = rng.gen();
            self.check_case(op, rs1, rs2, &mut outcome);
        }

        tracing::info!(
            %op,
            cases = outcome.cases,
            mismatches = outcome.mismatches.len(),
            "suite finished"
        );
        outcome
    }

    /// Run the given suites in order.
    pub fn run_ops(&mut self, ops: impl IntoIterator<Item = WordOp>) -> RunOutcome {
        RunOutcome {
            suites: ops.into_iter().map(|op| self.run_suite(op)).collect(),
        }
    }

    /// Run all suites in the fixed operation order.
    pub fn run_all(&mut self) -> RunOutcome {
        self.run_ops(WordOp::iter())
    }

    /// Like [`Self::run_ops`], but stop scheduling further suites once
    /// the deadline has passed on the given timer. A suite that has
    /// started always runs to completion; the timer only bounds the
    /// overall run, never a case.
    pub fn run_ops_until(
        &mut self,
        ops: impl IntoIterator<Item = WordOp>,
        timer: &impl Timer,
        deadline: Deadline,
    ) -> RunOutcome {
        let mut suites = Vec::new();
        for op in ops {
            if deadline.expired(timer) {
                tracing::warn!(%op, "deadline reached, skipping remaining suites");
                break;
            }
            suites.push(self.run_suite(op));
        }
        RunOutcome { suites }
    }

    /// Consume the driver, returning the unit.
    pub fn into_unit(self) -> U {
        self.unit
    }
}
