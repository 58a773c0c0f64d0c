// SPDX-FileCopyrightText: 2025 Nomadic Labs <contact@nomadic-labs.com>
// SPDX-FileCopyrightText: 2025 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use std::fs;

use derive_more::Error;
use derive_more::From;
use rv64_conformance::driver::Driver;
use rv64_conformance::driver::RunOutcome;
use rv64_conformance::dut::ReferenceUnit;
use rv64_conformance::dut::WordOp;
use strum::IntoEnumIterator;

use crate::cli::Backend;
use crate::cli::RunOptions;
use crate::word_op;

#[derive(Debug, From, Error, derive_more::Display)]
pub enum RunError {
    /// The run report could not be produced
    Io(std::io::Error),
    Report(serde_json::Error),

    /// At least one case diverged from the reference model
    #[display(fmt = "{} of {} cases diverged from the reference model", _0, _1)]
    #[from(ignore)]
    Conformance(#[error(not(source))] usize, #[error(not(source))] usize),
}

pub fn run(opts: RunOptions) -> Result<(), RunError> {
    let ops: Vec<WordOp> = if opts.ops.is_empty() {
        WordOp::iter().collect()
    } else {
        opts.ops.iter().map(word_op).collect()
    };

    let outcome = match opts.backend {
        // Hardware and simulator targets plug in here through the
        // `DivUnit` trait.
        Backend::Oracle => {
            let mut driver =
                Driver::with_random_cases(ReferenceUnit, opts.random_cases, opts.seed);
            driver.run_ops(ops)
        }
    };

    report(&outcome, &opts)?;

    if outcome.passed() {
        println!("Ok ({} cases)", outcome.total_cases());
        Ok(())
    } else {
        Err(RunError::Conformance(
            outcome.total_mismatches(),
            outcome.total_cases(),
        ))
    }
}

fn report(outcome: &RunOutcome, opts: &RunOptions) -> Result<(), RunError> {
    // Every divergence is surfaced individually; a count-only summary
    // would defeat the point of the tool.
    for suite in &outcome.suites {
        for mismatch in &suite.mismatches {
            eprintln!("[{}]", suite.op);
            eprintln!("{mismatch}");
        }
    }

    if let Some(path) = &opts.output {
        let report = serde_json::to_string_pretty(outcome)?;
        fs::write(path, report)?;
    }

    Ok(())
}
