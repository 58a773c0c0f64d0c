// SPDX-FileCopyrightText: 2025 Nomadic Labs <contact@nomadic-labs.com>
// SPDX-FileCopyrightText: 2025 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! End-to-end checks of the conformance driver against golden vector
//! tables. Each table is the 5x5 cross product of the boundary words
//! `{0, 1, -1, i32::MAX, i32::MIN}` with the expected result written
//! out, asserted both against the reference model directly and through
//! a driver run.

use std::io::Write;

use goldenfile::Mint;
use rv64_conformance::driver::boundary_operands;
use rv64_conformance::driver::Driver;
use rv64_conformance::driver::Mismatch;
use rv64_conformance::dut::DivUnit;
use rv64_conformance::dut::ReferenceUnit;
use rv64_conformance::dut::WordOp;
use rv64_conformance::XValue;

const ONES: XValue = 0xffffffffffffffff;
const NEG1: XValue = 0xffffffffffffffff;
const MAX: XValue = 0x000000007fffffff;
const MIN: XValue = 0xffffffff80000000;

/// Golden vectors: `(rs1, rs2, expected)`
const DIVW_VECTORS: [(XValue, XValue, XValue); 25] = [
    (0x0, 0x0, ONES),
    (0x0, 0x1, 0x0),
    (0x0, NEG1, 0x0),
    (0x0, MAX, 0x0),
    (0x0, MIN, 0x0),
    //
    (0x1, 0x0, ONES),
    (0x1, 0x1, 0x1),
    (0x1, NEG1, ONES),
    (0x1, MAX, 0x0),
    (0x1, MIN, 0x0),
    //
    (NEG1, 0x0, ONES),
    (NEG1, 0x1, ONES),
    (NEG1, NEG1, 0x1),
    (NEG1, MAX, 0x0),
    (NEG1, MIN, 0x0),
    //
    (MAX, 0x0, ONES),
    (MAX, 0x1, 0x000000007fffffff),
    (MAX, NEG1, 0xffffffff80000001),
    (MAX, MAX, 0x1),
    (MAX, MIN, 0x0),
    //
    (MIN, 0x0, ONES),
    (MIN, 0x1, 0xffffffff80000000),
    (MIN, NEG1, 0xffffffff80000000),
    (MIN, MAX, ONES),
    (MIN, MIN, 0x1),
];

/// Golden vectors: `(rs1, rs2, expected)`
const DIVUW_VECTORS: [(XValue, XValue, XValue); 25] = [
    (0x0, 0x0, ONES),
    (0x0, 0x1, 0x0),
    (0x0, NEG1, 0x0),
    (0x0, MAX, 0x0),
    (0x0, MIN, 0x0),
    //
    (0x1, 0x0, ONES),
    (0x1, 0x1, 0x1),
    (0x1, NEG1, 0x0),
    (0x1, MAX, 0x0),
    (0x1, MIN, 0x0),
    //
    (NEG1, 0x0, ONES),
    (NEG1, 0x1, ONES),
    (NEG1, NEG1, 0x1),
    (NEG1, MAX, 0x2),
    (NEG1, MIN, 0x1),
    //
    (MAX, 0x0, ONES),
    (MAX, 0x1, 0x000000007fffffff),
    (MAX, NEG1, 0x0),
    (MAX, MAX, 0x1),
    (MAX, MIN, 0x0),
    //
    (MIN, 0x0, ONES),
    (MIN, 0x1, 0xffffffff80000000),
    (MIN, NEG1, 0x0),
    (MIN, MAX, 0x1),
    (MIN, MIN, 0x1),
];

/// Golden vectors: `(rs1, rs2, expected)`
const REMW_VECTORS: [(XValue, XValue, XValue); 25] = [
    (0x0, 0x0, 0x0),
    (0x0, 0x1, 0x0),
    (0x0, NEG1, 0x0),
    (0x0, MAX, 0x0),
    (0x0, MIN, 0x0),
    //
    (0x1, 0x0, 0x1),
    (0x1, 0x1, 0x0),
    (0x1, NEG1, 0x0),
    (0x1, MAX, 0x1),
    (0x1, MIN, 0x1),
    //
    (NEG1, 0x0, ONES),
    (NEG1, 0x1, 0x0),
    (NEG1, NEG1, 0x0),
    (NEG1, MAX, ONES),
    (NEG1, MIN, ONES),
    //
    (MAX, 0x0, 0x000000007fffffff),
    (MAX, 0x1, 0x0),
    (MAX, NEG1, 0x0),
    (MAX, MAX, 0x0),
    (MAX, MIN, 0x000000007fffffff),
    //
    (MIN, 0x0, 0xffffffff80000000),
    (MIN, 0x1, 0x0),
    (MIN, NEG1, 0x0),
    (MIN, MAX, ONES),
    (MIN, MIN, 0x0),
];

/// Golden vectors: `(rs1, rs2, expected)`
const REMUW_VECTORS: [(XValue, XValue, XValue); 25] = [
    (0x0, 0x0, 0x0),
    (0x0, 0x1, 0x0),
    (0x0, NEG1, 0x0),
    (0x0, MAX, 0x0),
    (0x0, MIN, 0x0),
    //
    (0x1, 0x0, 0x1),
    (0x1, 0x1, 0x0),
    (0x1, NEG1, 0x1),
    (0x1, MAX, 0x1),
    (0x1, MIN, 0x1),
    //
    (NEG1, 0x0, ONES),
    (NEG1, 0x1, 0x0),
    (NEG1, NEG1, 0x0),
    (NEG1, MAX, 0x1),
    (NEG1, MIN, 0x000000007fffffff),
    //
    (MAX, 0x0, 0x000000007fffffff),
    (MAX, 0x1, 0x0),
    (MAX, NEG1, 0x000000007fffffff),
    (MAX, MAX, 0x0),
    (MAX, MIN, 0x000000007fffffff),
    //
    (MIN, 0x0, 0xffffffff80000000),
    (MIN, 0x1, 0x0),
    (MIN, NEG1, 0xffffffff80000000),
    (MIN, MAX, 0x1),
    (MIN, MIN, 0x0),
];

fn check_vectors(op: WordOp, vectors: &[(XValue, XValue, XValue)]) {
    // The driver's catalog and the vector table list the same operand
    // pairs in the same order.
    let catalog = boundary_operands();
    assert_eq!(catalog.len(), vectors.len());
    for (&(rs1, rs2), &(vrs1, vrs2, _)) in catalog.iter().zip(vectors) {
        assert_eq!((rs1, rs2), (vrs1, vrs2));
    }

    // Vector-table/model agreement. A divergence here is a defect in
    // the table, not in any device.
    for &(rs1, rs2, expected) in vectors {
        assert_eq!(
            op.reference(rs1, rs2),
            expected,
            "{op} table defect at rs1 = {rs1:#018x}, rs2 = {rs2:#018x}"
        );
    }

    // The oracle-backed driver accepts the whole suite.
    let outcome = Driver::new(ReferenceUnit).run_suite(op);
    assert!(outcome.passed());
    assert_eq!(outcome.cases, vectors.len());
}

macro_rules! suite_case {
    ($name:ident, $op:expr, $vectors:expr) => {
        #[test]
        fn $name() {
            check_vectors($op, &$vectors)
        }
    };
}

suite_case!(test_suite_divw, WordOp::Divw, DIVW_VECTORS);
suite_case!(test_suite_divuw, WordOp::Divuw, DIVUW_VECTORS);
suite_case!(test_suite_remw, WordOp::Remw, REMW_VECTORS);
suite_case!(test_suite_remuw, WordOp::Remuw, REMUW_VECTORS);

/// Zero-extends `remuw` results, a defect the full-width comparison
/// must catch while the other suites stay green.
struct ZeroExtendingRemuw;

impl DivUnit for ZeroExtendingRemuw {
    fn execute(&mut self, op: WordOp, rs1: XValue, rs2: XValue) -> XValue {
        let result = op.reference(rs1, rs2);
        match op {
            WordOp::Remuw => result & 0xffff_ffff,
            _ => result,
        }
    }
}

#[test]
fn defective_unit_fails_only_its_suite() {
    let outcome = Driver::new(ZeroExtendingRemuw).run_all();

    assert!(!outcome.passed());

    for suite in &outcome.suites {
        match suite.op {
            WordOp::Remuw => {
                assert!(!suite.passed());
                // Every reported case ran; the driver did not stop at
                // the first divergence.
                assert_eq!(suite.cases, 25);
                for mismatch in &suite.mismatches {
                    assert_eq!(mismatch.expected as u32, mismatch.got as u32);
                    assert_ne!(mismatch.expected, mismatch.got);
                }
            }
            _ => assert!(suite.passed()),
        }
    }
}

#[test]
fn mismatch_diagnostic_format() {
    let mut mint = Mint::new("tests/expected");
    let mut golden = mint.new_goldenfile("mismatch.out").unwrap();

    let mismatch = Mismatch {
        op: WordOp::Divw,
        rs1: MIN,
        rs2: 0x0,
        expected: ONES,
        got: 0x1,
    };
    writeln!(golden, "{mismatch}").unwrap();
}
