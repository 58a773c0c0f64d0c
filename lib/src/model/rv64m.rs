// SPDX-FileCopyrightText: 2025 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Reference semantics of the RV64M word instructions
//!
//! Chapter 7 - Unprivileged spec

use crate::XValue;

/// `DIVW` R-type instruction
///
/// Divide the lower 32 bits of `rs1` by the lower 32 bits of `rs2` and
/// return the quotient, sign-extended to 64 bits. In case the divisor
/// is zero, the result is `-1`. In case the dividend is `i32::MIN` and
/// the divisor is `-1`, the result is `i32::MIN` as well. All values
/// are _signed integers_.
///
/// The upper 32 bits of both operands are ignored entirely; callers
/// conventionally pass sign-extended values but nothing here relies on
/// that.
pub fn run_divw(rs1: XValue, rs2: XValue) -> XValue {
    let rval1 = rs1 as i32;
    let rval2 = rs2 as i32;

    let result = if rval2 == 0 {
        -1
    } else if rval2 == -1 && rval1 == i32::MIN {
        i32::MIN
    } else {
        rval1 / rval2
    };

    result as u64
}

/// `DIVUW` R-type instruction
///
/// Divide the lower 32 bits of `rs1` by the lower 32 bits of `rs2` and
/// return the quotient. In case the divisor is zero, the result is
/// `u32::MAX`. All values are _unsigned integers_, but like every word
/// operation the 32-bit result occupies the register sign-extended
/// from bit 31.
pub fn run_divuw(rs1: XValue, rs2: XValue) -> XValue {
    let rval1 = rs1 as u32;
    let rval2 = rs2 as u32;

    let result = if rval2 == 0 { u32::MAX } else { rval1 / rval2 };

    result as i32 as u64
}

/// `REMW` R-type instruction
///
/// Compute the remainder of `rs1` divided by `rs2`, considering only
/// the lower 32 bits of each value, and return it sign-extended to 64
/// bits. In case the lower 32 bits of `rs2` are zero, the result is
/// the dividend. In case of overflow the result is zero. All values
/// are _signed integers_; the remainder's sign follows the dividend.
pub fn run_remw(rs1: XValue, rs2: XValue) -> XValue {
    let rval1 = rs1 as i32;
    let rval2 = rs2 as i32;

    let result = if rval2 == 0 {
        rval1
    } else if rval2 == -1 && rval1 == i32::MIN {
        0
    } else {
        rval1 % rval2
    };

    result as u64
}

/// `REMUW` R-type instruction
///
/// Compute the remainder of `rs1` divided by `rs2`, considering only
/// the lower 32 bits of each value. In case the lower 32 bits of `rs2`
/// are zero, the result is the dividend. All values are _unsigned
/// integers_; the 32-bit result is written back sign-extended from bit
/// 31 per the word-operation register convention.
pub fn run_remuw(rs1: XValue, rs2: XValue) -> XValue {
    let rval1 = rs1 as u32;
    let rval2 = rs2 as u32;

    let result = if rval2 == 0 { rval1 } else { rval1 % rval2 };

    result as i32 as u64
}
