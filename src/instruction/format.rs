// Copyright (C) 2026 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Fixed instruction fields
//!
//! The RISC-V Instruction Set Manual Volume I [^spec] section 2.2 Base
//! Instruction Formats keeps the source and destination register fields at the
//! same position in all formats in which they occur. This allows extracting
//! register indices without knowing the instruction's format, which is exactly
//! what a core's register file ports do. Whether an extracted field is
//! meaningful for a given instruction is decided by its
//! [`Class`][super::Class].
//!
//! [^spec]: found here: <https://riscv.org/specifications/ratified/>

/// Register number
pub type Register = u8;

/// Extract the major opcode from a 32bit instruction
pub const fn opcode(insn: u32) -> u8 {
    insn as u8 & OPCODE_MASK
}

/// Extract the destination register form a 32bit instruction
pub const fn rd(insn: u32) -> Register {
    (insn >> 7) as u8 & REG_MASK
}

/// Extract the `funct3` field form a 32bit instruction
pub const fn funct3(insn: u32) -> u8 {
    (insn >> 12) as u8 & FUNCT3_MASK
}

/// Extract source register 1 form a 32bit instruction
pub const fn rs1(insn: u32) -> Register {
    (insn >> 15) as u8 & REG_MASK
}

/// Extract source register 2 form a 32bit instruction
pub const fn rs2(insn: u32) -> Register {
    (insn >> 20) as u8 & REG_MASK
}

const OPCODE_MASK: u8 = 0x7f;
const REG_MASK: u8 = 0x1f;
const FUNCT3_MASK: u8 = 0x07;
