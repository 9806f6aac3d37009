// Copyright (C) 2026 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Instruction classification
//!
//! The [recorder][crate::recorder] consumes the decode flags a core computes
//! anyway and only needs a handful of fixed fields from the instruction word
//! itself. This module provides both: the [`Class`] flags and the field
//! extraction in [`format`]. For cores not exposing their decode flags,
//! [`Class::decode`] derives them from an RV32I instruction word.

pub mod format;

#[cfg(test)]
mod tests;

/// Major opcodes relevant for classification
pub mod opcode {
    pub const LOAD: u8 = 0b000_0011;
    pub const OP_IMM: u8 = 0b001_0011;
    pub const STORE: u8 = 0b010_0011;
    pub const OP: u8 = 0b011_0011;
    pub const BRANCH: u8 = 0b110_0011;
    pub const JALR: u8 = 0b110_0111;
    pub const JAL: u8 = 0b110_1111;
    pub const SYSTEM: u8 = 0b111_0011;
}

/// Instruction class flags
///
/// These flags mirror the decode outputs of a typical in-order RV32I core. At
/// most one of them is expected to be set for a given instruction, but this is
/// not enforced: the recorder faithfully reports whatever the core claims.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Class {
    /// Register-register operation (`OP`)
    pub register_op: bool,
    /// Register-immediate operation (`OP-IMM`)
    pub immediate_op: bool,
    pub load: bool,
    pub store: bool,
    /// Conditional branch
    pub branch: bool,
    pub jal: bool,
    pub jalr: bool,
    /// CSR access (`SYSTEM` with non-zero `funct3`)
    pub csr_write: bool,
}

impl Class {
    /// Decode the class of an RV32I instruction
    ///
    /// Instructions not belonging to any of the classes, e.g. `lui` or
    /// `fence`, yield a [`Class`] with no flag set.
    pub fn decode(insn: u32) -> Self {
        let mut class = Self::default();
        match format::opcode(insn) {
            opcode::OP => class.register_op = true,
            opcode::OP_IMM => class.immediate_op = true,
            opcode::LOAD => class.load = true,
            opcode::STORE => class.store = true,
            opcode::BRANCH => class.branch = true,
            opcode::JAL => class.jal = true,
            opcode::JALR => class.jalr = true,
            opcode::SYSTEM => class.csr_write = format::funct3(insn) != 0,
            _ => (),
        }
        class
    }

    /// Determine whether the instruction performs a jump
    ///
    /// Jumps are always taken. Branches only jump if `branch_taken` is set.
    pub fn jump_taken(self, branch_taken: bool) -> bool {
        (self.branch && branch_taken) || self.jal || self.jalr
    }

    /// Determine whether source register 2 is read
    pub fn uses_rs2(self) -> bool {
        self.register_op || self.store || self.branch
    }

    /// Determine whether source register 1 is read by the given instruction
    ///
    /// For CSR accesses, this depends on the `funct3` field of `insn`.
    pub fn uses_rs1(self, insn: u32) -> bool {
        let csr_uses_rs1 =
            self.csr_write && CsrOp::from_insn(insn).is_some_and(CsrOp::uses_rs1);
        self.uses_rs2() || self.immediate_op || self.load || self.jalr || csr_uses_rs1
    }
}

/// CSR operation as encoded in `funct3`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CsrOp {
    /// Read-write
    Csrrw,
    /// Read-set
    Csrrs,
    /// Read-clear
    Csrrc,
    /// Read-write immediate
    Csrrwi,
    /// Read-set immediate
    Csrrsi,
    /// Read-clear immediate
    Csrrci,
}

impl CsrOp {
    /// Extract the CSR operation from an instruction's `funct3` field
    ///
    /// Returns `None` for `funct3` values not denoting a CSR operation. The
    /// major opcode is not checked.
    pub fn from_insn(insn: u32) -> Option<Self> {
        format::funct3(insn).try_into().ok()
    }

    /// Determine whether the operation reads source register 1
    ///
    /// Only the register-indexed variants do. The immediate variants encode
    /// their operand in the `rs1` field.
    pub fn uses_rs1(self) -> bool {
        matches!(self, Self::Csrrw | Self::Csrrs | Self::Csrrc)
    }
}

impl TryFrom<u8> for CsrOp {
    type Error = u8;

    fn try_from(funct3: u8) -> Result<Self, Self::Error> {
        match funct3 {
            0b001 => Ok(Self::Csrrw),
            0b010 => Ok(Self::Csrrs),
            0b011 => Ok(Self::Csrrc),
            0b101 => Ok(Self::Csrrwi),
            0b110 => Ok(Self::Csrrsi),
            0b111 => Ok(Self::Csrrci),
            err => Err(err),
        }
    }
}
