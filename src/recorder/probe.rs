// Copyright (C) 2026 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Core-internal signals consumed by the [`Recorder`][super::Recorder]

use crate::instruction::{Class, format};

/// Core-internal signals sampled in a single cycle
///
/// This trait is the single interface between a specific core and the
/// [`Recorder`][super::Recorder]. A core-specific probe maps whatever its
/// pipeline exposes to these signals. Signals some cores do not provide come
/// with defaults.
pub trait Probe {
    /// Whether an instruction retires in this cycle
    fn valid(&self) -> bool;

    /// Whether an exception or interrupt is taken in this cycle
    ///
    /// Together with [`trap`][Self::trap], this marks the next retired
    /// instruction as the first of a trap handler.
    fn exception(&self) -> bool {
        false
    }

    /// Whether the retiring instruction causes a synchronous trap
    fn trap(&self) -> bool {
        false
    }

    /// Instruction word of the retiring instruction
    fn insn(&self) -> u32;

    /// Decode [`Class`] of the retiring instruction
    ///
    /// By default, the class is decoded from [`insn`][Self::insn].
    fn class(&self) -> Class {
        Class::decode(self.insn())
    }

    /// Whether a conditional branch is taken
    fn branch_taken(&self) -> bool {
        false
    }

    /// Address of the retiring instruction
    fn pc(&self) -> u32;

    /// Target of a taken branch or jump
    fn jump_target(&self) -> u32;

    /// Address of the trap handler
    fn exception_vector(&self) -> u32;

    /// Data written to the register file, if the write port is enabled
    fn reg_write(&self) -> Option<u32>;

    /// Destination register of the register file write port
    ///
    /// By default, the destination is extracted from [`insn`][Self::insn].
    fn rd(&self) -> format::Register {
        format::rd(self.insn())
    }

    /// Data present on the two register file read ports
    fn reg_read(&self) -> [u32; 2];

    /// Data memory port
    fn data_mem(&self) -> DataMem;
}

/// Signals of a data memory port
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DataMem {
    /// Byte select mask, only the lower 4 bits are meaningful
    pub sel: u8,
    pub addr: u32,
    /// Data read by a load
    pub rdata: u32,
    /// Data written by a store
    pub wdata: u32,
}

/// Plain [`Probe`] holding sampled signal values
///
/// If no `class` is given, it is decoded from `insn`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CoreSignals {
    pub valid: bool,
    pub exception: bool,
    pub trap: bool,
    pub insn: u32,
    pub class: Option<Class>,
    pub branch_taken: bool,
    pub pc: u32,
    pub jump_target: u32,
    pub exception_vector: u32,
    pub reg_write: Option<u32>,
    pub rs1_rdata: u32,
    pub rs2_rdata: u32,
    pub data_mem: DataMem,
}

impl Probe for CoreSignals {
    fn valid(&self) -> bool {
        self.valid
    }

    fn exception(&self) -> bool {
        self.exception
    }

    fn trap(&self) -> bool {
        self.trap
    }

    fn insn(&self) -> u32 {
        self.insn
    }

    fn class(&self) -> Class {
        self.class.unwrap_or_else(|| Class::decode(self.insn))
    }

    fn branch_taken(&self) -> bool {
        self.branch_taken
    }

    fn pc(&self) -> u32 {
        self.pc
    }

    fn jump_target(&self) -> u32 {
        self.jump_target
    }

    fn exception_vector(&self) -> u32 {
        self.exception_vector
    }

    fn reg_write(&self) -> Option<u32> {
        self.reg_write
    }

    fn reg_read(&self) -> [u32; 2] {
        [self.rs1_rdata, self.rs2_rdata]
    }

    fn data_mem(&self) -> DataMem {
        self.data_mem
    }
}
