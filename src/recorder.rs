// Copyright (C) 2026 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Trace classification and recording
//!
//! This module provides the [`Recorder`], which derives one architectural
//! trace [`Record`] per cycle from the core-internal signals exposed through a
//! [`Probe`].

pub mod probe;
pub mod record;


pub use probe::{CoreSignals, DataMem, Probe};
pub use record::{MemAccess, Record};

use crate::instruction::{Class, format};

/// Trace recorder
///
/// A recorder models the registered RVFI outputs of a single core. Each call
/// to [`step`][Self::step] corresponds to one rising clock edge: values derived
/// from the signals sampled in the current cycle are committed to the
/// [`Record`], which then stays visible until the next step. There is no
/// queue. A consumer needs to observe the record after every step.
///
/// # Example
///
/// The following example demonstrates how a trapping instruction marks the
/// next retired instruction as the first one of the trap handler.
///
/// ```
/// use riscv_rvfi::recorder::{CoreSignals, Recorder};
///
/// let mut recorder = Recorder::new();
/// let ecall = CoreSignals {
///     valid: true,
///     trap: true,
///     insn: 0x00000073,
///     pc: 0x100,
///     exception_vector: 0x200,
///     ..Default::default()
/// };
/// let record = recorder.step(false, &ecall);
/// assert!(record.trap());
/// assert_eq!(record.pc_wdata(), 0x200);
///
/// let nop = CoreSignals {
///     valid: true,
///     insn: 0x00000013,
///     pc: 0x200,
///     ..Default::default()
/// };
/// let record = recorder.step(false, &nop);
/// assert!(record.intr());
/// assert_eq!(record.order(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    record: Record,
    order: u64,
    trap_entry: bool,
}

impl Recorder {
    /// Create a new recorder in its reset state
    pub fn new() -> Self {
        Default::default()
    }

    /// Advance by a single clock edge
    ///
    /// Samples the signals presented by the given `probe` and commits them,
    /// unless `reset` is asserted. Returns the [`Record`] visible after the
    /// clock edge.
    pub fn step(&mut self, reset: bool, probe: &impl Probe) -> &Record {
        if reset {
            self.reset();
            return &self.record;
        }

        let derived = Derived::new(probe);
        let valid = probe.valid();
        let trap = probe.trap();

        let intr = self.trap_entry;
        if probe.exception() || trap {
            if !self.trap_entry {
                log::debug!("Trap entry at {:#010x}", probe.pc());
            }
            self.trap_entry = true;
        } else if valid {
            self.trap_entry = false;
        }

        if !valid {
            self.record = Record::idle(self.order);
            return &self.record;
        }

        let insn = probe.insn();
        // Writes to x0 are reported with a zero value
        let (rd_addr, rd_wdata) = match (probe.reg_write(), probe.rd()) {
            (Some(data), rd) if rd != 0 => (rd, data),
            _ => (0, 0),
        };
        let [rs1_rdata, rs2_rdata] = probe.reg_read();
        let (rs1_addr, rs1_rdata) = if derived.uses_rs1 {
            (format::rs1(insn), rs1_rdata)
        } else {
            (0, 0)
        };
        let (rs2_addr, rs2_rdata) = if derived.uses_rs2 {
            (format::rs2(insn), rs2_rdata)
        } else {
            (0, 0)
        };

        let port = probe.data_mem();
        let mask = port.sel & BYTE_MASK;
        let mem = if derived.class.store && !trap {
            MemAccess::Write {
                addr: port.addr,
                mask,
                data: port.wdata,
            }
        } else if derived.class.load && !trap {
            MemAccess::Read {
                addr: port.addr,
                mask,
                data: port.rdata,
            }
        } else {
            MemAccess::None
        };

        self.record = Record {
            order: self.order,
            valid,
            insn,
            pc_rdata: probe.pc(),
            pc_wdata: derived.next_pc,
            rs1_addr,
            rs2_addr,
            rs1_rdata,
            rs2_rdata,
            rd_addr,
            rd_wdata,
            mem,
            trap,
            intr,
        };
        self.order = self.order.wrapping_add(1);
        log::trace!("Commit {}", self.record);

        &self.record
    }

    /// Retrieve the [`Record`] visible since the last step
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Retrieve the number of instructions committed since the last reset
    pub fn order(&self) -> u64 {
        self.order
    }

    /// Determine whether the next retired instruction will be marked as the
    /// first of a trap handler
    pub fn trap_entry(&self) -> bool {
        self.trap_entry
    }

    /// Reset the recorder
    pub fn reset(&mut self) {
        *self = Default::default();
    }
}

/// Values derived combinationally from a single cycle's signals
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Derived {
    /// Instruction [`Class`] as reported by the probe
    pub class: Class,
    /// Whether control is transferred to the jump target
    pub jump_taken: bool,
    /// Whether source register 1 is read
    pub uses_rs1: bool,
    /// Whether source register 2 is read
    pub uses_rs2: bool,
    /// Address of the next instruction
    pub next_pc: u32,
}

impl Derived {
    /// Derive values from the signals presented by a [`Probe`]
    pub fn new(probe: &impl Probe) -> Self {
        let class = probe.class();
        let insn = probe.insn();
        let jump_taken = class.jump_taken(probe.branch_taken());
        let next_pc = if probe.trap() {
            probe.exception_vector()
        } else if jump_taken {
            probe.jump_target()
        } else {
            probe.pc().wrapping_add(INSN_SIZE)
        };

        Self {
            class,
            jump_taken,
            uses_rs1: class.uses_rs1(insn),
            uses_rs2: class.uses_rs2(),
            next_pc,
        }
    }
}

/// Size of an uncompressed instruction
const INSN_SIZE: u32 = 4;

/// Byte select mask for 32bit accesses
const BYTE_MASK: u8 = 0xf;
