// Copyright (C) 2026 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Trace record

use core::fmt;

use crate::instruction::format::Register;
use crate::types::{Privilege, Xlen};

/// Architectural snapshot of a single cycle
///
/// A record corresponds to the RVFI signals of a single retirement channel as
/// presented to a checker in a given cycle. If the record is
/// [`valid`][Self::valid], it describes exactly one retired instruction (or
/// trapping instruction). Otherwise, all fields except the
/// [`order`][Self::order] are zero.
///
/// Fields which are unused by the retired instruction are always zero, never
/// stale: a checker trusts every field of a valid record.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub(super) order: u64,
    pub(super) valid: bool,
    pub(super) insn: u32,
    pub(super) pc_rdata: u32,
    pub(super) pc_wdata: u32,
    pub(super) rs1_addr: Register,
    pub(super) rs2_addr: Register,
    pub(super) rs1_rdata: u32,
    pub(super) rs2_rdata: u32,
    pub(super) rd_addr: Register,
    pub(super) rd_wdata: u32,
    pub(super) mem: MemAccess,
    pub(super) trap: bool,
    pub(super) intr: bool,
}

impl Record {
    /// Create a record for a cycle without retirement
    pub(super) fn idle(order: u64) -> Self {
        Self {
            order,
            ..Default::default()
        }
    }

    /// Retrieve the order, i.e. the number of previously retired instructions
    pub fn order(&self) -> u64 {
        self.order
    }

    /// Determine whether this record describes a retired instruction
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Retrieve the instruction word
    pub fn insn(&self) -> u32 {
        self.insn
    }

    /// Retrieve the address of the instruction
    pub fn pc_rdata(&self) -> u32 {
        self.pc_rdata
    }

    /// Retrieve the address of the next instruction
    pub fn pc_wdata(&self) -> u32 {
        self.pc_wdata
    }

    pub fn rs1_addr(&self) -> Register {
        self.rs1_addr
    }

    pub fn rs2_addr(&self) -> Register {
        self.rs2_addr
    }

    pub fn rs1_rdata(&self) -> u32 {
        self.rs1_rdata
    }

    pub fn rs2_rdata(&self) -> u32 {
        self.rs2_rdata
    }

    pub fn rd_addr(&self) -> Register {
        self.rd_addr
    }

    /// Retrieve the value written to [`rd_addr`][Self::rd_addr]
    ///
    /// Writes to `x0` are architecturally void and thus always reported with
    /// a value of zero.
    pub fn rd_wdata(&self) -> u32 {
        self.rd_wdata
    }

    /// Retrieve the data memory access
    pub fn mem(&self) -> &MemAccess {
        &self.mem
    }

    pub fn mem_addr(&self) -> u32 {
        match self.mem {
            MemAccess::None => 0,
            MemAccess::Read { addr, .. } | MemAccess::Write { addr, .. } => addr,
        }
    }

    pub fn mem_rmask(&self) -> u8 {
        match self.mem {
            MemAccess::Read { mask, .. } => mask,
            _ => 0,
        }
    }

    pub fn mem_rdata(&self) -> u32 {
        match self.mem {
            MemAccess::Read { data, .. } => data,
            _ => 0,
        }
    }

    pub fn mem_wmask(&self) -> u8 {
        match self.mem {
            MemAccess::Write { mask, .. } => mask,
            _ => 0,
        }
    }

    pub fn mem_wdata(&self) -> u32 {
        match self.mem {
            MemAccess::Write { data, .. } => data,
            _ => 0,
        }
    }

    /// Determine whether the instruction caused a synchronous trap
    pub fn trap(&self) -> bool {
        self.trap
    }

    /// Determine whether this is the first instruction of a trap handler
    pub fn intr(&self) -> bool {
        self.intr
    }

    /// Halt indicator, always `false`
    pub fn halt(&self) -> bool {
        false
    }

    /// Privilege mode, always [`Privilege::Machine`]
    pub fn mode(&self) -> Privilege {
        Privilege::Machine
    }

    /// Register width, always [`Xlen::Rv32`]
    pub fn ixl(&self) -> Xlen {
        Xlen::Rv32
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "{:>6} -", self.order);
        }

        write!(
            f,
            "{:>6} {:08x}: {:08x} -> {:08x}",
            self.order, self.pc_rdata, self.insn, self.pc_wdata
        )?;
        if self.rs1_addr != 0 {
            write!(f, " x{}={:08x}", self.rs1_addr, self.rs1_rdata)?;
        }
        if self.rs2_addr != 0 {
            write!(f, " x{}={:08x}", self.rs2_addr, self.rs2_rdata)?;
        }
        if self.rd_addr != 0 {
            write!(f, " x{}<={:08x}", self.rd_addr, self.rd_wdata)?;
        }
        match self.mem {
            MemAccess::None => (),
            MemAccess::Read { addr, mask, data } => {
                write!(f, " [{addr:08x}]/{mask:04b} => {data:08x}")?
            }
            MemAccess::Write { addr, mask, data } => {
                write!(f, " [{addr:08x}]/{mask:04b} <= {data:08x}")?
            }
        }
        if self.trap {
            write!(f, " trap")?;
        }
        if self.intr {
            write!(f, " intr")?;
        }
        Ok(())
    }
}

/// Data memory access of a retired instruction
///
/// An instruction either reads, writes or does not access data memory at all.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MemAccess {
    #[default]
    None,
    Read { addr: u32, mask: u8, data: u32 },
    Write { addr: u32, mask: u8, data: u32 },
}
