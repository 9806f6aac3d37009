// Copyright (C) 2026 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Types shared by the [recorder][crate::recorder] and [bus][crate::bus]
//! monitor


use core::fmt;

/// Privilege level as reported in the RVFI `mode` field
///
/// Only machine mode is modelled.
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Hash)]
pub enum Privilege {
    #[default]
    Machine,
}

impl From<Privilege> for u8 {
    fn from(p: Privilege) -> Self {
        match p {
            Privilege::Machine => 0b11,
        }
    }
}

/// Native register width as reported in the RVFI `ixl` field, encoded as for
/// `misa.MXL`
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Hash)]
pub enum Xlen {
    #[default]
    Rv32,
}

impl From<Xlen> for u8 {
    fn from(xlen: Xlen) -> Self {
        match xlen {
            Xlen::Rv32 => 1,
        }
    }
}

/// Bus channel of a split-phase memory interface
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Channel {
    /// Instruction fetch
    Instruction,
    /// Data access
    Data,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instruction => write!(f, "ibus"),
            Self::Data => write!(f, "dbus"),
        }
    }
}
