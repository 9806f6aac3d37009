// Copyright (C) 2026 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0

//! # Cycle-accurate model of RVFI trace capture for RISC-V cores
//!
//! This crate models the observer logic that wires a pipelined RISC-V core
//! to the RISC-V Formal Interface (RVFI): the derivation of one architectural
//! trace [`Record`][recorder::Record] per retired instruction from raw core
//! signals, and the bookkeeping around a split-phase memory bus that keeps a
//! formal environment well-formed.
//!
//! Hardware evaluates all of this in parallel on every clock edge. Here, each
//! edge is one explicit `step`: combinational values are derived from the
//! current register state and inputs, then the register state is updated.
//!
//! See [recorder] for the trace classifier/recorder, [bus] for the bus
//! liveness monitor and [observer] for stepping both in lock-step.
//!
//! # no_std
//! This crate is not dependent on the standard library and only uses the Core
//! Library. Logging is done through the [`log`] facade.
//!
//! # Example
//!
//! The following example feeds a single `addi x1, x0, 5` retirement to a
//! [`Recorder`][recorder::Recorder].
//!
//! ```
//! use riscv_rvfi::recorder::{CoreSignals, Recorder};
//!
//! let mut recorder = Recorder::new();
//! let signals = CoreSignals {
//!     valid: true,
//!     insn: 0x00500093,
//!     pc: 0x8000_0000,
//!     reg_write: Some(5),
//!     ..Default::default()
//! };
//!
//! let record = recorder.step(false, &signals);
//! assert!(record.valid());
//! assert_eq!(record.rd_addr(), 1);
//! assert_eq!(record.rd_wdata(), 5);
//! assert_eq!(record.pc_wdata(), 0x8000_0004);
//! ```
#![cfg_attr(not(test), no_std)]

pub mod bus;
pub mod config;
pub mod instruction;
pub mod observer;
pub mod recorder;
pub mod types;

#[cfg(test)]
mod tests;
