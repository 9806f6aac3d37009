// Copyright (C) 2026 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Configuration and utilities

#[cfg(feature = "serde")]
pub mod serde_utils;


use core::fmt;

/// Monitoring parameters
///
/// These parameters select the environment a core is checked against. With
/// `fairness` disabled, only the protocol-shape assumptions of the
/// [bus monitor][crate::bus::Monitor] apply. With `fairness` enabled, stall
/// and acknowledgement latencies are bounded, which keeps exhaustive searches
/// finite and makes liveness properties provable at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Parameters {
    /// Include the fairness assumptions
    #[cfg_attr(feature = "serde", serde(with = "serde_utils::Flag"))]
    pub fairness: bool,
    /// Exclusive upper bound for the number of consecutive stalled cycles
    pub max_stall_cycles: u8,
    /// Exclusive upper bound for the number of cycles a request may wait for
    /// its acknowledgement
    pub max_ack_wait_cycles: u8,
}

/// See [PARAMETERS] for default values of individual fields
impl Default for Parameters {
    fn default() -> Self {
        PARAMETERS
    }
}

/// Default [Parameters]
pub const PARAMETERS: Parameters = Parameters {
    fairness: false,
    max_stall_cycles: MAX_STALL_CYCLES,
    max_ack_wait_cycles: MAX_ACK_WAIT_CYCLES,
};

/// Default bound for consecutive stalled cycles
pub const MAX_STALL_CYCLES: u8 = 2;

/// Default bound for cycles spent waiting for an acknowledgement
pub const MAX_ACK_WAIT_CYCLES: u8 = 2;

/// Errors resulting from unusable [`Parameters`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The named bound is zero, which would exclude every execution
    ZeroBound(&'static str),
}

impl core::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBound(name) => write!(f, "bound \"{name}\" must not be zero"),
        }
    }
}
