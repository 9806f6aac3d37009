// Copyright (C) 2026 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Bus environment errors

use core::fmt;

use crate::types::Channel;

/// Violation of an environment assumption
///
/// A violation signals that the bus signals presented in a cycle are outside
/// the environment a core is checked against. It does not indicate a bug in
/// the core. Formal tools prune such executions, a simulation should discard
/// or regenerate the offending input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Channel on which the assumption was violated
    pub channel: Channel,
    /// The violated assumption
    pub assumption: Assumption,
}

impl core::error::Error for Violation {}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.channel, self.assumption)
    }
}

/// Environment assumption
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Assumption {
    /// A stall requires the channel to be engaged in this and the previous
    /// cycle
    StallWithoutCycle,
    /// An acknowledgement requires the channel to be engaged in this and the
    /// previous cycle
    AckWithoutCycle,
    /// An acknowledgement requires a pending request
    AckWithoutPending,
    /// The channel may not stall for the given number of consecutive cycles
    StallLimit(u8),
    /// A pending request may not wait the given number of cycles for its
    /// acknowledgement
    AckWaitLimit(u8),
}

impl fmt::Display for Assumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StallWithoutCycle => write!(f, "stall outside of bus cycle"),
            Self::AckWithoutCycle => write!(f, "acknowledgement outside of bus cycle"),
            Self::AckWithoutPending => write!(f, "acknowledgement without pending request"),
            Self::StallLimit(n) => write!(f, "stalled for {n} consecutive cycles"),
            Self::AckWaitLimit(n) => write!(f, "waited {n} cycles for acknowledgement"),
        }
    }
}
