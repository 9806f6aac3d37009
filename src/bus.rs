// Copyright (C) 2026 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Bus liveness monitoring
//!
//! This module provides the [`Monitor`], which observes the two channels of a
//! split-phase memory bus. For each channel, it tracks the number of pending
//! requests, i.e. requests accepted but not yet acknowledged, and checks the
//! environment assumptions under which a core is verified.

pub mod error;


pub use error::{Assumption, Violation};

use crate::config;
use crate::types::Channel;

/// Signals of a single bus channel sampled in a single cycle
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelSignals {
    /// A bus cycle is in progress
    pub cyc: bool,
    /// A request is presented
    pub stb: bool,
    /// The request cannot be accepted in this cycle
    pub stall: bool,
    /// A request is acknowledged
    pub ack: bool,
}

impl ChannelSignals {
    /// Determine whether a request is accepted in this cycle
    pub fn accepted(self) -> bool {
        self.cyc && self.stb && !self.stall
    }
}

/// Bounds on stall and acknowledgement latencies
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Fairness {
    max_stall_cycles: u8,
    max_ack_wait_cycles: u8,
}

/// Monitor for a single bus channel
///
/// The monitor's state consists of the previous cycle's `cyc` signal, the
/// number of pending requests and, for the fairness bounds, the number of
/// consecutive stalled cycles and the number of cycles spent waiting for an
/// acknowledgement.
#[derive(Clone, Debug)]
pub struct ChannelMonitor {
    channel: Channel,
    fairness: Option<Fairness>,
    prev_cyc: bool,
    pending: u32,
    stall_cycles: u8,
    ack_wait_cycles: u8,
}

impl ChannelMonitor {
    fn new(channel: Channel, fairness: Option<Fairness>) -> Self {
        Self {
            channel,
            fairness,
            prev_cyc: false,
            pending: 0,
            stall_cycles: 0,
            ack_wait_cycles: 0,
        }
    }

    /// Check the environment assumptions for a single cycle
    ///
    /// The check uses the state visible before the next clock edge. A `flush`
    /// discards all pending requests, which releases them from the
    /// acknowledgement latency bound.
    pub fn check(&self, flush: bool, signals: ChannelSignals) -> Result<(), Violation> {
        let engaged = signals.cyc && self.prev_cyc;
        let assumption = if signals.stall && !engaged {
            Some(Assumption::StallWithoutCycle)
        } else if signals.ack && !engaged {
            Some(Assumption::AckWithoutCycle)
        } else if signals.ack && self.pending == 0 {
            Some(Assumption::AckWithoutPending)
        } else {
            self.fairness.and_then(|f| self.check_fairness(f, flush, signals))
        };

        match assumption {
            Some(assumption) => Err(Violation {
                channel: self.channel,
                assumption,
            }),
            None => Ok(()),
        }
    }

    fn check_fairness(
        &self,
        fairness: Fairness,
        flush: bool,
        signals: ChannelSignals,
    ) -> Option<Assumption> {
        let stall_cycles = self.stall_cycles.saturating_add(1);
        if signals.stall && stall_cycles >= fairness.max_stall_cycles {
            return Some(Assumption::StallLimit(stall_cycles));
        }

        let ack_wait_cycles = self.ack_wait_cycles.saturating_add(1);
        let waiting = self.pending > 0 && !signals.ack && !flush;
        if waiting && ack_wait_cycles >= fairness.max_ack_wait_cycles {
            return Some(Assumption::AckWaitLimit(ack_wait_cycles));
        }

        None
    }

    /// Advance by a single clock edge
    ///
    /// If the given signals violate any assumption, the [`Violation`] is
    /// returned and the state is left untouched.
    pub fn step(&mut self, flush: bool, signals: ChannelSignals) -> Result<(), Violation> {
        self.check(flush, signals)?;
        self.commit(flush, signals);
        Ok(())
    }

    /// Update the state without checking assumptions
    fn commit(&mut self, flush: bool, signals: ChannelSignals) {
        let waiting = self.pending > 0 && !signals.ack && !flush;

        self.pending = if flush {
            if self.pending > 0 {
                log::debug!("{}: flushing {} pending requests", self.channel, self.pending);
            }
            0
        } else {
            self.pending
                .saturating_add(signals.accepted().into())
                .saturating_sub(signals.ack.into())
        };
        self.stall_cycles = if signals.stall {
            self.stall_cycles.saturating_add(1)
        } else {
            0
        };
        self.ack_wait_cycles = if waiting {
            self.ack_wait_cycles.saturating_add(1)
        } else {
            0
        };
        self.prev_cyc = signals.cyc;
    }

    /// Retrieve the [`Channel`] this monitor observes
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Retrieve the number of pending requests
    pub fn pending(&self) -> u32 {
        self.pending
    }

    /// Retrieve the number of consecutive stalled cycles up to the last step
    pub fn stall_cycles(&self) -> u8 {
        self.stall_cycles
    }

    /// Retrieve the number of cycles the oldest pending request waited for
    /// its acknowledgement up to the last step
    pub fn ack_wait_cycles(&self) -> u8 {
        self.ack_wait_cycles
    }

    /// Reset the monitor
    pub fn reset(&mut self) {
        *self = Self::new(self.channel, self.fairness);
    }
}

/// Bus monitor
///
/// A bus monitor observes the instruction and data channel of a core's memory
/// interface. The channels are independent of each other, except for a
/// core-wide flush which discards the pending requests of both channels.
///
/// # Example
///
/// ```
/// use riscv_rvfi::bus::{self, ChannelSignals};
/// use riscv_rvfi::types::Channel;
///
/// let mut monitor = bus::builder().build().unwrap();
/// let idle = ChannelSignals::default();
/// let request = ChannelSignals {
///     cyc: true,
///     stb: true,
///     ..Default::default()
/// };
/// let ack = ChannelSignals {
///     cyc: true,
///     ack: true,
///     ..Default::default()
/// };
///
/// monitor.step(false, request, idle).unwrap();
/// assert_eq!(monitor.pending(Channel::Instruction), 1);
/// monitor.step(false, ack, idle).unwrap();
/// assert_eq!(monitor.pending(Channel::Instruction), 0);
///
/// // There is nothing left to acknowledge
/// assert!(monitor.step(false, ack, idle).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Monitor {
    ibus: ChannelMonitor,
    dbus: ChannelMonitor,
}

impl Monitor {
    /// Check the environment assumptions for a single cycle
    pub fn check(
        &self,
        flush: bool,
        ibus: ChannelSignals,
        dbus: ChannelSignals,
    ) -> Result<(), Violation> {
        self.ibus.check(flush, ibus)?;
        self.dbus.check(flush, dbus)
    }

    /// Advance by a single clock edge
    ///
    /// If the given signals violate any assumption on either channel, the
    /// [`Violation`] is returned and neither channel's state is altered.
    pub fn step(
        &mut self,
        flush: bool,
        ibus: ChannelSignals,
        dbus: ChannelSignals,
    ) -> Result<(), Violation> {
        if let Err(violation) = self.check(flush, ibus, dbus) {
            log::debug!("Rejecting bus cycle: {violation}");
            return Err(violation);
        }
        self.ibus.commit(flush, ibus);
        self.dbus.commit(flush, dbus);
        Ok(())
    }

    /// Retrieve the [`ChannelMonitor`] for a given [`Channel`]
    pub fn channel(&self, channel: Channel) -> &ChannelMonitor {
        match channel {
            Channel::Instruction => &self.ibus,
            Channel::Data => &self.dbus,
        }
    }

    /// Retrieve the number of pending requests on a given [`Channel`]
    pub fn pending(&self, channel: Channel) -> u32 {
        self.channel(channel).pending()
    }

    /// Determine whether fairness assumptions are checked
    pub fn fairness(&self) -> bool {
        self.ibus.fairness.is_some()
    }

    /// Reset the monitor
    pub fn reset(&mut self) {
        self.ibus.reset();
        self.dbus.reset();
    }
}

/// Create a new [`Builder`] for [`Monitor`]s
pub fn builder() -> Builder {
    Default::default()
}

/// Builder for [`Monitor`]
#[derive(Copy, Clone, Debug, Default)]
pub struct Builder {
    params: config::Parameters,
}

impl Builder {
    /// Create a new builder for a [`Monitor`]
    pub fn new() -> Self {
        Default::default()
    }

    /// Build the [`Monitor`] for the given [`config::Parameters`]
    ///
    /// New builders assume [`Default`] parameters.
    pub fn with_params(self, params: &config::Parameters) -> Self {
        Self { params: *params }
    }

    /// Build the [`Monitor`] with or without fairness assumptions
    pub fn with_fairness(self, fairness: bool) -> Self {
        Self {
            params: config::Parameters {
                fairness,
                ..self.params
            },
        }
    }

    /// Build the [`Monitor`]
    pub fn build(self) -> Result<Monitor, config::Error> {
        let params = self.params;
        let fairness = if params.fairness {
            if params.max_stall_cycles == 0 {
                return Err(config::Error::ZeroBound("max_stall_cycles"));
            }
            if params.max_ack_wait_cycles == 0 {
                return Err(config::Error::ZeroBound("max_ack_wait_cycles"));
            }
            Some(Fairness {
                max_stall_cycles: params.max_stall_cycles,
                max_ack_wait_cycles: params.max_ack_wait_cycles,
            })
        } else {
            None
        };

        Ok(Monitor {
            ibus: ChannelMonitor::new(Channel::Instruction, fairness),
            dbus: ChannelMonitor::new(Channel::Data, fairness),
        })
    }
}
