// Copyright (C) 2026 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Lock-step observation of a core
//!
//! The [`Recorder`] and the bus [`Monitor`] observe the same core on the same
//! clock. This module provides the [`Observer`], which advances both by one
//! clock edge per [`Cycle`].


use crate::bus::{self, ChannelSignals, Monitor, Violation};
use crate::config;
use crate::recorder::{Probe, Record, Recorder};
use crate::types::Channel;

/// All signals observed in a single cycle
#[derive(Copy, Clone, Debug, Default)]
pub struct Cycle<P> {
    /// Core reset
    pub reset: bool,
    /// Core-wide flush of all in-flight bus requests
    pub flush: bool,
    /// Core-internal signals
    pub core: P,
    /// Instruction bus signals
    pub ibus: ChannelSignals,
    /// Data bus signals
    pub dbus: ChannelSignals,
}

/// Outputs visible after a single clock edge
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Output {
    /// Trace record
    pub record: Record,
    /// Number of pending instruction bus requests
    pub ibus_pending: u32,
    /// Number of pending data bus requests
    pub dbus_pending: u32,
}

/// Observer of a single core
#[derive(Clone, Debug)]
pub struct Observer {
    recorder: Recorder,
    monitor: Monitor,
}

impl Observer {
    /// Create a new observer for the given [`config::Parameters`]
    pub fn new(params: &config::Parameters) -> Result<Self, config::Error> {
        bus::builder()
            .with_params(params)
            .build()
            .map(Self::with_monitor)
    }

    /// Create a new observer using the given bus [`Monitor`]
    pub fn with_monitor(monitor: Monitor) -> Self {
        Self {
            recorder: Default::default(),
            monitor,
        }
    }

    /// Advance by a single clock edge
    ///
    /// During reset, both the recorder and the monitor are reset and no
    /// assumptions are checked. Otherwise, the bus assumptions are checked
    /// first. If they are violated, the [`Violation`] is returned and neither
    /// the recorder nor the monitor advance.
    pub fn step<P: Probe>(&mut self, cycle: &Cycle<P>) -> Result<Output, Violation> {
        if cycle.reset {
            self.monitor.reset();
        } else {
            self.monitor.step(cycle.flush, cycle.ibus, cycle.dbus)?;
        }
        let record = *self.recorder.step(cycle.reset, &cycle.core);

        Ok(Output {
            record,
            ibus_pending: self.monitor.pending(Channel::Instruction),
            dbus_pending: self.monitor.pending(Channel::Data),
        })
    }

    /// Retrieve the [`Recorder`]
    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    /// Retrieve the bus [`Monitor`]
    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }
}
