// Copyright (C) 2026 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Property tests
//!
//! Environment assumptions act as input filters: inputs rejected by the bus
//! monitor are dropped from the execution. Properties are checked after every
//! step.


mod recording;

use proptest::prelude::*;

use crate::bus::{self, ChannelSignals, Monitor};
use crate::instruction::{Class, format};
use crate::recorder::{CoreSignals, DataMem, MemAccess, Record, Recorder};
use crate::types::Channel;

/// Build a bus [`Monitor`]
fn monitor(fairness: bool) -> Monitor {
    bus::builder()
        .with_fairness(fairness)
        .build()
        .expect("Could not build monitor")
}
