// Copyright (C) 2026 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Properties of recorded traces

use super::*;

proptest! {
    #[test]
    fn order_counts_commits(cycles in prop::collection::vec(strategy::core_signals(), 0..64)) {
        let mut recorder = Recorder::new();
        let mut expected = 0;
        for signals in &cycles {
            let record = recorder.step(false, signals);
            if signals.valid {
                prop_assert_eq!(record.order(), expected);
                expected += 1;
            }
            prop_assert_eq!(recorder.order(), expected);
        }
        let commits = cycles.iter().filter(|s| s.valid).count();
        prop_assert_eq!(recorder.order(), commits as u64);
    }

    #[test]
    fn idle_records_hold_no_data(cycles in prop::collection::vec(strategy::core_signals(), 0..64)) {
        let mut recorder = Recorder::new();
        for signals in cycles.iter().filter(|s| !s.valid) {
            let order = recorder.order();
            let record = recorder.step(false, signals);
            prop_assert!(!record.valid());
            prop_assert_eq!(record.order(), order);
            prop_assert_eq!(record.insn(), 0);
            prop_assert_eq!((record.pc_rdata(), record.pc_wdata()), (0, 0));
            prop_assert_eq!((record.rs1_addr(), record.rs1_rdata()), (0, 0));
            prop_assert_eq!((record.rs2_addr(), record.rs2_rdata()), (0, 0));
            prop_assert_eq!((record.rd_addr(), record.rd_wdata()), (0, 0));
            prop_assert_eq!(record.mem(), &MemAccess::None);
            prop_assert!(!record.trap());
            prop_assert!(!record.intr());
        }
    }

    #[test]
    fn x0_writes_void(signals in strategy::core_signals(), data in any::<u32>()) {
        let signals = CoreSignals {
            valid: true,
            insn: signals.insn & !0xf80,
            reg_write: Some(data),
            ..signals
        };
        let mut recorder = Recorder::new();
        let record = recorder.step(false, &signals);
        prop_assert_eq!(record.rd_addr(), 0);
        prop_assert_eq!(record.rd_wdata(), 0);
    }

    #[test]
    fn fields_zeroed_when_unused(signals in strategy::core_signals()) {
        let signals = CoreSignals { valid: true, ..signals };
        let class = Class::decode(signals.insn);
        let mut recorder = Recorder::new();
        let record = recorder.step(false, &signals);

        if class.uses_rs1(signals.insn) {
            prop_assert_eq!(record.rs1_addr(), format::rs1(signals.insn));
            prop_assert_eq!(record.rs1_rdata(), signals.rs1_rdata);
        } else {
            prop_assert_eq!((record.rs1_addr(), record.rs1_rdata()), (0, 0));
        }
        if class.uses_rs2() {
            prop_assert_eq!(record.rs2_addr(), format::rs2(signals.insn));
            prop_assert_eq!(record.rs2_rdata(), signals.rs2_rdata);
        } else {
            prop_assert_eq!((record.rs2_addr(), record.rs2_rdata()), (0, 0));
        }
        if signals.reg_write.is_none() {
            prop_assert_eq!((record.rd_addr(), record.rd_wdata()), (0, 0));
        }
        if !class.load && !class.store {
            prop_assert_eq!(record.mem(), &MemAccess::None);
        }
    }

    #[test]
    fn memory_access_exclusive(cycles in prop::collection::vec(strategy::core_signals(), 0..64)) {
        let mut recorder = Recorder::new();
        for signals in &cycles {
            let record = recorder.step(false, signals);
            prop_assert!(!(record.mem_rmask() != 0 && record.mem_wmask() != 0));
            match record.mem() {
                MemAccess::None => {
                    prop_assert_eq!((record.mem_rmask(), record.mem_rdata()), (0, 0));
                    prop_assert_eq!((record.mem_wmask(), record.mem_wdata()), (0, 0));
                    prop_assert_eq!(record.mem_addr(), 0);
                }
                MemAccess::Read { .. } => {
                    prop_assert_eq!((record.mem_wmask(), record.mem_wdata()), (0, 0));
                }
                MemAccess::Write { .. } => {
                    prop_assert_eq!((record.mem_rmask(), record.mem_rdata()), (0, 0));
                }
            }
            if signals.trap {
                prop_assert_eq!(record.mem(), &MemAccess::None);
            }
        }
    }

    #[test]
    fn trap_suppresses_memory(signals in strategy::core_signals(), load in any::<bool>()) {
        let class = Class {
            load,
            store: !load,
            ..Default::default()
        };
        let signals = CoreSignals {
            valid: true,
            trap: true,
            class: Some(class),
            data_mem: DataMem {
                sel: 0xf,
                ..signals.data_mem
            },
            ..signals
        };
        let mut recorder = Recorder::new();
        let record = recorder.step(false, &signals);
        prop_assert_eq!(record.mem_wmask(), 0);
        prop_assert_eq!(record.mem_rmask(), 0);
        prop_assert_eq!(record.pc_wdata(), signals.exception_vector);
    }

    #[test]
    fn intr_marks_handler_entry(
        prefix in prop::collection::vec(strategy::core_signals(), 0..16),
        trap in strategy::core_signals(),
        gap in prop::collection::vec(strategy::core_signals(), 0..8),
        handler in prop::collection::vec(strategy::core_signals(), 2..4),
        synchronous in any::<bool>(),
    ) {
        let mut recorder = Recorder::new();
        for signals in &prefix {
            recorder.step(false, signals);
        }

        recorder.step(false, &CoreSignals {
            exception: !synchronous,
            trap: synchronous,
            ..trap
        });

        for signals in &gap {
            let record = recorder.step(false, &CoreSignals {
                valid: false,
                exception: false,
                trap: false,
                ..*signals
            });
            prop_assert!(!record.intr());
        }

        for (n, signals) in handler.iter().enumerate() {
            let record = recorder.step(false, &CoreSignals {
                valid: true,
                exception: false,
                trap: false,
                ..*signals
            });
            prop_assert_eq!(record.intr(), n == 0);
        }
    }

    #[test]
    fn reset_clears_everything(
        cycles in prop::collection::vec(strategy::core_signals(), 0..32),
        signals in strategy::core_signals(),
    ) {
        let mut recorder = Recorder::new();
        for signals in &cycles {
            recorder.step(false, signals);
        }
        let record = *recorder.step(true, &signals);
        prop_assert_eq!(record, Record::default());
        prop_assert_eq!(recorder.order(), 0);
        prop_assert!(!recorder.trap_entry());
    }
}
