// Copyright (C) 2026 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! CSV-driven observer replay
//!
//! This program replays per-cycle core and bus signals dumped from a
//! simulation of a core in CSV format, printing the RVFI record and the
//! pending bus requests after every clock edge. The input is supplied as a
//! positional parameter. Optionally, monitoring parameters may be supplied in
//! the form of a TOML file (such as `params.toml` in this directory). Cycles
//! violating an environment assumption are reported and skipped.

use std::path::PathBuf;

use riscv_rvfi::bus::ChannelSignals;
use riscv_rvfi::observer::{Cycle, Observer};
use riscv_rvfi::recorder::{DataMem, Probe};

fn main() {
    use std::io::BufRead;

    let matches = clap::Command::new("RVFI observer replay")
        .arg(
            clap::arg!(<input> "Path to the per-cycle signal dump")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            clap::arg!(-p --params <FILE> "Monitoring parameters")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            clap::arg!(--fairness "Enable fairness assumptions")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::arg!(--"valid-only" "Only print valid records")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::arg!(-d --debug "Enable additional debug output")
                .env("DEBUG")
                .action(clap::ArgAction::SetTrue)
                .value_parser(clap::builder::FalseyValueParser::new()),
        )
        .get_matches();

    let mut logger = env_logger::Builder::from_default_env();
    if matches.get_flag("debug") {
        logger.filter_level(log::LevelFilter::Trace);
    }
    logger.init();

    let mut params: riscv_rvfi::config::Parameters = matches
        .get_one::<PathBuf>("params")
        .map(|p| {
            let params = std::fs::read_to_string(p).expect("Could not load parameters");
            toml::from_str(params.as_ref()).expect("Could not parse parameters")
        })
        .unwrap_or_default();
    if matches.get_flag("fairness") {
        params.fairness = true;
    }
    log::debug!("Parameters: {params:?}");

    let input = matches
        .get_one::<PathBuf>("input")
        .expect("No input file specified");
    let input = std::fs::File::open(input).expect("Could not open input file");
    let mut input = std::io::BufReader::new(input).lines();

    // The dump comes with a header, which we need to consume
    let header = input
        .next()
        .expect("No header in input")
        .expect("Could not extract header from input");
    assert_eq!(header.trim_end(), HEADER);

    let mut observer = Observer::new(&params).expect("Could not set up observer");
    let valid_only = matches.get_flag("valid-only");
    let mut rejected = 0usize;

    input
        .map(|l| l.expect("Could not read line"))
        .filter(|l| !l.trim().is_empty())
        .enumerate()
        .for_each(|(n, l)| {
            let cycle = l
                .parse::<CSVLine>()
                .map(Cycle::from)
                .expect("Could not parse line");
            match observer.step(&cycle) {
                Ok(output) => {
                    if !valid_only || output.record.valid() {
                        println!(
                            "{n:>6}: {} [ibus: {}, dbus: {}]",
                            output.record, output.ibus_pending, output.dbus_pending
                        );
                    }
                }
                Err(violation) => {
                    rejected += 1;
                    eprintln!("{n:>6}: skipped, {violation}");
                }
            }
        });

    println!(
        "{} instructions committed, {rejected} cycles skipped",
        observer.recorder().order()
    );
}

const HEADER: &str = "reset,flush,valid,exception,trap,insn,branch_taken,pc,jump_target,\
    exception_vector,reg_we,reg_wdata,rs1_rdata,rs2_rdata,dmem_sel,dmem_addr,dmem_rdata,\
    dmem_wdata,ibus_cyc,ibus_stb,ibus_stall,ibus_ack,dbus_cyc,dbus_stb,dbus_stall,dbus_ack";

/// A single cycle of the signal dump
///
/// Single bit signals are given as `0` or `1`, all other values in hex.
#[derive(Copy, Clone, Debug)]
struct CSVLine {
    reset: bool,
    flush: bool,
    valid: bool,
    exception: bool,
    trap: bool,
    insn: u32,
    branch_taken: bool,
    pc: u32,
    jump_target: u32,
    exception_vector: u32,
    reg_write: Option<u32>,
    reg_read: [u32; 2],
    data_mem: DataMem,
    ibus: ChannelSignals,
    dbus: ChannelSignals,
}

impl std::str::FromStr for CSVLine {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.trim_end().split(',').map(str::trim);
        let mut bit = || match fields.next() {
            Some("0") => Ok(false),
            Some("1") => Ok(true),
            _ => Err(line.to_owned()),
        };
        let reset = bit()?;
        let flush = bit()?;
        let valid = bit()?;
        let exception = bit()?;
        let trap = bit()?;

        let mut hex = || {
            fields
                .next()
                .and_then(|f| u32::from_str_radix(f, 16).ok())
                .ok_or_else(|| line.to_owned())
        };
        let insn = hex()?;
        let branch_taken = hex()? != 0;
        let pc = hex()?;
        let jump_target = hex()?;
        let exception_vector = hex()?;
        let reg_we = hex()? != 0;
        let reg_wdata = hex()?;
        let reg_read = [hex()?, hex()?];
        let sel = hex()?.try_into().map_err(|_| line.to_owned())?;
        let data_mem = DataMem {
            sel,
            addr: hex()?,
            rdata: hex()?,
            wdata: hex()?,
        };

        let mut channel = || -> Result<ChannelSignals, String> {
            Ok(ChannelSignals {
                cyc: hex()? != 0,
                stb: hex()? != 0,
                stall: hex()? != 0,
                ack: hex()? != 0,
            })
        };
        let ibus = channel()?;
        let dbus = channel()?;

        Ok(Self {
            reset,
            flush,
            valid,
            exception,
            trap,
            insn,
            branch_taken,
            pc,
            jump_target,
            exception_vector,
            reg_write: reg_we.then_some(reg_wdata),
            reg_read,
            data_mem,
            ibus,
            dbus,
        })
    }
}

impl Probe for CSVLine {
    fn valid(&self) -> bool {
        self.valid
    }

    fn exception(&self) -> bool {
        self.exception
    }

    fn trap(&self) -> bool {
        self.trap
    }

    fn insn(&self) -> u32 {
        self.insn
    }

    fn branch_taken(&self) -> bool {
        self.branch_taken
    }

    fn pc(&self) -> u32 {
        self.pc
    }

    fn jump_target(&self) -> u32 {
        self.jump_target
    }

    fn exception_vector(&self) -> u32 {
        self.exception_vector
    }

    fn reg_write(&self) -> Option<u32> {
        self.reg_write
    }

    fn reg_read(&self) -> [u32; 2] {
        self.reg_read
    }

    fn data_mem(&self) -> DataMem {
        self.data_mem
    }
}

impl From<CSVLine> for Cycle<CSVLine> {
    fn from(line: CSVLine) -> Self {
        Self {
            reset: line.reset,
            flush: line.flush,
            core: line,
            ibus: line.ibus,
            dbus: line.dbus,
        }
    }
}
