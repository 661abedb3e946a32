//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use crate::commands::helps::vtbgen;
use crate::core::config::TbConfig;
use crate::core::testbench::Testbench;
use crate::error::{Error, Hint};
use crate::util::anyerror::Fault;
use crate::util::filesystem;
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Command, Help};

#[derive(Debug, PartialEq)]
pub struct Vtbgen {
    clock: Option<String>,
    period: Option<u64>,
    timescale: Option<String>,
    sim_time: Option<u64>,
    json: bool,
    verbose: bool,
    /// every input source followed by the module name
    args: Vec<String>,
}

impl Command for Vtbgen {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(vtbgen::HELP))?;
        let mut command = Vtbgen {
            // flags
            json: cli.check(Arg::flag("json"))?,
            verbose: cli.check(Arg::flag("verbose").switch('v'))?,
            // options
            clock: cli.get(Arg::option("clock").switch('c').value("name"))?,
            period: cli.get(Arg::option("period").switch('p').value("num"))?,
            timescale: cli.get(Arg::option("timescale").switch('t').value("unit"))?,
            sim_time: cli.get(Arg::option("sim-time").switch('s').value("num"))?,
            args: Vec::new(),
        };
        // positionals are variadic up to the trailing module name
        while let Some(arg) = cli.get(Arg::positional("input"))? {
            command.args.push(arg);
        }
        Ok(command)
    }

    fn execute(self) -> proc::Result {
        Self::init_logging(self.verbose);
        let (inputs, name) = self.split_args()?;
        Self::check_period(self.period)?;

        let config = TbConfig::new()
            .clock_name(self.clock.clone())
            .clock_period(self.period)
            .timescale(self.timescale.clone())
            .sim_time(self.sim_time);

        self.run(&inputs, &name, config, &env::current_dir()?)?;
        Ok(())
    }
}

impl Vtbgen {
    fn init_logging(verbose: bool) {
        let level = match verbose {
            true => "debug",
            false => "info",
        };
        // a subscriber may already be installed when running in-process
        let _ = tracing_subscriber::fmt()
            .with_env_filter(level)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Separates the input sources from the trailing module name.
    fn split_args(&self) -> Result<(Vec<PathBuf>, String), Error> {
        match self.args.split_last() {
            Some((name, inputs)) if inputs.is_empty() == false => Ok((
                inputs.iter().map(|i| PathBuf::from(i)).collect(),
                name.clone(),
            )),
            _ => Err(Error::MissingPositionals(Hint::Usage)),
        }
    }

    /// Rejects clock periods that would halve to a zero delay.
    fn check_period(period: Option<u64>) -> Result<(), Error> {
        match period {
            Some(p) if p < 2 => Err(Error::ClockPeriodTooSmall(p)),
            _ => Ok(()),
        }
    }

    /// Parses the module under test and writes all of its artifacts into `out_dir`.
    pub fn run(
        &self,
        inputs: &[PathBuf],
        name: &str,
        config: TbConfig,
        out_dir: &Path,
    ) -> Result<(), Fault> {
        let tb = Testbench::load(inputs, name, config)?;

        if self.json == true {
            println!("{}", serde_json::to_string_pretty(tb.get_module())?);
        }

        let written = filesystem::write_all_or_none(out_dir, &tb.into_artifacts())?;
        written.iter().for_each(|p| info!("generated {}", p.display()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn command(args: &[&str]) -> Vtbgen {
        Vtbgen {
            clock: None,
            period: None,
            timescale: None,
            sim_time: None,
            json: false,
            verbose: false,
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn split_positionals() {
        let (inputs, name) = command(&["a.v", "b.v", "top"]).split_args().unwrap();
        assert_eq!(inputs, vec![PathBuf::from("a.v"), PathBuf::from("b.v")]);
        assert_eq!(name, "top");
    }

    #[test]
    fn missing_positionals() {
        assert_eq!(
            command(&["top"]).split_args(),
            Err(Error::MissingPositionals(Hint::Usage))
        );
        assert_eq!(
            command(&[]).split_args(),
            Err(Error::MissingPositionals(Hint::Usage))
        );
    }

    #[test]
    fn clock_period_lower_bound() {
        assert_eq!(Vtbgen::check_period(Some(0)), Err(Error::ClockPeriodTooSmall(0)));
        assert_eq!(Vtbgen::check_period(Some(1)), Err(Error::ClockPeriodTooSmall(1)));
        assert_eq!(Vtbgen::check_period(Some(2)), Ok(()));
        assert_eq!(Vtbgen::check_period(None), Ok(()));
    }

    #[test]
    fn run_writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("foo.v");
        fs::write(&src, "module foo(input clk, output [3:0] q);\nendmodule\n").unwrap();

        command(&[])
            .run(&[src.clone()], "foo", TbConfig::new(), dir.path())
            .unwrap();

        for f in ["foo_tb.sv", "foo_tb.do", "foo_tb.mk"] {
            assert_eq!(dir.path().join(f).exists(), true);
        }
        let tb = fs::read_to_string(dir.path().join("foo_tb.sv")).unwrap();
        assert_eq!(tb.contains("  reg clk;\n  wire [3:0] q;\n"), true);
    }

    #[test]
    fn run_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("foo.v");
        fs::write(&src, "module foo(input clk, output [3:0] q);\nendmodule\n").unwrap();

        assert!(command(&[])
            .run(&[src.clone()], "bar", TbConfig::new(), dir.path())
            .is_err());
        // only the source file remains
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
