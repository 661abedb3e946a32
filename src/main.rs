use cliproc::Cli;
use std::env;
use std::process::ExitCode;
use vtbgen::commands::vtbgen::Vtbgen;

fn main() -> ExitCode {
    Cli::default().parse(env::args()).go::<Vtbgen>()
}
