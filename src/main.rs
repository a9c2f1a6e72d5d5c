mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use my_math::demo::{self, Report};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match cli.command {
        Command::Add { a, b } => {
            let sum = my_math::try_add(a, b)?;
            println!("{sum}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Demo => {
            let cases = demo::cases();
            info!(count = cases.len(), "running demo suite");
            let report = demo::run(&cases);
            println!("{report}");
            Ok(ExitCode::from(exit_status(&report)))
        }
    }
}

/// Process exit status for a finished suite: 1 if any case failed.
fn exit_status(report: &Report) -> u8 {
    if report.is_success() {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_suite_exits_with_failure() {
        let report = demo::run(&demo::cases());
        assert_eq!(exit_status(&report), 1);
    }

    #[test]
    fn passing_suite_exits_with_success() {
        let report = demo::run(&demo::cases()[..1]);
        assert_eq!(exit_status(&report), 0);
    }

    #[test]
    fn parse_add() {
        let cli = Cli::try_parse_from(["my-math", "add", "2", "3"]).unwrap();
        assert_eq!(cli.command, Command::Add { a: 2, b: 3 });
        assert_eq!(cli.log_directive(), "warn");
    }

    #[test]
    fn parse_add_negative() {
        let cli = Cli::try_parse_from(["my-math", "add", "-4", "3"]).unwrap();
        assert_eq!(cli.command, Command::Add { a: -4, b: 3 });
    }

    #[test]
    fn parse_demo_verbose() {
        let cli = Cli::try_parse_from(["my-math", "demo", "-vv"]).unwrap();
        assert_eq!(cli.command, Command::Demo);
        assert_eq!(cli.log_directive(), "trace");
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Cli::try_parse_from(["my-math", "add", "3000000000", "1"]).is_err());
    }
}
