//! intmat: interactive named-matrix shell.
//!
//! Reads one command per line from stdin and reports each outcome on stdout.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use intmat_shell::{help_text, Interpreter, ShellConfig};
use intmat_table::{MatrixTable, TableConfig};
use log::{error, info};

const OPTIONS: &str = "\
Usage: intmat [options]

Options:
  --capacity <n>   number of table slots (default 10)
  --seed <u64>     seed for `random` (default: drawn from the OS)
  --dir <path>     directory for `write` and relative `read` paths (default .)
  --no-bootstrap   skip creating and writing temp_mat at startup
  --help           print this message";

fn usage() -> String {
    format!(
        "{OPTIONS}\n\nCommands (one per line, `exit` to quit):\n{}",
        help_text()
    )
}

struct Options {
    config: ShellConfig,
    bootstrap: bool,
}

enum Parsed {
    Run(Options),
    Help,
}

fn parse_args(args: &[String]) -> Result<Parsed, String> {
    let mut config = ShellConfig::default();
    let mut bootstrap = true;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--capacity" => {
                let v = iter.next().ok_or("--capacity needs a value")?;
                let capacity = v
                    .parse()
                    .map_err(|_| format!("invalid --capacity value: {v}"))?;
                config.table = TableConfig::new(capacity);
            }
            "--seed" => {
                let v = iter.next().ok_or("--seed needs a value")?;
                config.seed = Some(v.parse().map_err(|_| format!("invalid --seed value: {v}"))?);
            }
            "--dir" => {
                let v = iter.next().ok_or("--dir needs a value")?;
                config.data_dir = PathBuf::from(v);
            }
            "--no-bootstrap" => bootstrap = false,
            "--help" | "-h" => return Ok(Parsed::Help),
            other => return Err(format!("unknown option: {other}")),
        }
    }
    Ok(Parsed::Run(Options { config, bootstrap }))
}

fn bootstrap(interp: &mut Interpreter, table: &mut MatrixTable) -> Result<(), String> {
    for line in ["create temp_mat 5 5", "random temp_mat 10 15", "write temp_mat"] {
        let outcome = interp
            .execute_line(table, line)
            .map_err(|e| format!("bootstrap `{line}` failed: {e}"))?;
        info!("bootstrap: {outcome}");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Parsed::Run(options)) => options,
        Ok(Parsed::Help) => {
            println!("{}", usage());
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("{msg}\n\n{}", usage());
            return ExitCode::from(2);
        }
    };

    let mut interp = match Interpreter::new(options.config) {
        Ok(interp) => interp,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return ExitCode::from(2);
        }
    };
    let mut table = match MatrixTable::new(interp.config().table.clone()) {
        Ok(table) => table,
        Err(e) => {
            error!("table allocation failed: {e}");
            eprintln!("{e}");
            return ExitCode::from(1);
        }
    };
    info!("random seed: {}", interp.seed());

    if options.bootstrap {
        if let Err(msg) = bootstrap(&mut interp, &mut table) {
            error!("{msg}");
            eprintln!("{msg}");
            return ExitCode::from(1);
        }
    }

    match repl(&mut interp, &mut table) {
        Ok(()) => {
            let released = table.teardown();
            info!("released {released} matrices");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("terminal i/o failed: {e}");
            ExitCode::from(1)
        }
    }
}

fn repl(interp: &mut Interpreter, table: &mut MatrixTable) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        if is_exit(&line) {
            return Ok(());
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        interp.run_line(table, trimmed, &mut out)?;
    }
}

/// Only the literal line `exit` ends the session.
fn is_exit(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == "exit"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_must_be_the_whole_line() {
        assert!(is_exit("exit\n"));
        assert!(is_exit("exit\r\n"));
        assert!(is_exit("exit"));
        assert!(!is_exit("  exit  \n"));
        assert!(!is_exit("exit now\n"));
        assert!(!is_exit("Exit\n"));
    }

    #[test]
    fn usage_includes_the_command_grammar() {
        let text = usage();
        assert!(text.starts_with("Usage: intmat"));
        assert!(text.contains("create <name> <rows> <cols>"));
        assert!(text.contains("insert a new zero-filled matrix"));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        let args = vec!["--frobnicate".to_string()];
        assert!(parse_args(&args).is_err());
        let args = vec!["--seed".to_string()];
        assert!(parse_args(&args).is_err());
    }
}
