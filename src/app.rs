//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - installs logging
//! - fetches and sorts a program's schedule
//! - prints listings, summaries or JSON
//! - writes optional exports

use clap::Parser;

use crate::cli::{Cli, Command, GetArgs, GlobalArgs, WatersArgs};
use crate::clock::{Clock, SystemClock};
use crate::error::AppError;
use crate::logging::{self, LogSink};

pub mod pipeline;

/// Entry point for the `stocker` binary.
pub fn run() -> Result<(), AppError> {
    // `stocker` and `stocker -p winter` behave like `stocker tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = Cli::parse_from(argv);

    let sink = match cli.command {
        Command::Tui(_) => LogSink::default_file(),
        _ => LogSink::Stderr,
    };
    logging::init(cli.global.debug, sink);

    let clock = SystemClock;
    match cli.command {
        Command::Get(args) => handle_get(&cli.global, &args, &clock),
        Command::Waters(args) => handle_waters(&cli.global, &args),
        Command::Tui(args) => crate::tui::run(args, &cli.global),
    }
}

fn handle_get(global: &GlobalArgs, args: &GetArgs, clock: &dyn Clock) -> Result<(), AppError> {
    let client = pipeline::sheets_client(global)?;
    let data = pipeline::load_schedule(&client, clock, args.program, &args.waters, args.sort)?;

    if let Some(path) = &args.export {
        crate::io::write_stocking_json(path, args.program, &data, clock)?;
    }

    if args.json {
        println!("{}", crate::io::stocking_json(args.program, &data, clock)?);
        return Ok(());
    }

    if data.is_empty() && !args.waters.is_empty() {
        eprintln!("No waters matched {}.", args.waters.join(", "));
        return Ok(());
    }

    if args.summary {
        print!("{}", crate::report::format_summary_table(&data, clock));
    } else {
        print!("{}", crate::report::format_stocking(&data, args.detail_options(), clock));
    }
    Ok(())
}

fn handle_waters(global: &GlobalArgs, args: &WatersArgs) -> Result<(), AppError> {
    let client = pipeline::sheets_client(global)?;
    let programs = args.programs();
    for program in &programs {
        let names = crate::data::water_names(&client, *program)?;
        if programs.len() > 1 {
            println!("{}", program.display_name());
            for name in names {
                println!("  {name}");
            }
        } else {
            for name in names {
                println!("{name}");
            }
        }
    }
    Ok(())
}

/// Rewrite argv so `stocker` defaults to `stocker tui`.
///
/// Rules:
/// - `stocker`                        -> `stocker tui`
/// - `stocker -p winter ...`          -> `stocker tui -p winter ...`
/// - `stocker --debug get ...`        -> unchanged (a subcommand is named)
/// - `stocker --help/--version/-h`    -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let names_subcommand = argv[1..]
        .iter()
        .any(|a| matches!(a.as_str(), "get" | "waters" | "tui" | "help"));
    if names_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_opens_the_tui() {
        assert_eq!(rewrite_args(args(&["stocker"])), args(&["stocker", "tui"]));
    }

    #[test]
    fn leading_flags_go_to_the_tui() {
        assert_eq!(
            rewrite_args(args(&["stocker", "-p", "winter"])),
            args(&["stocker", "tui", "-p", "winter"])
        );
    }

    #[test]
    fn named_subcommands_are_untouched() {
        let get = args(&["stocker", "get", "-p", "cfp", "--next"]);
        assert_eq!(rewrite_args(get.clone()), get);

        let global_first = args(&["stocker", "--debug", "waters", "-p", "cfp"]);
        assert_eq!(rewrite_args(global_first.clone()), global_first);
    }

    #[test]
    fn help_and_version_are_untouched() {
        for flag in ["-h", "--help", "-V", "--version"] {
            let argv = args(&["stocker", flag]);
            assert_eq!(rewrite_args(argv.clone()), argv);
        }
    }

    #[test]
    fn rewritten_args_parse() {
        let cli = Cli::try_parse_from(rewrite_args(args(&["stocker", "-p", "summer"]))).unwrap();
        let Command::Tui(tui) = cli.command else {
            panic!("expected tui");
        };
        assert_eq!(tui.program, crate::domain::Program::SpringSummer);
    }
}
