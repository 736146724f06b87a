use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the mode tokens from folio-babel's Mode.
// We need to duplicate this here since build scripts can't access src/ modules
const DIALECTS: &[&str] = &["structural", "lightweight"];
const MODES: &[&str] = &["structural", "lightweight", "preview", "split-a", "split-b"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let input = || {
        Arg::new("input")
            .help("Input file path")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };
    let mode = || {
        Arg::new("mode")
            .long("mode")
            .value_parser(clap::builder::PossibleValuesParser::new(MODES))
    };

    let mut cmd = Command::new("folio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between structural and lightweight markup, with live preview")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-modes")
                .long("list-modes")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .requires("list-modes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .arg(input())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_parser(clap::builder::PossibleValuesParser::new(DIALECTS)),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(DIALECTS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("render").arg(input()).arg(mode()).arg(
                Arg::new("output")
                    .long("output")
                    .short('o')
                    .value_hint(ValueHint::FilePath),
            ),
        )
        .subcommand(
            Command::new("preview")
                .arg(input())
                .arg(mode())
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("no-browser")
                        .long("no-browser")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("generate-css"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "folio", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "folio", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "folio", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
