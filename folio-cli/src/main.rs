// Command-line interface for folio
//
// This binary converts documents between the structural (tag-based) and lightweight (plain-text)
// markup dialects, renders standalone preview documents, and runs live preview sessions.
//
// The core capabilities live in the folio-babel crate; this crate is the shell around it: it reads
// files, loads configuration, installs logging and reports errors.
//
// Converting:
//
// The conversion needs a from and to pair. The from is auto-detected from the file extension
// (.html/.htm are structural, .md/.markdown are lightweight), while being overwrittable by an
// explicit --from flag.
// Usage:
//  folio <input> --to <mode> [--from <mode>] [--output <file>]          - Convert (default)
//  folio convert <input> --to <mode> [--from <mode>] [--output <file>]  - Same as above (explicit)
//  folio render <input> [--mode <mode>] [--output <file>]               - Standalone preview document
//  folio preview <input> [--mode <mode>] [--dir <dir>] [--no-browser]   - Live preview session
//  folio generate-css                                                   - Print the preview stylesheet
//  folio --list-modes [--json]                                          - List modes and conversions
//
// Logging goes to stderr. The filter comes from FOLIO_LOG when set, otherwise from the
// `logging.level` configuration key.

mod session;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use folio_babel::preview::{document::PREVIEW_CSS, render_document, FileHost};
use folio_babel::{ConverterRegistry, Mode, PreviewManager, PreviewOptions};
use folio_config::{FolioConfig, Loader};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const DIALECTS: &[&str] = &["structural", "lightweight"];
const MODES: &[&str] = &["structural", "lightweight", "preview", "split-a", "split-b"];
const SUBCOMMANDS: &[&str] = &["convert", "render", "preview", "generate-css", "help"];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn mode_arg() -> Arg {
    Arg::new("mode")
        .long("mode")
        .help("Mode of the input (auto-detected from the file extension if not specified)")
        .long_help(
            "Mode the input content is in.\n\n\
            If not specified, .html/.htm files are structural and .md/.markdown files are\n\
            lightweight. Anything else falls back to `convert.default_mode` from the\n\
            configuration.",
        )
        .value_parser(clap::builder::PossibleValuesParser::new(MODES))
        .value_hint(ValueHint::Other)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("folio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between structural and lightweight markup, with live preview")
        .long_about(
            "folio converts documents between a structural, tag-based markup dialect and a\n\
            lightweight plain-text dialect, and keeps an external preview in sync while you edit.\n\n\
            Commands:\n  \
            - convert:      Convert between the two dialects (default command)\n  \
            - render:       Write a standalone preview document\n  \
            - preview:      Watch a file and keep a preview document up to date\n  \
            - generate-css: Print the stylesheet embedded in preview documents\n\n\
            Examples:\n  \
            folio notes.md --to structural            # Convert to structural markup (stdout)\n  \
            folio page.html --to lightweight -o a.md  # Convert to a lightweight file\n  \
            folio render notes.md -o notes.html       # Standalone preview document\n  \
            folio preview notes.md                    # Live preview in the browser",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-modes")
                .long("list-modes")
                .help("List modes and available conversions")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print --list-modes output as JSON")
                .requires("list-modes")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a folio.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between the structural and lightweight dialects (default command)")
                .long_about(
                    "Convert a document from one dialect to the other.\n\n\
                    Dialects:\n  \
                    - structural:  tag-based markup (.html, .htm)\n  \
                    - lightweight: plain-text markup (.md, .markdown)\n\n\
                    The source dialect is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    folio convert notes.md --to structural        # Structural markup (stdout)\n  \
                    folio convert page.html --to lightweight      # Lightweight markup (stdout)\n  \
                    folio notes.txt --from lightweight --to structural\n  \
                    folio notes.md --to structural                # 'convert' is optional",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source dialect (auto-detected from file extension if not specified)")
                        .value_parser(clap::builder::PossibleValuesParser::new(DIALECTS))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target dialect (required)")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(DIALECTS))
                        .value_hint(ValueHint::Other),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("render")
                .about("Render a standalone preview document")
                .long_about(
                    "Wrap the input in the same standalone document a live preview shows.\n\n\
                    Lightweight input is converted to structural markup first; structural\n\
                    input is embedded as it is.\n\n\
                    Examples:\n  \
                    folio render notes.md                  # Print the document\n  \
                    folio render notes.md -o notes.html    # Write it to a file",
                )
                .arg(input_arg())
                .arg(mode_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("preview")
                .about("Keep a preview document in sync with a file")
                .long_about(
                    "Watch the input file and keep a standalone preview document up to date.\n\n\
                    The preview is written to a file in the preview directory and opened in the\n\
                    system browser. Edits to the input are picked up on the watch interval and\n\
                    pushed after the debounce period. The session ends when the preview file is\n\
                    deleted or the input file disappears.\n\n\
                    Examples:\n  \
                    folio preview notes.md                        # Preview in the browser\n  \
                    folio preview notes.md --no-browser --dir .   # Just keep ./preview-*.html fresh",
                )
                .arg(input_arg())
                .arg(mode_arg())
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .help("Directory for the preview file (defaults to the configured one)")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("no-browser")
                        .long("no-browser")
                        .help("Do not open the preview in the system browser")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the stylesheet embedded in preview documents")
                .long_about(
                    "Outputs the static stylesheet every preview document carries.\n\n\
                    Examples:\n  \
                    folio generate-css                 # Print CSS to stdout\n  \
                    folio generate-css > preview.css   # Save to a file",
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the first arg looks like a file
            if args.len() > 1
                && !args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&args[1].as_str())
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    init_logging(&config);

    if matches.get_flag("list-modes") {
        handle_list_modes_command(matches.get_flag("json"));
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = required(sub_matches, "input");
            let to = parse_mode(required(sub_matches, "to"));

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(raw) => parse_mode(raw),
                None => Mode::from_extension(input).unwrap_or_else(|| {
                    eprintln!("Error: Could not detect dialect from filename '{input}'");
                    eprintln!("Please specify --from explicitly");
                    std::process::exit(1);
                }),
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, from, to, output);
        }
        Some(("render", sub_matches)) => {
            let input = required(sub_matches, "input");
            let mode = input_mode(sub_matches, input, &config);
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_render_command(input, mode, output, &config);
        }
        Some(("preview", sub_matches)) => {
            let input = required(sub_matches, "input");
            let mode = input_mode(sub_matches, input, &config);
            let dir = sub_matches
                .get_one::<String>("dir")
                .map(PathBuf::from)
                .unwrap_or_else(|| config.preview.dir());
            let open_browser = config.preview.open_browser && !sub_matches.get_flag("no-browser");
            handle_preview_command(input, mode, dir, open_browser, &config);
        }
        Some(("generate-css", _)) => {
            handle_generate_css_command();
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(input: &str, from: Mode, to: Mode, output: Option<&str>) {
    let source = read_input(input);

    let result = if from == to {
        source
    } else {
        let registry = ConverterRegistry::with_defaults();
        registry.convert(&source, from, to).unwrap_or_else(|e| {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        })
    };

    write_output(output, &result);
}

/// Handle the render command
fn handle_render_command(input: &str, mode: Mode, output: Option<&str>, config: &FolioConfig) {
    let source = read_input(input);
    let options = PreviewOptions::from(&config.preview);
    write_output(output, &render_document(&source, mode, &options));
}

/// Handle the preview command
fn handle_preview_command(
    input: &str,
    mode: Mode,
    dir: PathBuf,
    open_browser: bool,
    config: &FolioConfig,
) {
    let host = FileHost::new(dir).with_browser(open_browser);
    let mut manager = PreviewManager::new(host, PreviewOptions::from(&config.preview));

    let watch = session::Watch {
        input: PathBuf::from(input),
        mode,
        interval: config.preview.watch_interval(),
    };

    match session::run(&mut manager, &watch, |path| println!("Preview: {}", path.display())) {
        Ok(end) => eprintln!("{end}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the generate-css command
fn handle_generate_css_command() {
    print!("{PREVIEW_CSS}");
}

/// Handle the list-modes command
fn handle_list_modes_command(json: bool) {
    let registry = ConverterRegistry::with_defaults();

    if json {
        let listing = serde_json::json!({
            "modes": Mode::ALL,
            "conversions": registry
                .list_pairs()
                .into_iter()
                .map(|(from, to)| serde_json::json!({ "from": from, "to": to }))
                .collect::<Vec<_>>(),
        });
        match serde_json::to_string_pretty(&listing) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Modes:");
    for mode in Mode::ALL {
        let kind = if mode.is_dialect() { "dialect" } else { "view" };
        println!("  {:<12} {kind}", mode.as_str());
    }

    println!("\nConversions:");
    for (from, to) in registry.list_pairs() {
        let converter = registry.get(from, to).map(|c| c.name()).unwrap_or_default();
        println!("  {from} -> {to}  ({converter})");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> FolioConfig {
    Loader::layered(explicit_path.map(Path::new)).build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn init_logging(config: &FolioConfig) {
    let filter = EnvFilter::try_from_env("FOLIO_LOG")
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|err| {
            eprintln!("Invalid log filter: {err}");
            std::process::exit(1);
        });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Mode from --mode, else from the file extension, else the configured default.
fn input_mode(matches: &ArgMatches, input: &str, config: &FolioConfig) -> Mode {
    match matches.get_one::<String>("mode") {
        Some(raw) => parse_mode(raw),
        None => Mode::from_extension(input).unwrap_or(config.convert.default_mode),
    }
}

fn parse_mode(raw: &str) -> Mode {
    raw.parse().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(|s| s.as_str())
        .unwrap_or_else(|| {
            eprintln!("Error: missing required argument '{id}'");
            std::process::exit(1);
        })
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn write_output(output: Option<&str>, text: &str) {
    match output {
        Some(path) => fs::write(path, text).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        }),
        None => print!("{text}"),
    }
}
