//! Command-line interface for physio logs
//! This binary parses physio logs and renders them in the registered output formats.
//!
//! Usage:
//!   physio parse `<path>` [--format `<format>`] [--n-params `<n>`] [--config `<file>`] [--pretty]
//!   physio tokens `<path>`                                     - Dump the token stream
//!   physio list-formats                                      - List all available output formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::debug;
use physio_log::config::{Loader, PhysioConfig};
use physio_log::formats::FormatRegistry;
use physio_log::lexer::decode;
use physio_log::{ParseOptions, PhysioError};

/// Picked up from the working directory when present
const LOCAL_CONFIG: &str = "physio.toml";

fn main() {
    env_logger::init();

    let matches = Command::new("physio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting physiological monitoring logs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a log and print it in the chosen format")
                .arg(
                    Arg::new("path")
                        .help("Path to the log file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'summary', 'json', 'tree')"),
                )
                .arg(
                    Arg::new("n-params")
                        .long("n-params")
                        .short('n')
                        .value_parser(clap::value_parser!(u8).range(4..=5))
                        .help("Number of leading parameters; detected from the log when omitted"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                )
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .action(ArgAction::SetTrue)
                        .help("Pretty-print JSON output"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream of a log")
                .arg(
                    Arg::new("path")
                        .help("Path to the log file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let config = load_config(parse_matches).unwrap_or_else(|e| {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            });
            let path = parse_matches
                .get_one::<String>("path")
                .expect("path is required");
            handle_parse_command(path, &config);
        }
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches
                .get_one::<String>("path")
                .expect("path is required");
            handle_tokens_command(path);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Defaults, then `./physio.toml`, then `--config`, then flags
fn load_config(matches: &ArgMatches) -> Result<PhysioConfig, config::ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(n) = matches.get_one::<u8>("n-params") {
        loader = loader.set_override("parse.n_params", i64::from(*n))?;
    }
    if matches.get_flag("pretty") {
        loader = loader.set_override("output.pretty", true)?;
    }
    loader.build()
}

fn read_source(path: &str) -> Result<String, PhysioError> {
    let bytes = std::fs::read(path)?;
    Ok(decode(&bytes)?.to_string())
}

/// Handle the parse command
fn handle_parse_command(path: &str, config: &PhysioConfig) {
    debug!("parse {} with {:?}", path, config);
    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let registry = FormatRegistry::with_defaults(config.output.pretty);
    let output = registry
        .serialize(&source, config.parse.options(), config.output.format.name())
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str) {
    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let output = FormatRegistry::default()
        .serialize(&source, ParseOptions::default(), "tokens")
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        println!("  {}", name);
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
    }
}
