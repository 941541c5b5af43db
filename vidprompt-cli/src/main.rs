//! Command-line interface for vidprompt
//! This binary builds a video prompt state from presets, intents and field edits, and prints it
//! in one of the supported output formats.
//!
//! Usage:
//!   vidprompt render [--preset `<id>`] [--set `<key=value>`]... [--format `<format>`]  - Render a state
//!   vidprompt presets [--category `<c>`] [--model `<m>`] [--tag `<t>`]             - List presets
//!   vidprompt intents                                                           - List intents
//!   vidprompt formats                                                           - List output formats

mod commands;
mod error;
mod logging;

use clap::{Arg, ArgAction, ArgMatches, Command};
use commands::RenderRequest;
use std::path::PathBuf;
use vidprompt_config::{Loader, VidpromptConfig};

fn cli() -> Command {
    Command::new("vidprompt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build video generation prompts and render them as JSON, YAML, Markdown or prose")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults (and ./vidprompt.toml)"),
        )
        .subcommand(
            Command::new("render")
                .about("Render a builder state")
                .arg(
                    Arg::new("preset")
                        .long("preset")
                        .short('p')
                        .help("Start from this preset id"),
                )
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .conflicts_with("preset")
                        .help("Start from a builder state saved as JSON"),
                )
                .arg(
                    Arg::new("prompt")
                        .long("prompt")
                        .help("Prompt text (replaces the preset template)"),
                )
                .arg(Arg::new("model").long("model").short('m').help("Target model"))
                .arg(
                    Arg::new("intent")
                        .long("intent")
                        .help("Apply an intent's technical hints"),
                )
                .arg(
                    Arg::new("set")
                        .long("set")
                        .short('s')
                        .action(ArgAction::Append)
                        .help("Edit a parameter, e.g. --set duration=12 (repeatable)"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: json, yaml, markdown, natural or all"),
                )
                .arg(
                    Arg::new("timestamp")
                        .long("timestamp")
                        .help("ISO-8601 creation time (defaults to now, or the saved time with --input)"),
                )
                .arg(
                    Arg::new("utc")
                        .long("utc")
                        .action(ArgAction::SetTrue)
                        .help("Render natural-language timestamps in UTC"),
                ),
        )
        .subcommand(
            Command::new("presets")
                .about("List available presets")
                .arg(Arg::new("category").long("category").help("Filter by category"))
                .arg(Arg::new("model").long("model").help("Filter by model"))
                .arg(Arg::new("tag").long("tag").help("Filter by tag")),
        )
        .subcommand(Command::new("intents").about("List available intents"))
        .subcommand(Command::new("formats").about("List output formats"))
}

fn main() {
    let matches = cli().get_matches();

    let config = load_config(matches.get_one::<String>("config")).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    logging::init(&config.logging.level);

    let result = match matches.subcommand() {
        Some(("render", sub)) => commands::handle_render_command(&render_request(sub), &config),
        Some(("presets", sub)) => commands::handle_presets_command(
            sub.get_one::<String>("category").map(String::as_str),
            sub.get_one::<String>("model").map(String::as_str),
            sub.get_one::<String>("tag").map(String::as_str),
        ),
        Some(("intents", _)) => Ok(commands::handle_intents_command()),
        Some(("formats", _)) => Ok(commands::handle_formats_command(&config)),
        _ => unreachable!("subcommand_required is set"),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&String>) -> Result<VidpromptConfig, config::ConfigError> {
    let mut loader = Loader::new().with_optional_file("vidprompt.toml");
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    loader.build()
}

fn render_request(matches: &ArgMatches) -> RenderRequest {
    let string = |name: &str| matches.get_one::<String>(name).cloned();
    RenderRequest {
        preset: string("preset"),
        input: string("input").map(PathBuf::from),
        prompt: string("prompt"),
        model: string("model"),
        intent: string("intent"),
        assignments: matches
            .get_many::<String>("set")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        format: string("format"),
        timestamp: string("timestamp"),
        utc: matches.get_flag("utc"),
    }
}
