use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, Level};

use questionnaire::export::{self, Selections};
use questionnaire::formatting::{self, Identity, Terminal};
use questionnaire::language::Document;
use questionnaire::parsing;
use questionnaire::templating::{self, Markdown, Sheet};

mod output;
mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("questionnaire")
        .version(VERSION)
        .propagate_version(true)
        .about("Tools for questionnaires written as categories, subcategories, and options.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit diagnostic logging to standard error."),
        )
        .subcommand(
            Command::new("check")
                .about("Check that the given questionnaire is well formed")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the questionnaire you want to check, or '-' for standard input."),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Print the given questionnaire in canonical form")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the questionnaire you want to format."),
                ),
        )
        .subcommand(
            Command::new("json")
                .about("Print the structure of the given questionnaire as JSON")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the questionnaire."),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Print every option with its chosen colour as a JSON list")
                .arg(
                    Arg::new("selections")
                        .short('s')
                        .long("selections")
                        .value_name("FILE")
                        .help("A previous export whose choices are to be carried over. Options not mentioned there are exported as white."),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Write to the named file rather than to standard output."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the questionnaire."),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Print a summary sheet of the chosen colours")
                .arg(
                    Arg::new("selections")
                        .short('s')
                        .long("selections")
                        .value_name("FILE")
                        .help("A previous export holding the choices to report on."),
                )
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .value_name("NAME")
                        .help("The name of the person who filled in the questionnaire."),
                )
                .arg(
                    Arg::new("markdown")
                        .long("markdown")
                        .action(ArgAction::SetTrue)
                        .help("Produce Markdown rather than plain text."),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Write to the named file rather than to standard output."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the questionnaire."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = filename(submatches);
            let content = read_source(filename);
            let document = parse_source(filename, &content, true);

            debug!(
                "{} categories, {} options",
                document
                    .categories
                    .len(),
                document.count_items()
            );
            eprintln!("{}: {}", "ok".bright_green(), filename.display());
        }
        Some(("format", submatches)) => {
            let filename = filename(submatches);
            let content = read_source(filename);
            let document = parse_source(filename, &content, false);

            let result = if submatches.get_flag("raw-control-chars")
                || std::io::stdout().is_terminal()
            {
                formatting::render(&Terminal, &document)
            } else {
                formatting::render(&Identity, &document)
            };

            output::emit(None, &result);
        }
        Some(("json", submatches)) => {
            let filename = filename(submatches);
            let content = read_source(filename);
            let document = parse_source(filename, &content, false);

            let result = to_json(&document);
            output::emit(None, &result);
        }
        Some(("export", submatches)) => {
            let filename = filename(submatches);
            let content = read_source(filename);
            let document = parse_source(filename, &content, false);
            let selections = read_selections(submatches);

            let records = selections.flatten(&document);
            debug!("Exporting {} records", records.len());

            let result = to_json(&records);
            output::emit(target(submatches), &result);
        }
        Some(("report", submatches)) => {
            let filename = filename(submatches);
            let content = read_source(filename);
            let document = parse_source(filename, &content, false);
            let selections = read_selections(submatches);

            let records = export::flatten(&document, |position| {
                selections.colour(
                    position.category,
                    position.subcategory,
                    position
                        .item
                        .text,
                )
            });

            let name = submatches
                .get_one::<String>("name")
                .map(String::as_str);

            let result = if submatches.get_flag("markdown") {
                templating::fill(&Markdown, name, &records)
            } else {
                templating::fill(&Sheet, name, &records)
            };

            match result {
                Ok(report) => output::emit(target(submatches), &report),
                Err(error) => {
                    debug!(?error);
                    eprintln!(
                        "{}: Unable to render report: {}",
                        "error".bright_red(),
                        error
                    );
                    std::process::exit(1);
                }
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: questionnaire [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn filename(submatches: &ArgMatches) -> &Path {
    let filename = submatches
        .get_one::<String>("filename")
        .expect("filename is a required argument");
    Path::new(filename)
}

fn target(submatches: &ArgMatches) -> Option<&Path> {
    submatches
        .get_one::<String>("output")
        .map(Path::new)
}

fn read_source(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}

fn parse_source<'i>(filename: &Path, content: &'i str, full: bool) -> Document<'i> {
    match parsing::parse(content) {
        Ok(document) => document,
        Err(error) => {
            let message = if full {
                problem::full_parsing_error(&error, filename, content, &Terminal)
            } else {
                problem::concise_parsing_error(&error, filename, content, &Terminal)
            };
            eprintln!("{}", message);
            std::process::exit(1);
        }
    }
}

fn read_selections(submatches: &ArgMatches) -> Selections {
    let Some(filename) = submatches
        .get_one::<String>("selections")
        .map(Path::new)
    else {
        return Selections::new();
    };

    let content = read_source(filename);

    match Selections::from_json(&content) {
        Ok(selections) => selections,
        Err(error) => {
            debug!(?error);
            eprintln!("{}", problem::concise_selections_error(&error, filename));
            std::process::exit(1);
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(mut json) => {
            json.push('\n');
            json
        }
        Err(error) => {
            eprintln!(
                "{}: Unable to serialize: {}",
                "error".bright_red(),
                error
            );
            std::process::exit(1);
        }
    }
}
