use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use unidash_cli::dashboard::input::config_from_arguments;
use unidash_cli::dashboard::render::{run_render, run_views};
use unidash_cli::util::validate_csv_file;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("UNIDASH_LOG", "error,unidash=info"))
        .init();

    let matches = Command::new("unidash")
        .version(clap::crate_version!())
        .about("\u{1F393} unidash - University Admissions, Retention & Satisfaction Dashboard")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Render the dashboard HTML page from the student data CSV")
                .arg(
                    Arg::new("config")
                        .help("Path to dashboard JSON configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("data_file")
                        .short('d')
                        .long("data")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help(
                            "Path to the student data CSV. Overrides the data file \
                             specified in the configuration file.",
                        )
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help(
                            "File path the HTML dashboard will be written to. \
                             Overrides the output file specified in the configuration file.",
                        )
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("views_json")
                        .long("views-json")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help("Also write the derived chart views to this JSON file.")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("no_findings")
                        .long("no-findings")
                        .help("Leave the key findings and insights out of the page.")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("show_config")
                        .long("show-config")
                        .help("Append the effective configuration to the page.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("views")
                .about("Print the derived chart views as JSON")
                .arg(
                    Arg::new("data_file")
                        .short('d')
                        .long("data")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .default_value(unidash::config::DEFAULT_DATA_FILE)
                        .help("Path to the student data CSV")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help("Path to write the views JSON. Defaults to stdout.")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("render", sub_m)) => handle_render(sub_m),
        Some(("views", sub_m)) => handle_views(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_render(matches: &ArgMatches) -> Result<()> {
    let config_path: Option<&PathBuf> = matches.get_one("config");
    match config_path {
        Some(path) => log::info!("[unidash::render] Using config: {:?}", path),
        None => log::info!("[unidash::render] No config provided; using defaults."),
    }

    let config = match config_from_arguments(config_path, matches) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {:#}", e);
            std::process::exit(1)
        }
    };

    if config_path.is_none() {
        let default_json = serde_json::to_string_pretty(&config).unwrap_or_default();
        eprintln!("[unidash::render] Effective config:\n{}", default_json);
    }

    match run_render(&config) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Rendering failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_views(matches: &ArgMatches) -> Result<()> {
    let data_file: &String = matches
        .get_one("data_file")
        .expect("data_file has a default value");
    let output_file = matches.get_one::<String>("output_file").map(String::as_str);

    let result = validate_csv_file(data_file).and_then(|_| run_views(data_file, output_file));
    match result {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Computing views failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
