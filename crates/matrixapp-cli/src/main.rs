use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use matrixapp_cli::operations::input::{CalculatorConfig, MatrixSource};
use matrixapp_cli::operations::output::{render, write_result};
use matrixapp_cli::operations::run::{run_operation, user_message, Operation};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATRIXAPP_LOG", "error,matrixapp=info"))
        .init();

    let matches = Command::new("matrixapp")
        .version(clap::crate_version!())
        .about("Matrix calculator: transpose, determinant and inverse of small dense matrices")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(operation_command(
            "transpose",
            "Transpose a matrix of any shape",
        ))
        .subcommand(operation_command(
            "determinant",
            "Determinant of a square matrix by cofactor expansion",
        ))
        .subcommand(
            operation_command(
                "inverse",
                "Inverse of a square, non-singular matrix by Gauss-Jordan elimination",
            )
            .arg(
                Arg::new("verify")
                    .long("verify")
                    .help("Check that M * inverse(M) is the identity before reporting the result.")
                    .action(ArgAction::SetTrue),
            ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    let (operation, sub_m) = match matches.subcommand() {
        Some((name, sub_m)) => (name.parse::<Operation>().map_err(anyhow::Error::msg)?, sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };

    match handle_operation(operation, sub_m) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("[MatrixApp::{}] Failed: {:#}", operation, e);
            eprintln!("{}", user_message(operation, &e));
            std::process::exit(1)
        }
    }
}

fn operation_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new("input")
                .help("Path to the input matrix (*.csv or *.tsv, no header row)")
                .required_unless_present("data")
                .conflicts_with("data")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .help("Inline matrix: rows separated by ';', cells by ',' or whitespace. Example: \"1,2;3,4\"")
                .allow_hyphen_values(true)
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("output_file")
                .short('o')
                .long("output")
                .help("Write the result to this file (*.csv or *.tsv for matrices). Defaults to stdout.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .help("Decimal places in the output. Overrides the configuration file.")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to calculator JSON configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
}

fn handle_operation(operation: Operation, matches: &ArgMatches) -> Result<()> {
    let config = CalculatorConfig::from_arguments(matches)?;
    let source = MatrixSource::from_arguments(matches)?;
    log::info!("[MatrixApp::{}] Loading matrix from {:?}", operation, source);

    let matrix = source.load()?;
    let verify = matches
        .try_get_one::<bool>("verify")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false);

    let result = run_operation(operation, &matrix, &config, verify)?;

    match matches.get_one::<PathBuf>("output_file") {
        Some(path) => write_result(path, &result, config.precision)?,
        None => print!("{}", render(operation, &result, config.precision)),
    }
    Ok(())
}
