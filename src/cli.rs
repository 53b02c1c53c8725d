use crate::config::AppConfig;
use crate::error::AppError;
use crate::scan::{longest_vowel_runs, max_increasing_run};
use crate::telemetry;
use crate::workflows::employees::{
    filter_employees, read_employees, read_employees_from_path, EmployeeCriteria,
};
use crate::workflows::people::{filter_people_or_empty, PersonCriteria, XmlPersonSource};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "datasift",
    about = "Filter record exports and scan sequences, answering in JSON",
    version
)]
struct Cli {
    /// Pretty-print the JSON result
    #[arg(long, global = true)]
    pretty: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter an employee CSV export and report salary statistics
    Employees(InputArgs),
    /// Filter <Person> records from an XML document
    People(InputArgs),
    /// Report the longest run of consecutive vowels in each word
    Vowels {
        words: Vec<String>,
    },
    /// Report the strictly increasing run with the largest sum
    Increasing {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i32>,
    },
}

#[derive(Args, Debug, Default)]
struct InputArgs {
    /// Read from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,
}

impl InputArgs {
    fn read_to_string(&self) -> Result<String, AppError> {
        match &self.input {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => {
                let mut buffer = String::new();
                std::io::stdin().lock().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, config.environment)?;
    debug!(?config.environment, "configuration loaded");

    let pretty = cli.pretty || config.output.pretty;
    let output = execute(cli.command, pretty)?;
    println!("{output}");
    Ok(())
}

fn execute(command: Command, pretty: bool) -> Result<String, AppError> {
    match command {
        Command::Employees(args) => {
            let employees = match &args.input {
                Some(path) => read_employees_from_path(path)?,
                None => read_employees(std::io::stdin().lock())?,
            };
            render(
                &filter_employees(&employees, &EmployeeCriteria::default()),
                pretty,
            )
        }
        Command::People(args) => {
            let document = args.read_to_string()?;
            let summary = filter_people_or_empty(
                &XmlPersonSource::default(),
                &document,
                &PersonCriteria::default(),
            );
            render(&summary, pretty)
        }
        Command::Vowels { words } => render(&longest_vowel_runs(&words), pretty),
        Command::Increasing { numbers } => render(&max_increasing_run(&numbers), pretty),
    }
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String, AppError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
