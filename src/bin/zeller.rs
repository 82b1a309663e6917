extern crate zeller as lib;

use flexi_logger::{FileSpec, LogSpecification, Logger};
use lib::config;
use lib::input::{Prompter, Request};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "zeller",
    about = "Prints a month calendar computed with Zeller's congruence."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,

    #[structopt(
        short = "y",
        long = "year",
        help = "year to print, prompted for if omitted",
        requires = "month",
        allow_hyphen_values = true
    )]
    pub year: Option<i32>,

    #[structopt(
        short = "m",
        long = "month",
        help = "month to print (1=Jan, 2=Feb, etc.)",
        requires = "year"
    )]
    pub month: Option<i32>,

    #[structopt(
        short = "d",
        long = "days",
        help = "number of days in month, 0 to calculate",
        requires = "year"
    )]
    pub days: Option<i64>,
}

const DEFAULT_LOG_LEVEL: &str = "warn";

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    let mut logger = logger.start()?;

    let config = config::load_suitable_config(args.configfile.as_deref())?;

    let rust_log = env::var("RUST_LOG").ok();
    if let Some(level) = config.log_level_override(rust_log.as_deref()) {
        logger.set_new_spec(LogSpecification::parse(level)?);
    }
    log::debug!("Using {:?}", config);

    let request = match (args.year, args.month) {
        (Some(year), Some(month)) => Request::new(year, month, args.days.unwrap_or(0)),
        _ => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut prompter =
                Prompter::new(stdin.lock(), stdout.lock()).prompts(config.prompts);
            let request = prompter.read_request()?;
            request
        }
    };

    let resolved = request.resolve()?;
    let calendar = config
        .renderer()
        .render(resolved.days, resolved.year, resolved.month)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(calendar.as_bytes())?;
    if !calendar.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;

    Ok(())
}

fn main() {
    let args = Args::from_args();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
