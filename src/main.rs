use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use trip_optimizer::config::{self, CliOverrides};
use trip_optimizer::input::{collect_parameters, Prompter};
use trip_optimizer::report::{self, Language};
use trip_optimizer::{TripCalculator, TripError};

#[derive(Parser)]
#[command(
    name = "trip-optimizer",
    version,
    about = "Road trip cost, time, and overnight stop calculator"
)]
struct Args {
    /// One-way distance in km
    #[arg(short, long)]
    distance: Option<f64>,

    /// Average speed in km/h
    #[arg(short, long)]
    speed: Option<f64>,

    /// Fuel efficiency in km per liter
    #[arg(short, long)]
    efficiency: Option<f64>,

    /// Maximum driving hours per day
    #[arg(short = 'H', long)]
    max_hours: Option<f64>,

    /// Fuel price per liter
    #[arg(short, long)]
    gas_price: Option<f64>,

    /// Toll for a single leg
    #[arg(short, long)]
    toll: Option<f64>,

    /// Drive back to the origin
    #[arg(short, long)]
    round_trip: bool,

    /// Language for prompts and output
    #[arg(short, long, value_enum)]
    lang: Option<Language>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Config file (default: ~/.trip-optimizer/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            distance_one_way: self.distance,
            speed_kmh: self.speed,
            efficiency_km_per_liter: self.efficiency,
            max_hours_per_day: self.max_hours,
            gas_price_per_liter: self.gas_price,
            toll_one_way: self.toll,
            round_trip: self.round_trip.then_some(true),
            language: self.lang,
        }
    }
}

fn init_logging(args: &Args) {
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    match &args.log_file {
        Some(path) => match File::create(path) {
            Ok(file) => {
                let _ = WriteLogger::init(level, log_config, file);
            }
            Err(e) => eprintln!("Cannot open log file {}: {}", path.display(), e),
        },
        None => {
            let _ = TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Auto);
        }
    }
}

fn run(args: &Args, lang: &mut Language) -> Result<(), TripError> {
    let cli = args.overrides();
    let file_config = config::load_config(args.config.as_deref())?;
    let resolved = config::resolve(&file_config, &cli)?;
    *lang = resolved.language;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout(), resolved.language);
    let params = collect_parameters(&resolved, &cli, &mut prompter)?;

    let result = TripCalculator::new(resolved.settings).compute(&params);
    log::info!(
        "Computed trip: {} nights, total cost {:.2}",
        result.total_nights(),
        result.total_cost()
    );

    if args.json {
        let json = report::render_json(&result).map_err(io::Error::other)?;
        println!("{json}");
    } else {
        println!();
        print!("{}", report::render_text(&result, resolved.language));
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);
    log::debug!("trip-optimizer starting");

    // Until the config is loaded, errors use the flag or the default language
    let mut lang = args.lang.unwrap_or_default();
    match run(&args, &mut lang) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::warn!("{e}");
            eprintln!();
            eprintln!("{}", report::error_message(&e, lang));
            ExitCode::FAILURE
        }
    }
}
