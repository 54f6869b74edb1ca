use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};
use log::{info, warn};
use numcore::solver::constants::GROUP_COUNT;
use numcore::{CoreReport, CoreSolver, core_to_letter, validate_number, validate_word, word_to_number};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// numcore - Reduce an integer or a 4-letter word to its numeric core
#[derive(Parser, Debug)]
#[command(name = "numcore")]
#[command(about = "Calculate the numeric core of an integer or a 4-letter word")]
#[command(version)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .multiple(true)
        .args(["number", "word", "word_number"])
))]
pub struct CliArgs {
    /// A non-negative integer to calculate the numeric core for
    #[arg(short, long, allow_negative_numbers = true)]
    pub number: Option<i64>,

    /// A 4-letter word to calculate the numeric core for
    #[arg(short, long)]
    pub word: Option<String>,

    /// A word whose concatenated letter codes form the number to reduce
    #[arg(long)]
    pub word_number: Option<String>,

    /// Print every reduction step after the result
    #[arg(short, long)]
    pub explain: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub number: Option<u64>,
    pub word: Option<String>,
    pub word_number: Option<(String, u64)>,
    pub explain: bool,
    pub log_level: LogLevel,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self> {
        let number = args
            .number
            .map(validate_number)
            .transpose()
            .context("Invalid number")?;

        if let Some(word) = &args.word {
            validate_word(word, GROUP_COUNT).context("Invalid word")?;
        }

        let word_number = args
            .word_number
            .map(|word| word_to_number(&word).map(|value| (word, value)))
            .transpose()
            .context("Invalid word for --word-number")?;

        Ok(CliConfig {
            number,
            word: args.word,
            word_number,
            explain: args.explain,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::try_from(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

fn number_line(number: u64, core: u64) -> String {
    format!("Numeric core of {} is {}", number, core)
}

fn word_line(word: &str, core: u64) -> String {
    match core_to_letter(core) {
        Ok(letter) => format!("Numeric core of {} is {} -> {}", word, core, letter),
        Err(e) => {
            warn!("{}", e);
            format!("Numeric core of {} is {}", word, core)
        }
    }
}

fn word_number_line(word: &str, number: u64, core: u64) -> String {
    format!("Numeric core of {} ({}) is {}", word, number, core)
}

fn step_lines(report: &CoreReport) -> Vec<String> {
    report
        .steps
        .iter()
        .map(|step| format!("  {} -> {} = {}", step.source, step.expression, step.value))
        .collect()
}

fn print_report(headline: String, report: &CoreReport, explain: bool) {
    println!("{}", headline);
    if explain {
        for line in step_lines(report) {
            println!("{}", line);
        }
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = CoreSolver::default();

    if let Some(number) = config.number {
        info!("Calculating the numeric core of {}", number);
        let report = solver
            .explain_value(number)
            .with_context(|| format!("Failed to find the numeric core of {}", number))?;
        print_report(number_line(number, report.core), &report, config.explain);
    }

    if let Some(word) = &config.word {
        info!("Calculating the numeric core of '{}'", word);
        let report = solver
            .explain_word(word)
            .with_context(|| format!("Failed to find the numeric core of '{}'", word))?;
        print_report(word_line(word, report.core), &report, config.explain);
    }

    if let Some((word, number)) = &config.word_number {
        info!("Calculating the numeric core of '{}' as {}", word, number);
        let report = solver
            .explain_value(*number)
            .with_context(|| format!("Failed to find the numeric core of {}", number))?;
        print_report(
            word_number_line(word, *number, report.core),
            &report,
            config.explain,
        );
    }

    Ok(())
}
