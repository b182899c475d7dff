use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use mulbase::{
    input::{read_request, Fields, InputError, BASE_FIELD, NUMBER_FIELD},
    ConvertError, Converter, DigitCase,
};
use structopt::StructOpt;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
#[structopt(about = "Convert a non-negative integer to another base")]
struct Options {
    /// Number to convert, prompts for input if neither NUMBER nor BASE is given
    number: Option<String>,

    /// Target base, 2 to 36
    base: Option<String>,

    /// Use uppercase letters for digits above 9
    #[structopt(short, long)]
    upper: bool,

    /// Log more, repeat for more detail
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8
}

fn main() -> Result<()> {
    let options = Options::from_args();
    init_logging(options.verbose);

    let case = if options.upper { DigitCase::Upper } else { DigitCase::Lower };
    let converter = Converter::new(case);
    info!(%case, "starting");

    match options {
        Options { number: None, base: None, .. } => run_prompt(&converter),
        Options { number, base, .. } => {
            let mut fields = Fields::new();
            if let Some(number) = number {
                fields.insert(NUMBER_FIELD, number);
            }
            if let Some(base) = base {
                fields.insert(BASE_FIELD, base);
            }

            let converted = run(&fields, &converter).context("Conversion failed")?;
            println!("{}", converted);
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_prompt(converter: &Converter) -> Result<()> {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).context("stdin failed")?;
        let line = line.trim();
        if read == 0 || line.is_empty() || line == "quit" || line == "exit" {
            debug!("leaving prompt");
            return Ok(());
        }

        let fields: Fields = [NUMBER_FIELD, BASE_FIELD].into_iter()
            .zip(line.split_whitespace())
            .collect();

        match run(&fields, converter) {
            Ok(converted) => println!("{}", converted),
            Err(e) => println!("{} error: {}", error_field(&e), e),
        }
    }
}

fn run(fields: &Fields, converter: &Converter) -> Result<String> {
    let request = read_request(fields)?;
    debug!(number = request.number, base = request.base, "converting");

    let converted = converter.convert(request.number, request.base)?;
    Ok(converted)
}

/// Field an error message belongs next to.
fn error_field(e: &anyhow::Error) -> &str {
    if let Some(input) = e.downcast_ref::<InputError>() {
        return input.field();
    }

    match e.downcast_ref::<ConvertError>() {
        Some(ConvertError::BaseTooSmall(_) | ConvertError::BaseTooLarge(_)) => BASE_FIELD,
        _ => NUMBER_FIELD,
    }
}
