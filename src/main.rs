use std::process::ExitCode;

use clap::Parser;
use log::error;
use log::LevelFilter;

use safebool::coerce_strict_or_fail;
use safebool::env_to_bool;
use safebool::is_boolean;
use safebool::is_false;
use safebool::is_true;
use safebool::to_boolean_lenient;
use safebool::Value;

use crate::logger::Logger;

mod logger;

const SAFEBOOL_STRICT: &str = "SAFEBOOL_STRICT";

#[derive(Parser)]
#[command(
    about = "Converts values to booleans.",
    long_about = None,
    arg_required_else_help = true
)]
struct Args {
    /// Print version.
    #[clap(long, action)]
    version: bool,
    /// Fail on the first value that is not a recognized boolean.
    #[clap(long, action)]
    strict: bool,
    /// Print `is_boolean is_true is_false` for every value instead of converting it.
    #[clap(long, action)]
    classify: bool,
    /// Log every fallback that is applied.
    #[clap(long, action)]
    verbose: bool,
    /// Values to convert: nil, true, false, :symbol, numbers, "text" or bare text.
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    Logger::init("safebool", level).map_err(|_| "failed to set logger")?;
    if args.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }
    let strict = args.strict || env_to_bool(SAFEBOOL_STRICT)?;
    let mut values: Vec<Value> = Vec::with_capacity(args.values.len());
    for literal in args.values.iter() {
        match literal.parse::<Value>() {
            Ok(value) => values.push(value),
            Err(e) => {
                error!("{}", e);
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    for value in values.iter() {
        if args.classify {
            println!(
                "{}\t{}\t{}\t{}",
                value,
                is_boolean(value),
                is_true(value),
                is_false(value)
            );
        } else if strict {
            match coerce_strict_or_fail(value) {
                Ok(result) => println!("{}\t{}", value, result),
                Err(e) => {
                    error!("{}", e);
                    return Ok(ExitCode::FAILURE);
                }
            }
        } else {
            println!("{}\t{}", value, to_boolean_lenient(value));
        }
    }
    Ok(ExitCode::SUCCESS)
}
