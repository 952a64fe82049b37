// std imports
use std::io::{BufWriter, stdout};
use std::process;

// third-party imports
use clap::Parser;
use env_logger::{self as logger};
use wildcard::Pattern;

// local imports
use wcm::{App, Options, Settings, cli, error::*, input::InputReference};

const WCM_DEBUG_LOG: &str = "WCM_DEBUG_LOG";
const WCM_DEBUG_LOG_STYLE: &str = "WCM_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(WCM_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(WCM_DEBUG_LOG).write_style(WCM_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<bool> {
    bootstrap();

    let opt = cli::Opt::parse();
    let settings = Settings::load(opt.config.as_deref())?;
    log::debug!("settings: {:?}", settings);

    let pattern = Pattern::new(opt.pattern.as_str())
        .ignore_case(opt.ignore_case(&settings))
        .with_granularity(opt.granularity(&settings));
    log::debug!(
        "pattern {:?}, case: {:?}, granularity: {}, literal: {}",
        pattern.to_string(),
        pattern.case(),
        pattern.granularity(),
        pattern.is_literal()
    );

    let app = App::new(Options {
        pattern,
        invert_match: opt.invert_match,
        count: opt.count,
        line_number: opt.line_number,
        with_filename: opt.with_filename(),
    });

    let inputs = InputReference::from_args(&opt.files);
    let selected = app.run(&inputs, &mut BufWriter::new(stdout().lock()))?;

    Ok(selected != 0)
}

fn main() {
    match run() {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(err) if err.is_broken_pipe() => process::exit(0),
        Err(err) => {
            eprintln!("wcm: {}", err);
            process::exit(2);
        }
    }
}
