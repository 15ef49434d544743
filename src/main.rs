use clap::Parser;
use customer_join::args::Args;
use customer_join::config::Config;
use customer_join::presentation;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = Config::from(args);
    log::debug!("running with {config:?}");

    let result = customer_join_engine::run(&config)
        .map_err(customer_join::error::AppError::from)
        .and_then(|report| presentation::print_report(&report, config.format));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
