// src/args.rs
use crate::options::{DuplicatePolicy, OutputFormat, Strategy};
use crate::parsers;
use clap::{Args as ClapArgs, Parser};
use customer_join_engine::seed::{DEFAULT_NAME_PREFIX, DEFAULT_SIZE};

#[derive(Parser, Debug)]
#[command(
    name = "customer_join",
    version,
    about = "Time different ways of joining customers with their preferences"
)]
pub struct Args {
    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub run: RunOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(ClapArgs, Debug)]
pub struct InputOptions {
    /// Number of customers (and preferences) to seed; `_` separators allowed
    #[arg(
        long,
        default_value_t = DEFAULT_SIZE,
        value_parser = parsers::parse_size,
        help_heading = "Input"
    )]
    pub size: usize,

    /// Prefix of the generated customer names
    #[arg(long, default_value = DEFAULT_NAME_PREFIX, help_heading = "Input")]
    pub name_prefix: String,

    /// Leave every N-th customer without a preference
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "Input")]
    pub sparse_every: Option<usize>,

    /// Give every N-th customer a second preference
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "Input")]
    pub duplicate_every: Option<usize>,
}

#[derive(ClapArgs, Debug)]
pub struct RunOptions {
    /// Join strategy to time
    #[arg(
        long,
        value_enum,
        default_value = "hash-join",
        conflicts_with = "all",
        help_heading = "Run"
    )]
    pub strategy: Strategy,

    /// Time every strategy on the same input
    #[arg(long, help_heading = "Run")]
    pub all: bool,

    /// Timed repetitions per strategy
    #[arg(
        long,
        default_value_t = 1,
        value_parser = parsers::parse_positive_usize,
        help_heading = "Run"
    )]
    pub iterations: usize,

    /// Untimed repetitions before measuring
    #[arg(long, default_value_t = 0, help_heading = "Run")]
    pub warmup: usize,

    /// How to treat several preferences sharing one customer id
    #[arg(long, value_enum, default_value = "keep-first", help_heading = "Run")]
    pub on_duplicate: DuplicatePolicy,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,
}
