// src/config.rs
use crate::args::Args;
use crate::options;
pub use customer_join_engine::config::{Config, ConfigBuilder};
use customer_join_engine::options as engine_options;
use customer_join_engine::seed::{SeedOptions, SeedOptionsBuilder};

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let strategies = if args.run.all {
            engine_options::Strategy::ALL.to_vec()
        } else {
            vec![args.run.strategy.into()]
        };

        let seed = seed_options_from_args(&args);
        let format: engine_options::OutputFormat = args.output.format.into();
        let on_duplicate: engine_options::DuplicatePolicy = args.run.on_duplicate.into();

        ConfigBuilder::default()
            .strategies(strategies)
            .seed(seed)
            .iterations(args.run.iterations)
            .warmup(args.run.warmup)
            .on_duplicate(on_duplicate)
            .format(format)
            .build()
            .expect("Failed to build config")
    }
}

fn seed_options_from_args(args: &Args) -> SeedOptions {
    let input = &args.input;

    SeedOptionsBuilder::default()
        .size(input.size)
        .name_prefix(input.name_prefix.clone())
        .sparse_every(input.sparse_every)
        .duplicate_every(input.duplicate_every)
        .build()
        .expect("Failed to build seed options")
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Table,
    Json,
    Yaml,
    Csv
);
map_enum!(
    options::Strategy,
    engine_options::Strategy,
    LinearScan,
    HashJoin,
    QueryJoin,
    PreIndexed
);
map_enum!(
    options::DuplicatePolicy,
    engine_options::DuplicatePolicy,
    KeepFirst,
    Reject
);
