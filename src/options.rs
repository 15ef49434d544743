use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum Strategy {
    /// Scan all preferences for every customer (quadratic)
    LinearScan,
    /// Build an id index, then look each customer up in it
    HashJoin,
    /// Group-by-key iterator pipeline
    QueryJoin,
    /// Look customers up in an index built before the timer starts
    PreIndexed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Keep the first preference and log a warning
    #[default]
    KeepFirst,
    /// Abort the run with an error
    Reject,
}
