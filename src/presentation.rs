// src/presentation.rs
use crate::error::Result;
use customer_join_engine::options::OutputFormat;
use customer_join_engine::stats::RunReport;
use std::fmt::Write;

/// Print the report to stdout in the requested format.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn print_report(report: &RunReport, format: OutputFormat) -> Result<()> {
    let rendered = render_report(report, format)?;
    print!("{rendered}");
    Ok(())
}

/// Render the report as text.
///
/// # Errors
///
/// Returns an error if JSON or YAML serialization fails.
pub fn render_report(report: &RunReport, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Table => render_table(report),
        OutputFormat::Csv => render_csv(report),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
    })
}

fn render_table(report: &RunReport) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "customer_join v{} · size={} · iterations={} · warmup={} · on-duplicate={}",
        crate::VERSION,
        report.seed.size,
        report.iterations,
        report.warmup,
        report.on_duplicate.as_str()
    );
    out.push('\n');
    out.push_str("STRATEGY          MEAN (ms)     MIN (ms)     MAX (ms)    MATCHED  UNMATCHED\n");
    out.push_str("-----------------------------------------------------------------------------\n");

    for s in &report.strategies {
        let _ = writeln!(
            out,
            "{:<14}{:>13.3}{:>13.3}{:>13.3}{:>11}{:>11}",
            s.strategy.as_str(),
            s.timing.mean_ms,
            s.timing.min_ms,
            s.timing.max_ms,
            s.matched,
            s.unmatched
        );
    }

    out.push_str("---\n");
    let _ = writeln!(
        out,
        "[customer_join] Completed: {} strategies timed.",
        report.strategies.len()
    );
    out
}

fn render_csv(report: &RunReport) -> String {
    let mut out =
        String::from("strategy,size,iterations,mean_ms,min_ms,max_ms,matched,unmatched\n");
    for s in &report.strategies {
        let _ = writeln!(
            out,
            "{},{},{},{:.3},{:.3},{:.3},{},{}",
            s.strategy.as_str(),
            s.size,
            s.timing.samples_ms.len(),
            s.timing.mean_ms,
            s.timing.min_ms,
            s.timing.max_ms,
            s.matched,
            s.unmatched
        );
    }
    out
}
