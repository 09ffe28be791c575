use super::aggregate::missing_days_offset;
use super::fetch::FetchReport;
use super::render::render;
use crate::model::{GraphOutput, WeekMap, SCHEMA_VERSION};
use anyhow::Result;
use chrono::{DateTime, FixedOffset, Utc};
use console::style;

pub fn build_output(
    report: &FetchReport,
    weeks: &WeekMap,
    email: &str,
    now: &DateTime<FixedOffset>,
) -> GraphOutput {
    GraphOutput {
        version: SCHEMA_VERSION,
        generated_at: now.with_timezone(&Utc),
        email: email.to_string(),
        window_days: report.counts.window_days(),
        missing_days: missing_days_offset(now),
        repositories: report
            .repositories
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
        skipped: report.skipped.clone(),
        counts: report.counts.iter().collect(),
        weeks: weeks.clone(),
    }
}

pub fn output_json(
    report: &FetchReport,
    weeks: &WeekMap,
    email: &str,
    now: &DateTime<FixedOffset>,
) -> Result<()> {
    let output = build_output(report, weeks, email, now);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_graph(
    report: &FetchReport,
    weeks: &WeekMap,
    email: &str,
    now: &DateTime<FixedOffset>,
    color: bool,
) -> Result<()> {
    let header = format!("User: {email}");
    if color {
        println!("{}", style(header).bold());
    } else {
        println!("{header}");
    }
    print!("{}", render(weeks, now, color));

    if !report.skipped.is_empty() {
        eprintln!(
            "\n{} {} repositor{} could not be read:",
            style("warning:").yellow().bold(),
            report.skipped.len(),
            if report.skipped.len() == 1 { "y" } else { "ies" }
        );
        for skipped in &report.skipped {
            eprintln!("  {}: {}", skipped.path, skipped.reason);
        }
    }

    Ok(())
}
