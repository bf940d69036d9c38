use crate::git::GitRepo;
use crate::model::{ReportOutput, ReportRow, ReportWindow, SCHEMA_VERSION};
use crate::util::wrap_text;
use anyhow::Result;
use chrono::Utc;
use console::style;

const DATE_WIDTH: usize = 10;
const DAY_WIDTH: usize = 11;
const MESSAGE_WIDTH: usize = 100;

pub fn output_json(
    rows: &[ReportRow],
    repo: &GitRepo,
    user: &str,
    window: &ReportWindow,
) -> Result<()> {
    let output = ReportOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo.path().to_string_lossy().to_string(),
        user: user.to_string(),
        start: window.start,
        end: window.end,
        rows: rows.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(rows: &[ReportRow]) -> Result<()> {
    for row in rows {
        println!("{}", serde_json::to_string(row)?);
    }
    Ok(())
}

pub fn output_table(rows: &[ReportRow]) -> Result<()> {
    if rows.is_empty() {
        println!("No data to display");
        return Ok(());
    }

    println!(
        "{:<10} {:<11} {}",
        style("Date").bold(),
        style("Day of Week").bold(),
        style("Time Track Message").bold()
    );
    println!("{}", "─".repeat(DATE_WIDTH + DAY_WIDTH + MESSAGE_WIDTH + 2));

    for row in rows {
        let wrapped = wrap_text(&row.message, MESSAGE_WIDTH);
        let mut lines = wrapped.iter();
        println!(
            "{:<10} {:<11} {}",
            row.date,
            row.weekday,
            lines.next().map(String::as_str).unwrap_or("")
        );
        for continuation in lines {
            println!("{:<10} {:<11} {continuation}", "", "");
        }
    }

    Ok(())
}
