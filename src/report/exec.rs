use super::group::{business_days, grouped_messages, reconcile};
use super::output::{output_json, output_ndjson, output_table};
use super::parse::LogParser;
use crate::cli::Cli;
use crate::error::GtrackError;
use crate::git::GitRepo;
use crate::model::ReportWindow;
use anyhow::Context;
use chrono::{Duration, Local, NaiveDate};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

pub fn exec(cli: Cli) -> anyhow::Result<()> {
    if cli.repo.is_none() {
        eprintln!(
            "{} no repository given, using current directory",
            style("warning:").yellow().bold()
        );
    }
    let repo = GitRepo::open(cli.repo.as_ref()).context("Failed to open git repository")?;

    let user = match &cli.user {
        Some(name) => name.clone(),
        None => repo
            .config_user_name()
            .context("Failed to determine git user")?,
    };

    let today = Local::now().date_naive();
    let start = match cli.start.as_deref() {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| GtrackError::InvalidDate(s.to_string()))
            .context("Failed to parse start date")?,
        None => today - Duration::days(i64::from(cli.last_days)),
    };
    let window = ReportWindow::new(start, today);
    let business = business_days(window.start, window.end);

    // Keep stdout clean for structured output
    let quiet = cli.json || cli.ndjson;
    if !quiet {
        println!(
            "Reporting {} to {} ({} business days) for {}",
            window.start,
            window.end,
            business.len(),
            style(&user).bold()
        );
    }

    let parser = LogParser::new(&user);
    let progress = if quiet {
        None
    } else {
        Some(day_progress(window.days().count() as u64))
    };
    let grouped = grouped_messages(&repo, &parser, &window, progress.as_ref())
        .context("Failed to collect git history")?;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let rows = reconcile(&grouped, &business);

    if cli.json {
        output_json(&rows, &repo, &user, &window)?;
    } else if cli.ndjson {
        output_ndjson(&rows)?;
    } else {
        output_table(&rows)?;
    }

    Ok(())
}

fn day_progress(days: u64) -> ProgressBar {
    let pb = ProgressBar::new(days);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30}] {pos}/{len} days")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}
