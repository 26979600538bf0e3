//! Per-department time-compliance report command.
//!
//! Loads observed task intervals from a samples file, assesses each
//! department against its configured standard duration, and renders the
//! compliance table. Departments without a configured standard are logged
//! and skipped rather than failing the whole report.

use crate::libs::{compliance, config::Config, messages::Message, samples, view::View};
use crate::{msg_print, msg_warning};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// JSON file with observed intervals per department
    #[arg(short, long)]
    file: PathBuf,
    /// Restrict the report to a single department
    #[arg(short, long)]
    department: Option<String>,
}

pub fn cmd(report_args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    if config.departments.is_empty() {
        msg_warning!(Message::NoDepartmentsConfigured);
    }

    let mut entries = samples::load_samples(&report_args.file)?;
    if let Some(name) = &report_args.department {
        entries.retain(|e| &e.department == name);
    }
    if entries.is_empty() {
        msg_print!(Message::NoSamplesInFile(report_args.file.display().to_string()));
        return Ok(());
    }

    let mut rows = Vec::new();
    for entry in &entries {
        let Some(standard_minutes) = config.standard_for(&entry.department) else {
            msg_warning!(Message::DepartmentNotConfigured(entry.department.clone()));
            continue;
        };

        let (starts, ends) = entry.series();
        let report = compliance::assess(&starts, &ends, standard_minutes);
        tracing::debug!(
            department = %entry.department,
            samples = entry.samples.len(),
            deviation = report.deviation_percent,
            "assessed department"
        );
        rows.push((entry.department.clone(), report));
    }

    let date = Local::now().format("%B %-d, %Y").to_string();
    msg_print!(Message::ReportHeader(date), true);
    View::compliance(&rows)?;

    Ok(())
}
