//! Remaining-time command for in-progress tasks.
//!
//! Given a department and the moment its task started, prints how much of
//! the standard duration is still available. The clock reference is taken
//! once here and passed into the engine, which never reads time itself.

use crate::libs::{compliance, config::Config, formatter::format_minutes, messages::Message};
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDateTime, NaiveTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct RemainingArgs {
    /// Department whose standard duration applies
    #[arg(short, long)]
    department: String,
    /// Task start, either "YYYY-MM-DDTHH:MM:SS" or today's "HH:MM"
    #[arg(short, long)]
    start: String,
}

pub fn cmd(remaining_args: RemainingArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(standard_minutes) = config.standard_for(&remaining_args.department) else {
        msg_bail_anyhow!(Message::DepartmentNotConfigured(remaining_args.department));
    };

    let start = parse_start(&remaining_args.start)?;
    let now = Local::now().naive_local();
    let remaining = compliance::remaining_minutes(start, standard_minutes, now);

    if remaining == 0.0 {
        msg_print!(Message::StandardTimeExhausted(remaining_args.department));
    } else {
        msg_print!(Message::RemainingTime(remaining_args.department, format_minutes(remaining)));
    }

    Ok(())
}

/// Accepts a full timestamp or a bare time-of-day interpreted as today.
fn parse_start(input: &str) -> Result<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime);
    }
    let time = NaiveTime::parse_from_str(input, "%H:%M")?;
    Ok(Local::now().date_naive().and_time(time))
}
