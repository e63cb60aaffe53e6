use chrono::Local;

use crate::client::StatusSource;
use crate::config::Settings;
use crate::error::Result;
use crate::models::StatusRecord;
use crate::scheduler::Scheduler;
use crate::storage;

/// Fetch the user's status and append it to the output file
pub fn log_status(settings: &Settings, source: &dyn StatusSource) -> Result<()> {
    let body = source.fetch(&settings.user_id)?;
    let record = StatusRecord::extract(&body, Local::now());
    let line = record.to_json_line()?;
    storage::append_line(&settings.output, &line)
}

/// Track the user's status until the process is stopped or a cycle fails
pub fn run(settings: &Settings, source: &dyn StatusSource) -> Result<()> {
    log::info!(
        "Every {} minutes: Saving status for {} to {}",
        settings.interval_minutes,
        settings.user_id,
        settings.output.display()
    );

    let mut scheduler = Scheduler::new(settings.interval());
    scheduler.run(|| log_status(settings, source))
}
