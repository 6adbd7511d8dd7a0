//! `rrsync [OUTPUT]` — back up, fetch, render and report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::{ColoredString, Colorize};

use rrsync_core::config::SyncConfig;
use rrsync_source::HttpStationSource;
use rrsync_sync::{pipeline, BackupOutcome, DiffReport, ReportLine, SyncSummary};

/// Arguments for `rrsync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Playlist file to write [default: rr_stations.xspf].
    pub output: Option<PathBuf>,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let mut config = SyncConfig::default();
        if let Some(output) = self.output {
            config = config.with_output(output);
        }

        let source = HttpStationSource::from_config(&config);
        let summary = pipeline::run(&config, &source)
            .with_context(|| format!("sync failed for '{}'", config.output.display()))?;

        print_summary(&summary);
        Ok(())
    }
}

fn print_summary(summary: &SyncSummary) {
    print!("{}", summary_text(summary));
}

fn summary_text(summary: &SyncSummary) -> String {
    let mut out = String::new();
    match &summary.backup {
        BackupOutcome::Created { path } => {
            out += &format!("The file has been copied and renamed to: {}\n", path.display());
        }
        BackupOutcome::Skipped => {
            out += &format!(
                "No previous playlist at {}, nothing to back up\n",
                summary.output.display()
            );
        }
        // Turned into an error by the pipeline before anything is written.
        BackupOutcome::LimitExceeded { .. } => {}
    }
    out += &format!(
        "Playlist created in file {} ({} stations)\n",
        summary.output.display(),
        summary.track_count
    );
    out += &report_text(&summary.report);
    out += "Done.\n";
    out
}

fn report_text(report: &DiffReport) -> String {
    report
        .lines()
        .iter()
        .map(|line| format!("{}\n", styled(line)))
        .collect()
}

fn styled(line: &ReportLine<'_>) -> ColoredString {
    let text = line.to_string();
    match line {
        ReportLine::NoChanges => text.dimmed(),
        ReportLine::AddedHeading(_) => text.green().bold(),
        ReportLine::Added(_) => text.green(),
        ReportLine::RemovedHeading(_) => text.red().bold(),
        ReportLine::Removed(_) => text.red(),
    }
}
