use std::cell::RefCell;
use std::fs;

use assert_fs::prelude::*;
use chrono::NaiveDate;
use predicates::prelude::*;
use rrsync_core::{config::SyncConfig, types::Station};
use rrsync_source::{SourceError, StationSource};
use rrsync_sync::{
    backup::backup_path,
    pipeline::run_on,
    BackupOutcome, SyncError,
};

/// Serves a scripted sequence of catalogs, one per fetch.
struct Scripted {
    catalogs: RefCell<Vec<Result<Vec<Station>, SourceError>>>,
}

impl Scripted {
    fn new(catalogs: Vec<Result<Vec<Station>, SourceError>>) -> Self {
        let mut catalogs = catalogs;
        catalogs.reverse();
        Scripted {
            catalogs: RefCell::new(catalogs),
        }
    }
}

impl StationSource for Scripted {
    fn fetch_stations(&self) -> Result<Vec<Station>, SourceError> {
        self.catalogs
            .borrow_mut()
            .pop()
            .expect("more fetches than scripted catalogs")
    }
}

fn station(title: &str, genres: &[&str]) -> Station {
    Station {
        stream_url: format!("https://radio.example/{}", title.to_lowercase()),
        title: title.to_string(),
        tooltip: format!("{title} channel"),
        icon_url: format!("https://cdn.example/{}.svg", title.to_lowercase()),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        share_url: format!("https://example/{}", title.to_lowercase()),
    }
}

fn catalog(titles: &[&str]) -> Vec<Station> {
    titles.iter().map(|t| station(t, &[])).collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

#[test]
fn first_run_reports_every_title_as_added() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = dir.child("out.xspf");
    let config = SyncConfig::default().with_output(output.path());
    let source = Scripted::new(vec![Ok(catalog(&["Rock", "Jazz"]))]);

    let summary = run_on(&config, &source, day()).unwrap();

    assert_eq!(summary.backup, BackupOutcome::Skipped);
    assert_eq!(summary.track_count, 2);
    // The playlist-level title is part of the projection, so it is "added"
    // on a first run too.
    assert_eq!(summary.report.diff.added, strings(&["Playlist", "Rock", "Jazz"]));
    assert!(summary.report.diff.removed.is_empty());
    output.assert(predicate::str::contains("<title>Rock</title>"));
}

#[test]
fn identical_second_run_reports_no_changes() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = dir.child("out.xspf");
    let config = SyncConfig::default().with_output(output.path());
    let source = Scripted::new(vec![
        Ok(catalog(&["Rock", "Jazz"])),
        Ok(catalog(&["Rock", "Jazz"])),
    ]);

    run_on(&config, &source, day()).unwrap();
    let first = fs::read(output.path()).unwrap();
    let summary = run_on(&config, &source, day()).unwrap();

    assert!(!summary.report.has_changes());
    assert_eq!(summary.report.to_string(), "No changes.\n");
    let backup = backup_path(output.path(), day(), 0);
    assert_eq!(summary.backup, BackupOutcome::Created { path: backup.clone() });
    assert_eq!(fs::read(&backup).unwrap(), first, "backup is byte-identical");
}

#[test]
fn dropped_station_is_reported_removed_only() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = dir.child("out.xspf");
    let config = SyncConfig::default().with_output(output.path());
    let source = Scripted::new(vec![
        Ok(catalog(&["Rock", "Jazz", "Chill"])),
        Ok(catalog(&["Rock", "Chill"])),
    ]);

    run_on(&config, &source, day()).unwrap();
    let summary = run_on(&config, &source, day()).unwrap();

    assert_eq!(summary.report.diff.removed, strings(&["Jazz"]));
    assert!(summary.report.diff.added.is_empty());
    output.assert(predicate::str::contains("Jazz").not());
}

#[test]
fn genres_render_as_joined_annotation() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = dir.child("out.xspf");
    let config = SyncConfig::default().with_output(output.path());
    let source = Scripted::new(vec![Ok(vec![
        station("Rock", &["Rock", "Pop"]),
        station("Bare", &[]),
    ])]);

    run_on(&config, &source, day()).unwrap();

    output.assert(predicate::str::contains("<annotation>Rock, Pop</annotation>"));
    let xml = fs::read_to_string(output.path()).unwrap();
    assert_eq!(xml.matches("<annotation>").count(), 1);
}

#[test]
fn fetch_failure_leaves_previous_output_intact() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = dir.child("out.xspf");
    let config = SyncConfig::default().with_output(output.path());
    let source = Scripted::new(vec![
        Ok(catalog(&["Rock"])),
        Err(SourceError::Status {
            url: "https://example/api".into(),
            status: 503,
        }),
    ]);

    run_on(&config, &source, day()).unwrap();
    let before = fs::read(output.path()).unwrap();

    let err = run_on(&config, &source, day()).unwrap_err();
    assert!(matches!(err, SyncError::Source(SourceError::Status { status: 503, .. })));
    assert_eq!(fs::read(output.path()).unwrap(), before);
    // The backup step had already completed.
    dir.child("out_20250601.xspf.bak").assert(predicate::path::exists());
}

#[test]
fn unparsable_previous_output_counts_as_empty() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = dir.child("out.xspf");
    output.write_str("<playlist><title>half").unwrap();
    let config = SyncConfig::default().with_output(output.path());
    let source = Scripted::new(vec![Ok(catalog(&["Rock"]))]);

    let summary = run_on(&config, &source, day()).unwrap();

    assert_eq!(summary.report.diff.added, strings(&["Playlist", "Rock"]));
    dir.child("out_20250601.xspf.bak")
        .assert("<playlist><title>half");
}
