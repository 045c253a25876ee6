use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use vecbench_core::{SweepPoint, SweepReport, SweepSummary};

const DASHBOARD_TEMPLATE: &str = include_str!("dashboard_template.html");
const DATA_PLACEHOLDER: &str = "__DATA_PLACEHOLDER__";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Snapshot of one sweep as handed to the dashboard and written to disk.
#[derive(Debug, Serialize)]
pub(crate) struct RunRecord {
    pub(crate) generated_at: String,
    pub(crate) git_rev: Option<String>,
    pub(crate) notes: Option<String>,
    #[serde(flatten)]
    pub(crate) report: SweepReport,
    pub(crate) summary: SweepSummary,
}

impl RunRecord {
    pub(crate) fn new(report: SweepReport, timestamp: DateTime<Utc>, notes: Option<String>) -> Self {
        let git_rev = std::env::var("GITHUB_SHA")
            .ok()
            .map(|sha| sha.chars().take(8).collect::<String>());
        let summary = report.summary();
        Self {
            generated_at: timestamp.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            git_rev,
            notes,
            report,
            summary,
        }
    }
}

pub(crate) struct DashboardFiles {
    pub(crate) json: PathBuf,
    pub(crate) csv: PathBuf,
    pub(crate) html: PathBuf,
}

pub(crate) fn render_table(report: &SweepReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>12}  {:>16}  {:>16}  {:>10}",
        "Array Size", "Loop (s)", "Vectorized (s)", "Speedup"
    );
    let _ = writeln!(out, "{}", "-".repeat(12 + 2 + 16 + 2 + 16 + 2 + 10));
    for point in &report.points {
        let _ = writeln!(
            out,
            "{:>12}  {:>16.9}  {:>16.9}  {:>10}",
            point.size,
            point.loop_secs,
            point.vectorized_secs,
            point.speedup.to_string()
        );
    }
    out
}

pub(crate) fn render_insights(summary: &SweepSummary) -> String {
    let fmt_ratio = |value: Option<f64>| match value {
        Some(r) => format!("{:.2}x", r),
        None => "n/a".to_string(),
    };
    let mut out = String::new();
    if summary.vectorized_always_faster {
        let _ = writeln!(out, "- Vectorized was faster than the loop at every array size.");
    } else {
        let _ = writeln!(out, "- The loop matched or beat vectorized at one or more array sizes.");
    }
    let _ = writeln!(out, "- Maximum speedup observed: {}", fmt_ratio(summary.max_speedup));
    let _ = writeln!(out, "- Minimum speedup observed: {}", fmt_ratio(summary.min_speedup));
    if summary.zero_readings > 0 {
        let _ = writeln!(
            out,
            "- {} size(s) read zero seconds on one probe and have no speedup ratio.",
            summary.zero_readings
        );
    }
    out
}

pub(crate) fn render_csv(points: &[SweepPoint]) -> String {
    let mut out = String::from("array_size,loop_seconds,vectorized_seconds,speedup\n");
    for point in points {
        let speedup = point.speedup.ratio().map(|r| format!("{:.6}", r)).unwrap_or_default();
        let _ = writeln!(
            out,
            "{},{:.9},{:.9},{}",
            point.size, point.loop_secs, point.vectorized_secs, speedup
        );
    }
    out
}

pub(crate) fn render_json(record: &RunRecord) -> Result<String> {
    serde_json::to_string_pretty(record).context("serialize run record")
}

pub(crate) fn render_dashboard(record: &RunRecord) -> Result<String> {
    let json = serde_json::to_string(record).context("serialize run record to embed in HTML")?;
    // Keep user-supplied notes from closing the surrounding <script> element.
    let json = json.replace("</", "<\\/");
    Ok(DASHBOARD_TEMPLATE.replace(DATA_PLACEHOLDER, &json))
}

pub(crate) fn write_dashboard(output_dir: &Path, record: &RunRecord) -> Result<DashboardFiles> {
    if !output_dir.exists() {
        fs::create_dir_all(output_dir).with_context(|| format!("create output directory {}", output_dir.display()))?;
    }

    let files = DashboardFiles {
        json: output_dir.join("latest.json"),
        csv: output_dir.join("latest.csv"),
        html: output_dir.join("index.html"),
    };
    write_json(&files.json, record)?;
    write_text(&files.csv, &render_csv(&record.report.points))?;
    write_text(&files.html, &render_dashboard(record)?)?;
    Ok(files)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value).with_context(|| format!("write {}", path.display()))
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path).with_context(|| format!("create {}", path.display()))?);
    writer
        .write_all(contents.as_bytes())
        .with_context(|| format!("write {}", path.display()))?;
    writer.flush()?;
    Ok(())
}
