use crate::OutputFormat;
use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use harlog_core::har::{Har, HarReader, ReaderOptions, authority, known_duration};
use std::collections::HashMap;
use std::path::Path;
use url::Url;

/// Statistics extracted from a HAR file
#[derive(Debug, Clone, serde::Serialize)]
pub struct HarStats {
    pub file_name: String,
    pub version: String,
    pub creator: String,
    pub browser: Option<String>,
    pub total_entries: usize,
    pub total_pages: usize,
    pub redirects: usize,
    pub time_range: Option<TimeRange>,
    /// Sum of every measured entry time, in milliseconds
    pub total_time: f64,
    /// Entries whose time was recorded as unknown
    pub unmeasured_entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<HostCount>>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
    pub duration_display: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HostCount {
    pub authority: String,
    pub request_count: usize,
}

/// Read a HAR file and compute its statistics
pub fn collect_stats(file: &Path, include_hosts: bool, options: &ReaderOptions) -> Result<HarStats> {
    tracing::debug!("Reading HAR file: {}", file.display());

    let har = HarReader::from_file_with(file, options)?;
    let entries = &har.log.entries;

    let times: Vec<f64> = entries
        .iter()
        .filter_map(|e| known_duration(e.time))
        .collect();

    let stats = HarStats {
        file_name: file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string()),
        version: har.log.version.clone(),
        creator: format!("{} {}", har.log.creator.name, har.log.creator.version),
        browser: har
            .log
            .browser
            .as_ref()
            .map(|b| format!("{} {}", b.name, b.version)),
        total_entries: entries.len(),
        total_pages: har.log.pages.as_ref().map_or(0, Vec::len),
        redirects: entries
            .iter()
            .filter(|e| e.response.has_redirect_url())
            .count(),
        time_range: time_range(&har),
        total_time: times.iter().sum(),
        unmeasured_entries: entries.len() - times.len(),
        hosts: include_hosts.then(|| count_hosts(&har)),
    };

    tracing::info!(
        "Collected statistics for {} entries across {} pages",
        stats.total_entries,
        stats.total_pages
    );

    Ok(stats)
}

pub fn execute(file: &Path, hosts: bool, format: OutputFormat, options: &ReaderOptions) -> Result<()> {
    tracing::info!("Extracting statistics from HAR file: {}", file.display());

    let stats = collect_stats(file, hosts, options)?;

    match format {
        OutputFormat::Json => output_json(&stats)?,
        OutputFormat::Pretty => output_pretty(&stats),
    }

    Ok(())
}

fn time_range(har: &Har) -> Option<TimeRange> {
    let starts = har.log.entries.iter().map(|e| e.started_date_time);
    let start = starts.clone().min()?;
    let end = starts.max()?;

    Some(TimeRange {
        start: start.to_rfc3339(),
        end: end.to_rfc3339(),
        duration_display: format_duration(start, end),
    })
}

/// Count requests per `scheme://host[:port]`, busiest first
fn count_hosts(har: &Har) -> Vec<HostCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for entry in &har.log.entries {
        if let Ok(url) = Url::parse(&entry.request.url)
            && let Some(key) = authority(&url)
        {
            *counts.entry(key).or_default() += 1;
        }
    }

    let mut hosts: Vec<HostCount> = counts
        .into_iter()
        .map(|(authority, request_count)| HostCount {
            authority,
            request_count,
        })
        .collect();
    hosts.sort_by(|a, b| {
        b.request_count
            .cmp(&a.request_count)
            .then_with(|| a.authority.cmp(&b.authority))
    });
    hosts
}

/// Format duration for display
fn format_duration(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> String {
    let duration = end.signed_duration_since(start);
    let millis = duration.num_milliseconds();
    let secs = duration.num_seconds();

    if secs < 1 {
        format!("{}ms", millis)
    } else if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

fn output_pretty(stats: &HarStats) {
    use console::style;

    println!(
        "\n{}",
        style(format!("HAR Statistics: {}", stats.file_name))
            .bold()
            .cyan()
    );
    println!();

    println!("{}", style("Overview").bold());
    println!("  HAR Version:  {}", stats.version);
    println!("  Creator:      {}", stats.creator);
    if let Some(ref browser) = stats.browser {
        println!("  Browser:      {}", browser);
    }
    println!(
        "  Entries:      {} requests",
        style(stats.total_entries).yellow()
    );
    println!("  Pages:        {}", stats.total_pages);
    println!("  Redirects:    {}", stats.redirects);

    if let Some(ref tr) = stats.time_range {
        println!(
            "  Time Range:   {} to {} ({})",
            tr.start, tr.end, tr.duration_display
        );
    }

    println!("\n{}", style("Timing").bold());
    println!("  Total Time:   {:.2}ms", stats.total_time);
    if stats.unmeasured_entries > 0 {
        println!(
            "  Unmeasured:   {}",
            style(stats.unmeasured_entries).dim()
        );
    }

    if let Some(ref hosts) = stats.hosts {
        println!("\n{}", style("Hosts").bold());
        for host in hosts {
            println!(
                "  {:<40} {} requests",
                style(&host.authority).green(),
                host.request_count
            );
        }
    }

    println!();
}

fn output_json(stats: &HarStats) -> Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    println!("{}", json);
    Ok(())
}
