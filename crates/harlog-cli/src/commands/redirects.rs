use crate::OutputFormat;
use anyhow::Result;
use harlog_core::har::{HarReader, ReaderOptions};
use std::path::Path;

/// One entry whose response carries a redirect target
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RedirectRow {
    pub index: usize,
    pub status: i64,
    pub method: String,
    pub request_url: String,
    pub redirect_url: String,
}

/// Read a HAR file and list every entry with a non-empty redirect URL
pub fn collect_redirects(file: &Path, options: &ReaderOptions) -> Result<Vec<RedirectRow>> {
    let har = HarReader::from_file_with(file, options)?;

    let rows: Vec<RedirectRow> = har
        .log
        .entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.response.has_redirect_url())
        .map(|(index, e)| RedirectRow {
            index,
            status: e.response.status,
            method: e.request.method.clone(),
            request_url: e.request.url.clone(),
            redirect_url: e.response.redirect_url.clone(),
        })
        .collect();

    tracing::debug!("Found {} redirects", rows.len());

    Ok(rows)
}

pub fn execute(file: &Path, format: OutputFormat, options: &ReaderOptions) -> Result<()> {
    tracing::info!("Listing redirects in HAR file: {}", file.display());

    let rows = collect_redirects(file, options)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Pretty => output_pretty(&rows),
    }

    Ok(())
}

fn output_pretty(rows: &[RedirectRow]) {
    use console::style;

    if rows.is_empty() {
        println!("{}", style("No redirects found").yellow());
        return;
    }

    println!("\n{}", style("Redirects").bold().cyan());
    for row in rows {
        println!(
            "  #{:<4} {} {} {}",
            row.index,
            style(row.status).yellow(),
            style(&row.method).dim(),
            row.request_url
        );
        println!("        -> {}", style(&row.redirect_url).green());
    }
    println!();
}
