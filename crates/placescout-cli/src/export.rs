//! Writers for a finished [`CategoryResultSet`].
//!
//! Three formats are supported: a pretty-printed JSON document keyed by
//! category label, a paginated PDF report, and the same report as plain
//! text. Placeholder text for missing values only ever appears in the
//! reports; the JSON keeps them as `null`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::ValueEnum;
use placescout_core::{CategoryResultSet, EnrichedPlace};

mod pdf;

const REPORT_TITLE: &str = "Tourism Information";

/// Body lines per report page, excluding the footer.
const PAGE_BODY_LINES: usize = 56;

const WRAP_WIDTH: usize = 78;

const UNAVAILABLE: &str = "unavailable";
const UNRATED: &str = "unrated";
const NO_DESCRIPTION: &str = "description unavailable";

/// Output format for `collect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON keyed by category label
    Json,
    /// Paginated PDF report
    Pdf,
    /// Paginated plain-text report
    Report,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pdf => "pdf",
            Self::Report => "txt",
        }
    }

    /// `{output_dir}/info-turismo.{ext}`
    pub(crate) fn default_path(self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("info-turismo.{}", self.extension()))
    }
}

/// Writes `results` to `path` in `format`, creating missing parent
/// directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written.
pub(crate) fn export(
    results: &CategoryResultSet,
    format: OutputFormat,
    path: &Path,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => export_json(results, path),
        OutputFormat::Pdf => export_pdf(results, path),
        OutputFormat::Report => export_report(results, path),
    }
}

pub(crate) fn export_json(results: &CategoryResultSet, path: &Path) -> anyhow::Result<()> {
    let mut out = create_output(path)?;
    write_json(results, &mut out)?;
    out.flush()
        .with_context(|| format!("failed to write {}", path.display()))
}

pub(crate) fn export_pdf(results: &CategoryResultSet, path: &Path) -> anyhow::Result<()> {
    let bytes = pdf::render_pdf(results)?;
    let mut out = create_output(path)?;
    out.write_all(&bytes)
        .and_then(|()| out.flush())
        .with_context(|| format!("failed to write {}", path.display()))
}

pub(crate) fn export_report(results: &CategoryResultSet, path: &Path) -> anyhow::Result<()> {
    let mut out = create_output(path)?;
    write_report(results, &mut out)
        .and_then(|()| out.flush())
        .with_context(|| format!("failed to write {}", path.display()))
}

fn create_output(path: &Path) -> anyhow::Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Serializes `results` as a pretty-printed JSON object, categories in run
/// order, followed by a trailing newline.
pub(crate) fn write_json<W: Write>(results: &CategoryResultSet, mut out: W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut out, results).context("failed to serialize results")?;
    writeln!(out).context("failed to write results")?;
    Ok(())
}

/// Renders the paginated text report.
///
/// A place's block is never split across pages unless it is longer than a
/// page on its own. Pages are separated by a form-feed line and each ends
/// with a `page N` footer.
pub(crate) fn write_report<W: Write>(
    results: &CategoryResultSet,
    mut out: W,
) -> std::io::Result<()> {
    let mut pager = Pager::new(PAGE_BODY_LINES);
    pager.push_block(vec![
        format!("{REPORT_TITLE:^WRAP_WIDTH$}").trim_end().to_owned(),
        String::new(),
    ]);

    if results.is_empty() {
        pager.push_block(vec!["No places collected.".to_owned()]);
    }

    for category in results.iter() {
        let heading = category.label.to_uppercase();
        let underline = "=".repeat(heading.chars().count());
        let mut header = vec![heading, underline, String::new()];

        if category.places.is_empty() {
            header.push("  (no places found)".to_owned());
            header.push(String::new());
            pager.push_block(header);
            continue;
        }

        // Keep the heading on the same page as the first place.
        for (i, place) in category.places.iter().enumerate() {
            let block = place_block(place);
            if i == 0 {
                header.extend(block);
                pager.push_block(std::mem::take(&mut header));
            } else {
                pager.push_block(block);
            }
        }
    }

    pager.write_to(&mut out)
}

fn place_block(place: &EnrichedPlace) -> Vec<String> {
    let summary = &place.summary;
    let detail = &place.detail;

    let rating = summary
        .rating
        .map_or_else(|| UNRATED.to_owned(), |r| format!("{r:.1}"));

    let mut lines = vec![
        summary.name.clone(),
        field_line("Address", summary.address.as_deref().unwrap_or(UNAVAILABLE)),
        field_line("Rating", &rating),
        field_line("Phone", detail.phone.as_deref().unwrap_or(UNAVAILABLE)),
        field_line("Website", detail.website.as_deref().unwrap_or(UNAVAILABLE)),
    ];

    match &detail.opening_hours {
        Some(hours) => {
            lines.push("  Hours:".to_owned());
            lines.extend(hours.iter().map(|h| format!("    {h}")));
        }
        None => lines.push(field_line("Hours", UNAVAILABLE)),
    }

    let description = detail.description.as_deref().unwrap_or(NO_DESCRIPTION);
    let mut wrapped = wrap(description, WRAP_WIDTH - 4).into_iter();
    lines.push(format!(
        "  Description: {}",
        wrapped.next().unwrap_or_default()
    ));
    lines.extend(wrapped.map(|l| format!("    {l}")));

    lines.push(String::new());
    lines
}

fn field_line(label: &str, value: &str) -> String {
    format!("  {label}: {value}")
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Accumulates report lines into fixed-height pages.
struct Pager {
    page_lines: usize,
    pages: Vec<Vec<String>>,
}

impl Pager {
    fn new(page_lines: usize) -> Self {
        Self {
            page_lines: page_lines.max(1),
            pages: Vec::new(),
        }
    }

    /// Appends `block`, starting a new page first if it would not fit on the
    /// current one.
    fn push_block(&mut self, block: Vec<String>) {
        let used = self.pages.last().map_or(self.page_lines, Vec::len);
        if used > 0 && used + block.len() > self.page_lines {
            self.pages.push(Vec::new());
        }
        for line in block {
            if self
                .pages
                .last()
                .map_or(true, |page| page.len() >= self.page_lines)
            {
                self.pages.push(Vec::new());
            }
            if let Some(page) = self.pages.last_mut() {
                page.push(line);
            }
        }
    }

    fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                writeln!(out, "\x0C")?;
            }
            for line in page {
                writeln!(out, "{line}")?;
            }
            for _ in page.len()..self.page_lines {
                writeln!(out)?;
            }
            writeln!(out)?;
            writeln!(out, "{:>WRAP_WIDTH$}", format!("page {}", i + 1))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
