use crate::model::{Project, Selection};
use eyre::{Error, WrapErr, bail};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

pub const DEFAULT_OUTPUT_FILE: &str = "selectedProjects.txt";

/// Reads a budget and projects from a text file, and writes selections back.
///
/// The first line holds the budget. Every following line holds the cost and
/// the value of a project separated by a single space.
pub struct Loader {
    path: PathBuf,
}

impl Loader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<(i64, Vec<Project>), Error> {
        let content = fs::read(&self.path)
            .wrap_err_with(|| format!("cannot read {}", self.path.display()))?;
        let (budget, projects) = parse(&content)
            .wrap_err_with(|| format!("cannot load {}", self.path.display()))?;
        debug!(budget, projects = projects.len(), "input loaded");
        Ok((budget, projects))
    }

    /// Location of the output file: next to the input file, or in the current
    /// directory when the input path has no parent.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
            _ => PathBuf::from(file_name),
        }
    }

    pub fn save_selection(&self, selection: &Selection, output: &Path) -> Result<(), Error> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .delimiter(b' ')
            .from_path(output)
            .wrap_err_with(|| format!("cannot create {}", output.display()))?;
        for project in &selection.projects {
            writer
                .serialize(project)
                .wrap_err_with(|| format!("cannot write to {}", output.display()))?;
        }
        writer
            .flush()
            .wrap_err_with(|| format!("cannot write to {}", output.display()))?;
        debug!(path = %output.display(), projects = selection.len(), "selection saved");
        Ok(())
    }
}

/// Parse the budget line followed by the project lines. Only the budget line
/// has to be valid UTF-8, other lines are checked one by one.
pub fn parse(content: impl AsRef<[u8]>) -> Result<(i64, Vec<Project>), Error> {
    let content = content.as_ref();
    let (first, rest) = match content.iter().position(|&b| b == b'\n') {
        Some(end) => (&content[..end], &content[end + 1..]),
        None => (content, &[][..]),
    };
    let first = std::str::from_utf8(first).wrap_err("budget line is not valid text")?;
    if first.trim().is_empty() {
        bail!("missing budget on the first line");
    }
    let budget = first
        .trim()
        .parse::<i64>()
        .wrap_err_with(|| format!("invalid budget {:?}", first.trim()))?;
    Ok((budget, read_projects(rest, 1)))
}

/// Read `<cost> <value>` lines. Lines which do not hold exactly two integers
/// are reported and skipped, trailing spaces being ignored. `skipped_lines` is
/// only used to number lines in diagnostics.
pub fn read_projects<R: Read>(reader: R, skipped_lines: u64) -> Vec<Project> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .flexible(true)
        .quoting(false)
        .from_reader(reader);
    let mut projects = Vec::new();
    // Records never span lines without quoting, so a gap between two records
    // is made of the empty lines the reader skipped.
    let mut next_line = 1;
    for record in reader.records() {
        let mut record = match record {
            Ok(record) => record,
            Err(e) => {
                let line = e.position().map(|p| p.line());
                if let Some(line) = line {
                    next_line = line + 1;
                }
                warn!(
                    line = line.map(|l| l + skipped_lines),
                    error = %e,
                    "missed unreadable line"
                );
                continue;
            }
        };
        let relative = record.position().map_or(next_line, |p| p.line());
        for empty in next_line..relative {
            warn!(line = empty + skipped_lines, "missed empty line");
        }
        next_line = relative + 1;
        let line = relative + skipped_lines;
        let kept = record
            .iter()
            .collect::<Vec<_>>()
            .iter()
            .rposition(|f| !f.is_empty())
            .map_or(0, |i| i + 1);
        record.truncate(kept);
        let text = record.iter().collect::<Vec<_>>().join(" ");
        if record.len() != 2 {
            warn!(line, content = %text, "missed line due to format error");
            continue;
        }
        match record.deserialize::<Project>(None) {
            Ok(project) => {
                trace!(line, %project, "project loaded");
                projects.push(project);
            }
            Err(e) => warn!(line, content = %text, error = %e, "error parsing number"),
        }
    }
    projects
}
