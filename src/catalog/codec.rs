use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::Catalog;
use super::entry::{Entry, Status, name_rejection};
use super::error::CatalogError;

const SEPARATOR: char = ';';

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LoadReport {
    pub(crate) loaded: usize,
    pub(crate) malformed: usize,
    pub(crate) duplicates: usize,
}

#[derive(Debug, Default)]
pub(crate) struct Decoded {
    pub(crate) entries: Vec<Entry>,
    pub(crate) malformed: usize,
}

/// One `name;Status` line per title: pending first, then watched, then dropped.
pub(crate) fn encode_lines(catalog: &Catalog) -> String {
    let mut out = String::new();
    for status in Status::ALL {
        for entry in catalog.partition(status).iter() {
            out.push_str(&entry.name);
            out.push(SEPARATOR);
            out.push_str(entry.status.as_str());
            out.push('\n');
        }
    }
    out
}

/// Decodes line by line; a line that is not valid UTF-8 counts as malformed
/// without spoiling the rest of the file.
pub(crate) fn decode_lines(raw: &[u8]) -> Decoded {
    let mut decoded = Decoded::default();
    for bytes in raw.split(|byte| *byte == b'\n') {
        let Ok(line) = std::str::from_utf8(bytes) else {
            decoded.malformed += 1;
            continue;
        };
        match parse_line(line) {
            Some(entry) => decoded.entries.push(entry),
            None if !line.trim().is_empty() => decoded.malformed += 1,
            None => {}
        }
    }
    decoded
}

pub(crate) fn parse_line(line: &str) -> Option<Entry> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (name, status) = line.split_once(SEPARATOR)?;
    if name_rejection(name).is_some() {
        return None;
    }
    let status = status.parse::<Status>().ok()?;
    Some(Entry::new(name, status))
}

impl Catalog {
    pub(crate) fn open(path: &Path) -> Result<(Self, LoadReport), CatalogError> {
        let mut catalog = Self::new();
        let report = catalog.load_from_file(path)?;
        Ok((catalog, report))
    }

    /// Merges titles from `path` into this catalog. A missing file loads nothing.
    pub(crate) fn load_from_file(&mut self, path: &Path) -> Result<LoadReport, CatalogError> {
        let raw = match fs::read(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no saved catalog found");
                return Ok(LoadReport::default());
            }
            Err(err) => return Err(io_error("read", path)(err)),
        };

        let decoded = decode_lines(&raw);
        let mut report = LoadReport {
            malformed: decoded.malformed,
            ..LoadReport::default()
        };
        for entry in decoded.entries {
            let name = entry.name.clone();
            if self.restore(entry) {
                report.loaded += 1;
            } else {
                warn!(title = %name, "skipping duplicate title in saved catalog");
                report.duplicates += 1;
            }
        }
        if report.malformed > 0 {
            warn!(
                path = %path.display(),
                lines = report.malformed,
                "ignored malformed line(s) in saved catalog"
            );
        }
        info!(path = %path.display(), titles = report.loaded, "loaded catalog");
        Ok(report)
    }

    /// Writes the catalog through a sibling temp file so a failed save never
    /// leaves a truncated data file behind.
    pub(crate) fn save_to_file(&self, path: &Path) -> Result<(), CatalogError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_error("create directory", parent))?;
        }
        let tmp = temp_path(path);
        fs::write(&tmp, encode_lines(self)).map_err(io_error("write", &tmp))?;
        if let Err(err) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(io_error("replace", path)(err));
        }
        info!(path = %path.display(), titles = self.len(), "saved catalog");
        Ok(())
    }
}

/// `<file>.tmp.<pid>` next to the destination, so the final rename stays on
/// one file system.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(format!(".tmp.{}", std::process::id()));
    path.with_file_name(name)
}

fn io_error(action: &'static str, path: &Path) -> impl FnOnce(io::Error) -> CatalogError {
    let path = path.to_path_buf();
    move |source| CatalogError::Io {
        action,
        path,
        source,
    }
}
