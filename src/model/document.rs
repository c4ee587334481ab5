//! Document model - the line-addressed content store and its file state

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::error::EditError;

/// Metadata key holding the path `save` falls back to
pub const FILENAME_KEY: &str = "filename";

/// Mode used when no backing file tells us better (umask still applies)
#[cfg(unix)]
const DEFAULT_MODE: u32 = 0o666;

/// Document state - the ordered lines and associated file metadata
///
/// Entries may temporarily hold several physical lines (a freshly opened
/// file is stored as one entry). Call [`Document::normalize`] before
/// reasoning about line indices.
#[derive(Debug, Default)]
pub struct Document {
    lines: Vec<String>,
    /// Currently only `"filename"`
    pub metadata: BTreeMap<String, String>,
    /// Handle to the file this document was opened from, kept to recover
    /// its permission bits on save
    source: Option<File>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from already separated lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut doc = Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        };
        doc.normalize();
        doc
    }

    /// Load a document from a file path
    ///
    /// The whole content becomes a single entry, then gets normalized.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EditError> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| EditError::io(path, e))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| EditError::io(path, e))?;

        let mut metadata = BTreeMap::new();
        metadata.insert(FILENAME_KEY.to_string(), path.to_string_lossy().into_owned());

        let lines = if content.is_empty() {
            Vec::new()
        } else {
            vec![content]
        };

        let mut doc = Self {
            lines,
            metadata,
            source: Some(file),
        };
        doc.normalize();
        tracing::info!(
            "Opened {} ({} lines)",
            path.display(),
            doc.line_count()
        );
        Ok(doc)
    }

    /// Write the document out, one line per entry plus a trailing newline
    ///
    /// An empty `path` falls back to the remembered filename. Returns the
    /// path actually written.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf, EditError> {
        let target = match path {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => self
                .filename()
                .map(PathBuf::from)
                .ok_or(EditError::NoFilename)?,
        };

        let contents = self.text();
        write_file(&target, contents.as_bytes(), self.source_mode())
            .map_err(|e| EditError::io(&target, e))?;

        tracing::info!("Saved {} ({} bytes)", target.display(), contents.len());
        Ok(target)
    }

    /// Re-split every entry on embedded newlines so each entry is one line
    ///
    /// A single trailing newline on an entry does not yield an extra empty
    /// line; an empty entry stays one empty line.
    pub fn normalize(&mut self) {
        if !self.lines.iter().any(|l| l.contains('\n')) {
            return;
        }

        let split: Vec<String> = self
            .lines
            .iter()
            .flat_map(|entry| {
                let body = entry.strip_suffix('\n').unwrap_or(entry);
                body.split('\n').map(str::to_string).collect::<Vec<_>>()
            })
            .collect();
        self.lines = split;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The remembered filename, if any
    pub fn filename(&self) -> Option<&str> {
        self.metadata.get(FILENAME_KEY).map(String::as_str)
    }

    /// Full text as written by `save`
    pub fn text(&self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    /// Replace the line at `index` with `new_lines`
    pub fn replace_at(&mut self, index: usize, new_lines: &[String]) {
        self.lines.splice(index..=index, new_lines.iter().cloned());
    }

    /// Insert `new_lines` so the first of them lands at `index`
    pub fn insert_at(&mut self, index: usize, new_lines: &[String]) {
        self.lines.splice(index..index, new_lines.iter().cloned());
    }

    pub fn append(&mut self, new_lines: &[String]) {
        self.lines.extend(new_lines.iter().cloned());
    }

    pub fn remove_at(&mut self, index: usize) -> String {
        self.lines.remove(index)
    }

    pub fn remove_last(&mut self) -> Option<String> {
        self.lines.pop()
    }

    #[cfg(unix)]
    fn source_mode(&self) -> Option<u32> {
        use std::os::unix::fs::PermissionsExt;

        let file = self.source.as_ref()?;
        match file.metadata() {
            Ok(meta) => Some(meta.permissions().mode() & 0o7777),
            Err(e) => {
                tracing::warn!("Could not stat source file, using default mode: {}", e);
                None
            }
        }
    }

    #[cfg(not(unix))]
    fn source_mode(&self) -> Option<u32> {
        None
    }
}

#[cfg(unix)]
fn write_file(path: &Path, contents: &[u8], mode: Option<u32>) -> std::io::Result<()> {
    use std::fs::{OpenOptions, Permissions};
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(mode.unwrap_or(DEFAULT_MODE))
        .open(path)?;
    file.write_all(contents)?;

    // `mode` only applies on creation; existing files get it explicitly
    if let Some(mode) = mode {
        file.set_permissions(Permissions::from_mode(mode))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn write_file(path: &Path, contents: &[u8], _mode: Option<u32>) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents)
}
