//! Filesystem and stdin adapter for reading landmark frames.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gazewatch_core::{FrameRecord, FrameSource};
use tracing::{debug, warn};

use crate::wire::parse_frame;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Supported frame file extensions.
const FRAME_EXTENSIONS: &[&str] = &["jsonl", "ndjson", "json"];

/// One input to read frames from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

/// JSON Lines frame source over files, directories and stdin.
pub struct JsonlFrameSource {
    paths: Vec<PathBuf>,
    recursive: bool,
}

impl JsonlFrameSource {
    /// Creates a new frame source.
    ///
    /// # Arguments
    ///
    /// * `paths` - Files or directories to read, or `-` for stdin
    /// * `recursive` - Whether to recurse into subdirectories
    #[must_use]
    pub const fn new(paths: Vec<PathBuf>, recursive: bool) -> Self {
        Self { paths, recursive }
    }

    /// Resolves the configured paths to concrete inputs.
    fn collect_inputs(&self) -> Vec<Input> {
        let mut inputs = Vec::new();

        for path in &self.paths {
            if path.as_os_str() == STDIN_PATH {
                inputs.push(Input::Stdin);
            } else if path.is_file() {
                if is_supported_frame_file(path) {
                    inputs.push(Input::File(path.clone()));
                } else {
                    warn!("Unsupported file type: {}", path.display());
                }
            } else if path.is_dir() {
                let mut files = Vec::new();
                self.collect_from_dir(path, &mut files);
                files.sort();
                inputs.extend(files.into_iter().map(Input::File));
            } else {
                warn!("Path does not exist: {}", path.display());
            }
        }

        inputs
    }

    fn collect_from_dir(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match std::fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                warn!("Failed to read directory {}: {e}", dir.display());
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() && is_supported_frame_file(&path) {
                files.push(path);
            } else if path.is_dir() && self.recursive {
                self.collect_from_dir(&path, files);
            }
        }
    }
}

impl FrameSource for JsonlFrameSource {
    fn frames(&self) -> Box<dyn Iterator<Item = Result<FrameRecord>> + Send + '_> {
        let inputs = self.collect_inputs();
        debug!("Reading frames from {} input(s)", inputs.len());

        Box::new(inputs.into_iter().flat_map(open_input))
    }

    fn count_hint(&self) -> Option<usize> {
        None
    }
}

/// Checks if a path has a supported frame file extension.
fn is_supported_frame_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .is_some_and(|e| FRAME_EXTENSIONS.contains(&e.as_str()))
}

type FrameIter = Box<dyn Iterator<Item = Result<FrameRecord>> + Send>;

/// Opens an input and returns a lazy iterator over its frames.
fn open_input(input: Input) -> FrameIter {
    let (source, reader): (String, Box<dyn BufRead + Send>) = match input {
        Input::Stdin => (STDIN_PATH.to_string(), Box::new(BufReader::new(io::stdin()))),
        Input::File(path) => match File::open(&path) {
            Ok(file) => (
                path.to_string_lossy().into_owned(),
                Box::new(BufReader::new(file)),
            ),
            Err(e) => {
                let err = anyhow::Error::new(e)
                    .context(format!("Failed to open frame file: {}", path.display()));
                return Box::new(std::iter::once(Err(err)));
            }
        },
    };

    Box::new(FrameLines::new(source, reader))
}

/// Iterator over the frames of one line-delimited input.
struct FrameLines {
    source: String,
    lines: Lines<Box<dyn BufRead + Send>>,
    line_no: usize,
    next_index: usize,
    done: bool,
}

impl FrameLines {
    fn new(source: String, reader: Box<dyn BufRead + Send>) -> Self {
        Self {
            source,
            lines: reader.lines(),
            line_no: 0,
            next_index: 0,
            done: false,
        }
    }
}

impl Iterator for FrameLines {
    type Item = Result<FrameRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    // The undecodable line is already consumed.
                    self.line_no += 1;
                    self.next_index += 1;
                    return Some(Err(anyhow::Error::new(e).context(format!(
                        "Invalid frame at {}:{}",
                        self.source, self.line_no
                    ))));
                }
                Err(e) => {
                    // Other read errors end this input.
                    self.done = true;
                    return Some(Err(anyhow::Error::new(e)
                        .context(format!("Failed to read {}", self.source))));
                }
            };
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }

            let index = self.next_index;
            self.next_index += 1;

            let record = parse_frame(&line)
                .with_context(|| format!("Invalid frame at {}:{}", self.source, self.line_no))
                .map(|face| FrameRecord {
                    source: self.source.clone(),
                    index,
                    face,
                });
            return Some(record);
        }
    }
}
