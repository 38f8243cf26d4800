// src/processing/mod.rs

//! Walks entry handles depth-first and accumulates text-file contents.
//!
//! The walk is sequential: siblings are visited in listing order, and a
//! directory's paginated listing is drained to exhaustion before any child
//! is visited. Per-entry failures are absorbed into diagnostic records
//! rather than propagated, so the walk itself never fails; a host that
//! cannot even enumerate its top-level selection reports that before the
//! walk starts.

mod reader;

use crate::config::ProcessConfig;
use crate::constants::DEFAULT_MEDIA_TYPE;
use crate::core_types::{FileEntry, ProcessingError, ProcessingResult};
use crate::entry::{DirectoryHandle, Entry, FileHandle};
use crate::errors::Error;
use crate::filtering::is_text_file;
use crate::util::format_file_path;
use futures::future::BoxFuture;
use futures::FutureExt;
use log::{debug, warn};

/// Accumulates counts, entries, and diagnostics across one walk.
#[derive(Default)]
struct Accumulator {
    result: ProcessingResult,
    errors: Vec<ProcessingError>,
}

impl Accumulator {
    /// Counts a skip that has a cause worth reporting.
    fn record_skip(&mut self, file: String, error: Error) {
        warn!("Skipping {file}: {error}");
        self.result.skipped_files += 1;
        self.errors.push(ProcessingError {
            file,
            error: error.to_string(),
        });
    }
}

/// Walks the given top-level entries and accumulates every text file found.
///
/// Returns the accumulated [`ProcessingResult`] together with one
/// [`ProcessingError`] record per absorbed failure. The two are independent:
/// a walk with failures still yields a complete result for everything that
/// could be read.
///
/// # Examples
///
/// ```
/// use code_index::memory::MemoryFile;
/// use code_index::processing::process_entries;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let entries = vec![MemoryFile::new("hello.txt", "hi").into_entry()];
/// let (result, errors) = process_entries(entries).await;
///
/// assert_eq!(result.processed_files, 1);
/// assert_eq!(result.entries[0].path, "hello.txt");
/// assert!(errors.is_empty());
/// # }
/// ```
pub async fn process_entries(entries: Vec<Entry>) -> (ProcessingResult, Vec<ProcessingError>) {
    process_entries_with(entries, &ProcessConfig::default()).await
}

/// Same as [`process_entries`], with an explicit configuration.
pub async fn process_entries_with(
    entries: Vec<Entry>,
    config: &ProcessConfig,
) -> (ProcessingResult, Vec<ProcessingError>) {
    let mut acc = Accumulator::default();
    for entry in entries {
        process_entry(entry, String::new(), &mut acc, config).await;
    }
    debug!(
        "Processed {} files, skipped {} files",
        acc.result.processed_files, acc.result.skipped_files
    );
    debug!("Found {} text entries", acc.result.entries.len());
    (acc.result, acc.errors)
}

// Recursion over arbitrary tree depth needs a boxed future; an async fn
// cannot await itself directly.
fn process_entry<'a>(
    entry: Entry,
    path: String,
    acc: &'a mut Accumulator,
    config: &'a ProcessConfig,
) -> BoxFuture<'a, ()> {
    async move {
        match entry {
            Entry::File(file) => {
                process_file(file.as_ref(), &path, acc, config).await;
            }
            Entry::Directory(mut dir) => {
                let dir_path = if path.is_empty() {
                    dir.name().to_string()
                } else {
                    format!("{}/{}", path, dir.name())
                };
                let children = match drain_listing(dir.as_mut()).await {
                    Ok(children) => children,
                    Err(source) => {
                        // The listing cannot be restarted, so the whole
                        // subtree is dropped; nothing from it was counted.
                        let error = Error::Listing {
                            path: dir_path.clone(),
                            source,
                        };
                        warn!("{error}");
                        acc.errors.push(ProcessingError {
                            file: dir_path,
                            error: error.to_string(),
                        });
                        return;
                    }
                };
                for child in children {
                    process_entry(child, dir_path.clone(), acc, config).await;
                }
            }
        }
    }
    .boxed()
}

/// Drains a paginated listing to exhaustion, concatenating batches in
/// arrival order.
async fn drain_listing(dir: &mut dyn DirectoryHandle) -> std::io::Result<Vec<Entry>> {
    let mut children = Vec::new();
    loop {
        let batch = dir.next_batch().await?;
        if batch.is_empty() {
            break;
        }
        children.extend(batch);
    }
    Ok(children)
}

/// Runs one file through the per-file stages, updating the accumulator.
async fn process_file(
    file: &dyn FileHandle,
    parent_path: &str,
    acc: &mut Accumulator,
    config: &ProcessConfig,
) {
    let logical_path = format!("{}/{}", parent_path, file.name());
    let display_path = format_file_path(&logical_path);

    // --- 1. Count every encountered file, before any filtering ---
    acc.result.total_files += 1;
    acc.result.total_size += file.size();

    // --- 2. Size cap (checked before the file is ever opened) ---
    if file.size() > config.max_file_size {
        acc.record_skip(display_path, Error::SizeLimitExceeded);
        return;
    }

    // --- 3. Classification ---
    if !is_text_file(file.name(), file.media_type()) {
        // Not a failure, so no diagnostic record.
        debug!("Skipping non-text file: {display_path}");
        acc.result.skipped_files += 1;
        return;
    }

    // --- 4. Read ---
    match reader::read_file_text(file).await {
        Ok(content) => {
            let media_type = if file.media_type().is_empty() {
                DEFAULT_MEDIA_TYPE.to_string()
            } else {
                file.media_type().to_string()
            };
            acc.result.entries.push(FileEntry {
                path: display_path,
                content,
                size: file.size(),
                media_type,
            });
            acc.result.processed_files += 1;
        }
        Err(error) => {
            acc.record_skip(display_path, error);
        }
    }
}
