//! A bounded ranking container, plus a small CLI that uses it to find
//! the largest files under a directory.
//!
//! The container, [`BoundedRankedList`], keeps at most N elements
//! sorted by a caller-supplied comparison and evicts the lowest-ranked
//! element when a better one arrives. The CLI walks a directory tree,
//! sizes every file in parallel, and folds the results into per-worker
//! lists that are merged into the final top-N.

pub mod args;
pub mod config;
pub mod errors;
pub mod ranked_list;
pub mod traits;


pub use ranked_list::{BoundedRankedList, TieBreak};

use std::cmp::Ordering;
use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use filesize::PathExt;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::config::Config;
use crate::errors::ScanError;
use crate::traits::ByteSize;

type FileEntry = (PathBuf, u64);
type Compare = fn(&FileEntry, &FileEntry) -> Ordering;
type FileRanking = BoundedRankedList<FileEntry, Compare>;

fn by_size_descending(a: &FileEntry, b: &FileEntry) -> Ordering {
    b.1.cmp(&a.1)
}

fn new_ranking(capacity: usize) -> FileRanking {
    BoundedRankedList::new(capacity, by_size_descending as Compare)
}

/// Runs the scan described by `config` and prints the largest files
/// found, biggest first.
///
/// Per-file failures (unreadable metadata, permission problems) are
/// collected rather than fatal; they are listed when `verbose` is set
/// and summarized otherwise. Only a failure to read the scan root
/// aborts the run.
pub fn run(config: Config) -> Result<(), Box<dyn Error>> {
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .build_global()
    {
        log::error!(
            "Could not configure thread pool, continuing with defaults: {}",
            e
        );
    }

    if !config.root_path.is_dir() {
        return Err(Box::new(ScanError::Path(format!(
            "{} is not a directory",
            config.root_path.display()
        ))));
    }

    println!(
        "Searching for the {} largest files in {}:\n",
        config.num_entries,
        config.root_path.display()
    );

    let mut files = Vec::new();
    collect_files(&config.root_path, &config.skip_dirs, &mut files)?;
    log::debug!("Collected {} candidate files", files.len());

    let (ranking, failures) = rank_files(config.num_entries, &files);

    for (path, size) in ranking.iter() {
        println!("{:>12}  {}", size.format_size(), path.display());
    }

    if !failures.is_empty() {
        if config.verbose {
            eprintln!("\n{} files could not be sized:", failures.len());
            for failure in &failures {
                eprintln!("  {}", failure);
            }
        } else {
            eprintln!(
                "\n{} files could not be sized (re-run with --verbose to list them)",
                failures.len()
            );
        }
    }

    Ok(())
}

/// Walks `dir` recursively, pushing every file found onto `files`.
///
/// Directories whose name appears in `skip_dirs` are not entered. An
/// unreadable subdirectory is logged and skipped; only the directory
/// passed by the caller produces an error.
fn collect_files(
    dir: &Path,
    skip_dirs: &HashSet<String>,
    files: &mut Vec<PathBuf>,
) -> Result<(), ScanError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if skip_dirs.contains(name) {
                    log::debug!("Skipping excluded directory {}", path.display());
                    continue;
                }
            }
            if let Err(e) = collect_files(&path, skip_dirs, files) {
                log::warn!("Could not read directory {}: {}", path.display(), e);
            }
        } else {
            files.push(path);
        }
    }
    Ok(())
}

/// Sizes `files` in parallel and returns the top entries by size on
/// disk, along with descriptions of any files that could not be sized.
///
/// Each rayon worker folds into its own ranking so the lists are never
/// shared across threads; the reduce step merges them by draining one
/// list into the other.
fn rank_files(num_entries: usize, files: &[PathBuf]) -> (FileRanking, Vec<String>) {
    let bar = ProgressBar::new(files.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} files sized")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    files
        .par_iter()
        .progress_with(bar)
        .fold(
            || (new_ranking(num_entries), Vec::new()),
            |(mut ranking, mut failures), path| {
                match sized_entry(path) {
                    Ok(entry) => {
                        ranking.insert(entry);
                    }
                    Err(e) => failures.push(format!("{}: {}", path.display(), e)),
                }
                (ranking, failures)
            },
        )
        .reduce(
            || (new_ranking(num_entries), Vec::new()),
            |(mut ranking, mut failures), (other, mut other_failures)| {
                for entry in other.into_sorted_vec() {
                    ranking.insert(entry);
                }
                failures.append(&mut other_failures);
                (ranking, failures)
            },
        )
}

fn sized_entry(path: &Path) -> Result<FileEntry, ScanError> {
    let metadata = path.symlink_metadata()?;
    let size = path.size_on_disk_fast(&metadata)?;
    Ok((path.to_path_buf(), size))
}
