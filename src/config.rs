use crate::args::Args;
use std::collections::HashSet;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Configuration structure containing runtime settings for the CLI.
///
/// # Fields
///
/// * `num_threads` - Number of threads used to size files in parallel
/// * `num_entries` - Number of largest files to output at completion
/// * `root_path` - Base directory path to recursively find and size files
/// * `skip_dirs` - Set of directory names to exclude from the search
/// * `verbose` - Whether per-file failures collected during the scan are printed
///
#[derive(Clone)]
pub struct Config {
    pub num_threads: usize,
    pub num_entries: usize,
    pub root_path: PathBuf,
    pub skip_dirs: HashSet<String>,
    pub verbose: bool,
}

impl Config {
    /// Builds a new Config instance from provided command line arguments.
    ///
    /// Thread count comes from the `--threads` flag when given, falling
    /// back to detected parallelism. The scan root comes from the
    /// `--directory` flag, falling back to the current working
    /// directory. When an exclusion file is supplied, each non-empty
    /// line names a directory to skip during the walk.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined
    /// when no target directory is specified, or if the exclusion file
    /// cannot be opened.
    pub fn build(args: &Args) -> Result<Config, Box<dyn Error>> {
        let num_threads = args
            .threads
            .filter(|n| *n > 0)
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            });

        println!("Preparing to scan using {} threads", num_threads);

        let num_entries = args.num_entries;
        let verbose = args.verbose;

        let root_path = if let Some(target_dir) = &args.target_dir {
            PathBuf::from(target_dir)
        } else {
            env::current_dir()?
        };

        let mut skip_dirs: HashSet<String> = HashSet::new();
        if let Some(exclusion_file) = &args.exclusion_file {
            let file = File::open(exclusion_file)?;

            let reader = BufReader::new(file);
            for line in reader.lines() {
                match line {
                    Ok(dir) => {
                        let dir = dir.trim();
                        if !dir.is_empty() {
                            skip_dirs.insert(dir.to_string());
                        }
                    }
                    Err(e) => log::error!("Error reading line: {}", e),
                }
            }
        }

        Ok(Config {
            num_threads,
            num_entries,
            root_path,
            skip_dirs,
            verbose,
        })
    }
}
