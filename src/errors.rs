/// Error conditions reported by [`BoundedRankedList`](crate::ranked_list::BoundedRankedList).
///
/// Both conditions are local to the operation that raised them: the list
/// is left exactly as it was, still sorted and still within capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankError {
    /// A query such as `top()` or `bottom()` was made against a list
    /// holding no elements.
    EmptyContainer,

    /// A removal was requested for a value with no matching element in
    /// the list.
    NotFound,
}

impl std::fmt::Display for RankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankError::EmptyContainer => write!(f, "the list holds no elements"),
            RankError::NotFound => write!(f, "no matching element in the list"),
        }
    }
}

impl std::error::Error for RankError {}

/// Error type for failures met while scanning the filesystem.
///
/// Used by the bundled CLI, which walks a directory tree and sizes the
/// files it finds. Per-file failures are collected and reported; only
/// failures on the root of the scan are fatal.
#[derive(Debug)]
pub enum ScanError {
    /// Underlying I/O error from the standard library, such as a
    /// directory that cannot be read or metadata that cannot be fetched.
    Io(std::io::Error),

    /// A path that cannot be scanned, such as a root that is not a
    /// directory.
    Path(String),
}

impl From<std::io::Error> for ScanError {
    /// Lets `?` convert standard I/O errors into [`ScanError`].
    ///
    /// # Examples
    /// ```
    /// use std::fs::File;
    /// use toplist::errors::ScanError;
    ///
    /// fn open_missing() -> Result<(), ScanError> {
    ///     let _file = File::open("does-not-exist.txt")?;
    ///     Ok(())
    /// }
    /// assert!(matches!(open_missing(), Err(ScanError::Io(_))));
    /// ```
    fn from(err: std::io::Error) -> Self {
        ScanError::Io(err)
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::Io(e) => write!(f, "IO error: {}", e),
            ScanError::Path(e) => write!(f, "Path error: {}", e),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io(e) => Some(e),
            _ => None,
        }
    }
}
