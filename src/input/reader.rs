//! Asynchronous cancellable line reading
//!
//! Input files are consumed lazily, one line per await, so callers can stop
//! early without reading the whole file. A [`CancellationToken`] aborts a
//! read in progress; the reader owns its file handle, which is therefore
//! released on every exit path, whether the file was drained, the read
//! failed, or the token fired.

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio_util::sync::CancellationToken;

use crate::error::{GridError, Result};

/// Lazy line source over a file
///
/// Lines come back in file order. With `skip_empty` enabled, lines that are
/// empty or consist solely of whitespace are dropped.
#[derive(Debug)]
pub struct LineReader {
    lines: Lines<BufReader<File>>,
    path: PathBuf,
    skip_empty: bool,
    token: CancellationToken,
}

impl LineReader {
    /// Open a file for line reading with a fresh, never-fired token
    ///
    /// # Errors
    ///
    /// Returns [`GridError::FileSystem`] when the file cannot be opened.
    pub async fn open(path: impl AsRef<Path>, skip_empty: bool) -> Result<Self> {
        Self::open_with_token(path, skip_empty, CancellationToken::new()).await
    }

    /// Open a file for line reading under an external cancellation token
    ///
    /// # Errors
    ///
    /// Returns [`GridError::FileSystem`] when the file cannot be opened.
    pub async fn open_with_token(
        path: impl AsRef<Path>,
        skip_empty: bool,
        token: CancellationToken,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)
            .await
            .map_err(|source| GridError::FileSystem {
                path: path.clone(),
                operation: "open",
                source,
            })?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            path,
            skip_empty,
            token,
        })
    }

    /// Read the next line, or `None` once the file is drained
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Cancelled`] when the token has fired and
    /// [`GridError::FileSystem`] when the underlying read fails.
    pub async fn next_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = tokio::select! {
                biased;
                () = self.token.cancelled() => {
                    return Err(GridError::Cancelled {
                        path: self.path.clone(),
                    });
                }
                line = self.lines.next_line() => {
                    line.map_err(|source| GridError::FileSystem {
                        path: self.path.clone(),
                        operation: "read",
                        source,
                    })?
                }
            };
            match line {
                None => return Ok(None),
                Some(line) if self.skip_empty && line.trim().is_empty() => {}
                Some(line) => return Ok(Some(line)),
            }
        }
    }
}
