use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortError {
    #[error("failed to read input file {}: {source}", .path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("input file {} contains no items", .0.display())]
    EmptyInput(PathBuf),

    #[error("the prompt was closed before an answer was given")]
    PromptClosed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type SortResult<T> = Result<T, SortError>;
