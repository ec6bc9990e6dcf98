use std::path::PathBuf;

/// failures reading the survey inputs. malformed or missing files are fatal
/// at load time; this pipeline assumes a valid, pre-cleaned dataset.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("failure reading file from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse '{path}' due to: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("failed to deserialize column {col} in file '{path}' due to: {message}")]
    Deserialize {
        col: String,
        path: PathBuf,
        message: String,
    },
}
