use std::path::PathBuf;

use crate::input::InputError;

#[derive(thiserror::Error, Debug)]
pub enum FluxoError {
    #[error("invalid user input: {0}")]
    InvalidUserInput(String),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failure writing '{path}': {message}")]
    Write { path: PathBuf, message: String },
}
