pub mod bulk;
pub mod lines;
pub mod store;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
