use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagerError {
    #[error("invalid argument: `{name}` must be a positive integer, got {value}")]
    InvalidArgument { name: &'static str, value: usize },
    #[error("csv error")]
    Csv(#[from] csv::Error),
}

pub type PageResult<T> = Result<T, PagerError>;
