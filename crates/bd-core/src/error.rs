use thiserror::Error;

pub type BdResult<T> = Result<T, BdError>;

#[derive(Error, Debug)]
pub enum BdError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}
