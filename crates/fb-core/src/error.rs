use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Value out of physical domain for {what}: {value}")]
    Domain { what: &'static str, value: f64 },

    #[error("Non-finite numeric value for {what}")]
    NonFinite { what: &'static str },
}
