use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConcentrationError {
    #[error("Total voter weight is zero; concentration is undefined")]
    ZeroTotalWeight,
}

pub type Result<T> = std::result::Result<T, ConcentrationError>;
