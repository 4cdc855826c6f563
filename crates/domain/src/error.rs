#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    #[error("unknown effect field: {0}")]
    UnknownEffectField(String),
    #[error("invalid value {value:?} for effect field {field}")]
    InvalidEffectValue { field: &'static str, value: String },
    #[error("effect parameter {0} must be finite")]
    NonFiniteEffectParam(&'static str),
    #[error("invalid date stamp {0:?}, expected MM-DD-YYYY")]
    InvalidDateStamp(String),
}
