use thiserror::Error;

#[derive(Debug, Error)]
pub enum LegisError {
    #[error("bill not found: {0}")]
    BillNotFound(String),

    #[error("invalid bill id '{0}': expected <type><number>-<congress>, e.g. 'hr627-112'")]
    InvalidBillId(String),

    #[error("unknown bill type: {0}")]
    UnknownBillType(String),

    #[error("unknown status: {0}")]
    UnknownStatus(String),

    #[error("invalid event key: {0}")]
    InvalidEventKey(String),

    #[error("duplicate cosponsor: {0}")]
    DuplicateCosponsor(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, LegisError>;
