use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("canvas adapter failure: {0}")]
    Adapter(String),

    #[error("chart is not mounted; call `mount` before `update`")]
    NotMounted,

    #[error("chart is already mounted")]
    AlreadyMounted,

    #[error("chart was destroyed and accepts no further calls")]
    Destroyed,
}
