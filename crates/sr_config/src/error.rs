pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("environment file error: {0}")]
    EnvFile(#[from] dotenvy::Error),
}
