use crate::error::DeployKeyError;

pub type DeployKeyResult<T> = std::result::Result<T, DeployKeyError>;
