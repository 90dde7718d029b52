mod deploy_key_client;
mod error;
mod logging_middleware;
mod object_model;
mod result;
mod transport;

pub use self::deploy_key_client::{DeployKeyClient, DEFAULT_API_URL};
pub use self::error::{DeployKeyError, KeyErrorCause};
pub use self::logging_middleware::LoggingMiddleware;
pub use self::object_model::{Credentials, DeployKey, RepoRef};
pub use self::result::DeployKeyResult;
pub use self::transport::Transport;
