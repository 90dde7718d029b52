mod credentials;
mod deploy_key;
mod repo_ref;

pub use self::credentials::Credentials;
pub(crate) use self::deploy_key::NewDeployKey;
pub use self::deploy_key::DeployKey;
pub use self::repo_ref::RepoRef;
