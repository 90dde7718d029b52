use std::fmt::{Display, Formatter, Result as FmtResult};

/// Repository owning the deploy keys
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    pub fn new(owner: &str, repo: &str) -> Self {
        Self {
            owner: String::from(owner),
            repo: String::from(repo),
        }
    }
}

impl Display for RepoRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
