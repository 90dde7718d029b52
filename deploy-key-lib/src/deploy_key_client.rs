use crate::error::{DeployKeyError, KeyErrorCause};
use crate::object_model::{Credentials, DeployKey, NewDeployKey, RepoRef};
use crate::result::DeployKeyResult;
use crate::transport::Transport;
use anyhow::anyhow;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, warn};
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{IntoUrl, Method, Request, Response, StatusCode, Url};
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://api.github.com/";

const USER_AGENT_VALUE: &str = "deploy-key-client";

/// Finds, deletes and creates the deploy keys of one repository
pub struct DeployKeyClient<T> {
    transport: T,
    url: Url,
    repo_ref: RepoRef,
    authorization: HeaderValue,
}

impl<T> DeployKeyClient<T>
where
    T: Transport,
{
    pub fn new(transport: T, repo_ref: RepoRef, credentials: &Credentials) -> DeployKeyResult<Self> {
        Self::with_base_url(transport, DEFAULT_API_URL, repo_ref, credentials)
    }

    pub fn with_base_url<U>(
        transport: T,
        url: U,
        repo_ref: RepoRef,
        credentials: &Credentials,
    ) -> DeployKeyResult<Self>
    where
        U: IntoUrl,
    {
        let mut url = url.into_url().map_err(|e| anyhow!(e))?;
        if url.cannot_be_a_base() {
            return Err(anyhow!("{} cannot be used as an API base URL", url).into());
        }
        url.set_query(None);
        url.set_fragment(None);

        Ok(Self {
            transport,
            url,
            repo_ref,
            authorization: basic_authorization(credentials)?,
        })
    }

    pub fn repo_ref(&self) -> &RepoRef {
        &self.repo_ref
    }

    /// First key with exactly this title; a missing key is `Ok(None)`
    pub async fn find_key(&self, title: &str) -> DeployKeyResult<Option<DeployKey>> {
        let request = self.request(Method::GET, self.keys_url(None)?);
        debug!("finding deploy key \"{}\" in {}", title, self.repo_ref);

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|e| DeployKeyError::GetKey(KeyErrorCause::Transport(e)))?;
        let body = response
            .bytes()
            .await
            .map_err(|e| DeployKeyError::GetKey(KeyErrorCause::Body(e)))?;

        let keys = serde_json::from_slice::<Vec<DeployKey>>(&body).map_err(DeployKeyError::Decode)?;
        Ok(keys.into_iter().find(|k| k.title == title))
    }

    pub async fn delete_key(&self, key_id: u64) -> DeployKeyResult<()> {
        let request = self.request(Method::DELETE, self.keys_url(Some(key_id))?);
        debug!("deleting deploy key {} from {}", key_id, self.repo_ref);

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|cause| DeployKeyError::DeleteKey {
                key_id,
                cause: KeyErrorCause::Transport(cause),
            })?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(());
        }

        let message = error_message(response).await;
        warn!(
            "could not delete deploy key {} from {}: {}",
            key_id, self.repo_ref, status
        );
        Err(DeployKeyError::DeleteKey {
            key_id,
            cause: KeyErrorCause::Status { status, message },
        })
    }

    pub async fn create_key(&self, title: &str, key: &str, read_only: bool) -> DeployKeyResult<DeployKey> {
        let body = serde_json::to_vec(&NewDeployKey {
            title,
            key,
            read_only,
        })
        .map_err(|e| anyhow!(e))?;

        let mut request = self.request(Method::POST, self.keys_url(None)?);
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        *request.body_mut() = Some(body.into());
        debug!("creating deploy key \"{}\" in {}", title, self.repo_ref);

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|e| DeployKeyError::CreateKey(KeyErrorCause::Transport(e)))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| DeployKeyError::CreateKey(KeyErrorCause::Body(e)))?;

        if status != StatusCode::CREATED {
            warn!(
                "could not create deploy key \"{}\" in {}: {}",
                title, self.repo_ref, status
            );
            return Err(DeployKeyError::CreateKey(KeyErrorCause::Status {
                status,
                message: parse_error_message(&body),
            }));
        }

        serde_json::from_slice::<DeployKey>(&body)
            .map_err(|e| DeployKeyError::CreateKey(KeyErrorCause::Decode(e)))
    }

    fn keys_url(&self, key_id: Option<u64>) -> DeployKeyResult<Url> {
        let mut url = self.url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow!("{} cannot be used as an API base URL", self.url))?;
            segments
                .pop_if_empty()
                .extend(["repos", self.repo_ref.owner.as_str(), self.repo_ref.repo.as_str(), "keys"]);
            if let Some(key_id) = key_id {
                segments.push(&key_id.to_string());
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> Request {
        let mut request = Request::new(method, url);
        let headers = request.headers_mut();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static("2022-11-28"));
        headers.insert(AUTHORIZATION, self.authorization.clone());
        request
    }
}

fn basic_authorization(credentials: &Credentials) -> DeployKeyResult<HeaderValue> {
    let encoded = STANDARD.encode(format!("{}:{}", credentials.username, credentials.password));
    let mut value = HeaderValue::from_str(&format!("Basic {}", encoded)).map_err(|e| anyhow!(e))?;
    value.set_sensitive(true);
    Ok(value)
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "message")]
    message: String,
}

async fn error_message(response: Response) -> Option<String> {
    parse_error_message(&response.bytes().await.ok()?)
}

fn parse_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|s| !s.is_empty())
}
