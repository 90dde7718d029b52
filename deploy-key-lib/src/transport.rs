use anyhow::Result;
use reqwest::{Client, Request, Response};
use reqwest_middleware::ClientWithMiddleware;
use std::sync::Arc;

/// Executes one HTTP request; timeouts and TLS belong to the implementation
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response>;
}

#[async_trait::async_trait]
impl Transport for Client {
    async fn execute(&self, request: Request) -> Result<Response> {
        Ok(Client::execute(self, request).await?)
    }
}

#[async_trait::async_trait]
impl Transport for ClientWithMiddleware {
    async fn execute(&self, request: Request) -> Result<Response> {
        Ok(ClientWithMiddleware::execute(self, request).await?)
    }
}

#[async_trait::async_trait]
impl<T> Transport for &T
where
    T: Transport + ?Sized,
{
    async fn execute(&self, request: Request) -> Result<Response> {
        (**self).execute(request).await
    }
}

#[async_trait::async_trait]
impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    async fn execute(&self, request: Request) -> Result<Response> {
        (**self).execute(request).await
    }
}
