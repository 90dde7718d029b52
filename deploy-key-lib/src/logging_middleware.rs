use http::Extensions;
use log::{log, Level};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};
use std::time::Instant;

/// Logs each request line and its outcome; headers are never logged
pub struct LoggingMiddleware {
    level: Level,
}

impl LoggingMiddleware {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        request: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();
        log!(self.level, "{} {}", method, url);

        let start = Instant::now();
        let result = next.run(request, extensions).await;
        let elapsed = start.elapsed();
        match result.as_ref() {
            Ok(response) => log!(
                self.level,
                "{} {} -> {} in {:?}",
                method,
                url,
                response.status(),
                elapsed
            ),
            Err(e) => log!(
                self.level,
                "{} {} failed after {:?}: {}",
                method,
                url,
                elapsed,
                e
            ),
        }
        result
    }
}
