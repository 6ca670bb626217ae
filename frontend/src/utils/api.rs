use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;
use crate::config;
use serde::Serialize;

fn endpoint_url(path: &str) -> String {
    format!("{}{}", config::get_backend_url(), path)
}

/// Thin request builder that prefixes paths with the configured backend URL
pub struct Api;

pub struct RequestWrapper {
    request: Request,
    path: String,
}

impl RequestWrapper {
    fn new(path: &str, request: fn(&str) -> Request) -> Self {
        Self {
            request: request(&endpoint_url(path)),
            path: path.to_string(),
        }
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        let body_string = serde_json::to_string(data)?;
        self.request = self
            .request
            .header("Content-Type", "application/json")
            .body(body_string);
        Ok(self)
    }

    pub async fn send(self) -> Result<Response, GlooError> {
        let response = self.request.send().await?;
        if !response.ok() {
            log::debug!("{} returned {}", self.path, response.status());
        }
        Ok(response)
    }
}

impl Api {
    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, Request::post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_prefixed_with_the_backend_url() {
        assert_eq!(
            endpoint_url("/api/waitlist"),
            format!("{}/api/waitlist", config::get_backend_url())
        );
    }
}
