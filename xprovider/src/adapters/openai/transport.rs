//! OpenAI transport trait and reqwest-based HTTP implementation.

use reqwest::{Client, RequestBuilder, StatusCode};

use crate::{ProviderError, ProviderErrorKind, ProviderFuture};

use super::serde_api::{build_api_request, parse_completion_body, parse_engine_list_body};
use super::types::{OpenAiAuth, OpenAiEngine, OpenAiRequest, OpenAiResponse};

pub trait OpenAiTransport: Send + Sync + std::fmt::Debug {
    fn list_engines<'a>(
        &'a self,
        auth: OpenAiAuth,
    ) -> ProviderFuture<'a, Result<Vec<OpenAiEngine>, ProviderError>>;

    fn complete<'a>(
        &'a self,
        request: OpenAiRequest,
        auth: OpenAiAuth,
    ) -> ProviderFuture<'a, Result<OpenAiResponse, ProviderError>>;
}

#[derive(Debug, Clone)]
pub struct OpenAiHttpTransport {
    client: Client,
    base_url: String,
}

impl OpenAiHttpTransport {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn apply_auth(builder: RequestBuilder, auth: &OpenAiAuth) -> RequestBuilder {
        match auth {
            OpenAiAuth::Bearer(secret) => builder.bearer_auth(secret.expose()),
        }
    }

    /// Sends the request and returns the status with the raw body text.
    async fn send(builder: RequestBuilder) -> Result<(StatusCode, String), ProviderError> {
        let response = builder.send().await.map_err(|err| {
            if err.is_timeout() {
                ProviderError::timeout(err.to_string())
            } else {
                ProviderError::transport(err.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ProviderError::transport(err.to_string()))?;
        Ok((status, body))
    }
}

/// Refines a provider-reported error with the HTTP status it arrived with.
fn classify(status: StatusCode, error: ProviderError) -> ProviderError {
    if status.is_success() || error.kind != ProviderErrorKind::Api {
        return error;
    }

    let message = error.message;
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::authentication(message),
        StatusCode::TOO_MANY_REQUESTS => ProviderError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ProviderError::timeout(message),
        StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND | StatusCode::UNPROCESSABLE_ENTITY => {
            ProviderError::invalid_request(message)
        }
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => {
            ProviderError::unavailable(message)
        }
        _ => ProviderError::api(message),
    }
}

impl OpenAiTransport for OpenAiHttpTransport {
    fn list_engines<'a>(
        &'a self,
        auth: OpenAiAuth,
    ) -> ProviderFuture<'a, Result<Vec<OpenAiEngine>, ProviderError>> {
        Box::pin(async move {
            let builder = self.client.get(self.endpoint("engines"));
            let (status, body) = Self::send(Self::apply_auth(builder, &auth)).await?;
            parse_engine_list_body(&body).map_err(|error| classify(status, error))
        })
    }

    fn complete<'a>(
        &'a self,
        request: OpenAiRequest,
        auth: OpenAiAuth,
    ) -> ProviderFuture<'a, Result<OpenAiResponse, ProviderError>> {
        Box::pin(async move {
            let api_request = build_api_request(request)?;
            let builder = self
                .client
                .post(self.endpoint("chat/completions"))
                .json(&api_request);
            let (status, body) = Self::send(Self::apply_auth(builder, &auth)).await?;
            parse_completion_body(&body).map_err(|error| classify(status, error))
        })
    }
}
