//! Cloudflare HTTP request methods

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpUtils, is_success};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{CloudflareProvider, CloudflareResponse};

impl CloudflareProvider {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("Authorization", format!("Bearer {}", self.api_token))
    }

    /// Send a request and unwrap the Cloudflare envelope.
    ///
    /// A reply counts as successful only when the HTTP status is 2xx *and* the envelope
    /// says `success: true`. Error replies are mapped through [`ProviderErrorMapper`];
    /// replies that are not JSON at all are classified by status with the raw body as
    /// the message.
    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        method: &str,
        url: &str,
        context: ErrorContext,
    ) -> Result<CloudflareResponse<T>> {
        let (status, response_text) = HttpUtils::execute_request(
            self.authorized(builder),
            self.provider_name(),
            method,
            url,
        )
        .await
        .map_err(with_envelope_message)?;

        if !is_success(status) {
            let raw = match serde_json::from_str::<CloudflareResponse<serde_json::Value>>(
                &response_text,
            ) {
                Ok(envelope) => Self::raw_error(envelope.errors, &response_text),
                Err(_) => RawApiError::new(non_empty_or(&response_text, status)),
            };
            return Err(self.api_error(raw.status(status), context));
        }

        let envelope: CloudflareResponse<T> =
            HttpUtils::parse_json(&response_text, self.provider_name())?;

        if !envelope.success {
            let raw = Self::raw_error(envelope.errors, &response_text);
            return Err(self.api_error(raw.status(status), context));
        }

        Ok(envelope)
    }

    /// Build a raw error from the envelope's `errors`, keeping the first code and every
    /// message.
    fn raw_error(errors: Vec<super::types::CloudflareError>, body: &str) -> RawApiError {
        let code = errors.first().map(|e| e.code.to_string());
        let message = errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        let message = if message.is_empty() {
            body.to_string()
        } else {
            message
        };
        match code {
            Some(code) => RawApiError::with_code(code, message),
            None => RawApiError::new(message),
        }
    }

    fn api_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let error = self.map_error(raw, context);
        if error.is_expected() {
            log::warn!("API error: {error}");
        } else {
            log::error!("API error: {error}");
        }
        error
    }

    /// GET `path` and return the envelope's `result`.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let url = self.url(path);
        let envelope = self
            .send(self.client.get(&url), "GET", &url, context)
            .await?;
        envelope
            .result
            .ok_or_else(|| self.parse_error("missing `result` field in response"))
    }

    /// GET one page of a paginated collection.
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        page: u32,
        per_page: u32,
        context: ErrorContext,
    ) -> Result<(Vec<T>, Option<super::CloudflareResultInfo>)> {
        let url = format!("{}?page={page}&per_page={per_page}", self.url(path));
        let envelope: CloudflareResponse<Vec<T>> = self
            .send(self.client.get(&url), "GET", &url, context)
            .await?;
        Ok((envelope.result.unwrap_or_default(), envelope.result_info))
    }

    /// POST a JSON body to `path` and return the envelope's `result`.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let url = self.url(path);
        if log::log_enabled!(log::Level::Debug) {
            let body_json = serde_json::to_string(body)
                .unwrap_or_else(|_| "<unserializable request body>".to_string());
            log::debug!("Request Body: {body_json}");
        }

        let envelope = self
            .send(self.client.post(&url).json(body), "POST", &url, context)
            .await?;
        envelope
            .result
            .ok_or_else(|| self.parse_error("missing `result` field in response"))
    }

    /// DELETE `path` and return the envelope's `result`.
    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let url = self.url(path);
        let envelope = self
            .send(self.client.delete(&url), "DELETE", &url, context)
            .await?;
        envelope
            .result
            .ok_or_else(|| self.parse_error("missing `result` field in response"))
    }
}

/// Replace a 429 body with the messages of its Cloudflare envelope, or the trimmed body
/// when it is not one.
fn with_envelope_message(error: ProviderError) -> ProviderError {
    match error {
        ProviderError::RateLimited {
            provider,
            retry_after,
            raw_message,
        } => ProviderError::RateLimited {
            provider,
            retry_after,
            raw_message: raw_message.as_deref().and_then(envelope_message),
        },
        other => other,
    }
}

fn envelope_message(body: &str) -> Option<String> {
    if let Ok(envelope) = serde_json::from_str::<CloudflareResponse<serde_json::Value>>(body) {
        let message = envelope
            .errors
            .into_iter()
            .map(|e| e.message)
            .filter(|m| !m.trim().is_empty())
            .collect::<Vec<_>>()
            .join("; ");
        if !message.is_empty() {
            return Some(message);
        }
    }
    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn non_empty_or(body: &str, status: u16) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {status}")
    } else {
        trimmed.to_string()
    }
}
