//! Synchronous REST client for the Document AI online-processing API.
//!
//! One `:process` call per input file, blocking until the service responds.
//! Configuration is explicit and injected; nothing here reads or mutates
//! process-global state.

mod provision;

pub use provision::{create_or_get_processor, Provisioned, ProvisionOutcome, DEFAULT_PROCESSOR_TYPE};

use crate::error::{Error, Result};
use crate::model::{Document, Processor, ProcessorList};
use base64::Engine;
use log::{debug, info};
use serde::Deserialize;
use serde_json::json;
use std::fs;
use std::path::Path;

/// Configuration for a [`ProcessorClient`].
///
/// The access token is a caller-supplied OAuth2 bearer token (for example
/// from `gcloud auth print-access-token`); token acquisition is out of
/// scope for this crate.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Cloud project identifier.
    pub project_id: String,

    /// Region code, `us` or `eu`. Selects the endpoint host.
    pub location: String,

    /// OAuth2 bearer token for the API calls.
    pub access_token: String,

    /// Endpoint override, mainly for tests. When unset the host is derived
    /// from the location.
    pub endpoint: Option<String>,
}

impl ClientConfig {
    /// Create a config for the given project, location and token.
    pub fn new(
        project_id: impl Into<String>,
        location: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            location: location.into(),
            access_token: access_token.into(),
            endpoint: None,
        }
    }

    /// Override the endpoint base URL (no trailing slash).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Endpoint base URL for this configuration.
    pub fn endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://{}-documentai.googleapis.com", self.location),
        }
    }

    /// Full resource name of the location, the parent of all processors.
    pub fn parent(&self) -> String {
        format!("projects/{}/locations/{}", self.project_id, self.location)
    }

    fn validate(&self) -> Result<()> {
        if self.project_id.is_empty() {
            return Err(Error::Config("project_id must not be empty".to_string()));
        }
        if self.location.is_empty() {
            return Err(Error::Config("location must not be empty".to_string()));
        }
        if self.access_token.is_empty() {
            return Err(Error::Config("access_token must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Blocking client for processor management and document processing.
pub struct ProcessorClient {
    http: reqwest::blocking::Client,
    config: ClientConfig,
}

#[derive(Deserialize)]
struct ProcessResponse {
    document: Option<Document>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: ApiErrorBody,
}

#[derive(Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

impl ProcessorClient {
    /// Build a client from validated configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::blocking::Client::builder().build()?;
        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.config.endpoint(), path)
    }

    /// Process a local file and return the extracted document.
    ///
    /// Reads the file into memory, base64-encodes it into a `rawDocument`
    /// request and posts it to the processor's `:process` method.
    /// `processor_name` is the full resource name from
    /// [`Processor::name`](crate::model::Processor).
    pub fn process_document<P: AsRef<Path>>(
        &self,
        processor_name: &str,
        file_path: P,
        mime_type: &str,
    ) -> Result<Document> {
        let content = fs::read(file_path.as_ref())?;
        info!(
            "processing {} ({} bytes, {})",
            file_path.as_ref().display(),
            content.len(),
            mime_type
        );

        let body = json!({
            "rawDocument": {
                "content": base64::engine::general_purpose::STANDARD.encode(content),
                "mimeType": mime_type,
            }
        });

        let response = self
            .http
            .post(self.url(&format!("{processor_name}:process")))
            .bearer_auth(&self.config.access_token)
            .json(&body)
            .send()?;

        let decoded: ProcessResponse = decode_response(response)?;
        decoded.document.ok_or(Error::MissingDocument)
    }

    /// List every processor under the configured project and location,
    /// following pagination to the end.
    pub fn list_processors(&self) -> Result<Vec<Processor>> {
        let url = self.url(&format!("{}/processors", self.config.parent()));
        let mut processors = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.http.get(&url).bearer_auth(&self.config.access_token);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let page: ProcessorList = decode_response(request.send()?)?;
            debug!("listed {} processors", page.processors.len());
            processors.extend(page.processors);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(processors)
    }

    /// Create a new processor with the given display name and type.
    ///
    /// Fails with a tagged [`Error::Api`] carrying status `ALREADY_EXISTS`
    /// when the display name is taken; see
    /// [`create_or_get_processor`] for the idempotent wrapper.
    pub fn create_processor(
        &self,
        display_name: &str,
        processor_type: &str,
    ) -> Result<Processor> {
        let body = Processor {
            processor_type: processor_type.to_string(),
            display_name: display_name.to_string(),
            ..Processor::default()
        };

        let response = self
            .http
            .post(self.url(&format!("{}/processors", self.config.parent())))
            .bearer_auth(&self.config.access_token)
            .json(&body)
            .send()?;

        let processor: Processor = decode_response(response)?;
        info!("created processor {}", processor.name);
        Ok(processor)
    }
}

/// Deserialize a successful response, or map a non-2xx body through the
/// structured Google error envelope into [`Error::Api`].
fn decode_response<T: serde::de::DeserializeOwned>(
    response: reqwest::blocking::Response,
) -> Result<T> {
    let status = response.status();
    let body = response.text()?;
    if status.is_success() {
        return Ok(serde_json::from_str(&body)?);
    }
    Err(decode_api_error(status.as_u16(), &body))
}

fn decode_api_error(code: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.status.is_empty() => Error::Api {
            status: envelope.error.status,
            code,
            message: envelope.error.message,
        },
        _ => Error::Api {
            status: "UNKNOWN".to_string(),
            code,
            message: body.trim().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::new("my-project", "us", "token-123")
    }

    #[test]
    fn test_endpoint_from_location() {
        assert_eq!(config().endpoint(), "https://us-documentai.googleapis.com");

        let eu = ClientConfig::new("my-project", "eu", "t");
        assert_eq!(eu.endpoint(), "https://eu-documentai.googleapis.com");
    }

    #[test]
    fn test_endpoint_override() {
        let cfg = config().with_endpoint("http://localhost:8080");
        assert_eq!(cfg.endpoint(), "http://localhost:8080");
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(config().parent(), "projects/my-project/locations/us");
    }

    #[test]
    fn test_validation_rejects_empty_fields() {
        let missing_token = ClientConfig::new("p", "us", "");
        assert!(matches!(missing_token.validate(), Err(Error::Config(_))));

        let missing_project = ClientConfig::new("", "us", "t");
        assert!(matches!(missing_project.validate(), Err(Error::Config(_))));

        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_decode_api_error_envelope() {
        let body = r#"{
            "error": {
                "code": 409,
                "message": "Processor with display name already exists",
                "status": "ALREADY_EXISTS"
            }
        }"#;
        let err = decode_api_error(409, body);
        assert!(err.is_already_exists());
        assert_eq!(err.api_status(), Some("ALREADY_EXISTS"));
    }

    #[test]
    fn test_decode_api_error_unstructured_body() {
        let err = decode_api_error(502, "Bad Gateway");
        match err {
            Error::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, "UNKNOWN");
                assert_eq!(code, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
