// Slack client module: a small blocking client that pushes one file into
// a channel through the `files.upload` endpoint. The request body is a
// multipart form built by reqwest; the content reader is streamed into
// the file part rather than collected in memory first.

use reqwest::blocking::{multipart, Client, Response};
use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;
use std::io::Read;
use thiserror::Error;
use tracing::debug;

/// Endpoint every upload is posted to.
pub const SLACK_UPLOAD_URL: &str = "https://slack.com/api/files.upload";

/// File name sent when the caller does not provide one.
pub const DEFAULT_FILENAME: &str = "foo.txt";

/// Everything that can go wrong during a single upload. Each variant maps
/// to one layer of the exchange: building the client, the transport, the
/// HTTP status, and finally the JSON envelope Slack returns.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Failed to send upload request: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Received non 200 from slack: {status}, {body}")]
    Status { status: u16, body: String },
    #[error("Malformed response from slack: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Slack Error: {0}")]
    Api(String),
}

/// Envelope returned by the Slack Web API. `error` only carries meaning
/// when `ok` is false.
#[derive(Deserialize, Debug, PartialEq)]
pub struct SlackResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: String,
}

/// Uploads content into a single channel with a bearer token.
#[derive(Clone)]
pub struct SlackClient {
    client: Client,
    url: String,
    channel: String,
    token: String,
}

impl fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackClient")
            .field("url", &self.url)
            .field("channel", &self.channel)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl SlackClient {
    /// Create a client that posts to [`SLACK_UPLOAD_URL`].
    pub fn new(channel: impl Into<String>, token: impl Into<String>) -> Result<Self, UploadError> {
        Self::with_url(SLACK_UPLOAD_URL, channel, token)
    }

    /// Create a client that posts to an arbitrary upload endpoint.
    pub fn with_url(
        url: impl Into<String>,
        channel: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, UploadError> {
        // No timeout: a stalled remote blocks the upload until it answers.
        let client = Client::builder()
            .timeout(None)
            .build()
            .map_err(UploadError::Client)?;
        Ok(SlackClient {
            client,
            url: url.into(),
            channel: channel.into(),
            token: token.into(),
        })
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Read `content` to the end and post it as `filename`. Succeeds only
    /// when Slack answers 200 with `"ok": true`.
    pub fn upload<R>(&self, filename: &str, content: R) -> Result<(), UploadError>
    where
        R: Read + Send + 'static,
    {
        let form = self.build_form(filename, content);

        debug!(url = %self.url, channel = %self.channel, filename, "sending upload request");
        let res = self.client.post(&self.url).multipart(form).send()?;
        validate_response(res)
    }

    fn build_form<R>(&self, filename: &str, content: R) -> multipart::Form
    where
        R: Read + Send + 'static,
    {
        let part = multipart::Part::reader(content).file_name(filename.to_string());
        multipart::Form::new()
            .part("file", part)
            .text("filename", filename.to_string())
            .text("token", self.token.clone())
            .text("channels", self.channel.clone())
    }
}

fn validate_response(res: Response) -> Result<(), UploadError> {
    let status = res.status();
    debug!(status = status.as_u16(), "received upload response");
    if status != StatusCode::OK {
        let body = res.text().unwrap_or_default();
        return Err(UploadError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let body = res.text()?;
    check_envelope(&body)
}

/// Interpret a 200 response body.
pub fn check_envelope(body: &str) -> Result<(), UploadError> {
    let envelope: SlackResponse = serde_json::from_str(body)?;
    if !envelope.ok {
        return Err(UploadError::Api(envelope.error));
    }
    Ok(())
}
