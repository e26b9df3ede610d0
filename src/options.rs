// Option resolution: collect channel, token and filename from flags or
// their environment variables, and report every required value that is
// still missing. Nothing here exits the process; `main` decides that.

use crate::slack::DEFAULT_FILENAME;
use clap::Parser;
use std::fmt;

/// Upload stdin as a file into a Slack channel.
#[derive(Parser, Default)]
#[command(name = "upload-image-to-slack")]
#[command(version, about = "Upload stdin as a file to a Slack channel")]
pub struct Args {
    /// Slack Channel to post into
    #[arg(short, long, env = "UITS_SLACK_CHANNEL")]
    pub channel: Option<String>,

    /// File name to upload
    #[arg(short, long, env = "UITS_FILENAME")]
    pub filename: Option<String>,

    /// Slack Token
    #[arg(short, long, env = "UITS_SLACK_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

/// A required value that neither its flag nor its env var supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingOption {
    Channel,
    Token,
}

impl MissingOption {
    pub fn flag(self) -> &'static str {
        match self {
            MissingOption::Channel => "--channel",
            MissingOption::Token => "--token",
        }
    }

    pub fn env_var(self) -> &'static str {
        match self {
            MissingOption::Channel => "UITS_SLACK_CHANNEL",
            MissingOption::Token => "UITS_SLACK_TOKEN",
        }
    }
}

impl fmt::Display for MissingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Missing required flag {} or {}", self.flag(), self.env_var())
    }
}

/// Validated parameters for one upload.
#[derive(Clone, PartialEq)]
pub struct UploadOptions {
    pub channel: String,
    pub token: String,
    pub filename: String,
}

impl fmt::Debug for UploadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadOptions")
            .field("channel", &self.channel)
            .field("token", &"<redacted>")
            .field("filename", &self.filename)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Turn parsed arguments into upload options. Returns all missing required
/// values at once, in flag order, so each can be reported.
pub fn resolve(args: Args) -> Result<UploadOptions, Vec<MissingOption>> {
    let channel = non_empty(args.channel);
    let token = non_empty(args.token);

    let mut missing = Vec::new();
    if channel.is_none() {
        missing.push(MissingOption::Channel);
    }
    if token.is_none() {
        missing.push(MissingOption::Token);
    }

    match (channel, token) {
        (Some(channel), Some(token)) => Ok(UploadOptions {
            channel,
            token,
            filename: non_empty(args.filename).unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
        }),
        _ => Err(missing),
    }
}
