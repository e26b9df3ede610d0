// Entrypoint for the CLI application.
// - Resolve options, bail out with usage and exit code 1 if any are missing.
// - Stream stdin into a single Slack upload; a failed upload is logged
//   once at error level and exits with status 1.

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use upload_image_to_slack::{options, slack::SlackClient, ui};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("upload_image_to_slack=warn")),
        )
        .init();

    let opts = match options::resolve(options::Args::parse()) {
        Ok(opts) => opts,
        Err(missing) => {
            ui::report_missing(&missing)?;
            std::process::exit(1);
        }
    };
    debug!(channel = %opts.channel, filename = %opts.filename, "resolved options");

    let client = SlackClient::new(opts.channel, opts.token)?;
    if let Err(e) = client.upload(&opts.filename, std::io::stdin()) {
        error!(channel = client.channel(), "{e}");
        std::process::exit(1);
    }
    Ok(())
}
