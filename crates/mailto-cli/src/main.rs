//! `mailto-cli` - inspect and build `mailto:` URIs from the command line.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mailto::{MailTo, MailToBuilder, is_mailto};

/// Default log filter when neither `--log` nor `RUST_LOG` is set.
const DEFAULT_FILTER: &str = "mailto=info,mailto_cli=info";

#[derive(Parser)]
#[command(name = "mailto-cli", version, about = "Inspect and build mailto: URIs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log filter directives (e.g. `mailto=trace`)
    #[arg(long, global = true, env = "MAILTO_LOG", value_name = "FILTER")]
    log: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether the text is a mailto URI (exit code 1 if not)
    Check {
        /// Text to check
        text: String,
    },
    /// Parse a mailto URI and print its fields
    Parse {
        /// URI to parse
        uri: String,
        /// Print the parsed record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build a canonical mailto URI from fields
    Build {
        /// Recipient (repeatable)
        #[arg(long)]
        to: Vec<String>,
        /// Carbon-copy recipient
        #[arg(long)]
        cc: Option<String>,
        /// Blind carbon-copy recipient
        #[arg(long)]
        bcc: Option<String>,
        /// Subject line
        #[arg(long)]
        subject: Option<String>,
        /// Message body
        #[arg(long)]
        body: Option<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref())?;

    match cli.command {
        Commands::Check { text } => {
            let result = is_mailto(&text);
            println!("{result}");
            Ok(if result {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Parse { uri, json } => {
            let mailto =
                MailTo::parse(&uri).with_context(|| format!("Failed to parse {uri:?}"))?;
            debug!(entries = mailto.len(), "Parsed");
            if json {
                print_json(&mailto)?;
            } else {
                print_fields(&mailto);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Build {
            to,
            cc,
            bcc,
            subject,
            body,
        } => {
            println!("{}", build_uri(to, cc, bcc, subject, body));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn build_uri(
    to: Vec<String>,
    cc: Option<String>,
    bcc: Option<String>,
    subject: Option<String>,
    body: Option<String>,
) -> MailTo {
    let mut builder = MailToBuilder::new();
    for address in to {
        builder = builder.to(address);
    }
    if let Some(cc) = cc {
        builder = builder.cc(cc);
    }
    if let Some(bcc) = bcc {
        builder = builder.bcc(bcc);
    }
    if let Some(subject) = subject {
        builder = builder.subject(subject);
    }
    if let Some(body) = body {
        builder = builder.body(body);
    }
    builder.build()
}

/// Resolves the log filter. An explicit `--log` value must parse; an unset
/// or malformed `RUST_LOG` falls back to the default.
fn log_filter(directives: Option<&str>) -> anyhow::Result<EnvFilter> {
    match directives {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid log filter {directives:?}")),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Installs the stderr subscriber. `--log` wins over `RUST_LOG`.
fn init_logging(directives: Option<&str>) -> anyhow::Result<()> {
    let filter = log_filter(directives)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    Ok(())
}

fn print_fields(mailto: &MailTo) {
    for entry in mailto {
        println!("{entry}");
    }
    println!();
    println!("To:      {}", mailto.to().unwrap_or_default());
    println!("Cc:      {}", mailto.cc().unwrap_or_default());
    println!("Subject: {}", mailto.subject().unwrap_or_default());
    println!("Body:    {}", mailto.body().unwrap_or_default().escape_debug());
    println!("URI:     {mailto}");
}

fn print_json(mailto: &MailTo) -> anyhow::Result<()> {
    let value = serde_json::json!({
        "headers": mailto.headers(),
        "to": mailto.to(),
        "cc": mailto.cc(),
        "subject": mailto.subject(),
        "body": mailto.body(),
        "uri": mailto.to_string(),
    });
    let text = serde_json::to_string_pretty(&value).context("Failed to encode JSON")?;
    println!("{text}");
    Ok(())
}
