use anyhow::{Context, Result};
use github::{Event, EventTypes, Webhook};
use log::info;
use octobot::Config;
use std::{fs, path::PathBuf};
use structopt::StructOpt;
use strum::VariantNames;

#[derive(StructOpt)]
/// Inspect GitHub webhook payloads and bot configuration
struct Options {
    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    #[structopt(name = "event-types")]
    /// List the event types payloads can be decoded as
    EventTypes,

    #[structopt(name = "decode")]
    /// Decode a stored payload or relay record
    Decode(DecodeOptions),

    #[structopt(name = "check-config")]
    /// Validate a credentials file
    CheckConfig {
        #[structopt(parse(from_os_str))]
        file: PathBuf,
    },
}

#[derive(StructOpt)]
struct DecodeOptions {
    #[structopt(long, possible_values = EventTypes::VARIANTS)]
    /// Event type of a bare payload. Without it the file is read as a relay record.
    event: Option<EventTypes>,

    #[structopt(long, default_value = "unknown")]
    /// Delivery id to report for a bare payload
    delivery: String,

    #[structopt(short, long)]
    /// Print the whole decoded payload
    verbose: bool,

    #[structopt(parse(from_os_str))]
    file: PathBuf,
}

/// Decode `contents` as a payload of type `event`, or as a relay record when no type is given
fn decode_webhook(
    contents: Vec<u8>,
    event: Option<EventTypes>,
    delivery: String,
) -> Result<(Webhook, Event)> {
    let webhook = match event {
        Some(event_type) => Webhook::new(event_type, delivery, contents),
        None => Webhook::from_record(&contents).context("not a relay record, pass --event")?,
    };
    let event = webhook
        .to_event()
        .with_context(|| format!("unable to decode {} payload", webhook.event_type))?;

    Ok((webhook, event))
}

fn summary(webhook: &Webhook, event: &Event) -> String {
    let repository = event
        .repository()
        .map(|repository| repository.full_name.as_str())
        .unwrap_or("-");

    format!(
        "{} delivery {} repository {}",
        webhook.event_type, webhook.delivery_id, repository
    )
}

fn decode(options: DecodeOptions) -> Result<()> {
    let contents = fs::read(&options.file)
        .with_context(|| format!("unable to read {}", options.file.display()))?;

    let (webhook, event) = decode_webhook(contents, options.event, options.delivery)?;
    println!("{}", summary(&webhook, &event));

    if options.verbose {
        println!("{:#?}", event);
    }

    Ok(())
}

fn main() -> Result<()> {
    let opts = Options::from_args();

    // set up logging, allowing info level logging by default
    env_logger::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match opts.command {
        Command::EventTypes => {
            for name in EventTypes::VARIANTS {
                println!("{}", name);
            }
        }
        Command::Decode(options) => decode(options)?,
        Command::CheckConfig { file } => {
            let config = Config::from_file(&file)
                .with_context(|| format!("invalid config {}", file.display()))?;
            info!("{} is valid for {}", file.display(), config.username);
        }
    }

    Ok(())
}
