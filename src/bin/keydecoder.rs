//! keydecoder CLI
//!
//! Decodes a table key or a base64 value buffer and prints what it holds.

use std::ffi::OsString;

use clap::Parser;
use keydecoder::{decode, DecodeConfig, DecoderError, Format, Report, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Most positional arguments accepted: `[FORMAT] KEY`
const MAX_POSITIONAL: usize = 2;

/// keydecoder
#[derive(Parser, Debug)]
#[command(name = "keydecoder")]
#[command(about = "Decode table keys and index values")]
#[command(long_about = "Decode table keys and index values

  table_row:   key format like 't{table_id}_r{row_id}'
  table_index: key format like 't{table_id}_i{index_id}{values}'
  value:       base64 encoded value
  auto:        detect one of the above")]
#[command(version)]
struct Args {
    /// Key format (table_row, table_index, value, auto)
    #[arg(short, long)]
    format: Option<String>,

    /// The key to decode
    #[arg(short, long)]
    key: Option<OsString>,

    /// Fail if index values cannot be decoded to the end
    #[arg(long)]
    strict: bool,

    /// `[FORMAT] KEY` when not given as options
    #[arg(num_args = 0..)]
    args: Vec<OsString>,
}

fn main() {
    // Logs go to stderr so the report on stdout stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            tracing::debug!("Decode failed: {:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<Report> {
    let config = build_config(args)?;
    decode(&config)
}

/// Merge options and positionals into a config
///
/// Options win; positionals fill whatever is missing, key last.
fn build_config(args: Args) -> Result<DecodeConfig> {
    if args.args.len() > MAX_POSITIONAL {
        return Err(DecoderError::Usage("too many arguments".to_string()));
    }

    let mut positional = args.args.into_iter();
    let (format, key) = match (args.format, args.key) {
        (Some(format), Some(key)) => (Some(format), Some(key)),
        (Some(format), None) => (Some(format), positional.next()),
        (None, Some(key)) => (positional.next().map(lossy), Some(key)),
        (None, None) if positional.len() == MAX_POSITIONAL => {
            (positional.next().map(lossy), positional.next())
        }
        (None, None) => (None, positional.next()),
    };

    if positional.next().is_some() {
        return Err(DecoderError::Usage("too many arguments".to_string()));
    }

    let mut builder = DecodeConfig::builder().strict(args.strict);
    if let Some(format) = format {
        builder = builder.format(format.parse::<Format>()?);
    }
    if let Some(key) = key {
        builder = builder.key(os_bytes(key));
    }
    builder.build()
}

fn lossy(arg: OsString) -> String {
    arg.to_string_lossy().into_owned()
}

/// Raw bytes of an argument, so non-UTF-8 keys survive unchanged
#[cfg(unix)]
fn os_bytes(arg: OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;
    arg.into_vec()
}

#[cfg(not(unix))]
fn os_bytes(arg: OsString) -> Vec<u8> {
    lossy(arg).into_bytes()
}
