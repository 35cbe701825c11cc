//! Print the generated binding macros to stdout.
//!
//! Usage:
//!   serialize-bindgen > src/archive/serialize_macros.rs
//!
//! Options:
//!   --max-arity N        Generate arities 0..N (default 20)
//!   --archive-path PATH  Module holding the archive protocol items (default `$crate::archive`)
//!   -v, --verbose        Log at DEBUG instead of INFO (logs go to stderr)

use clap::Parser;
use serialize_bindgen::{Config, DEFAULT_MAX_ARITY, Document};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "serialize-bindgen", version, about = "Generate arity-indexed serialization binding macros")]
struct Args {
  /// Exclusive upper bound on generated arities.
  #[arg(long, default_value_t = DEFAULT_MAX_ARITY)]
  max_arity: usize,

  /// Path of the module providing `WriteMessage`, `ReadStream`, `ArchiveResult` and the traits.
  #[arg(long)]
  archive_path: Option<String>,

  #[arg(short, long)]
  verbose: bool,
}

fn main() -> anyhow::Result<()> {
  let args = Args::parse();

  let level = if args.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
  tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

  let mut config = Config::default().with_max_arity(args.max_arity)?;
  if let Some(path) = &args.archive_path {
    config = config.with_archive_path(path)?;
  }

  let document = Document::assemble(&config, std::env::args().collect());
  document.write_to(std::io::stdout().lock())?;
  info!(definitions = document.definitions().count(), "generated serialization bindings");
  Ok(())
}
