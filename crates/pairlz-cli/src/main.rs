//! Shell around the pairlz codec.
//!
//! Decodes the token stream on stdin, writes the decoded bytes to stdout,
//! then re-encodes them and writes the resulting token stream to stderr.
//! Setting `USE_TRIVIAL_IMPLEMENTATION` to a non-empty value selects the
//! literal-only encoder for the re-encode pass.

use std::env;
use std::io::{self, Write};

use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "pairlz=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let decoded = pairlz::decode_from(io::stdin().lock())?;
    io::stdout().write_all(&decoded)?;

    let use_trivial = env::var("USE_TRIVIAL_IMPLEMENTATION")
        .map(|v| !v.is_empty())
        .unwrap_or(false);
    let encoded = if use_trivial {
        pairlz::encode_simple(&decoded)
    } else {
        pairlz::encode(&decoded)?
    };
    debug!(
        decoded = decoded.len(),
        encoded = encoded.len(),
        trivial = use_trivial,
        "re-encoded stream"
    );
    io::stderr().write_all(&encoded)?;
    Ok(())
}
