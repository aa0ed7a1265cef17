//! Command-line front end: reads a WIF key, prints its compressed public key.
//!
//! Clipboard copying is left to the terminal; the tool only writes the hex key
//! to stdout so it can be piped.

use std::io::{BufRead, IsTerminal};
use wif_pubkey::PrivateKey;
use zeroize::Zeroizing;

const DISCLAIMER: &str = "\
IMPORTANT: this tool is for LOCAL use only.
  - NEVER share your private key online.
  - NEVER send your private key to anyone, not even a support team.
  - Prefer a secure, offline computer, and avoid passing keys as arguments
    where they end up in shell history.
The public key printed below is safe to share.";

/// Convert a WIF private key into its compressed secp256k1 public key (hex).
#[derive(clap::Parser)]
#[command(version, about)]
struct Args {
    /// WIF-encoded private key. Read from stdin when omitted.
    wif: Option<String>,
    /// Do not print the safety notice.
    #[arg(long)]
    no_disclaimer: bool,
    /// Also print the key's network and compression flag to stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// Interactive input is read without echo; piped input is read as one line.
fn read_wif_from_stdin() -> std::io::Result<Zeroizing<String>> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return rpassword::prompt_password("Enter WIF private key: ").map(Zeroizing::new);
    }
    let mut line = Zeroizing::new(String::new());
    stdin.lock().read_line(&mut line)?;
    Ok(line)
}

fn main() -> anyhow::Result<()> {
    // RUST_LOG controls verbosity; output goes to stderr so stdout carries only the key.
    tracing_subscriber::fmt()
        .with_target(true)
        .with_line_number(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .with_writer(std::io::stderr)
        .init();

    use clap::Parser;
    let args = Args::parse();

    if !args.no_disclaimer {
        eprintln!("{DISCLAIMER}\n");
    }

    let input = match args.wif {
        Some(wif) => Zeroizing::new(wif),
        None => read_wif_from_stdin()?,
    };
    let wif = input.trim();
    anyhow::ensure!(!wif.is_empty(), "Missing input: please enter a WIF key");

    // Same steps as wif_to_public_key_hex, split so --verbose can show the key's metadata.
    let private_key = PrivateKey::from_wif(wif)?;
    if args.verbose {
        eprintln!(
            "network: {}, compressed: {}",
            private_key.network, private_key.compressed
        );
    }
    let public_key = private_key.public_key()?;
    drop(private_key);

    println!("{public_key}");
    Ok(())
}
