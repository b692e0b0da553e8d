//! Command line arguments.

use crate::config::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ipv4-addressing",
    version,
    about = "IPv4 subnet calculator: network, broadcast, host range, masks and class"
)]
pub struct Cli {
    /// Output format, overrides IPV4_OUTPUT_FORMAT
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
    /// log4rs YAML file, overrides IPV4_LOG_CONFIG
    #[arg(long)]
    pub log_config: Option<PathBuf>,
    /// A.B.C.D/P, or A.B.C.D followed by P as a separate argument
    #[arg(required = true, allow_negative_numbers = true)]
    pub inputs: Vec<String>,
}

impl Cli {
    /// Positional arguments folded into `address/prefix` strings.
    pub fn cidr_inputs(&self) -> Vec<String> {
        pair_inputs(&self.inputs)
    }
}

/// Join `A.B.C.D P` argument pairs into `A.B.C.D/P`.
///
/// An argument already holding a `/` is taken as is. An address without a
/// prefix is passed through unchanged and later fails as invalid notation.
pub fn pair_inputs(args: &[String]) -> Vec<String> {
    let mut inputs = Vec::with_capacity(args.len());
    let mut args = args.iter().peekable();

    while let Some(arg) = args.next() {
        if !arg.contains('/') {
            if let Some(prefix) = args.next_if(|next| !next.contains('/') && !next.contains('.')) {
                inputs.push(format!("{arg}/{prefix}"));
                continue;
            }
        }
        inputs.push(arg.clone());
    }
    inputs
}
