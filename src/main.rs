//! CLI for the IPFS config patcher
//!
//! Run from the directory holding the node repository to inject the
//! metric-export plugin configuration into `.ipfs/config` and expose the
//! gateway and API on all interfaces.
//!
//! # Usage
//!
//! ```bash
//! ipfs-config-patch
//! ipfs-config-patch --target /data/ipfs/config --verbose
//! ipfs-config-patch --config patch.toml
//! ```

use clap::Parser;
use std::path::PathBuf;

use ipfs_config_patcher::cli::{PatchArgs, run_patch_mode};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "ipfs-config-patch")]
struct Cli {
    /// Node configuration file to patch [default: .ipfs/config]
    #[arg(short, long, value_name = "PATH")]
    target: Option<PathBuf>,

    /// Settings file (TOML) for the patch values
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let args = PatchArgs {
        target: cli.target,
        config: cli.config,
        verbose: cli.verbose,
    };
    run_patch_mode(args).await
}
