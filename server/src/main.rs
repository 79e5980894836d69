//! Chronicle host binary

use std::path::PathBuf;

use chronicle_server::{Config, server::create_router};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;

/// Command-line interface for the Chronicle host.
#[derive(Parser)]
#[command(
    name = "chronicle-server",
    version,
    about = "Serve The Absurd Chronicle browser app"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "chronicle.toml")]
    config: PathBuf,

    /// Address to listen on (overrides server.address)
    #[arg(long)]
    addr: Option<String>,

    /// Directory holding the built bundle (overrides server.site_root)
    #[arg(long)]
    site_root: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    chronicle_server::init_tracing(cli.verbose);

    let mut config = Config::load_with_env(&cli.config).wrap_err("Failed to load configuration")?;
    if let Some(addr) = cli.addr {
        config.server.address = addr;
    }
    if let Some(site_root) = cli.site_root {
        config.server.site_root = site_root;
    }

    let app = create_router(&config);
    let addr = config.server.address.clone();

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    tracing::info!(
        %addr,
        api = %config.api.base_url,
        site_root = %config.server.site_root,
        "Serving The Absurd Chronicle"
    );
    println!("Listening on http://{addr}");

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["chronicle-server"]);

        assert_eq!(cli.config, PathBuf::from("chronicle.toml"));
        assert!(cli.addr.is_none());
        assert!(cli.site_root.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "chronicle-server",
            "-c",
            "site.toml",
            "--addr",
            "0.0.0.0:8080",
            "--site-root",
            "dist",
        ]);

        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert_eq!(cli.addr.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(cli.site_root.as_deref(), Some("dist"));
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let cli = Cli::parse_from(["chronicle-server", "-vvv"]);
        assert_eq!(cli.verbose, 3);
    }
}
