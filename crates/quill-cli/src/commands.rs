use anyhow::Context;

use quill_server::{QuillServer, ServerConfig};

use crate::cli::{Cli, Command, ServeArgs};

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::DefaultConfig => default_config(),
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => {
            tracing::warn!("no config file given; using development defaults");
            ServerConfig::default()
        }
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    QuillServer::new(config)
        .serve()
        .await
        .context("server exited with an error")
}

fn default_config() -> anyhow::Result<()> {
    let rendered = toml::to_string_pretty(&ServerConfig::default())?;
    print!("{rendered}");
    Ok(())
}
