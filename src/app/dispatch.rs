use crate::cli::commands::{Cli, Commands};
use anyhow::{Context, Result};
use sparkform::Config;
use sparkform::core::actions::{Surface, all_actions};
use sparkform::core::enhance::{EnhanceableField, build_enhancer, run_enhancement};
use sparkform::transport::gateway::run_gateway;
use std::io::Write;
use std::sync::Mutex;
use tracing::info;

/// Enhance `text` once and stream it to stdout.
async fn run_enhance(config: &Config, text: &str, context: &str, relay: Option<&str>) -> Result<()> {
    let enhancer = build_enhancer(config, relay)?;
    let field = Mutex::new(EnhanceableField::new("text", context).with_value(text));

    let mut stdout = std::io::stdout();
    run_enhancement(&field, enhancer.as_ref(), |chunk| {
        let _ = stdout.write_all(chunk.as_bytes());
        let _ = stdout.flush();
    })
    .await
    .context("enhance text")?;
    println!();
    Ok(())
}

fn print_actions(surface: Option<Surface>, schema: bool) -> Result<()> {
    let specs = surface.map_or_else(all_actions, Surface::actions);

    if schema {
        let tools: Vec<_> = specs.iter().map(|spec| spec.function_schema()).collect();
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    for spec in &specs {
        println!("{}", spec.name);
        println!("    {}", spec.description);
        for param in &spec.parameters {
            let required = if param.required { ", required" } else { "" };
            println!(
                "    - {} ({}{required}): {}",
                param.name, param.param_type, param.description
            );
        }
    }
    Ok(())
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Serve { port, host } => {
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            let port = port.unwrap_or(config.gateway.port);
            info!("Starting gateway on {host}:{port}");
            run_gateway(&host, port, &config).await
        }
        Commands::Enhance {
            context,
            relay,
            text,
        } => run_enhance(&config, &text.join(" "), &context, relay.as_deref()).await,
        Commands::Wizard { relay } => {
            sparkform::interactive::run_wizard(&config, relay.as_deref()).await
        }
        Commands::Actions { surface, schema } => print_actions(surface, schema),
    }
}
