//! CNPG Manifest Generator CLI
//!
//! Reads kind-tagged configuration documents (YAML, from a file or stdin)
//! and prints the projected Kubernetes manifests separated by `---`.
//!
//! Usage: cnpg-manifest-gen [CONFIG_FILE]

use std::fs;
use std::io::Read;

use anyhow::Context;
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cnpg_manifest_gen::crd::ConfigDocument;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = match args.as_slice() {
        [] => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read configuration from stdin")?;
            buf
        }
        [path] => fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file '{}'", path))?,
        _ => anyhow::bail!("usage: cnpg-manifest-gen [CONFIG_FILE]"),
    };

    let mut rendered = 0usize;
    for document in serde_yaml::Deserializer::from_str(&input) {
        let config = ConfigDocument::deserialize(document)
            .context("Failed to parse configuration document")?;
        let manifest = config
            .project()
            .with_context(|| format!("Failed to render {} manifest", config.kind()))?;

        println!("---");
        print!("{}", manifest);
        rendered += 1;
    }

    info!(manifests = rendered, "Rendering complete");
    Ok(())
}

/// Initialize tracing subscriber; logs go to stderr so manifests on stdout
/// stay clean
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();
}
