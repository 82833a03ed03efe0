//! Show-config command handler.

use anyhow::Context;
use seed_populate::CommonSeedArgs;

/// Render the effective config (file or defaults plus flag overrides) as YAML.
pub fn render_config(args: &CommonSeedArgs) -> anyhow::Result<String> {
    let config = args.load_config().context("Failed to load seed config")?;
    config.to_yaml().context("Failed to serialize config")
}
