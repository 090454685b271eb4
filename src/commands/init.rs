use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".govgap.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Govgap Configuration

[target]
# Target maturity ceiling applied to every domain (0-5)
level = 5.0

[output]
default_format = "terminal"
"#;

    fs::write(&config_path, default_config)?;
    println!("Created .govgap.toml configuration file");

    Ok(())
}
