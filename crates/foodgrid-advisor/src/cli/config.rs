// crates/foodgrid-advisor/src/cli/config.rs
// Readiness and configuration report

use anyhow::Result;
use foodgrid::config::{ApiKeys, ClientConfig, FoodGridConfig};

pub fn run_config() -> Result<()> {
    let path = FoodGridConfig::config_path();
    let (file_config, mut validation) = match FoodGridConfig::load_from(&path) {
        Ok(Some(config)) => {
            println!("Config file: {}", path.display());
            let validation = config.llm.validate();
            (config, validation)
        }
        Ok(None) => {
            println!("Config file: {} (not found, using defaults)", path.display());
            (FoodGridConfig::default(), Default::default())
        }
        Err(e) => {
            println!("Config file: {} (invalid, using defaults)", path.display());
            let mut validation = foodgrid::config::ConfigValidation::new();
            validation.add_error(e.to_string());
            (FoodGridConfig::default(), validation)
        }
    };

    let client_config = ClientConfig::from_api_keys(&ApiKeys::from_env());
    validation.extend(client_config.validate());

    let llm = &file_config.llm;
    println!("Model:       {}", llm.model());
    println!("Endpoint:    {}", llm.base_url());
    println!("Temperature: {}", llm.temperature());
    println!("Max tokens:  {}", llm.max_tokens());
    println!("Timeout:     {}s", llm.timeout().as_secs());
    println!(
        "Live advisory: {}",
        if client_config.is_ready() { "enabled" } else { "disabled (offline guidance only)" }
    );
    println!();
    println!("{}", validation.report());

    if !validation.is_valid() {
        anyhow::bail!("configuration has errors");
    }
    Ok(())
}
