use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        check,
    } = cmd
    else {
        return Ok(());
    };

    if *print_config {
        let path = Config::config_file();
        if path.exists() {
            println!("{}", fs::read_to_string(&path)?);
        } else {
            warning(format!("No config file at {} (using defaults)", path.display()));
        }
    }

    if *check {
        if cfg.data_dir.trim().is_empty() {
            return Err(AppError::Config("data_dir is empty".to_string()));
        }
        if !cfg.data_dir_path().exists() {
            warning(format!(
                "Data directory does not exist yet: {} (run `init`)",
                cfg.data_dir_path().display()
            ));
        }
        if !cfg.roster_file().exists() {
            warning(format!(
                "Driver roster not found: {} (run `init`)",
                cfg.roster_file().display()
            ));
        }
        success("Configuration is valid.");
    }

    Ok(())
}
