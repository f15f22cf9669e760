use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::journal;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, force } = cmd {
        BackupLogic::backup(cfg, file, *force)?;

        if let Err(e) = journal::jlog(&cfg.journal_file(), "backup", file, "Backup created") {
            eprintln!("⚠️ Failed to write journal: {}", e);
        }
    }

    Ok(())
}
