use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::journal;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        journal::print_journal(&cfg.journal_file())?;
    }

    Ok(())
}
