use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::Roster;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        car,
        format,
        file,
        force,
    } = cmd
    {
        let roster = Roster::load(&cfg.roster_file())?;
        ExportLogic::export(cfg, &roster, car, format.clone(), file, *force)?;
    }

    Ok(())
}
