use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::logic::load_records;
use crate::models::Roster;
use crate::utils::date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::List { car, date: date_arg } = cmd else {
        return Ok(());
    };

    let roster = Roster::load(&cfg.roster_file())?;
    let profile = roster
        .get(car)
        .ok_or_else(|| AppError::Config(format!("Unknown vehicle code: {car}")))?;

    let only = match date_arg {
        Some(d) => Some(date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
        None => None,
    };

    let records = load_records(cfg, profile)?;
    let records: Vec<_> = records
        .into_iter()
        .filter(|r| only.is_none_or(|d| r.date == d.format("%Y-%m-%d").to_string()))
        .collect();

    if records.is_empty() {
        println!("No saved entries for {}.", car);
        return Ok(());
    }

    let mut table = Table::new(&[
        "Date", "Opening", "Closing", "Km", "Start", "End", "OT", "Remark",
    ]);
    for r in &records {
        table.add_row(vec![
            r.date.clone(),
            r.opening.to_string(),
            r.closing.to_string(),
            r.distance.to_string(),
            r.start.clone(),
            r.end.clone(),
            r.overtime.to_string(),
            r.remark.clone(),
        ]);
    }

    println!("{}", table.render());
    Ok(())
}
