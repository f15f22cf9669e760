use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::{EntryInput, SubmitLogic};
use crate::errors::{AppError, AppResult};
use crate::journal;
use crate::models::Roster;
use crate::sheet::{JsonSheetStore, SheetRef};
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Submit {
        code,
        opening,
        closing,
        start,
        end,
        date: date_arg,
    } = cmd
    else {
        return Ok(());
    };

    let roster = Roster::load(&cfg.roster_file())?;
    let (car, profile) = roster
        .find_by_access_code(code)
        .ok_or(AppError::UnknownDriver)?;

    let entry_date = match date_arg {
        Some(d) => date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
        None => date::today(),
    };

    let store = JsonSheetStore;
    let sref = SheetRef::new(cfg.workbook_file(&profile.sheet), &profile.sheet);
    let layout = profile.layout_or(cfg.default_layout);

    let input = EntryInput {
        opening: opening.clone(),
        closing: closing.clone(),
        start: start.clone(),
        end: end.clone(),
    };

    let record = SubmitLogic::apply(&store, profile, &sref, layout, entry_date, &input)?;

    success(format!(
        "Saved {} for {}: {} → {} km ({} km), {} → {}, OT {}h{}",
        record.date,
        car,
        record.opening,
        record.closing,
        record.distance,
        record.start_str(),
        record.end_str(),
        record.overtime,
        if record.remark.code().is_empty() {
            String::new()
        } else {
            format!(", {}", record.remark.code())
        },
    ));

    // Journal failures never fail a persisted entry
    if let Err(e) = journal::jlog(
        &cfg.journal_file(),
        "submit",
        car,
        &format!("Entry saved for {}", record.date),
    ) {
        eprintln!("⚠️ Failed to write journal: {}", e);
    }

    Ok(())
}
