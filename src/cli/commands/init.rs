use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::journal;
use crate::models::{DriverProfile, LayoutMode, Roster};
use crate::sheet::{Cell, JsonSheetStore, Sheet, SheetRef, SheetStore, Workbook, col};
use crate::utils::date::{all_days_of_month, parse_month, today};
use chrono::{Datelike, NaiveDate};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the data directory
///  - a sample driver roster if none exists
///  - one workbook file per roster entry (strict layouts get a dated
///    monthly template)
pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Init { month, force } = cmd else {
        return Ok(());
    };

    // cfg.data_dir already reflects a --data-dir override
    let cfg = Config::init_all(Some(cfg.data_dir.clone()), cli.test)?;

    println!("⚙️  Initializing dutylogger…");

    // Seed a sample roster on first run so there is something to edit
    let roster_path = cfg.roster_file();
    if !roster_path.exists() {
        let roster = sample_roster();
        roster.save(&roster_path)?;
        println!("📄 Sample roster: {}", roster_path.display());
    }
    let roster = Roster::load(&roster_path)?;

    let month_start = match month {
        Some(m) => parse_month(m).ok_or_else(|| AppError::InvalidDate(m.clone()))?,
        None => today().with_day(1).unwrap(),
    };

    let store = JsonSheetStore;
    for (car, profile) in &roster.drivers {
        let path = cfg.workbook_file(&profile.sheet);
        if path.exists() {
            if !force {
                continue;
            }
            std::fs::remove_file(&path)?;
        }

        let layout = profile.layout_or(cfg.default_layout);
        let mut wb = Workbook::default();
        wb.sheets
            .insert(profile.sheet.clone(), scaffold_sheet(car, profile, layout, month_start));

        store.save(&wb, &SheetRef::new(path.clone(), &profile.sheet))?;
        println!("🗄️  Workbook:     {}", path.display());
    }

    if let Err(e) = journal::jlog(&cfg.journal_file(), "init", "-", "Data directory initialized") {
        eprintln!("⚠️ Failed to write journal: {}", e);
    }

    println!("🎉 dutylogger initialization completed!");
    Ok(())
}

/// Header band plus, for strict layouts, one dated row per calendar day of
/// the month.
fn scaffold_sheet(
    car: &str,
    profile: &DriverProfile,
    layout: LayoutMode,
    month_start: NaiveDate,
) -> Sheet {
    let mut sheet = Sheet::default();
    let first = profile.first_row_index();

    sheet.set_cell(0, 0, Cell::Text(format!("Duty Timesheet - {}", car)));
    if first > 0 {
        let captions = [
            "No", "Date", "Opening", "Closing", "Km", "Start", "End", "OT", "Remark",
        ];
        for (c, caption) in captions.iter().enumerate() {
            sheet.set_cell(first - 1, c, Cell::Text(caption.to_string()));
        }
    }

    if layout == LayoutMode::Strict {
        let days = all_days_of_month(month_start.year(), month_start.month());
        for (i, day) in days.iter().enumerate() {
            sheet.set_cell(first + i, 0, Cell::Int(i as i64 + 1));
            sheet.set_cell(first + i, col::DATE, Cell::Date(*day));
        }
    }

    sheet
}

fn sample_roster() -> Roster {
    let mut roster = Roster::default();
    roster.drivers.insert(
        "KA-01-0001".to_string(),
        DriverProfile {
            code: "1234".to_string(),
            sheet: "KA-01-0001".to_string(),
            layout: None,
            first_data_row: 8,
        },
    );
    roster
}
