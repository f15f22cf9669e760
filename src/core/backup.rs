use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Zip the whole data directory (roster, workbooks, journal) into one
    /// archive.
    pub fn backup(cfg: &Config, dest_file: &str, force: bool) -> AppResult<()> {
        let data_dir = cfg.data_dir_path();
        let dest = Path::new(dest_file);

        if !data_dir.exists() {
            return Err(AppError::Store(format!(
                "Data directory not found: {}",
                data_dir.display()
            )));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() && !force {
            return Err(AppError::Export(format!(
                "File '{}' already exists (use --force to overwrite)",
                dest.display()
            )));
        }

        let file = fs::File::create(dest)?;
        let mut zip = ZipWriter::new(file);

        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let mut count = 0usize;
        for entry in fs::read_dir(&data_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            zip.start_file(entry.file_name().to_string_lossy(), options)
                .map_err(std::io::Error::other)?;
            let mut f = fs::File::open(&path)?;
            std::io::copy(&mut f, &mut zip)?;
            count += 1;
        }

        zip.finish().map_err(std::io::Error::other)?;

        println!("📦 Backup created: {} ({} files)", dest.display(), count);
        Ok(())
    }
}
