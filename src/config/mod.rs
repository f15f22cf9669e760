use crate::models::LayoutMode;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

fn default_layout() -> LayoutMode {
    LayoutMode::Append
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Where workbooks, the driver roster and the journal live
    pub data_dir: String,
    /// Layout for roster entries that don't set one themselves
    #[serde(default = "default_layout")]
    pub default_layout: LayoutMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::data_dir_default().to_string_lossy().to_string(),
            default_layout: default_layout(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("dutylogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".dutylogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dutylogger.conf")
    }

    fn data_dir_default() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Resolved data directory (expands ~)
    pub fn data_dir_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Roster, journal and workbook locations are fixed inside the data dir
    pub fn roster_file(&self) -> PathBuf {
        self.data_dir_path().join("drivers.json")
    }

    pub fn journal_file(&self) -> PathBuf {
        self.data_dir_path().join("journal.log")
    }

    pub fn workbook_file(&self, sheet: &str) -> PathBuf {
        self.data_dir_path().join(format!("{}.json", sheet))
    }

    /// Initialize configuration directory and file. In test mode the config
    /// file is left alone so test runs never clobber a real setup.
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> io::Result<Self> {
        let dir = Self::config_dir();

        let data_dir = match custom_data_dir {
            Some(d) => expand_tilde(&d),
            None => Self::data_dir_default(),
        };

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            default_layout: default_layout(),
        };

        fs::create_dir_all(&data_dir)?;

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config).expect("serialize config");
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ Data dir:    {:?}", data_dir);

        Ok(config)
    }
}
