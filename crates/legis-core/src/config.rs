use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::paths;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Data-root configuration. The only setting is which congress counts as
/// current; it decides which bills are alive and which status wording to
/// use. Without a config file it is derived from today's date, but an
/// archival data set can pin itself to its own congress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_current_congress")]
    pub current_congress: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            current_congress: default_current_congress(),
        }
    }
}

fn default_current_congress() -> u16 {
    congress_for_date(Utc::now().date_naive())
}

impl Config {
    pub fn load(root: &Path) -> Result<Config> {
        let path = paths::config_file(root);
        if !path.exists() {
            return Ok(Config::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&data)?;
        Ok(config)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_file(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Congress calendar
// ---------------------------------------------------------------------------

/// The congress in session on `date`. Congress N convenes on January 3 of
/// the odd year 1789 + 2(N - 1) and sits for two years, so January 1 and 2
/// of an odd year still belong to the outgoing congress.
pub fn congress_for_date(date: NaiveDate) -> u16 {
    let year = date.year();
    let start_year = if year % 2 == 1 {
        if (date.month(), date.day()) < (1, 3) {
            year - 2
        } else {
            year
        }
    } else {
        year - 1
    };
    (((start_year - 1789) / 2) + 1).max(1) as u16
}

/// Calendar years a congress covers: the 112th is (2011, 2012).
pub fn congress_years(congress: u16) -> (i32, i32) {
    let start = 1789 + 2 * (congress as i32 - 1);
    (start, start + 1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn congress_boundaries() {
        assert_eq!(congress_for_date(date(2011, 1, 2)), 111);
        assert_eq!(congress_for_date(date(2011, 1, 3)), 112);
        assert_eq!(congress_for_date(date(2011, 7, 1)), 112);
        assert_eq!(congress_for_date(date(2012, 12, 31)), 112);
        assert_eq!(congress_for_date(date(2013, 1, 3)), 113);
    }

    #[test]
    fn first_congress() {
        assert_eq!(congress_for_date(date(1789, 3, 4)), 1);
        assert_eq!(congress_for_date(date(1790, 6, 1)), 1);
    }

    #[test]
    fn years_roundtrip() {
        assert_eq!(congress_years(112), (2011, 2012));
        assert_eq!(congress_years(1), (1789, 1790));
        for congress in [1u16, 50, 111, 112, 119] {
            let (start, _) = congress_years(congress);
            assert_eq!(congress_for_date(date(start, 6, 1)), congress);
        }
    }

    #[test]
    fn default_matches_today() {
        let config = Config::default();
        assert_eq!(
            config.current_congress,
            congress_for_date(Utc::now().date_naive())
        );
    }

    #[test]
    fn load_missing_uses_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.current_congress, Config::default().current_congress);
    }

    #[test]
    fn save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            current_congress: 112,
        };
        config.save(dir.path()).unwrap();
        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.current_congress, 112);
    }
}
