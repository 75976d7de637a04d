//! # Run Configuration
//!
//! A run needs four things: which organization is home, the loaner bib file,
//! one or more race-day files, and an output directory. They can come from a
//! YAML file, from command-line flags, or both, with flags taking precedence.
//!
//! ```yaml
//! home-org: new-england
//! loaner-bibs: loaners.csv
//! race-days:
//!   - saturday-gs.csv
//!   - sunday-sl.csv
//! output-dir: processed
//! ```
//!
//! Relative paths in a configuration file are taken relative to the directory
//! that holds the file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::entry::HomeOrg;
use crate::race_day::RaceDay;
use crate::error::{Error, Result};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".bib-assigner.yaml";

/// Run settings as supplied, any of which may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RunSettings {
    #[serde(default)]
    pub home_org: Option<HomeOrg>,
    #[serde(default)]
    pub loaner_bibs: Option<PathBuf>,
    #[serde(default)]
    pub race_days: Vec<PathBuf>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl RunSettings {
    /// Layer `overrides` on top of these settings.
    ///
    /// Race days given in `overrides` replace the whole list rather than
    /// appending to it.
    pub fn merge(self, overrides: RunSettings) -> RunSettings {
        RunSettings {
            home_org: overrides.home_org.or(self.home_org),
            loaner_bibs: overrides.loaner_bibs.or(self.loaner_bibs),
            race_days: if overrides.race_days.is_empty() {
                self.race_days
            } else {
                overrides.race_days
            },
            output_dir: overrides.output_dir.or(self.output_dir),
        }
    }

    fn relative_to(mut self, base: &Path) -> RunSettings {
        let rebase = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.loaner_bibs = self.loaner_bibs.map(rebase);
        self.race_days = self.race_days.into_iter().map(rebase).collect();
        self.output_dir = self.output_dir.map(rebase);
        self
    }

    /// Check that everything a run needs is present.
    pub fn into_run_config(self) -> Result<RunConfig> {
        let loaner_bibs = self.loaner_bibs.ok_or_else(|| Error::Config {
            message: "No loaner bib file given".to_string(),
            hint: Some("Pass --loaners <FILE> or set 'loaner-bibs' in the config file".to_string()),
        })?;
        if self.race_days.is_empty() {
            return Err(Error::Config {
                message: "No race day files given".to_string(),
                hint: Some("List race day CSV files after the command or under 'race-days'".to_string()),
            });
        }
        let output_dir = self.output_dir.ok_or_else(|| Error::Config {
            message: "No output directory given".to_string(),
            hint: Some("Pass --output <DIR> or set 'output-dir' in the config file".to_string()),
        })?;

        let mut outputs: HashMap<PathBuf, &Path> = HashMap::new();
        for day in &self.race_days {
            let output = RaceDay::new(day.as_path()).output_path(&output_dir);
            if let Some(first) = outputs.insert(output.clone(), day) {
                return Err(Error::Config {
                    message: format!(
                        "Race days {} and {} would both be written to {}",
                        first.display(),
                        day.display(),
                        output.display()
                    ),
                    hint: Some("Give each race day file a distinct name".to_string()),
                });
            }
        }

        Ok(RunConfig {
            home_org: self.home_org.unwrap_or_default(),
            loaner_bibs,
            race_days: self.race_days,
            output_dir,
        })
    }
}

/// A complete set of run inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub home_org: HomeOrg,
    pub loaner_bibs: PathBuf,
    /// Race days in resolution order.
    pub race_days: Vec<PathBuf>,
    pub output_dir: PathBuf,
}

/// Parse run settings from YAML.
pub fn parse(yaml_content: &str) -> Result<RunSettings> {
    if yaml_content.trim().is_empty() {
        return Ok(RunSettings::default());
    }
    Ok(serde_yaml::from_str(yaml_content)?)
}

/// Load run settings from a YAML file, resolving its relative paths against
/// the file's directory.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<RunSettings> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::load(path, e))?;
    let settings = parse(&content)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(settings.relative_to(base))
}
