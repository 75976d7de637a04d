//! Competitor records and the home-organization mode
//!
//! A [`RaceEntry`] is one data line of a race-day file. It carries two raw bib
//! columns, one per organization. Which of them is "ours" is decided by the
//! run-wide [`HomeOrg`], which is passed into every accessor rather than read
//! from shared state.

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// The organization whose bib numbers are authoritative for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HomeOrg {
    /// Mid-Atlantic bibs are home bibs; New England bibs are away bibs.
    #[default]
    MidAtlantic,
    /// New England bibs are home bibs; Mid-Atlantic bibs are away bibs.
    NewEngland,
}

impl fmt::Display for HomeOrg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeOrg::MidAtlantic => write!(f, "Mid-Atlantic"),
            HomeOrg::NewEngland => write!(f, "New England"),
        }
    }
}

/// Which policy branch produced a competitor's final bib.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Home,
    ExistingAssignment,
    Away,
    LoanerConflict,
    Loaner,
}

impl Decision {
    /// Every decision, in the order they are reported.
    pub const ALL: [Decision; 5] = [
        Decision::Home,
        Decision::ExistingAssignment,
        Decision::Away,
        Decision::LoanerConflict,
        Decision::Loaner,
    ];

    /// The label written into the decision column.
    pub fn label(self) -> &'static str {
        match self {
            Decision::Home => "Home",
            Decision::ExistingAssignment => "Existing Assignment",
            Decision::Away => "Away",
            Decision::LoanerConflict => "Loaner - Conflict",
            Decision::Loaner => "Loaner",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One competitor line of a race-day file.
///
/// Field order is the column order of the file and must not change: rows are
/// mapped onto these fields positionally in [`RaceEntry::from_row`] and written
/// back in the same order by [`RaceEntry::to_row`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceEntry {
    pub new_england_bib: String,
    pub mid_atlantic_bib: String,
    pub membership_number: String,
    pub alternate_id: String,
    pub first_name: String,
    pub last_name: String,
    pub year_of_birth: String,
    pub gender: String,
    pub team: String,
    pub registration_date: String,
    pub membership: String,
    pub certification: String,
    pub season_pass: String,
    pub decision: String,
}

impl RaceEntry {
    /// Number of columns in a data line.
    pub const FIELD_COUNT: usize = 14;

    /// Build an entry from a data line.
    ///
    /// Returns `None` unless the row has exactly [`Self::FIELD_COUNT`] values.
    /// Values are stored as read; trimming happens in the bib accessors.
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Option<Self> {
        let [new_england_bib, mid_atlantic_bib, membership_number, alternate_id, first_name, last_name, year_of_birth, gender, team, registration_date, membership, certification, season_pass, decision] =
            row
        else {
            return None;
        };

        let own = |s: &S| s.as_ref().to_string();
        Some(Self {
            new_england_bib: own(new_england_bib),
            mid_atlantic_bib: own(mid_atlantic_bib),
            membership_number: own(membership_number),
            alternate_id: own(alternate_id),
            first_name: own(first_name),
            last_name: own(last_name),
            year_of_birth: own(year_of_birth),
            gender: own(gender),
            team: own(team),
            registration_date: own(registration_date),
            membership: own(membership),
            certification: own(certification),
            season_pass: own(season_pass),
            decision: own(decision),
        })
    }

    /// The entry's values in column order.
    pub fn to_row(&self) -> [&str; Self::FIELD_COUNT] {
        [
            &self.new_england_bib,
            &self.mid_atlantic_bib,
            &self.membership_number,
            &self.alternate_id,
            &self.first_name,
            &self.last_name,
            &self.year_of_birth,
            &self.gender,
            &self.team,
            &self.registration_date,
            &self.membership,
            &self.certification,
            &self.season_pass,
            &self.decision,
        ]
    }

    /// The bib issued by the home organization, trimmed. Empty means none.
    pub fn home_bib(&self, home: HomeOrg) -> &str {
        match home {
            HomeOrg::MidAtlantic => clean_bib(&self.mid_atlantic_bib),
            HomeOrg::NewEngland => clean_bib(&self.new_england_bib),
        }
    }

    /// The bib issued by the partner organization, trimmed. Empty means none.
    pub fn away_bib(&self, home: HomeOrg) -> &str {
        match home {
            HomeOrg::MidAtlantic => clean_bib(&self.new_england_bib),
            HomeOrg::NewEngland => clean_bib(&self.mid_atlantic_bib),
        }
    }

    /// Write `bib` into the home organization's column. The away column is
    /// never touched.
    pub fn set_bib(&mut self, home: HomeOrg, bib: &str) {
        let bib = clean_bib(bib).to_string();
        match home {
            HomeOrg::MidAtlantic => self.mid_atlantic_bib = bib,
            HomeOrg::NewEngland => self.new_england_bib = bib,
        }
    }

    pub fn set_decision(&mut self, decision: Decision) {
        self.decision = decision.label().to_string();
    }

    /// Key used to recognize the same competitor on different days.
    pub fn identity_key(&self) -> String {
        let key = format!(
            "{}{}{}{}",
            self.membership_number, self.first_name, self.last_name, self.year_of_birth
        );
        key.trim().to_string()
    }

    /// Name shown in the run log.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Bib values are compared and stored without surrounding whitespace.
pub fn clean_bib(bib: &str) -> &str {
    bib.trim()
}
