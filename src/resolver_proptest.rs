//! Property-based tests for bib resolution.
//!
//! These tests generate race series with overlapping competitors and bib
//! collisions and verify that the assignment invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use std::collections::HashMap;

    use crate::entry::{Decision, HomeOrg, RaceEntry};
    use crate::loaner::LoanerPool;
    use crate::race_day::RaceDay;
    use crate::resolver::BibResolver;
    use proptest::prelude::*;

    const COMPETITORS: u8 = 8;

    /// One record: which competitor it is and which away bib it carries today.
    fn record() -> impl Strategy<Value = (u8, Option<u8>)> {
        (0..COMPETITORS, proptest::option::of(1u8..12))
    }

    fn series() -> impl Strategy<Value = (Vec<Vec<(u8, Option<u8>)>>, Vec<bool>, bool)> {
        (
            prop::collection::vec(prop::collection::vec(record(), 0..10), 1..5),
            prop::collection::vec(any::<bool>(), COMPETITORS as usize),
            any::<bool>(),
        )
    }

    /// Competitors with a home bib always carry the same one (their number),
    /// so home bibs are unique per competitor and share a namespace with away
    /// bibs.
    fn build(
        days: &[Vec<(u8, Option<u8>)>],
        has_home: &[bool],
        home: HomeOrg,
    ) -> (Vec<RaceDay>, LoanerPool) {
        let mut total: usize = 0;
        let race_days = days
            .iter()
            .enumerate()
            .map(|(i, records)| {
                let mut day = RaceDay::new(format!("day{}.csv", i + 1));
                for (id, away) in records {
                    let home_bib = if has_home[*id as usize] {
                        (id + 1).to_string()
                    } else {
                        String::new()
                    };
                    let away_bib = away.map(|b| b.to_string()).unwrap_or_default();
                    let mut entry = RaceEntry {
                        membership_number: format!("E{}", id),
                        first_name: format!("First{}", id),
                        last_name: format!("Last{}", id),
                        year_of_birth: "1970".to_string(),
                        ..Default::default()
                    };
                    match home {
                        HomeOrg::MidAtlantic => {
                            entry.mid_atlantic_bib = home_bib;
                            entry.new_england_bib = away_bib;
                        }
                        HomeOrg::NewEngland => {
                            entry.new_england_bib = home_bib;
                            entry.mid_atlantic_bib = away_bib;
                        }
                    }
                    day.entries.push(entry);
                    total += 1;
                }
                day
            })
            .collect();

        // Loaners start inside the home/away range and every value appears
        // twice, so the pool hits claimed bibs and repeats itself. There are
        // always enough free values left for every record.
        let pool = LoanerPool::new(
            (1..=total + 12)
                .flat_map(|n: usize| [n.to_string(), n.to_string()])
                .collect(),
        );
        (race_days, pool)
    }

    fn mode(new_england: bool) -> HomeOrg {
        if new_england {
            HomeOrg::NewEngland
        } else {
            HomeOrg::MidAtlantic
        }
    }

    proptest! {
        /// Property: every record ends with a non-empty bib, and each bib
        /// belongs to exactly one competitor.
        #[test]
        fn bibs_are_unique_per_competitor((days, has_home, ne) in series()) {
            let home = mode(ne);
            let (mut days, pool) = build(&days, &has_home, home);
            BibResolver::new(home, pool).resolve(&mut days).unwrap();

            let mut owners: HashMap<String, String> = HashMap::new();
            for entry in days.iter().flat_map(|d| &d.entries) {
                let bib = entry.home_bib(home).to_string();
                prop_assert!(!bib.is_empty());
                let key = entry.identity_key();
                let owner = owners.entry(bib.clone()).or_insert_with(|| key.clone());
                prop_assert_eq!(owner, &key, "bib {} shared", bib);
            }
        }

        /// Property: records with the same identity key end with the same bib.
        #[test]
        fn returning_competitors_converge((days, has_home, ne) in series()) {
            let home = mode(ne);
            let (mut days, pool) = build(&days, &has_home, home);
            BibResolver::new(home, pool).resolve(&mut days).unwrap();

            let mut assigned: HashMap<String, String> = HashMap::new();
            for entry in days.iter().flat_map(|d| &d.entries) {
                let bib = entry.home_bib(home).to_string();
                let first = assigned.entry(entry.identity_key()).or_insert_with(|| bib.clone());
                prop_assert_eq!(first, &bib);
            }
        }

        /// Property: loaners are issued in pool order, each at most once.
        #[test]
        fn loaners_follow_pool_order((days, has_home, ne) in series()) {
            let home = mode(ne);
            let (mut days, pool) = build(&days, &has_home, home);
            let mut resolver = BibResolver::new(home, pool);
            resolver.resolve(&mut days).unwrap();

            let loaner_labels = [Decision::Loaner.label(), Decision::LoanerConflict.label()];
            let issued: Vec<String> = days
                .iter()
                .flat_map(|d| &d.entries)
                .filter(|e| loaner_labels.contains(&e.decision.as_str()))
                .map(|e| e.home_bib(home).to_string())
                .collect();

            prop_assert_eq!(issued.as_slice(), resolver.pool().issued_bibs());
        }

        /// Property: resolving the same input twice from fresh state gives the
        /// same result.
        #[test]
        fn resolution_is_deterministic((days, has_home, ne) in series()) {
            let home = mode(ne);
            let (input, pool) = build(&days, &has_home, home);

            let mut first = input.clone();
            BibResolver::new(home, pool.clone()).resolve(&mut first).unwrap();
            let mut second = input;
            BibResolver::new(home, pool).resolve(&mut second).unwrap();

            prop_assert_eq!(first, second);
        }

        /// Property: the away column is never rewritten.
        #[test]
        fn away_column_is_untouched((days, has_home, ne) in series()) {
            let home = mode(ne);
            let (input, pool) = build(&days, &has_home, home);
            let mut resolved = input.clone();
            BibResolver::new(home, pool).resolve(&mut resolved).unwrap();

            for (before, after) in input.iter().flat_map(|d| &d.entries)
                .zip(resolved.iter().flat_map(|d| &d.entries))
            {
                prop_assert_eq!(before.away_bib(home), after.away_bib(home));
            }
        }
    }
}
