//! Integration tests for the full seat generation pipeline.
//!
//! Exercises: SeatConfig → SeatGenerator (SeparationGraph + BlockScheduler)
//! → SeatTable, through the public API only.

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use seatgen_logic::config::SeatConfig;
use seatgen_logic::error::{ErrorKind, SeatError};
use seatgen_logic::generator::{generate, SeatGenerator, MAX_GENERATIONS};
use seatgen_logic::table::{SeatTable, EMPTY_SEAT_PLACEHOLDER};

// ── Helpers ────────────────────────────────────────────────────────────

fn class_names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Student{i:02}")).collect()
}

fn class_config() -> SeatConfig {
    let names = class_names(45);
    SeatConfig {
        row_count: 7,
        column_count: 7,
        shuffled_row_count: 2,
        disabled_last_row_positions: [0, 6].into_iter().collect(),
        leaders: names.iter().step_by(3).cloned().collect(),
        separated_pairs: vec![
            (names[0].clone(), names[1].clone()),
            (names[10].clone(), names[11].clone()),
            (names[10].clone(), names[12].clone()),
            (names[30].clone(), names[31].clone()),
        ],
        names,
        find_lucky: true,
        find_leaders: true,
    }
}

/// Every pair of 4-adjacent names in the table.
fn adjacent_pairs(table: &SeatTable) -> Vec<(String, String)> {
    let grid = table.grid();
    let mut pairs = Vec::new();
    for (r, c, name) in grid.cells() {
        let Some(name) = name else { continue };
        for other in grid.neighbor_values(r, c).unwrap() {
            pairs.push((name.clone(), other.clone()));
        }
    }
    pairs
}

fn assert_separated(table: &SeatTable, config: &SeatConfig) {
    let adjacent = adjacent_pairs(table);
    for (a, b) in &config.separated_pairs {
        assert!(
            !adjacent.iter().any(|(x, y)| x == a && y == b),
            "{a} and {b} sit together:\n{table}"
        );
    }
}

fn assert_leaders_valid(table: &SeatTable, config: &SeatConfig) {
    assert_eq!(table.leaders().len(), config.column_count);
    for column in 0..config.column_count {
        let row = table.leader_of(column).unwrap();
        let name = table.get(row, column).unwrap();
        assert!(
            config.leaders.contains(name),
            "column {column} leader {name} is not a leader candidate"
        );
    }
}

/// Seated names plus the lucky person, as a multiset.
fn everyone(table: &SeatTable) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for name in table.seated().chain(table.lucky_person()) {
        *counts.entry(name.to_string()).or_insert(0) += 1;
    }
    counts
}

fn multiset(names: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for name in names {
        *counts.entry(name.clone()).or_insert(0) += 1;
    }
    counts
}

// ── Pipeline coherence ─────────────────────────────────────────────────

#[test]
fn full_class_generates() {
    let config = class_config();
    let table = generate(&config, Some("42")).unwrap();

    assert_eq!(table.rows(), 7);
    assert_eq!(table.columns(), 7);
    assert_eq!(table.seed(), Some("42"));
    assert_eq!(table.seated().count(), 44);
    assert_separated(&table, &config);
    assert_leaders_valid(&table, &config);
    assert_eq!(everyone(&table), multiset(&config.names));
}

#[test]
fn deterministic_output() {
    let config = class_config();
    for seed in ["42", "2024-09-01", "seat me", "-17"] {
        let a = generate(&config, Some(seed)).unwrap();
        let b = generate(&config, Some(seed)).unwrap();
        assert_eq!(a, b, "seed {seed}");
        assert_eq!(a.leaders(), b.leaders());
        assert_eq!(a.lucky_person(), b.lucky_person());
    }
}

#[test]
fn different_seeds_differ() {
    let config = class_config();
    let tables: BTreeSet<String> = (0..10)
        .map(|s| generate(&config, Some(s.to_string().as_str())).unwrap().to_string())
        .collect();
    assert!(tables.len() > 1, "every seed produced the same table");
}

#[test]
fn seven_by_seven_example() {
    let config = SeatConfig {
        row_count: 7,
        column_count: 7,
        shuffled_row_count: 1,
        names: class_names(49),
        ..SeatConfig::default()
    };
    let first = generate(&config, Some("42")).unwrap();
    let second = generate(&config, Some("42")).unwrap();
    assert_eq!(first, second);
    assert!(first.seated().all(|n| n != EMPTY_SEAT_PLACEHOLDER));
    assert_eq!(everyone(&first), multiset(&config.names));
    // one-row blocks keep everyone in their own row
    for r in 0..7 {
        let row: BTreeSet<_> = first.row(r).unwrap().into_iter().map(String::from).collect();
        let expected: BTreeSet<_> = config.names[r * 7..r * 7 + 7].iter().cloned().collect();
        assert_eq!(row, expected);
    }
}

#[test]
fn two_separated_names_in_one_row_exhaust_retries() {
    let config = SeatConfig {
        row_count: 1,
        column_count: 2,
        shuffled_row_count: 1,
        names: vec!["Ann".into(), "Bob".into()],
        separated_pairs: vec![("Ann".into(), "Bob".into())],
        ..SeatConfig::default()
    };
    let err = generate(&config, Some("42")).unwrap_err();
    assert_eq!(err, SeatError::TooManyGenerations(MAX_GENERATIONS));
    assert_eq!(err.kind(), ErrorKind::GenerationExhausted);
}

#[test]
fn not_enough_seats_fails_before_any_attempt() {
    let mut config = class_config();
    config.names = class_names(48);
    config.find_lucky = false;
    // 49 cells - 2 disabled = 47 seats
    let err = SeatGenerator::new(&config).unwrap_err();
    assert_eq!(err, SeatError::NotEnoughSeats { seats: 47, people: 48 });
    assert_eq!(err.kind(), ErrorKind::InfeasibleConstraints);
}

#[test]
fn not_enough_leaders_fails_before_any_attempt() {
    let mut config = class_config();
    config.leaders = config.names.iter().take(6).cloned().collect();
    let err = generate(&config, Some("1")).unwrap_err();
    assert_eq!(err, SeatError::NotEnoughLeaders { leaders: 6, columns: 7 });
}

#[test]
fn illegal_config_is_an_illegal_argument() {
    let mut config = class_config();
    config.shuffled_row_count = 0;
    assert_eq!(
        generate(&config, None).unwrap_err().kind(),
        ErrorKind::IllegalArgument
    );
}

#[test]
fn disabled_seats_stay_empty() {
    let config = class_config();
    for seed in 0..20 {
        let table = generate(&config, Some(seed.to_string().as_str())).unwrap();
        assert!(table.is_empty_seat(6, 0).unwrap());
        assert!(table.is_empty_seat(6, 6).unwrap());
    }
}

#[test]
fn duplicate_names_each_take_a_seat() {
    let config = SeatConfig {
        row_count: 2,
        column_count: 3,
        shuffled_row_count: 2,
        names: ["Li", "Li", "Wu", "Wu", "Ma", "Zo"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        ..SeatConfig::default()
    };
    let table = generate(&config, Some("dup")).unwrap();
    assert_eq!(everyone(&table), multiset(&config.names));
}

#[test]
fn empty_table_matches_config_shape() {
    let config = class_config();
    let table = SeatTable::empty(&config);
    assert_eq!(table.rows(), 7);
    assert_eq!(table.columns(), 7);
    assert_eq!(table.seated().count(), 0);
    assert!(table
        .iter_rows()
        .all(|row| row.iter().all(|n| *n == EMPTY_SEAT_PLACEHOLDER)));
}

// ── Property tests ─────────────────────────────────────────────────────

/// Small configs with enough seats; when leaders are wanted the whole class
/// is eligible and the first row is always full.
fn config_strategy() -> impl Strategy<Value = SeatConfig> {
    (2usize..6, 2usize..6, 1usize..4, any::<bool>(), any::<bool>())
        .prop_flat_map(|(rows, columns, shuffled, lucky, leaders)| {
            let max_people = rows * columns - 1;
            (
                Just((rows, columns, shuffled, lucky, leaders)),
                (columns + 1)..=max_people,
                prop::collection::vec((0usize..36, 0usize..36), 0..2),
            )
        })
        .prop_map(|((rows, columns, shuffled, lucky, leaders), people, pairs)| {
            let names: Vec<String> = (0..people).map(|i| format!("n{i}")).collect();
            let separated_pairs = pairs
                .into_iter()
                .map(|(a, b)| (format!("n{}", a % people), format!("n{}", b % people)))
                .collect();
            SeatConfig {
                row_count: rows,
                column_count: columns,
                shuffled_row_count: shuffled,
                disabled_last_row_positions: BTreeSet::new(),
                leaders: if leaders {
                    names.iter().cloned().collect()
                } else {
                    BTreeSet::new()
                },
                names,
                separated_pairs,
                find_lucky: lucky,
                find_leaders: leaders,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generation_is_deterministic(config in config_strategy(), seed in "[a-z0-9]{1,8}") {
        let a = generate(&config, Some(seed.as_str()));
        let b = generate(&config, Some(seed.as_str()));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn successful_tables_honor_every_constraint(config in config_strategy(), seed in "[a-z0-9]{1,8}") {
        let table = match generate(&config, Some(seed.as_str())) {
            Ok(table) => table,
            Err(e) => {
                // tiny grids can make a separated pair unavoidable
                prop_assert_eq!(e.kind(), ErrorKind::GenerationExhausted);
                return Ok(());
            }
        };

        let adjacent = adjacent_pairs(&table);
        for (a, b) in &config.separated_pairs {
            if a != b {
                prop_assert!(!adjacent.iter().any(|(x, y)| x == a && y == b));
            }
        }

        if config.find_leaders {
            prop_assert_eq!(table.leaders().len(), config.column_count);
            for column in 0..config.column_count {
                let row = table.leader_of(column).unwrap();
                prop_assert!(config.leaders.contains(table.get(row, column).unwrap()));
            }
        } else {
            prop_assert!(table.leaders().is_empty());
        }

        if config.find_lucky {
            let lucky = table.lucky_person().unwrap();
            prop_assert!(!table.seated().any(|n| n == lucky));
            prop_assert_eq!(table.seated().count(), config.names.len() - 1);
        } else {
            prop_assert!(table.lucky_person().is_none());
            prop_assert_eq!(table.seated().count(), config.names.len());
        }
        prop_assert_eq!(everyone(&table), multiset(&config.names));
    }
}
