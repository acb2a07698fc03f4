use rand::Rng;
use serde::Serialize;

use crate::generator::generate_person_with;
use crate::models::Person;

pub const DEFAULT_ROW_COUNT: u64 = 100;
pub const MAX_ROW_COUNT: u64 = 1_000_000;
pub const HEADERS: [&str; 5] = ["Code", "Name", "Phone", "Email", "Gender"];

/// A row count with missing or invalid input already replaced by [`DEFAULT_ROW_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCount(u64);

impl RowCount {
    fn capped(n: u64) -> Self {
        if n > MAX_ROW_COUNT {
            tracing::warn!(
                "Row count {} exceeds the limit, capping at {}",
                n,
                MAX_ROW_COUNT
            );
            Self(MAX_ROW_COUNT)
        } else {
            Self(n)
        }
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// Parses user supplied text. Anything that is not a non-negative integer falls back to
    /// the default, and counts above [`MAX_ROW_COUNT`] are capped.
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(n) if n >= 0 => Self::capped(n as u64),
            _ => {
                tracing::warn!(
                    "Invalid row count {:?}, using default of {}",
                    input,
                    DEFAULT_ROW_COUNT
                );
                Self::default()
            }
        }
    }
}

impl Default for RowCount {
    fn default() -> Self {
        Self(DEFAULT_ROW_COUNT)
    }
}

impl From<Option<i64>> for RowCount {
    fn from(count: Option<i64>) -> Self {
        match count {
            Some(n) if n >= 0 => Self::capped(n as u64),
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: [&'static str; 5],
    pub rows: Vec<Person>,
}

pub fn render_table(count: Option<i64>) -> Table {
    render_table_with(&mut rand::rng(), RowCount::from(count))
}

pub fn render_table_with<R: Rng>(rng: &mut R, count: RowCount) -> Table {
    let count = count.get();
    tracing::debug!("Generating {} rows", count);

    let rows = (0..count)
        .map(|code| generate_person_with(rng, code))
        .collect();

    Table {
        headers: HEADERS,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn renders_exact_row_count() {
        for n in [0, 1, 3, 57, 250] {
            let table = render_table(Some(n));
            assert_eq!(table.headers, HEADERS);
            assert_eq!(table.rows.len(), n as usize);
        }
    }

    #[test]
    fn zero_rows_keeps_header() {
        let table = render_table(Some(0));
        assert_eq!(table.headers.len(), 5);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn codes_are_row_indices() {
        let table = render_table(Some(3));
        let codes: Vec<u64> = table.rows.iter().map(|p| p.code).collect();
        assert_eq!(codes, vec![0, 1, 2]);
    }

    #[test]
    fn missing_or_negative_count_uses_default() {
        assert_eq!(render_table(None).rows.len(), 100);
        assert_eq!(render_table(Some(-4)).rows.len(), 100);
    }

    #[test]
    fn parse_normalizes_bad_input() {
        assert_eq!(RowCount::parse("12").get(), 12);
        assert_eq!(RowCount::parse(" 0 ").get(), 0);
        assert_eq!(RowCount::parse("abc").get(), DEFAULT_ROW_COUNT);
        assert_eq!(RowCount::parse("").get(), DEFAULT_ROW_COUNT);
        assert_eq!(RowCount::parse("-1").get(), DEFAULT_ROW_COUNT);
        assert_eq!(RowCount::parse("2.5").get(), DEFAULT_ROW_COUNT);
    }

    #[test]
    fn oversized_counts_are_capped() {
        assert_eq!(RowCount::parse("9223372036854775807").get(), MAX_ROW_COUNT);
        assert_eq!(RowCount::from(Some(i64::MAX)).get(), MAX_ROW_COUNT);
        assert_eq!(RowCount::from(Some(MAX_ROW_COUNT as i64)).get(), MAX_ROW_COUNT);
    }

    #[test]
    fn seeded_tables_are_reproducible() {
        let a = render_table_with(&mut StdRng::seed_from_u64(9), RowCount::parse("25"));
        let b = render_table_with(&mut StdRng::seed_from_u64(9), RowCount::parse("25"));
        assert_eq!(a, b);
    }
}
