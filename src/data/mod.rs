//! Embedded historical dataset: U.S. wealth distribution and economic
//! metrics, 1925-2025.

mod resolve;

use thiserror::Error;

/// One year of observations. Wealth shares and rates are percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearRecord {
    pub year: i32,
    /// Share of household wealth held by the top 1%
    pub top1: f64,
    /// Share held by the next 9% (90th-99th percentile)
    pub next9: f64,
    /// Share held by the next 40% (50th-90th percentile)
    pub next40: f64,
    /// Share held by the bottom 50%
    pub bottom50: f64,
    /// Top marginal federal income tax rate
    pub top_tax_rate: f64,
    /// Union membership as a share of the workforce
    pub union_rate: f64,
    /// Whether estate/inheritance taxes were in effect
    pub has_wealth_tax: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("dataset has no records")]
    Empty,

    #[error("record years must be strictly increasing ({prev} then {next})")]
    OutOfOrder { prev: i32, next: i32 },
}

/// An immutable, year-ordered series of records. Construction validates
/// the ordering invariant, so every other operation can rely on it.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<YearRecord>,
}

impl Dataset {
    pub fn new(records: Vec<YearRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        for pair in records.windows(2) {
            if pair[1].year <= pair[0].year {
                return Err(DatasetError::OutOfOrder {
                    prev: pair[0].year,
                    next: pair[1].year,
                });
            }
        }
        Ok(Self { records })
    }

    /// The embedded 1925-2025 table.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::new(BUILTIN.to_vec())
    }

    pub fn records(&self) -> &[YearRecord] {
        &self.records
    }

    pub fn min_year(&self) -> i32 {
        self.records[0].year
    }

    pub fn max_year(&self) -> i32 {
        self.records[self.records.len() - 1].year
    }

    pub fn clamp_year(&self, year: i32) -> i32 {
        year.clamp(self.min_year(), self.max_year())
    }
}

const fn rec(
    year: i32,
    top1: f64,
    next9: f64,
    next40: f64,
    bottom50: f64,
    top_tax_rate: f64,
    union_rate: f64,
    has_wealth_tax: bool,
) -> YearRecord {
    YearRecord {
        year,
        top1,
        next9,
        next40,
        bottom50,
        top_tax_rate,
        union_rate,
        has_wealth_tax,
    }
}

// Wealth shares: Saez & Zucman distributional accounts. Tax rates: IRS
// historical top marginal brackets. Union membership: BLS/CPS series.
const BUILTIN: [YearRecord; 23] = [
    rec(1925, 44.2, 33.1, 20.8, 1.9, 25.0, 11.6, false),
    rec(1930, 44.8, 32.7, 20.4, 2.1, 25.0, 11.6, false),
    rec(1935, 42.5, 32.3, 22.4, 2.8, 63.0, 13.2, true),
    rec(1940, 36.4, 34.0, 25.8, 3.8, 81.1, 26.9, true),
    rec(1945, 29.8, 35.2, 29.9, 5.1, 94.0, 33.4, true),
    rec(1950, 28.1, 35.8, 30.9, 5.2, 91.0, 31.5, true),
    rec(1955, 29.8, 35.9, 29.6, 4.7, 91.0, 33.2, true),
    rec(1960, 31.4, 35.6, 28.9, 4.1, 91.0, 31.4, true),
    rec(1965, 32.5, 36.1, 27.9, 3.5, 70.0, 28.4, true),
    rec(1970, 30.6, 36.3, 29.5, 3.6, 71.75, 27.4, true),
    rec(1975, 28.4, 36.4, 31.1, 4.1, 70.0, 25.5, true),
    rec(1980, 27.1, 36.2, 32.1, 4.6, 70.0, 23.0, true),
    rec(1985, 30.5, 36.5, 29.2, 3.8, 50.0, 18.0, true),
    rec(1990, 33.8, 37.2, 26.0, 3.0, 28.0, 16.1, true),
    rec(1995, 34.6, 37.5, 25.2, 2.7, 39.6, 14.9, true),
    rec(2000, 36.2, 37.4, 24.0, 2.4, 39.6, 13.5, true),
    rec(2005, 36.3, 38.6, 23.0, 2.1, 35.0, 12.5, true),
    rec(2010, 34.1, 40.3, 23.6, 2.0, 35.0, 11.9, true),
    rec(2015, 37.8, 38.5, 21.7, 2.0, 39.6, 11.1, true),
    rec(2020, 38.2, 38.1, 21.7, 2.0, 37.0, 10.3, true),
    rec(2023, 39.0, 38.2, 20.8, 2.0, 37.0, 10.0, true),
    rec(2024, 39.3, 38.0, 20.7, 2.0, 37.0, 9.9, true),
    rec(2025, 39.6, 37.9, 20.5, 2.0, 37.0, 9.8, true),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_shape() {
        let dataset = Dataset::builtin().unwrap();
        assert_eq!(dataset.records().len(), 23);
        assert_eq!(dataset.min_year(), 1925);
        assert_eq!(dataset.max_year(), 2025);
    }

    #[test]
    fn test_builtin_shares_sum_to_about_100() {
        let dataset = Dataset::builtin().unwrap();
        for record in dataset.records() {
            let total = record.top1 + record.next9 + record.next40 + record.bottom50;
            assert!(
                (total - 100.0).abs() < 0.5,
                "year {} shares sum to {}",
                record.year,
                total
            );
        }
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Dataset::new(Vec::new()).unwrap_err(), DatasetError::Empty);
    }

    #[test]
    fn test_new_rejects_out_of_order_years() {
        let records = vec![
            rec(1950, 30.0, 35.0, 30.0, 5.0, 91.0, 31.5, true),
            rec(1940, 36.4, 34.0, 25.8, 3.8, 81.1, 26.9, true),
        ];
        assert_eq!(
            Dataset::new(records).unwrap_err(),
            DatasetError::OutOfOrder {
                prev: 1950,
                next: 1940
            }
        );
    }

    #[test]
    fn test_new_rejects_duplicate_years() {
        let records = vec![
            rec(1950, 30.0, 35.0, 30.0, 5.0, 91.0, 31.5, true),
            rec(1950, 30.0, 35.0, 30.0, 5.0, 91.0, 31.5, true),
        ];
        assert!(matches!(
            Dataset::new(records),
            Err(DatasetError::OutOfOrder { .. })
        ));
    }

    #[test]
    fn test_clamp_year() {
        let dataset = Dataset::builtin().unwrap();
        assert_eq!(dataset.clamp_year(1800), 1925);
        assert_eq!(dataset.clamp_year(3000), 2025);
        assert_eq!(dataset.clamp_year(1970), 1970);
    }
}
