//! Nearest-year resolution over the dataset.

use super::{Dataset, YearRecord};

impl Dataset {
    /// Resolve an arbitrary year to the record nearest to it.
    ///
    /// Distances are compared per record and the minimum wins; on a tie
    /// the record that appears first in the dataset wins, which for the
    /// ascending builtin table is the earlier year. Queries outside the
    /// covered span land on the endpoint records.
    pub fn nearest(&self, year: i32) -> &YearRecord {
        let mut by_distance: Vec<(usize, i64)> = self
            .records
            .iter()
            .enumerate()
            .map(|(idx, record)| (idx, (i64::from(record.year) - i64::from(year)).abs()))
            .collect();
        // Stable sort keeps dataset order among equal distances.
        by_distance.sort_by_key(|&(_, distance)| distance);
        &self.records[by_distance[0].0]
    }
}

#[cfg(test)]
mod tests {
    use super::super::{rec, Dataset};

    fn even_gap_dataset() -> Dataset {
        // 1990 and 2000 are 10 apart, so 1995 is equidistant.
        Dataset::new(vec![
            rec(1990, 33.8, 37.2, 26.0, 3.0, 28.0, 16.1, true),
            rec(2000, 36.2, 37.4, 24.0, 2.4, 39.6, 13.5, true),
        ])
        .unwrap()
    }

    #[test]
    fn test_exact_year_resolves_to_itself() {
        let dataset = Dataset::builtin().unwrap();
        for record in dataset.records() {
            assert_eq!(dataset.nearest(record.year).year, record.year);
        }
    }

    #[test]
    fn test_between_years_picks_nearer() {
        let dataset = Dataset::builtin().unwrap();
        assert_eq!(dataset.nearest(1926).year, 1925);
        assert_eq!(dataset.nearest(1929).year, 1930);
        assert_eq!(dataset.nearest(2021).year, 2020);
        assert_eq!(dataset.nearest(2022).year, 2023);
    }

    #[test]
    fn test_equidistant_resolves_to_earlier_record() {
        let dataset = even_gap_dataset();
        assert_eq!(dataset.nearest(1995).year, 1990);
    }

    #[test]
    fn test_no_record_is_nearer_than_the_resolved_one() {
        let dataset = Dataset::builtin().unwrap();
        for query in 1925..=2025 {
            let resolved = dataset.nearest(query);
            let distance = (i64::from(resolved.year) - i64::from(query)).abs();
            for record in dataset.records() {
                let other = (i64::from(record.year) - i64::from(query)).abs();
                assert!(
                    distance <= other,
                    "query {query}: {} beats resolved {}",
                    record.year,
                    resolved.year
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_resolves_to_endpoints() {
        let dataset = Dataset::builtin().unwrap();
        assert_eq!(dataset.nearest(1800).year, 1925);
        assert_eq!(dataset.nearest(3000).year, 2025);
        assert_eq!(dataset.nearest(i32::MIN).year, 1925);
        assert_eq!(dataset.nearest(i32::MAX).year, 2025);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let dataset = Dataset::builtin().unwrap();
        let first = *dataset.nearest(1987);
        let second = *dataset.nearest(1987);
        assert_eq!(first, second);
        assert_eq!(dataset.nearest(first.year).year, first.year);
    }
}
