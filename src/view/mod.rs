//! Pure shaping of resolved records into render-ready view models.
//!
//! Everything here is recomputed from the dataset or the resolved
//! record on demand; nothing caches.

use crate::data::{Dataset, YearRecord};

/// Fixed y-axis bounds for the charts. The union ceiling is a deliberate
/// constant, not derived from the data.
pub const WEALTH_AXIS_MAX: f64 = 100.0;
pub const TAX_AXIS_MAX: f64 = 100.0;
pub const UNION_AXIS_MAX: f64 = 40.0;

/// Visual scale for the union indicator bar (union rates top out near a
/// third of the tax-rate range).
pub const UNION_BAR_SCALE: f64 = 3.0;

/// One wedge of the wealth-distribution pie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub name: &'static str,
    pub value: f64,
}

/// The four population groups in presentation order.
pub fn pie_slices(record: &YearRecord) -> [PieSlice; 4] {
    [
        PieSlice {
            name: "Top 1%",
            value: record.top1,
        },
        PieSlice {
            name: "Next 9%",
            value: record.next9,
        },
        PieSlice {
            name: "Next 40%",
            value: record.next40,
        },
        PieSlice {
            name: "Bottom 50%",
            value: record.bottom50,
        },
    ]
}

/// X-axis labels: every third record's year, starting from the first.
pub fn tick_years(dataset: &Dataset) -> Vec<i32> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(idx, _)| idx % 3 == 0)
        .map(|(_, record)| record.year)
        .collect()
}

/// One decimal place plus a percent sign, the format used everywhere a
/// value is shown next to a label.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Chart points for a single metric across the full dataset.
pub fn series(dataset: &Dataset, value: impl Fn(&YearRecord) -> f64) -> Vec<(f64, f64)> {
    dataset
        .records()
        .iter()
        .map(|record| (f64::from(record.year), value(record)))
        .collect()
}

/// Cumulative bands for the stacked wealth chart, in group order: the
/// first band is the top-1% share alone, the last is the total (~100).
pub fn stacked_wealth_series(dataset: &Dataset) -> [Vec<(f64, f64)>; 4] {
    [
        series(dataset, |r| r.top1),
        series(dataset, |r| r.top1 + r.next9),
        series(dataset, |r| r.top1 + r.next9 + r.next40),
        series(dataset, |r| r.top1 + r.next9 + r.next40 + r.bottom50),
    ]
}

/// Fill ratio for the tax-rate indicator bar, capped at a full bar.
pub fn tax_gauge_ratio(record: &YearRecord) -> f64 {
    (record.top_tax_rate.min(100.0) / 100.0).clamp(0.0, 1.0)
}

/// Fill ratio for the union indicator bar. The rate is tripled so the
/// bar uses its width, then clamped to a full bar (1945's 33.4% would
/// otherwise overflow).
pub fn union_gauge_ratio(record: &YearRecord) -> f64 {
    (record.union_rate * UNION_BAR_SCALE / 100.0).clamp(0.0, 1.0)
}

/// Status text for the wealth-tax line and whether it is the
/// in-effect (green) case.
pub fn wealth_tax_status(record: &YearRecord) -> (&'static str, bool) {
    if record.has_wealth_tax {
        ("Estate/Inheritance taxes in effect", true)
    } else {
        ("No wealth taxes", false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;

    #[test]
    fn test_pie_slices_order_and_sum() {
        let dataset = Dataset::builtin().unwrap();
        let record = dataset.nearest(2020);
        let slices = pie_slices(record);
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].name, "Top 1%");
        assert_eq!(slices[1].name, "Next 9%");
        assert_eq!(slices[2].name, "Next 40%");
        assert_eq!(slices[3].name, "Bottom 50%");
        let total: f64 = slices.iter().map(|s| s.value).sum();
        assert!((total - 100.0).abs() < 0.5);
    }

    #[test]
    fn test_tick_years_every_third_record() {
        let dataset = Dataset::builtin().unwrap();
        let ticks = tick_years(&dataset);
        assert_eq!(ticks.len(), 8);
        assert_eq!(ticks, vec![1925, 1940, 1955, 1970, 1985, 2000, 2015, 2024]);
    }

    #[test]
    fn test_format_percent_one_decimal() {
        assert_eq!(format_percent(38.2), "38.2%");
        assert_eq!(format_percent(37.0), "37.0%");
        assert_eq!(format_percent(81.14), "81.1%");
        assert_eq!(format_percent(81.15), "81.2%");
    }

    #[test]
    fn test_series_covers_full_range() {
        let dataset = Dataset::builtin().unwrap();
        let points = series(&dataset, |r| r.top_tax_rate);
        assert_eq!(points.len(), 23);
        assert_eq!(points[0], (1925.0, 25.0));
        assert_eq!(points[22], (2025.0, 37.0));
    }

    #[test]
    fn test_stacked_bands_are_cumulative() {
        let dataset = Dataset::builtin().unwrap();
        let bands = stacked_wealth_series(&dataset);
        for idx in 0..dataset.records().len() {
            let mut previous = 0.0;
            for band in &bands {
                assert!(band[idx].1 >= previous);
                previous = band[idx].1;
            }
            assert!((bands[3][idx].1 - 100.0).abs() < 0.5);
        }
    }

    #[test]
    fn test_gauge_ratios_stay_in_bounds() {
        let dataset = Dataset::builtin().unwrap();
        for record in dataset.records() {
            let tax = tax_gauge_ratio(record);
            let union = union_gauge_ratio(record);
            assert!((0.0..=1.0).contains(&tax), "year {}", record.year);
            assert!((0.0..=1.0).contains(&union), "year {}", record.year);
        }
        // 1945 is the overflow case: 33.4 * 3 > 100.
        let wartime = dataset.nearest(1945);
        assert_eq!(union_gauge_ratio(wartime), 1.0);
    }

    #[test]
    fn test_wealth_tax_status_text() {
        let dataset = Dataset::builtin().unwrap();
        assert_eq!(
            wealth_tax_status(dataset.nearest(1925)),
            ("No wealth taxes", false)
        );
        assert_eq!(
            wealth_tax_status(dataset.nearest(2020)),
            ("Estate/Inheritance taxes in effect", true)
        );
    }
}
