//! Built-in sales dataset.
//!
//! A compiled-in dataset so the globe has something to show before the
//! first fetch resolves (and when running offline). Figures are annual
//! regional sales in USD; coordinates are each country's centroid as
//! reported by REST Countries.

use super::countries::CountryRecord;

/// (name, sales, latitude, longitude)
const BUILTIN_SALES: &[(&str, f64, f64, f64)] = &[
    ("United States", 48_200_000.0, 38.0, -97.0),
    ("China", 37_500_000.0, 35.0, 105.0),
    ("Germany", 21_400_000.0, 51.0, 9.0),
    ("Japan", 18_900_000.0, 36.0, 138.0),
    ("United Kingdom", 14_700_000.0, 54.0, -2.0),
    ("Brazil", 9_800_000.0, -10.0, -55.0),
    ("India", 8_300_000.0, 20.0, 77.0),
    ("France", 7_600_000.0, 46.0, 2.0),
    ("Australia", 5_100_000.0, -27.0, 133.0),
    ("Canada", 4_400_000.0, 60.0, -95.0),
    ("South Korea", 3_700_000.0, 37.0, 127.5),
    ("Mexico", 2_100_000.0, 23.0, -102.0),
    ("South Africa", 1_300_000.0, -29.0, 24.0),
    ("Norway", 840_000.0, 62.0, 10.0),
    ("New Zealand", 310_000.0, -41.0, 174.0),
];

/// Returns the built-in sales records.
pub fn builtin_sales_records() -> Vec<CountryRecord> {
    BUILTIN_SALES
        .iter()
        .map(|&(name, sales, lat, lon)| CountryRecord::new(name, sales, lat, lon))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::countries::{PreparedDataset, TOP_RECORDS};

    #[test]
    fn test_builtin_records_are_well_formed() {
        let records = builtin_sales_records();
        assert!(!records.is_empty());
        assert!(records.len() <= TOP_RECORDS);

        for record in &records {
            assert!(record.metric > 0.0, "{} has no sales", record.name);
            assert!((-90.0..=90.0).contains(&record.location.latitude));
            assert!((-180.0..=180.0).contains(&record.location.longitude));
        }
    }

    #[test]
    fn test_builtin_records_survive_preparation_intact() {
        let records = builtin_sales_records();
        let count = records.len();

        let dataset = PreparedDataset::prepare(records);
        assert_eq!(dataset.len(), count);
        assert!(dataset.max_metric > dataset.min_metric);
    }
}
