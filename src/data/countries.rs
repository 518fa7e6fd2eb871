//! Country dataset records and the preparation pass.
//!
//! Records arrive either from the REST Countries API or from the
//! built-in table. Before display they go through a single preparation
//! pass: drop entries without a usable metric or location, sort by
//! metric descending, keep the top entries, and compute the metric
//! extremes once for the whole set.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::geo::{metric_scale, GeoPoint};

/// Number of records kept for display after sorting by metric.
pub const TOP_RECORDS: usize = 15;

/// A single dataset record: a named place, its metric, and location.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub name: String,
    /// Non-negative scalar driving marker scale (population or sales).
    pub metric: f64,
    pub location: GeoPoint,
}

impl CountryRecord {
    pub fn new(name: impl Into<String>, metric: f64, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            metric,
            location: GeoPoint::new(latitude, longitude),
        }
    }
}

/// Raw record shape returned by the REST Countries API.
///
/// `https://restcountries.com/v3.1/all?fields=name,population,latlng`
/// returns an array of these; fields can be absent for territories, so
/// everything optional defaults and gets filtered in the conversion.
#[derive(Debug, Deserialize)]
struct RestCountry {
    name: RestCountryName,
    #[serde(default)]
    population: f64,
    #[serde(default)]
    latlng: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct RestCountryName {
    common: String,
}

/// Parses a REST Countries response body into dataset records.
///
/// Entries without a positive population or a [lat, lon] pair are
/// dropped here; ordering and truncation happen in the preparation
/// pass.
pub fn parse_rest_countries(body: &str) -> Result<Vec<CountryRecord>, serde_json::Error> {
    let raw: Vec<RestCountry> = serde_json::from_str(body)?;

    Ok(raw
        .into_iter()
        .filter(|country| country.population > 0.0 && country.latlng.len() == 2)
        .map(|country| {
            CountryRecord::new(
                country.name.common,
                country.population,
                country.latlng[0],
                country.latlng[1],
            )
        })
        .collect())
}

/// A dataset after the preparation pass, ready for a rendering pass.
///
/// Immutable once built: records are sorted by metric descending and
/// the extremes are cached so per-marker scaling is a pure lookup.
#[derive(Debug, Clone, Default)]
pub struct PreparedDataset {
    pub records: Vec<CountryRecord>,
    pub min_metric: f64,
    pub max_metric: f64,
}

impl PreparedDataset {
    /// Runs the preparation pass over raw records.
    pub fn prepare(mut records: Vec<CountryRecord>) -> Self {
        records.retain(|record| record.metric > 0.0);
        records.sort_by(|a, b| {
            b.metric
                .partial_cmp(&a.metric)
                .unwrap_or(Ordering::Equal)
        });
        records.truncate(TOP_RECORDS);

        // Sorted descending, so the extremes are the ends
        let max_metric = records.first().map(|r| r.metric).unwrap_or(0.0);
        let min_metric = records.last().map(|r| r.metric).unwrap_or(0.0);

        Self {
            records,
            min_metric,
            max_metric,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Visual scale factor for one record's metric.
    ///
    /// Wraps [`metric_scale`] and handles the degenerate dataset the
    /// pure function leaves to its caller: with a single record (or
    /// equal extremes) the log interpolation is undefined and the
    /// marker gets `max_scale`.
    pub fn scale_for(&self, metric: f64, min_scale: f32, max_scale: f32) -> f32 {
        if self.min_metric <= 0.0 || self.max_metric <= self.min_metric {
            return max_scale;
        }
        metric_scale(metric, self.min_metric, self.max_metric, min_scale, max_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"[
        {"name": {"common": "India"}, "population": 1417173173, "latlng": [20.0, 77.0]},
        {"name": {"common": "Bouvet Island"}, "population": 0, "latlng": [-54.43, 3.4]},
        {"name": {"common": "Brazil"}, "population": 215313498, "latlng": [-10.0, -55.0]},
        {"name": {"common": "Nowhere"}, "population": 1000}
    ]"#;

    #[test]
    fn test_parse_rest_countries_filters_unusable_records() {
        let records = parse_rest_countries(SAMPLE_RESPONSE).unwrap();

        // Zero population and missing latlng entries are dropped
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "India");
        assert_eq!(records[1].name, "Brazil");
        assert_eq!(records[1].location, GeoPoint::new(-10.0, -55.0));
    }

    #[test]
    fn test_parse_rejects_malformed_body() {
        assert!(parse_rest_countries("{\"not\": \"an array\"}").is_err());
        assert!(parse_rest_countries("").is_err());
    }

    #[test]
    fn test_prepare_sorts_descending_and_truncates() {
        let records: Vec<CountryRecord> = (1..=20)
            .map(|i| CountryRecord::new(format!("Country {}", i), i as f64 * 100.0, 0.0, 0.0))
            .collect();

        let dataset = PreparedDataset::prepare(records);

        assert_eq!(dataset.len(), TOP_RECORDS);
        assert_eq!(dataset.records[0].metric, 2000.0);
        assert_eq!(dataset.records.last().unwrap().metric, 600.0);
        assert_eq!(dataset.max_metric, 2000.0);
        assert_eq!(dataset.min_metric, 600.0);
    }

    #[test]
    fn test_prepare_drops_non_positive_metrics() {
        let records = vec![
            CountryRecord::new("A", 10.0, 0.0, 0.0),
            CountryRecord::new("B", 0.0, 0.0, 0.0),
            CountryRecord::new("C", -5.0, 0.0, 0.0),
        ];

        let dataset = PreparedDataset::prepare(records);
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records[0].name, "A");
    }

    #[test]
    fn test_prepare_empty_dataset() {
        let dataset = PreparedDataset::prepare(Vec::new());
        assert!(dataset.is_empty());
        assert_eq!(dataset.min_metric, 0.0);
        assert_eq!(dataset.max_metric, 0.0);
    }

    #[test]
    fn test_scale_for_spans_configured_range() {
        let dataset = PreparedDataset::prepare(vec![
            CountryRecord::new("Small", 10.0, 0.0, 0.0),
            CountryRecord::new("Mid", 100.0, 0.0, 0.0),
            CountryRecord::new("Large", 1000.0, 0.0, 0.0),
        ]);

        assert!((dataset.scale_for(10.0, 0.1, 1.0) - 0.1).abs() < 1e-4);
        assert!((dataset.scale_for(100.0, 0.1, 1.0) - 0.55).abs() < 1e-4);
        assert!((dataset.scale_for(1000.0, 0.1, 1.0) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_scale_for_single_record_uses_max_scale() {
        let dataset = PreparedDataset::prepare(vec![CountryRecord::new("Only", 42.0, 0.0, 0.0)]);
        assert_eq!(dataset.scale_for(42.0, 0.1, 1.0), 1.0);
    }
}
