//! Population totals per region and chart-ready series.

use std::collections::HashMap;

use popviz_ui::Unit;

use super::Country;

/// Summed population of one region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTotal {
    pub region: String,
    pub population: u64,
}

/// Sum population per region, in order of first appearance.
///
/// Countries without a region are skipped.
pub fn population_by_region(countries: &[Country]) -> Vec<RegionTotal> {
    let mut totals: Vec<RegionTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for country in countries.iter().filter(|c| !c.region.is_empty()) {
        match index.get(country.region.as_str()) {
            Some(&i) => totals[i].population += country.population,
            None => {
                index.insert(&country.region, totals.len());
                totals.push(RegionTotal {
                    region: country.region.clone(),
                    population: country.population,
                });
            }
        }
    }
    totals
}

/// Countries of `region`, in dataset order
pub fn countries_in_region<'a>(countries: &'a [Country], region: &str) -> Vec<&'a Country> {
    countries.iter().filter(|c| c.region == region).collect()
}

/// A labeled list of values shown by one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub unit: Unit,
    pub points: Vec<(String, f64)>,
}

impl Series {
    /// Population per continent, in billions
    pub fn continents(countries: &[Country]) -> Self {
        let points = population_by_region(countries)
            .into_iter()
            .map(|total| (total.region, total.population as f64 / 1e9))
            .collect();
        Self {
            label: "Population by Continent".to_string(),
            unit: Unit::Billions,
            points,
        }
    }

    /// Population per country of one continent, in millions
    pub fn countries(countries: &[Country], region: &str) -> Self {
        let points = countries_in_region(countries, region)
            .into_iter()
            .map(|c| (c.name.clone(), c.population as f64 / 1e6))
            .collect();
        Self {
            label: format!("Population by Country in {}", region),
            unit: Unit::Millions,
            points,
        }
    }

    /// Points whose value lies in `[min, max]`
    pub fn filtered(&self, min: f64, max: f64) -> Series {
        Series {
            label: self.label.clone(),
            unit: self.unit,
            points: self
                .points
                .iter()
                .filter(|(_, v)| *v >= min && *v <= max)
                .cloned()
                .collect(),
        }
    }

    /// `(0, largest value)`, or `(0, 1)` when there is nothing positive
    pub fn value_bounds(&self) -> (f64, f64) {
        let max = self
            .points
            .iter()
            .map(|(_, v)| *v)
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max);
        if max > 0.0 { (0.0, max) } else { (0.0, 1.0) }
    }

    pub fn axis_title(&self) -> &'static str {
        match self.unit {
            Unit::Billions => "Population (billions)",
            Unit::Millions => "Population (millions)",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
