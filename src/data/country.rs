use serde::{Deserialize, Serialize};

/// A country as published by the restcountries v2 API.
///
/// Only the fields the viewer needs are kept; everything else in the payload
/// is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,

    #[serde(default)]
    pub population: u64,

    /// Continent name; empty for territories without one
    #[serde(default)]
    pub region: String,
}

impl Country {
    pub fn new(name: impl Into<String>, population: u64, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            population,
            region: region.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_ignored_and_missing_defaulted() {
        let json = r#"[
            {"name": "Chile", "population": 19116209, "region": "Americas", "capital": "Santiago"},
            {"name": "Bouvet Island", "region": "Antarctic Ocean"},
            {"name": "Nowhere", "population": 3}
        ]"#;
        let countries: Vec<Country> = serde_json::from_str(json).unwrap();

        assert_eq!(countries[0], Country::new("Chile", 19_116_209, "Americas"));
        assert_eq!(countries[1].population, 0);
        assert_eq!(countries[2].region, "");
    }
}
