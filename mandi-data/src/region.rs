use csv::ReaderBuilder;

use crate::error::{DataError, Result};

/// Embedded CSV data mapping Indian states to their major market cities.
pub static STATES_CSV: &str = include_str!("../../fixtures/states.csv");

/// Ordered mapping from state name to its list of city names.
///
/// Entries preserve CSV file order, both for states and for the cities
/// within each state, so dropdowns render in a stable order. The map is
/// built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateCityMap {
    entries: Vec<(String, Vec<String>)>,
}

impl StateCityMap {
    /// Build the map from the embedded reference CSV.
    pub fn from_embedded() -> StateCityMap {
        match StateCityMap::parse_csv(STATES_CSV) {
            Ok(map) => map,
            Err(e) => panic!("failed to parse embedded states csv: {e}"),
        }
    }

    /// Parse a `state,city` CSV string (with headers) into a StateCityMap.
    ///
    /// Consecutive rows with the same state are grouped; a state appearing
    /// again later in the file extends its existing city list.
    pub fn parse_csv(csv_object: &str) -> Result<StateCityMap> {
        let mut map = StateCityMap::default();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let state = record
                .get(0)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or(DataError::MissingField("state"))?;
            let city = record
                .get(1)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or(DataError::MissingField("city"))?;
            map.push(state, city);
        }
        Ok(map)
    }

    fn push(&mut self, state: &str, city: &str) {
        if let Some((_, cities)) = self.entries.iter_mut().find(|(s, _)| s == state) {
            cities.push(city.to_string());
        } else {
            self.entries
                .push((state.to_string(), vec![city.to_string()]));
        }
    }

    /// State names in file order.
    pub fn state_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(s, _)| s.as_str()).collect()
    }

    /// Cities for a state, in file order. None if the state is unknown.
    pub fn cities_for(&self, state: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(s, _)| s == state)
            .map(|(_, cities)| cities.as_slice())
    }

    /// Number of states in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the map holds no states.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (state, cities) pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(s, cities)| (s.as_str(), cities.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::StateCityMap;

    #[test]
    fn test_embedded_map_covers_all_states() {
        let map = StateCityMap::from_embedded();
        assert_eq!(map.len(), 28);
        // Every state maps to at least one city.
        for (state, cities) in map.iter() {
            assert!(!cities.is_empty(), "state '{}' has no cities", state);
        }
    }

    #[test]
    fn test_embedded_map_lookup() {
        let map = StateCityMap::from_embedded();
        let cities = map.cities_for("Maharashtra").unwrap();
        assert_eq!(cities, ["Mumbai", "Pune", "Nagpur"]);
        assert!(map.cities_for("Atlantis").is_none());
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let csv_data = "\
state,city
Kerala,Kochi
Goa,Panaji
Kerala,Kozhikode
";
        let map = StateCityMap::parse_csv(csv_data).unwrap();
        assert_eq!(map.state_names(), ["Kerala", "Goa"]);
        assert_eq!(map.cities_for("Kerala").unwrap(), ["Kochi", "Kozhikode"]);
    }

    #[test]
    fn test_blank_city_rejected() {
        let csv_data = "state,city\nKerala,\n";
        assert!(StateCityMap::parse_csv(csv_data).is_err());
    }
}
