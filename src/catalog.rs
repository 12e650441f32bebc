//! The fixed catalog of selectable cities.
//!
//! The catalog is supplied once at startup and never changes afterwards;
//! the display name doubles as the weather-service lookup key.

/// European capitals, in display order.
pub const EUROPEAN_CAPITALS: [&str; 32] = [
    "Amsterdam", "Athens", "Berlin", "Bern", "Brussels", "Budapest",
    "Copenhagen", "Dublin", "Helsinki", "Kyiv", "Lisbon", "Ljubljana",
    "London", "Madrid", "Minsk", "Monaco", "Moscow", "Nicosia", "Oslo",
    "Paris", "Prague", "Reykjavik", "Riga", "Rome", "Sofia", "Stockholm",
    "Tallinn", "Tirana", "Vienna", "Vilnius", "Warsaw", "Zagreb",
];

/// The city preselected when the widget starts.
pub const DEFAULT_CITY: &str = "London";

/// An ordered, immutable list of selectable city names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityCatalog {
    names: Vec<String>,
}

impl CityCatalog {
    /// The standard catalog of 32 European capitals.
    pub fn european_capitals() -> Self {
        Self {
            names: EUROPEAN_CAPITALS.iter().map(|name| (*name).to_owned()).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Look up a city by name, ignoring ASCII case.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n.eq_ignore_ascii_case(name))
    }

    /// Index of [`DEFAULT_CITY`], if present in this catalog.
    pub fn default_index(&self) -> Option<usize> {
        self.index_of(DEFAULT_CITY)
    }
}

impl Default for CityCatalog {
    fn default() -> Self {
        Self::european_capitals()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_32_capitals() {
        let catalog = CityCatalog::european_capitals();
        assert_eq!(catalog.len(), 32);
    }

    #[test]
    fn default_selection_is_london() {
        let catalog = CityCatalog::european_capitals();
        let index = catalog.default_index().unwrap();
        assert_eq!(catalog.get(index), Some("London"));
    }

    #[test]
    fn lookup_ignores_case() {
        let catalog = CityCatalog::european_capitals();
        assert_eq!(catalog.index_of("london"), catalog.index_of("London"));
        assert_eq!(catalog.index_of("Atlantis"), None);
    }

    #[test]
    fn order_is_stable() {
        let catalog = CityCatalog::european_capitals();
        assert_eq!(catalog.get(0), Some("Amsterdam"));
        assert_eq!(catalog.get(31), Some("Zagreb"));
    }
}
