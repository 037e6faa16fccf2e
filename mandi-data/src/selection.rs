use serde::{Deserialize, Serialize};

/// The sole country currently offered by the dashboard.
pub const DEFAULT_COUNTRY: &str = "India";

/// The user's current dropdown selection.
///
/// Owned by the dashboard's app state and replaced wholesale on every
/// committed transition; the update methods consume `self` and return the
/// next value, so views always observe a consistent snapshot.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Selection {
    /// Selected country. Only one legal value in the current scope.
    pub country: String,
    /// Selected state name, or empty when none is chosen.
    pub state: String,
    /// Selected commodity name, or empty when none is chosen.
    pub commodity: String,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            country: DEFAULT_COUNTRY.to_string(),
            state: String::new(),
            commodity: String::new(),
        }
    }
}

impl Selection {
    /// Select a country. Clears the state selection, which belongs to the
    /// previous country.
    pub fn with_country(self, country: &str) -> Selection {
        Selection {
            country: country.to_string(),
            state: String::new(),
            ..self
        }
    }

    /// Select a state. The dropdown only offers known state names, so no
    /// re-validation happens here.
    pub fn with_state(self, state: &str) -> Selection {
        Selection {
            state: state.to_string(),
            ..self
        }
    }

    /// Select a commodity.
    pub fn with_commodity(self, commodity: &str) -> Selection {
        Selection {
            commodity: commodity.to_string(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Selection, DEFAULT_COUNTRY};

    #[test]
    fn test_initial_selection() {
        let selection = Selection::default();
        assert_eq!(selection.country, DEFAULT_COUNTRY);
        assert!(selection.state.is_empty());
        assert!(selection.commodity.is_empty());
    }

    #[test]
    fn test_select_state_leaves_commodity_unchanged() {
        let selection = Selection::default()
            .with_commodity("Tomato")
            .with_state("Maharashtra");
        assert_eq!(selection.state, "Maharashtra");
        assert_eq!(selection.commodity, "Tomato");
    }

    #[test]
    fn test_select_country_clears_state() {
        let selection = Selection::default()
            .with_state("Kerala")
            .with_country(DEFAULT_COUNTRY);
        assert_eq!(selection.country, DEFAULT_COUNTRY);
        assert!(selection.state.is_empty(), "country change must clear state");
    }

    #[test]
    fn test_reselecting_state_replaces_previous() {
        let selection = Selection::default()
            .with_state("Kerala")
            .with_state("Punjab");
        assert_eq!(selection.state, "Punjab");
    }
}
