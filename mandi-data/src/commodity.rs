use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DataError;

/// One of the fixed set of agricultural goods selectable for price lookup.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Commodity {
    Tomato,
    Potato,
    Onion,
    Pulses,
}

impl Commodity {
    /// All commodities in dropdown order.
    pub const ALL: [Commodity; 4] = [
        Commodity::Tomato,
        Commodity::Potato,
        Commodity::Onion,
        Commodity::Pulses,
    ];

    /// Display name used for dropdown options and log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Commodity::Tomato => "Tomato",
            Commodity::Potato => "Potato",
            Commodity::Onion => "Onion",
            Commodity::Pulses => "Pulses",
        }
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Commodity {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Tomato" => Ok(Commodity::Tomato),
            "Potato" => Ok(Commodity::Potato),
            "Onion" => Ok(Commodity::Onion),
            "Pulses" => Ok(Commodity::Pulses),
            other => Err(DataError::UnknownCommodity(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Commodity;

    #[test]
    fn test_all_commodities_round_trip() {
        for commodity in Commodity::ALL {
            let parsed: Commodity = commodity.as_str().parse().unwrap();
            assert_eq!(parsed, commodity);
        }
    }

    #[test]
    fn test_unknown_commodity_rejected() {
        assert!("Wheat".parse::<Commodity>().is_err());
        assert!("".parse::<Commodity>().is_err());
    }

    #[test]
    fn test_dropdown_order() {
        let names: Vec<&str> = Commodity::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, ["Tomato", "Potato", "Onion", "Pulses"]);
    }
}
