//! Three-tier confidence classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Websites needed (together with enough stores) for High confidence.
pub const HIGH_MIN_WEBSITES: usize = 3;

/// Stores needed (together with enough websites) for High confidence.
pub const HIGH_MIN_STORES: usize = 2;

/// How well a barcode resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Classifies a resolution outcome.
    ///
    /// High needs a found product with at least three websites and two stores.
    /// A found product with any website or store is Medium. Everything else is Low.
    pub fn classify(product_found: bool, websites: usize, stores: usize) -> Self {
        if !product_found {
            return Confidence::Low;
        }

        if websites >= HIGH_MIN_WEBSITES && stores >= HIGH_MIN_STORES {
            Confidence::High
        } else if websites > 0 || stores > 0 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Confidence::High),
            "medium" => Ok(Confidence::Medium),
            "low" => Ok(Confidence::Low),
            _ => Err(format!("Unknown confidence: {}. Use: high, medium, low", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_table() {
        assert_eq!(Confidence::classify(true, 3, 2), Confidence::High);
        assert_eq!(Confidence::classify(true, 10, 7), Confidence::High);
        assert_eq!(Confidence::classify(true, 3, 1), Confidence::Medium);
        assert_eq!(Confidence::classify(true, 4, 0), Confidence::Medium);
        assert_eq!(Confidence::classify(true, 2, 5), Confidence::Medium);
        assert_eq!(Confidence::classify(true, 0, 1), Confidence::Medium);
        assert_eq!(Confidence::classify(true, 1, 0), Confidence::Medium);
        assert_eq!(Confidence::classify(true, 0, 0), Confidence::Low);
    }

    #[test]
    fn test_not_found_is_always_low() {
        for websites in 0..6 {
            for stores in 0..6 {
                assert_eq!(Confidence::classify(false, websites, stores), Confidence::Low);
            }
        }
    }

    #[test]
    fn test_total_over_small_grid() {
        // Every triple gets exactly the tier implied by the thresholds
        for websites in 0..6 {
            for stores in 0..6 {
                let expected = if websites >= 3 && stores >= 2 {
                    Confidence::High
                } else if websites + stores > 0 {
                    Confidence::Medium
                } else {
                    Confidence::Low
                };
                assert_eq!(Confidence::classify(true, websites, stores), expected);
            }
        }
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Confidence::High.to_string(), "High");
        assert_eq!(Confidence::Medium.to_string(), "Medium");
        assert_eq!(Confidence::Low.to_string(), "Low");
        assert_eq!("HIGH".parse::<Confidence>().unwrap(), Confidence::High);
        assert_eq!("medium".parse::<Confidence>().unwrap(), Confidence::Medium);
        assert!("unsure".parse::<Confidence>().unwrap_err().contains("Unknown confidence"));
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&Confidence::Medium).unwrap(), "\"Medium\"");
        let parsed: Confidence = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(parsed, Confidence::Low);
    }
}
