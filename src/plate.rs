use std::{fmt::Display, str::FromStr};

use crate::loader_error::LoaderError;

/// A single plate, stored as whole grams so sums stay exact.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub struct Plate {
    weight: u32,
}

impl Plate {
    /// Denominations offered by the add-plate controls, heaviest first.
    pub const STANDARD_KG: [f64; 7] = [25.0, 20.0, 15.0, 10.0, 5.0, 2.5, 1.25];

    ///
    /// # Errors
    /// If `weight` is zero grams.
    ///
    pub fn new(weight: u32) -> Result<Self, LoaderError> {
        match weight {
            0 => Err(LoaderError::InvalidWeight("0".to_string())),
            weight => Ok(Plate { weight }),
        }
    }

    #[must_use]
    pub fn standard() -> Vec<Plate> {
        Self::STANDARD_KG
            .iter()
            .filter_map(|kg| kg_to_grams(*kg))
            .filter_map(|grams| Plate::new(grams).ok())
            .collect()
    }

    /// Weight in grams.
    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Weight as shown to the user, e.g. `2.5` or `20`.
    #[must_use]
    pub fn kg_label(&self) -> String {
        format_kg(u64::from(self.weight))
    }

    #[must_use]
    pub fn image_name(&self) -> String {
        format!("Plate{}Image.png", self.kg_label())
    }

    /// Styling tag, `p-2-5` for a 2.5 kg plate.
    #[must_use]
    pub fn style_class(&self) -> String {
        format!("p-{}", self.kg_label().replacen('.', "-", 1))
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kg", self.kg_label())
    }
}

impl FromStr for Plate {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = match trimmed
            .len()
            .checked_sub(2)
            .and_then(|split| trimmed.split_at_checked(split))
        {
            Some((number, unit)) if unit.eq_ignore_ascii_case("kg") => number.trim(),
            _ => trimmed,
        };
        let kg = number
            .parse::<f64>()
            .map_err(|_| LoaderError::InvalidWeight(s.to_string()))?;
        kg_to_grams(kg)
            .and_then(|grams| Plate::new(grams).ok())
            .ok_or_else(|| LoaderError::InvalidWeight(s.to_string()))
    }
}

/// Rounds kilograms to the nearest gram, `None` unless the result is a positive `u32`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn kg_to_grams(kg: f64) -> Option<u32> {
    let grams = (kg * 1000.0).round();
    (grams.is_finite() && grams >= 1.0 && grams <= f64::from(u32::MAX)).then_some(grams as u32)
}

/// Shortest decimal rendering of a gram count in kilograms.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn format_kg(grams: u64) -> String {
    format!("{}", grams as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kilograms_into_grams() {
        assert_eq!("20".parse::<Plate>().unwrap().weight(), 20_000);
        assert_eq!("2.5".parse::<Plate>().unwrap().weight(), 2_500);
        assert_eq!(" 1.25kg ".parse::<Plate>().unwrap().weight(), 1_250);
    }

    #[test]
    fn unit_suffix_is_case_insensitive() {
        for input in ["2.5kg", "2.5KG", "2.5Kg", "2.5 kG"] {
            assert_eq!(input.parse::<Plate>().unwrap().weight(), 2_500, "{input}");
        }
        assert!("kg".parse::<Plate>().is_err());
    }

    #[test]
    fn rejects_non_positive_weights() {
        for input in ["0", "-5", "abc", "", "NaN", "inf", "0.0001"] {
            assert!(
                matches!(input.parse::<Plate>(), Err(LoaderError::InvalidWeight(_))),
                "{input} should be rejected"
            );
        }
        assert!(Plate::new(0).is_err());
    }

    #[test]
    fn accepts_unlisted_denominations() {
        let plate: Plate = "7.5".parse().unwrap();
        assert_eq!(plate.kg_label(), "7.5");
    }

    #[test]
    fn asset_naming_follows_weight() {
        let plate: Plate = "2.5".parse().unwrap();
        assert_eq!(plate.image_name(), "Plate2.5Image.png");
        assert_eq!(plate.style_class(), "p-2-5");

        let plate: Plate = "20".parse().unwrap();
        assert_eq!(plate.image_name(), "Plate20Image.png");
        assert_eq!(plate.style_class(), "p-20");

        let plate: Plate = "1.25".parse().unwrap();
        assert_eq!(plate.style_class(), "p-1-25");
    }

    #[test]
    fn standard_set_is_heaviest_first() {
        let weights = Plate::standard()
            .iter()
            .map(Plate::weight)
            .collect::<Vec<_>>();
        assert_eq!(weights, vec![25_000, 20_000, 15_000, 10_000, 5_000, 2_500, 1_250]);
    }
}
