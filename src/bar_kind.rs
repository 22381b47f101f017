use std::{fmt::Display, str::FromStr};

use crate::loader_error::LoaderError;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub enum BarKind {
    Olympic,
    Womens,
    Technique,
}

impl BarKind {
    pub const ALL: [BarKind; 3] = [BarKind::Olympic, BarKind::Womens, BarKind::Technique];

    /// Bar weight in grams.
    #[must_use]
    pub fn weight(&self) -> u32 {
        match self {
            BarKind::Olympic => 20_000,
            BarKind::Womens => 15_000,
            BarKind::Technique => 10_000,
        }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BarKind::Olympic => "o",
            BarKind::Womens => "w",
            BarKind::Technique => "t",
        }
    }
}

impl Display for BarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BarKind::Olympic => write!(f, "Olympic"),
            BarKind::Womens => write!(f, "Women's"),
            BarKind::Technique => write!(f, "Technique"),
        }
    }
}

impl FromStr for BarKind {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "o" | "olympic" => Ok(BarKind::Olympic),
            "w" | "womens" | "women's" => Ok(BarKind::Womens),
            "t" | "technique" => Ok(BarKind::Technique),
            _ => Err(LoaderError::UnknownBar(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for kind in BarKind::ALL {
            assert_eq!(kind.code().parse::<BarKind>().unwrap(), kind);
        }
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!("Olympic".parse::<BarKind>().unwrap(), BarKind::Olympic);
        assert_eq!("W".parse::<BarKind>().unwrap(), BarKind::Womens);
        assert!("x".parse::<BarKind>().is_err());
    }
}
