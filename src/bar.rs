use std::{fmt::Display, str::FromStr};

use crate::{
    bar_kind::BarKind,
    loader_error::LoaderError,
    plate::{format_kg, kg_to_grams},
};

/// The active bar: its weight in grams and the image that depicts it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bar {
    pub weight: u32,
    pub image: String,
}

impl Bar {
    pub fn new(weight: u32, image: impl Into<String>) -> Self {
        Bar {
            weight,
            image: image.into(),
        }
    }

    /// A bar outside the built-in set, named `Barbell<kg>Image.png`.
    #[must_use]
    pub fn custom(weight: u32) -> Self {
        Bar::new(
            weight,
            format!("Barbell{}Image.png", format_kg(u64::from(weight))),
        )
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }
}

impl Default for Bar {
    fn default() -> Self {
        BarKind::Olympic.into()
    }
}

impl From<BarKind> for Bar {
    fn from(kind: BarKind) -> Self {
        Bar::custom(kind.weight())
    }
}

impl Display for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kg bar", format_kg(u64::from(self.weight)))
    }
}

impl FromStr for Bar {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(kind) = s.parse::<BarKind>() {
            return Ok(kind.into());
        }
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(kg_to_grams)
            .map(Bar::custom)
            .ok_or_else(|| LoaderError::UnknownBar(s.to_string()))
    }
}
