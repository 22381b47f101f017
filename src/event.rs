use std::{fmt::Display, str::FromStr};

use crate::{
    bar::Bar,
    loader_error::LoaderError,
    plate::{Plate, format_kg},
};

/// One user interaction with the loader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    SelectBar(Bar),
    Add(Plate),
    RemoveLast,
    RemoveAt(usize),
    Reset,
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::SelectBar(bar) => write!(f, "bar {}", format_kg(u64::from(bar.weight()))),
            Event::Add(plate) => write!(f, "add {}", plate),
            Event::RemoveLast => write!(f, "undo"),
            Event::RemoveAt(index) => write!(f, "remove {}", index),
            Event::Reset => write!(f, "reset"),
        }
    }
}

impl FromStr for Event {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if let Some(weight) = line.strip_prefix('+') {
            if weight.trim().is_empty() {
                return Err(LoaderError::InvalidCommand(s.to_string()));
            }
            return Ok(Event::Add(weight.parse()?));
        }

        let (command, argument) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(command, argument)| (command, argument.trim()));

        match (command.to_lowercase().as_str(), argument) {
            ("add", weight) if !weight.is_empty() => Ok(Event::Add(weight.parse()?)),
            ("undo" | "pop", "") => Ok(Event::RemoveLast),
            ("remove", index) if !index.is_empty() => index
                .parse()
                .map(Event::RemoveAt)
                .map_err(|_| LoaderError::InvalidCommand(s.to_string())),
            ("reset" | "clear", "") => Ok(Event::Reset),
            ("bar", bar) if !bar.is_empty() => Ok(Event::SelectBar(bar.parse()?)),
            _ => Err(LoaderError::InvalidCommand(s.to_string())),
        }
    }
}
