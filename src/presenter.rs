use std::{fmt::Display, path::PathBuf};

use itertools::Itertools;
use tracing::trace;

use crate::{
    bar::Bar,
    plate::{Plate, format_kg},
    plate_store::{PlateStore, RemoveHandle},
};

/// Maps plates and bars to image paths under one asset directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assets {
    dir: PathBuf,
}

impl Assets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Assets { dir: dir.into() }
    }

    #[must_use]
    pub fn plate_image(&self, plate: &Plate) -> String {
        self.dir.join(plate.image_name()).display().to_string()
    }

    #[must_use]
    pub fn bar_image(&self, bar: &Bar) -> String {
        self.dir.join(bar.image()).display().to_string()
    }
}

impl Default for Assets {
    fn default() -> Self {
        Assets::new("assets")
    }
}

/// Bar weight plus both sleeves, in grams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Total(u64);

impl Total {
    #[must_use]
    pub fn grams(&self) -> u64 {
        self.0
    }
}

impl Display for Total {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kg", format_kg(self.0))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlateView {
    pub plate: Plate,
    pub image: String,
    pub class: String,
    pub alt: String,
    pub handle: RemoveHandle,
}

impl Display for PlateView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} ({}, {})",
            self.handle.index(),
            self.alt,
            self.class,
            self.image
        )
    }
}

/// Everything shown for one state. Rebuilt from scratch on each change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub left: Vec<PlateView>,
    pub right: Vec<PlateView>,
    pub bar: Bar,
    pub bar_image: String,
    pub total: Total,
}

impl Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Left sleeve reads outermost first so both sides mirror around the bar.
        let left = self
            .left
            .iter()
            .rev()
            .map(|view| format!("{}|", view.plate.kg_label()))
            .join("");
        let right = self
            .right
            .iter()
            .map(|view| format!("{}|", view.plate.kg_label()))
            .join("");
        write!(f, "|{left}==== {} ====|{right} = {}", self.bar, self.total)
    }
}

#[must_use]
pub fn render(store: &PlateStore, bar: &Bar, assets: &Assets) -> Frame {
    let sleeve = store
        .plates()
        .iter()
        .enumerate()
        .filter_map(|(index, plate)| {
            store.handle(index).map(|handle| PlateView {
                plate: *plate,
                image: assets.plate_image(plate),
                class: plate.style_class(),
                alt: format!("{}kg plate", plate.kg_label()),
                handle,
            })
        })
        .collect::<Vec<_>>();

    let total = compute_total(store.plates(), bar.weight());
    trace!(plates = sleeve.len(), %total, generation = store.generation(), "frame rendered");

    Frame {
        right: sleeve.clone(),
        left: sleeve,
        bar: bar.clone(),
        bar_image: assets.bar_image(bar),
        total,
    }
}

/// `bar_weight + 2 * sum(plates)`, every weight in grams.
#[must_use]
pub fn compute_total(plates: &[Plate], bar_weight: u32) -> Total {
    let sleeve: u64 = plates.iter().map(|p| u64::from(p.weight())).sum();
    Total(u64::from(bar_weight) + 2 * sleeve)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(kgs: &[&str]) -> PlateStore {
        let mut store = PlateStore::new();
        for kg in kgs {
            store.add(kg.parse().unwrap());
        }
        store
    }

    #[test]
    fn total_doubles_the_sleeve() {
        let store = store_with(&["20", "10", "20"]);
        let total = compute_total(store.plates(), 20_000);
        assert_eq!(total.grams(), 120_000);
        assert_eq!(total.to_string(), "120 kg");
    }

    #[test]
    fn total_of_empty_sleeve_is_the_bar() {
        assert_eq!(compute_total(&[], 15_000).to_string(), "15 kg");
    }

    #[test]
    fn fractional_plates_display_exactly() {
        let store = store_with(&["1.25", "2.5", "1.25"]);
        assert_eq!(compute_total(store.plates(), 20_000).to_string(), "30 kg");

        let store = store_with(&["1.25"]);
        assert_eq!(compute_total(store.plates(), 20_000).to_string(), "22.5 kg");

        let store = store_with(&["1.25", "1.25", "1.25"]);
        assert_eq!(compute_total(store.plates(), 10_000).to_string(), "17.5 kg");

        let store = store_with(&["0.1", "0.2"]);
        assert_eq!(compute_total(store.plates(), 20_000).to_string(), "20.6 kg");
    }

    #[test]
    fn sleeves_mirror_each_other() {
        let store = store_with(&["2.5", "20"]);
        let frame = render(&store, &Bar::default(), &Assets::default());
        assert_eq!(frame.left, frame.right);
        assert_eq!(frame.left.len(), 2);

        let inner = &frame.left[0];
        assert_eq!(inner.image, "assets/Plate20Image.png");
        assert_eq!(inner.class, "p-20");
        assert_eq!(inner.alt, "20kg plate");
        assert_eq!(inner.handle.index(), 0);

        let outer = &frame.left[1];
        assert_eq!(outer.image, "assets/Plate2.5Image.png");
        assert_eq!(outer.class, "p-2-5");
        assert_eq!(outer.handle.index(), 1);
    }

    #[test]
    fn handles_carry_the_store_generation() {
        let store = store_with(&["10", "5"]);
        let frame = render(&store, &Bar::default(), &Assets::default());
        assert!(
            frame
                .left
                .iter()
                .all(|view| view.handle.generation() == store.generation())
        );
    }

    #[test]
    fn rendering_is_repeatable() {
        let store = store_with(&["25", "5", "1.25"]);
        let bar = Bar::default();
        let assets = Assets::new("img");
        assert_eq!(render(&store, &bar, &assets), render(&store, &bar, &assets));
    }

    #[test]
    fn frame_draws_both_sleeves() {
        let store = store_with(&["2.5", "20"]);
        let frame = render(&store, &Bar::default(), &Assets::default());
        assert_eq!(frame.bar_image, "assets/Barbell20Image.png");
        assert_eq!(
            frame.to_string(),
            "|2.5|20|==== 20 kg bar ====|20|2.5| = 65 kg"
        );

        let empty = render(&PlateStore::new(), &Bar::default(), &Assets::default());
        assert_eq!(empty.to_string(), "|==== 20 kg bar ====| = 20 kg");
    }
}
