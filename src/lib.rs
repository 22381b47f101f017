#![warn(clippy::pedantic)]

pub mod bar;
pub mod bar_kind;
pub mod event;
pub mod loader_error;
pub mod plate;
pub mod plate_store;
pub mod presenter;
pub mod session;
