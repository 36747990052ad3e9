//! This module contains the components of a board tile: its [`Biome`] and the
//! optional point-of-interest [`Feature`] placed on top of it.

pub mod biome;
pub mod feature;

pub use biome::{Biome, IMPASSABLE_TRAVEL_COST};
pub use feature::{Feature, FeatureQuery};
