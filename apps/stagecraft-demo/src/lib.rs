//! Stagecraft demo scene
//!
//! A header, a row of tiles and a footer stacked in a column that fills the
//! stage viewport.

pub mod showcase;
