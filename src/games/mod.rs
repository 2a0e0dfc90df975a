//! Game implementations.

pub mod kalah;
