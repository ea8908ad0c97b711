//! Packing list: items to bring, their packed state, sorting and progress.

pub mod item;
pub mod list;
pub mod sort;
pub mod stats;
