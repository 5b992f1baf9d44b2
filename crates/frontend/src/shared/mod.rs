pub mod charts;
pub mod config;
pub mod data;
pub mod dom;
pub mod icons;
pub mod markup;
pub mod state;
pub mod tasks;
pub mod theme;

#[cfg(test)]
pub mod testing;
