pub mod assets;
pub mod calculator;
pub mod ui;
