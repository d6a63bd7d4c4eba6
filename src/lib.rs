pub mod app;
pub mod charts;
pub mod color;
pub mod data;
pub mod report;
pub mod state;
pub mod stats;
pub mod ui;
