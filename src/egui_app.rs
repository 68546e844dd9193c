//! egui front end: interactive state, pure panel builders and the painter.

pub mod state;
pub mod ui;
pub mod view_model;
