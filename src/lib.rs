//! HR Datagen - synthetic month-by-month employee datasets

pub mod catalog;
pub mod core;
pub mod names;
pub mod workforce;
