//! Configuration module for expense-desk

pub mod settings;

pub use settings::Settings;
