// Theme Gradients - Library
// Batch gradient header updater for JSON theme files

pub mod models;
pub mod services;
