// Theme Gradients Services
// Business logic layer

mod gradient_updater;

pub use gradient_updater::*;
