// Theme Gradients Models
// Data structures for theme files

mod theme;

pub use theme::*;
