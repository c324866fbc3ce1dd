//! Order entity and the pure computations derived from it.

pub mod display;
pub mod ingredient;
pub mod nutrition;
pub mod smoothie;

pub use display::*;
pub use ingredient::*;
pub use nutrition::NutritionalInfo;
pub use smoothie::*;
