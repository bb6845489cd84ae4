pub mod food;
pub mod meal;

pub use food::*;
pub use meal::*;
