pub mod navigator;
pub mod types;

pub use navigator::Navigator;
pub use types::*;
