pub mod preprocessing;
pub mod extraction;
pub mod fill;
pub mod moments;

pub use preprocessing::*;
pub use extraction::*;
pub use fill::*;
pub use moments::*;
