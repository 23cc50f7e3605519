pub mod catalogue;
pub mod guidance;
pub mod score;
pub mod types;

pub use catalogue::*;
pub use guidance::*;
pub use score::*;
pub use types::*;
