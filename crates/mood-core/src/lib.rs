pub mod constants;
pub mod mood;
pub mod presets;
pub mod query;
pub mod quiz;
pub mod store;

pub use constants::*;
pub use mood::*;
pub use presets::*;
pub use query::*;
pub use quiz::*;
pub use store::*;
