pub mod constants;
pub mod observation;
pub mod types;

pub use constants::*;
pub use observation::*;
pub use types::*;
