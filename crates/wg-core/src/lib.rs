pub mod id;
pub mod model;

pub use id::TagId;
pub use model::*;
