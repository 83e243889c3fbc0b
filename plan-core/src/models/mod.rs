pub mod plan;
pub mod user;

pub use plan::*;
pub use user::*;
