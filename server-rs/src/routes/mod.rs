pub mod billing;
pub mod content;
pub mod health;
