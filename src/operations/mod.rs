pub mod common;
pub mod distance;
pub mod find;
pub mod query;
