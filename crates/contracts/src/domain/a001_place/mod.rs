pub mod aggregate;
pub mod catalogue;
pub mod seed;
