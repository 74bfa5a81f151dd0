pub mod geo;
pub mod rating;
