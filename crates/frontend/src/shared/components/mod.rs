pub mod image_fallback;
pub mod star_rating;
pub mod ui;
