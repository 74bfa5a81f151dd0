//! Пятизвёздочная шкала рейтинга.

pub const STAR_SLOTS: usize = 5;

pub const FULL_STAR: char = '★';
pub const HALF_STAR: char = '⯪';
pub const EMPTY_STAR: char = '☆';

/// Split of a `[0, 5]` rating into star slots; always sums to [`STAR_SLOTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: usize,
    pub half: usize,
    pub empty: usize,
}

impl StarRating {
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, 5.0) };
        let full = rating.floor() as usize;
        let half = usize::from(rating.fract() != 0.0);
        Self {
            full,
            half,
            empty: STAR_SLOTS - full - half,
        }
    }

    pub fn glyphs(&self) -> String {
        std::iter::repeat(FULL_STAR)
            .take(self.full)
            .chain(std::iter::repeat(HALF_STAR).take(self.half))
            .chain(std::iter::repeat(EMPTY_STAR).take(self.empty))
            .collect()
    }
}

/// "4.6/5", "5/5"
pub fn rating_text(rating: f64) -> String {
    format!("{}/5", rating)
}
