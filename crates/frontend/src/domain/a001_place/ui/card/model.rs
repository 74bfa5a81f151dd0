use crate::shared::api_utils::detail_href;
use crate::shared::components::image_fallback::ImageFallback;
use contracts::domain::a001_place::aggregate::Place;
use contracts::shared::rating::{rating_text, StarRating};

pub const NO_RESULTS_MESSAGE: &str = "No attractions found. Try adjusting your search or filters.";

/// Display projection of one place on the main page
#[derive(Clone, Debug, PartialEq)]
pub struct CardModel {
    pub place: Place,
    pub category_label: String,
    pub stars: StarRating,
    pub rating_text: String,
    pub detail_href: String,
    pub image_src: String,
}

impl CardModel {
    pub fn from_place(place: &Place, default_image: &str) -> Self {
        Self {
            category_label: place.category_label(),
            stars: StarRating::from_rating(place.clamped_rating()),
            rating_text: rating_text(place.rating),
            detail_href: detail_href(&place.slug),
            image_src: place
                .image
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| default_image.to_string()),
            place: place.clone(),
        }
    }

    /// A broken card image turns into a placeholder bearing the place name
    pub fn image_fallback(&self) -> ImageFallback {
        ImageFallback::Placeholder(self.place.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::image_fallback::ImageState;
    use contracts::domain::a001_place::seed::seed_place;

    #[test]
    fn test_card_projection() {
        let place = seed_place("kanak-bhawan").unwrap();
        let card = CardModel::from_place(&place, "images/default-temple.jpg");
        assert_eq!(card.category_label, "Temple");
        assert_eq!(card.stars.glyphs(), "★★★★⯪");
        assert_eq!(card.rating_text, "4.6/5");
        assert_eq!(card.detail_href, "pages/place.html?slug=kanak-bhawan");
        assert_eq!(card.image_src, "images/kanak-bhawan.jpg");
    }

    #[test]
    fn test_missing_image_uses_default() {
        let mut place = seed_place("hanuman-garhi").unwrap();
        place.image = None;
        let card = CardModel::from_place(&place, "images/default-temple.jpg");
        assert_eq!(card.image_src, "images/default-temple.jpg");

        place.image = Some(String::new());
        let card = CardModel::from_place(&place, "images/default-temple.jpg");
        assert_eq!(card.image_src, "images/default-temple.jpg");
    }

    #[test]
    fn test_broken_image_falls_back_to_named_placeholder() {
        let place = seed_place("hanuman-garhi").unwrap();
        let card = CardModel::from_place(&place, "images/default-temple.jpg");
        assert_eq!(card.image_fallback(), ImageFallback::Placeholder("Hanuman Garhi".into()));

        // one error swaps to the placeholder; it never loads another image
        assert_eq!(ImageState::Primary.on_error(), ImageState::Fallback);
        match card.image_fallback() {
            ImageFallback::Placeholder(label) => assert_eq!(label, place.name),
            ImageFallback::Image(src) => panic!("card fell back to image {}", src),
        }
    }
}
