//! Встроенный набор достопримечательностей.
//!
//! Used when `data/places.json` cannot be loaded and as the per-slug
//! fallback table of the detail page. Image paths are relative to the site root.

use super::aggregate::{Place, PlaceId};

const AYODHYA_CENTER: [f64; 2] = [26.7991, 82.2044];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The embedded catalogue, in display order.
pub fn seed_places() -> Vec<Place> {
    vec![
        Place {
            id: PlaceId(1),
            slug: "ram-janmabhoomi-temple".into(),
            name: "Ram Janmabhoomi Temple".into(),
            category: "temple".into(),
            description: "The sacred birthplace of Lord Rama, featuring magnificent architecture and spiritual significance. This temple stands as a symbol of faith and devotion for millions of Hindus worldwide.".into(),
            image: Some("images/ram-temple.jpg".into()),
            rating: 5.0,
            location: "Ram Janmabhoomi, Ayodhya, Uttar Pradesh, India".into(),
            coordinates: Some(AYODHYA_CENTER.to_vec()),
            timings: "5:00 AM - 9:00 PM (All days)".into(),
            entry_fee: "Free entry for all devotees".into(),
            best_time: "Early morning (5:00 AM - 8:00 AM) for peaceful darshan".into(),
            history: Some("The Ram Janmabhoomi Temple is built at the sacred site where Lord Rama, the seventh avatar of Lord Vishnu, was born. According to ancient texts, this site has been revered for thousands of years. The temple complex showcases the finest examples of traditional Indian architecture and serves as a center for spiritual learning and cultural preservation.".into()),
            tips: Some(strings(&[
                "Visit early morning for the best spiritual experience",
                "Dress modestly and remove footwear before entering",
                "Photography may be restricted in certain areas",
                "Participate in the evening aarti for a complete experience",
                "Plan your visit during weekdays to avoid large crowds",
            ])),
            gallery: Some(strings(&[
                "images/ram-temple-1.jpg",
                "images/ram-temple-2.jpg",
                "images/ram-temple-3.jpg",
            ])),
        },
        Place {
            id: PlaceId(2),
            slug: "hanuman-garhi".into(),
            name: "Hanuman Garhi".into(),
            category: "temple".into(),
            description: "Ancient temple dedicated to Lord Hanuman, located on a hill with panoramic views of Ayodhya. This sacred site is known for its spiritual energy and architectural beauty.".into(),
            image: Some("images/hanuman-garhi.jpg".into()),
            rating: 4.8,
            location: "Hanuman Garhi, Ayodhya, Uttar Pradesh, India".into(),
            coordinates: Some(AYODHYA_CENTER.to_vec()),
            timings: "6:00 AM - 8:00 PM (All days)".into(),
            entry_fee: "Free entry for all devotees".into(),
            best_time: "Sunrise and sunset for the best views and spiritual atmosphere".into(),
            history: Some("Hanuman Garhi is one of the most important temples in Ayodhya, dedicated to Lord Hanuman, the greatest devotee of Lord Rama. The temple is built on a hill and offers spectacular views of the entire city. According to legend, Lord Hanuman lived here to protect the city of Ayodhya.".into()),
            tips: Some(strings(&[
                "Climb the hill early morning for the best experience",
                "Don't miss the sunset view from the temple",
                "Wear comfortable shoes for the climb",
                "Visit during Hanuman Jayanti for special celebrations",
                "Take time to meditate in the peaceful surroundings",
            ])),
            gallery: Some(strings(&[
                "images/hanuman-garhi-1.jpg",
                "images/hanuman-garhi-2.jpg",
                "images/hanuman-garhi-3.jpg",
            ])),
        },
        Place {
            id: PlaceId(3),
            slug: "kanak-bhawan".into(),
            name: "Kanak Bhawan".into(),
            category: "temple".into(),
            description: "Beautiful temple known for its golden architecture and intricate carvings. This temple is dedicated to Lord Rama and Goddess Sita, showcasing the finest examples of traditional craftsmanship.".into(),
            image: Some("images/kanak-bhawan.jpg".into()),
            rating: 4.6,
            location: "Kanak Bhawan, Ayodhya, Uttar Pradesh, India".into(),
            coordinates: Some(AYODHYA_CENTER.to_vec()),
            timings: "5:00 AM - 9:00 PM (All days)".into(),
            entry_fee: "Free entry for all devotees".into(),
            best_time: "Morning hours for peaceful darshan and photography".into(),
            history: Some("Kanak Bhawan, also known as the Golden Palace, is one of the most beautiful temples in Ayodhya. According to legend, this temple was gifted to Goddess Sita by her mother. The temple's architecture reflects the rich cultural heritage of ancient India and serves as a testament to the skilled craftsmanship of the era.".into()),
            tips: Some(strings(&[
                "Visit during morning hours for the best lighting",
                "Admire the intricate carvings and architecture",
                "Participate in the morning aarti",
                "Take photographs of the beautiful facade",
                "Learn about the temple's history from local guides",
            ])),
            gallery: Some(strings(&[
                "images/kanak-bhawan-1.jpg",
                "images/kanak-bhawan-2.jpg",
                "images/kanak-bhawan-3.jpg",
            ])),
        },
    ]
}

/// Per-slug fallback lookup over the embedded catalogue.
pub fn seed_place(slug: &str) -> Option<Place> {
    seed_places().into_iter().find(|p| p.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_has_three_records() {
        assert_eq!(seed_places().len(), 3);
    }

    #[test]
    fn test_seed_slugs_unique_and_url_safe() {
        let places = seed_places();
        let slugs: HashSet<_> = places.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), places.len());
        for slug in slugs {
            assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }

    #[test]
    fn test_seed_records_are_complete() {
        for place in seed_places() {
            assert!((0.0..=5.0).contains(&place.rating));
            assert!(place.lat_lng().is_some());
            assert!(place.history.is_some());
            assert_eq!(place.tips.as_ref().map(Vec::len), Some(5));
            assert_eq!(place.gallery.as_ref().map(Vec::len), Some(3));
        }
    }

    #[test]
    fn test_seed_place_lookup() {
        let place = seed_place("hanuman-garhi").unwrap();
        assert_eq!(place.name, "Hanuman Garhi");
        assert!(seed_place("not-a-real-place").is_none());
    }
}
