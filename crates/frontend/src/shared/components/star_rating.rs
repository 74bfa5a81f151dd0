use contracts::shared::rating::StarRating;
use leptos::prelude::*;

/// "★★★★⯪ 4.6/5"
#[component]
pub fn StarRatingView(stars: StarRating, #[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="attraction-rating">
            <span class="stars" aria-hidden="true">{stars.glyphs()}</span>
            <span class="rating-text">{text}</span>
        </div>
    }
}
