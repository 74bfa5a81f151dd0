pub mod model;

use self::model::CardModel;
use crate::shared::api_utils::{absolute_detail_href, location_origin};
use crate::shared::components::image_fallback::ImageWithFallback;
use crate::shared::components::star_rating::StarRatingView;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::config::SiteConfig;
use crate::shared::share::{share, ShareRequest};
use crate::shared::toast::use_toast;
use leptos::prelude::*;

#[component]
pub fn PlaceCard(card: CardModel) -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig not found in context");
    let toast = use_toast();

    let place = card.place.clone();
    let on_share = Callback::new(move |_| {
        let url = absolute_detail_href(&location_origin(), &place.slug);
        let request = ShareRequest::for_card(&place, &config.city_name, url);
        share(request, move |message| toast.show(message));
    });

    view! {
        <div class="attraction-card">
            <div class="attraction-image">
                <ImageWithFallback
                    src=card.image_src.clone()
                    alt=card.place.name.clone()
                    fallback=card.image_fallback()
                />
            </div>
            <div class="attraction-content">
                <Badge category=card.place.category.clone()>{card.category_label.clone()}</Badge>
                <h3 class="attraction-title">{card.place.name.clone()}</h3>
                <p class="attraction-description">{card.place.description.clone()}</p>
                <StarRatingView stars=card.stars text=card.rating_text.clone() />
                <div class="attraction-actions">
                    <a href=card.detail_href.clone() class="btn btn-primary">"Learn More"</a>
                    <Button variant="secondary" on_click=on_share>"Share"</Button>
                </div>
            </div>
        </div>
    }
}
