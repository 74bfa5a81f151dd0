use super::model::{coordinates_text, slug_from_search, DetailState, PlaceHeading};
use super::view_model::PlaceDetailsViewModel;
use crate::routes::routes::PageKind;
use crate::shared::api_utils::{location_search, page_relative, HOME_FROM_DETAIL};
use crate::shared::components::image_fallback::{ImageFallback, ImageWithFallback};
use crate::shared::components::ui::{Badge, Button};
use crate::shared::config::SiteConfig;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a001_place::aggregate::Place;
use leptos::prelude::*;

#[component]
pub fn PlaceDetails() -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig not found in context");
    let vm = PlaceDetailsViewModel::new();
    vm.load(slug_from_search(&location_search()), &config);

    view! {
        <div class="main-content">
            {move || match vm.state.get() {
                DetailState::Loading => view! {
                    <div class="container"><p class="loading">"Loading..."</p></div>
                }
                .into_any(),
                DetailState::Ready(place) => view! { <PlaceDetailsBody place=place vm=vm /> }.into_any(),
                error => view! {
                    <ErrorMessage message=error.error_message().unwrap_or("Place not found") />
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn ErrorMessage(message: &'static str) -> impl IntoView {
    view! {
        <div class="container">
            <div class="error-message">
                <h2>"Error"</h2>
                <p>{message}</p>
                <a href=HOME_FROM_DETAIL class="btn btn-primary">"Return to Home"</a>
            </div>
        </div>
    }
}

#[component]
fn PlaceDetailsBody(place: Place, vm: PlaceDetailsViewModel) -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig not found in context");
    let toast = use_toast();
    let placeholder = page_relative(PageKind::Detail, &config.placeholder_image);
    let image = page_relative(
        PageKind::Detail,
        place.image.as_deref().unwrap_or(&config.default_image),
    );

    let history = place.history.clone().map(|h| {
        view! {
            <section class="place-section">
                <h2>"History"</h2>
                <p id="placeHistory">{h}</p>
            </section>
        }
    });

    let tips = place.tips.clone().map(|tips| {
        view! {
            <section class="place-section">
                <h2>"Visitor Tips"</h2>
                <ul id="placeTips">
                    {tips.into_iter().map(|tip| view! { <li>{tip}</li> }).collect_view()}
                </ul>
            </section>
        }
    });

    let gallery = place.gallery.clone().map(|images| {
        let name = place.name.clone();
        let placeholder = placeholder.clone();
        view! {
            <section class="place-section">
                <h2>"Gallery"</h2>
                <div class="place-gallery" id="placeGallery">
                    {images
                        .into_iter()
                        .map(|src| {
                            view! {
                                <div class="gallery-item">
                                    <ImageWithFallback
                                        src=page_relative(PageKind::Detail, &src)
                                        alt=name.clone()
                                        fallback=ImageFallback::Image(placeholder.clone())
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        }
    });

    let location_panel = place.lat_lng().map(|position| {
        view! {
            <div class="place-map-panel" id="placeMap">
                <h4>"Location"</h4>
                <p>{place.location.clone()}</p>
                <p>{coordinates_text(position)}</p>
            </div>
        }
    });

    let heading = PlaceHeading::from_place(&place);
    let on_show_map = Callback::new(move |_| vm.show_on_map());
    let on_share = Callback::new(move |_| vm.share(toast));

    view! {
        <div class="container place-page">
            <div class="place-hero">
                <ImageWithFallback
                    src=image
                    alt=place.name.clone()
                    fallback=ImageFallback::Image(placeholder.clone())
                />
            </div>

            <header class="place-header">
                <h1 id="placeTitle">{heading.title}</h1>
                <Badge category=heading.category>{heading.category_label}</Badge>
                <span class="place-rating" id="placeRating">{heading.rating}</span>
            </header>

            <p class="place-description" id="placeDescription">{place.description.clone()}</p>

            <div class="place-info">
                <div class="info-item">
                    {icon("map-pin")}
                    <strong>"Location: "</strong>
                    <span id="placeLocation">{place.location.clone()}</span>
                </div>
                <div class="info-item">
                    {icon("clock")}
                    <strong>"Timings: "</strong>
                    <span id="placeTimings">{place.timings.clone()}</span>
                </div>
                <div class="info-item">
                    <strong>"Entry Fee: "</strong>
                    <span id="placeEntryFee">{place.entry_fee.clone()}</span>
                </div>
                <div class="info-item">
                    <strong>"Best Time to Visit: "</strong>
                    <span id="placeBestTime">{place.best_time.clone()}</span>
                </div>
            </div>

            {history}
            {tips}
            {gallery}
            {location_panel}

            <div class="place-actions">
                <Button on_click=on_show_map>{icon("map-pin")}"Show on Map"</Button>
                <Button variant="secondary" on_click=on_share>{icon("share")}"Share"</Button>
                <a href=HOME_FROM_DETAIL class="btn btn-secondary">"Back to all places"</a>
            </div>
        </div>
    }
}
