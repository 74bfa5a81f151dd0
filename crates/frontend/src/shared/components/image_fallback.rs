use leptos::prelude::*;

/// Load state of an image with a fallback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageState {
    Primary,
    Fallback,
    Hidden,
}

impl ImageState {
    /// Transition on the `error` event: primary → fallback → hidden
    pub fn on_error(self) -> Self {
        match self {
            ImageState::Primary => ImageState::Fallback,
            ImageState::Fallback | ImageState::Hidden => ImageState::Hidden,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ImageFallback {
    /// Styled block bearing this label instead of a broken image
    Placeholder(String),
    /// Another image source
    Image(String),
}

#[component]
pub fn ImageWithFallback(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    fallback: ImageFallback,
) -> impl IntoView {
    let state = RwSignal::new(ImageState::Primary);
    let on_error = move |_| state.update(|s| *s = s.on_error());

    move || match (state.get(), fallback.clone()) {
        (ImageState::Primary, _) => view! {
            <img src=src.clone() alt=alt.clone() loading="lazy" on:error=on_error />
        }
        .into_any(),
        (ImageState::Fallback, ImageFallback::Placeholder(label)) => view! {
            <div class="image-fallback">
                <div>"🏛️"<br />{label}</div>
            </div>
        }
        .into_any(),
        (ImageState::Fallback, ImageFallback::Image(fallback_src)) => view! {
            <img src=fallback_src alt=alt.clone() on:error=on_error />
        }
        .into_any(),
        (ImageState::Hidden, _) => ().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_swaps_to_fallback_once() {
        let state = ImageState::Primary.on_error();
        assert_eq!(state, ImageState::Fallback);
        assert_eq!(state.on_error(), ImageState::Hidden);
        assert_eq!(ImageState::Hidden.on_error(), ImageState::Hidden);
    }
}
