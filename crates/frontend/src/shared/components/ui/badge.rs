use leptos::prelude::*;

fn category_class(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "temple" => "badge--temple",
        "historical" => "badge--historical",
        "cultural" => "badge--cultural",
        _ => "badge--neutral",
    }
}

/// Category badge ("Temple", "Historical", ...)
#[component]
pub fn Badge(
    /// Raw category, selects the color variant
    #[prop(into)]
    category: String,
    /// Badge content
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!("badge attraction-category {}", category_class(&category))>
            {children()}
        </span>
    }
}
