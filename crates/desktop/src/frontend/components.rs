//! Collaborator components: product card and action button.

use leptos::*;

use storefront_catalog::Product;

/// Sizing hint for [`ActionButton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    /// Shrink to the label.
    #[default]
    Fit,
    /// Stretch to the container.
    Full,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Fit => "btn btn-fit",
            ButtonSize::Full => "btn btn-full",
        }
    }
}

/// Plain labeled button invoking a click callback.
#[component]
pub fn ActionButton(
    #[prop(into)] label: String,
    #[prop(optional)] size: ButtonSize,
    #[prop(into)] on_press: Callback<()>,
) -> impl IntoView {
    view! {
        <button class=size.class() on:click=move |_| on_press.call(())>
            {label}
        </button>
    }
}

/// One product rendered as a card: photo, name, category, description,
/// formatted price.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let price = product.display_price();
    let photo = product.primary_photo().map(str::to_owned);
    let alt = product.name.clone();

    view! {
        <article class="product-card">
            {photo.map(|src| view! { <img class="product-photo" src=src alt=alt/> })}
            <h3 class="product-name">{product.name}</h3>
            <span class="product-category">{product.category}</span>
            <p class="product-description">{product.description}</p>
            <span class="product-price">{price}</span>
        </article>
    }
}
