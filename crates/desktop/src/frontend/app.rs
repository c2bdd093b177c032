//! Leptos application: the product listing page.

use leptos::*;

use storefront_catalog::ViewPhase;
use storefront_core::FetchError;

use crate::frontend::components::{ActionButton, ButtonSize, ProductCard};
use crate::listing::ListingState;
use crate::store::StoreContext;

/// Main application component.
///
/// Uses a [`StoreContext`] provided by the embedding shell, falling back to
/// a fresh pre-fetch store when none was provided.
#[component]
pub fn App() -> impl IntoView {
    let store = use_context::<StoreContext>().unwrap_or_else(|| {
        let store = StoreContext::new();
        provide_context(store);
        store
    });

    view! {
        <ShopPage store=store/>
    }
}

/// The listing page: loading, error, or the ready grid, in that priority.
#[component]
pub fn ShopPage(store: StoreContext) -> impl IntoView {
    let listing = ListingState::new(store.products().into());

    view! {
        <div class="shop">
            {move || match store.phase() {
                ViewPhase::Loading => view! { <LoadingView/> }.into_view(),
                ViewPhase::Error(error) => view! { <ErrorView error=error/> }.into_view(),
                ViewPhase::Ready => view! { <ReadyView store=store listing=listing/> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn LoadingView() -> impl IntoView {
    view! {
        <div class="shop-loading">
            <div class="spinner" aria-label="loading"></div>
            <h2>"Loading..."</h2>
            <p>"Please wait while we fetch the products"</p>
        </div>
    }
}

/// Fetch failure view. The only remediation offered is a full page reload;
/// refetching is the shell's concern, not this view's.
#[component]
fn ErrorView(error: FetchError) -> impl IntoView {
    let reload = move |_: ()| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class="shop-error">
            <h2>"Oops! Something went wrong"</h2>
            <p>{error.message().to_owned()}</p>
            <ActionButton label="Try Again" on_press=reload/>
        </div>
    }
}

#[component]
fn ReadyView(store: StoreContext, listing: ListingState) -> impl IntoView {
    view! {
        <div class="shop-ready">
            <aside class="filter-sidebar">
                <div class="filter-header">
                    <h2>"Filters"</h2>
                    <ActionButton
                        label="Clear Filters"
                        size=ButtonSize::Fit
                        on_press=move |_: ()| listing.clear_all()
                    />
                </div>

                <div class="filter-search">
                    <h3>"Search Products"</h3>
                    <input
                        type="text"
                        placeholder="Search..."
                        prop:value=move || listing.search_query()
                        on:input=move |ev| listing.set_search_query(event_target_value(&ev))
                    />
                </div>

                <div class="filter-categories">
                    <h3>"Category"</h3>
                    {move || {
                        store
                            .categories()
                            .get()
                            .into_iter()
                            .map(|name| {
                                let checked = name.clone();
                                let toggled = name.clone();
                                view! {
                                    <label class="category-option">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || listing.is_selected(&checked)
                                            on:change=move |_| listing.toggle_category(&toggled)
                                        />
                                        <span>{name}</span>
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </aside>

            <main class="product-area">
                <h2 class="product-count">
                    "Total Products: " {move || store.products().with(Vec::len)}
                </h2>
                <div class="product-grid">
                    {move || {
                        listing
                            .filtered()
                            .get()
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product/> })
                            .collect_view()
                    }}
                </div>
            </main>
        </div>
    }
}
