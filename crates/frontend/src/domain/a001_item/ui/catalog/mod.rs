pub mod card;

use leptos::prelude::*;
use thaw::*;

use self::card::ItemCard;
use crate::domain::a001_item::api;
use crate::shared::messages::LOADING;
use crate::system::auth::context::use_session;
use contracts::domain::a001_item::aggregate::Item;

/// Storefront landing page: every catalog item as a card.
#[component]
pub fn TopPage() -> impl IntoView {
    let session = use_session();
    let (items, set_items) = signal::<Vec<Item>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_items(&session.client()).await {
            Ok(v) => set_items.set(v),
            Err(e) => set_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    view! {
        <div class="page">
            <Show when=move || !loading.get() fallback=|| view! { <Spinner label=LOADING /> }>
                {move || match error.get() {
                    Some(e) => view! { <div class="error-message">{e}</div> }.into_any(),
                    None => view! {
                        <Flex gap=FlexGap::Large justify=FlexJustify::SpaceAround attr:style="flex-wrap: wrap;">
                            <For
                                each=move || items.get()
                                key=|item| item.item_id.clone()
                                children=|item| view! { <ItemCard item=item /> }
                            />
                        </Flex>
                    }
                    .into_any(),
                }}
            </Show>
        </div>
    }
}
