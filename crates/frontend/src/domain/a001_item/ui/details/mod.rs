use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use thaw::*;

use super::catalog::card::PLACEHOLDER_IMAGE;
use crate::domain::a001_item::api;
use crate::shared::date_utils::format_timestamp;
use crate::shared::messages::{IN_STOCK, LOADING, NO_DESCRIPTION, OUT_OF_STOCK};
use crate::system::auth::context::use_session;
use contracts::domain::a001_item::aggregate::Item;

#[component]
pub fn AdminItemDetail() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let navigate = use_navigate();

    let item_id = move || params.read().get("id").unwrap_or_default();
    let (item, set_item) = signal::<Option<Item>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    Effect::new(move || {
        let id = item_id();
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_admin_item(&session.client(), &id).await {
                Ok(v) => {
                    set_item.set(Some(v));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let go_back = {
        let navigate = navigate.clone();
        move |_| navigate("/admin/items", NavigateOptions::default())
    };
    let go_edit = move |_| {
        navigate(
            &format!("/admin/items/{}/edit", item_id()),
            NavigateOptions::default(),
        )
    };

    view! {
        <div class="page">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Flex gap=FlexGap::Medium align=FlexAlign::Center>
                    <Button appearance=ButtonAppearance::Subtle on_click=go_back>"← 戻る"</Button>
                    <h2>"商品詳細"</h2>
                </Flex>
                <Button appearance=ButtonAppearance::Primary on_click=go_edit>"編集"</Button>
            </Flex>

            <Show when=move || !loading.get() fallback=|| view! { <Spinner label=LOADING /> }>
                {move || match (error.get(), item.get()) {
                    (Some(e), _) => view! { <div class="error-message">{e}</div> }.into_any(),
                    (None, None) => view! { <div class="error-message">"商品が見つかりません"</div> }.into_any(),
                    (None, Some(item)) => view! { <ItemDetailCard item=item /> }.into_any(),
                }}
            </Show>
        </div>
    }
}

#[component]
fn ItemDetailCard(item: Item) -> impl IntoView {
    let image = item
        .image_url
        .clone()
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let description = if item.description.trim().is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        item.description.clone()
    };

    view! {
        <Card>
            <Flex gap=FlexGap::Medium align=FlexAlign::Center>
                <img src=image alt=item.item_name.clone() width="100" height="100" style="object-fit: cover;" />
                <Flex vertical=true gap=FlexGap::Small>
                    <h3>{item.item_name.clone()}</h3>
                    {if item.stock {
                        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>{IN_STOCK}</Badge> }.into_any()
                    } else {
                        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>{OUT_OF_STOCK}</Badge> }.into_any()
                    }}
                </Flex>
            </Flex>
            <div>
                <strong>"商品説明"</strong>
                <p style="white-space: pre-wrap;">{description}</p>
            </div>
            <Flex gap=FlexGap::Large>
                <div>
                    <strong>"作成日"</strong>
                    <p>{format_timestamp(item.created_at)}</p>
                </div>
                <div>
                    <strong>"更新日"</strong>
                    <p>{format_timestamp(item.updated_at)}</p>
                </div>
            </Flex>
        </Card>
    }
}
