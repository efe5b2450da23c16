pub mod model;
pub mod view_model;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use thaw::*;

use self::view_model::ItemFormViewModel;
use crate::shared::messages::{IN_STOCK, LOADING};
use crate::system::auth::context::use_session;

/// `/admin/items/new`
#[component]
pub fn AdminCreateItem() -> impl IntoView {
    view! {
        <div class="page">
            <h2>"商品登録"</h2>
            <ItemFormView id=None />
        </div>
    }
}

/// `/admin/items/:id/edit`
#[component]
pub fn AdminEditItem() -> impl IntoView {
    let params = use_params_map();
    let id = params.read_untracked().get("id");

    view! {
        <div class="page">
            <h2>"商品編集"</h2>
            <ItemFormView id=id />
        </div>
    }
}

#[component]
pub fn ItemFormView(id: Option<String>) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let vm = ItemFormViewModel::new();
    let is_edit = id.is_some();

    vm.load_if_needed(session, id.clone());

    let on_saved = Callback::new({
        let navigate = navigate.clone();
        move |_: ()| navigate("/admin/items", NavigateOptions::default())
    });
    let on_cancel = move |_| navigate("/admin/items", NavigateOptions::default());
    let on_submit = move |_| vm.save_command(session, id.clone(), on_saved);

    view! {
        <Show when=move || !vm.loading.get() fallback=|| view! { <Spinner label=LOADING /> }>
            <Show when=move || vm.error.get().is_some()>
                <div class="error-message">{move || vm.error.get().unwrap_or_default()}</div>
            </Show>
            <Flex vertical=true gap=FlexGap::Medium>
                <label>"商品名"</label>
                <Input value=vm.item_name placeholder="商品名を入力してください" />
                <Checkbox checked=vm.stock label=IN_STOCK />
                <label>"商品説明"</label>
                <Textarea value=vm.description placeholder="商品の説明を入力してください" />
                <Show when=move || is_edit>
                    <label>"税抜き価格"</label>
                    <Input
                        value=vm.price_without_tax
                        input_type=InputType::Number
                        placeholder="税抜き価格を入力してください"
                    />
                    <label>"税率 (%)"</label>
                    <Input
                        value=vm.tax_rate
                        input_type=InputType::Number
                        placeholder="税率を入力してください"
                    />
                    <label>"通貨"</label>
                    <Input value=vm.currency placeholder="通貨を入力してください" />
                </Show>
            </Flex>
        </Show>
        <Space>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=on_submit
                disabled=Signal::derive(move || vm.saving.get() || vm.loading.get())
            >
                {if is_edit { "更新" } else { "登録" }}
            </Button>
            <Button appearance=ButtonAppearance::Secondary on_click=on_cancel>
                "キャンセル"
            </Button>
        </Space>
    }
}
