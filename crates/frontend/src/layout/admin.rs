use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn AdminHome() -> impl IntoView {
    view! {
        <div class="page">
            <h2>"管理画面ホーム"</h2>
            <Space>
                <Card>
                    <h3>"商品管理"</h3>
                    <A href="/admin/items">"商品一覧"</A>
                </Card>
                <Card>
                    <h3>"新規商品登録"</h3>
                    <A href="/admin/items/new">"商品登録"</A>
                </Card>
            </Space>
        </div>
    }
}
