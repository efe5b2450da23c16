//! Admin sidebar. Each entry is a nested route under `/admin`.

use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    href: &'static str,
    label: &'static str,
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem { href: "/admin", label: "ダッシュボード" },
        MenuItem { href: "/admin/items", label: "商品一覧" },
        MenuItem { href: "/admin/items/new", label: "商品登録" },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav data-zone="left" class="sidebar">
            <div class="sidebar__title">"管理画面"</div>
            <ul class="sidebar__menu">
                {menu_items()
                    .into_iter()
                    .map(|item| view! {
                        <li class="sidebar__item">
                            <A href=item.href>{item.label}</A>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
