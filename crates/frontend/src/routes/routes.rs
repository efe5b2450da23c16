use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes};
use leptos_router::path;

use crate::domain::a001_item::ui::catalog::TopPage;
use crate::domain::a001_item::ui::details::AdminItemDetail;
use crate::domain::a001_item::ui::form::{AdminCreateItem, AdminEditItem};
use crate::domain::a001_item::ui::list::AdminItemList;
use crate::domain::a002_book::ui::table::BookTable;
use crate::layout::admin::AdminHome;
use crate::layout::AdminShell;
use crate::system::pages::login::LoginPage;
use crate::system::pages::signup::SignupPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <div class="page">"ページが見つかりません"</div> }>
            <Route path=path!("/") view=TopPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/signup") view=SignupPage />
            <Route path=path!("/books") view=BookTable />
            <ParentRoute path=path!("/admin") view=AdminShell>
                <Route path=path!("") view=AdminHome />
                <Route path=path!("items") view=AdminItemList />
                <Route path=path!("items/new") view=AdminCreateItem />
                <Route path=path!("items/:id") view=AdminItemDetail />
                <Route path=path!("items/:id/edit") view=AdminEditItem />
            </ParentRoute>
        </Routes>
    }
}
