pub mod admin;
pub mod header;
pub mod left;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::system::auth::guard::RequireAdmin;
use left::sidebar::Sidebar;

/// Admin area shell: guard, sidebar and the nested route outlet.
///
/// ```text
/// +-----------+--------------------+
/// |  Sidebar  |   Outlet (/admin/*) |
/// +-----------+--------------------+
/// ```
#[component]
pub fn AdminShell() -> impl IntoView {
    view! {
        <RequireAdmin>
            <div class="app-layout">
                <div class="app-body">
                    <Sidebar />
                    <main data-zone="center" class="app-main">
                        <Outlet />
                    </main>
                </div>
            </div>
        </RequireAdmin>
    }
}
