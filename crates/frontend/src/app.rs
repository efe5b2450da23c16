use crate::layout::header::navigation::Navigation;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;
use leptos_router::components::Router;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <SessionProvider>
                <Router>
                    <Navigation />
                    <main class="app-main">
                        <AppRoutes />
                    </main>
                </Router>
            </SessionProvider>
        </ConfigProvider>
    }
}
