use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

use super::logout_confirm::LogoutConfirmDialog;
use crate::system::auth::context::use_session;

pub const BRAND: &str = "みかたんにってぃんぐ";

#[component]
pub fn Navigation() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let show_logout = RwSignal::new(false);

    let on_logout = Callback::new(move |_: ()| {
        let navigate = navigate.clone();
        spawn_local(async move {
            session.logout().await;
            log::info!("logged out");
            navigate("/", NavigateOptions::default());
        });
    });

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title"><A href="/">{BRAND}</A></span>
            </div>
            <div class="header__actions">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Show when=move || session.is_admin()>
                        <A href="/admin">
                            <Button appearance=ButtonAppearance::Subtle>"管理画面"</Button>
                        </A>
                    </Show>
                    <Show
                        when=move || session.is_authenticated()
                        fallback=|| view! {
                            <A href="/login">
                                <Button appearance=ButtonAppearance::Secondary>"ログイン"</Button>
                            </A>
                            <A href="/signup">
                                <Button appearance=ButtonAppearance::Secondary>"会員登録"</Button>
                            </A>
                        }
                    >
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| show_logout.set(true)
                        >
                            "ログアウト"
                        </Button>
                    </Show>
                </Flex>
            </div>
            <LogoutConfirmDialog open=show_logout on_confirm=on_logout />
        </header>
    }
}
