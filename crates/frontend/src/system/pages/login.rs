use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::system::auth::validation::{validate_email, validate_password};
use crate::system::auth::{api, context::use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal(Option::<String>::None);
    let (password_error, set_password_error) = signal(Option::<String>::None);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get().trim().to_string();
        let password_val = password.get();

        set_email_error.set(validate_email(&email_val).err());
        set_password_error.set(validate_password(&password_val).err());
        if email_error.get_untracked().is_some() || password_error.get_untracked().is_some() {
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            let client = session.client();
            match api::login(&client, email_val, password_val).await {
                Ok(response) => {
                    session.login(&response.token).await;
                    log::info!("logged in");
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => set_error_message.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box login_form">
                <h2>"ログイン"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit novalidate>
                    <div class="form-group">
                        <label for="email">"メールアドレス"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="email@example.com"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        <span class="field-error">{move || email_error.get()}</span>
                    </div>

                    <div class="form-group">
                        <label for="password">"パスワード"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="パスワードを入力してください"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        <span class="field-error">{move || password_error.get()}</span>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "ログイン中..." } else { "ログイン" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
