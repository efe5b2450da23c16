use contracts::system::auth::SignupRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::system::auth::validation::{validate_email, validate_name, validate_password};
use crate::system::auth::{api, context::use_session};

const SIGNUP_DONE: &str = "会員登録が完了しました。自動的にログインしています。";
const AUTO_LOGIN_FAILED: &str =
    "会員登録は完了しましたが、ログインに失敗しました。手動でログインしてください。";

fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (name_error, set_name_error) = signal(Option::<String>::None);
    let (email_error, set_email_error) = signal(Option::<String>::None);
    let (password_error, set_password_error) = signal(Option::<String>::None);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = SignupRequest {
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            password: password.get(),
        };

        set_name_error.set(validate_name(&request.name).err());
        set_email_error.set(validate_email(&request.email).err());
        set_password_error.set(validate_password(&request.password).err());
        if name_error.get_untracked().is_some()
            || email_error.get_untracked().is_some()
            || password_error.get_untracked().is_some()
        {
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            let client = session.client();
            if let Err(e) = api::signup(&client, &request).await {
                set_error_message.set(Some(e));
                set_is_loading.set(false);
                return;
            }

            match api::login(&client, request.email, request.password).await {
                Ok(response) => {
                    session.login(&response.token).await;
                    notify(SIGNUP_DONE);
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("auto login after signup failed: {}", e);
                    notify(AUTO_LOGIN_FAILED);
                    navigate("/login", NavigateOptions::default());
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box register_form">
                <h2>"会員登録"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit novalidate>
                    <div class="form-group">
                        <label for="name">"名前"</label>
                        <input
                            type="text"
                            id="name"
                            placeholder="名前を入力してください"
                            autocomplete="name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        <span class="field-error">{move || name_error.get()}</span>
                    </div>

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
                            autocomplete="new-password"
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
                        {move || if is_loading.get() { "登録中..." } else { "会員登録" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
