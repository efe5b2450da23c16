use leptos::prelude::*;
use thaw::*;

use super::fields::{BookFieldInputs, BookFields};
use crate::domain::a002_book::api;
use crate::system::auth::context::use_session;

#[component]
pub fn BookRegisterDialog(on_saved: Callback<()>) -> impl IntoView {
    let session = use_session();
    let open = RwSignal::new(false);
    let fields = BookFields::new();
    let error = RwSignal::new(Option::<String>::None);

    let on_save = move |_| {
        let dto = match fields.snapshot().to_create_dto() {
            Ok(dto) => dto,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_book(&session.client(), &dto).await {
                Ok(()) => {
                    super::table::notify("書籍を登録しました。");
                    fields.reset();
                    error.set(None);
                    open.set(false);
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(true)>
            "📕 登録"
        </Button>
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"書籍登録"</DialogTitle>
                    <DialogContent>
                        <Show when=move || error.get().is_some()>
                            <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                        </Show>
                        <BookFieldInputs fields=fields />
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| open.set(false)>
                            "キャンセル"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=on_save>
                            "保存"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
