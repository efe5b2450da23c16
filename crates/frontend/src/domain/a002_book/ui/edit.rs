use leptos::prelude::*;
use thaw::*;

use super::fields::{BookFieldInputs, BookFields};
use super::model::BookForm;
use crate::domain::a002_book::api;
use crate::system::auth::context::use_session;
use contracts::domain::a002_book::aggregate::Book;

#[component]
pub fn BookEditButton(book: Book, on_saved: Callback<()>) -> impl IntoView {
    let session = use_session();
    let open = RwSignal::new(false);
    let fields = BookFields::new();
    let error = RwSignal::new(Option::<String>::None);
    let initial = BookForm::from(&book);
    let book_id = book.id;

    let on_open = move |_| {
        fields.fill(initial.clone());
        error.set(None);
        open.set(true);
    };

    let on_save = move |_| {
        let dto = match fields.snapshot().to_update_dto() {
            Ok(dto) => dto,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        let id = book_id.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_book(&session.client(), &id, &dto).await {
                Ok(()) => {
                    super::table::notify("書籍情報を変更しました。");
                    open.set(false);
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <Button appearance=ButtonAppearance::Secondary on_click=on_open>"編集"</Button>
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"書籍編集"</DialogTitle>
                    <DialogContent>
                        <Show when=move || error.get().is_some()>
                            <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                        </Show>
                        <BookFieldInputs fields=fields with_progress=true />
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
