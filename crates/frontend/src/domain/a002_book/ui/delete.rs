use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_book::api;
use crate::system::auth::context::use_session;

#[component]
pub fn BookDeleteButton(book_id: String, on_deleted: Callback<()>) -> impl IntoView {
    let session = use_session();
    let open = RwSignal::new(false);

    let on_confirm = move |_| {
        let id = book_id.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_book(&session.client(), &id).await {
                Ok(()) => {
                    super::table::notify("書籍を削除しました。");
                    open.set(false);
                    on_deleted.run(());
                }
                Err(e) => super::table::notify(&e),
            }
        });
    };

    view! {
        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(true)>
            "削除"
        </Button>
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"書籍削除"</DialogTitle>
                    <DialogContent>"本当に削除してもよろしいですか？"</DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| open.set(false)>
                            "キャンセル"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=on_confirm>
                            "削除"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
