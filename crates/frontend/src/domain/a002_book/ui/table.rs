use leptos::prelude::*;
use thaw::*;

use super::delete::BookDeleteButton;
use super::edit::BookEditButton;
use super::register::BookRegisterDialog;
use super::review::BookReviewButton;
use crate::domain::a002_book::api;
use crate::shared::messages::LOADING;
use crate::shared::number_format::format_yen;
use crate::system::auth::context::use_session;
use contracts::domain::a002_book::aggregate::Book;

pub(super) fn notify(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

fn pages(value: Option<i64>) -> String {
    value.map(|p| format!("{}p", p)).unwrap_or_default()
}

fn percent(value: Option<i64>) -> String {
    value.map(|p| format!("{}%", p)).unwrap_or_default()
}

/// `/books`
#[component]
pub fn BookTable() -> impl IntoView {
    let session = use_session();
    let (books, set_books) = signal::<Vec<Book>>(Vec::new());
    let (loading, set_loading) = signal(true);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_books(&session.client()).await {
                Ok(v) => set_books.set(v),
                Err(e) => notify(&e),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let refresh = Callback::new(move |_: ()| fetch());

    view! {
        <div class="page">
            <Show when=move || !loading.get() fallback=|| view! { <Spinner label=LOADING /> }>
                <div class="book_register_btn">
                    <BookRegisterDialog on_saved=refresh />
                </div>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"タイトル"</TableHeaderCell>
                            <TableHeaderCell>"著者"</TableHeaderCell>
                            <TableHeaderCell>"ジャンル"</TableHeaderCell>
                            <TableHeaderCell>"出版社"</TableHeaderCell>
                            <TableHeaderCell>"出版年"</TableHeaderCell>
                            <TableHeaderCell>"総ページ数"</TableHeaderCell>
                            <TableHeaderCell>"現状ページ"</TableHeaderCell>
                            <TableHeaderCell>"進捗率"</TableHeaderCell>
                            <TableHeaderCell>"金額"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || books.get()
                            key=|book| book.id.clone()
                            children=move |book| {
                                let id = book.id.clone();
                                let row = book.clone();
                                let progress = book.progress_percentage;
                                view! {
                                    <TableRow>
                                        <TableCell>{row.title}</TableCell>
                                        <TableCell>{row.author}</TableCell>
                                        <TableCell>{row.genre}</TableCell>
                                        <TableCell>{row.publisher}</TableCell>
                                        <TableCell>{format!("{}年", row.published_at)}</TableCell>
                                        <TableCell>{pages(Some(row.total_page))}</TableCell>
                                        <TableCell>{pages(row.progress_page)}</TableCell>
                                        <TableCell>{percent(row.progress_percentage)}</TableCell>
                                        <TableCell>{format_yen(row.price)}</TableCell>
                                        <TableCell>
                                            <BookEditButton book=book on_saved=refresh />
                                        </TableCell>
                                        <TableCell>
                                            <BookReviewButton progress_percentage=progress />
                                        </TableCell>
                                        <TableCell>
                                            <BookDeleteButton book_id=id on_deleted=refresh />
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_formatters() {
        assert_eq!(pages(Some(560)), "560p");
        assert_eq!(pages(None), "");
        assert_eq!(percent(Some(21)), "21%");
    }
}
