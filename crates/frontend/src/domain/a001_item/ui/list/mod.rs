use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a001_item::api;
use crate::shared::date_utils::format_day;
use crate::shared::messages::{IN_STOCK, LOADING, OUT_OF_STOCK};
use crate::system::auth::context::use_session;
use contracts::domain::a001_item::aggregate::Item;

#[derive(Clone, Debug, PartialEq)]
pub struct ItemRow {
    pub id: String,
    pub name: String,
    pub stock: bool,
    pub description: String,
    pub created_at: String,
}

impl From<Item> for ItemRow {
    fn from(item: Item) -> Self {
        Self {
            id: item.item_id,
            name: item.item_name,
            stock: item.stock,
            description: item.description,
            created_at: format_day(item.created_at),
        }
    }
}

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message("この商品を削除しますか？").ok())
        .unwrap_or(false)
}

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

#[component]
pub fn AdminItemList() -> impl IntoView {
    let session = use_session();
    let (items, set_items) = signal::<Vec<ItemRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_admin_items(&session.client()).await {
            Ok(v) => {
                set_items.set(v.into_iter().map(Into::into).collect());
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    let handle_delete = move |id: String| {
        if !confirm_delete() {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_item(&session.client(), &id).await {
                Ok(()) => set_items.update(|rows| rows.retain(|r| r.id != id)),
                Err(e) => alert(&e),
            }
        });
    };

    view! {
        <div class="page">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2>"商品一覧"</h2>
                <A href="/admin/items/new">
                    <Button appearance=ButtonAppearance::Primary>"新規登録"</Button>
                </A>
            </Flex>

            <Show when=move || !loading.get() fallback=|| view! { <Spinner label=LOADING /> }>
                {move || match error.get() {
                    Some(e) => view! { <div class="error-message">{e}</div> }.into_any(),
                    None => view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"商品名"</TableHeaderCell>
                                    <TableHeaderCell>"在庫状況"</TableHeaderCell>
                                    <TableHeaderCell>"説明"</TableHeaderCell>
                                    <TableHeaderCell>"作成日"</TableHeaderCell>
                                    <TableHeaderCell>"操作"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || items.get()
                                    key=|row| row.id.clone()
                                    children=move |row| {
                                        let id = row.id.clone();
                                        let detail_href = format!("/admin/items/{}", row.id);
                                        let edit_href = format!("/admin/items/{}/edit", row.id);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <A href=detail_href>{row.name.clone()}</A>
                                                </TableCell>
                                                <TableCell>
                                                    {if row.stock {
                                                        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>{IN_STOCK}</Badge> }.into_any()
                                                    } else {
                                                        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>{OUT_OF_STOCK}</Badge> }.into_any()
                                                    }}
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{row.description.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>{row.created_at.clone()}</TableCell>
                                                <TableCell>
                                                    <Flex gap=FlexGap::Small>
                                                        <A href=edit_href>"編集"</A>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| handle_delete(id.clone())
                                                        >
                                                            "削除"
                                                        </Button>
                                                    </Flex>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                        <Show when=move || items.with(|rows| rows.is_empty())>
                            <p class="empty-state">"商品が登録されていません"</p>
                        </Show>
                    }
                    .into_any(),
                }}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_item_formats_created_date() {
        let item: Item = serde_json::from_str(
            r#"{
                "item_id": "it-9",
                "item_name": "Cotton",
                "stock": true,
                "description": "soft",
                "created_at": "2024-03-15T14:02:26Z",
                "updated_at": "2024-03-15T14:02:26Z"
            }"#,
        )
        .unwrap();
        let row = ItemRow::from(item);
        assert_eq!(row.id, "it-9");
        assert_eq!(row.created_at, "2024/03/15");
    }
}
