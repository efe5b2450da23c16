use leptos::prelude::*;
use thaw::*;

use crate::shared::messages::{IN_STOCK, NO_DESCRIPTION, OUT_OF_STOCK};
use contracts::domain::a001_item::aggregate::Item;

pub const PLACEHOLDER_IMAGE: &str = "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?auto=format&fit=crop&w=800&q=80";

fn buy_label(stock: bool) -> &'static str {
    if stock {
        "今すぐ購入"
    } else {
        "入荷待ち"
    }
}

fn description_or_placeholder(description: &str) -> String {
    if description.trim().is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        description.to_string()
    }
}

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let stock = item.stock;
    let image = item
        .image_url
        .clone()
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let image_style = if stock { "opacity: 1;" } else { "opacity: 0.6;" };

    view! {
        <Card attr:class="item-card" attr:style="max-width: 320px;">
            <div class="item-card__image" style="position: relative;">
                <img src=image alt=item.item_name.clone() style=image_style />
                <Show when=move || !stock>
                    <div class="item-card__sold-out">"売り切れ"</div>
                </Show>
            </div>
            <Flex vertical=true gap=FlexGap::Small>
                <h3>{item.item_name.clone()}</h3>
                <p class="item-card__description">{description_or_placeholder(&item.description)}</p>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    {if stock {
                        view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>{IN_STOCK}</Badge>
                            <span class="item-card__hint" title="すぐに発送可能">"✓ 即日発送"</span>
                        }
                        .into_any()
                    } else {
                        view! {
                            <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Danger>{OUT_OF_STOCK}</Badge>
                        }
                        .into_any()
                    }}
                </Flex>
            </Flex>
            <Flex gap=FlexGap::Small>
                <Button appearance=ButtonAppearance::Primary disabled=!stock>
                    {buy_label(stock)}
                </Button>
                <Button appearance=ButtonAppearance::Secondary disabled=!stock>
                    "カートに追加"
                </Button>
            </Flex>
        </Card>
    }
}
