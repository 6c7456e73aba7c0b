//! Answer texts produced for each [`Action`].
//!
//! Every lookup miss turns into a user-facing sentence here; nothing in this
//! module returns an error.

use super::Action;
use crate::knowledge::KnowledgeStore;
use crate::util::{display_value, group_thousands};

/// Returned when no rule matches the question.
pub const FALLBACK_ANSWER: &str =
    "申し訳ありませんが、その質問に答えることができません。別の質問を試してみてください。";

const FAQ_NOT_FOUND: &str = "申し訳ありませんが、その質問に対する回答が見つかりませんでした。";
const FAQ_ANSWER_MISSING: &str = "情報が見つかりませんでした。";
const COMPANY_NAME_NOT_FOUND: &str = "申し訳ありませんが、会社名の情報が見つかりませんでした。";
const LOCATIONS_NOT_FOUND: &str = "申し訳ありませんが、会社の所在地情報が見つかりませんでした。";
const CONTACT_NOT_FOUND: &str = "申し訳ありませんが、連絡先情報が見つかりませんでした。";
const PRODUCTS_NOT_FOUND: &str = "申し訳ありませんが、商品情報が見つかりませんでした。";
const PRICE_UNKNOWN: &str = "価格情報なし";

impl Action {
    /// Produce the answer for this action from `store`.
    #[must_use]
    pub fn answer(&self, store: &KnowledgeStore) -> String {
        match self {
            Self::Price(fragment) => price(store, fragment),
            Self::Specs(fragment) => specs(store, fragment),
            Self::Availability(fragment) => availability(store, fragment),
            Self::Faq(keyword) => faq(store, keyword),
            Self::CompanyName => store.company_name().map_or_else(
                || COMPANY_NAME_NOT_FOUND.to_string(),
                |name| format!("会社名は{name}です。"),
            ),
            Self::CompanyLocations => store.company_locations().map_or_else(
                || LOCATIONS_NOT_FOUND.to_string(),
                |locations| format!("会社の所在地は{}です。", locations.join(", ")),
            ),
            Self::CompanyContact => store.contact_info().map_or_else(
                || CONTACT_NOT_FOUND.to_string(),
                |c| {
                    format!(
                        "連絡先情報：\nメール: {}\n電話: {}\n住所: {}",
                        c.email(),
                        c.phone(),
                        c.address()
                    )
                },
            ),
            Self::ListProducts => list_products(store),
        }
    }
}

fn price(store: &KnowledgeStore, fragment: &str) -> String {
    let product = store.find_product_by_name_fragment(fragment);
    match product.and_then(|p| p.price.map(|price| (p, price))) {
        Some((p, price)) => format!("{}の価格は{}円です。", p.name, group_thousands(price)),
        None => format!("申し訳ありませんが、{fragment}の価格情報が見つかりませんでした。"),
    }
}

fn specs(store: &KnowledgeStore, fragment: &str) -> String {
    let found = store
        .find_product_by_name_fragment(fragment)
        .and_then(|p| p.specs.as_ref().filter(|s| !s.is_empty()).map(|s| (p, s)));

    let Some((product, specs)) = found else {
        return format!("申し訳ありませんが、{fragment}のスペック情報が見つかりませんでした。");
    };

    let lines = specs
        .iter()
        .map(|(key, value)| format!("{key}: {}", display_value(value)))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}のスペックは以下の通りです：\n{lines}", product.name)
}

fn availability(store: &KnowledgeStore, fragment: &str) -> String {
    let product = store.find_product_by_name_fragment(fragment);
    match product.and_then(|p| p.in_stock.map(|s| (p, s))) {
        Some((p, true)) => format!("{}は現在在庫があります。", p.name),
        Some((p, false)) => format!("申し訳ありませんが、{}は現在在庫切れです。", p.name),
        None => format!("申し訳ありませんが、{fragment}の在庫情報が見つかりませんでした。"),
    }
}

fn faq(store: &KnowledgeStore, keyword: &str) -> String {
    store.find_faq_by_keyword(keyword).map_or_else(
        || FAQ_NOT_FOUND.to_string(),
        |entry| {
            entry
                .answer
                .clone()
                .unwrap_or_else(|| FAQ_ANSWER_MISSING.to_string())
        },
    )
}

fn list_products(store: &KnowledgeStore) -> String {
    let products = store.list_products();
    if products.is_empty() {
        return PRODUCTS_NOT_FOUND.to_string();
    }

    let lines = products
        .iter()
        .map(|p| match p.price {
            Some(price) => format!("- {}: {}円", p.name, group_thousands(price)),
            None => format!("- {}: {PRICE_UNKNOWN}", p.name),
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("取り扱い商品一覧：\n{lines}")
}
