//! Built-in rule table for Japanese and English questions.

use super::{Action, RuleSpec};

const PRICE_JA: &str = "(価格|料金|値段|いくら)";
const PRICE_EN: &str = "(price|cost)";
const SPECS_JA: &str = "(スペック|仕様|性能)";
const SPECS_EN: &str = "(spec|specification)";
const STOCK_JA: &str = "(在庫|ストック|入荷)";
const STOCK_EN: &str = "(stock|available)";

const LAPTOP_JA: &str = "(ノートパソコン|パソコン|ラップトップ)";
const LAPTOP_EN: &str = "(laptop|notebook)";
const PHONE_JA: &str = "(スマートフォン|スマホ|携帯)";
const PHONE_EN: &str = "(smartphone|phone)";
const HEADPHONE_JA: &str = "(ヘッドフォン|ヘッドホン)";
const HEADPHONE_EN: &str = "(headphone)";

const LAPTOP: &str = "ノートパソコン";
const PHONE: &str = "スマートフォン";
const HEADPHONE: &str = "ワイヤレスヘッドフォン";

/// Both word orders, in Japanese then English.
fn either_order(topic_ja: &str, topic_en: &str, item_ja: &str, item_en: &str) -> Vec<String> {
    vec![
        format!("{topic_ja}.*{item_ja}"),
        format!("{item_ja}.*{topic_ja}"),
        format!("{item_en}.*{topic_en}"),
        format!("{topic_en}.*{item_en}"),
    ]
}

fn product_rule(topic: (&str, &str), item: (&str, &str), action: Action) -> RuleSpec {
    RuleSpec::new(either_order(topic.0, topic.1, item.0, item.1), action)
}

/// The default rules, in priority order.
///
/// Rules are not disjoint ("phone" also occurs in "headphone"); the earlier
/// rule wins.
#[must_use]
pub fn default_rules() -> Vec<RuleSpec> {
    let price = (PRICE_JA, PRICE_EN);
    let specs = (SPECS_JA, SPECS_EN);
    let stock = (STOCK_JA, STOCK_EN);
    let laptop = (LAPTOP_JA, LAPTOP_EN);
    let phone = (PHONE_JA, PHONE_EN);
    let headphone = (HEADPHONE_JA, HEADPHONE_EN);

    vec![
        product_rule(price, laptop, Action::Price(LAPTOP.into())),
        product_rule(price, phone, Action::Price(PHONE.into())),
        product_rule(price, headphone, Action::Price(HEADPHONE.into())),
        product_rule(specs, laptop, Action::Specs(LAPTOP.into())),
        product_rule(specs, phone, Action::Specs(PHONE.into())),
        product_rule(stock, laptop, Action::Availability(LAPTOP.into())),
        product_rule(stock, phone, Action::Availability(PHONE.into())),
        product_rule(stock, headphone, Action::Availability(HEADPHONE.into())),
        RuleSpec::new(
            ["(返品|返金|キャンセル)", "(return|refund|cancel)"],
            Action::Faq("返品".into()),
        ),
        RuleSpec::new(
            [
                "(配送|発送|届く|到着).*(時間|日数|かかる)",
                "(shipping|delivery).*(time|long)",
            ],
            Action::Faq("配送".into()),
        ),
        RuleSpec::new(
            [
                "(国際|海外).*(配送|発送)",
                "(international|overseas).*(shipping|delivery)",
            ],
            Action::Faq("国際配送".into()),
        ),
        RuleSpec::new(
            ["(会社|企業).*(名前|名称)", "(company).*(name)"],
            Action::CompanyName,
        ),
        RuleSpec::new(
            [
                "(会社|企業).*(場所|所在地|住所|どこ)",
                "(company).*(location|address|where)",
            ],
            Action::CompanyLocations,
        ),
        RuleSpec::new(
            [
                "(連絡|問い合わせ|コンタクト).*(方法|手段|どうやって)",
                "(contact|reach).*(how|information)",
            ],
            Action::CompanyContact,
        ),
        RuleSpec::new(
            [
                "(商品|製品).*(一覧|リスト|何|教えて)",
                "(products|items).*(list|available|what)",
            ],
            Action::ListProducts,
        ),
    ]
}
