//! Integration tests for question routing with the built-in rule table.
//!
//! These tests verify that:
//! - Price, specs and stock questions resolve to the right product in both languages
//! - FAQ and company questions read the matching entries
//! - Overlapping rules resolve to the earlier rule
//! - Unmatched input yields exactly the fallback answer

use jsonqa_core::{Action, FALLBACK_ANSWER, IntentRouter, KnowledgeStore};

const FIXTURE: &str = include_str!("fixtures/knowledge_base.json");

fn setup() -> (IntentRouter, KnowledgeStore) {
    let router = IntentRouter::with_default_rules().unwrap();
    let store = KnowledgeStore::from_json_str(FIXTURE).unwrap();
    (router, store)
}

#[test]
fn test_price_question_japanese() {
    let (router, store) = setup();
    let answer = router.classify(&store, "ノートパソコンの価格はいくらですか？");
    assert_eq!(answer, "ノートパソコンの価格は120,000円です。");
}

#[test]
fn test_price_answers_contain_name_and_grouped_price() {
    let (router, store) = setup();
    let cases = [
        ("いくらですか、このパソコン", "ノートパソコン", "120,000円"),
        ("laptop price please", "ノートパソコン", "120,000円"),
        ("What does the NOTEBOOK cost?", "ノートパソコン", "120,000円"),
        ("スマホの値段を知りたい", "スマートフォン", "80,000円"),
        ("How much does the smartphone cost?", "スマートフォン", "80,000円"),
        ("ヘッドホンの料金は？", "ワイヤレスヘッドフォン", "25,000円"),
    ];

    for (question, name, price) in cases {
        let answer = router.classify(&store, question);
        assert!(answer.contains(name), "expected {name} in answer to '{question}': {answer}");
        assert!(answer.contains(price), "expected {price} in answer to '{question}': {answer}");
    }
}

#[test]
fn test_overlapping_rules_resolve_to_earlier_rule() {
    let (router, store) = setup();

    // "phone" inside "headphone" hits the smartphone price rule first.
    assert_eq!(
        router.route("headphone price"),
        Some(&Action::Price("スマートフォン".into()))
    );
    assert_eq!(
        router.classify(&store, "headphone price"),
        "スマートフォンの価格は80,000円です。"
    );

    // Price rules come before stock rules.
    assert_eq!(
        router.route("ノートパソコンの在庫と価格"),
        Some(&Action::Price("ノートパソコン".into()))
    );

    // Domestic shipping is declared before international shipping.
    assert_eq!(
        router.route("国際配送にはどのくらい日数がかかりますか"),
        Some(&Action::Faq("配送".into()))
    );
}

#[test]
fn test_specs_question() {
    let (router, store) = setup();
    assert_eq!(
        router.classify(&store, "スマホのスペックを教えて"),
        "スマートフォンのスペックは以下の通りです：\nディスプレイ: 6.1インチ\nカメラ: 48MP\nバッテリー: 4000mAh"
    );
}

#[test]
fn test_headphone_specs_fall_through_to_fallback() {
    let (router, store) = setup();
    // There is no specs rule for headphones.
    assert_eq!(router.classify(&store, "ヘッドフォンの仕様"), FALLBACK_ANSWER);
}

#[test]
fn test_availability_questions() {
    let (router, store) = setup();
    assert_eq!(
        router.classify(&store, "ノートパソコンの在庫はありますか？"),
        "ノートパソコンは現在在庫があります。"
    );
    assert_eq!(
        router.classify(&store, "Is the smartphone in stock?"),
        "申し訳ありませんが、スマートフォンは現在在庫切れです。"
    );
    assert_eq!(
        router.classify(&store, "headphone available?"),
        "申し訳ありませんが、スマートフォンは現在在庫切れです。"
    );
    assert_eq!(
        router.classify(&store, "ヘッドフォンは入荷しますか"),
        "ワイヤレスヘッドフォンは現在在庫があります。"
    );
}

#[test]
fn test_faq_questions() {
    let (router, store) = setup();
    assert_eq!(
        router.classify(&store, "返品はできますか？"),
        "商品到着後30日以内であれば返品可能です。"
    );
    assert_eq!(
        router.classify(&store, "Can I get a refund?"),
        "商品到着後30日以内であれば返品可能です。"
    );
    assert_eq!(
        router.classify(&store, "配送にはどのくらい時間がかかりますか？"),
        "通常、ご注文から3〜5営業日でお届けします。"
    );
    assert_eq!(
        router.classify(&store, "海外への発送はありますか？"),
        "現在、国際配送は一部の国のみ対応しています。"
    );
}

#[test]
fn test_missing_faq_gives_generic_answer() {
    let router = IntentRouter::with_default_rules().unwrap();
    let store = KnowledgeStore::from_json_str(r#"{"faq": [{"question": "支払い方法は？", "answer": "カード"}]}"#)
        .unwrap();
    assert_eq!(
        router.classify(&store, "返品はできますか？"),
        "申し訳ありませんが、その質問に対する回答が見つかりませんでした。"
    );
}

#[test]
fn test_company_questions() {
    let (router, store) = setup();
    assert_eq!(
        router.classify(&store, "会社の名前は何ですか？"),
        "会社名はテックストア株式会社です。"
    );
    assert_eq!(
        router.classify(&store, "What is the company address?"),
        "会社の所在地は東京, 大阪, 福岡です。"
    );
    assert_eq!(
        router.classify(&store, "問い合わせ方法を教えてください"),
        "連絡先情報：\nメール: support@techstore.example.com\n電話: 03-1234-5678\n住所: 東京都渋谷区1-2-3"
    );
}

#[test]
fn test_list_products() {
    let (router, store) = setup();
    let expected = "取り扱い商品一覧：\n- ノートパソコン: 120,000円\n- スマートフォン: 80,000円\n- ワイヤレスヘッドフォン: 25,000円";
    assert_eq!(router.classify(&store, "商品一覧を見せて"), expected);
    assert_eq!(router.classify(&store, "What products are available?"), expected);
}

#[test]
fn test_list_products_empty_catalog() {
    let router = IntentRouter::with_default_rules().unwrap();
    let store = KnowledgeStore::from_json_str(r#"{"products": []}"#).unwrap();
    assert_eq!(
        router.classify(&store, "製品のリストを教えて"),
        "申し訳ありませんが、商品情報が見つかりませんでした。"
    );
}

#[test]
fn test_unmatched_input_returns_fallback_exactly() {
    let (router, store) = setup();
    for question in ["今日の天気は？", "hello", "", "   ", "価格", "laptop"] {
        assert_eq!(router.route(question), None, "unexpected match for '{question}'");
        assert_eq!(router.classify(&store, question), FALLBACK_ANSWER);
    }
}

#[test]
fn test_classification_is_deterministic() {
    let (router, store) = setup();
    let question = "スマートフォンの価格は？";
    let first = router.classify(&store, question);
    for _ in 0..5 {
        assert_eq!(router.classify(&store, question), first);
    }
}
