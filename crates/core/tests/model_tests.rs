use chrono::NaiveDate;
use expense_ledger_core::models::category::Category;
use expense_ledger_core::models::seed::mock_transactions;
use expense_ledger_core::models::settings::{IdStrategy, Settings};
use expense_ledger_core::models::transaction::{NewTransaction, Transaction};
use rust_decimal_macros::dec;
use std::collections::HashSet;
use std::str::FromStr;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Category
// ═══════════════════════════════════════════════════════════════════

mod category {
    use super::*;

    #[test]
    fn display_matches_label() {
        for c in Category::ALL {
            assert_eq!(c.to_string(), c.label());
        }
    }

    #[test]
    fn all_in_picker_order() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Food", "Housing", "Utilities", "Transport", "Entertainment"]
        );
    }

    #[test]
    fn parses_exact_label() {
        assert_eq!(Category::from_str("Housing").unwrap(), Category::Housing);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Category::from_str("food").unwrap(), Category::Food);
        assert_eq!(
            Category::from_str("ENTERTAINMENT").unwrap(),
            Category::Entertainment
        );
    }

    #[test]
    fn parse_ignores_surrounding_whitespace() {
        assert_eq!(Category::from_str("  Transport ").unwrap(), Category::Transport);
    }

    #[test]
    fn unknown_label_is_validation_error() {
        let err = Category::from_str("Groceries").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Groceries"));
    }

    #[test]
    fn colors_are_distinct_hex() {
        let colors: HashSet<&str> = Category::ALL.iter().map(|c| c.color()).collect();
        assert_eq!(colors.len(), Category::ALL.len());
        for color in colors {
            assert!(color.starts_with('#'));
            assert_eq!(color.len(), 7);
            assert!(color[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn color_is_stable() {
        assert_eq!(Category::Food.color(), Category::Food.color());
    }

    #[test]
    fn serde_roundtrip_json() {
        for c in Category::ALL {
            let json = serde_json::to_string(&c).unwrap();
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(c, back);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Transaction & NewTransaction
// ═══════════════════════════════════════════════════════════════════

mod transaction {
    use super::*;

    #[test]
    fn new_sets_fields() {
        let t = Transaction::new("9", "Bus pass", dec!(30), d(2024, 10, 7), Category::Transport);
        assert_eq!(t.id, "9");
        assert_eq!(t.name, "Bus pass");
        assert_eq!(t.amount, dec!(30));
        assert_eq!(t.date, d(2024, 10, 7));
        assert_eq!(t.category, Category::Transport);
    }

    #[test]
    fn date_serializes_as_iso() {
        let t = Transaction::new("1", "Groceries", dec!(50), d(2024, 10, 1), Category::Food);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["date"], "2024-10-01");
        assert_eq!(json["category"], "Food");
    }

    #[test]
    fn json_roundtrip_keeps_amount_exact() {
        let t = Transaction::new("7", "Coffee", dec!(4.50), d(2024, 10, 6), Category::Food);
        let json = serde_json::to_string(&t).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn blank_form_uses_settings_defaults() {
        let form = NewTransaction::from_settings(&Settings::default());
        assert_eq!(form.name, "");
        assert_eq!(form.amount, "");
        assert_eq!(form.date, "2024-10-01");
        assert_eq!(form.category, "Food");
    }

    #[test]
    fn blank_form_follows_custom_settings() {
        let settings = Settings {
            default_category: Category::Utilities,
            default_date: d(2025, 1, 31),
            ..Settings::default()
        };
        let form = NewTransaction::from_settings(&settings);
        assert_eq!(form.date, "2025-01-31");
        assert_eq!(form.category, "Utilities");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.currency_symbol, "$");
        assert_eq!(s.default_category, Category::Food);
        assert_eq!(s.default_date, d(2024, 10, 1));
        assert_eq!(s.id_strategy, IdStrategy::Sequential);
    }

    #[test]
    fn from_json_partial_keeps_defaults() {
        let s = Settings::from_json(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(s.currency_symbol, "€");
        assert_eq!(s.default_category, Category::Food);
        assert_eq!(s.id_strategy, IdStrategy::Sequential);
    }

    #[test]
    fn from_json_full() {
        let s = Settings::from_json(
            r#"{
                "currency_symbol": "zł",
                "default_category": "Housing",
                "default_date": "2025-03-01",
                "id_strategy": "Random"
            }"#,
        )
        .unwrap();
        assert_eq!(s.currency_symbol, "zł");
        assert_eq!(s.default_category, Category::Housing);
        assert_eq!(s.default_date, d(2025, 3, 1));
        assert_eq!(s.id_strategy, IdStrategy::Random);
    }

    #[test]
    fn from_json_rejects_garbage() {
        let err = Settings::from_json("not json").unwrap_err();
        assert!(err.to_string().starts_with("Deserialization error"));
    }

    #[test]
    fn to_json_roundtrip() {
        let s = Settings {
            id_strategy: IdStrategy::Random,
            ..Settings::default()
        };
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Seed data
// ═══════════════════════════════════════════════════════════════════

mod seed {
    use super::*;

    #[test]
    fn five_records_in_order() {
        let seed = mock_transactions();
        let ids: Vec<&str> = seed.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn contents_match_sample_screen() {
        let seed = mock_transactions();
        assert_eq!(seed[0].name, "Groceries");
        assert_eq!(seed[1].name, "Rent");
        assert_eq!(seed[1].amount, dec!(500));
        assert_eq!(seed[2].name, "Electricity Bill");
        assert_eq!(seed[2].category, Category::Utilities);
        assert_eq!(seed[4].name, "Dining Out");
        assert_eq!(seed[4].date, d(2024, 10, 5));
    }

    #[test]
    fn amounts_sum_to_780() {
        let total: rust_decimal::Decimal = mock_transactions().iter().map(|t| t.amount).sum();
        assert_eq!(total, dec!(780));
    }
}
