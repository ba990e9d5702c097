//! Tests for the evaluation pipeline.

use super::*;
use crate::domain::{CanonicalSymbol, NetworkFeeTable, Orderbook, PriceLevel, Quote, Side};
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn level(price: &str, qty: &str) -> PriceLevel {
    PriceLevel {
        price: dec(price),
        quantity: dec(qty),
    }
}

fn book(bids: Vec<PriceLevel>, asks: Vec<PriceLevel>) -> Orderbook {
    Orderbook {
        symbol: CanonicalSymbol::new("BTC", "USDT"),
        venue: "binance".to_string(),
        bids,
        asks,
        timestamp: Utc::now(),
    }
}

// ==================== Profit calculation tests ====================

#[test]
fn test_profit_reference_scenario() {
    // buy 10 @ 100, sell @ 102, 0.1% fees each side, $1 withdrawal.
    let p = compute(
        dec("100"),
        dec("102"),
        dec("10"),
        dec("0.1"),
        dec("0.1"),
        dec("1"),
    );
    assert_eq!(p.gross_profit, dec("20.00"));
    assert_eq!(p.buy_fee, dec("1.00"));
    assert_eq!(p.sell_fee, dec("1.02"));
    assert_eq!(p.net_profit, dec("16.98"));
    assert_eq!(p.roi_percent, dec("1.698"));
}

#[test]
fn test_profit_identity_holds() {
    let p = compute(
        dec("250.5"),
        dec("251.9"),
        dec("3.2"),
        dec("0.2"),
        dec("0.15"),
        dec("0.5"),
    );
    assert_eq!(
        p.net_profit,
        p.gross_profit - p.buy_fee - p.sell_fee - dec("0.5")
    );
    assert_eq!(
        p.roi_percent,
        p.net_profit / (dec("250.5") * dec("3.2")) * Decimal::ONE_HUNDRED
    );
}

#[test]
fn test_profit_negative_when_fees_dominate() {
    let p = compute(dec("100"), dec("100.1"), dec("1"), dec("0.1"), dec("0.1"), dec("5"));
    assert!(p.net_profit < Decimal::ZERO);
}

#[test]
#[should_panic(expected = "buy notional must be positive")]
fn test_profit_zero_notional_panics() {
    compute(dec("0"), dec("102"), dec("10"), dec("0.1"), dec("0.1"), dec("1"));
}

// ==================== Slippage tests ====================

#[test]
fn test_heuristic_buy_raises_price() {
    // Volume at saturation: factor 1.0, so buy price is price * 1.001.
    let p = estimate_heuristic(dec("100"), Side::Buy, dec("100000"), dec("0.001"));
    assert_eq!(p, dec("100.1"));
}

#[test]
fn test_heuristic_sell_lowers_price() {
    let p = estimate_heuristic(dec("100"), Side::Sell, dec("100000"), dec("0.001"));
    assert_eq!(p, dec("99.9"));
}

#[test]
fn test_heuristic_factor_scales_with_volume() {
    // Half the saturation volume: half the adjustment.
    let p = estimate_heuristic(dec("100"), Side::Buy, dec("50000"), dec("0.001"));
    assert_eq!(p, dec("100.05"));
}

#[test]
fn test_heuristic_factor_caps_at_one() {
    let capped = estimate_heuristic(dec("100"), Side::Buy, dec("900000"), dec("0.001"));
    let at_cap = estimate_heuristic(dec("100"), Side::Buy, dec("100000"), dec("0.001"));
    assert_eq!(capped, at_cap);
}

#[test]
fn test_heuristic_negative_volume_clamped() {
    let p = estimate_heuristic(dec("100"), Side::Buy, dec("-5"), dec("0.001"));
    assert_eq!(p, dec("100"));
}

#[test]
fn test_walk_book_best_level_covers_quantity() {
    let b = book(vec![], vec![level("101", "5"), level("102", "5")]);
    let p = walk_book(&b, Side::Buy, dec("3")).unwrap();
    assert_eq!(p, dec("101"));
}

#[test]
fn test_walk_book_averages_across_levels() {
    // 2 @ 101 + 2 @ 103 = 408 for 4 units -> 102 average.
    let b = book(vec![], vec![level("101", "2"), level("103", "2")]);
    let p = walk_book(&b, Side::Buy, dec("4")).unwrap();
    assert_eq!(p, dec("102"));
}

#[test]
fn test_walk_book_sell_uses_bids() {
    let b = book(vec![level("99", "2"), level("98", "2")], vec![]);
    let p = walk_book(&b, Side::Sell, dec("3")).unwrap();
    // 2 @ 99 + 1 @ 98 = 296 for 3 units.
    assert_eq!(p, dec("296") / dec("3"));
}

#[test]
fn test_walk_book_insufficient_depth() {
    let b = book(vec![], vec![level("101", "1"), level("102", "1")]);
    let err = walk_book(&b, Side::Buy, dec("5")).unwrap_err();
    assert_eq!(err, SlippageError::InsufficientDepth);
}

#[test]
fn test_walk_book_empty_side() {
    let b = book(vec![level("99", "1")], vec![]);
    let err = walk_book(&b, Side::Buy, dec("1")).unwrap_err();
    assert_eq!(err, SlippageError::NoEstimate);
}

#[test]
fn test_walk_book_zero_quantity() {
    let b = book(vec![], vec![level("101", "1")]);
    let err = walk_book(&b, Side::Buy, dec("0")).unwrap_err();
    assert_eq!(err, SlippageError::NoEstimate);
}

// ==================== Fee routing tests ====================

fn fee_table() -> NetworkFeeTable {
    let mut table = NetworkFeeTable::default();
    table.withdrawal_fees.insert(
        "USDT".to_string(),
        HashMap::from([
            ("TRC20".to_string(), dec("1.0")),
            ("ERC20".to_string(), dec("15.0")),
            ("BEP20".to_string(), dec("1.0")),
        ]),
    );
    table.supported_networks.insert(
        "USDT".to_string(),
        HashMap::from([
            (
                "binance".to_string(),
                vec!["TRC20".into(), "ERC20".into(), "BEP20".into()],
            ),
            ("kucoin".to_string(), vec!["TRC20".into(), "ERC20".into()]),
        ]),
    );
    table
}

#[test]
fn test_best_network_picks_cheapest() {
    let route = best_network("USDT", "binance", "kucoin", &fee_table()).unwrap();
    assert_eq!(route.network, "TRC20");
    assert_eq!(route.fee, dec("1.0"));
}

#[test]
fn test_best_network_tie_breaks_lexicographically() {
    let mut table = fee_table();
    table
        .supported_networks
        .get_mut("USDT")
        .unwrap()
        .get_mut("kucoin")
        .unwrap()
        .push("BEP20".to_string());
    // BEP20 and TRC20 both cost 1.0; BEP20 sorts first.
    let route = best_network("USDT", "binance", "kucoin", &table).unwrap();
    assert_eq!(route.network, "BEP20");
}

#[test]
fn test_best_network_disjoint_sets() {
    let mut table = fee_table();
    table.supported_networks.get_mut("USDT").unwrap().insert(
        "kucoin".to_string(),
        vec!["SOL".to_string()],
    );
    let err = best_network("USDT", "binance", "kucoin", &table).unwrap_err();
    assert!(matches!(err, RouteError::NoCommonNetwork { .. }));
}

#[test]
fn test_best_network_missing_asset_data() {
    let err = best_network("BTC", "binance", "kucoin", &fee_table()).unwrap_err();
    assert!(matches!(err, RouteError::NoCommonNetwork { .. }));
}

#[test]
fn test_best_network_skips_untabulated_fee() {
    let mut table = fee_table();
    // SOL is shared but has no fee entry; ERC20 is tabulated at 0.5.
    table.supported_networks.get_mut("USDT").unwrap().insert(
        "binance".to_string(),
        vec!["SOL".into(), "ERC20".into()],
    );
    table.supported_networks.get_mut("USDT").unwrap().insert(
        "kucoin".to_string(),
        vec!["SOL".into(), "ERC20".into()],
    );
    table
        .withdrawal_fees
        .get_mut("USDT")
        .unwrap()
        .insert("ERC20".to_string(), dec("0.5"));
    let route = best_network("USDT", "binance", "kucoin", &table).unwrap();
    assert_eq!(route.network, "ERC20");
    assert_eq!(route.fee, dec("0.5"));
}

#[test]
fn test_best_network_all_fees_unknown() {
    let mut table = fee_table();
    table.withdrawal_fees.clear();
    let err = best_network("USDT", "binance", "kucoin", &table).unwrap_err();
    assert!(matches!(err, RouteError::NoFeeData { .. }));
}

// ==================== Validator tests ====================

fn opportunity() -> crate::domain::Opportunity {
    crate::domain::Opportunity {
        asset_pair: CanonicalSymbol::new("BTC", "USDT"),
        buy_venue: "kucoin".to_string(),
        sell_venue: "binance".to_string(),
        buy_price: dec("100"),
        sell_price: dec("102"),
        quantity: dec("10"),
        gross_profit: dec("20"),
        net_profit: dec("16.98"),
        roi_percent: dec("16.98"),
        network: "TRC20".to_string(),
        withdrawal_fee: dec("1"),
        timestamp: Utc::now(),
    }
}

#[test]
fn test_validate_accepts_sound_opportunity() {
    assert!(validate(&opportunity(), DEFAULT_MAX_ROI, DEFAULT_STALENESS_WINDOW).is_ok());
}

#[test]
fn test_validate_roi_ceiling_first() {
    // ROI rule outranks the price rule even when both would fail.
    let mut opp = opportunity();
    opp.roi_percent = dec("150");
    opp.buy_price = Decimal::ZERO;
    let err = validate(&opp, DEFAULT_MAX_ROI, DEFAULT_STALENESS_WINDOW).unwrap_err();
    assert_eq!(err, Rejection::RoiTooHigh);
}

#[test]
fn test_validate_invalid_price_before_profit() {
    let mut opp = opportunity();
    opp.sell_price = Decimal::ZERO;
    opp.net_profit = dec("-1");
    let err = validate(&opp, DEFAULT_MAX_ROI, DEFAULT_STALENESS_WINDOW).unwrap_err();
    assert_eq!(err, Rejection::InvalidPrice);
}

#[test]
fn test_validate_negative_profit_before_staleness() {
    let mut opp = opportunity();
    opp.net_profit = Decimal::ZERO;
    opp.timestamp = Utc::now() - chrono::Duration::seconds(600);
    let err = validate(&opp, DEFAULT_MAX_ROI, DEFAULT_STALENESS_WINDOW).unwrap_err();
    assert_eq!(err, Rejection::NegativeProfit);
}

#[test]
fn test_validate_stale_opportunity() {
    let mut opp = opportunity();
    opp.timestamp = Utc::now() - chrono::Duration::seconds(600);
    let err = validate(&opp, DEFAULT_MAX_ROI, DEFAULT_STALENESS_WINDOW).unwrap_err();
    assert_eq!(err, Rejection::ExpiredData);
}

#[test]
fn test_is_expired_old_timestamp() {
    assert!(is_expired(
        "2020-01-01 00:00:00",
        std::time::Duration::from_secs(300)
    ));
}

#[test]
fn test_is_expired_fresh_timestamp() {
    let now = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    assert!(!is_expired(&now, std::time::Duration::from_secs(300)));
}

#[test]
fn test_is_expired_malformed_timestamp() {
    assert!(is_expired("not-a-timestamp", std::time::Duration::from_secs(300)));
    assert!(is_expired("", std::time::Duration::from_secs(300)));
}

// ==================== Evaluator pipeline tests ====================

fn quote(venue: &str, price: &str) -> Quote {
    Quote {
        venue: venue.to_string(),
        symbol: CanonicalSymbol::new("USDT", "USD"),
        price: dec(price),
        volume_24h: dec("500000"),
        timestamp: Utc::now(),
    }
}

fn evaluator() -> Evaluator {
    Evaluator::new(EvaluatorOptions {
        capital: dec("1000"),
        ..EvaluatorOptions::default()
    })
}

fn usdt_table() -> NetworkFeeTable {
    fee_table()
}

#[test]
fn test_evaluate_accepts_wide_spread() {
    let cheap = quote("kucoin", "1.00");
    let rich = quote("binance", "1.05");
    let opp = evaluator()
        .evaluate(
            VenueSnapshot {
                quote: &cheap,
                book: None,
                taker_fee_pct: dec("0.1"),
            },
            VenueSnapshot {
                quote: &rich,
                book: None,
                taker_fee_pct: dec("0.1"),
            },
            &usdt_table(),
        )
        .unwrap();

    assert_eq!(opp.buy_venue, "kucoin");
    assert_eq!(opp.sell_venue, "binance");
    assert_eq!(opp.network, "TRC20");
    assert!(opp.net_profit > Decimal::ZERO);
}

#[test]
fn test_evaluate_direction_is_symmetric() {
    let cheap = quote("kucoin", "1.00");
    let rich = quote("binance", "1.05");
    let eval = evaluator();
    let a = VenueSnapshot {
        quote: &cheap,
        book: None,
        taker_fee_pct: dec("0.1"),
    };
    let b = VenueSnapshot {
        quote: &rich,
        book: None,
        taker_fee_pct: dec("0.1"),
    };
    let forward = eval.evaluate(a, b, &usdt_table()).unwrap();
    let reverse = eval.evaluate(b, a, &usdt_table()).unwrap();
    assert_eq!(forward.buy_venue, reverse.buy_venue);
    assert_eq!(forward.net_profit, reverse.net_profit);
}

#[test]
fn test_evaluate_zero_capital_is_structured_error() {
    // A zero capital must reject the candidate, never reach the profit
    // calculator's notional assert.
    let cheap = quote("kucoin", "1.00");
    let rich = quote("binance", "1.05");
    let eval = Evaluator::new(EvaluatorOptions {
        capital: Decimal::ZERO,
        ..EvaluatorOptions::default()
    });
    let err = eval
        .evaluate(
            VenueSnapshot {
                quote: &cheap,
                book: None,
                taker_fee_pct: dec("0.1"),
            },
            VenueSnapshot {
                quote: &rich,
                book: None,
                taker_fee_pct: dec("0.1"),
            },
            &usdt_table(),
        )
        .unwrap_err();
    assert_eq!(err, EvalError::InvalidCapital);
}

#[test]
fn test_evaluate_negative_capital_is_structured_error() {
    let cheap = quote("kucoin", "1.00");
    let rich = quote("binance", "1.05");
    let eval = Evaluator::new(EvaluatorOptions {
        capital: dec("-100"),
        ..EvaluatorOptions::default()
    });
    let err = eval
        .evaluate(
            VenueSnapshot {
                quote: &cheap,
                book: None,
                taker_fee_pct: dec("0.1"),
            },
            VenueSnapshot {
                quote: &rich,
                book: None,
                taker_fee_pct: dec("0.1"),
            },
            &usdt_table(),
        )
        .unwrap_err();
    assert_eq!(err, EvalError::InvalidCapital);
}

#[test]
fn test_evaluate_rejects_narrow_spread() {
    let a = quote("kucoin", "1.000");
    let b = quote("binance", "1.001");
    let err = evaluator()
        .evaluate(
            VenueSnapshot {
                quote: &a,
                book: None,
                taker_fee_pct: dec("0.1"),
            },
            VenueSnapshot {
                quote: &b,
                book: None,
                taker_fee_pct: dec("0.1"),
            },
            &usdt_table(),
        )
        .unwrap_err();
    assert_eq!(err, EvalError::SpreadTooNarrow);
}

#[test]
fn test_evaluate_rejects_low_volume() {
    let mut a = quote("kucoin", "1.00");
    a.volume_24h = dec("10");
    let b = quote("binance", "1.05");
    let err = evaluator()
        .evaluate(
            VenueSnapshot {
                quote: &a,
                book: None,
                taker_fee_pct: dec("0.1"),
            },
            VenueSnapshot {
                quote: &b,
                book: None,
                taker_fee_pct: dec("0.1"),
            },
            &usdt_table(),
        )
        .unwrap_err();
    assert!(matches!(err, EvalError::LowVolume { venue } if venue == "kucoin"));
}

#[test]
fn test_evaluate_rejects_mismatched_pairs() {
    let a = quote("kucoin", "1.00");
    let mut b = quote("binance", "1.05");
    b.symbol = CanonicalSymbol::new("BTC", "USDT");
    let err = evaluator()
        .evaluate(
            VenueSnapshot {
                quote: &a,
                book: None,
                taker_fee_pct: dec("0.1"),
            },
            VenueSnapshot {
                quote: &b,
                book: None,
                taker_fee_pct: dec("0.1"),
            },
            &usdt_table(),
        )
        .unwrap_err();
    assert!(matches!(err, EvalError::MismatchedPair(_, _)));
}

#[test]
fn test_evaluate_thin_book_rejects_candidate() {
    let cheap = quote("kucoin", "1.00");
    let rich = quote("binance", "1.05");
    // The buy book cannot fill capital / 1.00 = 1000 units.
    let thin = Orderbook {
        symbol: CanonicalSymbol::new("USDT", "USD"),
        venue: "kucoin".to_string(),
        bids: vec![],
        asks: vec![level("1.00", "10")],
        timestamp: Utc::now(),
    };
    let err = evaluator()
        .evaluate(
            VenueSnapshot {
                quote: &cheap,
                book: Some(&thin),
                taker_fee_pct: dec("0.1"),
            },
            VenueSnapshot {
                quote: &rich,
                book: None,
                taker_fee_pct: dec("0.1"),
            },
            &usdt_table(),
        )
        .unwrap_err();
    assert_eq!(err, EvalError::Slippage(SlippageError::InsufficientDepth));
}

#[test]
fn test_evaluate_prefers_book_over_heuristic() {
    let cheap = quote("kucoin", "1.00");
    let rich = quote("binance", "1.05");
    let deep = Orderbook {
        symbol: CanonicalSymbol::new("USDT", "USD"),
        venue: "kucoin".to_string(),
        bids: vec![],
        asks: vec![level("1.01", "100000")],
        timestamp: Utc::now(),
    };
    let opp = evaluator()
        .evaluate(
            VenueSnapshot {
                quote: &cheap,
                book: Some(&deep),
                taker_fee_pct: dec("0.1"),
            },
            VenueSnapshot {
                quote: &rich,
                book: None,
                taker_fee_pct: dec("0.1"),
            },
            &usdt_table(),
        )
        .unwrap();
    // The walked book price, not the heuristic-adjusted quote price.
    assert_eq!(opp.buy_price, dec("1.01"));
}

#[test]
fn test_evaluate_no_route_rejects() {
    let cheap = quote("kucoin", "1.00");
    let rich = quote("binance", "1.05");
    let err = evaluator()
        .evaluate(
            VenueSnapshot {
                quote: &cheap,
                book: None,
                taker_fee_pct: dec("0.1"),
            },
            VenueSnapshot {
                quote: &rich,
                book: None,
                taker_fee_pct: dec("0.1"),
            },
            &NetworkFeeTable::default(),
        )
        .unwrap_err();
    assert!(matches!(err, EvalError::Route(RouteError::NoCommonNetwork { .. })));
}
