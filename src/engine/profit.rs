//! Profit and ROI calculation.

use rust_decimal::Decimal;

/// Profit breakdown for one buy-transfer-sell round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfitBreakdown {
    /// Profit before any fees.
    pub gross_profit: Decimal,
    /// Trading fee paid on the buy leg.
    pub buy_fee: Decimal,
    /// Trading fee paid on the sell leg.
    pub sell_fee: Decimal,
    /// Profit after trading and withdrawal fees.
    pub net_profit: Decimal,
    /// Net profit as a percentage of the buy notional.
    pub roi_percent: Decimal,
}

/// Computes gross/net profit and ROI. Pure numeric transform.
///
/// Fee percentages are in percent (0.1 means 0.1%); the withdrawal fee is
/// an absolute amount in quote currency.
///
/// # Panics
///
/// Panics when `buy_price * quantity <= 0`. A zero or negative buy
/// notional makes ROI undefined and indicates a caller bug, not market
/// data noise.
pub fn compute(
    buy_price: Decimal,
    sell_price: Decimal,
    quantity: Decimal,
    buy_fee_pct: Decimal,
    sell_fee_pct: Decimal,
    withdrawal_fee: Decimal,
) -> ProfitBreakdown {
    let buy_notional = buy_price * quantity;
    assert!(
        buy_notional > Decimal::ZERO,
        "buy notional must be positive, got {buy_notional}"
    );

    let hundred = Decimal::ONE_HUNDRED;
    let sell_notional = sell_price * quantity;

    let buy_fee = buy_notional * buy_fee_pct / hundred;
    let sell_fee = sell_notional * sell_fee_pct / hundred;

    let gross_profit = sell_notional - buy_notional;
    let net_profit = gross_profit - buy_fee - sell_fee - withdrawal_fee;
    let roi_percent = net_profit / buy_notional * hundred;

    ProfitBreakdown {
        gross_profit,
        buy_fee,
        sell_fee,
        net_profit,
        roi_percent,
    }
}
