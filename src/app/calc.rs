use log::warn;
use rust_decimal::Decimal;

use crate::models::{HoldingStat, PortfolioItem, PortfolioTotals};

/// Values one holding at `current_price`.
///
/// A missing price leaves every price-derived figure unknown rather than
/// zero. The percentage is unknown for a zero cost basis as well.
///
/// Figures that do not fit in a `Decimal` are unknown too; the cost basis,
/// which cannot be unknown, saturates instead.
pub fn valuate(item: &PortfolioItem, current_price: Option<Decimal>) -> HoldingStat {
    let quantity = Decimal::from(*item.quantity());
    let exact_cost_basis = quantity.checked_mul(*item.average_buy_price());
    let cost_basis = exact_cost_basis.unwrap_or_else(|| {
        warn!("Cost basis of {} overflows, saturating", item.symbol());
        quantity.saturating_mul(*item.average_buy_price())
    });

    let Some(price) = current_price else {
        return HoldingStat::new(item.clone(), cost_basis, None, None, None, None);
    };

    let current_value = quantity.checked_mul(price);
    let gain_loss = current_value
        .zip(exact_cost_basis)
        .and_then(|(value, cost)| value.checked_sub(cost));
    let gain_loss_pct = gain_loss.and_then(|gain_loss| percent_of(gain_loss, cost_basis));

    HoldingStat::new(
        item.clone(),
        cost_basis,
        Some(price),
        current_value,
        gain_loss,
        gain_loss_pct,
    )
}

/// Folds holding valuations into portfolio totals.
///
/// Unpriced holdings add nothing to the current value but still count
/// towards the cost basis, so the gain/loss of a partially priced portfolio
/// is measured against everything at stake. Sums saturate at the `Decimal`
/// range; the total gain/loss is unknown once a sum saturates or a priced
/// holding has no gain/loss of its own.
pub fn aggregate(stats: &[HoldingStat]) -> PortfolioTotals {
    let mut total_cost_basis = Some(Decimal::ZERO);
    let mut total_current_value = Some(Decimal::ZERO);
    let mut has_any_price = false;
    let mut overflowed = false;

    for stat in stats {
        total_cost_basis = total_cost_basis.and_then(|sum| sum.checked_add(*stat.cost_basis()));
        total_current_value = total_current_value
            .and_then(|sum| sum.checked_add((*stat.current_value()).unwrap_or(Decimal::ZERO)));
        has_any_price |= stat.is_priced();
        overflowed |= stat.is_priced() && stat.gain_loss().is_none();
    }

    let total_gain_loss = match (total_cost_basis, total_current_value) {
        (Some(cost), Some(value)) if has_any_price && !overflowed && cost != Decimal::ZERO => {
            value.checked_sub(cost)
        }
        _ => None,
    };
    let total_gain_loss_pct = total_gain_loss.and_then(|gain_loss| {
        total_cost_basis.and_then(|cost| percent_of(gain_loss, cost))
    });

    PortfolioTotals::new(
        total_cost_basis.unwrap_or_else(|| saturated_sum(stats.iter().map(|s| *s.cost_basis()))),
        total_current_value.unwrap_or_else(|| {
            saturated_sum(stats.iter().filter_map(|s| *s.current_value()))
        }),
        total_gain_loss,
        total_gain_loss_pct,
        has_any_price,
    )
}

fn percent_of(amount: Decimal, base: Decimal) -> Option<Decimal> {
    if base > Decimal::ZERO {
        amount
            .checked_div(base)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
    } else {
        None
    }
}

fn saturated_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, |sum, value| sum.saturating_add(value))
}
