// src/common/math.rs

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Arredonda um percentual para o inteiro mais próximo (meio para cima,
/// como o painel exibe os percentuais).
pub fn round_pct(value: Decimal) -> i32 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
        .unwrap_or(0)
}

/// Limita um percentual ao intervalo [0, 100].
pub fn clamp_pct(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}
