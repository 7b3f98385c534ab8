use crate::error::{Result, TacoError};

/// Absorbs binary float error when scaling decimals to cents (e.g. 1.99 * 100).
const CENT_TOLERANCE: f64 = 1e-6;

const CENTS_PER_UNIT: f64 = 100.0;

/// Price in whole cents, rounded up so the model never underestimates cost.
pub fn price_to_cents(price: f64) -> Result<i64> {
    let scaled = checked_scale(price, "price")?;
    Ok((scaled - CENT_TOLERANCE).ceil() as i64)
}

/// Budget in whole cents, rounded down so the model never overspends.
pub fn budget_to_cents(budget: f64) -> Result<i64> {
    let scaled = checked_scale(budget, "budget")?;
    Ok((scaled + CENT_TOLERANCE).floor() as i64)
}

fn checked_scale(value: f64, what: &str) -> Result<f64> {
    let scaled = value * CENTS_PER_UNIT;
    if !scaled.is_finite() || scaled.abs() > i64::MAX as f64 {
        return Err(TacoError::InvalidInput(format!(
            "{} is not a representable amount: {}",
            what, value
        )));
    }
    Ok(scaled)
}
