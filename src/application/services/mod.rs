pub mod charge_calculator;
pub mod shared_calculator;

pub use charge_calculator::ChargeCalculator;
pub use shared_calculator::{SharedCalculator, SharedChargeCalculator};
