//! The unified policy facade.

use finpolicy_fees::{FeeParams, FeeRate, LiquidityFeeModel};
use finpolicy_timelock::{Decision, TimelockGate, TimelockPolicy};
use finpolicy_types::{Millis, PolicyError, Timestamp};
use finpolicy_utils::format_duration_ms;
use finpolicy_utils::spans::{fee_rate_span, timelock_span};

use crate::config::PolicyConfig;
use crate::CoreError;

/// Timelock gate and fee model under one configuration.
///
/// Stateless after construction: calls never mutate `self`, so a single
/// instance can serve any number of threads without locking.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FinancialPolicyCore {
    gate: TimelockGate<Millis>,
    fees: LiquidityFeeModel,
}

impl FinancialPolicyCore {
    pub fn new(timelock: TimelockPolicy<Millis>, fees: FeeParams) -> Self {
        Self {
            gate: TimelockGate::new(timelock),
            fees: LiquidityFeeModel::new(fees),
        }
    }

    pub fn from_config(config: &PolicyConfig) -> Result<Self, CoreError> {
        let core = Self::new(config.timelock_policy()?, config.fee_params()?);
        tracing::info!(
            delay = %format_duration_ms(core.gate.policy().delay().as_millis()),
            multiplier = core.fees.params().multiplier(),
            floor = core.fees.params().floor(),
            direction = ?core.fees.params().direction(),
            "policy core configured"
        );
        Ok(core)
    }

    pub fn gate(&self) -> &TimelockGate<Millis> {
        &self.gate
    }

    pub fn fee_model(&self) -> &LiquidityFeeModel {
        &self.fees
    }

    /// May a proposal created at `creation` execute at `current`?
    pub fn may_execute(
        &self,
        creation: Timestamp,
        current: Timestamp,
    ) -> Result<Decision<Millis>, PolicyError> {
        let _span = timelock_span(creation.as_millis(), current.as_millis()).entered();
        let decision = self.gate.may_execute(creation, current).inspect_err(|e| {
            tracing::debug!(error = %e, "timelock input rejected");
        })?;
        if let Decision::Blocked { remaining, .. } = decision {
            tracing::debug!(wait = %format_duration_ms(remaining.as_millis()), "timelock blocked");
        }
        Ok(decision)
    }

    /// Fee rate for routing through a channel with the given readings.
    pub fn fee_rate(&self, capacity: f64, liquidity: f64) -> Result<FeeRate, PolicyError> {
        let _span = fee_rate_span(capacity, liquidity).entered();
        self.fees.fee_rate(capacity, liquidity)
    }
}
