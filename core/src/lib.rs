//! The financial policy core.
//!
//! A deterministic, side-effect-free decision layer that a wallet, channel
//! manager or governance executor consults before acting:
//! - [`FinancialPolicyCore::may_execute`]: has a proposal's timelock elapsed?
//! - [`FinancialPolicyCore::fee_rate`]: what should routing through a channel cost?
//!
//! Both are pure over explicit inputs. No clock, storage or network is
//! touched; callers sample those themselves and pass the readings in.

pub mod config;
pub mod engine;
pub mod error;

pub use config::{FeeSection, LoggingSection, PolicyConfig, TimelockSection};
pub use engine::FinancialPolicyCore;
pub use error::CoreError;

pub use finpolicy_fees::{fee_rate, FeeDirection, FeeParams, FeeRate, LiquidityFeeModel};
pub use finpolicy_timelock::{may_execute, Decision, TimelockGate, TimelockPolicy};
pub use finpolicy_types::{Delay, PolicyError, Timestamp};
