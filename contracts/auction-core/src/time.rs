use soroban_sdk::Env;

use crate::types::TimeBasis;

/// Current time in the deployment's basis.
pub fn now(e: &Env, basis: TimeBasis) -> u64 {
    match basis {
        TimeBasis::Timestamp => e.ledger().timestamp(),
        TimeBasis::LedgerSequence => e.ledger().sequence() as u64,
    }
}
