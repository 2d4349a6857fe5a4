//! Income record model
//!
//! Income is an append-only log: entering income again adds a new row, and
//! the current income is whichever row was inserted last.

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::ids::IncomeId;

/// One historical entry of the user's declared income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub id: IncomeId,
    pub amount: Amount,
}

impl IncomeRecord {
    pub fn new(id: IncomeId, amount: Amount) -> Self {
        Self { id, amount }
    }
}
