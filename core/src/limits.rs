//! Round limits to stop a stalled round from looping forever.
//!
//! Two rosters whose living units all have zero attack never lose a unit, so
//! the alternating exchange loop needs a hard cap.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LimitReason {
    ExchangeCap { max: u32 },
}

/// Tracks exchanges within a single round
#[derive(Debug, Clone)]
pub struct RoundLimits {
    pub max_exchanges: u32,
    pub exchanges: u32,
}

impl RoundLimits {
    pub fn new(max_exchanges: u32) -> Self {
        Self {
            max_exchanges,
            exchanges: 0,
        }
    }

    /// Count one more exchange, failing once the cap is already reached.
    pub fn record_exchange(&mut self) -> Result<(), LimitReason> {
        if self.exchanges >= self.max_exchanges {
            return Err(LimitReason::ExchangeCap {
                max: self.max_exchanges,
            });
        }
        self.exchanges += 1;
        Ok(())
    }
}
