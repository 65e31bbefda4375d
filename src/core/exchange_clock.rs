use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::config::Config;

/// Wall clock of the exchange the journal trades on. The evaluation instant is always
/// passed in so every gate stays reproducible.
#[derive(Debug, Clone, Copy)]
pub struct ExchangeClock {
    tz: Tz,
    cutoff: NaiveTime,
}

impl ExchangeClock {
    pub fn new(cfg: &Config) -> Self {
        Self {
            tz: cfg.exchange_timezone,
            cutoff: cfg.kill_switch_cutoff,
        }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Minutes since exchange-local midnight.
    pub fn local_minutes(&self, utc_now: DateTime<Utc>) -> u32 {
        let local = utc_now.with_timezone(&self.tz);
        local.hour() * 60 + local.minute()
    }

    pub fn trading_date(&self, utc_now: DateTime<Utc>) -> NaiveDate {
        utc_now.with_timezone(&self.tz).date_naive()
    }

    /// True once exchange-local time reaches the kill-switch cutoff.
    pub fn is_past_cutoff(&self, utc_now: DateTime<Utc>) -> bool {
        utc_now.with_timezone(&self.tz).time() >= self.cutoff
    }
}
