//! Clock control

use super::vm::Vm;
use solana_clock::Clock;

pub trait StateManager {
    /// Move the clock sysvar forward by `seconds`
    fn warp_time(&mut self, seconds: i64);

    fn timestamp(&self) -> i64;
}

impl StateManager for Vm {
    fn warp_time(&mut self, seconds: i64) {
        let mut clock = self.svm.get_sysvar::<Clock>();
        clock.unix_timestamp += seconds;
        self.svm.set_sysvar::<Clock>(&clock);
    }

    fn timestamp(&self) -> i64 {
        self.svm.get_sysvar::<Clock>().unix_timestamp
    }
}

impl Vm {
    pub fn warp_days(&mut self, days: i64) {
        self.warp_time(days * crate::prelude::time::DAY);
    }
}
