//! Catalog of paid time extensions

use serde::Serialize;

/// A purchasable block of extra time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtendOption {
    pub seconds: i64,
    pub credits: u32,
}

/// Offers in display order.
pub const EXTEND_OPTIONS: [ExtendOption; 3] = [
    ExtendOption { seconds: 300, credits: 1 },
    ExtendOption { seconds: 600, credits: 2 },
    ExtendOption { seconds: 900, credits: 3 },
];

impl ExtendOption {
    pub fn find(seconds: i64) -> Option<&'static ExtendOption> {
        EXTEND_OPTIONS.iter().find(|option| option.seconds == seconds)
    }

    pub fn minutes(&self) -> i64 {
        self.seconds / 60
    }

    /// "+ 5"
    pub fn headline(&self) -> String {
        format!("+ {}", self.minutes())
    }

    /// "-1 credit", "-2 credits"
    pub fn cost_label(&self) -> String {
        let suffix = if self.credits > 1 { "s" } else { "" };
        format!("-{} credit{}", self.credits, suffix)
    }
}
