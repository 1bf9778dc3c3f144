//! Renderable snapshot of the countdown

use serde::Serialize;

use crate::domain::{ExtendOption, EXTEND_OPTIONS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    /// Replaces the whole surface once an extension fails.
    Error { message: String },
    Countdown {
        display: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        dialog: Option<ExtendDialog>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtendDialog {
    pub title: String,
    pub offers: Vec<OfferView>,
    pub cancel_label: String,
}

impl ExtendDialog {
    pub fn standard() -> Self {
        Self {
            title: "Extend Call Duration".to_string(),
            offers: EXTEND_OPTIONS.iter().map(OfferView::from).collect(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferView {
    pub seconds: i64,
    pub headline: String,
    pub unit: String,
    pub cost: String,
}

impl From<&ExtendOption> for OfferView {
    fn from(option: &ExtendOption) -> Self {
        Self {
            seconds: option.seconds,
            headline: option.headline(),
            unit: "Minutes".to_string(),
            cost: option.cost_label(),
        }
    }
}
