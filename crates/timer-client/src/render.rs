//! Plain-text rendering of countdown views, for terminals and logs

use timer_core::countdown::View;

pub fn render_text(view: &View) -> String {
    match view {
        View::Error { message } => message.clone(),
        View::Countdown { display, dialog } => {
            let mut out = format!("{}  [Extend Time]", display);
            if let Some(dialog) = dialog {
                out.push_str(&format!("\n== {} ==", dialog.title));
                for (index, offer) in dialog.offers.iter().enumerate() {
                    out.push_str(&format!(
                        "\n  [{}] {} {} ({})",
                        index + 1,
                        offer.headline,
                        offer.unit,
                        offer.cost
                    ));
                }
                out.push_str(&format!("\n  [{}]", dialog.cancel_label));
            }
            out
        }
    }
}
