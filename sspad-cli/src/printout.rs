//! Plain-text rendering of a pad set.

use sspad_core::render::format_codes;
use sspad_core::request::PadBundle;

const INSTRUCTIONS: [&str; 3] = [
    "1. Find another pad with the same pad number but a different letter.",
    "2. Add each code listed next to that pad's letter to the matching code on the other pad.",
    "3. Read the last three digits of each sum as an ASCII code. Stop at 000; the rest only hides the length.",
];

/// Renders every pad of `bundle`, one block per letter.
pub(crate) fn render_bundle(bundle: &PadBundle) -> String {
    let mut lines = vec![bundle.title(), String::new()];

    for pad in bundle.pad_set.pads() {
        let colour = bundle.colour(pad.letter).unwrap_or_default();
        lines.push(format!(
            "==== Secret Sharing Pad {} {} [{colour}] ====",
            bundle.pad_set_number, pad.letter
        ));
        if !bundle.description.is_empty() {
            lines.push(bundle.description.clone());
        }
        lines.extend(INSTRUCTIONS.iter().map(|s| (*s).to_string()));
        lines.push(String::new());

        for (number, entry) in pad.entries.iter().enumerate() {
            lines.push(format!("Secret {}: {}", number + 1, entry.name));
            if !entry.description.is_empty() {
                lines.push(format!("  {}", entry.description));
            }
            for share in &entry.shares {
                lines.push(format!("  {}: {}", share.partner, format_codes(&share.codes)));
            }
            lines.push(String::new());
        }
    }

    lines.join("\n")
}
