use anyhow::Result;
use serde_json::json;
use uglys_core::ExploreOutcome;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &ExploreOutcome) {
	println!("{}", format_plain(outcome));
}

/// Format the session outcome as plain text. The glyph goes through
/// the control-character stand-in so a selection like U+0007 cannot
/// write raw control bytes to the restored terminal.
fn format_plain(outcome: &ExploreOutcome) -> String {
	if !outcome.accepted {
		return format!("Cancelled (query: '{}')", outcome.query);
	}

	match &outcome.selection {
		Some(selection) => {
			let name = selection.info.name.as_deref().unwrap_or("<unnamed>");
			let mut text = format!(
				"{} {} {}",
				selection.info.hex_label(),
				selection.info.printable_display(),
				name
			);
			if !selection.fonts.is_empty() {
				text.push_str(&format!("\nfonts: {}", selection.fonts.join(", ")));
			}
			text
		}
		None => "No selection".to_string(),
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &ExploreOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": outcome.selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &ExploreOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;
	use uglys_core::{CharInfo, Selection};

	use super::*;

	#[test]
	fn json_format_flattens_the_character_properties() {
		let outcome = ExploreOutcome {
			accepted: true,
			query: "star".into(),
			selection: Some(Selection {
				info: CharInfo::lookup(0x2605),
				fonts: vec!["DejaVu Sans".into()],
			}),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["query"], "star");
		assert_eq!(value["selection"]["code_point"], 0x2605);
		assert_eq!(value["selection"]["name"], "BLACK STAR");
		assert_eq!(value["selection"]["fonts"][0], "DejaVu Sans");
	}

	#[test]
	fn plain_format_substitutes_control_glyphs() {
		let outcome = ExploreOutcome {
			accepted: true,
			query: String::new(),
			selection: Some(Selection {
				info: CharInfo::lookup(0x07),
				fonts: Vec::new(),
			}),
		};

		let text = format_plain(&outcome);
		assert!(text.contains("U+0007"));
		assert!(text.contains("(control)"));
		assert!(!text.contains('\u{7}'), "raw BEL must never reach stdout");
	}

	#[test]
	fn plain_format_lists_the_covering_fonts() {
		let outcome = ExploreOutcome {
			accepted: true,
			query: "star".into(),
			selection: Some(Selection {
				info: CharInfo::lookup(0x2605),
				fonts: vec!["DejaVu Sans".into(), "Noto Sans".into()],
			}),
		};

		let text = format_plain(&outcome);
		assert!(text.starts_with("U+2605 ★ BLACK STAR"));
		assert!(text.ends_with("fonts: DejaVu Sans, Noto Sans"));
	}

	#[test]
	fn json_format_keeps_a_null_selection_on_cancel() {
		let outcome = ExploreOutcome {
			accepted: false,
			query: String::new(),
			selection: None,
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], false);
		assert!(value["selection"].is_null());
	}
}
