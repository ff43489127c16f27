mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations()
}

/// Canonical names of the built-in themes, in registration order.
pub fn names() -> Vec<String> {
	builtin_themes()
		.into_iter()
		.map(|registration| registration.name)
		.collect()
}

/// Look a theme up by canonical name or alias, case-insensitively.
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	builtin_themes()
		.into_iter()
		.find(|registration| {
			normalize_name(&registration.name) == wanted
				|| registration
					.aliases
					.iter()
					.any(|alias| normalize_name(alias) == wanted)
		})
		.map(|registration| registration.theme)
}

fn normalize_name(name: &str) -> String {
	name.trim().to_lowercase()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtins_are_registered() {
		let names = names();
		assert!(!names.is_empty());
		assert!(names.iter().any(|name| name == "slate"));
	}

	#[test]
	fn lookup_is_case_insensitive_and_alias_aware() {
		assert!(by_name("slate").is_some());
		assert!(by_name("  SLATE ").is_some());
		assert!(by_name("dark").is_some(), "alias lookup failed");
		assert!(by_name("no-such-theme").is_none());
	}
}
