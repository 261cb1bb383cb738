/// Collapses the upstream absence encodings (NULL, `""`, `"-"`, `"NaN"`)
/// into one representation.
pub fn clean_label(value: Option<&str>) -> Option<&str> {
	value.filter(|value| !matches!(*value, "" | "-" | "NaN"))
}

/// Display order for a lot's tender participants: the winner first when
/// known, then the participant slots in slot order. A slot equal to the
/// winner is skipped; duplicates between slots are kept as recorded.
pub fn order_participants(winner: Option<&str>, slots: &[Option<&str>]) -> Vec<String> {
	let winner = clean_label(winner);
	let mut out = Vec::new();

	if let Some(winner) = winner {
		out.push(winner.to_string());
	}
	for slot in slots {
		let Some(label) = clean_label(*slot) else {
			continue;
		};

		if winner == Some(label) {
			continue;
		}

		out.push(label.to_string());
	}

	out
}
