pub fn render_schema() -> String {
	let init = include_str!("../../../sql/init.sql");

	expand_includes(init)
}

fn expand_includes(sql: &str) -> String {
	let mut out = String::new();

	for line in sql.lines() {
		let trimmed = line.trim();

		if let Some(path) = trimmed.strip_prefix("\\ir ") {
			match path.trim() {
				"00_extensions.sql" => out.push_str(include_str!("../../../sql/00_extensions.sql")),
				"tables/001_participants.sql" =>
					out.push_str(include_str!("../../../sql/tables/001_participants.sql")),
				"tables/002_items.sql" =>
					out.push_str(include_str!("../../../sql/tables/002_items.sql")),
				"tables/003_events.sql" =>
					out.push_str(include_str!("../../../sql/tables/003_events.sql")),
				"tables/004_glossary_terms.sql" =>
					out.push_str(include_str!("../../../sql/tables/004_glossary_terms.sql")),
				"tables/005_instruments.sql" =>
					out.push_str(include_str!("../../../sql/tables/005_instruments.sql")),
				"tables/006_uniform_items.sql" =>
					out.push_str(include_str!("../../../sql/tables/006_uniform_items.sql")),
				"tables/007_hierarchy_roles.sql" =>
					out.push_str(include_str!("../../../sql/tables/007_hierarchy_roles.sql")),
				_ => out.push_str(line),
			}
		} else {
			out.push_str(line);
		}

		out.push('\n');
	}

	out
}
