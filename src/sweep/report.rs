use crate::events::SweepTrigger;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Record of one sweep invocation: what ran, what it logged, what moved.
///
/// Purely observational — nothing reads a report back to make decisions. It
/// is returned from every entry point and, when diagnostics are enabled,
/// rendered into the run log.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
	pub id: Uuid,
	pub trigger: SweepTrigger,
	pub started_at: DateTime<Utc>,
	lines: Vec<String>,
	/// Files placed at their destination across the whole sweep
	pub moved: usize,
	/// Failures that were swallowed at the host boundary
	pub errors: Vec<String>,
}

impl SweepReport {
	pub fn new(trigger: SweepTrigger) -> Self {
		Self {
			id: Uuid::new_v4(),
			trigger,
			started_at: Utc::now(),
			lines: Vec::new(),
			moved: 0,
			errors: Vec::new(),
		}
	}

	/// Append one human-readable line.
	pub fn push(&mut self, line: impl Into<String>) {
		self.lines.push(line.into());
	}

	/// Record a failure; it also appears as a line, prefixed so it stands out
	/// in the run log.
	pub fn record_error(&mut self, error: impl Into<String>) {
		let error = error.into();
		self.lines.push(format!("!! {error}"));
		self.errors.push(error);
	}

	pub fn record_moved(&mut self, count: usize) {
		self.moved += count;
	}

	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	/// Render the report as one diagnostics entry.
	pub fn render(&self) -> String {
		let mut out = format!("==== sweep {} [{}] ====\n", self.id, self.trigger);
		for line in &self.lines {
			out.push_str(line);
			out.push('\n');
		}
		out.push_str(&format!("Total moved: {}", self.moved));
		out
	}

	pub fn to_json(&self) -> crate::Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}
