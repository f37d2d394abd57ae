//! Plain-text rendering for dry runs and config warnings

use std::fmt::Write as _;
use std::path::Path;

use crate::application::ScaffoldPlan;
use crate::config::ConfigWarning;
use crate::ui::icon::Icon;
use crate::ui::terminal::TerminalCapabilities;

/// Render a dry-run plan. Paths are shown relative to the project root.
pub fn render_plan(plan: &ScaffoldPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Plan for '{}' in {}",
        plan.project,
        plan.root.display()
    );

    for phase in &plan.phases {
        let _ = writeln!(out, "  {}", phase.manifest.phase());
        for entry in phase.manifest.entries() {
            let suffix = if entry.is_directory() { "/" } else { "" };
            let _ = writeln!(out, "    + {}{}", entry.relative_path(), suffix);
        }
        if let Some(command) = &phase.command {
            let _ = writeln!(out, "    $ {}", command.command_line());
        }
    }

    let _ = write!(
        out,
        "{} entries (dry run, nothing created)",
        plan.entry_count()
    );
    out
}

/// Debug line naming where configuration was read from
pub fn render_config_source(source: Option<&Path>) -> String {
    match source {
        Some(path) => format!("config: {}", path.display()),
        None => "config: built-in defaults".to_string(),
    }
}

pub fn render_config_warning(warning: &ConfigWarning, caps: TerminalCapabilities) -> String {
    format!(
        "{} {}",
        Icon::Warning.colored(caps.supports_color, caps.supports_unicode),
        warning
    )
}
