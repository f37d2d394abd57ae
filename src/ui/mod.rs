//! Terminal presentation: design tokens, capability detection, the
//! console event sink and plain-text renderers.

pub mod console;
pub mod icon;
pub mod render;
pub mod terminal;
pub mod theme;

pub use console::ConsoleEventSink;
pub use render::{render_config_source, render_config_warning, render_plan};
pub use terminal::{detect_capabilities, TerminalCapabilities};
