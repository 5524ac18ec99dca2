//! Ayu color theme and styling for kaneo CLI output.
//!
//! Design principles:
//! - Only states that need attention get color (urgent/high, overdue, unread)
//! - Every lookup is an exhaustive match over a domain enum; the `Custom`
//!   arm is the explicit fallback for values the API invents later
//! - Small Unicode symbols for icons, not emoji

use kaneo_core::enums::{Priority, ResourceType, Status};
use kaneo_core::urgency::Urgency;
use owo_colors::OwoColorize;

use crate::terminal::supports_color;

/// An RGB triple.
pub type Rgb = (u8, u8, u8);

// ---------------------------------------------------------------------------
// Ayu Dark color palette
// ---------------------------------------------------------------------------

const PASS: Rgb = (0xc2, 0xd9, 0x4c); // #c2d94c - green
const WARN: Rgb = (0xff, 0xb4, 0x54); // #ffb454 - yellow
const FAIL: Rgb = (0xf0, 0x71, 0x78); // #f07178 - red
const MUTED: Rgb = (0x6c, 0x76, 0x80); // #6c7680 - gray
const ACCENT: Rgb = (0x59, 0xc2, 0xff); // #59c2ff - blue
const ORANGE: Rgb = (0xff, 0x8f, 0x40); // #ff8f40
const GOLD: Rgb = (0xe6, 0xb4, 0x50); // #e6b450
const PURPLE: Rgb = (0xd2, 0xa6, 0xff); // #d2a6ff
const DIMMED: Rgb = (0x80, 0x90, 0xa0); // #8090a0

// ---------------------------------------------------------------------------
// Icons
// ---------------------------------------------------------------------------

pub const ICON_UNKNOWN: &str = "?";
pub const ICON_PASS: &str = "\u{2713}"; // ✓
pub const ICON_WARN: &str = "\u{26A0}"; // ⚠
pub const ICON_UNREAD: &str = "\u{25CF}"; // ●
pub const ICON_READ: &str = "\u{25CB}"; // ○

pub const SEPARATOR_LIGHT: &str = "\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}";

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

pub fn priority_icon(priority: &Priority) -> &'static str {
    match priority {
        Priority::Urgent => "\u{203C}", // ‼
        Priority::High => "\u{25B2}",   // ▲
        Priority::Medium => "\u{25C6}", // ◆
        Priority::Low => "\u{25BC}",    // ▼
        Priority::NoPriority => "\u{2013}", // –
        Priority::Custom(_) => ICON_UNKNOWN,
    }
}

/// `None` means standard text.
pub fn priority_color(priority: &Priority) -> Option<Rgb> {
    match priority {
        Priority::Urgent => Some(FAIL),
        Priority::High => Some(ORANGE),
        Priority::Medium => Some(GOLD),
        Priority::Low => Some(MUTED),
        Priority::NoPriority => None,
        Priority::Custom(_) => Some(MUTED),
    }
}

pub fn status_icon(status: &Status) -> &'static str {
    match status {
        Status::Backlog => "\u{25CC}",    // ◌
        Status::ToDo => "\u{25CB}",       // ○
        Status::InProgress => "\u{25D0}", // ◐
        Status::InReview => "\u{25D1}",   // ◑
        Status::Done => "\u{2713}",       // ✓
        Status::Custom(_) => ICON_UNKNOWN,
    }
}

pub fn status_color(status: &Status) -> Option<Rgb> {
    match status {
        Status::Backlog => Some(MUTED),
        Status::ToDo => None,
        Status::InProgress => Some(WARN),
        Status::InReview => Some(PURPLE),
        Status::Done => Some(DIMMED),
        Status::Custom(_) => None,
    }
}

pub fn urgency_color(urgency: Urgency) -> Rgb {
    match urgency {
        Urgency::Overdue => FAIL,
        Urgency::DueSoon => WARN,
        Urgency::Upcoming => PASS,
    }
}

pub fn resource_icon(resource: &ResourceType) -> &'static str {
    match resource {
        ResourceType::Task => "\u{2610}",         // ☐
        ResourceType::Project => "\u{25A3}",      // ▣
        ResourceType::Organization => "\u{2302}", // ⌂
        ResourceType::Workspace => "\u{25A6}",    // ▦
        ResourceType::Custom(_) => ICON_UNKNOWN,
    }
}

// ---------------------------------------------------------------------------
// Helper: apply truecolor only when color is supported
// ---------------------------------------------------------------------------

fn color_str(s: &str, rgb: Rgb) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

fn color_bold_str(s: &str, rgb: Rgb) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string()
    } else {
        s.to_string()
    }
}

fn maybe_color(s: &str, rgb: Option<Rgb>) -> String {
    match rgb {
        Some(rgb) => color_str(s, rgb),
        None => s.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Render helpers
// ---------------------------------------------------------------------------

pub fn render_muted(s: &str) -> String {
    color_str(s, MUTED)
}

pub fn render_accent(s: &str) -> String {
    color_str(s, ACCENT)
}

pub fn render_bold(s: &str) -> String {
    if supports_color() {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

/// Renders a section header (column name, etc.) in bold accent.
pub fn render_header(s: &str) -> String {
    color_bold_str(s, ACCENT)
}

pub fn render_separator() -> String {
    render_muted(SEPARATOR_LIGHT)
}

pub fn render_warn_icon() -> String {
    color_str(ICON_WARN, WARN)
}

pub fn render_pass_icon() -> String {
    color_str(ICON_PASS, PASS)
}

/// Format: `{icon} {label}`; urgent is bold.
pub fn render_priority(priority: &Priority) -> String {
    let label = format!("{} {}", priority_icon(priority), priority.label());
    match (priority, priority_color(priority)) {
        (Priority::Urgent, Some(rgb)) => color_bold_str(&label, rgb),
        (_, rgb) => maybe_color(&label, rgb),
    }
}

/// Just the colored priority icon, for dense rows.
pub fn render_priority_icon(priority: &Priority) -> String {
    maybe_color(priority_icon(priority), priority_color(priority))
}

/// Format: `{icon} {status}`.
pub fn render_status(status: &Status) -> String {
    let label = format!("{} {}", status_icon(status), status.as_str());
    maybe_color(&label, status_color(status))
}

/// Colors `text` by how urgent the due date is.
pub fn render_urgency(text: &str, urgency: Urgency) -> String {
    match urgency {
        Urgency::Overdue => color_bold_str(text, urgency_color(urgency)),
        _ => color_str(text, urgency_color(urgency)),
    }
}

/// Unread notifications get a filled accent dot; read ones a muted ring.
pub fn render_read_marker(is_read: bool) -> String {
    if is_read {
        render_muted(ICON_READ)
    } else {
        render_accent(ICON_UNREAD)
    }
}
