//! Generic input event types for cross-host compatibility.

/// Generic key representation for cross-host compatibility.
///
/// Host implementations map their native key codes to these generic
/// key values for unified input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Parses a key description as used in the config file and event traces.
    ///
    /// Single characters map to [`Key::Char`]; a few names are recognized
    /// case-insensitively ("escape", "return"/"enter", "backspace").
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Key::Char(c));
        }
        match s.to_lowercase().as_str() {
            "escape" | "esc" => Some(Key::Escape),
            "return" | "enter" => Some(Key::Return),
            "backspace" => Some(Key::Backspace),
            _ => None,
        }
    }

    /// Case-insensitive key comparison; character keys match regardless of
    /// shift state, mirroring key-code matching in the host environment.
    pub fn matches(&self, other: &Key) -> bool {
        match (self, other) {
            (Key::Char(a), Key::Char(b)) => a.eq_ignore_ascii_case(b),
            _ => self == other,
        }
    }
}

/// An event dispatched by the host environment.
///
/// Pointer events carry absolute host coordinates; the widget resolves them
/// against the surface's layout rect. Handlers run one at a time to
/// completion (the host's dispatch loop is single-threaded), which is the
/// only concurrency discipline the widget relies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Pointer button pressed.
    PointerDown { x: f64, y: f64 },
    /// Pointer moved (dispatched regardless of button state).
    PointerMove { x: f64, y: f64 },
    /// Pointer button released. Coordinates are reported by hosts but the
    /// pad does not consume them.
    PointerUp { x: f64, y: f64 },
    /// Key pressed.
    KeyDown(Key),
    /// The host viewport was resized.
    Resized,
}
