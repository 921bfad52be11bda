//! Color constants
//!
//! Mirrors the custom properties declared at the top of the stylesheet.

#![allow(dead_code)]

// === BACKDROP ===
pub const PAGE_BLUE: &str = "#3b82f6";
pub const CARD_WHITE: &str = "#ffffff";
pub const CARD_SHADOW: &str = "#020617";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#000000";
pub const TEXT_MUTED: &str = "#4b5563";

// === FIELDS ===
pub const FIELD_BORDER: &str = "#e5e7eb";
pub const FIELD_FOCUS: &str = "#93c5fd";

// === SEMANTIC ===
pub const SUCCESS: &str = "#22c55e";
pub const DANGER: &str = "#ef4444";

/// Every palette entry with its custom property name
pub const PALETTE: [(&str, &str); 9] = [
    ("--page-blue", PAGE_BLUE),
    ("--card-white", CARD_WHITE),
    ("--card-shadow", CARD_SHADOW),
    ("--text-primary", TEXT_PRIMARY),
    ("--text-muted", TEXT_MUTED),
    ("--field-border", FIELD_BORDER),
    ("--field-focus", FIELD_FOCUS),
    ("--success", SUCCESS),
    ("--danger", DANGER),
];
