//! Reusable form widgets
//!
//! Every field widget renders its own inline [`FieldError`] so callers only
//! pass the error they want shown.

mod button;
mod checkbox;
mod field_error;
mod input;
mod notice;
mod select;

pub use button::*;
pub use checkbox::*;
pub use field_error::*;
pub use input::*;
pub use notice::*;
pub use select::*;
