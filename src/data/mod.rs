//! Font data: the glyph model and its SFD representation

pub mod font;
pub mod sfd;

pub use font::{build_font, Font, Glyph, GlyphAccumulator, GlyphId};
