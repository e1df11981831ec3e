//! Text rendering for documentation entries
//!
//! Turns a resolved documentation node into a block of text for the terminal:
//! header, identity fields, signatures, column lists of member names and a
//! plain-text description. Styling goes through [`Palette`] so it can be
//! switched off.

pub mod columns;
pub mod info;
pub mod node;
pub mod render;
pub mod style;
pub mod text;

pub use columns::columnize;
pub use info::{prog_info, summary, ProgInfo};
pub use node::{Attribute, DocNode, RenderError, RuntimeObject, StructuredNode};
pub use render::{render, RenderContext};
pub use style::Palette;
