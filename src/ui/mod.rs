//! Terminal rendering
//!
//! Layered bottom-up: `theme` tokens, `primitives` (icons, colored text),
//! `widgets` (boxes), `blocks` (headers, check lines, summaries), then
//! `views` that render a whole command's output.

pub mod blocks;
pub mod components;
pub mod context;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
