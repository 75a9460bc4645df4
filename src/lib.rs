//! svg-keyframes turns a tiny show/hide/wait script into a self-animating SVG.
//!
//! # Pipeline overview
//!
//! 1. **Tokenize**: script text `-> Script` (ordered [`Instruction`]s)
//! 2. **Compile**: instructions `-> Timeline` (per-object opacity keyframes on a shared clock)
//! 3. **Emit**: `Timeline -> <style>` block (`animation` rule + `@keyframes` per object)
//! 4. **Inject**: the style block is placed right after the root `<svg ...>` tag
//!
//! Every stage is pure; file IO lives only in [`animate_files`].
//!
//! ```
//! let svg = r#"<svg><rect id="cell-a"/></svg>"#;
//! let out = svg_keyframes::animate_svg(svg, "show a\nwait 1000\n", &Default::default()).unwrap();
//! assert!(out.svg.contains("@keyframes anim0"));
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod css;
mod foundation;
mod pipeline;
mod script;
mod timeline;

pub use css::emit::{
    animation_name, css_escape_ident, format_number, render_css, render_style_block,
};
pub use css::inject::{inject_style, insertion_point};
pub use foundation::error::{KeyframeError, KeyframeResult};
pub use foundation::options::{
    AnimateOptions, DEFAULT_ANIMATION_PREFIX, DEFAULT_ID_PREFIX, DEFAULT_PRECISION,
    DEFAULT_STEP_MS, ParseMode,
};
pub use pipeline::{Animated, animate_files, animate_svg, ensure_parent_dir};
pub use script::instruction::Instruction;
pub use script::tokenizer::{ParseIssue, Script, tokenize};
pub use timeline::compiler::{Keyframe, STAGE_MAX, STAGE_MIN, Timeline, compile};
