use std::path::Path;

use crate::{
    css::{emit::render_style_block, inject::inject_style},
    foundation::error::{KeyframeError, KeyframeResult},
    foundation::options::AnimateOptions,
    script::tokenizer::{ParseIssue, tokenize},
    timeline::compiler::{Timeline, compile},
};

/// Result of running the whole pipeline on one document.
#[derive(Clone, Debug)]
pub struct Animated {
    /// Input document with the generated `<style>` grafted in.
    pub svg: String,
    /// The compiled timeline the stylesheet was rendered from.
    pub timeline: Timeline,
    /// Malformed lines recovered from in lenient mode.
    pub issues: Vec<ParseIssue>,
}

/// Tokenize `script`, compile it, render CSS and inject it into `svg`.
///
/// Pure and in-memory; nothing is partially applied on error.
pub fn animate_svg(svg: &str, script: &str, opts: &AnimateOptions) -> KeyframeResult<Animated> {
    opts.validate()?;

    let parsed = tokenize(script, opts.parse_mode)?;
    let timeline = compile(&parsed.instructions, opts.step_ms)?;
    if timeline.is_empty() {
        tracing::warn!("script references no objects; emitting an empty stylesheet");
    }

    let style = render_style_block(&timeline, opts);
    let svg = inject_style(svg, &style)?;

    Ok(Animated {
        svg,
        timeline,
        issues: parsed.issues,
    })
}

/// File-backed [`animate_svg`]: reads both inputs, writes `out_path` last.
#[tracing::instrument(skip(opts))]
pub fn animate_files(
    svg_path: &Path,
    script_path: &Path,
    out_path: &Path,
    opts: &AnimateOptions,
) -> KeyframeResult<Animated> {
    let svg = read_text(svg_path)?;
    let script = read_text(script_path)?;

    let animated = animate_svg(&svg, &script, opts)?;

    ensure_parent_dir(out_path)?;
    std::fs::write(out_path, &animated.svg).map_err(|e| KeyframeError::file(out_path, e))?;
    tracing::info!(
        out = %out_path.display(),
        objects = animated.timeline.len(),
        total_ms = animated.timeline.total_duration_ms(),
        "wrote animated svg"
    );
    Ok(animated)
}

fn read_text(path: &Path) -> KeyframeResult<String> {
    std::fs::read_to_string(path).map_err(|e| KeyframeError::file(path, e))
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> KeyframeResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| KeyframeError::file(parent, e))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
