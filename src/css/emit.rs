use crate::{
    foundation::options::AnimateOptions,
    timeline::compiler::{Keyframe, Timeline},
};

/// Name of the `n`-th generated animation, e.g. `anim0`.
pub fn animation_name(prefix: &str, n: usize) -> String {
    format!("{prefix}{n}")
}

/// Render the timeline as CSS rules, without the `<style>` wrapper.
///
/// Each object gets one `animation` rule on `#<id_prefix><object_id>` and
/// one `@keyframes` block, named in timeline iteration order.
#[tracing::instrument(skip_all, fields(objects = timeline.len()))]
pub fn render_css(timeline: &Timeline, opts: &AnimateOptions) -> String {
    let mut out = String::new();
    for (n, (object_id, kfs)) in timeline.objects().enumerate() {
        let name = animation_name(&opts.animation_prefix, n);
        let selector = css_escape_ident(&format!("{}{}", opts.id_prefix, object_id));
        out.push_str(&format!(
            "#{selector} {{ animation: {name} {}ms linear infinite normal forwards; }}\n",
            timeline.total_duration_ms()
        ));
        out.push_str(&render_keyframes(&name, kfs, opts.precision));
        out.push('\n');
    }
    out
}

/// Render the timeline wrapped in a `<style>` element ready for injection.
pub fn render_style_block(timeline: &Timeline, opts: &AnimateOptions) -> String {
    format!("<style>\n{}</style>", render_css(timeline, opts))
}

fn render_keyframes(name: &str, kfs: &[Keyframe], precision: usize) -> String {
    let mut out = format!("@keyframes {name} {{ ");
    for k in kfs {
        out.push_str(&format!(
            "{}% {{ opacity: {}; }} ",
            format_number(k.stage_percent, precision),
            format_number(k.opacity, precision)
        ));
    }
    out.push('}');
    out
}

/// Fixed-precision decimal with trailing zeros trimmed; never `-0`.
pub fn format_number(v: f64, precision: usize) -> String {
    let mut s = format!("{v:.precision$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_owned();
    }
    s
}

/// Escape a string for use as a CSS identifier after `#`.
pub fn css_escape_ident(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    for (i, c) in ident.chars().enumerate() {
        match c {
            '0'..='9' if i == 0 => out.push_str(&format!("\\{:x} ", c as u32)),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:x} ", c as u32)),
            'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' => out.push(c),
            c if !c.is_ascii() => out.push(c),
            c => {
                out.push('\\');
                out.push(c);
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/css/emit.rs"]
mod tests;
