use std::path::Path;

use crate::foundation::error::{KeyframeError, KeyframeResult};

/// Default element id prefix; matches the `cell-<id>` convention of the target SVGs.
pub const DEFAULT_ID_PREFIX: &str = "cell-";
/// Default prefix for generated `@keyframes` names.
pub const DEFAULT_ANIMATION_PREFIX: &str = "anim";
/// Default width of one show/hide ramp, in milliseconds.
pub const DEFAULT_STEP_MS: u64 = 1000;
/// Default maximum number of fractional digits printed for stages.
pub const DEFAULT_PRECISION: usize = 4;

/// How the tokenizer reacts to malformed lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Record the issue, zero or skip the instruction and keep going.
    #[default]
    Lenient,
    /// Fail on the first malformed line.
    Strict,
}

/// Knobs shared by the whole pipeline.
///
/// Every field has a default, so a JSON config only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimateOptions {
    /// Prepended to each object id to form the element id selector.
    pub id_prefix: String,
    /// Prepended to the per-object counter to form animation names.
    pub animation_prefix: String,
    /// Notional step width in ms; a show or hide ramps over one step.
    pub step_ms: u64,
    /// Tokenizer strictness.
    pub parse_mode: ParseMode,
    /// Max fractional digits for stage percentages.
    pub precision: usize,
}

impl Default for AnimateOptions {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_owned(),
            animation_prefix: DEFAULT_ANIMATION_PREFIX.to_owned(),
            step_ms: DEFAULT_STEP_MS,
            parse_mode: ParseMode::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl AnimateOptions {
    /// Load options from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> KeyframeResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| KeyframeError::file(path, e))?;
        Self::from_json_str(&text)
    }

    /// Parse options from a JSON string.
    pub fn from_json_str(text: &str) -> KeyframeResult<Self> {
        let opts: Self = serde_json::from_str(text)
            .map_err(|e| KeyframeError::usage(format!("invalid options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reject option combinations the compiler or emitter cannot honor.
    pub fn validate(&self) -> KeyframeResult<()> {
        if self.step_ms == 0 {
            return Err(KeyframeError::usage("step_ms must be > 0"));
        }
        if self.animation_prefix.is_empty() {
            return Err(KeyframeError::usage("animation_prefix must be non-empty"));
        }
        if !is_css_ident_start(&self.animation_prefix) {
            return Err(KeyframeError::usage(format!(
                "animation_prefix '{}' must start with a letter or '_'",
                self.animation_prefix
            )));
        }
        if self.precision > 9 {
            return Err(KeyframeError::usage("precision must be <= 9"));
        }
        Ok(())
    }
}

fn is_css_ident_start(s: &str) -> bool {
    s.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/options.rs"]
mod tests;
