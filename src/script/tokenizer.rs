use crate::{
    foundation::error::{KeyframeError, KeyframeResult},
    foundation::options::ParseMode,
    script::instruction::Instruction,
};

/// A malformed line that was recovered from in lenient mode.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ParseIssue {
    /// 1-based line number.
    pub line_no: usize,
    /// The offending line, trimmed.
    pub line: String,
    /// What was wrong with it.
    pub message: String,
}

impl ParseIssue {
    fn into_error(self) -> KeyframeError {
        KeyframeError::parse(self.line_no, self.line, self.message)
    }
}

/// Tokenized script: instructions in source order plus recovered issues.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Script {
    /// Instructions in script order.
    pub instructions: Vec<Instruction>,
    /// Lines that were zeroed or skipped (always empty in strict mode).
    pub issues: Vec<ParseIssue>,
}

enum LineOutcome {
    Instruction(Instruction),
    Ignored,
}

/// Turn raw script text into instructions.
///
/// Only lines whose first field is exactly `show`, `hide` or `wait` produce
/// instructions; everything else (blank lines, comments, unknown words) is
/// skipped. In [`ParseMode::Lenient`] a bad `wait` operand becomes `wait 0`
/// and a `show`/`hide` without an id is dropped, both recorded in
/// [`Script::issues`]. In [`ParseMode::Strict`] the first such line fails.
#[tracing::instrument(skip(text), fields(bytes = text.len()))]
pub fn tokenize(text: &str, mode: ParseMode) -> KeyframeResult<Script> {
    let mut script = Script::default();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        match tokenize_line(line) {
            Ok(LineOutcome::Instruction(ins)) => script.instructions.push(ins),
            Ok(LineOutcome::Ignored) => {}
            Err((recovered, message)) => {
                let issue = ParseIssue {
                    line_no,
                    line: line.to_owned(),
                    message,
                };
                if mode == ParseMode::Strict {
                    return Err(issue.into_error());
                }
                tracing::warn!(line_no, line, message = %issue.message, "recovered malformed line");
                if let Some(ins) = recovered {
                    script.instructions.push(ins);
                }
                script.issues.push(issue);
            }
        }
    }

    tracing::debug!(
        instructions = script.instructions.len(),
        issues = script.issues.len(),
        "tokenized script"
    );
    Ok(script)
}

/// On failure returns the lenient-mode replacement (if any) and a message.
fn tokenize_line(line: &str) -> Result<LineOutcome, (Option<Instruction>, String)> {
    let mut fields = line.split_whitespace();
    let Some(keyword) = fields.next() else {
        return Ok(LineOutcome::Ignored);
    };
    let operand = fields.next();

    let ins = match keyword {
        "show" => Instruction::show(require_id(keyword, operand)?),
        "hide" => Instruction::hide(require_id(keyword, operand)?),
        "wait" => {
            let Some(v) = operand else {
                return Err((
                    Some(Instruction::wait(0)),
                    "wait is missing a duration".to_owned(),
                ));
            };
            let duration_ms = v.parse::<u64>().map_err(|e| {
                (
                    Some(Instruction::wait(0)),
                    format!("invalid wait duration '{v}': {e}"),
                )
            })?;
            Instruction::wait(duration_ms)
        }
        _ => return Ok(LineOutcome::Ignored),
    };
    Ok(LineOutcome::Instruction(ins))
}

fn require_id<'a>(
    keyword: &str,
    operand: Option<&'a str>,
) -> Result<&'a str, (Option<Instruction>, String)> {
    operand.ok_or_else(|| (None, format!("{keyword} is missing an object id")))
}

#[cfg(test)]
#[path = "../../tests/unit/script/tokenizer.rs"]
mod tests;
