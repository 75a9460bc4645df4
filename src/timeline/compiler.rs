use std::collections::BTreeMap;

use crate::{
    foundation::error::{KeyframeError, KeyframeResult},
    script::instruction::Instruction,
};

/// Lowest stage on the timeline, in percent.
pub const STAGE_MIN: f64 = 0.0;
/// Highest stage on the timeline, in percent.
pub const STAGE_MAX: f64 = 100.0;

const HIDDEN: f64 = 0.0;
const VISIBLE: f64 = 1.0;

/// A `(stage, opacity)` pair that becomes one line of a `@keyframes` rule.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Position on the timeline in percent, `0..=100`.
    pub stage_percent: f64,
    /// Either `0.0` or `1.0`.
    pub opacity: f64,
}

impl Keyframe {
    /// Build a keyframe.
    pub fn new(stage_percent: f64, opacity: f64) -> Self {
        Self {
            stage_percent,
            opacity,
        }
    }
}

/// Compiled form of a script: one keyframe list per object on a shared clock.
///
/// Every list starts at stage 0, ends at stage 100 and never decreases.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Timeline {
    total_duration_ms: u64,
    step_percent: f64,
    objects: BTreeMap<String, Vec<Keyframe>>, // stable iteration order
}

impl Timeline {
    /// Sum of every wait in the script.
    pub fn total_duration_ms(&self) -> u64 {
        self.total_duration_ms
    }

    /// Width of one show/hide ramp, in percent of the timeline.
    pub fn step_percent(&self) -> f64 {
        self.step_percent
    }

    /// Number of referenced objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// `true` when the script never referenced an object.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Keyframes of one object, if it was referenced.
    pub fn keyframes(&self, object_id: &str) -> Option<&[Keyframe]> {
        self.objects.get(object_id).map(Vec::as_slice)
    }

    /// Objects in id order with their keyframes.
    pub fn objects(&self) -> impl Iterator<Item = (&str, &[Keyframe])> {
        self.objects
            .iter()
            .map(|(id, kfs)| (id.as_str(), kfs.as_slice()))
    }
}

/// Compile instructions into a [`Timeline`].
///
/// `step_ms` is the notional ramp width: a show or hide starting at the
/// current cursor reaches its target opacity `step_ms` later, expressed as
/// `step = step_ms / total * 100` percent. Stages that would leave `[0, 100]`
/// or run backwards (a toggle issued inside the previous ramp of the same
/// object) are clamped to the object's last stage and to 100.
#[tracing::instrument(skip(instructions), fields(instructions = instructions.len()))]
pub fn compile(instructions: &[Instruction], step_ms: u64) -> KeyframeResult<Timeline> {
    if step_ms == 0 {
        return Err(KeyframeError::usage("step_ms must be > 0"));
    }

    let total_duration_ms = total_wait_ms(instructions)?;
    if total_duration_ms == 0 {
        return Err(KeyframeError::EmptyTimeline);
    }

    let total = total_duration_ms as f64;
    let step_percent = step_ms as f64 / total * STAGE_MAX;
    tracing::debug!(total_duration_ms, step_percent, "timeline scale");

    let mut objects = BTreeMap::<String, Vec<Keyframe>>::new();
    let mut elapsed_ms = 0u64;
    let mut current = STAGE_MIN;
    let mut next = current + step_percent;

    for ins in instructions {
        let (object_id, from, to) = match ins {
            Instruction::Wait { duration_ms } => {
                // Derived from elapsed ms so the final cursor lands on exactly 100.
                elapsed_ms += duration_ms;
                current = elapsed_ms as f64 / total * STAGE_MAX;
                next = current + step_percent;
                continue;
            }
            Instruction::Show { object_id } => (object_id, HIDDEN, VISIBLE),
            Instruction::Hide { object_id } => (object_id, VISIBLE, HIDDEN),
        };

        let kfs = objects
            .entry(object_id.clone())
            .or_insert_with(|| vec![Keyframe::new(STAGE_MIN, HIDDEN)]);
        push_clamped(object_id, kfs, current, from);
        push_clamped(object_id, kfs, next, to);
    }

    for (object_id, kfs) in objects.iter_mut() {
        let last = kfs.last().map_or(HIDDEN, |k| k.opacity);
        push_clamped(object_id, kfs, STAGE_MAX, last);
    }

    tracing::debug!(objects = objects.len(), "compiled timeline");
    Ok(Timeline {
        total_duration_ms,
        step_percent,
        objects,
    })
}

fn total_wait_ms(instructions: &[Instruction]) -> KeyframeResult<u64> {
    instructions.iter().try_fold(0u64, |acc, ins| match ins {
        Instruction::Wait { duration_ms } => acc
            .checked_add(*duration_ms)
            .ok_or_else(|| KeyframeError::usage("total wait duration overflows u64 ms")),
        _ => Ok(acc),
    })
}

fn push_clamped(object_id: &str, kfs: &mut Vec<Keyframe>, stage: f64, opacity: f64) {
    let floor = kfs.last().map_or(STAGE_MIN, |k| k.stage_percent);
    let clamped = stage.clamp(floor, STAGE_MAX);
    if clamped != stage {
        tracing::debug!(object_id, stage, clamped, "clamped keyframe stage");
    }
    kfs.push(Keyframe::new(clamped, opacity));
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/compiler.rs"]
mod tests;
