use super::*;

fn kf(stage: f64, opacity: f64) -> Keyframe {
    Keyframe::new(stage, opacity)
}

fn assert_well_formed(t: &Timeline) {
    for (id, kfs) in t.objects() {
        assert!(!kfs.is_empty(), "{id} has no keyframes");
        assert_eq!(kfs[0].stage_percent, 0.0, "{id} does not start at 0");
        assert_eq!(kfs[kfs.len() - 1].stage_percent, 100.0, "{id} does not end at 100");
        for w in kfs.windows(2) {
            assert!(
                w[0].stage_percent <= w[1].stage_percent,
                "{id} stages decrease: {:?}",
                kfs
            );
        }
        for k in kfs {
            assert!(k.opacity == 0.0 || k.opacity == 1.0);
        }
    }
}

#[test]
fn show_wait_hide_over_one_step() {
    let ins = [
        Instruction::show("cell1"),
        Instruction::wait(1000),
        Instruction::hide("cell1"),
    ];
    let t = compile(&ins, 1000).unwrap();
    assert_eq!(t.total_duration_ms(), 1000);
    assert_eq!(t.step_percent(), 100.0);
    // hide's ramp end (stage 200) is clamped to 100.
    assert_eq!(
        t.keyframes("cell1").unwrap(),
        &[
            kf(0.0, 0.0),
            kf(0.0, 0.0),
            kf(100.0, 1.0),
            kf(100.0, 1.0),
            kf(100.0, 0.0),
            kf(100.0, 0.0),
        ]
    );
}

#[test]
fn stages_scale_with_total_duration() {
    let ins = [
        Instruction::show("a"),
        Instruction::wait(1000),
        Instruction::hide("a"),
        Instruction::wait(3000),
    ];
    let t = compile(&ins, 1000).unwrap();
    assert_eq!(t.total_duration_ms(), 4000);
    assert_eq!(t.step_percent(), 25.0);
    assert_eq!(
        t.keyframes("a").unwrap(),
        &[
            kf(0.0, 0.0),
            kf(0.0, 0.0),
            kf(25.0, 1.0),
            kf(25.0, 1.0),
            kf(50.0, 0.0),
            kf(100.0, 0.0),
        ]
    );
}

#[test]
fn shown_only_object_stays_visible_to_the_end() {
    let ins = [Instruction::show("a"), Instruction::wait(2000)];
    let t = compile(&ins, 1000).unwrap();
    assert_eq!(
        t.keyframes("a").unwrap(),
        &[kf(0.0, 0.0), kf(0.0, 0.0), kf(50.0, 1.0), kf(100.0, 1.0)]
    );
}

#[test]
fn hide_first_object_starts_hidden_then_jumps_visible() {
    let ins = [
        Instruction::wait(1000),
        Instruction::hide("a"),
        Instruction::wait(1000),
    ];
    let t = compile(&ins, 1000).unwrap();
    assert_eq!(
        t.keyframes("a").unwrap(),
        &[kf(0.0, 0.0), kf(50.0, 1.0), kf(100.0, 0.0), kf(100.0, 0.0)]
    );
}

#[test]
fn toggle_inside_previous_ramp_is_clamped_forward() {
    let ins = [
        Instruction::show("a"),
        Instruction::wait(500),
        Instruction::hide("a"),
        Instruction::wait(1500),
    ];
    let t = compile(&ins, 1000).unwrap();
    assert_eq!(
        t.keyframes("a").unwrap(),
        &[
            kf(0.0, 0.0),
            kf(0.0, 0.0),
            kf(50.0, 1.0),
            kf(50.0, 1.0),
            kf(75.0, 0.0),
            kf(100.0, 0.0),
        ]
    );
    assert_well_formed(&t);
}

#[test]
fn coincident_toggles_produce_a_step_function() {
    let ins = [
        Instruction::wait(1000),
        Instruction::show("a"),
        Instruction::hide("a"),
        Instruction::wait(3000),
    ];
    let t = compile(&ins, 1000).unwrap();
    let stages: Vec<f64> = t
        .keyframes("a")
        .unwrap()
        .iter()
        .map(|k| k.stage_percent)
        .collect();
    assert_eq!(stages, vec![0.0, 25.0, 50.0, 50.0, 50.0, 100.0]);
}

#[test]
fn objects_share_one_clock() {
    let ins = [
        Instruction::show("a"),
        Instruction::wait(1000),
        Instruction::show("b"),
        Instruction::wait(1000),
    ];
    let t = compile(&ins, 1000).unwrap();
    assert_eq!(t.len(), 2);
    assert_eq!(t.keyframes("a").unwrap()[1], kf(0.0, 0.0));
    assert_eq!(t.keyframes("b").unwrap()[1], kf(50.0, 0.0));
    assert_eq!(t.keyframes("b").unwrap()[2], kf(100.0, 1.0));
    let ids: Vec<&str> = t.objects().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn step_ms_sets_ramp_width() {
    let ins = [Instruction::show("a"), Instruction::wait(1000)];
    let t = compile(&ins, 250).unwrap();
    assert_eq!(t.step_percent(), 25.0);
    assert_eq!(t.keyframes("a").unwrap()[2], kf(25.0, 1.0));
}

#[test]
fn total_is_exact_sum_of_waits() {
    let ins = [
        Instruction::wait(3),
        Instruction::show("a"),
        Instruction::wait(0),
        Instruction::wait(1234),
        Instruction::hide("a"),
        Instruction::wait(7),
    ];
    let t = compile(&ins, 1000).unwrap();
    assert_eq!(t.total_duration_ms(), 1244);
    assert_well_formed(&t);
}

#[test]
fn zero_total_duration_is_an_error() {
    let no_waits = [Instruction::show("a"), Instruction::hide("a")];
    assert!(matches!(
        compile(&no_waits, 1000),
        Err(KeyframeError::EmptyTimeline)
    ));

    let zero_waits = [Instruction::show("a"), Instruction::wait(0)];
    assert!(matches!(
        compile(&zero_waits, 1000),
        Err(KeyframeError::EmptyTimeline)
    ));

    assert!(matches!(compile(&[], 1000), Err(KeyframeError::EmptyTimeline)));
}

#[test]
fn overflowing_total_is_rejected() {
    let ins = [Instruction::wait(u64::MAX), Instruction::wait(1)];
    assert!(matches!(compile(&ins, 1000), Err(KeyframeError::Usage(_))));
}

#[test]
fn zero_step_is_rejected() {
    let ins = [Instruction::wait(10)];
    assert!(matches!(compile(&ins, 0), Err(KeyframeError::Usage(_))));
}

#[test]
fn waits_without_objects_yield_an_empty_timeline() {
    let t = compile(&[Instruction::wait(500)], 1000).unwrap();
    assert!(t.is_empty());
    assert_eq!(t.total_duration_ms(), 500);
}

#[test]
fn invariants_hold_for_busy_scripts() {
    let scripts: Vec<Vec<Instruction>> = vec![
        vec![
            Instruction::show("a"),
            Instruction::show("b"),
            Instruction::wait(100),
            Instruction::hide("a"),
            Instruction::wait(100),
            Instruction::show("a"),
            Instruction::hide("b"),
            Instruction::wait(5000),
            Instruction::hide("a"),
        ],
        vec![
            Instruction::hide("x"),
            Instruction::show("x"),
            Instruction::hide("x"),
            Instruction::wait(1),
            Instruction::show("y"),
        ],
        vec![
            Instruction::wait(333),
            Instruction::show("p"),
            Instruction::wait(333),
            Instruction::hide("p"),
            Instruction::wait(334),
            Instruction::show("p"),
        ],
    ];
    for ins in scripts {
        let t = compile(&ins, 1000).unwrap();
        assert_well_formed(&t);
    }
}

#[test]
fn compile_is_deterministic() {
    let ins = [
        Instruction::show("z"),
        Instruction::show("a"),
        Instruction::wait(700),
        Instruction::hide("z"),
        Instruction::wait(300),
    ];
    assert_eq!(compile(&ins, 1000).unwrap(), compile(&ins, 1000).unwrap());
}
