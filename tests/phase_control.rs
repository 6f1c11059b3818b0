use polyharmonic::{
    HarmonicParams, PhaseControlView, PolyharmonicSignal, SAMPLES_PER_PERIOD, Signal, ViewConfig,
    parse_variants,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

const DATA: &str = r#"[{
    "a": {"A": [1], "f": [1], "phi": ["0"]},
    "b": {"A": [1], "f": [1], "phi": ["0"]},
    "c": {"A": [1], "f": [1], "phi": ["0"]},
    "d": {"A": [3, 1, 0.5], "f": [1, 4, 9], "phi": ["pi/4", "0", "pi"]}
}]"#;

fn view() -> PhaseControlView {
    let variants = parse_variants(DATA).unwrap();
    let terms = variants[0].polyharmonic_terms().unwrap();
    PhaseControlView::new(&terms, &ViewConfig::default())
}

#[test]
fn test_repeated_updates_redraw_identically() {
    let mut view = view();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let phases: Vec<f64> = (0..3).map(|_| rng.gen_range(0.0..2.5 * PI)).collect();
        let first = view.set_phases(&phases).data.clone();
        let second = view.set_phases(&phases).data.clone();
        assert_eq!(first, second);
    }
}

#[test]
fn test_update_matches_direct_sum() {
    let mut view = view();
    let phases = [1.0, 2.0, 3.0];
    let data = view.set_phases(&phases).data.clone();

    let expected = PolyharmonicSignal::<SAMPLES_PER_PERIOD>::new([
        HarmonicParams::new(3.0, 1.0, 1.0),
        HarmonicParams::new(1.0, 4.0, 2.0),
        HarmonicParams::new(0.5, 9.0, 3.0),
    ]);
    assert_eq!(data.len(), SAMPLES_PER_PERIOD);
    for (index, value) in data.points() {
        assert!((value - expected.sample(index as i64)).abs() < 1e-9);
    }
}

#[test]
fn test_reset_after_many_updates() {
    let mut view = view();
    let initial = view.series().clone();
    view.set_phases(&[0.1, 0.2, 0.3]);
    view.set_phases(&[7.0, 7.0, 7.0]);
    assert_eq!(view.reset(), &initial);
    assert_eq!(view.phases(), vec![PI / 4.0, 0.0, PI]);
}
