use polyharmonic::{
    ChartSurface, Dashboard, Error, HarmonicSignal, LogSurface, SAMPLES_PER_PERIOD, Signal,
    ViewConfig, load_variants, select_variant,
};
use pretty_assertions::assert_eq;
use std::f64::consts::PI;
use std::io::Write;
use tempfile::NamedTempFile;

const EPSILON: f64 = 1e-9;

const DATA: &str = r#"[
    {
        "a": {"A": [1], "f": [1], "phi": ["0", "pi/2", "pi"]},
        "b": {"A": [1], "f": [1, 2, 4], "phi": ["pi/4"]},
        "c": {"A": [1, 2, 3], "f": [2], "phi": ["0"]},
        "d": {"A": [1, 0.5, 0.25], "f": [1, 3, 5], "phi": ["0", "pi/3", "2*pi/3"]}
    },
    {
        "a": {"A": [2], "f": [3], "phi": ["pi/6"]},
        "b": {"A": [2], "f": [3], "phi": ["pi/6"]},
        "c": {"A": [2], "f": [3], "phi": ["pi/6"]},
        "d": {"A": [2], "f": [3], "phi": ["pi/"]}
    }
]"#;

fn data_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn dashboard(variant: usize) -> Result<Dashboard, Error> {
    let file = data_file(DATA);
    let variants = load_variants(file.path())?;
    Dashboard::build(select_variant(&variants, variant)?, &ViewConfig::default())
}

#[test]
fn test_task_a_series_match_direct_evaluation() {
    let dashboard = dashboard(1).unwrap();
    let plot = &dashboard.comparison.plots[0];
    assert_eq!(plot.series.len(), 3);

    for (series, phase) in plot.series.iter().zip([0.0, PI / 2.0, PI]) {
        assert_eq!(series.data.len(), 1024);
        let signal = HarmonicSignal::<1024>::new(1.0, 1.0, phase);
        for (index, value) in series.data.points() {
            assert!((value - signal.sample(index as i64)).abs() < EPSILON);
        }
    }
}

#[test]
fn test_every_view_is_built() {
    let dashboard = dashboard(1).unwrap();
    let titles: Vec<&str> = dashboard
        .figures()
        .into_iter()
        .map(|figure| figure.window_title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Harmonic Signals Modelling (#1)",
            "Harmonic Signals Modelling (#2)",
            "Harmonic Signals Modelling (#3)",
        ]
    );
    assert_eq!(dashboard.phase_control.sliders().len(), 3);
    assert_eq!(dashboard.envelope.plots[0].series[0].data.len(), 2 * SAMPLES_PER_PERIOD);
}

#[test]
fn test_log_surface_presents_dashboard() {
    let dashboard = dashboard(1).unwrap();
    assert!(LogSurface.present(dashboard).is_ok());
}

#[test]
fn test_variant_index_out_of_range() {
    assert!(matches!(
        dashboard(3),
        Err(Error::VariantOutOfRange { index: 3, count: 2 })
    ));
    assert!(matches!(
        dashboard(0),
        Err(Error::VariantOutOfRange { index: 0, .. })
    ));
}

#[test]
fn test_malformed_phase_aborts() {
    match dashboard(2) {
        Err(Error::Phase { expression, .. }) => assert_eq!(expression, "pi/"),
        other => panic!("expected phase error, got {other:?}"),
    }
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = load_variants(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_malformed_json() {
    let file = data_file(r#"[{"a": {"A": [1]"#);
    assert!(matches!(load_variants(file.path()), Err(Error::Parse(_))));
}
