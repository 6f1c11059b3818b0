//! Retained chart model handed to a chart surface.
//!
//! Views describe what to draw with these plain structs; a surface decides how
//! to draw it.

use crate::config::ViewConfig;
use crate::signals::SampleSequence;

/// Horizontal position of plot annotations, in sample-index units.
pub const ANNOTATION_X: f64 = 10.0;

/// Fraction of the lowest plotted value at which annotations are placed.
pub const ANNOTATION_DEPTH: f64 = 0.8;

/// One window's worth of stacked plots.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub window_title: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub plots: Vec<Plot>,
}

impl Figure {
    /// An empty figure with the shared title and axis labels from `config`.
    pub fn new(window_title: impl Into<String>, config: &ViewConfig) -> Self {
        Self {
            window_title: window_title.into(),
            title: config.figure_title.clone(),
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            plots: Vec::new(),
        }
    }

    pub fn with_plot(mut self, plot: Plot) -> Self {
        self.plots.push(plot);
        self
    }
}

/// A set of line series sharing one pair of axes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Plot {
    pub series: Vec<Series>,
    pub annotation: Option<Annotation>,
    pub legend: bool,
}

impl Plot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Attaches a text box near the bottom-left corner of the plotted data.
    ///
    /// Call after all series are added, since the placement depends on them.
    pub fn with_annotation(mut self, text: impl Into<String>) -> Self {
        let lowest = self.lowest_value().unwrap_or(0.0);
        self.annotation = Some(Annotation {
            x: ANNOTATION_X,
            y: lowest * ANNOTATION_DEPTH,
            text: text.into(),
        });
        self
    }

    /// Smallest amplitude across all series.
    pub fn lowest_value(&self) -> Option<f64> {
        self.series
            .iter()
            .filter_map(|series| series.data.min())
            .reduce(f64::min)
    }
}

/// One line series.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: Option<String>,
    pub data: SampleSequence,
}

impl Series {
    pub fn new(data: SampleSequence) -> Self {
        Self { label: None, data }
    }

    pub fn labelled(label: impl Into<String>, data: SampleSequence) -> Self {
        Self {
            label: Some(label.into()),
            data,
        }
    }
}

/// A text box placed in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
}
