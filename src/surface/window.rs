//! Native window surface built on `eframe` and `egui_plot`.
//!
//! Each figure becomes a floating `egui::Window` inside one native window. The
//! phase control figure additionally shows its sliders and a Reset button; the
//! egui event loop calls `update` once per frame, and slider changes are applied
//! to the view inside that call.

use super::ChartSurface;
use crate::chart::Figure;
use crate::error::{Error, Result};
use crate::views::{Dashboard, PhaseControlView, PhaseSlider};
use eframe::egui;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoint, PlotPoints, Text};
use tracing::debug;

const SLIDER_ROW_HEIGHT: f32 = 24.0;
const MIN_PLOT_HEIGHT: f32 = 120.0;

/// Opens one native window holding all figures.
#[derive(Debug, Clone)]
pub struct WindowSurface {
    title: String,
    size: [f32; 2],
}

impl WindowSurface {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            size: [1280.0, 900.0],
        }
    }
}

impl ChartSurface for WindowSurface {
    fn present(&mut self, dashboard: Dashboard) -> Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.as_str())
                .with_inner_size(self.size),
            ..Default::default()
        };
        debug!(title = %self.title, "opening chart window");
        eframe::run_native(
            &self.title,
            options,
            Box::new(move |_cc| Ok(Box::new(DashboardApp { dashboard }))),
        )
        .map_err(|err| Error::Surface(err.to_string()))
    }
}

struct DashboardApp {
    dashboard: Dashboard,
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |_ui| {});

        figure_window(ctx, &self.dashboard.comparison, [0.0, 0.0]);
        phase_control_window(ctx, &mut self.dashboard.phase_control, [40.0, 40.0]);
        figure_window(ctx, &self.dashboard.envelope, [80.0, 80.0]);
    }
}

fn figure_window(ctx: &egui::Context, figure: &Figure, position: [f32; 2]) {
    egui::Window::new(figure.window_title.as_str())
        .default_pos(position)
        .default_size([900.0, 640.0])
        .show(ctx, |ui| {
            let height = ui.available_height();
            draw_figure(ui, figure, height);
        });
}

fn phase_control_window(ctx: &egui::Context, view: &mut PhaseControlView, position: [f32; 2]) {
    let title = view.figure().window_title.clone();
    egui::Window::new(title.as_str())
        .default_pos(position)
        .default_size([900.0, 640.0])
        .show(ctx, |ui| {
            let controls = (view.sliders().len() + 2) as f32 * SLIDER_ROW_HEIGHT;
            let height = ui.available_height() - controls;
            draw_figure(ui, view.figure(), height);

            let mut phases = view.phases();
            let mut changed = false;
            for (slider, phase) in view.sliders().iter().zip(phases.iter_mut()) {
                let response = ui.add(
                    egui::Slider::new(phase, slider.range.clone())
                        .text(slider.label.as_str())
                        .custom_formatter(|value, _| PhaseSlider::value_text(value)),
                );
                changed |= response.changed();
            }
            if changed {
                view.set_phases(&phases);
            }
            if ui.button("Reset").clicked() {
                view.reset();
            }
        });
}

/// Draws the figure's plots stacked vertically within `height` points.
fn draw_figure(ui: &mut egui::Ui, figure: &Figure, height: f32) {
    ui.vertical_centered(|ui| {
        ui.heading(figure.title.as_str());
    });

    let count = figure.plots.len().max(1) as f32;
    let plot_height = (height / count).max(MIN_PLOT_HEIGHT);

    for (index, plot) in figure.plots.iter().enumerate() {
        let mut chart = Plot::new((figure.window_title.as_str(), index))
            .height(plot_height)
            .x_axis_label(figure.x_label.as_str())
            .y_axis_label(figure.y_label.as_str());
        if plot.legend {
            chart = chart.legend(Legend::default().position(Corner::RightTop));
        }

        chart.show(ui, |plot_ui| {
            for series in &plot.series {
                let points: PlotPoints = series
                    .data
                    .points()
                    .map(|(sample, value)| [sample as f64, value])
                    .collect();
                let mut line = Line::new(points);
                if let Some(label) = &series.label {
                    line = line.name(label);
                }
                plot_ui.line(line);
            }
            if let Some(annotation) = &plot.annotation {
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(annotation.x, annotation.y),
                        annotation.text.as_str(),
                    )
                    .anchor(egui::Align2::LEFT_BOTTOM),
                );
            }
        });
    }
}
