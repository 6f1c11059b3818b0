//! View #3: fading and growing envelope variants of the reference term.

use crate::chart::{Figure, Plot, Series};
use crate::config::{SAMPLES_PER_PERIOD, ViewConfig};
use crate::signals::{Direction, LinearlyChangingSignal, Signal};

pub fn envelope_figure(config: &ViewConfig) -> Figure {
    let len = SAMPLES_PER_PERIOD * config.envelope_periods;
    let plot = |direction: Direction, title: &str| {
        let signal =
            LinearlyChangingSignal::<SAMPLES_PER_PERIOD>::new(config.envelope_reference, direction);
        Plot::new()
            .with_series(Series::new(signal.sequence(len)))
            .with_annotation(title)
    };

    Figure::new(config.envelope_window.as_str(), config)
        .with_plot(plot(Direction::Fading, "Fading Signal"))
        .with_plot(plot(Direction::Growing, "Growing Signal"))
}
