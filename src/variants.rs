//! Variant records and the parameter sets derived from them.
//!
//! The data file is a JSON array of variant records. Each record holds four
//! task records `a`, `b`, `c` and `d`, each with keys `A`, `f` and `phi`:
//!
//! ```json
//! [{
//!     "a": {"A": [1], "f": [1], "phi": ["0", "pi/2", "pi"]},
//!     "b": {"A": [1], "f": [1, 2, 4], "phi": ["pi/4"]},
//!     "c": {"A": [1, 2, 3], "f": [1], "phi": ["0"]},
//!     "d": {"A": [1, 2], "f": [1, 3], "phi": ["0", "pi/2"]}
//! }]
//! ```
//!
//! Tasks `a`, `b` and `c` vary phase, frequency and amplitude respectively while
//! holding the other two attributes fixed. Task `d` lists independent terms as
//! parallel arrays.

use crate::error::{Error, Result};
use crate::phase::{Phase, PhaseSpec};
use crate::signals::HarmonicParams;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// A single value or a list of values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value),
            OneOrMany::Many(values) => values,
        }
    }
}

/// The `A`, `f`, `phi` triple of one task.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskRecord {
    #[serde(rename = "A")]
    pub amplitude: OneOrMany<f64>,
    #[serde(rename = "f")]
    pub frequency: OneOrMany<f64>,
    #[serde(rename = "phi")]
    pub phase: OneOrMany<PhaseSpec>,
}

/// One record of the data file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Variant {
    pub a: TaskRecord,
    pub b: TaskRecord,
    pub c: TaskRecord,
    pub d: TaskRecord,
}

impl Variant {
    /// Task `a`: phase varies, amplitude and frequency are fixed.
    pub fn phase_comparison(&self) -> Result<ParameterSet> {
        ParameterSet::from_record("a", &self.a, Attribute::Phase)
    }

    /// Task `b`: frequency varies, amplitude and phase are fixed.
    pub fn frequency_comparison(&self) -> Result<ParameterSet> {
        ParameterSet::from_record("b", &self.b, Attribute::Frequency)
    }

    /// Task `c`: amplitude varies, frequency and phase are fixed.
    pub fn amplitude_comparison(&self) -> Result<ParameterSet> {
        ParameterSet::from_record("c", &self.c, Attribute::Amplitude)
    }

    /// Task `d`: independent terms of a polyharmonic signal.
    pub fn polyharmonic_terms(&self) -> Result<Vec<HarmonicTerm>> {
        let record = &self.d;
        let amplitudes = record.amplitude.as_slice();
        let frequencies = record.frequency.as_slice();
        let phases = record.phase.as_slice();

        if amplitudes.len() != frequencies.len() || amplitudes.len() != phases.len() {
            return Err(Error::Shape {
                task: "d",
                reason: format!(
                    "A, f and phi must have equal lengths, got {}, {} and {}",
                    amplitudes.len(),
                    frequencies.len(),
                    phases.len()
                ),
            });
        }
        if amplitudes.is_empty() {
            return Err(Error::Shape {
                task: "d",
                reason: "no harmonic terms given".to_string(),
            });
        }

        amplitudes
            .iter()
            .zip(frequencies)
            .zip(phases)
            .map(|((&amplitude, &frequency), phase)| -> Result<HarmonicTerm> {
                Ok(HarmonicTerm {
                    amplitude,
                    frequency,
                    phase: resolve(phase)?,
                })
            })
            .collect()
    }
}

/// One harmonic term with its phase source text kept for labels.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonicTerm {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: Phase,
}

impl HarmonicTerm {
    pub fn params(&self) -> HarmonicParams {
        HarmonicParams::new(self.amplitude, self.frequency, self.phase.radians())
    }
}

/// The attribute a parameter set varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Amplitude,
    Frequency,
    Phase,
}

/// A non-empty, ordered list of harmonic terms that differ in one attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    varied: Attribute,
    terms: Vec<HarmonicTerm>,
}

impl ParameterSet {
    /// Builds the set for `task`, varying `varied` across its listed values.
    pub fn from_record(
        task: &'static str,
        record: &TaskRecord,
        varied: Attribute,
    ) -> Result<Self> {
        let amplitudes = record.amplitude.as_slice();
        let frequencies = record.frequency.as_slice();
        let phases = record.phase.as_slice();

        let terms: Vec<HarmonicTerm> = match varied {
            Attribute::Phase => {
                let amplitude = *fixed(task, "A", amplitudes)?;
                let frequency = *fixed(task, "f", frequencies)?;
                varied_values(task, "phi", phases)?
                    .iter()
                    .map(|phase| -> Result<HarmonicTerm> {
                        Ok(HarmonicTerm {
                            amplitude,
                            frequency,
                            phase: resolve(phase)?,
                        })
                    })
                    .collect::<Result<_>>()?
            }
            Attribute::Frequency => {
                let amplitude = *fixed(task, "A", amplitudes)?;
                let phase = resolve(fixed(task, "phi", phases)?)?;
                varied_values(task, "f", frequencies)?
                    .iter()
                    .map(|&frequency| HarmonicTerm {
                        amplitude,
                        frequency,
                        phase: phase.clone(),
                    })
                    .collect()
            }
            Attribute::Amplitude => {
                let frequency = *fixed(task, "f", frequencies)?;
                let phase = resolve(fixed(task, "phi", phases)?)?;
                varied_values(task, "A", amplitudes)?
                    .iter()
                    .map(|&amplitude| HarmonicTerm {
                        amplitude,
                        frequency,
                        phase: phase.clone(),
                    })
                    .collect()
            }
        };

        debug!(task, ?varied, terms = terms.len(), "built parameter set");
        Ok(Self { varied, terms })
    }

    pub fn varied(&self) -> Attribute {
        self.varied
    }

    pub fn terms(&self) -> &[HarmonicTerm] {
        &self.terms
    }
}

/// The value a fixed attribute takes: the first one listed.
fn fixed<'a, T>(task: &'static str, key: &str, values: &'a [T]) -> Result<&'a T> {
    let first = values.first().ok_or_else(|| Error::Shape {
        task,
        reason: format!("fixed attribute '{key}' has no value"),
    })?;
    if values.len() > 1 {
        warn!(
            task,
            key,
            count = values.len(),
            "fixed attribute lists several values, using the first"
        );
    }
    Ok(first)
}

fn varied_values<'a, T>(task: &'static str, key: &str, values: &'a [T]) -> Result<&'a [T]> {
    if values.is_empty() {
        return Err(Error::Shape {
            task,
            reason: format!("varied attribute '{key}' has no values"),
        });
    }
    Ok(values)
}

fn resolve(spec: &PhaseSpec) -> Result<Phase> {
    spec.resolve().map_err(|source| Error::Phase {
        expression: spec.to_string(),
        source,
    })
}

/// Parses variant records from JSON text.
pub fn parse_variants(json: &str) -> Result<Vec<Variant>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses the variant file at `path`.
pub fn load_variants(path: impl AsRef<Path>) -> Result<Vec<Variant>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let variants = parse_variants(&json)?;
    debug!(path = %path.display(), count = variants.len(), "loaded variants");
    Ok(variants)
}

/// Picks the `index`-th variant, counting from 1.
pub fn select_variant(variants: &[Variant], index: usize) -> Result<&Variant> {
    index
        .checked_sub(1)
        .and_then(|position| variants.get(position))
        .ok_or(Error::VariantOutOfRange {
            index,
            count: variants.len(),
        })
}
