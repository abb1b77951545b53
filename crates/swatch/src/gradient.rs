//! CSS gradient builder.
//!
//! A [`Gradient`] holds 2 to 5 color stops and renders them as a CSS
//! `linear-gradient` or `radial-gradient` value. Positions are whole
//! percentages; angles are whole degrees in `0..=360`.

use rand::Rng;
use thiserror::Error;

use crate::color::Rgb;

/// Errors from gradient editing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradientError {
    #[error("a gradient needs at least {min} color stops")]
    TooFewStops { min: usize },

    #[error("a gradient allows at most {max} color stops")]
    TooManyStops { max: usize },

    #[error("stop position {0}% is outside 0..=100")]
    PositionOutOfRange(u8),

    #[error("angle {0}deg is outside 0..=360")]
    AngleOutOfRange(u16),

    #[error("no color stop at index {index} (gradient has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Gradient shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientKind {
    /// Linear gradient at `angle` degrees
    Linear { angle: u16 },
    /// Circular radial gradient
    Radial,
}

impl Default for GradientKind {
    fn default() -> Self {
        Self::Linear { angle: 90 }
    }
}

/// One color stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientStop {
    pub color: Rgb,
    /// Percent along the gradient line
    pub position: u8,
}

impl GradientStop {
    pub fn new(color: Rgb, position: u8) -> Self {
        Self { color, position }
    }
}

/// A validated CSS gradient.
///
/// # Example
///
/// ```
/// use swatch::{Gradient, GradientKind, GradientStop, Rgb};
///
/// let gradient = Gradient::new(
///     GradientKind::Linear { angle: 90 },
///     vec![
///         GradientStop::new(Rgb::new(255, 0, 0), 0),
///         GradientStop::new(Rgb::new(0, 0, 255), 100),
///     ],
/// )
/// .unwrap();
/// assert_eq!(gradient.css(), "linear-gradient(90deg, #ff0000 0%, #0000ff 100%)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    kind: GradientKind,
    stops: Vec<GradientStop>,
}

impl Default for Gradient {
    /// Red to blue, left to right.
    fn default() -> Self {
        Self {
            kind: GradientKind::default(),
            stops: vec![
                GradientStop::new(Rgb::new(255, 0, 0), 0),
                GradientStop::new(Rgb::new(0, 0, 255), 100),
            ],
        }
    }
}

impl Gradient {
    pub const MIN_STOPS: usize = 2;
    pub const MAX_STOPS: usize = 5;

    /// Offset of a stop added by [`Gradient::add_stop`] from the last one.
    const ADD_STEP: u8 = 20;

    pub fn new(kind: GradientKind, stops: Vec<GradientStop>) -> Result<Self, GradientError> {
        check_kind(kind)?;
        if stops.len() < Self::MIN_STOPS {
            return Err(GradientError::TooFewStops { min: Self::MIN_STOPS });
        }
        if stops.len() > Self::MAX_STOPS {
            return Err(GradientError::TooManyStops { max: Self::MAX_STOPS });
        }
        if let Some(stop) = stops.iter().find(|s| s.position > 100) {
            return Err(GradientError::PositionOutOfRange(stop.position));
        }
        Ok(Self { kind, stops })
    }

    pub fn kind(&self) -> GradientKind {
        self.kind
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    pub fn set_kind(&mut self, kind: GradientKind) -> Result<(), GradientError> {
        check_kind(kind)?;
        self.kind = kind;
        Ok(())
    }

    pub fn set_stop_color(&mut self, index: usize, color: Rgb) -> Result<(), GradientError> {
        self.stop_mut(index)?.color = color;
        Ok(())
    }

    pub fn set_stop_position(&mut self, index: usize, position: u8) -> Result<(), GradientError> {
        if position > 100 {
            return Err(GradientError::PositionOutOfRange(position));
        }
        self.stop_mut(index)?.position = position;
        Ok(())
    }

    /// Append a white stop 20% past the last one, capped at 100%.
    pub fn add_stop(&mut self) -> Result<(), GradientError> {
        if self.stops.len() >= Self::MAX_STOPS {
            return Err(GradientError::TooManyStops { max: Self::MAX_STOPS });
        }
        let last = self.stops.last().map_or(0, |s| s.position);
        let position = last.saturating_add(Self::ADD_STEP).min(100);
        self.stops.push(GradientStop::new(Rgb::new(255, 255, 255), position));
        Ok(())
    }

    /// Remove the stop at `index`, keeping at least two.
    pub fn remove_stop(&mut self, index: usize) -> Result<GradientStop, GradientError> {
        if index >= self.stops.len() {
            return Err(GradientError::IndexOutOfRange {
                index,
                len: self.stops.len(),
            });
        }
        if self.stops.len() <= Self::MIN_STOPS {
            return Err(GradientError::TooFewStops { min: Self::MIN_STOPS });
        }
        Ok(self.stops.remove(index))
    }

    /// Give every stop a uniformly random color. Positions are kept.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for stop in &mut self.stops {
            stop.color = Rgb::new(rng.gen(), rng.gen(), rng.gen());
        }
    }

    /// CSS gradient value.
    pub fn css(&self) -> String {
        let stops = self
            .stops
            .iter()
            .map(|s| format!("{} {}%", s.color, s.position))
            .collect::<Vec<_>>()
            .join(", ");
        match self.kind {
            GradientKind::Linear { angle } => format!("linear-gradient({}deg, {})", angle, stops),
            GradientKind::Radial => format!("radial-gradient(circle, {})", stops),
        }
    }

    /// CSS `background` declaration.
    pub fn declaration(&self) -> String {
        format!("background: {};", self.css())
    }

    /// Tailwind arbitrary-value background class.
    pub fn tailwind_class(&self) -> String {
        format!("bg-[{}]", self.css())
    }

    fn stop_mut(&mut self, index: usize) -> Result<&mut GradientStop, GradientError> {
        let len = self.stops.len();
        self.stops
            .get_mut(index)
            .ok_or(GradientError::IndexOutOfRange { index, len })
    }
}

fn check_kind(kind: GradientKind) -> Result<(), GradientError> {
    match kind {
        GradientKind::Linear { angle } if angle > 360 => Err(GradientError::AngleOutOfRange(angle)),
        _ => Ok(()),
    }
}
