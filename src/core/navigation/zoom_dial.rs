/// How the raw slider value maps to an effective zoom factor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ZoomCurve {
    #[default]
    Linear,
    Quadratic,
    Cubic,
    Octave,
    Decade,
}

impl ZoomCurve {
    pub const ALL: &'static [Self] = &[
        Self::Linear,
        Self::Quadratic,
        Self::Cubic,
        Self::Octave,
        Self::Decade,
    ];

    #[must_use]
    pub fn apply(self, z: f64) -> f64 {
        match self {
            Self::Linear => z,
            Self::Quadratic => z * z,
            Self::Cubic => z * z * z,
            Self::Octave => 8.0_f64.powf(z),
            Self::Decade => 10.0_f64.powf(z),
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Quadratic => "Quadratic",
            Self::Cubic => "Cubic",
            Self::Octave => "Octave",
            Self::Decade => "Decade",
        }
    }
}

const WHEEL_SCALE_PER_DELTA: f64 = 0.01;
const WHEEL_SCALE_MIN: f64 = 0.8;
const WHEEL_SCALE_MAX: f64 = 1.2;

/// The zoom input model: a raw slider value plus the selected curve.
///
/// Invalid raw input never reaches the navigation state; the dial holds on
/// to the last valid value instead, so a garbled slider event leaves the
/// view where it was.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomDial {
    raw: f64,
    curve: ZoomCurve,
}

impl Default for ZoomDial {
    fn default() -> Self {
        Self {
            raw: 1.0,
            curve: ZoomCurve::default(),
        }
    }
}

impl ZoomDial {
    /// Feeds a new raw slider value through the curve. Non-finite or
    /// non-positive values reuse the last valid one.
    pub fn set_raw(&mut self, z: f64) -> f64 {
        if z.is_finite() && z > 0.0 {
            self.raw = z;
        }

        self.curve.apply(self.raw)
    }

    pub fn set_curve(&mut self, curve: ZoomCurve) -> f64 {
        self.curve = curve;
        self.curve.apply(self.raw)
    }

    /// Applies one wheel tick. A positive delta (scroll down) shrinks the
    /// raw value, a negative one grows it; the per-tick factor is bounded
    /// to ±20% before the curve is re-run.
    pub fn wheel(&mut self, delta_y: f64) -> f64 {
        let scale =
            (1.0 - WHEEL_SCALE_PER_DELTA * delta_y).clamp(WHEEL_SCALE_MIN, WHEEL_SCALE_MAX);
        self.raw *= scale;

        self.curve.apply(self.raw)
    }

    #[must_use]
    pub fn raw(&self) -> f64 {
        self.raw
    }

    #[must_use]
    pub fn curve(&self) -> ZoomCurve {
        self.curve
    }
}
