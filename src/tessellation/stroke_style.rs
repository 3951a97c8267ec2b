use crate::error::{Result, TessellationError};

/// Global parameters of a variable-width stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeParams {
    width: f64,
    expand: f64,
    sharp_cusps: bool,
    round_tip: [bool; 2],
    homogeneous_width: bool,
    canvas_grow: f64,
}

impl Default for StrokeParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            expand: 0.0,
            sharp_cusps: true,
            round_tip: [true, true],
            homogeneous_width: true,
            canvas_grow: 1.0,
        }
    }
}

impl StrokeParams {
    /// Creates stroke parameters with the given global width and defaults
    /// for everything else.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not finite.
    pub fn new(width: f64) -> Result<Self> {
        if !width.is_finite() {
            return Err(TessellationError::InvalidParameters(
                "stroke width must be finite".to_owned(),
            )
            .into());
        }
        Ok(Self {
            width,
            ..Self::default()
        })
    }

    /// Sets the additive half-width offset.
    #[must_use]
    pub fn with_expand(mut self, expand: f64) -> Self {
        self.expand = expand;
        self
    }

    /// Enables or disables corner treatment at split tangents.
    #[must_use]
    pub fn with_sharp_cusps(mut self, sharp: bool) -> Self {
        self.sharp_cusps = sharp;
        self
    }

    /// Sets the round-cap flags for the `[begin, end]` of an open path.
    #[must_use]
    pub fn with_round_tips(mut self, begin: bool, end: bool) -> Self {
        self.round_tip = [begin, end];
        self
    }

    /// Chooses arc-length (`true`) or parametric (`false`) width interpolation.
    #[must_use]
    pub fn with_homogeneous_width(mut self, homogeneous: bool) -> Self {
        self.homogeneous_width = homogeneous;
        self
    }

    /// Sets the canvas growth factor applied to every width.
    #[must_use]
    pub fn with_canvas_grow(mut self, factor: f64) -> Self {
        self.canvas_grow = factor;
        self
    }

    /// Sets the canvas growth factor from a logarithmic grow value
    /// (factor = `exp(value)`).
    #[must_use]
    pub fn with_canvas_grow_value(self, value: f64) -> Self {
        self.with_canvas_grow(value.exp())
    }

    /// Returns the global width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the expand offset.
    #[must_use]
    pub fn expand(&self) -> f64 {
        self.expand
    }

    /// Returns whether corners get special treatment.
    #[must_use]
    pub fn sharp_cusps(&self) -> bool {
        self.sharp_cusps
    }

    /// Returns whether the start of an open path gets a round cap.
    #[must_use]
    pub fn round_begin(&self) -> bool {
        self.round_tip[0]
    }

    /// Returns whether the end of an open path gets a round cap.
    #[must_use]
    pub fn round_end(&self) -> bool {
        self.round_tip[1]
    }

    /// Returns whether widths interpolate by arc length.
    #[must_use]
    pub fn homogeneous_width(&self) -> bool {
        self.homogeneous_width
    }

    /// Returns the canvas growth factor.
    #[must_use]
    pub fn canvas_grow(&self) -> f64 {
        self.canvas_grow
    }

    /// Effective half-width for a vertex of relative width `vertex_width`:
    /// `grow * (vertex_width * width / 2 + expand)`, clamped at zero.
    #[must_use]
    pub fn half_width(&self, vertex_width: f64) -> f64 {
        (self.canvas_grow * (vertex_width * self.width * 0.5 + self.expand)).max(0.0)
    }

    /// Checks that every parameter is finite and the growth factor is not
    /// negative.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::InvalidParameters` describing the bad value.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.expand.is_finite()) {
            return Err(TessellationError::InvalidParameters(format!(
                "width ({}) and expand ({}) must be finite",
                self.width, self.expand
            ))
            .into());
        }
        if !self.canvas_grow.is_finite() || self.canvas_grow < 0.0 {
            return Err(TessellationError::InvalidParameters(format!(
                "canvas grow factor must be finite and non-negative, got {}",
                self.canvas_grow
            ))
            .into());
        }
        Ok(())
    }
}
