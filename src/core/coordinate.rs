use crate::core::{Drawport, LinearScale, ValueBounds};
use crate::error::{ChartError, ChartResult};

/// Maps `(timestamp, value)` pairs into pixel space for one drawport.
///
/// This is a value object: rebuild it whenever the window, bounds or
/// drawport size change instead of mutating it in place.
///
/// - `x(t) = left + width * (t - from) / (to - from)`
/// - `y(v) = top + height - padding + p * (2 * padding - height)` with
///   `p = (v - min) / (max - min)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateResolver {
    drawport: Drawport,
    abscissa: LinearScale,
    ordinate: LinearScale,
    bounds: ValueBounds,
}

impl CoordinateResolver {
    /// Builds a resolver for the abscissa window `[from, to]` and the given
    /// ordinate bounds.
    ///
    /// A zero-width abscissa window is centered on its single timestamp with
    /// a one-unit span, and flat bounds are widened with
    /// [`ValueBounds::with_min_span`], so the maps are always defined.
    pub fn new(drawport: Drawport, abscissa: (i64, i64), bounds: ValueBounds) -> ChartResult<Self> {
        validate_drawport(drawport)?;

        let (from, to) = normalize_abscissa(abscissa);
        let bounds = bounds.with_min_span();
        if !bounds.min.is_finite() || !bounds.max.is_finite() {
            return Err(ChartError::InvalidData(
                "ordinate bounds must be finite".to_owned(),
            ));
        }

        let abscissa = LinearScale::new(from, to, drawport.left, drawport.right())?;
        let ordinate = LinearScale::new(
            bounds.min,
            bounds.max,
            drawport.bottom() - drawport.padding,
            drawport.top + drawport.padding,
        )?;

        Ok(Self {
            drawport,
            abscissa,
            ordinate,
            bounds,
        })
    }

    #[must_use]
    pub fn drawport(&self) -> Drawport {
        self.drawport
    }

    /// Ordinate window actually used for mapping (after flat-span widening).
    #[must_use]
    pub fn bounds(&self) -> ValueBounds {
        self.bounds
    }

    #[must_use]
    pub fn abscissa_window(&self) -> (f64, f64) {
        self.abscissa.domain()
    }

    #[must_use]
    pub fn x(&self, timestamp: i64) -> f64 {
        self.abscissa.domain_to_pixel(timestamp as f64)
    }

    #[must_use]
    pub fn y(&self, value: f64) -> f64 {
        self.ordinate.domain_to_pixel(value)
    }

    #[must_use]
    pub fn timestamp_at(&self, pixel_x: f64) -> f64 {
        self.abscissa.pixel_to_domain(pixel_x)
    }

    #[must_use]
    pub fn value_at(&self, pixel_y: f64) -> f64 {
        self.ordinate.pixel_to_domain(pixel_y)
    }
}

fn validate_drawport(drawport: Drawport) -> ChartResult<()> {
    let finite = [
        drawport.left,
        drawport.top,
        drawport.width,
        drawport.height,
        drawport.padding,
    ]
    .iter()
    .all(|value| value.is_finite());
    if !finite || drawport.width <= 0.0 || drawport.height <= 0.0 {
        return Err(ChartError::InvalidData(
            "drawport must be finite with positive size".to_owned(),
        ));
    }
    if drawport.padding < 0.0 || drawport.padding * 2.0 >= drawport.height {
        return Err(ChartError::InvalidData(
            "drawport padding must be >= 0 and leave a drawable band".to_owned(),
        ));
    }
    Ok(())
}

fn normalize_abscissa((from, to): (i64, i64)) -> (f64, f64) {
    let (from, to) = (from.min(to) as f64, from.max(to) as f64);
    if from == to {
        return (from - 0.5, to + 0.5);
    }
    (from, to)
}
