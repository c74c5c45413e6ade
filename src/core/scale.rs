use serde::{Deserialize, Serialize};

use crate::core::{Axis, Dataset, Field, PlotPoint, Record, Viewport};
use crate::error::{ScatterError, ScatterResult};

/// Tuning controls for padded domain fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainPadding {
    /// Fraction of the raw span added to each end of the domain.
    pub headroom_ratio: f64,
    /// Absolute margin applied per side when every value is identical.
    pub degenerate_margin: f64,
}

impl Default for DomainPadding {
    fn default() -> Self {
        Self {
            headroom_ratio: 1.0 / 40.0,
            degenerate_margin: 1.0,
        }
    }
}

impl DomainPadding {
    fn validate(self) -> ScatterResult<Self> {
        if !self.headroom_ratio.is_finite() || self.headroom_ratio < 0.0 {
            return Err(ScatterError::InvalidData(
                "domain headroom ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.degenerate_margin.is_finite() || self.degenerate_margin <= 0.0 {
            return Err(ScatterError::InvalidData(
                "degenerate domain margin must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Padded domain bounds fitted to one field of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleParameters {
    pub min: f64,
    pub max: f64,
    pub padded_min: f64,
    pub padded_max: f64,
}

impl ScaleParameters {
    pub fn fit(dataset: &Dataset, field: Field) -> ScatterResult<Self> {
        Self::fit_tuned(dataset, field, DomainPadding::default())
    }

    /// Single O(n) pass over the dataset for `field`, then pads both ends.
    ///
    /// A constant field would collapse the domain to a point; it falls back to
    /// the fixed absolute margin instead and keeps `padded_min < padded_max`.
    pub fn fit_tuned(
        dataset: &Dataset,
        field: Field,
        padding: DomainPadding,
    ) -> ScatterResult<Self> {
        let padding = padding.validate()?;
        if dataset.is_empty() {
            return Err(ScatterError::EmptyDataset);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for record in dataset.iter() {
            let value = record.value(field);
            min = min.min(value);
            max = max.max(value);
        }

        if min == max {
            tracing::warn!(%field, value = min, "constant field yields a degenerate domain; applying fixed margin");
            return Ok(Self {
                min,
                max,
                padded_min: min - padding.degenerate_margin,
                padded_max: max + padding.degenerate_margin,
            });
        }

        let shift = (max - min) * padding.headroom_ratio;
        Ok(Self {
            min,
            max,
            padded_min: min - shift,
            padded_max: max + shift,
        })
    }

    #[must_use]
    pub fn padded_span(self) -> f64 {
        self.padded_max - self.padded_min
    }
}

/// Affine map from a padded field domain to one pixel axis.
///
/// X maps to `[0, width]`; Y maps to `[height, 0]` because the pixel origin
/// sits top-left while the data origin sits bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    axis: Axis,
    field: Field,
    params: ScaleParameters,
}

impl AxisScale {
    pub fn fit(dataset: &Dataset, axis: Axis, field: Field) -> ScatterResult<Self> {
        Self::fit_tuned(dataset, axis, field, DomainPadding::default())
    }

    pub fn fit_tuned(
        dataset: &Dataset,
        axis: Axis,
        field: Field,
        padding: DomainPadding,
    ) -> ScatterResult<Self> {
        Ok(Self {
            axis,
            field,
            params: ScaleParameters::fit_tuned(dataset, field, padding)?,
        })
    }

    #[must_use]
    pub fn axis(self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn field(self) -> Field {
        self.field
    }

    #[must_use]
    pub fn params(self) -> ScaleParameters {
        self.params
    }

    pub fn value_to_pixel(self, value: f64, viewport: Viewport) -> ScatterResult<f64> {
        if !viewport.is_valid() {
            return Err(ScatterError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !value.is_finite() {
            return Err(ScatterError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.params.padded_min) / self.params.padded_span();
        match self.axis {
            Axis::X => Ok(normalized * f64::from(viewport.width)),
            Axis::Y => Ok((1.0 - normalized) * f64::from(viewport.height)),
        }
    }

    pub fn pixel_to_value(self, pixel: f64, viewport: Viewport) -> ScatterResult<f64> {
        if !viewport.is_valid() {
            return Err(ScatterError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !pixel.is_finite() {
            return Err(ScatterError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = match self.axis {
            Axis::X => pixel / f64::from(viewport.width),
            Axis::Y => 1.0 - pixel / f64::from(viewport.height),
        };
        Ok(self.params.padded_min + normalized * self.params.padded_span())
    }
}

/// Projects one record through the two current axis scales.
///
/// Pure function with no side effects; safe to call per record while
/// building a frame.
pub fn project_record(
    record: &Record,
    x_scale: AxisScale,
    y_scale: AxisScale,
    viewport: Viewport,
) -> ScatterResult<PlotPoint> {
    Ok(PlotPoint::new(
        x_scale.value_to_pixel(record.value(x_scale.field()), viewport)?,
        y_scale.value_to_pixel(record.value(y_scale.field()), viewport)?,
    ))
}
