use crate::controllers::session::errors::input_error::InputError;
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::data::algorithm_request::AlgorithmRequest;
use crate::core::data::point::Point;

/// Largest dominant-axis span (or circle radius) a single run may rasterize.
pub const MAX_RASTER_SPAN: i64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateField {
    StartX,
    StartY,
    EndX,
    EndY,
    ControlX,
    ControlY,
}

impl CoordinateField {
    pub const ALL: &'static [Self] = &[
        Self::StartX,
        Self::StartY,
        Self::EndX,
        Self::EndY,
        Self::ControlX,
        Self::ControlY,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StartX => "Start X",
            Self::StartY => "Start Y",
            Self::EndX => "End X",
            Self::EndY => "End Y",
            Self::ControlX => "Control X",
            Self::ControlY => "Control Y",
        }
    }
}

/// The six raw coordinate text fields, exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateInputs {
    pub start_x: String,
    pub start_y: String,
    pub end_x: String,
    pub end_y: String,
    pub control_x: String,
    pub control_y: String,
}

impl Default for CoordinateInputs {
    fn default() -> Self {
        Self {
            start_x: "770".to_string(),
            start_y: "8".to_string(),
            end_x: "790".to_string(),
            end_y: "20".to_string(),
            control_x: "780".to_string(),
            control_y: "30".to_string(),
        }
    }
}

impl CoordinateInputs {
    #[must_use]
    pub fn field(&self, field: CoordinateField) -> &str {
        match field {
            CoordinateField::StartX => &self.start_x,
            CoordinateField::StartY => &self.start_y,
            CoordinateField::EndX => &self.end_x,
            CoordinateField::EndY => &self.end_y,
            CoordinateField::ControlX => &self.control_x,
            CoordinateField::ControlY => &self.control_y,
        }
    }

    pub fn field_mut(&mut self, field: CoordinateField) -> &mut String {
        match field {
            CoordinateField::StartX => &mut self.start_x,
            CoordinateField::StartY => &mut self.start_y,
            CoordinateField::EndX => &mut self.end_x,
            CoordinateField::EndY => &mut self.end_y,
            CoordinateField::ControlX => &mut self.control_x,
            CoordinateField::ControlY => &mut self.control_y,
        }
    }

    pub fn set(&mut self, field: CoordinateField, text: impl Into<String>) {
        *self.field_mut(field) = text.into();
    }

    /// Parses all six fields into a request for `kind`.
    ///
    /// Every field must hold an integer, even the ones `kind` ignores. The
    /// first failing field is reported.
    pub fn to_request(&self, kind: AlgorithmKind) -> Result<AlgorithmRequest, InputError> {
        let start = self.point(CoordinateField::StartX, CoordinateField::StartY)?;
        let end = self.point(CoordinateField::EndX, CoordinateField::EndY)?;
        let control = self.point(CoordinateField::ControlX, CoordinateField::ControlY)?;

        let request = AlgorithmRequest {
            start,
            end,
            control,
            kind,
        };

        let span = request.span();
        if span > MAX_RASTER_SPAN {
            return Err(InputError::SpanTooLarge {
                span,
                limit: MAX_RASTER_SPAN,
            });
        }

        Ok(request)
    }

    fn point(&self, x: CoordinateField, y: CoordinateField) -> Result<Point, InputError> {
        Ok(Point {
            x: self.parse(x)?,
            y: self.parse(y)?,
        })
    }

    fn parse(&self, field: CoordinateField) -> Result<i32, InputError> {
        let text = self.field(field).trim();
        if text.is_empty() {
            return Err(InputError::Missing { field });
        }

        text.parse().map_err(|_| InputError::NotAnInteger {
            field,
            text: text.to_string(),
        })
    }
}
