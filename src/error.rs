use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A vector was divided by exactly zero.
    DivisionByZero,
    /// A spring would connect a point to itself.
    SelfSpring { index: usize },
    /// A point index does not refer to an existing point.
    PointOutOfBounds { index: usize, count: usize },
    /// A configuration value is outside its allowed range.
    InvalidConfig { field: &'static str, value: f64 },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::DivisionByZero => write!(f, "attempted to divide a vector by zero"),
            SimulationError::SelfSpring { index } => {
                write!(f, "point {} cannot be connected to itself", index)
            }
            SimulationError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
            SimulationError::InvalidConfig { field, value } => {
                write!(f, "invalid value {} for `{}`", value, field)
            }
        }
    }
}

impl std::error::Error for SimulationError {}
