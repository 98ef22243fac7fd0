use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuadratureError {
    #[error("invalid `{name}`: must be in [{min}, {max}]. got {got}")]
    InvalidParameter { name: &'static str, got: usize, min: usize, max: usize },

    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },
}
