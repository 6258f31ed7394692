use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Guid(Uuid);

impl Guid {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Tolerance {
    pub linear: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { linear: 1.0e-6 }
    }
}

impl Tolerance {
    pub fn near(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.linear
    }

    pub fn is_zero(&self, value: f64) -> bool {
        value.abs() <= self.linear
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidParameter(format!("{name} must be > 0")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_compares_within_linear_bound() {
        let tol = Tolerance::default();
        assert!(tol.near(1500.0, 1500.0 + 1.0e-9));
        assert!(!tol.near(1500.0, 1500.1));
        assert!(tol.is_zero(-1.0e-7));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_nan() {
        assert!(ensure_positive("width", 1.0).is_ok());
        assert!(ensure_positive("width", 0.0).is_err());
        assert!(ensure_positive("width", f64::NAN).is_err());
    }

    #[test]
    fn guid_round_trips_through_json() -> std::result::Result<(), serde_json::Error> {
        let guid = Guid::new();
        let text = serde_json::to_string(&guid)?;
        let back: Guid = serde_json::from_str(&text)?;
        assert_eq!(guid, back);
        Ok(())
    }
}
