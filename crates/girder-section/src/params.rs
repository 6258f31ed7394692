use girder_base::Tolerance;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Largest value the input form accepts for an entered field. The overall
/// height is derived from the stacked depths and may exceed it.
pub const MAX_INPUT: f64 = 10_000_000.0;

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
}

pub const FIELDS: [FieldSpec; 9] = [
    FieldSpec { key: "a", label: "Top flange width" },
    FieldSpec { key: "b", label: "Overall height" },
    FieldSpec { key: "c", label: "Bottom flange width" },
    FieldSpec { key: "d", label: "Web thickness" },
    FieldSpec { key: "e", label: "Top flange thickness" },
    FieldSpec { key: "f", label: "Bottom flange thickness" },
    FieldSpec { key: "g", label: "Depth of web below Top flange" },
    FieldSpec { key: "h", label: "Web Height" },
    FieldSpec { key: "i", label: "Depth of web above Bottom flange" },
];

/// Mid-section dimensions of a PSC I-girder, in drawing units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GirderParameters {
    /// Top flange width.
    pub a: f64,
    /// Overall height.
    pub b: f64,
    /// Bottom flange width.
    pub c: f64,
    /// Web thickness.
    pub d: f64,
    /// Top flange thickness.
    pub e: f64,
    /// Bottom flange thickness.
    pub f: f64,
    /// Depth of web below the top flange.
    pub g: f64,
    /// Web height.
    pub h: f64,
    /// Depth of web above the bottom flange.
    pub i: f64,
}

impl Default for GirderParameters {
    fn default() -> Self {
        Self {
            a: 900.0,
            b: 1500.0,
            c: 700.0,
            d: 500.0,
            e: 150.0,
            f: 250.0,
            g: 75.0,
            h: 875.0,
            i: 150.0,
        }
    }
}

impl GirderParameters {
    pub fn get(&self, key: &str) -> Option<f64> {
        let value = match key {
            "a" => self.a,
            "b" => self.b,
            "c" => self.c,
            "d" => self.d,
            "e" => self.e,
            "f" => self.f,
            "g" => self.g,
            "h" => self.h,
            "i" => self.i,
            _ => return None,
        };
        Some(value)
    }

    pub fn set(&mut self, key: &str, value: f64) -> Result<()> {
        let slot = match key {
            "a" => &mut self.a,
            "b" => &mut self.b,
            "c" => &mut self.c,
            "d" => &mut self.d,
            "e" => &mut self.e,
            "f" => &mut self.f,
            "g" => &mut self.g,
            "h" => &mut self.h,
            "i" => &mut self.i,
            _ => return Err(Error::validation(key, "unknown parameter")),
        };
        *slot = value;
        Ok(())
    }

    /// Height stacked from the flange and haunch depths: `f + i + h + g + e`.
    pub fn stacked_height(&self) -> f64 {
        self.f + self.i + self.h + self.g + self.e
    }

    pub fn validate(&self, tol: Tolerance) -> Result<()> {
        for field in FIELDS {
            let value = self.get(field.key).unwrap_or(f64::NAN);
            if !value.is_finite() {
                return Err(Error::validation(field.key, "must be a finite number"));
            }
            if value <= 0.0 {
                return Err(Error::validation(field.key, format!("must be > 0, got {value}")));
            }
            if field.key != "b" && value > MAX_INPUT {
                return Err(Error::validation(
                    field.key,
                    format!("must not exceed {MAX_INPUT}, got {value}"),
                ));
            }
        }

        let stacked = self.stacked_height();
        if !tol.near(self.b, stacked) {
            return Err(Error::validation(
                "b",
                format!("overall height {} does not match e+f+g+h+i = {stacked}", self.b),
            ));
        }
        Ok(())
    }

    /// Sets a field from form text such as `"900"` or `" 837.5 "`.
    pub fn set_entry(&mut self, key: &str, text: &str) -> Result<()> {
        if self.get(key).is_none() {
            return Err(Error::validation(key, "unknown parameter"));
        }
        let value = parse_field(key, text)?;
        self.set(key, value)
    }

    /// Applies a `key=value` assignment as typed on the command line.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<String> {
        let (key, text) = assignment
            .split_once('=')
            .ok_or_else(|| Error::validation(assignment, "expected key=value"))?;
        let key = key.trim();
        self.set_entry(key, text)?;
        Ok(key.to_string())
    }
}

/// Parses a form entry. Integers are accepted as typed, anything else must
/// read as a float.
pub fn parse_field(key: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(key, "missing"));
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value as f64);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| Error::validation(key, format!("not a number: {trimmed:?}")))
}
