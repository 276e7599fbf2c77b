use serde::{Deserialize, Serialize};

use crate::error::{OrbitError, Result};

// ---------------------------------------------------------------------------
// Slider range
// ---------------------------------------------------------------------------

/// Closed interval with a keyboard/slider step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }

    pub fn contains(&self, v: f64) -> bool {
        (self.min..=self.max).contains(&v)
    }

    pub fn step_up(&self, v: f64) -> f64 {
        self.clamp(v + self.step)
    }

    pub fn step_down(&self, v: f64) -> f64 {
        self.clamp(v - self.step)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub mass: ParamRange,      // kg
    pub altitude: ParamRange,  // km
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            mass: ParamRange::new(1.0, 500_000.0, 100.0),
            altitude: ParamRange::new(150.0, 100_000.0, 1.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Entry box model
// ---------------------------------------------------------------------------

/// A numeric entry bound to a slider. Text that doesn't parse leaves the last
/// good value in place.
#[derive(Debug, Clone)]
pub struct ParamInput {
    field: &'static str,
    range: ParamRange,
    value: f64,
}

impl ParamInput {
    pub fn new(field: &'static str, range: ParamRange, initial: f64) -> Self {
        Self {
            field,
            range,
            value: range.clamp(initial),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn range(&self) -> ParamRange {
        self.range
    }

    pub fn set(&mut self, v: f64) -> f64 {
        if v.is_finite() {
            self.value = self.range.clamp(v);
        }
        self.value
    }

    /// Parse entry text; on success the clamped value is stored and returned.
    pub fn apply_text(&mut self, text: &str) -> Result<f64> {
        let parsed = strip_thousands(text.trim())
            .and_then(|t| t.parse::<f64>().ok())
            .filter(|v| v.is_finite());

        match parsed {
            Some(v) => Ok(self.set(v)),
            None => {
                log::warn!(
                    "ignoring {} input {:?}, keeping {}",
                    self.field,
                    text,
                    self.value
                );
                Err(OrbitError::InvalidInput {
                    field: self.field,
                    text: text.to_string(),
                })
            }
        }
    }
}

/// Remove `,` separators from the integer part, as long as they split it into
/// groups of three digits ("1,000" or "35,786.5"). Misplaced commas give `None`.
fn strip_thousands(text: &str) -> Option<String> {
    if !text.contains(',') {
        return Some(text.to_string());
    }
    let unsigned = text.trim_start_matches(['+', '-']);
    let sign = &text[..text.len() - unsigned.len()];
    let (int_part, rest) = match unsigned.find(['.', 'e', 'E']) {
        Some(i) => unsigned.split_at(i),
        None => (unsigned, ""),
    };
    if rest.contains(',') {
        return None;
    }

    let mut groups = int_part.split(',');
    let lead = groups.next()?;
    if lead.is_empty() || lead.len() > 3 || !lead.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut digits = String::from(lead);
    for group in groups {
        if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
    }
    Some(format!("{}{}{}", sign, digits, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn altitude_input() -> ParamInput {
        ParamInput::new("altitude", Bounds::default().altitude, 400.0)
    }

    #[test]
    fn numeric_text_is_applied() {
        let mut input = altitude_input();
        assert_eq!(input.apply_text(" 35786 ").unwrap(), 35_786.0);
        assert_eq!(input.apply_text("1,000").unwrap(), 1000.0);
        assert_eq!(input.value(), 1000.0);
    }

    #[test]
    fn thousands_separators_must_group_by_three() {
        let mut input = altitude_input();
        assert_eq!(input.apply_text("35,786.5").unwrap(), 35_786.5);
        assert_eq!(input.apply_text("+20,200").unwrap(), 20_200.0);
        for text in ["4,0,0", "1,00", ",400", "400,", "1,0000", "1.5,000", "1,000e,3"] {
            assert!(input.apply_text(text).is_err(), "{:?} should be rejected", text);
            assert_eq!(input.value(), 20_200.0);
        }
    }

    #[test]
    fn garbage_keeps_previous_value() {
        let mut input = altitude_input();
        for text in ["", "abc", "4OO", "NaN", "inf", "-"] {
            assert!(input.apply_text(text).is_err(), "{:?} should be rejected", text);
            assert_eq!(input.value(), 400.0);
        }
    }

    #[test]
    fn out_of_range_is_clamped() {
        let mut input = altitude_input();
        assert_eq!(input.apply_text("10").unwrap(), 150.0);
        assert_eq!(input.apply_text("1e9").unwrap(), 100_000.0);
    }

    #[test]
    fn stepping_stops_at_edges() {
        let r = ParamRange::new(100.0, 1000.0, 100.0);
        assert_eq!(r.step_up(950.0), 1000.0);
        assert_eq!(r.step_down(150.0), 100.0);
        assert_eq!(r.step_up(300.0), 400.0);
    }
}
