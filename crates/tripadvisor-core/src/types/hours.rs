use super::common::null_as_default;
use serde::{Deserialize, Serialize};

/// Opening hours of a location
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hours {
    /// Opening periods, one per contiguous open interval
    #[serde(default, deserialize_with = "null_as_default")]
    pub periods: Vec<Period>,

    /// Human-readable hours, one line per weekday
    #[serde(default, deserialize_with = "null_as_default")]
    pub weekday_text: Vec<String>,
}

/// One open interval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Period {
    /// When the interval starts
    #[serde(default)]
    pub open: Option<DayTime>,

    /// When the interval ends
    #[serde(default)]
    pub close: Option<DayTime>,
}

/// A point in the week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTime {
    /// Day of week, 1 = Monday through 7 = Sunday
    pub day: u8,

    /// Time of day as `HHMM`
    pub time: String,
}

impl DayTime {
    /// Time of day as `HH:MM`
    #[must_use]
    pub fn clock(&self) -> String {
        match (self.time.get(..2), self.time.get(2..4)) {
            (Some(h), Some(m)) => format!("{h}:{m}"),
            _ => self.time.clone(),
        }
    }
}

impl Hours {
    /// Returns true if the location is listed as open on the given weekday
    #[must_use]
    pub fn is_open_on(&self, day: u8) -> bool {
        self.periods
            .iter()
            .any(|p| p.open.as_ref().is_some_and(|o| o.day == day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hours_from_api() {
        let hours: Hours = serde_json::from_value(json!({
            "periods": [
                {"open": {"day": 1, "time": "0830"}, "close": {"day": 1, "time": "1800"}}
            ],
            "weekday_text": ["Monday: 08:30 - 18:00"]
        }))
        .unwrap();

        assert!(hours.is_open_on(1));
        assert!(!hours.is_open_on(7));
        assert_eq!(hours.periods[0].open.as_ref().unwrap().clock(), "08:30");
    }

    #[test]
    fn test_null_lists_are_empty() {
        let hours: Hours =
            serde_json::from_value(json!({"periods": null, "weekday_text": null})).unwrap();
        assert!(hours.periods.is_empty());
        assert!(hours.weekday_text.is_empty());
    }
}
