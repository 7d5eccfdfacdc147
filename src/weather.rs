//! Raw weather text as fetched for a station. The core stores and moves
//! this verbatim; METAR/TAF parsing is not its business.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub id: Uuid,
    pub station: String,
    pub metar: String,
    #[serde(default)]
    pub taf: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherReport {
    pub fn new(station: impl Into<String>, metar: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            station: station.into(),
            metar: metar.into(),
            taf: None,
            fetched_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_is_opaque_text() {
        let report = WeatherReport::new("KPAO", "KPAO 181847Z 32008KT 10SM FEW020 18/09 A3002");
        assert_eq!(report.station, "KPAO");
        assert!(report.taf.is_none());
        // Round-trips through JSON without interpreting the text.
        let json = serde_json::to_string(&report).unwrap();
        let back: WeatherReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
