use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{parse_date, STATUS_UPCOMING};

/// A listed academy event (clinic, camp, tournament, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Display category, e.g. "Clinic" or "Camp".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: String,
    pub image: Option<String>,
    pub venue: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    #[serde(rename = "ageGroups", default)]
    pub age_groups: Vec<String>,
    pub price: Option<Price>,
    #[serde(default)]
    pub schedule: Vec<ScheduleBlock>,
    #[serde(rename = "maxParticipants")]
    pub max_participants: Option<u32>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(rename = "registrationDeadline")]
    pub registration_deadline: Option<String>,
}

/// Price of an event as listed, amount plus ISO currency code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Price {
    pub amount: f64,
    pub currency: String,
}

/// One block of an event's schedule. The endpoint alternates between blocks
/// that carry session dates and blocks that carry per-age-group time slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleBlock {
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub times: Vec<TimeSlot>,
}

/// A time slot for one age-group bucket, e.g. "2017-2013" at "5:30-7PM".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub group: String,
    pub time: String,
}

impl Event {
    pub fn is_upcoming(&self) -> bool {
        self.status == STATUS_UPCOMING
    }

    /// Start date as a calendar date, None when absent or unparsable.
    pub fn parsed_start(&self) -> Option<NaiveDate> {
        self.start_date.as_deref().and_then(parse_date)
    }

    /// All session dates across schedule blocks, in listed order.
    pub fn session_dates(&self) -> Vec<&str> {
        self.schedule
            .iter()
            .flat_map(|block| block.dates.iter().map(String::as_str))
            .collect()
    }

    pub fn price_display(&self) -> String {
        match &self.price {
            Some(price) => crate::utils::format::format_price(price),
            None => "Free".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shape as served by /api/content and the site's event catalog.
    const EVENT_JSON: &str = r#"{
        "id": "winter-intense-clinic",
        "title": "UST WINTER INTENSE CLINIC",
        "description": "Intensive winter training program",
        "type": "Clinic",
        "status": "upcoming",
        "image": "https://example.com/clinic.png",
        "venue": "Christ Lutheran Church, 189 Burr Rd, East Northport, NY",
        "startDate": "2024-12-14",
        "endDate": "2024-03-22",
        "ageGroups": ["2017-2013", "2012-2008"],
        "price": { "amount": 380, "currency": "USD" },
        "schedule": [
            { "dates": ["12/14", "12/21"], "times": [] },
            { "dates": [], "times": [
                { "group": "2017-2013", "time": "5:30-7PM" },
                { "group": "2012-2008", "time": "7PM-8:30PM" }
            ]}
        ],
        "maxParticipants": 30,
        "features": ["Professional coaching staff"],
        "registrationDeadline": "2024-12-13"
    }"#;

    #[test]
    fn test_event_wire_shape() {
        let event: Event = serde_json::from_str(EVENT_JSON).unwrap();
        assert_eq!(event.id, "winter-intense-clinic");
        assert_eq!(event.kind.as_deref(), Some("Clinic"));
        assert!(event.is_upcoming());
        assert_eq!(event.age_groups.len(), 2);
        assert_eq!(event.price.as_ref().unwrap().amount, 380.0);
        assert_eq!(event.schedule.len(), 2);
        assert_eq!(event.schedule[1].times[0].group, "2017-2013");
        assert_eq!(event.max_participants, Some(30));
        assert_eq!(event.registration_deadline.as_deref(), Some("2024-12-13"));
    }

    #[test]
    fn test_event_roundtrip_preserves_field_names() {
        let event: Event = serde_json::from_str(EVENT_JSON).unwrap();
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"startDate\""));
        assert!(json.contains("\"ageGroups\""));
        assert!(json.contains("\"maxParticipants\""));
        assert!(json.contains("\"registrationDeadline\""));
        assert!(json.contains("\"type\":\"Clinic\""));
    }

    #[test]
    fn test_parsed_start() {
        let event: Event = serde_json::from_str(EVENT_JSON).unwrap();
        assert!(event.parsed_start().is_some());

        let mut bad = event.clone();
        bad.start_date = Some("TBD".to_string());
        assert!(bad.parsed_start().is_none());

        bad.start_date = None;
        assert!(bad.parsed_start().is_none());
    }

    #[test]
    fn test_session_dates_flattened() {
        let event: Event = serde_json::from_str(EVENT_JSON).unwrap();
        assert_eq!(event.session_dates(), vec!["12/14", "12/21"]);
    }
}
