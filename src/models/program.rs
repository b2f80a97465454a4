//! Program listings: camps/clinics and tryouts.
//!
//! Both are structurally close to `Event`; tryouts differ in carrying a list
//! of dated sessions instead of a single start/end range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{parse_date, Price, ScheduleBlock, STATUS_UPCOMING};

/// A camp or clinic program listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampClinic {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
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

impl CampClinic {
    pub fn is_upcoming(&self) -> bool {
        self.status == STATUS_UPCOMING
    }
}

/// A tryout listing with one entry per session date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tryout {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: String,
    pub image: Option<String>,
    pub venue: Option<String>,
    #[serde(default)]
    pub dates: Vec<TryoutDate>,
    #[serde(rename = "ageGroups", default)]
    pub age_groups: Vec<String>,
}

/// One tryout session date, with an optional time-of-day string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TryoutDate {
    pub date: String,
    pub time: Option<String>,
}

impl Tryout {
    pub fn is_upcoming(&self) -> bool {
        self.status == STATUS_UPCOMING
    }

    /// First listed session date, None when the list is empty or the first
    /// entry is unparsable.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().and_then(|d| parse_date(&d.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tryout_wire_shape() {
        let json = r#"{
            "id": "spring-tryouts-2012",
            "title": "Spring Tryouts - 2012 Boys",
            "type": "Tryout",
            "status": "upcoming",
            "venue": "Main Field",
            "dates": [
                { "date": "2025-04-12", "time": "9AM-11AM" },
                { "date": "2025-04-19", "time": "9AM-11AM" }
            ],
            "ageGroups": ["2012"]
        }"#;
        let tryout: Tryout = serde_json::from_str(json).unwrap();
        assert!(tryout.is_upcoming());
        assert_eq!(tryout.dates.len(), 2);
        assert_eq!(tryout.dates[0].time.as_deref(), Some("9AM-11AM"));
        assert!(tryout.first_date().is_some());
    }

    #[test]
    fn test_tryout_first_date_edge_cases() {
        let empty: Tryout = serde_json::from_str(
            r#"{"id": "t", "title": "T", "status": "upcoming"}"#,
        )
        .unwrap();
        assert!(empty.first_date().is_none());

        let bad: Tryout = serde_json::from_str(
            r#"{"id": "t", "title": "T", "status": "upcoming",
                "dates": [{"date": "TBA"}]}"#,
        )
        .unwrap();
        assert!(bad.first_date().is_none());
    }

    #[test]
    fn test_camp_clinic_wire_shape() {
        let json = r#"{
            "id": "summer-camp",
            "title": "Summer Camp",
            "type": "Camp",
            "status": "upcoming",
            "startDate": "2025-07-07",
            "endDate": "2025-07-11",
            "price": { "amount": 450, "currency": "USD" }
        }"#;
        let camp: CampClinic = serde_json::from_str(json).unwrap();
        assert!(camp.is_upcoming());
        assert_eq!(camp.start_date.as_deref(), Some("2025-07-07"));
        assert_eq!(camp.price.as_ref().unwrap().currency, "USD");
    }
}
