//! The fixed event catalog.
//!
//! Events are maintained by hand in this list rather than served by the
//! content endpoint; `ContentProvider::events` resolves from here with no
//! network I/O.

use crate::models::{Event, Price, ScheduleBlock, TimeSlot};

fn slot(group: &str, time: &str) -> TimeSlot {
    TimeSlot {
        group: group.to_string(),
        time: time.to_string(),
    }
}

/// All listed academy events, in catalog order.
pub fn academy_events() -> Vec<Event> {
    vec![Event {
        id: "winter-intense-clinic".to_string(),
        title: "UST WINTER INTENSE CLINIC".to_string(),
        description: Some(
            "Intensive winter training program for boys and girls born 2017-2008".to_string(),
        ),
        kind: Some("Clinic".to_string()),
        status: "upcoming".to_string(),
        image: Some(
            "https://storage.googleapis.com/msgsndr/AKZP7FbfcOPsLo93Ayuw/media/673bd75015ee065bf0b64cad.png"
                .to_string(),
        ),
        venue: Some("Christ Lutheran Church, 189 Burr Rd, East Northport, NY".to_string()),
        start_date: Some("2024-12-14".to_string()),
        end_date: Some("2024-03-22".to_string()),
        age_groups: vec!["2017-2013".to_string(), "2012-2008".to_string()],
        price: Some(Price {
            amount: 380.0,
            currency: "USD".to_string(),
        }),
        schedule: vec![
            ScheduleBlock {
                dates: [
                    "12/14", "12/21", "1/11", "1/25", "2/2", "2/8", "3/1", "3/8", "3/22",
                ]
                .iter()
                .map(|d| d.to_string())
                .collect(),
                times: vec![],
            },
            ScheduleBlock {
                dates: vec![],
                times: vec![
                    slot("2017-2013", "5:30-7PM"),
                    slot("2012-2008", "7PM-8:30PM"),
                ],
            },
        ],
        max_participants: Some(30),
        features: [
            "Professional coaching staff",
            "Age-appropriate training sessions",
            "Technical skill development",
            "Tactical understanding",
            "Physical conditioning",
        ]
        .iter()
        .map(|f| f.to_string())
        .collect(),
        registration_deadline: Some("2024-12-13".to_string()),
    }]
}
