//! Wire types for the GoTo REST endpoints
//!
//! Each product family lists events with its own field shape and key type;
//! the conversions here normalize all of them into the shared [`Event`]
//! type. Event descriptions carry the start time in the `dd.mm.yy HH:MM`
//! form the labels are built from.

use chrono::{DateTime, Utc};
use gotosync_domain::Event;
use serde::{Deserialize, Serialize};

/// Contact data pulled from a registrant or attendee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registrant {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Scheduled time range attached to webinars and trainings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start_time: DateTime<Utc>,
}

/// Upcoming webinar as listed by the G2W API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webinar {
    pub webinar_key: u64,
    pub subject: String,
    #[serde(default)]
    pub times: Vec<TimeRange>,
}

impl From<Webinar> for Event {
    fn from(webinar: Webinar) -> Self {
        let start = webinar.times.first().map(|t| t.start_time);
        Event::new(webinar.webinar_key.to_string(), dated_description(&webinar.subject, start))
    }
}

/// Scheduled meeting as listed by the G2M API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub meeting_id: u64,
    pub subject: String,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
}

impl From<Meeting> for Event {
    fn from(meeting: Meeting) -> Self {
        Event::new(
            meeting.meeting_id.to_string(),
            dated_description(&meeting.subject, meeting.start_time),
        )
    }
}

/// Training course as listed by the G2T API.
///
/// Training keys arrive as strings, unlike the numeric webinar and meeting
/// keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    pub training_key: String,
    pub name: String,
    #[serde(default)]
    pub times: Vec<TimeRange>,
}

impl From<Training> for Event {
    fn from(training: Training) -> Self {
        let start = training.times.first().map(|t| t.start_time);
        Event::new(training.training_key, dated_description(&training.name, start))
    }
}

/// Screen-sharing session as listed by the G2A API.
///
/// Sessions have no subject of their own; the session id stands in when no
/// description is present.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistSession {
    pub session_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
}

impl From<AssistSession> for Event {
    fn from(session: AssistSession) -> Self {
        let AssistSession { session_id, description, start_time } = session;
        let subject = description.unwrap_or_else(|| session_id.clone());
        Event::new(session_id, dated_description(&subject, start_time))
    }
}

fn dated_description(subject: &str, start_time: Option<DateTime<Utc>>) -> String {
    match start_time {
        Some(start) => format!("{} ({})", subject, start.format("%d.%m.%y %H:%M")),
        None => subject.to_string(),
    }
}
