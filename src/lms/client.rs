//! Authenticated HTTP client for the Eduplus analytics API and the sibling
//! bot feed, normalizing raw JSON into the record shapes in [`super::records`].

use chrono::NaiveDate;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::error::{ChatError, Result};

use super::records::*;

/// Fixed page size for the paginated timetable feed.
const TIMETABLE_PAGE_LIMIT: u32 = 50;

/// Request timeout for LMS calls.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the Eduplus LMS analytics endpoints.
///
/// Holds one shared reqwest client; all operations are read-only
/// request/response calls, so the client is safe to share across tasks
/// without per-request locking.
pub struct EduplusClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    bot_feed_url: String,
}

impl EduplusClient {
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        bot_feed_url: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
            bot_feed_url: bot_feed_url.into(),
        })
    }

    /// Attendance percentage for every school.
    pub async fn attendance_statistics(&self) -> Result<AttendanceReport> {
        let attendance: Vec<Attendance> = self
            .post("/api/v3/analytics/average-attendance", None)
            .await?;
        Ok(AttendanceReport { attendance })
    }

    /// Enrollment totals broken down by gender and program.
    pub async fn enrollment_by_gender(&self) -> Result<EnrollmentByGender> {
        self.post("/api/analytics/quantity-of-students-by-gender", None)
            .await
    }

    /// Average GPA per school over a semester range.
    ///
    /// `level` 0 means all cohorts and is omitted from the outbound payload;
    /// 1 through 6 select a specific cohort and are sent verbatim.
    pub async fn schools_performance(
        &self,
        from_semester: i64,
        to_semester: i64,
        level: i64,
    ) -> Result<SchoolPerformanceReport> {
        let payload = performance_payload(from_semester, to_semester, level);
        let schools: Vec<SchoolPerformance> = self
            .post("/api/v3/analytics/average-gpa-by-school", Some(&payload))
            .await?;
        Ok(SchoolPerformanceReport { schools })
    }

    /// Retake/failure counts bucketed by number of fails.
    pub async fn student_retake_fail_ratio(&self) -> Result<RetakeRatioReport> {
        let failure_data: Vec<FailureBucket> = self
            .post("/api/v3/analytics/student-retakes-ratio", None)
            .await?;
        Ok(RetakeRatioReport { failure_data })
    }

    /// Enrollment counts for every elective module.
    pub async fn elective_enrollment(&self) -> Result<ElectiveEnrollmentReport> {
        let modules: Vec<ElectiveEnrollment> = self
            .post("/api/v4/analytics/get-elective-course-student-count", None)
            .await?;
        Ok(ElectiveEnrollmentReport { modules })
    }

    /// Full transcript for one student, looked up by public identifier.
    ///
    /// Two steps: resolve the opaque internal id from the public uid, then
    /// fetch the transcript by internal id. Each step signals its own
    /// not-found condition.
    pub async fn student_transcript(&self, student_id: &str) -> Result<TranscriptRecord> {
        let lookup: serde_json::Value = self
            .post(
                "/api/students/student/get-one-student-with-uid",
                Some(&json!({ "uid": student_id })),
            )
            .await?;
        if value_is_empty(&lookup) {
            return Err(ChatError::StudentNotFound(student_id.to_string()));
        }
        let resolved: StudentLookup = serde_json::from_value(lookup)?;

        let transcript: serde_json::Value = self
            .post(
                "/api/transcript/v4/transcript",
                Some(&json!({ "student_id": resolved.id })),
            )
            .await?;
        if value_is_empty(&transcript) {
            return Err(ChatError::TranscriptNotFound(student_id.to_string()));
        }
        Ok(serde_json::from_value(transcript)?)
    }

    /// Anonymous channel messages for one calendar date.
    ///
    /// An empty feed is a distinct no-data condition, never a silent empty
    /// list.
    pub async fn anonymous_messages(&self, date: NaiveDate) -> Result<Vec<AnonymousMessage>> {
        let url = format!("{}/messages?date={}", self.bot_feed_url, date.format("%Y-%m-%d"));
        debug!(%url, "fetching anonymous messages");
        let response = self.http.get(&url).send().await?;
        let raw = check_json(response).await?;
        if value_is_empty(&raw) {
            return Err(ChatError::EmptyFeed("anonymous message feed"));
        }
        Ok(serde_json::from_value(raw)?)
    }

    /// All timetable events in a date range.
    ///
    /// Pages through the feed at a fixed page size, accumulating every page
    /// before returning. Termination is driven by the server-reported
    /// pages-remaining counter reaching zero; a page whose body is empty is
    /// treated as a hard failure, not end-of-pagination.
    pub async fn class_held_info(
        &self,
        from_date: NaiveDate,
        to_date: NaiveDate,
    ) -> Result<Vec<TimetableEvent>> {
        let mut page = 1u32;
        let mut first = self.timetable_page(from_date, to_date, page).await?;
        let mut events = std::mem::take(&mut first.data);
        let mut remaining = first.total;

        while remaining != 0 {
            page += 1;
            let mut next = self.timetable_page(from_date, to_date, page).await?;
            events.append(&mut next.data);
            remaining = next.total;
        }
        debug!(pages = page, events = events.len(), "timetable feed accumulated");
        Ok(events)
    }

    async fn timetable_page(
        &self,
        from_date: NaiveDate,
        to_date: NaiveDate,
        page: u32,
    ) -> Result<TimetablePage> {
        let payload = json!({
            "filter": {
                "from_date": from_date.format("%Y-%m-%d").to_string(),
                "to_date": to_date.format("%Y-%m-%d").to_string(),
            },
            "pagination": { "page": page, "limit": TIMETABLE_PAGE_LIMIT },
        });
        let raw: serde_json::Value = self
            .post("/api/v4/analytics/teacher-event-details", Some(&payload))
            .await?;
        if value_is_empty(&raw) {
            return Err(ChatError::EmptyFeed("timetable feed"));
        }
        Ok(serde_json::from_value(raw)?)
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "eduplus request");
        let mut request = self.http.post(&url).header(AUTHORIZATION, &self.token);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        let raw = check_json(response).await?;
        Ok(serde_json::from_value(raw)?)
    }
}

#[derive(Debug, serde::Deserialize)]
struct StudentLookup {
    id: String,
}

/// Outbound payload for the school performance endpoint.
pub(crate) fn performance_payload(
    from_semester: i64,
    to_semester: i64,
    level: i64,
) -> serde_json::Value {
    let mut payload = json!({
        "from_semester": from_semester,
        "to_semester": to_semester,
    });
    if level != 0 {
        payload["level"] = json!(level);
    }
    payload
}

/// Non-2xx propagates as an API error; a body that is not JSON propagates as
/// a serialization error.
async fn check_json(response: reqwest::Response) -> Result<serde_json::Value> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ChatError::api(status.as_u16(), body));
    }
    Ok(serde_json::from_str(&body)?)
}

/// Mirrors the upstream "empty response" convention: null, empty string,
/// empty array, or empty object all count as no data.
fn value_is_empty(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Array(a) => a.is_empty(),
        serde_json::Value::Object(o) => o.is_empty(),
        _ => false,
    }
}
