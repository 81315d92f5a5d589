//! Normalized record shapes for Eduplus API responses.
//!
//! Each type is the normalization target for one JSON shape returned by the
//! LMS (or the bot feed). They are request-scoped: built from a response,
//! handed to the agent runtime as a tool result, then discarded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Average attendance for one school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub school_id: String,
    pub title: String,
    pub attendance_percentage: i64,
}

/// Attendance across all schools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceReport {
    pub attendance: Vec<Attendance>,
}

/// Enrollment total for one program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolProgram {
    pub total: i64,
    pub school_name: String,
}

/// One gender bucket: total plus per-program breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderEnrollment {
    pub sum: i64,
    pub programs: Vec<SchoolProgram>,
}

/// Enrollment broken down by gender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentByGender {
    pub male: GenderEnrollment,
    pub female: GenderEnrollment,
    pub not_set: GenderEnrollment,
}

/// Average GPA for one school.
///
/// `average_gpa` is a string on the wire; it is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolPerformance {
    pub average_gpa: String,
    pub title: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolPerformanceReport {
    pub schools: Vec<SchoolPerformance>,
}

/// Failure total for one school within a fail-count bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolFailures {
    pub total_count: i64,
    pub school_title: String,
}

/// Students grouped by how many times they have failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureBucket {
    pub fail_count_number: String,
    pub total_fails_count: i64,
    pub fails_by_school: Vec<SchoolFailures>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetakeRatioReport {
    pub failure_data: Vec<FailureBucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectiveCourse {
    pub id: String,
    pub title: String,
}

/// Enrollment count for one elective module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectiveEnrollment {
    pub course_info: ElectiveCourse,
    pub student_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectiveEnrollmentReport {
    pub modules: Vec<ElectiveEnrollment>,
}

impl ElectiveEnrollmentReport {
    /// Total enrollment across all elective modules.
    pub fn total_students(&self) -> i64 {
        self.modules.iter().map(|m| m.student_count).sum()
    }

    /// Modules with enrollment at or above `threshold`.
    pub fn popular_modules(&self, threshold: i64) -> Vec<&ElectiveEnrollment> {
        self.modules
            .iter()
            .filter(|m| m.student_count >= threshold)
            .collect()
    }
}

/// PDF attachment metadata on a transcript record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptPdf {
    pub id: Option<String>,
    pub name: Option<String>,
    pub size: Option<i64>,
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub bucket_name: Option<String>,
    pub file_upload_job_status: Option<String>,
}

/// One graded module within a transcript semester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptModule {
    pub gpa: Option<f64>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub grade: Option<String>,
    pub retake: Option<bool>,
    pub credits: Option<i64>,
    pub is_failed: Option<bool>,
    pub is_retake: Option<bool>,
    pub is_elective: Option<bool>,
    pub retake_credits: Option<i64>,
}

/// One semester of academic study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSemester {
    pub modules: Option<Vec<TranscriptModule>>,
    pub semester: Option<String>,
    pub student_id: Option<String>,
    pub overall_gpa: Option<String>,
    pub total_credits: Option<i64>,
    pub elective_modules: Option<Vec<serde_json::Value>>,
}

/// Academic and personal data inside a transcript record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentData {
    pub id: Option<String>,
    pub uid: Option<String>,
    pub level: Option<i64>,
    pub program: Option<String>,
    pub last_name: Option<String>,
    pub semesters: Option<Vec<TranscriptSemester>>,
    pub birth_date: Option<String>,
    pub first_name: Option<String>,
    pub date_of_issue: Option<String>,
    pub acceptance_year: Option<i64>,
}

/// Complete student transcript record. The upstream shape is optional-heavy;
/// every field may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    pub id: Option<String>,
    pub student_uid: Option<i64>,
    pub student_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub pdf: Option<TranscriptPdf>,
    pub data: Option<StudentData>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
}

/// One message from the anonymous student channel. The wire field is `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymousMessage {
    pub id: i64,
    pub message_id: i64,
    pub chat_id: i64,
    pub text: String,
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
    pub chat_title: String,
}

/// One timetable event. `lesson_start` being null means the teacher did not
/// hold the class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableEvent {
    pub total: i64,
    pub first_name: String,
    pub last_name: String,
    pub teacher_school: Option<String>,
    pub email: String,
    pub course_name: String,
    pub course_code: String,
    pub room_name: String,
    pub room_code: String,
    pub seats: i64,
    pub room_type: Option<String>,
    pub event_date: DateTime<Utc>,
    pub event_start: DateTime<Utc>,
    pub event_end: DateTime<Utc>,
    pub lesson_start: Option<DateTime<Utc>>,
    pub lesson_end: Option<DateTime<Utc>>,
    pub groups: Vec<String>,
    pub enroll_and_joined_student_count: i64,
    pub joined_student_count: i64,
}

/// One page of the timetable feed. `total` is the server-reported count of
/// pages remaining after this one, not a record count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetablePage {
    pub data: Vec<TimetableEvent>,
    pub total: i64,
}
