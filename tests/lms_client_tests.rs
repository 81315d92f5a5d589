//! Wire-level tests for the Eduplus client against a mock LMS.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use educhat::lms::EduplusClient;
use educhat::ChatError;

const TOKEN: &str = "lms-test-token";

fn client(server: &MockServer) -> EduplusClient {
    EduplusClient::new(server.uri(), TOKEN, server.uri()).unwrap()
}

fn timetable_event(course: &str) -> serde_json::Value {
    json!({
        "total": 300,
        "first_name": "Aziza",
        "last_name": "Karimova",
        "teacher_school": "School of Medicine",
        "email": "a.karimova@example.edu",
        "course_name": course,
        "course_code": "MED101",
        "room_name": "Lecture Hall 2",
        "room_code": "LH2",
        "seats": 120,
        "room_type": "lecture_hall",
        "event_date": "2025-04-18T00:00:00Z",
        "event_start": "2025-04-18T09:00:00Z",
        "event_end": "2025-04-18T10:30:00Z",
        "lesson_start": "2025-04-18T09:02:00Z",
        "lesson_end": "2025-04-18T10:28:00Z",
        "groups": ["MED-24-1"],
        "enroll_and_joined_student_count": 42,
        "joined_student_count": 40,
    })
}

#[tokio::test]
async fn attendance_sends_raw_token_and_normalizes_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/analytics/average-attendance"))
        .and(header("authorization", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "school_id": "sch-1", "title": "Engineering", "attendance_percentage": 91 },
            { "school_id": "sch-2", "title": "Medicine", "attendance_percentage": 84 },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let report = client(&server).attendance_statistics().await.unwrap();
    assert_eq!(report.attendance.len(), 2);
    assert_eq!(report.attendance[1].title, "Medicine");
}

#[tokio::test]
async fn performance_request_omits_level_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/analytics/average-gpa-by-school"))
        .and(body_json(json!({ "from_semester": 8, "to_semester": 9 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "average_gpa": "3.41", "title": "Medicine", "id": "sch-2" },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let report = client(&server).schools_performance(8, 9, 0).await.unwrap();
    assert_eq!(report.schools[0].average_gpa, "3.41");
}

#[tokio::test]
async fn performance_request_includes_nonzero_level() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/analytics/average-gpa-by-school"))
        .and(body_json(json!({ "from_semester": 8, "to_semester": 9, "level": 3 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let report = client(&server).schools_performance(8, 9, 3).await.unwrap();
    assert!(report.schools.is_empty());
}

#[tokio::test]
async fn transcript_resolves_internal_id_then_fetches() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/students/student/get-one-student-with-uid"))
        .and(body_json(json!({ "uid": "210030" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": "internal-77" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/transcript/v4/transcript"))
        .and(body_json(json!({ "student_id": "internal-77" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "rec-1",
            "student_uid": 210030,
            "data": { "first_name": "Jasur", "level": 2 },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = client(&server).student_transcript("210030").await.unwrap();
    assert_eq!(record.student_uid, Some(210030));
    assert_eq!(record.data.unwrap().first_name.as_deref(), Some("Jasur"));
}

#[tokio::test]
async fn unknown_student_fails_before_transcript_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/students/student/get-one-student-with-uid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/transcript/v4/transcript"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server).student_transcript("999999").await.unwrap_err();
    assert!(matches!(err, ChatError::StudentNotFound(ref uid) if uid == "999999"));
}

#[tokio::test]
async fn empty_transcript_body_is_transcript_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/students/student/get-one-student-with-uid"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": "internal-77" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/transcript/v4/transcript"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .mount(&server)
        .await;

    let err = client(&server).student_transcript("210030").await.unwrap_err();
    assert!(matches!(err, ChatError::TranscriptNotFound(_)));
}

#[tokio::test]
async fn anonymous_feed_parses_dated_messages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/messages"))
        .and(query_param("date", "2025-04-18"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "message_id": 42,
                "chat_id": 7,
                "text": "the cafeteria queue is too long",
                "date": "2025-04-18T10:30:00Z",
                "chat_title": "Anonymous Channel",
            },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let date = NaiveDate::from_ymd_opt(2025, 4, 18).unwrap();
    let messages = client(&server).anonymous_messages(date).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].message_id, 42);
}

#[tokio::test]
async fn empty_anonymous_feed_is_an_error_not_an_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let date = NaiveDate::from_ymd_opt(2025, 4, 18).unwrap();
    let err = client(&server).anonymous_messages(date).await.unwrap_err();
    assert!(matches!(err, ChatError::EmptyFeed("anonymous message feed")));
}

#[tokio::test]
async fn timetable_accumulates_pages_until_none_remain() {
    let server = MockServer::start().await;
    let page_body = |page: u32| {
        json!({
            "filter": { "from_date": "2025-04-14", "to_date": "2025-04-18" },
            "pagination": { "page": page, "limit": 50 },
        })
    };
    for (page, remaining) in [(1u32, 2i64), (2, 1), (3, 0)] {
        Mock::given(method("POST"))
            .and(path("/api/v4/analytics/teacher-event-details"))
            .and(body_json(page_body(page)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [timetable_event("Anatomy"), timetable_event("Histology")],
                "total": remaining,
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let from = NaiveDate::from_ymd_opt(2025, 4, 14).unwrap();
    let to = NaiveDate::from_ymd_opt(2025, 4, 18).unwrap();
    let events = client(&server).class_held_info(from, to).await.unwrap();
    assert_eq!(events.len(), 6);
    assert_eq!(events[0].course_name, "Anatomy");
}

#[tokio::test]
async fn empty_timetable_page_is_a_hard_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/analytics/teacher-event-details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .mount(&server)
        .await;

    let from = NaiveDate::from_ymd_opt(2025, 4, 14).unwrap();
    let to = NaiveDate::from_ymd_opt(2025, 4, 18).unwrap();
    let err = client(&server).class_held_info(from, to).await.unwrap_err();
    assert!(matches!(err, ChatError::EmptyFeed("timetable feed")));
}

#[tokio::test]
async fn upstream_failure_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/analytics/average-attendance"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = client(&server).attendance_statistics().await.unwrap_err();
    match err {
        ChatError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}
