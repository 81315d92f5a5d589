//! Tool contracts for the Eduplus operations.
//!
//! Each client operation becomes a named, schema-described callable. The
//! descriptions are what the agent's tool-selection reasoning sees; they say
//! when to call the tool, not how it works.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::{ChatError, Result};
use crate::tools::{FunctionTool, Tool, ToolParameters};

use super::client::EduplusClient;

/// The full Eduplus tool registry.
pub fn eduplus_tools(client: Arc<EduplusClient>) -> Vec<Arc<dyn Tool>> {
    vec![
        attendance_tool(client.clone()),
        enrollment_by_gender_tool(client.clone()),
        schools_performance_tool(client.clone()),
        retake_fail_ratio_tool(client.clone()),
        elective_enrollment_tool(client.clone()),
        student_transcript_tool(client.clone()),
        anonymous_messages_tool(client.clone()),
        class_held_info_tool(client),
    ]
}

fn attendance_tool(client: Arc<EduplusClient>) -> Arc<dyn Tool> {
    Arc::new(FunctionTool::new(
        "get_attendance_statistics",
        "Get attendance statistics from Eduplus: average attendance percentage for every school.",
        ToolParameters::empty(),
        move |_args| {
            let client = client.clone();
            async move { to_json(client.attendance_statistics().await?) }
        },
    ))
}

fn enrollment_by_gender_tool(client: Arc<EduplusClient>) -> Arc<dyn Tool> {
    Arc::new(FunctionTool::new(
        "get_enrollment_by_gender",
        "Get enrollment statistics by gender (female vs male ratio) from Eduplus. \
         Each bucket is the total number of students of that gender across all programs, \
         with a per-program breakdown.",
        ToolParameters::empty(),
        move |_args| {
            let client = client.clone();
            async move { to_json(client.enrollment_by_gender().await?) }
        },
    ))
}

fn schools_performance_tool(client: Arc<EduplusClient>) -> Arc<dyn Tool> {
    Arc::new(FunctionTool::new(
        "get_schools_performance",
        "Get schools performance (average GPA) from Eduplus. \
         Use level 0 for the full average GPA by school.",
        ToolParameters::object()
            .integer("from_semester", "Start semester, e.g. 9 for FALL-2024", true)
            .integer("to_semester", "End semester, e.g. 9 for FALL-2024", true)
            .integer(
                "level",
                "Cohort level from 1 (freshman) to 6 (senior medical student); 0 for all levels",
                true,
            )
            .build(),
        move |args| {
            let client = client.clone();
            async move {
                let from_semester = args.get_i64("from_semester")?;
                let to_semester = args.get_i64("to_semester")?;
                let level = args.get_i64("level")?;
                to_json(
                    client
                        .schools_performance(from_semester, to_semester, level)
                        .await?,
                )
            }
        },
    ))
}

fn retake_fail_ratio_tool(client: Arc<EduplusClient>) -> Arc<dyn Tool> {
    Arc::new(FunctionTool::new(
        "get_student_retake_fail_ratio",
        "Get the student retake ratio from Eduplus, including failed subjects, \
         bucketed by how many times students have failed.",
        ToolParameters::empty(),
        move |_args| {
            let client = client.clone();
            async move { to_json(client.student_retake_fail_ratio().await?) }
        },
    ))
}

fn elective_enrollment_tool(client: Arc<EduplusClient>) -> Arc<dyn Tool> {
    Arc::new(FunctionTool::new(
        "get_elective_enrollment",
        "Get elective module enrollment counts from Eduplus.",
        ToolParameters::empty(),
        move |_args| {
            let client = client.clone();
            async move { to_json(client.elective_enrollment().await?) }
        },
    ))
}

fn student_transcript_tool(client: Arc<EduplusClient>) -> Arc<dyn Tool> {
    Arc::new(FunctionTool::new(
        "get_student_info_transcript",
        "Get a student's transcript and studied subjects with grades and credits \
         by student ID, the student's unique identifier (e.g. 210030).",
        ToolParameters::object()
            .string("student_id", "Unique identifier for the student, e.g. 210030", true)
            .build(),
        move |args| {
            let client = client.clone();
            async move {
                let student_id = args.get_str("student_id")?;
                to_json(client.student_transcript(student_id).await?)
            }
        },
    ))
}

fn anonymous_messages_tool(client: Arc<EduplusClient>) -> Arc<dyn Tool> {
    Arc::new(FunctionTool::new(
        "get_anonymous_messages",
        "Get anonymous student channel messages for one date (YYYY-MM-DD).",
        ToolParameters::object()
            .string("date", "Calendar date in YYYY-MM-DD format", true)
            .build(),
        move |args| {
            let client = client.clone();
            async move {
                let date = parse_date(args.get_str("date")?)?;
                to_json(client.anonymous_messages(date).await?)
            }
        },
    ))
}

fn class_held_info_tool(client: Arc<EduplusClient>) -> Arc<dyn Tool> {
    Arc::new(FunctionTool::new(
        "get_class_held_info",
        "Get class-held info for a date range (YYYY-MM-DD), covering all timetable \
         events with class start and end times. A null lesson_start means the \
         teacher did not hold the lesson.",
        ToolParameters::object()
            .string("from_date", "Range start in YYYY-MM-DD format", true)
            .string("to_date", "Range end in YYYY-MM-DD format", true)
            .build(),
        move |args| {
            let client = client.clone();
            async move {
                let from_date = parse_date(args.get_str("from_date")?)?;
                let to_date = parse_date(args.get_str("to_date")?)?;
                to_json(client.class_held_info(from_date, to_date).await?)
            }
        },
    ))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ChatError::InvalidArgument(format!("invalid date '{raw}', expected YYYY-MM-DD")))
}

fn to_json<T: serde::Serialize>(value: T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}
