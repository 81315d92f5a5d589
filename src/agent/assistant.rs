//! The campus assistant: one agent identity, its tool policy, and the engine
//! that executes it.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::Result;
use crate::tools::Tool;

use super::engine::ReasoningEngine;
use super::AgentMessage;

/// The unified university assistant.
///
/// Binds the Eduplus tool registry, the document-search tool, and the policy
/// instructions that disambiguate tool choice. The reasoning loop itself
/// lives behind [`ReasoningEngine`].
pub struct Assistant {
    name: String,
    instructions: String,
    tools: Vec<Arc<dyn Tool>>,
    engine: Arc<dyn ReasoningEngine>,
}

impl Assistant {
    pub fn new(engine: Arc<dyn ReasoningEngine>, tools: Vec<Arc<dyn Tool>>) -> Self {
        let today = chrono::Utc::now().date_naive();
        Self {
            name: "Campus Comprehensive Assistant".to_string(),
            instructions: build_instructions(today),
            tools,
            engine,
        }
    }

    /// Answer one user utterance given the prior transcript.
    pub async fn respond(&self, transcript: &[AgentMessage], user_message: &str) -> Result<String> {
        let mut messages = transcript.to_vec();
        messages.push(AgentMessage::user(user_message));
        debug!(agent = %self.name, turns = messages.len(), "dispatching to engine");
        self.engine.run(&self.instructions, &messages, &self.tools).await
    }
}

/// Policy document handed to the reasoning engine as the system prompt.
fn build_instructions(today: NaiveDate) -> String {
    format!(
        "You are the unified AI assistant for the university. You provide accurate \
information about both general university matters and the Eduplus Learning \
Management System (LMS).\n\
Current date: {today}\n\n\
Data sources:\n\
1. General university information (faculty members, academic programs, \
facilities, tuition fees, contacts, policies, history) lives in the document \
knowledge base; use the search_documents tool for it.\n\
2. Student records and LMS statistics (transcripts, enrollment, attendance, \
performance) come from the Eduplus API tools.\n\n\
Tool usage rules:\n\
- Student transcripts: use ONLY get_student_info_transcript. You need the \
student's ID, and you must always mention that ID in the response.\n\
- Anonymous channel analysis: use ONLY get_anonymous_messages. Retrieve the \
messages, summarize the general themes, list the top 10 most frequently \
discussed topics about university life with the main sentiment behind each, \
and ignore messages clearly unrelated to student life (spam, off-topic).\n\
- Daily summary report: gather data with get_schools_performance, \
get_enrollment_by_gender, get_elective_enrollment, and \
get_attendance_statistics, and compile a structured report covering exactly \
those four areas.\n\
- Other statistics: pick the most specific tool (for example \
get_student_retake_fail_ratio for retake questions).\n\
- Timetable questions: use get_class_held_info; the default range is the \
current date. A null lesson_start means the teacher did not hold the lesson.\n\n\
Decision making:\n\
- General facts, policies, programs, or people: prefer search_documents.\n\
- Specific student data, LMS statistics, or the anonymous channel: prefer the \
Eduplus tools. Combine both sources when a question needs them.\n\n\
Constraints:\n\
- If the tools return no relevant data, answer clearly with \"I don't know\" \
or \"I do not have access to that specific information.\" Never invent or \
hallucinate data; report only what the tools returned.\n\
- If a question is ambiguous about which source it needs, ask for \
clarification.\n\
- Stay within the scope of university information and Eduplus data; no \
opinions or speculation.\n\
- If the user writes in Russian, answer in Russian with accurate \
terminology."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_interpolate_current_date() {
        let text = build_instructions(NaiveDate::from_ymd_opt(2025, 4, 18).unwrap());
        assert!(text.contains("Current date: 2025-04-18"));
    }

    #[test]
    fn instructions_name_the_transcript_rule() {
        let text = build_instructions(NaiveDate::from_ymd_opt(2025, 4, 18).unwrap());
        assert!(text.contains("get_student_info_transcript"));
        assert!(text.contains("I don't know"));
    }
}
