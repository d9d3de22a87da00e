//! Analysis pipeline — validate, extract, then three sequential completion
//! calls: parse resume, parse job description, compute the ATS match.
//!
//! Each run owns its intermediate values; nothing is cached or shared across
//! runs. Any failure abandons the run: intermediate outputs are dropped and
//! no partial result is surfaced.

use tracing::{debug, info};

use crate::analysis::prompts::{
    build_job_description_prompt, build_match_prompt, build_resume_prompt,
};
use crate::analysis::validation::validate_inputs;
use crate::errors::AppError;
use crate::extraction::extract_resume_text;
use crate::llm_client::CompletionClient;

/// The three texts produced by one successful run, in display order.
/// Free-form LLM output, passed through unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub parsed_resume: String,
    pub parsed_job_description: String,
    pub match_report: String,
}

/// Runs the full pipeline for one (document, job description) pair.
///
/// Steps run strictly in sequence; a step only starts once the previous one
/// succeeded, and both parse results exist before the match step is built.
pub async fn run_analysis(
    document: Option<&[u8]>,
    jd_text: &str,
    llm: &dyn CompletionClient,
) -> Result<AnalysisResult, AppError> {
    let document = validate_inputs(document, jd_text)?;

    let extracted = extract_resume_text(document)
        .map_err(|e| AppError::DocumentUnreadable(e.to_string()))?;
    debug!(
        pages = extracted.pages.len(),
        chars = extracted.text.len(),
        "resume text extracted"
    );

    let parsed_resume = llm
        .complete(&build_resume_prompt(&extracted.text))
        .await
        .map_err(|e| AppError::CompletionUnavailable(format!("resume parsing failed: {e}")))?;
    debug!(chars = parsed_resume.len(), "resume parsed");

    let parsed_job_description = llm
        .complete(&build_job_description_prompt(jd_text))
        .await
        .map_err(|e| {
            AppError::CompletionUnavailable(format!("job description parsing failed: {e}"))
        })?;
    debug!(chars = parsed_job_description.len(), "job description parsed");

    let match_report = llm
        .complete(&build_match_prompt(&parsed_resume, &parsed_job_description))
        .await
        .map_err(|e| AppError::CompletionUnavailable(format!("ATS matching failed: {e}")))?;

    info!("analysis run complete");

    Ok(AnalysisResult {
        parsed_resume,
        parsed_job_description,
        match_report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::fixtures::minimal_pdf;
    use crate::llm_client::CompletionError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    enum MockReply {
        Text(&'static str),
        Unavailable,
    }

    /// Scripted completion client: pops one reply per call and records the
    /// prompts it was given.
    struct MockClient {
        replies: Mutex<VecDeque<MockReply>>,
        prompts: Mutex<Vec<String>>,
    }

    impl MockClient {
        fn new(replies: Vec<MockReply>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionClient for MockClient {
        async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match self.replies.lock().unwrap().pop_front() {
                Some(MockReply::Text(text)) => Ok(text.to_string()),
                Some(MockReply::Unavailable) | None => Err(CompletionError::Api {
                    status: 503,
                    message: "service unavailable".to_string(),
                }),
            }
        }
    }

    /// One-page PDF whose single text line is `text`.
    fn resume_pdf(text: &str) -> Vec<u8> {
        minimal_pdf(&[text])
    }

    #[tokio::test]
    async fn test_missing_resume_issues_no_completion_calls() {
        let client = MockClient::new(vec![]);
        let result = run_analysis(None, "Backend engineer", &client).await;

        assert!(matches!(result, Err(AppError::MissingResume)));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_job_description_issues_no_completion_calls() {
        let pdf = resume_pdf("Python, SQL");
        let client = MockClient::new(vec![]);
        let result = run_analysis(Some(&pdf), "   ", &client).await;

        assert!(matches!(result, Err(AppError::MissingJobDescription)));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unreadable_document_halts_before_any_call() {
        let client = MockClient::new(vec![]);
        let result = run_analysis(Some(b"not a pdf"), "Backend engineer", &client).await;

        assert!(matches!(result, Err(AppError::DocumentUnreadable(_))));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_resume_parse_failure_stops_after_one_call() {
        let pdf = resume_pdf("Python, SQL, 3 years backend experience");
        let client = MockClient::new(vec![MockReply::Unavailable]);
        let result = run_analysis(
            Some(&pdf),
            "Looking for a backend engineer skilled in Python and SQL",
            &client,
        )
        .await;

        match result {
            Err(AppError::CompletionUnavailable(msg)) => {
                assert!(msg.contains("resume parsing failed"));
            }
            other => panic!("expected CompletionUnavailable, got {other:?}"),
        }
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_match_failure_produces_no_partial_result() {
        let pdf = resume_pdf("Python, SQL");
        let client = MockClient::new(vec![
            MockReply::Text("- Python\n- SQL"),
            MockReply::Text("- Backend role"),
            MockReply::Unavailable,
        ]);
        let result = run_analysis(Some(&pdf), "Backend engineer", &client).await;

        match result {
            Err(AppError::CompletionUnavailable(msg)) => {
                assert!(msg.contains("ATS matching failed"));
            }
            other => panic!("expected CompletionUnavailable, got {other:?}"),
        }
        assert_eq!(client.call_count(), 3);
    }

    #[tokio::test]
    async fn test_successful_run_returns_the_three_texts_unmodified() {
        let pdf = resume_pdf("Python, SQL, 3 years backend experience");
        let client = MockClient::new(vec![
            MockReply::Text("PARSED RESUME"),
            MockReply::Text("PARSED JD"),
            MockReply::Text("MATCH REPORT"),
        ]);
        let result = run_analysis(
            Some(&pdf),
            "Looking for a backend engineer skilled in Python and SQL",
            &client,
        )
        .await
        .unwrap();

        assert_eq!(
            result,
            AnalysisResult {
                parsed_resume: "PARSED RESUME".to_string(),
                parsed_job_description: "PARSED JD".to_string(),
                match_report: "MATCH REPORT".to_string(),
            }
        );
        assert_eq!(client.call_count(), 3);
    }

    #[tokio::test]
    async fn test_prompts_carry_the_right_inputs_in_order() {
        let pdf = resume_pdf("Python and SQL");
        let client = MockClient::new(vec![
            MockReply::Text("PARSED RESUME"),
            MockReply::Text("PARSED JD"),
            MockReply::Text("MATCH REPORT"),
        ]);
        run_analysis(Some(&pdf), "Backend engineer wanted", &client)
            .await
            .unwrap();

        let prompts = client.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 3);
        assert!(prompts[0].contains("You are a resume parser."));
        assert!(prompts[0].contains("Python and SQL"));
        assert!(prompts[1].contains("Backend engineer wanted"));
        // The match prompt is built from the two parsed outputs, not the raw inputs.
        assert!(prompts[2].contains("You are an Applicant Tracking System."));
        assert!(prompts[2].contains("PARSED RESUME"));
        assert!(prompts[2].contains("PARSED JD"));
    }
}
