//! Prompt templates for the three analysis steps.
//!
//! Builders are pure: the same input always produces the same prompt, and the
//! instruction text is fixed regardless of input content. Inputs are embedded
//! verbatim with no escaping — `str::replace` substitutes into the template in
//! a single pass, so instruction-like input text cannot alter the template.

/// Resume parsing prompt. Replace `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"You are a resume parser.

Extract:
- Skills
- Experience summary
- Education
- Tools & technologies

Resume:
{resume_text}

Return in bullet points."#;

/// Job description parsing prompt. Replace `{jd_text}` before sending.
pub const JD_PARSE_PROMPT_TEMPLATE: &str = r#"Extract:
- Required skills
- Responsibilities
- Preferred qualifications

Job Description:
{jd_text}

Return in bullet points."#;

/// ATS match prompt. Replace `{parsed_resume}` and `{parsed_jd}` before sending.
pub const ATS_MATCH_PROMPT_TEMPLATE: &str = r#"You are an Applicant Tracking System.

Compare the resume and job description.

Resume:
{parsed_resume}

Job Description:
{parsed_jd}

Provide:

1. Match percentage (0-100%)
2. Matching skills
3. Missing skills
4. Strengths
5. Improvement suggestions"#;

pub fn build_resume_prompt(resume_text: &str) -> String {
    RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

pub fn build_job_description_prompt(jd_text: &str) -> String {
    JD_PARSE_PROMPT_TEMPLATE.replace("{jd_text}", jd_text)
}

pub fn build_match_prompt(parsed_resume: &str, parsed_jd: &str) -> String {
    // One pass over the template, so placeholder-like text inside either
    // input is embedded literally instead of being re-substituted.
    let mut prompt = String::with_capacity(
        ATS_MATCH_PROMPT_TEMPLATE.len() + parsed_resume.len() + parsed_jd.len(),
    );
    let mut rest = ATS_MATCH_PROMPT_TEMPLATE;
    for (placeholder, value) in [("{parsed_resume}", parsed_resume), ("{parsed_jd}", parsed_jd)] {
        if let Some((head, tail)) = rest.split_once(placeholder) {
            prompt.push_str(head);
            prompt.push_str(value);
            rest = tail;
        }
    }
    prompt.push_str(rest);
    prompt
}
