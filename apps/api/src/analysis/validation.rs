//! Input validation for an analysis run.

use crate::errors::AppError;

/// Decides whether a run may proceed, returning the validated document bytes.
///
/// Resume presence is checked first; if it fails, the job description is not
/// examined. The job description uses a trim-and-check policy: an input that
/// is only whitespace counts as missing.
pub fn validate_inputs<'a>(
    document: Option<&'a [u8]>,
    jd_text: &str,
) -> Result<&'a [u8], AppError> {
    let document = document.ok_or(AppError::MissingResume)?;
    if jd_text.trim().is_empty() {
        return Err(AppError::MissingJobDescription);
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_resume() {
        let result = validate_inputs(None, "a job description");
        assert!(matches!(result, Err(AppError::MissingResume)));
    }

    #[test]
    fn test_resume_checked_before_job_description() {
        // Both inputs missing: the resume error wins.
        let result = validate_inputs(None, "");
        assert!(matches!(result, Err(AppError::MissingResume)));
    }

    #[test]
    fn test_empty_job_description() {
        let result = validate_inputs(Some(b"%PDF-"), "");
        assert!(matches!(result, Err(AppError::MissingJobDescription)));
    }

    #[test]
    fn test_whitespace_only_job_description_rejected() {
        let result = validate_inputs(Some(b"%PDF-"), "   \n\t  ");
        assert!(matches!(result, Err(AppError::MissingJobDescription)));
    }

    #[test]
    fn test_valid_inputs_pass_document_through() {
        let document: &[u8] = b"%PDF-1.5";
        let validated = validate_inputs(Some(document), "Backend engineer").unwrap();
        assert_eq!(validated, document);
    }
}
