// All LLM prompt constants for the Advice module (summarization + suggestions).

/// System prompt for resume summarization — plain text output, no JSON.
pub const SUMMARIZE_SYSTEM: &str = "You are a helpful assistant that summarizes resumes. \
    Produce a concise bullet-point summary emphasizing key technical skills, \
    major projects or roles, and significant achievements. \
    Each bullet should be under 25 words.";

/// Summarization prompt template. Replace `{resume_text}` before sending.
pub const SUMMARIZE_PROMPT_TEMPLATE: &str = r#"Here is a candidate's resume (possibly long):

```
{resume_text}
```

Please return a bullet-point summary (plain text, no JSON) capturing:
- Core technical skills (e.g., languages, frameworks, tools)
- Key projects or positions and responsibilities
- Significant measurable outcomes (e.g., "Improved X by 30%")

Keep the entire summary under 8 bullets."#;

/// System prompt for suggestion generation — enforces JSON-only output.
pub const SUGGEST_SYSTEM: &str =
    "You are an expert resume coach helping a candidate close the gap to a job description. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Suggestion prompt template. Replace `{missing_skills}`, `{jd_text}`,
/// `{resume_summary}`, and `{original_bullets}` before sending.
pub const SUGGEST_PROMPT_TEMPLATE: &str = r#"A candidate's resume was matched against a job description.
These JD skills were NOT found in the resume: {missing_skills}

Job description:
```
{jd_text}
```

Resume summary:
```
{resume_summary}
```

Original resume bullets:
{original_bullets}

Return a JSON object with this EXACT schema (no extra fields):
{
  "rewritten_bullets": ["..."],
  "suggestions": ["..."]
}

Rules:
- "rewritten_bullets": the original bullets, rewritten to better reflect the JD's
  language WITHOUT inventing experience the candidate does not have. Keep one
  output bullet per input bullet, in order.
- "suggestions": one concrete, actionable suggestion per missing skill (how to
  gain, demonstrate, or surface it). If no skills are missing, return a single
  encouraging suggestion.
- Never fabricate employers, titles, dates, or metrics."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_carry_their_placeholders() {
        assert!(SUMMARIZE_PROMPT_TEMPLATE.contains("{resume_text}"));
        for placeholder in [
            "{missing_skills}",
            "{jd_text}",
            "{resume_summary}",
            "{original_bullets}",
        ] {
            assert!(SUGGEST_PROMPT_TEMPLATE.contains(placeholder), "{placeholder} missing");
        }
    }
}
