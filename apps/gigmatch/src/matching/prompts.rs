// Prompt templates for match explanations.

/// One-sentence explanation prompt. Every `{placeholder}` is replaced before sending.
pub const MATCH_EXPLANATION_PROMPT_TEMPLATE: &str = r#"A worker is viewing a job suggested to them with a match score of {score}/100.

Worker skills: {worker_skills}
Job required skills: {required_skills}
Worker preferred categories: {worker_categories}
Job category: {job_category}
Worker location: {worker_location}
Job location: {job_location}
Worker availability: {availability}
Job type: {job_type}

In ONE friendly sentence of at most 20 words, tell the worker why this job suits them.
Mention only facts listed above. Do not repeat the score."#;
