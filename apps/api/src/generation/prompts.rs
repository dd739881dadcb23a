// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts: posting extraction
// runs under JSON_ONLY_SYSTEM.

/// Posting extraction prompt template. Fill `{page_text}` before sending.
pub const POSTING_EXTRACT_PROMPT_TEMPLATE: &str = r#"### SCRAPED TEXT FROM WEBSITE:
{page_text}

### INSTRUCTION:
You are an expert recruiter reading noisy, scraped career pages.
The scraped text is from the careers page of a website.
Your job is to extract the job postings and return them in JSON format containing the following keys:
`role`, `experience`, `skills` and `description`.

Return a JSON ARRAY with one object per posting, using this EXACT schema (no extra fields):
[
  {
    "role": "Machine Learning Engineer",
    "experience": "3+ years",
    "skills": ["Python", "PyTorch", "NLP"],
    "description": "One or two sentences summarising the responsibilities."
  }
]

RULES:
1. `skills` is a list of short skill names as they appear in the posting
2. Use an empty string when the page does not state the experience requirement
3. Ignore navigation, cookie banners, footers and unrelated page content
4. If the page contains no job posting, return []

### VALID JSON (NO PREAMBLE):"#;

/// System prompt for email composition: plain prose output.
pub const COMPOSE_SYSTEM: &str = "You are an expert career coach who writes short, \
    specific cold emails that get replies. You only state facts that appear in the \
    candidate's resume and never invent employers, degrees or metrics.";

/// Email composition prompt template.
/// Fill: {job_description}, {candidate_name}, {resume_text}, {portfolio_links},
///          {tone_instruction}, {language}, {no_preamble_instruction}
pub const COMPOSE_PROMPT_TEMPLATE: &str = r#"### JOB DESCRIPTION:
{job_description}

### CANDIDATE RESUME:
{resume_text}

### RELEVANT PORTFOLIO LINKS:
{portfolio_links}

### INSTRUCTION:
You are {candidate_name}, applying for the role above. Write a cold email to the hiring
manager for this job that:
- opens with a subject line on its own first line, formatted as "Subject: ..."
- explains in 2-3 short paragraphs how the experience and skills in the resume match the role
- weaves in the most relevant portfolio links above as evidence of the candidate's work
- ends with a clear call to action and is signed with the candidate's name, {candidate_name}
- stays under 200 words
- is written in {language}

STYLE:
{tone_instruction}

{no_preamble_instruction}

### EMAIL (NO PREAMBLE):"#;
