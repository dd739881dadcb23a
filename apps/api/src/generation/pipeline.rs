//! Cold email pipeline: orchestrates one generation request.
//!
//! Flow: extract resume text → fetch job page → extract postings →
//!       match portfolio links → compose email → package download.
//!
//! Strictly sequential, one attempt per step. The first failing step ends
//! the request with its own error kind.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::fetcher::PageFetcher;
use crate::generation::composer::{compose_email, ComposeInput};
use crate::generation::posting_extractor::extract_postings;
use crate::generation::tone::{EmailLanguage, EmailTone};
use crate::llm_client::LlmClient;
use crate::models::email::{DownloadLink, EmailDraft};
use crate::portfolio::Portfolio;
use crate::resume::{extract_resume, ResumeUpload};

/// A validated generation request.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub candidate_name: String,
    pub job_url: String,
    pub tone: EmailTone,
    pub language: EmailLanguage,
    pub resume: ResumeUpload,
}

/// Collaborators the pipeline calls into.
pub struct Pipeline<'a> {
    pub llm: &'a LlmClient,
    pub fetcher: &'a PageFetcher,
    pub portfolio: &'a Portfolio,
}

impl Pipeline<'_> {
    pub async fn generate(&self, request: GenerateRequest) -> Result<EmailDraft, AppError> {
        let request_id = Uuid::new_v4();
        info!(%request_id, "Generating cold email for {}", request.job_url);

        // Step 1: Resume text
        let resume = extract_resume(request.resume).await?;
        info!(%request_id, "Resume analysed ({:?})", resume.format);

        // Step 2: Job page
        let page = self.fetcher.fetch_text(&request.job_url).await?;

        // Step 3: Postings
        let postings = extract_postings(&page.text, self.llm).await?;
        let Some(posting) = postings.first().cloned() else {
            return Err(AppError::PostingExtraction(
                "No job postings found on the page. Make sure the URL points to a job description."
                    .to_string(),
            ));
        };
        info!(%request_id, "Using posting '{}' ({} found)", posting.role, postings.len());

        // Step 4: Portfolio links
        let portfolio_links = self.portfolio.query_links(&posting.skills);

        // Step 5: Compose
        let email = compose_email(
            self.llm,
            &ComposeInput {
                candidate_name: &request.candidate_name,
                tone: request.tone,
                language: request.language,
                resume_text: &resume.text,
                posting: &posting,
                portfolio_links: &portfolio_links,
            },
        )
        .await?;

        info!(%request_id, "Cold email ready");

        Ok(EmailDraft {
            download: DownloadLink::for_email(&request.candidate_name, &email),
            email,
            posting,
            postings,
            portfolio_links,
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::chat_completion;
    use crate::resume::test_support::docx_with_paragraphs;
    use crate::resume::{ResumeError, DOCX_MIME};
    use bytes::Bytes;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const JOB_PAGE: &str = r#"<html><body>
        <h1>NLP Engineer</h1>
        <p>2+ years building NLP systems in Python.</p>
    </body></html>"#;

    const POSTINGS_JSON: &str = r#"[{"role": "NLP Engineer", "experience": "2+ years", "skills": ["nlp", "Python"], "description": "Build NLP systems."}]"#;

    struct Harness {
        server: MockServer,
        llm: LlmClient,
        fetcher: PageFetcher,
        portfolio: Portfolio,
    }

    impl Harness {
        async fn new() -> Self {
            let server = MockServer::start().await;
            let llm = LlmClient::new("k".into(), &server.uri(), "m".into()).unwrap();
            Self {
                server,
                llm,
                fetcher: PageFetcher::new().unwrap(),
                portfolio: Portfolio::default(),
            }
        }

        fn pipeline(&self) -> Pipeline<'_> {
            Pipeline {
                llm: &self.llm,
                fetcher: &self.fetcher,
                portfolio: &self.portfolio,
            }
        }

        async fn serve_job_page(&self) {
            Mock::given(method("GET"))
                .and(path("/careers/nlp"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .insert_header("content-type", "text/html")
                        .set_body_string(JOB_PAGE),
                )
                .mount(&self.server)
                .await;
        }

        async fn answer_extraction(&self, content: &str) {
            Mock::given(method("POST"))
                .and(path("/chat/completions"))
                .and(body_string_contains("SCRAPED TEXT FROM WEBSITE"))
                .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion(content)))
                .mount(&self.server)
                .await;
        }

        async fn answer_composition(&self, content: &str, expected_calls: u64) {
            Mock::given(method("POST"))
                .and(path("/chat/completions"))
                .and(body_string_contains("CANDIDATE RESUME"))
                .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion(content)))
                .expect(expected_calls)
                .mount(&self.server)
                .await;
        }

        fn request(&self, resume: ResumeUpload) -> GenerateRequest {
            GenerateRequest {
                candidate_name: "Jane Doe".to_string(),
                job_url: format!("{}/careers/nlp", self.server.uri()),
                tone: EmailTone::Professional,
                language: EmailLanguage::English,
                resume,
            }
        }
    }

    fn docx_resume() -> ResumeUpload {
        ResumeUpload {
            file_name: Some("jane.docx".to_string()),
            content_type: Some(DOCX_MIME.to_string()),
            data: Bytes::from(docx_with_paragraphs(&[
                "Jane Doe",
                "Built a grammar scoring engine in Python.",
            ])),
        }
    }

    #[tokio::test]
    async fn test_full_pipeline_produces_email_and_download() {
        let harness = Harness::new().await;
        harness.serve_job_page().await;
        harness.answer_extraction(POSTINGS_JSON).await;
        harness
            .answer_composition("Subject: NLP Engineer\n\nDear Hiring Manager,\nJane Doe", 1)
            .await;

        let draft = harness
            .pipeline()
            .generate(harness.request(docx_resume()))
            .await
            .unwrap();

        assert!(draft.email.starts_with("Subject: NLP Engineer"));
        assert_eq!(draft.posting.role, "NLP Engineer");
        assert_eq!(draft.postings.len(), 1);
        let titles: Vec<_> = draft.portfolio_links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["AI Resume Analyzer", "Grammar Scoring Engine"]);
        assert_eq!(draft.download.filename, "cold_email_Jane_Doe.txt");
    }

    #[tokio::test]
    async fn test_unsupported_resume_stops_before_any_network_call() {
        let harness = Harness::new().await;
        harness.answer_composition("unused", 0).await;

        let resume = ResumeUpload {
            file_name: Some("notes.txt".to_string()),
            content_type: Some("text/plain".to_string()),
            data: Bytes::from_static(b"plain text resume"),
        };
        let err = harness
            .pipeline()
            .generate(harness.request(resume))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Resume(ResumeError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_unreachable_page_is_fetch_error() {
        let harness = Harness::new().await;
        harness.answer_composition("unused", 0).await;

        let mut request = harness.request(docx_resume());
        request.job_url = format!("{}/careers/missing", harness.server.uri());
        let err = harness.pipeline().generate(request).await.unwrap_err();
        assert!(matches!(err, AppError::Fetch(_)));
    }

    #[tokio::test]
    async fn test_page_without_postings_is_extraction_error() {
        let harness = Harness::new().await;
        harness.serve_job_page().await;
        harness.answer_extraction("[]").await;
        harness.answer_composition("unused", 0).await;

        let err = harness
            .pipeline()
            .generate(harness.request(docx_resume()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PostingExtraction(msg) if msg.contains("No job postings")));
    }

    #[tokio::test]
    async fn test_composition_failure_is_surfaced() {
        let harness = Harness::new().await;
        harness.serve_job_page().await;
        harness.answer_extraction(POSTINGS_JSON).await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_string_contains("CANDIDATE RESUME"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .expect(1)
            .mount(&harness.server)
            .await;

        let err = harness
            .pipeline()
            .generate(harness.request(docx_resume()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Composition(msg) if msg.contains("500")));
    }
}
