//! Job Search Assistant: builds job-board search URLs for a professional domain.
//!
//! No board is contacted; every result is a ready-to-open search link built
//! from the domain's keywords and the board's URL template.

pub mod catalog;
pub mod handlers;

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use url::form_urlencoded;

use crate::job_search::catalog::{find_domain, DomainInsights, DOMAINS};

pub const DEFAULT_LOCATION: &str = "United States";

/// Keywords used per suggestion search.
const SUGGESTION_KEYWORDS: usize = 3;
/// Boards used per suggestion search, in `JobSite::ALL` order.
const SUGGESTION_SITES: usize = 4;
/// Keywords used per company search.
const COMPANY_KEYWORDS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSite {
    LinkedIn,
    Indeed,
    Glassdoor,
    AngelList,
    RemoteOk,
    WeWorkRemotely,
}

impl JobSite {
    pub const ALL: [JobSite; 6] = [
        JobSite::LinkedIn,
        JobSite::Indeed,
        JobSite::Glassdoor,
        JobSite::AngelList,
        JobSite::RemoteOk,
        JobSite::WeWorkRemotely,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            JobSite::LinkedIn => "LinkedIn",
            JobSite::Indeed => "Indeed",
            JobSite::Glassdoor => "Glassdoor",
            JobSite::AngelList => "AngelList",
            JobSite::RemoteOk => "RemoteOK",
            JobSite::WeWorkRemotely => "WeWorkRemotely",
        }
    }

    /// Search URL for `query` near `location`. Remote-only boards ignore the location.
    pub fn search_url(&self, query: &str, location: &str) -> String {
        let q = quote_plus(query);
        let l = quote_plus(location);
        match self {
            JobSite::LinkedIn => {
                format!("https://www.linkedin.com/jobs/search/?keywords={q}&location={l}&f_E=2,3")
            }
            JobSite::Indeed => format!("https://www.indeed.com/jobs?q={q}&l={l}"),
            JobSite::Glassdoor => format!(
                "https://www.glassdoor.com/Job/jobs.htm?sc.keyword={q}&locT=C&locId={l}"
            ),
            JobSite::AngelList => format!("https://angel.co/jobs?keywords={q}&location={l}"),
            JobSite::RemoteOk => format!(
                "https://remoteok.io/remote-{}-jobs",
                quote_plus(&query.replace(' ', "-"))
            ),
            JobSite::WeWorkRemotely => {
                format!("https://weworkremotely.com/remote-jobs/search?term={q}")
            }
        }
    }
}

impl Serialize for JobSite {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Internship,
    Contract,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Internship,
        JobType::Contract,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Internship => "Internship",
            JobType::Contract => "Contract",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown job type '{}'. Choose one of: {}",
                    s.trim(),
                    Self::ALL.map(|t| t.label()).join(", ")
                )
            })
    }
}

impl Serialize for JobType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One search link on a job board.
#[derive(Debug, Clone, Serialize)]
pub struct JobLink {
    pub title: String,
    pub url: String,
    pub site: JobSite,
    pub keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
}

/// Names of every known domain, in display order.
pub fn domains() -> Vec<&'static str> {
    DOMAINS.iter().map(|d| d.name).collect()
}

/// Search links for a domain across the first four boards. Unknown domains yield nothing.
///
/// Internship searches keep only intern keywords (or derive them from the
/// leading keywords when the domain has none); every other type drops them.
pub fn job_suggestions(domain: &str, location: &str, job_type: JobType) -> Vec<JobLink> {
    let Some(profile) = find_domain(domain) else {
        return Vec::new();
    };

    let keywords: Vec<String> = if job_type == JobType::Internship {
        let interns: Vec<String> = profile
            .keywords
            .iter()
            .filter(|k| is_intern_keyword(k))
            .map(|k| k.to_string())
            .collect();
        if interns.is_empty() {
            profile
                .keywords
                .iter()
                .take(3)
                .map(|k| format!("{k} intern"))
                .collect()
        } else {
            interns
        }
    } else {
        profile
            .keywords
            .iter()
            .filter(|k| !is_intern_keyword(k))
            .map(|k| k.to_string())
            .collect()
    };

    let mut links = Vec::new();
    for keyword in keywords.iter().take(SUGGESTION_KEYWORDS) {
        let query = match job_type {
            JobType::FullTime => keyword.clone(),
            other => format!("{keyword} {}", other.label().to_lowercase()),
        };

        for site in JobSite::ALL.into_iter().take(SUGGESTION_SITES) {
            links.push(JobLink {
                title: format!("{} ({}) - {}", title_case(keyword), job_type, site.name()),
                url: site.search_url(&query, location),
                site,
                keyword: keyword.clone(),
                job_type: Some(job_type),
            });
        }
    }
    links
}

/// LinkedIn and Indeed links for the domain's two leading keywords, scoped to
/// `company` when one is given.
pub fn specific_jobs(domain: &str, company: Option<&str>, location: &str) -> Vec<JobLink> {
    let Some(profile) = find_domain(domain) else {
        return Vec::new();
    };
    let company = company.map(str::trim).filter(|c| !c.is_empty());

    let mut links = Vec::new();
    for &keyword in profile.keywords.iter().take(COMPANY_KEYWORDS) {
        let (query, title) = match company {
            Some(company) => (
                format!("{keyword} {company}"),
                format!("{} at {company}", title_case(keyword)),
            ),
            None => (keyword.to_string(), title_case(keyword)),
        };
        let (q, l) = (quote_plus(&query), quote_plus(location));

        links.push(JobLink {
            title: title.clone(),
            url: format!("https://www.linkedin.com/jobs/search/?keywords={q}&location={l}"),
            site: JobSite::LinkedIn,
            keyword: keyword.to_string(),
            job_type: None,
        });
        links.push(JobLink {
            title,
            url: format!("https://www.indeed.com/jobs?q={q}&l={l}"),
            site: JobSite::Indeed,
            keyword: keyword.to_string(),
            job_type: None,
        });
    }
    links
}

/// Well-known employers for the domain; empty for unknown domains.
pub fn trending_companies(domain: &str) -> &'static [&'static str] {
    find_domain(domain).map(|d| d.companies).unwrap_or_default()
}

/// Salary, growth and skills overview. Only some domains carry one.
pub fn domain_insights(domain: &str) -> Option<&'static DomainInsights> {
    find_domain(domain).and_then(|d| d.insights.as_ref())
}

fn is_intern_keyword(keyword: &str) -> bool {
    keyword.to_lowercase().contains("intern")
}

/// Query-string encoding with spaces as `+`.
fn quote_plus(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest,
/// so "ML engineer" becomes "Ml Engineer".
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_is_alpha = false;
    for c in value.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_domains_are_known() {
        let names = domains();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "Data Science");
        assert!(names.contains(&"UX/UI Design"));
    }

    #[test]
    fn test_unknown_domain_yields_nothing() {
        assert!(job_suggestions("Astrology", DEFAULT_LOCATION, JobType::FullTime).is_empty());
        assert!(specific_jobs("Astrology", Some("Acme"), DEFAULT_LOCATION).is_empty());
        assert!(trending_companies("Astrology").is_empty());
        assert!(domain_insights("Astrology").is_none());
    }

    #[test]
    fn test_full_time_suggestions_skip_intern_keywords() {
        let links = job_suggestions("Data Science", DEFAULT_LOCATION, JobType::FullTime);
        assert_eq!(links.len(), SUGGESTION_KEYWORDS * SUGGESTION_SITES);
        assert!(links.iter().all(|l| !l.keyword.contains("intern")));

        let first = &links[0];
        assert_eq!(first.title, "Data Scientist (Full-time) - LinkedIn");
        assert_eq!(
            first.url,
            "https://www.linkedin.com/jobs/search/?keywords=data+scientist&location=United+States&f_E=2,3"
        );

        let sites: Vec<_> = links.iter().take(4).map(|l| l.site).collect();
        assert_eq!(
            sites,
            vec![JobSite::LinkedIn, JobSite::Indeed, JobSite::Glassdoor, JobSite::AngelList]
        );
    }

    #[test]
    fn test_internship_suggestions_use_intern_keywords() {
        let links = job_suggestions("Finance", "London", JobType::Internship);
        assert_eq!(links.len(), SUGGESTION_SITES);
        assert_eq!(links[0].title, "Finance Intern (Internship) - LinkedIn");
        assert_eq!(links[1].url, "https://www.indeed.com/jobs?q=finance+intern+internship&l=London");
    }

    #[test]
    fn test_part_time_appends_job_type_to_query() {
        let links = job_suggestions("sales", DEFAULT_LOCATION, JobType::PartTime);
        assert_eq!(links[0].title, "Sales Manager (Part-time) - LinkedIn");
        assert!(links[0].url.contains("keywords=sales+manager+part-time&"));
    }

    #[test]
    fn test_company_search_scopes_query_and_title() {
        let links = specific_jobs("Software Engineering", Some("Stripe"), "Remote");
        assert_eq!(links.len(), COMPANY_KEYWORDS * 2);
        assert_eq!(links[0].title, "Software Engineer at Stripe");
        assert_eq!(links[0].site, JobSite::LinkedIn);
        assert_eq!(
            links[0].url,
            "https://www.linkedin.com/jobs/search/?keywords=software+engineer+Stripe&location=Remote"
        );
        assert_eq!(links[1].site, JobSite::Indeed);
        assert_eq!(links[2].title, "Full Stack Developer at Stripe");
    }

    #[test]
    fn test_company_search_without_company() {
        let links = specific_jobs("Marketing", Some("  "), DEFAULT_LOCATION);
        assert_eq!(links[0].title, "Digital Marketing");
        assert!(links[0].url.contains("keywords=digital+marketing&"));
    }

    #[test]
    fn test_remote_boards_format_queries() {
        assert_eq!(
            JobSite::RemoteOk.search_url("data scientist", "anywhere"),
            "https://remoteok.io/remote-data-scientist-jobs"
        );
        assert_eq!(
            JobSite::WeWorkRemotely.search_url("UX designer", "anywhere"),
            "https://weworkremotely.com/remote-jobs/search?term=UX+designer"
        );
    }

    #[test]
    fn test_insights_only_for_some_domains() {
        let insights = domain_insights("Data Science").unwrap();
        assert_eq!(insights.avg_salary, "$95,000 - $165,000");
        assert_eq!(insights.key_skills.len(), 5);
        assert!(domain_insights("Consulting").is_none());
    }

    #[test]
    fn test_trending_companies() {
        assert_eq!(trending_companies("Consulting")[0], "McKinsey");
        assert_eq!(trending_companies("Healthcare").len(), 8);
    }

    #[test]
    fn test_job_type_parsing() {
        assert_eq!("internship".parse::<JobType>().unwrap(), JobType::Internship);
        assert_eq!("FULL-TIME".parse::<JobType>().unwrap(), JobType::FullTime);
        assert!("gig".parse::<JobType>().unwrap_err().contains("Full-time, Part-time"));
    }

    #[test]
    fn test_title_case_matches_word_runs() {
        assert_eq!(title_case("ML engineer"), "Ml Engineer");
        assert_eq!(title_case("UX designer"), "Ux Designer");
        assert_eq!(title_case("full stack developer"), "Full Stack Developer");
    }

    #[test]
    fn test_quote_plus_escapes_reserved_characters() {
        assert_eq!(quote_plus("UX/UI & design"), "UX%2FUI+%26+design");
    }
}
