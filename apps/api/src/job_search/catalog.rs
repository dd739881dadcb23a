// Static job search data: professional domains, their search keywords,
// trending employers and market insights.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DomainInsights {
    pub avg_salary: &'static str,
    pub growth_rate: &'static str,
    pub key_skills: &'static [&'static str],
    pub certifications: &'static [&'static str],
}

#[derive(Debug)]
pub struct DomainProfile {
    pub name: &'static str,
    /// Ordered by relevance; the first entries feed the searches.
    pub keywords: &'static [&'static str],
    pub companies: &'static [&'static str],
    pub insights: Option<DomainInsights>,
}

pub static DOMAINS: [DomainProfile; 10] = [
    DomainProfile {
        name: "Data Science",
        keywords: &[
            "data scientist",
            "machine learning engineer",
            "data analyst",
            "ML engineer",
            "AI researcher",
            "data science intern",
        ],
        companies: &[
            "Google", "Meta", "Netflix", "Uber", "Airbnb", "Microsoft", "Amazon", "Apple",
            "Tesla", "Spotify",
        ],
        insights: Some(DomainInsights {
            avg_salary: "$95,000 - $165,000",
            growth_rate: "22% (Much faster than average)",
            key_skills: &["Python", "SQL", "Machine Learning", "Statistics", "Tableau"],
            certifications: &[
                "Google Data Analytics",
                "AWS Machine Learning",
                "Microsoft Azure AI",
            ],
        }),
    },
    DomainProfile {
        name: "Finance",
        keywords: &[
            "financial analyst",
            "investment banker",
            "portfolio manager",
            "risk analyst",
            "quantitative analyst",
            "finance intern",
        ],
        companies: &[
            "Goldman Sachs", "JPMorgan Chase", "Morgan Stanley", "BlackRock", "Citadel",
            "Two Sigma", "Robinhood", "Stripe",
        ],
        insights: Some(DomainInsights {
            avg_salary: "$85,000 - $150,000",
            growth_rate: "5% (Average)",
            key_skills: &["Excel", "Financial Modeling", "Bloomberg Terminal", "SQL", "Python"],
            certifications: &["CFA", "FRM", "CPA", "Financial Modeling & Valuation"],
        }),
    },
    DomainProfile {
        name: "Software Engineering",
        keywords: &[
            "software engineer",
            "full stack developer",
            "backend developer",
            "frontend developer",
            "DevOps engineer",
            "software engineering intern",
        ],
        companies: &[
            "Google", "Meta", "Amazon", "Microsoft", "Apple", "Tesla", "Stripe", "Spotify",
            "Netflix", "Uber",
        ],
        insights: Some(DomainInsights {
            avg_salary: "$90,000 - $180,000",
            growth_rate: "25% (Much faster than average)",
            key_skills: &["JavaScript", "Python", "React", "Node.js", "Cloud Services"],
            certifications: &[
                "AWS Solutions Architect",
                "Google Cloud Professional",
                "Microsoft Azure",
            ],
        }),
    },
    DomainProfile {
        name: "Marketing",
        keywords: &[
            "digital marketing",
            "content marketing",
            "marketing manager",
            "SEO specialist",
            "social media manager",
            "marketing intern",
        ],
        companies: &[
            "HubSpot", "Salesforce", "Adobe", "Shopify", "Buffer", "Hootsuite", "Canva",
            "Mailchimp",
        ],
        insights: Some(DomainInsights {
            avg_salary: "$65,000 - $120,000",
            growth_rate: "10% (Faster than average)",
            key_skills: &["Google Analytics", "SEO", "Content Marketing", "Social Media", "PPC"],
            certifications: &["Google Ads", "HubSpot", "Facebook Blueprint", "Google Analytics"],
        }),
    },
    DomainProfile {
        name: "Product Management",
        keywords: &[
            "product manager",
            "product owner",
            "product analyst",
            "growth manager",
            "business analyst",
            "product management intern",
        ],
        companies: &[
            "Google", "Meta", "Amazon", "Uber", "Airbnb", "Slack", "Zoom", "Spotify",
            "Pinterest", "Dropbox",
        ],
        insights: Some(DomainInsights {
            avg_salary: "$100,000 - $170,000",
            growth_rate: "15% (Much faster than average)",
            key_skills: &["Product Strategy", "Data Analysis", "User Research", "Agile", "SQL"],
            certifications: &[
                "Product School PM",
                "Google Product Management",
                "Scrum Master",
            ],
        }),
    },
    DomainProfile {
        name: "Consulting",
        keywords: &[
            "management consultant",
            "strategy consultant",
            "business consultant",
            "IT consultant",
            "consulting intern",
        ],
        companies: &["McKinsey", "BCG", "Bain", "Deloitte", "PwC", "EY", "KPMG", "Accenture"],
        insights: None,
    },
    DomainProfile {
        name: "Healthcare",
        keywords: &[
            "healthcare analyst",
            "medical device",
            "pharmaceutical",
            "biotech",
            "clinical research",
            "healthcare intern",
        ],
        companies: &[
            "Johnson & Johnson", "Pfizer", "Moderna", "Roche", "Novartis", "Merck", "Gilead",
            "Amgen",
        ],
        insights: None,
    },
    DomainProfile {
        name: "Cybersecurity",
        keywords: &[
            "cybersecurity analyst",
            "security engineer",
            "penetration tester",
            "information security",
            "cybersecurity intern",
        ],
        companies: &[
            "CrowdStrike", "Palo Alto Networks", "Fortinet", "Okta", "Zscaler", "SentinelOne",
            "Rapid7", "Varonis",
        ],
        insights: None,
    },
    DomainProfile {
        name: "UX/UI Design",
        keywords: &[
            "UX designer",
            "UI designer",
            "product designer",
            "visual designer",
            "user researcher",
            "design intern",
        ],
        companies: &[
            "Adobe", "Figma", "Canva", "Spotify", "Airbnb", "Uber", "Pinterest", "Dribbble",
        ],
        insights: None,
    },
    DomainProfile {
        name: "Sales",
        keywords: &[
            "sales manager",
            "account executive",
            "business development",
            "sales representative",
            "sales intern",
        ],
        companies: &[
            "Salesforce", "HubSpot", "Oracle", "SAP", "Zoom", "Slack", "Outreach", "Gong",
        ],
        insights: None,
    },
];

/// Looks a domain up by name, ignoring case and surrounding whitespace.
pub fn find_domain(name: &str) -> Option<&'static DomainProfile> {
    let name = name.trim();
    DOMAINS.iter().find(|d| d.name.eq_ignore_ascii_case(name))
}
