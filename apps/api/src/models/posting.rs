use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Structured job attributes inferred by the model from a scraped page.
///
/// Model output is loosely typed: every field may be missing or null,
/// `experience` may arrive as a number and `skills` as one comma-separated
/// string. All of those normalize into the shapes below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default, alias = "title", alias = "job_title", deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub experience: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .map(scalar_to_string)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        other => scalar_to_string(&other),
    })
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::String(s) => Ok(s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()),
        Value::Array(items) => Ok(items
            .iter()
            .map(scalar_to_string)
            .filter(|s| !s.is_empty())
            .collect()),
        other => Err(D::Error::custom(format!(
            "expected a list of skills, got {other}"
        ))),
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_posting_deserializes() {
        let json = r#"{
            "role": "Machine Learning Engineer",
            "experience": "3+ years",
            "skills": ["Python", "PyTorch", "NLP"],
            "description": "Build and ship ranking models."
        }"#;
        let posting: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(posting.role, "Machine Learning Engineer");
        assert_eq!(posting.experience, "3+ years");
        assert_eq!(posting.skills, vec!["Python", "PyTorch", "NLP"]);
    }

    #[test]
    fn test_missing_and_null_fields_default_to_empty() {
        let posting: JobPosting =
            serde_json::from_str(r#"{"role": "Analyst", "skills": null}"#).unwrap();
        assert_eq!(posting.role, "Analyst");
        assert!(posting.experience.is_empty());
        assert!(posting.skills.is_empty());
        assert!(posting.description.is_empty());
    }

    #[test]
    fn test_skills_as_comma_separated_string() {
        let posting: JobPosting =
            serde_json::from_str(r#"{"skills": "React, web development , ,SQL"}"#).unwrap();
        assert_eq!(posting.skills, vec!["React", "web development", "SQL"]);
    }

    #[test]
    fn test_numeric_experience_and_title_alias() {
        let posting: JobPosting =
            serde_json::from_str(r#"{"title": "Data Scientist", "experience": 5}"#).unwrap();
        assert_eq!(posting.role, "Data Scientist");
        assert_eq!(posting.experience, "5");
    }

    #[test]
    fn test_skills_object_is_rejected() {
        let result: Result<JobPosting, _> = serde_json::from_str(r#"{"skills": {"a": 1}}"#);
        assert!(result.is_err());
    }
}
