//! Tone calibration: maps the selected email tone to concrete style guidance
//! embedded in the composition prompt.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tone selected by the candidate for the outreach email.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailTone {
    #[default]
    Professional,
    Formal,
    Friendly,
    Casual,
}

impl EmailTone {
    pub const ALL: [EmailTone; 4] = [
        EmailTone::Professional,
        EmailTone::Formal,
        EmailTone::Friendly,
        EmailTone::Casual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmailTone::Professional => "Professional",
            EmailTone::Formal => "Formal",
            EmailTone::Friendly => "Friendly",
            EmailTone::Casual => "Casual",
        }
    }
}

impl FromStr for EmailTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown tone '{}'. Choose one of: {}",
                    s.trim(),
                    Self::ALL.map(|t| t.as_str()).join(", ")
                )
            })
    }
}

/// Language the email is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailLanguage {
    #[default]
    English,
}

impl EmailLanguage {
    pub const ALL: [EmailLanguage; 1] = [EmailLanguage::English];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmailLanguage::English => "English",
        }
    }
}

impl FromStr for EmailLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unsupported language '{}'. Currently supported: English", s.trim()))
    }
}

/// Phrasing guidance calibrated to a specific tone.
#[derive(Debug, Clone)]
pub struct ToneGuidance {
    pub register: &'static str,
    pub greeting_examples: Vec<&'static str>,
    pub sign_off_examples: Vec<&'static str>,
    pub avoid: Vec<&'static str>,
}

/// Returns style guidance for the selected tone.
pub fn get_tone_guidance(tone: EmailTone) -> ToneGuidance {
    match tone {
        EmailTone::Professional => ToneGuidance {
            register: "confident, concise and businesslike; lead with relevant impact",
            greeting_examples: vec!["Dear Hiring Manager,", "Hello [Hiring Manager's Name],"],
            sign_off_examples: vec!["Best regards,", "Kind regards,"],
            avoid: vec!["slang", "emojis", "exclamation marks", "overly effusive praise"],
        },
        EmailTone::Formal => ToneGuidance {
            register: "polished and respectful; full sentences, no contractions",
            greeting_examples: vec!["Dear Sir or Madam,", "Dear Hiring Committee,"],
            sign_off_examples: vec!["Yours sincerely,", "Respectfully,"],
            avoid: vec!["contractions", "slang", "emojis", "first-name greetings"],
        },
        EmailTone::Friendly => ToneGuidance {
            register: "warm and personable while staying professional; show genuine enthusiasm",
            greeting_examples: vec!["Hi [Name],", "Hello there,"],
            sign_off_examples: vec!["Warm regards,", "Cheers,"],
            avoid: vec!["stiff legal phrasing", "slang", "more than one exclamation mark"],
        },
        EmailTone::Casual => ToneGuidance {
            register: "relaxed and conversational; short sentences, contractions welcome",
            greeting_examples: vec!["Hey [Name],", "Hi team,"],
            sign_off_examples: vec!["Thanks,", "Talk soon,"],
            avoid: vec!["corporate jargon", "long paragraphs", "rude or careless language"],
        },
    }
}

/// Renders guidance as a bullet block for prompt embedding.
pub fn render_tone_instruction(tone: EmailTone) -> String {
    let guidance = get_tone_guidance(tone);
    format!(
        "- Tone: {} ({})\n- Greeting style, e.g.: {}\n- Sign-off style, e.g.: {}\n- Avoid: {}",
        tone.as_str(),
        guidance.register,
        guidance.greeting_examples.join(" / "),
        guidance.sign_off_examples.join(" / "),
        guidance.avoid.join(", ")
    )
}
