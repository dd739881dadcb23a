// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Common instruction appended to prose-generation prompts.
pub const NO_PREAMBLE_INSTRUCTION: &str = "\
    Return ONLY the requested text. Do not add a preamble such as \
    'Here is your email', and do not wrap the output in quotes or code fences.";

/// Fills `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, so scraped or uploaded text that
/// happens to contain `{resume_text}` stays literal. Unknown placeholders and
/// stray braces are kept as written.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });

        match substituted {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_every_occurrence() {
        let filled = fill_template("{a} and {b}, again {a}", &[("a", "1"), ("b", "2")]);
        assert_eq!(filled, "1 and 2, again 1");
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let filled = fill_template(
            "Name: {name}\nResume: {resume}",
            &[("name", "{resume}"), ("resume", "Rust engineer")],
        );
        assert_eq!(filled, "Name: {resume}\nResume: Rust engineer");
    }

    #[test]
    fn test_fill_template_keeps_unknown_and_stray_braces() {
        let filled = fill_template("{\"role\": {x}} {unknown} {", &[("x", "1")]);
        assert_eq!(filled, "{\"role\": 1} {unknown} {");
    }
}
