use crate::error::TranslateError;
use crate::style::StyleProfile;

/// System and user messages for one chat completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub system: String,
    pub user: String,
}

/// Builds the request for translating `input` into the given style.
///
/// # Errors
///
/// Returns [`TranslateError::EmptyInput`] if `input` is blank after trimming.
pub fn build_prompt(
    profile: &StyleProfile,
    input: &str,
) -> Result<TranslationRequest, TranslateError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(TranslateError::EmptyInput);
    }

    Ok(TranslationRequest {
        system: build_system_prompt(profile),
        user: build_user_message(text),
    })
}

pub fn build_system_prompt(profile: &StyleProfile) -> String {
    let name = profile.display_name;
    let examples = profile
        .examples
        .iter()
        .map(|ex| format!("Input: \"{}\" → Output: \"{}\"", ex.input, ex.output))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a slang translator that converts normal text into {name} slang and speech patterns.

TONE & STYLE: {tone}

Here are examples of good {name} translations:
{examples}

IMPORTANT: Wrap ONLY generation-specific slang in double brackets like [[this]].

What TO mark:
- Slang words/phrases that are DISTINCTLY used by {name} (not other generations)
- Generation-specific catchphrases that would clearly identify this generation
- Signature interjections or expressions unique to this era

What NOT to mark:
- Common words that all generations use (even if informal)
- Standard English or basic slang used across generations
- Technical terms, proper nouns, articles, prepositions
- Words you added just for natural flow, not for generational flavor

Be selective - only mark what truly identifies this as {name} speech.

{instruction}

Only output the translated text with marked slang, nothing else.",
        tone = profile.tone,
        instruction = profile.instruction,
    )
}

fn build_user_message(text: &str) -> String {
    format!("Text to translate: \"{text}\"")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::style::{self, PROFILES, StyleId};

    #[test]
    fn test_genz_prompt_contains_profile() {
        let profile = style::resolve("genz").unwrap();
        let request = build_prompt(profile, "That's really good!").unwrap();

        assert!(request.system.contains("Gen Z"));
        assert!(request.system.contains(
            "Input: \"That's really good!\" → Output: \"[[No cap]], this is [[bussin]] [[fr fr]]! You [[ate]] and left no crumbs.\""
        ));
        assert!(request.system.contains(
            "Input: \"Let me know when you're ready.\" → Output: \"Lmk when ur ready and we can link, [[periodt]].\""
        ));
        assert!(
            request
                .user
                .contains("Text to translate: \"That's really good!\"")
        );
    }

    #[test]
    fn test_system_prompt_section_order() {
        let profile = StyleId::Millennial.profile();
        let system = build_system_prompt(profile);

        let role = system.find("You are a slang translator").unwrap();
        let tone = system.find(profile.tone).unwrap();
        let first = system.find(profile.examples[0].output).unwrap();
        let second = system.find(profile.examples[1].output).unwrap();
        let rule = system.find("double brackets like [[this]]").unwrap();
        let instruction = system.find(profile.instruction).unwrap();
        let closing = system
            .find("Only output the translated text with marked slang, nothing else.")
            .unwrap();

        assert!(role < tone);
        assert!(tone < first);
        assert!(first < second);
        assert!(second < rule);
        assert!(rule < instruction);
        assert!(instruction < closing);
    }

    #[test]
    fn test_system_prompt_lists_what_not_to_mark() {
        let system = build_system_prompt(StyleId::Boomer.profile());
        assert!(system.contains("What NOT to mark:"));
        assert!(system.contains("Common words that all generations use"));
        assert!(system.contains("Standard English"));
        assert!(system.contains("Technical terms, proper nouns"));
        assert!(system.contains("natural flow"));
    }

    #[test]
    fn test_build_prompt_is_deterministic() {
        for profile in &PROFILES {
            let a = build_prompt(profile, "See you tomorrow").unwrap();
            let b = build_prompt(profile, "See you tomorrow").unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_build_prompt_rejects_blank_input() {
        let profile = StyleId::GenAlpha.profile();
        assert!(matches!(
            build_prompt(profile, ""),
            Err(TranslateError::EmptyInput)
        ));
        assert!(matches!(
            build_prompt(profile, "  \n\t "),
            Err(TranslateError::EmptyInput)
        ));
    }

    #[test]
    fn test_build_prompt_trims_input() {
        let request = build_prompt(StyleId::GenZ.profile(), "  hello there \n").unwrap();
        assert_eq!(request.user, "Text to translate: \"hello there\"");
    }
}
