//! Generational slang style catalog.
//!
//! The set of styles is closed: every profile is defined here at compile time
//! and never modified at runtime.

use std::fmt;
use std::str::FromStr;

use crate::error::TranslateError;

/// Identifier of a supported slang style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleId {
    Boomer,
    Millennial,
    GenZ,
    GenAlpha,
}

impl StyleId {
    /// All style ids, in catalog order.
    pub const ALL: [Self; 4] = [Self::Boomer, Self::Millennial, Self::GenZ, Self::GenAlpha];

    /// The stable lookup key (e.g., "genz").
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boomer => "boomer",
            Self::Millennial => "millennial",
            Self::GenZ => "genz",
            Self::GenAlpha => "genalpha",
        }
    }

    /// The profile for this id.
    pub fn profile(self) -> &'static StyleProfile {
        &PROFILES[self as usize]
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleId {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| TranslateError::UnknownStyle { id: s.to_string() })
    }
}

/// A few-shot example. `output` carries `[[...]]` markers around slang.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub input: &'static str,
    pub output: &'static str,
}

/// A slang style profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleProfile {
    pub id: StyleId,
    /// Human-readable label (e.g., "Gen Z").
    pub display_name: &'static str,
    /// Description of the voice and register.
    pub tone: &'static str,
    /// Ordered few-shot examples.
    pub examples: &'static [Example],
    /// Guidance listing characteristic phrases and themes.
    pub instruction: &'static str,
}

/// The style selected when neither the CLI nor the config file names one.
pub const DEFAULT_STYLE: StyleId = StyleId::Boomer;

/// All profiles, indexed by `StyleId as usize`.
pub static PROFILES: [StyleProfile; 4] = [
    StyleProfile {
        id: StyleId::Boomer,
        display_name: "Baby Boomer",
        tone: "Formal, earnest, nostalgic, and slightly verbose. Values hard work and face-to-face communication.",
        examples: &[
            Example {
                input: "That's really good!",
                output: "Well, I'll be! That's [[top-notch]] work right there.",
            },
            Example {
                input: "Let me know when you're ready.",
                output: "Give me a [[ring]] when you're all set, and we'll get the ball rolling.",
            },
        ],
        instruction: "Translate into Baby Boomer slang and speech patterns. Use phrases like \"back in my day\", \
            \"kids these days\", reference rotary phones, newspapers, handwritten letters, face-to-face \
            conversations, hard work ethics, and formal language. Be authentic and slightly nostalgic.",
    },
    StyleProfile {
        id: StyleId::Millennial,
        display_name: "Millennial",
        tone: "Self-aware, ironic, casually anxious. References work-life balance, social media, and existential humor.",
        examples: &[
            Example {
                input: "That's really good!",
                output: "OMG [[yaas]]! This is [[literally]] so good, I [[can't even]].",
            },
            Example {
                input: "Let me know when you're ready.",
                output: "Just hit me up when you're done [[adulting]] and we can make it happen.",
            },
        ],
        instruction: "Translate into Millennial slang and speech patterns. Use phrases like \"adulting\", \
            \"literally\", \"I can't even\", \"lowkey/highkey\", \"on fleek\", \"yaas\", \"slay\", references to \
            social media, student loans, avocado toast, Netflix, and startup culture. Be ironic and self-aware.",
    },
    StyleProfile {
        id: StyleId::GenZ,
        display_name: "Gen Z",
        tone: "Extremely casual, abbreviated, internet-native. Confident and direct with heavy use of trending slang.",
        examples: &[
            Example {
                input: "That's really good!",
                output: "[[No cap]], this is [[bussin]] [[fr fr]]! You [[ate]] and left no crumbs.",
            },
            Example {
                input: "Let me know when you're ready.",
                output: "Lmk when ur ready and we can link, [[periodt]].",
            },
        ],
        instruction: "Translate into Gen Z slang and speech patterns. Use phrases like \"no cap\", \"fr fr\", \
            \"bussin\", \"slay\", \"periodt\", \"it's giving\", \"ate and left no crumbs\", \"main character \
            energy\", \"understood the assignment\", lots of abbreviations, TikTok references, and internet \
            culture. Be extremely casual and use trending slang.",
    },
    StyleProfile {
        id: StyleId::GenAlpha,
        display_name: "Gen Alpha",
        tone: "Meme-heavy, gaming-influenced, very online. Chaotic energy with heavy slang mixing.",
        examples: &[
            Example {
                input: "That's really good!",
                output: "This is so [[sigma]]! You got that [[rizz]] with this, [[no cap]]. Absolutely [[bussin]].",
            },
            Example {
                input: "Let me know when you're ready.",
                output: "Yo lmk when ur [[locked in]] and we can [[griddy]] on this fr.",
            },
        ],
        instruction: "Translate into Gen Alpha slang and speech patterns. Use phrases like \"sigma\", \"rizz\", \
            \"skibidi\", \"fanum tax\", \"gyat\", \"ohio\", \"only in ohio\", \"griddy\", gaming terms, YouTube \
            and streaming culture references, iPad kid energy, and very online terminology. Be extremely \
            casual and reference memes and gaming culture heavily.",
    },
];

/// Resolves a style id to its profile.
///
/// Lookup is exact and case-sensitive.
pub fn resolve(id: &str) -> Result<&'static StyleProfile, TranslateError> {
    id.parse::<StyleId>().map(StyleId::profile)
}

/// Returns every style id as a string, in catalog order.
pub fn available_ids() -> Vec<&'static str> {
    StyleId::ALL.iter().map(|id| id.as_str()).collect()
}
