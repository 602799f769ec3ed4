use super::client::{CompletionClient, GenerationParams};
use super::highlight::{HighlightedText, highlight, strip_markers};
use super::prompt::build_prompt;
use crate::credential::CredentialStore;
use crate::error::TranslateError;
use crate::style::{StyleId, StyleProfile};

/// A completed translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub style: StyleId,
    /// The completion text with `[[...]]` markers intact.
    pub raw: String,
}

impl Translation {
    pub fn highlighted(&self) -> HighlightedText {
        highlight(&self.raw)
    }

    pub fn plain(&self) -> String {
        strip_markers(&self.raw)
    }
}

/// Runs one translation: build the prompt, fetch the key, call the service.
pub struct Translator {
    client: CompletionClient,
    params: GenerationParams,
}

impl Translator {
    pub fn new(endpoint: String, params: GenerationParams) -> Self {
        Self {
            client: CompletionClient::new(endpoint),
            params,
        }
    }

    pub const fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// Translates `text` into the given style.
    ///
    /// Blank input fails before the credential is consulted, and a missing
    /// credential fails before any network call.
    pub async fn translate(
        &self,
        profile: &StyleProfile,
        text: &str,
        credentials: &CredentialStore,
    ) -> Result<Translation, TranslateError> {
        let request = build_prompt(profile, text)?;
        let api_key = credentials.require()?;

        tracing::info!(style = %profile.id, model = %self.params.model, "translating");

        let raw = self.client.complete(&request, &self.params, &api_key).await?;

        Ok(Translation {
            style: profile.id,
            raw,
        })
    }
}
