use async_trait::async_trait;
use renzi_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};
use serde::Deserialize;

/// Fixed message shown when the translation service cannot be reached.
/// Display paths expect a string here, never an error.
pub const TRANSLATION_UNAVAILABLE: &str = "Translation service temporarily unavailable";

/// Target languages offered in the language picker
const TARGET_LANGS: &[&str] = &["en", "es", "hi", "ar", "bn", "pt", "ru", "ja", "fr", "de"];

#[derive(Clone)]
pub struct ChineseTranslator {
    client: reqwest::Client,
    api_url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    response_data: MyMemoryData,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryData {
    translated_text: String,
}

impl ChineseTranslator {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Fail-soft translation for display: any error collapses into the
    /// fixed unavailable message.
    pub async fn translate_or_unavailable(&self, text: &str, to: &str) -> String {
        match self
            .translate(text, "zh".to_string(), to.to_string())
            .await
        {
            Ok(translation) => translation.text,
            Err(e) => {
                tracing::warn!("translation failed: {}", e);
                TRANSLATION_UNAVAILABLE.to_string()
            }
        }
    }
}

#[async_trait]
impl Translator for ChineseTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if from != "zh" || !TARGET_LANGS.contains(&to.as_str()) {
            return Err(TranslateError::UnsupportedLanguagePair { from, to });
        }

        let langpair = format!("{}|{}", from, to);
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: MyMemoryResponse = response
            .json()
            .await
            .map_err(|e| TranslateError::ApiError(format!("Failed to parse response: {}", e)))?;

        Ok(Translation {
            text: body.response_data.translated_text,
            from,
            to,
            provider: "mymemory".to_string(),
        })
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        TARGET_LANGS
            .iter()
            .map(|to| ("zh".to_string(), to.to_string()))
            .collect()
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "MyMemory".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mymemory_response_parses() {
        let body = r#"{
            "responseData": {
                "translatedText": "Hello",
                "match": 0.98
            },
            "responseStatus": 200
        }"#;

        let parsed: MyMemoryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.response_data.translated_text, "Hello");
    }

    #[test]
    fn supported_pairs_cover_the_selector_languages() {
        let translator = ChineseTranslator::new("http://localhost".to_string());
        let pairs = translator.supported_languages();

        assert_eq!(pairs.len(), 10);
        assert!(pairs.contains(&("zh".to_string(), "en".to_string())));
        assert!(pairs.contains(&("zh".to_string(), "de".to_string())));
        assert!(pairs.iter().all(|(from, _)| from == "zh"));
    }

    #[tokio::test]
    async fn unsupported_target_is_rejected_without_io() {
        let translator = ChineseTranslator::new("http://localhost".to_string());

        let result = translator
            .translate("你好", "zh".to_string(), "xx".to_string())
            .await;

        assert!(matches!(
            result,
            Err(TranslateError::UnsupportedLanguagePair { .. })
        ));
    }
}
