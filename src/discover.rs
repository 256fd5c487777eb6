use tracing::info;

use crate::describe::Describer;
use crate::error::AppError;
use crate::history::DescriptionResult;
use crate::language::Language;
use crate::scenario::Scenario;
use crate::translate::{translate_text, Translator};
use crate::upload::UploadedImage;

/// One "Discover Landmark Info" press: ingest the upload, describe it with the
/// scenario's prompt, then translate. Any failure aborts the whole request and
/// nothing from it is kept.
pub async fn discover(
    describer: &dyn Describer,
    translator: &dyn Translator,
    file: Option<(Option<String>, Vec<u8>)>,
    scenario: Scenario,
    language: Language,
) -> Result<DescriptionResult, AppError> {
    let image = UploadedImage::ingest(file)?;
    let prompt = scenario.prompt();

    info!(
        "Analyzing landmark using scenario: {} (language {})",
        scenario.label(),
        language.code()
    );

    let description = describer.describe(&image, prompt).await?;
    let translated = translate_text(translator, &description, language).await?;

    Ok(DescriptionResult {
        original_text: description,
        translated_text: translated,
        language_code: language.code().to_string(),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::upload::tests::png_fixture;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Returns a canned description and records the prompt it was given.
    pub(crate) struct FakeDescriber {
        pub reply: Result<String, String>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl FakeDescriber {
        pub(crate) fn ok(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Describer for FakeDescriber {
        async fn describe(&self, _image: &UploadedImage, prompt: &str) -> Result<String, AppError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(AppError::Describe)
        }

        fn model(&self) -> &str {
            "fake-model"
        }
    }

    /// Prefixes text with the target code, or fails every call.
    pub(crate) struct FakeTranslator {
        pub fail: bool,
    }

    #[async_trait]
    impl Translator for FakeTranslator {
        async fn translate(&self, text: &str, target: Language) -> Result<String, AppError> {
            if self.fail {
                return Err(AppError::Translate("service unavailable".to_string()));
            }
            Ok(format!("[{}] {}", target.code(), text))
        }
    }

    fn png() -> Option<(Option<String>, Vec<u8>)> {
        Some((Some("image/png".to_string()), png_fixture()))
    }

    #[tokio::test]
    async fn test_english_passes_description_through() {
        let describer = FakeDescriber::ok("Big Ben, London.");
        let translator = FakeTranslator { fail: false };

        let result = discover(
            &describer,
            &translator,
            png(),
            Scenario::TourGuide,
            Language::English,
        )
        .await
        .unwrap();

        assert_eq!(result.original_text, "Big Ben, London.");
        assert_eq!(result.translated_text, "Big Ben, London.");
        assert_eq!(result.language_code, "en");
        assert_eq!(
            describer.prompts.lock().unwrap().as_slice(),
            &[Scenario::TourGuide.prompt().to_string()]
        );
    }

    #[tokio::test]
    async fn test_french_is_translated() {
        let describer = FakeDescriber::ok("The Eiffel Tower.");
        let translator = FakeTranslator { fail: false };

        let result = discover(
            &describer,
            &translator,
            png(),
            Scenario::Traveler,
            Language::French,
        )
        .await
        .unwrap();

        assert_eq!(result.translated_text, "[fr] The Eiffel Tower.");
        assert_ne!(result.translated_text, result.original_text);
    }

    #[tokio::test]
    async fn test_missing_file_never_reaches_model() {
        let describer = FakeDescriber::ok("unused");
        let translator = FakeTranslator { fail: false };

        let err = discover(&describer, &translator, None, Scenario::Traveler, Language::English)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::MissingFile));
        assert!(describer.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_translation_failure_discards_description() {
        let describer = FakeDescriber::ok("Colosseum.");
        let translator = FakeTranslator { fail: true };

        let err = discover(&describer, &translator, png(), Scenario::VirtualTour, Language::German)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Translate(_)));
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let describer = FakeDescriber::failing("API Error 429: quota");
        let translator = FakeTranslator { fail: false };

        let err = discover(
            &describer,
            &translator,
            png(),
            Scenario::PersonalExploration,
            Language::English,
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("quota"));
    }
}
