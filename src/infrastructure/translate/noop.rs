use crate::domain::ports::translator::Translator;

/// Identity translator for offline runs and tests.
pub struct NoopTranslator;

#[async_trait::async_trait]
impl Translator for NoopTranslator {
    async fn translate(&self, text: &str, _target: &str) -> String {
        text.to_string()
    }
}
