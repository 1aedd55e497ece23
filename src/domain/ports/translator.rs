#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target` (e.g. "zh-CN"). Implementations must
    /// return the input unchanged when translation fails.
    async fn translate(&self, text: &str, target: &str) -> String;
}
