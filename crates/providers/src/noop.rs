use crate::{fallback_description, DescribeRequest, DescriptionProvider, ProviderError};

/// Local annotator: always answers with the deterministic fallback text.
#[derive(Debug, Default)]
pub struct NoopProvider;

#[async_trait::async_trait]
impl DescriptionProvider for NoopProvider {
    async fn describe(&self, request: &DescribeRequest) -> Result<String, ProviderError> {
        let name = request
            .new_name
            .as_deref()
            .or(request.old_name.as_deref())
            .unwrap_or(&request.path);
        Ok(fallback_description(&request.action, name))
    }
}
