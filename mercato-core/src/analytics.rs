use async_trait::async_trait;
use std::sync::Mutex;

#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    /// Report one page-view event for `route`.
    async fn page_view(&self, route: &str)
        -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Records page views; can be flipped to fail every call to exercise
/// callers' drop-and-continue handling.
#[derive(Default)]
pub struct MockAnalyticsSink {
    views: Mutex<Vec<String>>,
    failing: bool,
}

impl MockAnalyticsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            views: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn views(&self) -> Vec<String> {
        self.views.lock().expect("view log poisoned").clone()
    }
}

#[async_trait]
impl AnalyticsSink for MockAnalyticsSink {
    async fn page_view(
        &self,
        route: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.failing {
            return Err("analytics collector unreachable".into());
        }
        self.views
            .lock()
            .expect("view log poisoned")
            .push(route.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_sink_records_routes() {
        let sink = MockAnalyticsSink::new();
        sink.page_view("/home").await.unwrap();

        assert_eq!(sink.views(), vec!["/home".to_string()]);
    }

    #[tokio::test]
    async fn test_failing_sink_returns_err() {
        let sink = MockAnalyticsSink::failing();
        assert!(sink.page_view("/home").await.is_err());
        assert!(sink.views().is_empty());
    }
}
