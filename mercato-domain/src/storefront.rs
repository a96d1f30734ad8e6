use chrono::Timelike;
use mercato_core::analytics::AnalyticsSink;
use mercato_core::clock::Clock;
use std::sync::Arc;

use crate::config::BusinessRules;

pub const HOME_ROUTE: &str = "/home";

const HOME_PAGE: &str = "<div>Mercato storefront content</div>";

/// Home-page rendering and store-hours logic.
pub struct StorefrontService {
    analytics: Arc<dyn AnalyticsSink>,
    clock: Arc<dyn Clock>,
    rules: BusinessRules,
}

impl StorefrontService {
    pub fn new(analytics: Arc<dyn AnalyticsSink>, clock: Arc<dyn Clock>, rules: BusinessRules) -> Self {
        Self {
            analytics,
            clock,
            rules,
        }
    }

    /// Render the home page, reporting exactly one page view. An analytics
    /// failure is logged and never alters the rendered content.
    pub async fn render_page(&self) -> String {
        if let Err(err) = self.analytics.page_view(HOME_ROUTE).await {
            tracing::warn!(error = %err, "dropped page-view event");
        }

        HOME_PAGE.to_string()
    }

    /// Store hours on the injected clock: open_hour inclusive through
    /// close_hour exclusive, whole-hour boundaries only.
    pub fn is_online(&self) -> bool {
        let hour = self.clock.now().hour();
        hour >= self.rules.open_hour && hour < self.rules.close_hour
    }
}
