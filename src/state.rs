//! Host-facing dashboard state
//!
//! One `DatasetSlot` per widget document plus the approval workflow. The
//! host calls `refresh_*` to (re)load a document and the view methods to get
//! what a widget should render right now.

use std::future::Future;

use chrono::NaiveDate;
use reqwest::Client;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::aggregation::{
    aggregate, cost_table, cost_trend, flatten_nominations, nomination_table, provider_breakdown,
    recipient_list, trend_options, CostTableView, DerivedSeries, NominationQuery,
    NominationTableView, ProviderBreakdown, TrendOptions, TrendSeries,
};
use crate::config::DashboardConfig;
use crate::error::{ApprovalError, ExportError, FetchError, WorkflowError};
use crate::export::{self, ExportFile, COST_EXPORT_PREFIX, NOMINATION_EXPORT_PREFIX};
use crate::fetch::{DashboardClient, DatasetSlot, LoadState};
use crate::models::{
    CertificationRecord, Choice, CostChartDocument, CostRow, CostTrendDocument, DashboardCard,
    FilterSelection, NominationRow, PendingEntry,
};
use crate::workflow::{ActionTransport, ApprovalWorkflow, HttpActionTransport};

/// Doughnut chart with its dropdown values
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownView {
    pub years: Vec<String>,
    pub months: Vec<String>,
    pub breakdown: ProviderBreakdown,
}

/// Trend bar chart with its dropdown values
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendView {
    pub options: TrendOptions,
    pub series: TrendSeries,
}

/// Every widget's dataset plus the pending-approval list
pub struct DashboardState<T: ActionTransport = HttpActionTransport> {
    client: DashboardClient,
    nomination_counts: Mutex<DatasetSlot<Vec<CertificationRecord>>>,
    cost_rows: Mutex<DatasetSlot<Vec<CostRow>>>,
    cost_chart: Mutex<DatasetSlot<CostChartDocument>>,
    cost_trend: Mutex<DatasetSlot<CostTrendDocument>>,
    cards: Mutex<DatasetSlot<Vec<DashboardCard>>>,
    nominations: Mutex<DatasetSlot<Vec<NominationRow>>>,
    /// Load status of the pending list; the entries live in `approvals`
    pending_load: Mutex<DatasetSlot<()>>,
    approvals: ApprovalWorkflow<T>,
}

impl DashboardState<HttpActionTransport> {
    /// State backed by HTTP for both documents and actions
    pub fn new(config: &DashboardConfig) -> Self {
        let http_client = Client::new();
        let transport = HttpActionTransport::new(http_client.clone(), config.base_url.clone());
        Self::with_transport(DashboardClient::with_client(http_client, config), transport)
    }
}

/// Begin a load, await it, and apply the result if it is still current
async fn load_into<T, F>(slot: &Mutex<DatasetSlot<T>>, fetch: F) -> bool
where
    F: Future<Output = Result<T, FetchError>>,
{
    let ticket = slot.lock().await.begin();
    let result = fetch.await;
    slot.lock().await.finish(ticket, result)
}

impl<T: ActionTransport> DashboardState<T> {
    pub fn with_transport(client: DashboardClient, transport: T) -> Self {
        Self {
            client,
            nomination_counts: Mutex::new(DatasetSlot::new("nomination_counts")),
            cost_rows: Mutex::new(DatasetSlot::new("cost_rows")),
            cost_chart: Mutex::new(DatasetSlot::new("cost_chart")),
            cost_trend: Mutex::new(DatasetSlot::new("cost_trend")),
            cards: Mutex::new(DatasetSlot::new("cards")),
            nominations: Mutex::new(DatasetSlot::new("nominations")),
            pending_load: Mutex::new(DatasetSlot::new("pending_actions")),
            approvals: ApprovalWorkflow::new(transport),
        }
    }

    pub fn client(&self) -> &DashboardClient {
        &self.client
    }

    // Refresh

    pub async fn refresh_nomination_counts(&self) -> bool {
        load_into(&self.nomination_counts, async {
            self.client
                .fetch_nomination_counts()
                .await
                .map(|document| flatten_nominations(&document))
        })
        .await
    }

    pub async fn refresh_cost_rows(&self) -> bool {
        load_into(&self.cost_rows, self.client.fetch_cost_rows()).await
    }

    pub async fn refresh_cost_chart(&self) -> bool {
        load_into(&self.cost_chart, self.client.fetch_cost_chart()).await
    }

    pub async fn refresh_cost_trend(&self) -> bool {
        load_into(&self.cost_trend, self.client.fetch_cost_trend()).await
    }

    pub async fn refresh_cards(&self) -> bool {
        load_into(&self.cards, self.client.fetch_cards()).await
    }

    pub async fn refresh_nominations(&self) -> bool {
        load_into(&self.nominations, self.client.fetch_nominations()).await
    }

    /// Reload the pending list
    ///
    /// A successful load replaces the entries. Items with a request in flight
    /// or an open reject confirmation keep their state, and items resolved
    /// while the fetch was running are not brought back.
    pub async fn refresh_pending(&self) -> bool {
        let ticket = self.pending_load.lock().await.begin();
        self.approvals.begin_reload().await;
        let result = self.client.fetch_pending_actions().await;

        let mut slot = self.pending_load.lock().await;
        if !slot.accepts(ticket) {
            tracing::debug!("Dropping stale pending-actions response");
            return false;
        }
        match result {
            Ok(actions) => {
                self.approvals.replace_all(actions).await;
                slot.finish(ticket, Ok(()))
            }
            Err(e) => slot.finish(ticket, Err(e)),
        }
    }

    /// Load every widget concurrently; each one fails independently
    pub async fn refresh_all(&self) {
        tokio::join!(
            self.refresh_nomination_counts(),
            self.refresh_cost_rows(),
            self.refresh_cost_chart(),
            self.refresh_cost_trend(),
            self.refresh_cards(),
            self.refresh_nominations(),
            self.refresh_pending(),
        );
        tracing::info!("Dashboard refresh complete");
    }

    // Views

    /// Nomination chart for a selection, with its cascading dropdown values
    pub async fn nomination_chart(&self, selection: &FilterSelection) -> LoadState<DerivedSeries> {
        self.nomination_counts
            .lock()
            .await
            .state()
            .map(|records| aggregate(records, selection))
    }

    /// Cost table for `year`, defaulting to the most recent one
    pub async fn cost_table(&self, year: Option<&str>) -> LoadState<CostTableView> {
        self.cost_rows
            .lock()
            .await
            .state()
            .map(|rows| cost_table(rows, year))
    }

    pub async fn cost_breakdown(&self, year: Option<&str>, month: &Choice) -> LoadState<BreakdownView> {
        self.cost_chart.lock().await.state().map(|document| BreakdownView {
            years: document.years_descending(),
            months: document.month_options(),
            breakdown: provider_breakdown(document, year, month),
        })
    }

    pub async fn cost_trend(&self, selection: &FilterSelection) -> LoadState<TrendView> {
        self.cost_trend.lock().await.state().map(|document| TrendView {
            options: trend_options(document, selection),
            series: cost_trend(document, selection),
        })
    }

    pub async fn cards(&self) -> LoadState<Vec<DashboardCard>> {
        self.cards.lock().await.state().clone()
    }

    pub async fn nomination_table(&self, query: &NominationQuery) -> LoadState<NominationTableView> {
        self.nominations
            .lock()
            .await
            .state()
            .map(|rows| nomination_table(rows, query))
    }

    /// Comma-joined emails of the selected nominations
    pub async fn recipients(&self, selected_ids: &[i64]) -> LoadState<String> {
        self.nominations
            .lock()
            .await
            .state()
            .map(|rows| recipient_list(rows, selected_ids))
    }

    /// Pending entries matching `search`, with their item states
    pub async fn pending(&self, search: &str) -> LoadState<Vec<PendingEntry>> {
        let status = self.pending_load.lock().await.state().clone();
        match status {
            LoadState::Ready(()) => LoadState::Ready(self.approvals.search(search).await),
            LoadState::Loading => LoadState::Loading,
            LoadState::NoData(message) => LoadState::NoData(message),
        }
    }

    // Approval workflow

    pub async fn approve(&self, id: &str) -> Result<(), ApprovalError> {
        self.approvals.approve(id).await
    }

    pub async fn request_reject(&self, id: &str) -> Result<(), WorkflowError> {
        self.approvals.request_reject(id).await
    }

    pub async fn cancel_reject(&self, id: &str) -> Result<(), WorkflowError> {
        self.approvals.cancel_reject(id).await
    }

    pub async fn confirm_reject(&self, id: &str) -> Result<(), ApprovalError> {
        self.approvals.confirm_reject(id).await
    }

    // Export

    /// CSV of the cost table for `year`; `None` while the data is unavailable
    pub async fn export_cost_table(
        &self,
        year: Option<&str>,
        today: NaiveDate,
    ) -> Result<Option<ExportFile>, ExportError> {
        match self.cost_table(year).await {
            LoadState::Ready(view) => {
                let sheet = export::cost_table_sheet(&view);
                export::export(&sheet, COST_EXPORT_PREFIX, today).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// CSV of the filtered nomination table
    pub async fn export_nominations(
        &self,
        query: &NominationQuery,
        today: NaiveDate,
    ) -> Result<Option<ExportFile>, ExportError> {
        match self.nomination_table(query).await {
            LoadState::Ready(view) => {
                let sheet = export::nomination_sheet(&view.rows);
                export::export(&sheet, NOMINATION_EXPORT_PREFIX, today).map(Some)
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NO_DATA_MESSAGE;
    use crate::workflow::approval::MockActionTransport;

    /// Nothing listens on port 9 of localhost, so every fetch fails fast
    fn unreachable_state(transport: MockActionTransport) -> DashboardState<MockActionTransport> {
        let config = DashboardConfig::new("http://127.0.0.1:9/").unwrap();
        DashboardState::with_transport(DashboardClient::new(&config), transport)
    }

    #[tokio::test]
    async fn test_views_are_loading_before_refresh() {
        let state = unreachable_state(MockActionTransport::new());
        assert!(state.cost_table(None).await.is_loading());
        assert!(state.cards().await.is_loading());
        assert!(state.pending("").await.is_loading());
        assert!(state
            .nomination_chart(&FilterSelection::all())
            .await
            .is_loading());
    }

    #[tokio::test]
    async fn test_failed_refresh_shows_no_data() {
        let state = unreachable_state(MockActionTransport::new());
        assert!(state.refresh_cost_rows().await);
        assert!(state.refresh_pending().await);

        assert_eq!(
            state.cost_table(None).await,
            LoadState::NoData(NO_DATA_MESSAGE.to_string())
        );
        assert_eq!(
            state.pending("").await,
            LoadState::NoData(NO_DATA_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_export_without_data_is_none() {
        let state = unreachable_state(MockActionTransport::new());
        state.refresh_cost_rows().await;
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(state.export_cost_table(None, today).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_approve_unknown_id_does_not_hit_transport() {
        let mut transport = MockActionTransport::new();
        transport.expect_submit().times(0);
        let state = unreachable_state(transport);

        let result = state.approve("missing").await;
        assert!(matches!(
            result,
            Err(ApprovalError::Workflow(WorkflowError::NotFound(_)))
        ));
    }
}
