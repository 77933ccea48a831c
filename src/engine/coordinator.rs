use std::collections::VecDeque;

use crate::config::constants::messages::{PREDICT_OK, TRAIN_OK};
use crate::config::{DF, DashboardConfig};
use crate::data::{ApiResponse, parse_history, parse_prediction, parse_train};
use crate::domain::{Period, Ticker};
use crate::models::{AlertLevel, NotificationCenter, SeriesStore};
use crate::projection::{
    ChartProjector, ChartSink, SummaryProjector, SummaryView, TableProjector, TableRow,
};
use crate::utils::AppInstant;

use super::errors::{DashboardError, DashboardResult, TransportError};
use super::messages::{
    ApiRequest, Command, Completion, Dispatch, Operation, Outbound, Rejection, Ticket,
};
use super::state::RequestState;

/// Owns everything the page shows and decides what goes on the wire.
///
/// The coordinator never performs I/O. `dispatch` turns UI commands into
/// `Outbound` requests queued in the outbox; `complete` applies whatever came
/// back. Both run on the UI thread, so there is exactly one writer.
pub struct RequestCoordinator<S: ChartSink> {
    config: DashboardConfig,

    store: SeriesStore,
    requests: RequestState,
    notifications: NotificationCenter,

    /// Current content of the ticker input. Drives the chart title.
    selected_ticker: String,
    /// Period of the most recent history load. Reused by the post-training reload.
    last_period: Period,

    table: Vec<TableRow>,
    summary: Option<SummaryView>,
    sink: S,

    outbox: VecDeque<Outbound>,
}

impl<S: ChartSink> RequestCoordinator<S> {
    pub fn new(config: DashboardConfig, sink: S) -> Self {
        Self {
            requests: RequestState::new(!config.require_training_before_predict),
            notifications: NotificationCenter::new(config.notification_ttl),
            selected_ticker: config.default_ticker.trim().to_uppercase(),
            last_period: config.default_period,
            store: SeriesStore::new(),
            table: Vec::new(),
            summary: None,
            sink,
            outbox: VecDeque::new(),
            config,
        }
    }

    /// The history load issued when the page opens.
    pub fn startup_command(&self) -> Command {
        Command::LoadHistory {
            ticker: self.config.default_ticker.clone(),
            period: self.config.default_period,
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Dispatch {
        match command {
            Command::SelectTicker(raw) => {
                self.selected_ticker = raw.trim().to_uppercase();
                Dispatch::Applied
            }
            Command::DismissNotification(id) => {
                self.notifications.dismiss(id);
                Dispatch::Applied
            }
            Command::LoadHistory { ticker, period } => match Ticker::parse(&ticker) {
                Ok(ticker) => {
                    self.last_period = period;
                    self.request_history(ApiRequest::History { ticker, period })
                }
                Err(e) => self.reject_input(e),
            },
            Command::TrainModel {
                ticker,
                time_step,
                epochs,
            } => {
                if self.requests.is_pending(Operation::Train) {
                    return self.reject(Rejection::Busy(Operation::Train));
                }
                match Self::validate_training(&ticker, time_step, epochs) {
                    Ok(request) => self.issue(request),
                    Err(e) => self.reject_input(e),
                }
            }
            Command::RequestPrediction { days } => {
                if self.requests.is_pending(Operation::Predict) {
                    return self.reject(Rejection::Busy(Operation::Predict));
                }
                if !self.requests.is_prediction_unlocked() {
                    return self.reject(Rejection::Locked(Operation::Predict));
                }
                if days == 0 {
                    return self.reject_input(DashboardError::InvalidInput(
                        "Days to predict must be at least 1".to_string(),
                    ));
                }
                self.issue(ApiRequest::Predict { days })
            }
        }
    }

    fn validate_training(ticker: &str, time_step: u32, epochs: u32) -> DashboardResult<ApiRequest> {
        let ticker = Ticker::parse(ticker)?;
        if time_step == 0 {
            return Err(DashboardError::InvalidInput(
                "Time step must be at least 1".to_string(),
            ));
        }
        if epochs == 0 {
            return Err(DashboardError::InvalidInput(
                "Epochs must be at least 1".to_string(),
            ));
        }
        Ok(ApiRequest::Train {
            ticker,
            time_step,
            epochs,
        })
    }

    /// History loads never bounce: a busy slot parks the latest request instead.
    fn request_history(&mut self, request: ApiRequest) -> Dispatch {
        if self.requests.is_pending(Operation::LoadHistory) {
            if DF.log_dispatch {
                log::info!("DISPATCH: history load in flight, deferring {:?}", request);
            }
            self.requests.defer_history(request);
            return Dispatch::Deferred;
        }
        self.issue(request)
    }

    fn issue(&mut self, request: ApiRequest) -> Dispatch {
        let op = request.operation();
        match self.requests.begin(request.clone()) {
            Some(ticket) => {
                if DF.log_requests {
                    log::info!("REQUEST #{}: {:?}", ticket.0, request);
                }
                self.outbox.push_back(Outbound { ticket, request });
                Dispatch::Issued(ticket)
            }
            None => self.reject(Rejection::Busy(op)),
        }
    }

    fn reject(&self, rejection: Rejection) -> Dispatch {
        if DF.log_dispatch {
            log::info!("DISPATCH: rejected ({:?})", rejection);
        }
        Dispatch::Rejected(rejection)
    }

    fn reject_input(&mut self, error: DashboardError) -> Dispatch {
        log::warn!("DISPATCH: invalid input: {}", error);
        self.notifications
            .notify(error.user_message(), AlertLevel::Danger);
        Dispatch::Rejected(Rejection::InvalidInput)
    }

    /// Applies one worker result. Stale tickets are dropped without side effects.
    pub fn complete(&mut self, completion: Completion) {
        let Completion {
            ticket,
            operation,
            duration_ms,
            response,
        } = completion;

        let Some(in_flight) = self.requests.settle(operation, ticket) else {
            log::warn!(
                "REQUEST #{}: stale {} completion ignored",
                ticket.0,
                operation
            );
            return;
        };

        if DF.log_requests {
            log::info!(
                "REQUEST #{}: {} settled in {}ms ({}ms since issue)",
                ticket.0,
                operation,
                duration_ms,
                in_flight.issued_at.elapsed().as_millis()
            );
        }

        match in_flight.request {
            ApiRequest::History { ticker, .. } => {
                self.apply_history(ticker, response);
                if let Some(next) = self.requests.take_deferred_history() {
                    self.issue(next);
                }
            }
            ApiRequest::Train { ticker, .. } => self.apply_training(ticker, response),
            ApiRequest::Predict { .. } => self.apply_prediction(response),
        }
    }

    fn apply_history(&mut self, ticker: Ticker, response: Result<ApiResponse, TransportError>) {
        let parsed = response
            .map_err(|e| DashboardError::transport(Operation::LoadHistory, e))
            .and_then(|r| parse_history(&r));

        match parsed {
            Ok(points) => {
                if DF.log_requests {
                    log::info!("HISTORY: {} points for {}", points.len(), ticker);
                }
                let cleared =
                    self.store
                        .replace_historical(ticker, points, self.config.stale_predictions);
                self.project_chart();
                self.project_table();
                if cleared {
                    self.project_summary();
                }
            }
            Err(e) => self.report(e),
        }
    }

    fn apply_training(&mut self, ticker: Ticker, response: Result<ApiResponse, TransportError>) {
        let parsed = response
            .map_err(|e| DashboardError::transport(Operation::Train, e))
            .and_then(|r| parse_train(&r));

        match parsed {
            Ok(message) => {
                if let Some(message) = message {
                    log::info!("TRAIN: server says '{}'", message);
                }
                self.notifications.notify(TRAIN_OK, AlertLevel::Success);
                self.requests.unlock_prediction();
                let period = self.last_period;
                self.request_history(ApiRequest::History { ticker, period });
            }
            Err(e) => self.report(e),
        }
    }

    fn apply_prediction(&mut self, response: Result<ApiResponse, TransportError>) {
        let parsed = response
            .map_err(|e| DashboardError::transport(Operation::Predict, e))
            .and_then(|r| parse_prediction(&r));

        match parsed {
            Ok(points) => {
                self.store.replace_predicted(points);
                self.project_chart();
                self.project_summary();
                self.notifications.notify(PREDICT_OK, AlertLevel::Success);
            }
            Err(e) => self.report(e),
        }
    }

    /// One alert per failed operation. Transport-tier causes go to the log only.
    fn report(&mut self, error: DashboardError) {
        if error.is_transport_tier() {
            match std::error::Error::source(&error) {
                Some(source) => log::error!("{} ({})", error, source),
                None => log::error!("{}", error),
            }
        } else {
            log::warn!("Server reported failure: {}", error);
        }
        self.notifications
            .notify(error.user_message(), AlertLevel::Danger);
    }

    fn project_chart(&mut self) {
        ChartProjector::project(&self.store, &self.selected_ticker, &mut self.sink);
    }

    fn project_table(&mut self) {
        self.table = TableProjector::project(self.store.historical(), self.config.table_rows);
    }

    fn project_summary(&mut self) {
        SummaryProjector::project(
            &self.store,
            &mut self.summary,
            self.config.reset_summary_when_empty,
        );
    }

    /// Requests waiting to be handed to the worker, oldest first.
    pub fn drain_outbox(&mut self) -> impl Iterator<Item = Outbound> + '_ {
        self.outbox.drain(..)
    }

    pub fn expire_notifications(&mut self, now: AppInstant) -> usize {
        self.notifications.expire(now)
    }

    // --- Accessors for the UI ---

    pub fn is_control_enabled(&self, op: Operation) -> bool {
        self.requests.is_control_enabled(op)
    }

    pub fn is_pending(&self, op: Operation) -> bool {
        self.requests.is_pending(op)
    }

    pub fn any_pending(&self) -> bool {
        self.requests.any_pending() || self.requests.has_deferred_history()
    }

    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn table_rows(&self) -> &[TableRow] {
        &self.table
    }

    pub fn summary(&self) -> Option<&SummaryView> {
        self.summary.as_ref()
    }

    pub fn selected_ticker(&self) -> &str {
        &self.selected_ticker
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn in_flight_ticket(&self, op: Operation) -> Option<Ticket> {
        self.requests.in_flight(op).map(|f| f.ticket)
    }
}
