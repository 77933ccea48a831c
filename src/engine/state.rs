use crate::engine::messages::{ApiRequest, Operation, Ticket};
use crate::utils::AppInstant;

/// An issued request waiting for its completion.
#[derive(Debug, Clone)]
pub struct InFlight {
    pub ticket: Ticket,
    pub request: ApiRequest,
    pub issued_at: AppInstant,
}

/// Pending slots for the three operation families.
///
/// A family with `Some` in its slot has its control disabled and its busy indicator
/// shown. Slots are cleared in `settle` before the response is even looked at, so
/// no outcome can leave a control locked.
#[derive(Debug, Default)]
pub struct RequestState {
    history: Option<InFlight>,
    train: Option<InFlight>,
    predict: Option<InFlight>,

    /// Latest history load asked for while another was in flight.
    deferred_history: Option<ApiRequest>,

    prediction_unlocked: bool,
    next_ticket: u64,
}

impl RequestState {
    pub fn new(prediction_unlocked: bool) -> Self {
        Self {
            prediction_unlocked,
            ..Default::default()
        }
    }

    fn slot(&self, op: Operation) -> &Option<InFlight> {
        match op {
            Operation::LoadHistory => &self.history,
            Operation::Train => &self.train,
            Operation::Predict => &self.predict,
        }
    }

    fn slot_mut(&mut self, op: Operation) -> &mut Option<InFlight> {
        match op {
            Operation::LoadHistory => &mut self.history,
            Operation::Train => &mut self.train,
            Operation::Predict => &mut self.predict,
        }
    }

    pub fn is_pending(&self, op: Operation) -> bool {
        self.slot(op).is_some()
    }

    pub fn any_pending(&self) -> bool {
        self.history.is_some() || self.train.is_some() || self.predict.is_some()
    }

    /// Whether the control that triggers `op` accepts a press right now.
    pub fn is_control_enabled(&self, op: Operation) -> bool {
        match op {
            Operation::Predict => self.prediction_unlocked && !self.is_pending(op),
            _ => !self.is_pending(op),
        }
    }

    pub fn is_prediction_unlocked(&self) -> bool {
        self.prediction_unlocked
    }

    pub fn unlock_prediction(&mut self) {
        self.prediction_unlocked = true;
    }

    pub fn in_flight(&self, op: Operation) -> Option<&InFlight> {
        self.slot(op).as_ref()
    }

    /// Occupies the slot for `request` and hands out its ticket.
    /// Callers check `is_pending` first; a second begin on a busy slot returns None.
    pub fn begin(&mut self, request: ApiRequest) -> Option<Ticket> {
        let op = request.operation();
        if self.is_pending(op) {
            return None;
        }
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        *self.slot_mut(op) = Some(InFlight {
            ticket,
            request,
            issued_at: AppInstant::now(),
        });
        Some(ticket)
    }

    /// Frees the slot holding `ticket`. Unknown or stale tickets return None.
    pub fn settle(&mut self, op: Operation, ticket: Ticket) -> Option<InFlight> {
        let slot = self.slot_mut(op);
        if slot.as_ref().is_some_and(|f| f.ticket == ticket) {
            slot.take()
        } else {
            None
        }
    }

    pub fn defer_history(&mut self, request: ApiRequest) {
        self.deferred_history = Some(request);
    }

    pub fn take_deferred_history(&mut self) -> Option<ApiRequest> {
        self.deferred_history.take()
    }

    pub fn has_deferred_history(&self) -> bool {
        self.deferred_history.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Period, Ticker};

    fn history(t: &str) -> ApiRequest {
        ApiRequest::History {
            ticker: Ticker::parse(t).unwrap(),
            period: Period::OneYear,
        }
    }

    #[test]
    fn one_request_per_family() {
        let mut state = RequestState::new(true);
        let first = state.begin(ApiRequest::Predict { days: 5 });
        assert!(first.is_some());
        assert!(state.begin(ApiRequest::Predict { days: 5 }).is_none());
        // Other families are independent
        assert!(state.begin(history("AAPL")).is_some());
        assert!(state.is_pending(Operation::Predict));
        assert!(state.is_pending(Operation::LoadHistory));
        assert!(!state.is_pending(Operation::Train));
    }

    #[test]
    fn settle_only_accepts_the_in_flight_ticket() {
        let mut state = RequestState::new(true);
        let t1 = state.begin(ApiRequest::Predict { days: 1 }).unwrap();
        let t2 = state.begin(history("AAPL")).unwrap();
        assert!(t2 > t1);

        assert!(state.settle(Operation::Predict, t2).is_none());
        assert!(state.is_pending(Operation::Predict));
        assert!(state.settle(Operation::Predict, t1).is_some());
        assert!(state.is_control_enabled(Operation::Predict));
        assert!(state.settle(Operation::Predict, t1).is_none());
    }

    #[test]
    fn predict_control_waits_for_unlock() {
        let mut state = RequestState::new(false);
        assert!(!state.is_control_enabled(Operation::Predict));
        assert!(state.is_control_enabled(Operation::Train));
        state.unlock_prediction();
        assert!(state.is_control_enabled(Operation::Predict));
    }

    #[test]
    fn latest_deferred_history_wins() {
        let mut state = RequestState::default();
        state.defer_history(history("AAPL"));
        state.defer_history(history("MSFT"));
        assert_eq!(state.take_deferred_history(), Some(history("MSFT")));
        assert!(!state.has_deferred_history());
    }
}
