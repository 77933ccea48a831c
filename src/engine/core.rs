use std::sync::Arc;
use std::sync::mpsc::{Receiver, channel};

use crate::config::DashboardConfig;
use crate::data::Transport;
use crate::projection::ChartSink;
use crate::utils::AppInstant;

use super::coordinator::RequestCoordinator;
use super::messages::{Command, Completion, Dispatch};
use super::worker::{RepaintHook, Worker};

/// The coordinator wired to a worker.
///
/// Everything here runs on the UI thread. The worker only ever sees `Outbound`
/// requests and only ever hands back `Completion`s over the channel.
pub struct DashboardEngine<S: ChartSink> {
    coordinator: RequestCoordinator<S>,
    worker: Worker,
    result_rx: Receiver<Completion>, // UI reads from this
}

impl<S: ChartSink> DashboardEngine<S> {
    pub fn new(
        config: DashboardConfig,
        transport: Arc<dyn Transport>,
        sink: S,
        repaint: Option<RepaintHook>,
    ) -> Self {
        let (result_tx, result_rx) = channel::<Completion>();
        let worker = Worker::spawn(transport, result_tx, repaint);

        Self {
            coordinator: RequestCoordinator::new(config, sink),
            worker,
            result_rx,
        }
    }

    /// Kicks off the default history load.
    pub fn start(&mut self) -> Dispatch {
        let command = self.coordinator.startup_command();
        self.dispatch(command)
    }

    pub fn dispatch(&mut self, command: Command) -> Dispatch {
        let outcome = self.coordinator.dispatch(command);
        self.flush();
        outcome
    }

    /// THE UI TICK. Applies finished requests, sends whatever they queued
    /// and expires old alerts. Returns how many completions were applied.
    pub fn update(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.result_rx.try_recv() {
            self.coordinator.complete(completion);
            applied += 1;
        }
        self.flush();
        self.coordinator.expire_notifications(AppInstant::now());
        applied
    }

    fn flush(&mut self) {
        for job in self.coordinator.drain_outbox() {
            self.worker.submit(job);
        }
    }

    pub fn coordinator(&self) -> &RequestCoordinator<S> {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut RequestCoordinator<S> {
        &mut self.coordinator
    }
}
