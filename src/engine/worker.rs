use std::sync::Arc;
use std::sync::mpsc::Sender;

// Only import thread on non-WASM targets
#[cfg(not(target_arch = "wasm32"))]
use {
    super::errors::TransportError, std::sync::mpsc::channel, std::thread,
    tokio::runtime::Builder,
};

use super::messages::{Completion, Outbound};

use crate::data::Transport;
use crate::utils::AppInstant;

/// Called after every completion so the UI wakes up to drain it.
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

/// Runs requests off the UI loop and posts a `Completion` for each one.
///
/// Native: a background thread owning a tokio runtime, one task per request.
/// WASM: each request is a `spawn_local` future on the browser's event loop.
pub struct Worker {
    #[cfg(not(target_arch = "wasm32"))]
    job_tx: Sender<Outbound>,
    #[cfg(not(target_arch = "wasm32"))]
    result_tx: Sender<Completion>,

    #[cfg(target_arch = "wasm32")]
    transport: Arc<dyn Transport>,
    #[cfg(target_arch = "wasm32")]
    result_tx: Sender<Completion>,
    #[cfg(target_arch = "wasm32")]
    repaint: Option<RepaintHook>,
}

impl Worker {
    /// NATIVE: spawns the background thread and its runtime.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn(
        transport: Arc<dyn Transport>,
        result_tx: Sender<Completion>,
        repaint: Option<RepaintHook>,
    ) -> Self {
        let (job_tx, job_rx) = channel::<Outbound>();
        let thread_tx = result_tx.clone();

        thread::spawn(move || {
            let result_tx = thread_tx;
            let runtime = match Builder::new_multi_thread()
                .worker_threads(2)
                .thread_name("stock-sight-net")
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("WORKER: failed to start tokio runtime: {}", e);
                    // Every request still gets an answer so no control stays locked
                    let reason = format!("network worker unavailable: {}", e);
                    while let Ok(job) = job_rx.recv() {
                        post(&result_tx, &repaint, failed(&job, reason.clone()));
                    }
                    return;
                }
            };

            while let Ok(job) = job_rx.recv() {
                let transport = transport.clone();
                let tx = result_tx.clone();
                let repaint = repaint.clone();
                runtime.spawn(async move {
                    let fallback = failed(&job, String::new());
                    let task = tokio::spawn(async move { execute(transport.as_ref(), job).await });
                    let completion = match task.await {
                        Ok(completion) => completion,
                        Err(e) => {
                            log::error!(
                                "WORKER: {} #{} task died: {}",
                                fallback.operation,
                                fallback.ticket.0,
                                e
                            );
                            Completion {
                                response: Err(TransportError::Network(format!(
                                    "request task failed: {}",
                                    e
                                ))),
                                ..fallback
                            }
                        }
                    };
                    post(&tx, &repaint, completion);
                });
            }
        });

        Self { job_tx, result_tx }
    }

    /// WASM: nothing to spawn up front.
    #[cfg(target_arch = "wasm32")]
    pub fn spawn(
        transport: Arc<dyn Transport>,
        result_tx: Sender<Completion>,
        repaint: Option<RepaintHook>,
    ) -> Self {
        Self {
            transport,
            result_tx,
            repaint,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn submit(&self, job: Outbound) {
        if let Err(returned) = self.job_tx.send(job) {
            let job = returned.0;
            log::error!(
                "WORKER: job channel closed, failing {} #{}",
                job.request.operation(),
                job.ticket.0
            );
            let completion = failed(&job, "network worker stopped".to_string());
            let _ = self.result_tx.send(completion);
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn submit(&self, job: Outbound) {
        let transport = self.transport.clone();
        let tx = self.result_tx.clone();
        let repaint = self.repaint.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let completion = execute(transport.as_ref(), job).await;
            let _ = tx.send(completion);
            if let Some(wake) = repaint {
                wake();
            }
        });
    }
}

/// A completion for a job that never reached the transport.
#[cfg(not(target_arch = "wasm32"))]
fn failed(job: &Outbound, reason: String) -> Completion {
    Completion {
        ticket: job.ticket,
        operation: job.request.operation(),
        duration_ms: 0,
        response: Err(TransportError::Network(reason)),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn post(tx: &Sender<Completion>, repaint: &Option<RepaintHook>, completion: Completion) {
    let _ = tx.send(completion);
    if let Some(wake) = repaint {
        wake();
    }
}

/// Sends one request and wraps the raw answer. Never interprets the body.
pub(crate) async fn execute(transport: &dyn Transport, job: Outbound) -> Completion {
    let operation = job.request.operation();
    let label = format!("{} #{}", operation, job.ticket.0);
    let start = AppInstant::now();

    let response = crate::trace_time!(&label, 3000, { transport.send(&job.request).await });
    let duration_ms = start.elapsed().as_millis();

    Completion {
        ticket: job.ticket,
        operation,
        duration_ms,
        response,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::engine::{ApiRequest, Ticket};

    #[test]
    fn undeliverable_job_fails_with_its_own_ticket() {
        let job = Outbound {
            ticket: Ticket(7),
            request: ApiRequest::Predict { days: 5 },
        };
        let completion = failed(&job, "network worker stopped".into());
        assert_eq!(completion.ticket, Ticket(7));
        assert_eq!(completion.operation, job.request.operation());
        assert!(matches!(
            completion.response,
            Err(TransportError::Network(ref reason)) if reason == "network worker stopped"
        ));
    }

    #[test]
    fn submit_after_worker_exit_still_answers() {
        let (result_tx, result_rx) = std::sync::mpsc::channel();
        let (job_tx, job_rx) = channel::<Outbound>();
        drop(job_rx);
        let worker = Worker { job_tx, result_tx };

        worker.submit(Outbound {
            ticket: Ticket(3),
            request: ApiRequest::Predict { days: 1 },
        });

        let completion = result_rx.try_recv().unwrap();
        assert_eq!(completion.ticket, Ticket(3));
        assert!(completion.response.is_err());
    }
}
