//! Background analytics worker — fire-and-forget click tracking.
//!
//! The worker owns the `AnalyticsClient`; the UI thread only sends
//! commands and drains responses, so a slow or failing endpoint never
//! blocks rendering. There is deliberately no retry and no queue
//! beyond the channel itself.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use govchime_core::analytics::{AnalyticsClient, ClickEvent, TrackOutcome};

/// Commands sent from the UI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    TrackClick { event: ClickEvent },
    Shutdown,
}

/// Responses sent from the worker back to the UI.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    TrackSent,
    TrackDisabled,
    TrackFailed { error: String },
}

/// Spawn the background analytics thread.
pub fn spawn_worker(
    client: AnalyticsClient,
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("govchime-analytics".into())
        .spawn(move || {
            worker_loop(client, rx, tx);
        })
        .expect("failed to spawn analytics worker thread")
}

fn worker_loop(client: AnalyticsClient, rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::TrackClick { event }) => {
                let resp = match client.track(&event) {
                    Ok(TrackOutcome::Sent) => WorkerResponse::TrackSent,
                    Ok(TrackOutcome::Disabled) => WorkerResponse::TrackDisabled,
                    Err(e) => WorkerResponse::TrackFailed {
                        error: e.to_string(),
                    },
                };
                let _ = tx.send(resp);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use govchime_core::analytics::AnalyticsConfig;
    use std::sync::mpsc;

    fn disabled_client() -> AnalyticsClient {
        AnalyticsClient::new(AnalyticsConfig {
            endpoint: "http://127.0.0.1:1/never-reached".into(),
            affiliate: "govchime".into(),
            access_key: None,
        })
    }

    #[test]
    fn worker_shutdown() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, _resp_rx) = mpsc::channel();

        let handle = spawn_worker(disabled_client(), cmd_rx, resp_tx);
        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().expect("worker should join cleanly");
    }

    #[test]
    fn disabled_client_reports_disabled() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        let handle = spawn_worker(disabled_client(), cmd_rx, resp_tx);
        cmd_tx
            .send(WorkerCommand::TrackClick {
                event: ClickEvent {
                    url: "https://govchime.example/awards/1".into(),
                    query: String::new(),
                    position: 1,
                    module_code: "awards-wall".into(),
                },
            })
            .unwrap();

        let resp = resp_rx.recv().unwrap();
        assert!(matches!(resp, WorkerResponse::TrackDisabled));

        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn dropped_sender_stops_worker() {
        let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();
        let (resp_tx, _resp_rx) = mpsc::channel();

        let handle = spawn_worker(disabled_client(), cmd_rx, resp_tx);
        drop(cmd_tx);
        handle.join().expect("worker exits when channel closes");
    }
}
