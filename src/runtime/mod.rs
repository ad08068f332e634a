//! Runtime - owns the model and executes commands
//!
//! Hosts feed user events in through [`Runtime::dispatch`] and poll
//! [`Runtime::process_async_messages`] from their event loop. Blocking work
//! (decoding an import, writing an export) runs on worker threads that post
//! completion messages back through the same channel.

mod export;

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use crate::codec;
use crate::commands::Cmd;
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;
use crate::notifications::NotificationSink;
use crate::update::update;

pub use export::write_export;

/// Drives the update loop for a host
pub struct Runtime<S: NotificationSink> {
    model: AppModel,
    sink: S,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl<S: NotificationSink> Runtime<S> {
    pub fn new(model: AppModel, sink: S) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            sink,
            msg_tx,
            msg_rx,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (AppModel, S) {
        (self.model, self.sink)
    }

    /// Sender for hosts that produce messages off the main thread
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Run one message through update and execute the resulting command
    ///
    /// Returns true if the host should redraw.
    pub fn dispatch(&mut self, msg: impl Into<Msg>) -> bool {
        match update(&mut self.model, msg.into()) {
            Some(cmd) => {
                let needs_redraw = cmd.needs_redraw();
                self.process_cmd(cmd);
                needs_redraw
            }
            None => false,
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::Import { request } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = codec::decode_request(&request);
                    let _ = tx.send(Msg::App(AppMsg::ImportCompleted(result)));
                });
            }
            Cmd::WriteExport {
                path,
                content,
                rows,
                filename,
            } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = write_export(&path, &content)
                        .map(|()| path)
                        .map_err(|e| format!("{:#}", e));
                    let _ = tx.send(Msg::App(AppMsg::ExportCompleted {
                        filename,
                        rows,
                        result,
                    }));
                });
            }
            Cmd::Notify(notification) => self.sink.notify(notification),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Drain completion messages without blocking
    ///
    /// Returns true if any of them needs a redraw.
    pub fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            needs_redraw |= self.dispatch(msg);
        }
        needs_redraw
    }

    /// Block until one completion message arrives and process it
    ///
    /// Returns false if nothing arrived within `timeout`.
    pub fn wait_for_message(&mut self, timeout: Duration) -> bool {
        match self.msg_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch(msg);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Process messages until no import or export is in flight
    ///
    /// Returns false if work was still pending after `timeout`.
    pub fn wait_until_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.model.ui.is_busy() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !self.wait_for_message(remaining) {
                return !self.model.ui.is_busy();
            }
        }
        true
    }
}
