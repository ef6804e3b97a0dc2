//! TabStash host bridge: NDJSON over stdin/stdout.
//!
//! Protocol: one JSON object per line.
//! Input:  {"event":"command","command":"stash-all-tabs","window":{"id":"w1","tabs":[...]}}
//! Output: {"action":"openTab","url":"..."}, {"action":"closeWindow","windowId":"w1"}, ...
//!
//! Usage: tabstash-host [SETTINGS_PATH]

use std::io::{self, BufRead};
use std::process::ExitCode;

use tabstash::app::App;
use tabstash::browser::{HostAction, HostBridge};

fn main() -> ExitCode {
    let config_path = std::env::args().nth(1);

    let mut app = match App::new(config_path, HostBridge::new(io::stdout())) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("tabstash-host: failed to start: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let ready = HostAction::Ready {
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    if let Err(e) = app.dispatcher.browser_mut().emit(&ready) {
        tracing::error!(error = %e, "stdout closed before ready");
        return ExitCode::FAILURE;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!(error = %e, "stdin read failed, shutting down");
                break;
            }
        };

        if let Err(error) = app.handle_line(&line) {
            tracing::debug!(%error, "rejected input line");
            if app.dispatcher.browser_mut().emit(&HostAction::Error { error }).is_err() {
                break;
            }
        }
    }

    tracing::info!("tabstash-host exiting");
    ExitCode::SUCCESS
}
