use std::future::Future;

use anyhow::Result;
use moodsnap::render::{render, RenderOptions};
use moodsnap::{Mode, Outcome, Session};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::debug;

const HELP: &str = "[f] fetch  [o] toggle offline  [u] use offline mode  [r] retry  [q] quit";


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fetch,
    ToggleOffline,
    UseOfflineMode,
    Retry,
    Quit,
}

impl Action {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "f" | "fetch" | "" => Some(Action::Fetch),
            "o" | "offline" => Some(Action::ToggleOffline),
            "u" | "use" => Some(Action::UseOfflineMode),
            "r" | "retry" => Some(Action::Retry),
            "q" | "quit" | "exit" => Some(Action::Quit),
            _ => None,
        }
    }
}


fn print_view(session: &Session, mode: Mode) {
    println!("{}", render(&session.state(), &RenderOptions::new(mode)));
}

pub async fn snap_once(session: &Session, mode: Mode, offline: bool) -> Result<()> {
    if offline {
        session.set_offline(true);
    } else {
        fetch_until_interrupted(session).await;
    }
    print_view(session, mode);
    Ok(())
}

pub async fn interactive(session: &Session, mode: Mode) -> Result<()> {
    let input = BufReader::new(tokio::io::stdin());
    run_actions(session, mode, input, || async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

/// Reads actions from `input` until `q`, end of input, or `interrupted`
/// resolving while waiting for the next line.
///
/// A fresh `interrupted` future is made for every wait, so a Ctrl-C that
/// cancelled a fetch does not also end the loop.
pub async fn run_actions<R, F, Fut>(session: &Session, mode: Mode, input: R, mut interrupted: F) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    print_view(session, mode);
    println!("{}", HELP);

    let mut lines = input.lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = interrupted() => {
                debug!("Interrupted while idle");
                break;
            }
        };
        let Some(line) = line else {
            break;
        };
        let Some(action) = Action::parse(&line) else {
            println!("{}", HELP);
            continue;
        };

        let outcome = match action {
            Action::Fetch | Action::Retry => fetch_until_interrupted(session).await,
            Action::ToggleOffline => session.toggle_offline(),
            Action::UseOfflineMode => session.use_offline_mode(),
            Action::Quit => break,
        };
        debug!(?action, ?outcome, "Handled action");

        print_view(session, mode);
        println!("{}", HELP);
    }

    Ok(())
}

// Ctrl-C cancels the in-flight fetch instead of killing the process.
async fn fetch_until_interrupted(session: &Session) -> Outcome {
    let cancel = CancellationToken::new();
    let watcher = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    let outcome = session.fetch_with_cancel(&cancel).await;
    watcher.abort();
    outcome
}


#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn parses_short_and_long_commands() {
        assert_eq!(Action::parse("f"), Some(Action::Fetch));
        assert_eq!(Action::parse(""), Some(Action::Fetch));
        assert_eq!(Action::parse(" Offline "), Some(Action::ToggleOffline));
        assert_eq!(Action::parse("u"), Some(Action::UseOfflineMode));
        assert_eq!(Action::parse("retry"), Some(Action::Retry));
        assert_eq!(Action::parse("Q"), Some(Action::Quit));
        assert_eq!(Action::parse("dance"), None);
    }

    #[tokio::test]
    async fn interrupt_while_idle_ends_the_loop() {
        let session = Session::new(&moodsnap::SnapConfig::default()).unwrap();
        // writer kept alive so reads stay pending
        let (_writer, reader) = tokio::io::duplex(64);

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            run_actions(&session, Mode::Production, BufReader::new(reader), || std::future::ready(())),
        )
        .await;
        assert!(matches!(result, Ok(Ok(()))));
    }

    #[tokio::test]
    async fn actions_run_until_quit() {
        let session = Session::new(&moodsnap::SnapConfig::default()).unwrap();
        let input: &[u8] = b"o\nhelp\nq\nf\n";

        run_actions(&session, Mode::Production, input, std::future::pending::<()>).await.unwrap();

        let state = session.state();
        assert!(state.offline);
        assert!(state.mood.is_some());
    }

    #[tokio::test]
    async fn offline_snap_prints_without_network() {
        let session = Session::new(&moodsnap::SnapConfig::default()).unwrap();
        snap_once(&session, Mode::Production, true).await.unwrap();

        let state = session.state();
        assert!(state.offline);
        assert!(state.mood.is_some());
        assert!(!state.suggestions.is_empty());
    }
}
