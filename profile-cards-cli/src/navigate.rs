use colored::Colorize;
use profile_cards_lib::{ProfileStore, Router, Screen};
use sysexits::ExitCode;
use tracing::debug;

use crate::render;

const BACK: &str = "back";

/// Outcome of replaying navigation steps against a fresh [`Router`].
#[derive(Debug)]
pub struct Replay {
    pub router: Router,
    /// Steps that were rejected, with the reason
    pub rejected: Vec<(String, String)>,
}

/// Apply each step in order. Rejected steps leave the router where it was.
pub fn replay<S: AsRef<str>>(steps: &[S]) -> Replay {
    let mut router = Router::new();
    let mut rejected = Vec::new();

    for step in steps.iter().map(AsRef::as_ref) {
        if step == BACK {
            if !router.navigate_back() {
                debug!("Already at the start route");
            }
            continue;
        }

        if let Err(e) = router.navigate(step) {
            rejected.push((step.to_string(), e.to_string()));
        }
    }

    Replay { router, rejected }
}

pub fn handle(store: &ProfileStore, steps: &[String]) -> ExitCode {
    let Replay { router, rejected } = replay(steps);

    for (step, reason) in &rejected {
        eprintln!("{} `{step}`: {reason}", "Skipped".yellow());
    }

    let route = router.current();
    println!("{} {route} (depth {})", "Route:".bold(), router.depth());
    print!("{}", render::screen(&Screen::for_route(route, store)));

    if rejected.is_empty() {
        ExitCode::Ok
    } else {
        ExitCode::Usage
    }
}
