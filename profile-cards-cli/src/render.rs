use colored::Colorize;
use profile_cards_lib::{
    DetailScreen, ListScreen, OnlineStatus, ProfileId, ProfileStore, ProfileSummary, Screen,
};
use sysexits::ExitCode;

pub fn list(store: &ProfileStore) -> ExitCode {
    print!("{}", screen(&Screen::List(ListScreen::render(store.profiles()))));
    ExitCode::Ok
}

pub fn show(store: &ProfileStore, id: ProfileId) -> ExitCode {
    let detail = DetailScreen::render(store, id);
    print!("{}", screen(&Screen::Detail(detail.clone())));

    match detail {
        DetailScreen::Found(_) => ExitCode::Ok,
        DetailScreen::NotFound(_) => ExitCode::DataErr,
    }
}

/// Render a screen as terminal text, title first.
pub fn screen(screen: &Screen) -> String {
    let mut out = format!("{}\n", screen.title().bold());

    match screen {
        Screen::List(list) if list.rows.is_empty() => out.push_str("  No users\n"),
        Screen::List(list) => {
            for row in &list.rows {
                out.push_str(&format!("  {:>3}  {}  {}\n", *row.id, row.name, status(row)));
            }
        }
        Screen::Detail(DetailScreen::Found(summary)) => {
            out.push_str(&format!("  {}\n  {}\n", summary.name.bold(), status(summary)));
            out.push_str(&format!("  {}\n", summary.picture.dimmed()));
        }
        Screen::Detail(DetailScreen::NotFound(id)) => {
            out.push_str(&format!("  {} (no user with id {id})\n", "Profile not found".red()));
        }
    }

    out
}

fn status(summary: &ProfileSummary) -> String {
    let text = summary.status.to_string();
    match summary.status {
        OnlineStatus::Active => text.green().to_string(),
        OnlineStatus::Offline => text.dimmed().to_string(),
    }
}
