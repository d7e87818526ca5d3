//! Interactive mode.
//!
//! A menu loop over the shell: every choice becomes a [`ShellEvent`].
//! Failures are shown as notifications and the session continues, except a
//! denied location, which ends it.

use crate::session::{self, Reported, Session, Shell};
use crate::ContextArgs;
use anyhow::Result;
use dialoguer::{MultiSelect, Select};
use restroom_api_client::models::{Amenity, Urgency};
use restroom_app::view::amenity_label;
use restroom_app::{ShellEvent, ViewMode};
use restroom_cli::render::star_bar;
use restroom_cli::Renderer;
use restroom_core::ErrorCode;
use tracing::debug;

/// Runs the interactive session until the user quits.
///
/// # Errors
///
/// Returns an error if the location cannot be acquired, or a prompt fails.
pub async fn run(config: Option<&str>, api_url: Option<&str>, context: &ContextArgs) -> Result<()> {
    let session = Session::open(config, api_url)?;
    let mut shell = session.shell(context);
    let renderer = Renderer::detect();

    if let Err(e) = session::start(&mut shell).await {
        if ends_session(&e) {
            return Err(e.into());
        }
        debug!(error = %e, "Initial fetch failed, continuing");
    }

    loop {
        let keep_going = if shell.detail().is_some() {
            detail_menu(&mut shell, &renderer).await?
        } else {
            main_menu(&mut shell, &renderer).await?
        };
        if !keep_going {
            println!("Goodbye.");
            return Ok(());
        }
    }
}

/// Without a position there is nothing to rank, so location failures end the session
fn ends_session(error: &Reported) -> bool {
    matches!(
        error.0.code,
        ErrorCode::LocationPermissionDenied | ErrorCode::LocationUnavailable
    )
}

/// Dispatch an event, keeping the session alive on failure
async fn send(shell: &mut Shell, event: ShellEvent) {
    if let Err(e) = shell.dispatch(event).await {
        debug!(error = %Reported::from(e), "Event failed");
    }
}

async fn main_menu(shell: &mut Shell, renderer: &Renderer) -> Result<bool> {
    println!();
    println!("{}", renderer.header(shell.filter_banner().as_ref()));
    println!();
    match shell.view_mode() {
        ViewMode::List => println!("{}", renderer.list(&shell.list_view())),
        ViewMode::Map => println!("{}", renderer.map(&shell.map_view())),
    }
    println!();

    let toggle = match shell.view_mode() {
        ViewMode::List => "Show map",
        ViewMode::Map => "Show list",
    };
    let items = ["Open a restroom", "Refresh", "Filters", toggle, "Quit"];
    let selection = Select::new()
        .with_prompt("Restroom Finder")
        .items(&items)
        .default(0)
        .interact()?;

    match selection {
        0 => {
            if let Some(index) = pick_restroom(shell)? {
                send(shell, ShellEvent::Select(index)).await;
            }
        }
        1 => send(shell, ShellEvent::Refresh).await,
        2 => filter_dialog(shell).await?,
        3 => send(shell, ShellEvent::ToggleViewMode).await,
        _ => return Ok(false),
    }
    Ok(true)
}

fn pick_restroom(shell: &Shell) -> Result<Option<usize>> {
    let cards = shell.list_view().cards;
    if cards.is_empty() {
        println!("Nothing to open yet.");
        return Ok(None);
    }

    let names: Vec<String> = cards
        .iter()
        .map(|c| format!("{}  ({})", c.name, c.distance))
        .collect();
    let index = Select::new()
        .with_prompt("Which one?")
        .items(&names)
        .default(0)
        .interact()?;
    Ok(Some(index))
}

async fn filter_dialog(shell: &mut Shell) -> Result<()> {
    let mut selection = shell.open_filter_dialog();

    let labels: Vec<String> = Amenity::KNOWN.iter().map(amenity_label).collect();
    let checked: Vec<bool> = Amenity::KNOWN
        .iter()
        .map(|a| selection.is_selected(a))
        .collect();
    let picked = MultiSelect::new()
        .with_prompt("Amenities (space to toggle)")
        .items(&labels)
        .defaults(&checked)
        .interact()?;
    for (i, amenity) in Amenity::KNOWN.iter().enumerate() {
        if picked.contains(&i) != selection.is_selected(amenity) {
            selection.toggle(amenity.clone());
        }
    }

    let levels: Vec<&str> = Urgency::ALL.iter().map(|u| u.as_str()).collect();
    let current = Urgency::ALL
        .iter()
        .position(|u| *u == selection.urgency())
        .unwrap_or(1);
    let level = Select::new()
        .with_prompt("Urgency")
        .items(&levels)
        .default(current)
        .interact()?;
    selection.set_urgency(Urgency::ALL[level]);

    send(shell, ShellEvent::ApplyFilters(selection)).await;
    Ok(())
}

async fn detail_menu(shell: &mut Shell, renderer: &Renderer) -> Result<bool> {
    if let Some(view) = shell.detail_view() {
        println!();
        println!("{}", renderer.detail(&view));
        println!();
    }

    let items = ["Pick a rating", "Submit rating", "Back", "Quit"];
    let selection = Select::new()
        .with_prompt("Restroom")
        .items(&items)
        .default(0)
        .interact()?;

    match selection {
        0 => {
            let options: Vec<String> = (1..=5u8)
                .map(|n| {
                    let mut stars = [false; 5];
                    stars.iter_mut().take(usize::from(n)).for_each(|s| *s = true);
                    star_bar(&stars)
                })
                .collect();
            let picked = Select::new()
                .with_prompt("Stars")
                .items(&options)
                .default(4)
                .interact()?;
            let stars = u8::try_from(picked + 1).unwrap_or(5);
            send(shell, ShellEvent::PickRating(stars)).await;
        }
        1 => send(shell, ShellEvent::SubmitRating).await,
        2 => send(shell, ShellEvent::Back).await,
        _ => return Ok(false),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use restroom_api_client::ApiError;
    use restroom_app::AppError;

    #[test]
    fn test_location_failures_end_the_session() {
        assert!(ends_session(&Reported::from(AppError::PermissionDenied)));
        assert!(ends_session(&Reported::from(AppError::LocationUnavailable(
            "GPS timeout".into()
        ))));
    }

    #[test]
    fn test_fetch_failure_keeps_the_session() {
        let outage = AppError::Network(ApiError::api_response(503, "down"));
        assert!(!ends_session(&Reported::from(outage)));
    }
}
