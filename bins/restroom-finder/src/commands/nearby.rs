//! `nearby`: ranked list or map summary

use crate::session::{self, Reported, Session};
use crate::ContextArgs;
use anyhow::Result;
use restroom_app::{ShellEvent, ViewMode};
use restroom_cli::output::{format_count, format_duration};
use restroom_cli::{Renderer, Status};
use std::time::Instant;

/// Rank restrooms around the resolved location and print them
pub async fn run(
    config: Option<&str>,
    api_url: Option<&str>,
    context: &ContextArgs,
    map: bool,
    json: bool,
) -> Result<()> {
    let session = Session::open(config, api_url)?;
    let mut shell = session.shell(context);

    let started = Instant::now();
    session::start(&mut shell).await?;
    let elapsed = started.elapsed();

    if map {
        shell
            .dispatch(ShellEvent::ToggleViewMode)
            .await
            .map_err(Reported::from)?;
    }

    if json {
        let out = match shell.view_mode() {
            ViewMode::List => serde_json::to_string_pretty(&shell.list_view())?,
            ViewMode::Map => serde_json::to_string_pretty(&shell.map_view())?,
        };
        println!("{out}");
        return Ok(());
    }

    let renderer = Renderer::detect();
    println!("{}", renderer.header(shell.filter_banner().as_ref()));
    println!();
    match shell.view_mode() {
        ViewMode::List => println!("{}", renderer.list(&shell.list_view())),
        ViewMode::Map => println!("{}", renderer.map(&shell.map_view())),
    }
    println!();
    Status::info(&format!(
        "{} ranked in {}",
        format_count(shell.bathrooms().len(), "restroom", "restrooms"),
        format_duration(elapsed)
    ));

    Ok(())
}
