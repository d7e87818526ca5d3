//! `detail`: one restroom from the ranked list

use crate::session::{self, Reported, Session};
use crate::ContextArgs;
use anyhow::Result;
use restroom_app::ShellEvent;
use restroom_cli::{Renderer, Status};
use serde_json::json;

/// Rank, then open the record at 1-based `index`
pub async fn run(
    config: Option<&str>,
    api_url: Option<&str>,
    context: &ContextArgs,
    index: usize,
    json: bool,
) -> Result<()> {
    let position = index.checked_sub(1).ok_or_else(|| out_of_range(index))?;

    let session = Session::open(config, api_url)?;
    let mut shell = session.shell(context);
    session::start(&mut shell).await?;

    shell
        .dispatch(ShellEvent::Select(position))
        .await
        .map_err(Reported::from)?;

    let (Some(view), Some(detail)) = (shell.detail_view(), shell.detail()) else {
        return Err(out_of_range(index).into());
    };
    let bathroom_id = detail.record().identifier();

    if json {
        let out = json!({ "id": bathroom_id, "detail": view });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", Renderer::detect().detail(&view));
    println!();
    Status::info(&format!("Rate it: restroom-finder rate '{bathroom_id}' <1-5>"));
    Ok(())
}

fn out_of_range(index: usize) -> restroom_core::Error {
    restroom_core::Error::validation(format!("No restroom at position {index}"))
        .with_suggestion("Positions start at 1; run `restroom-finder nearby` to see the list")
}
