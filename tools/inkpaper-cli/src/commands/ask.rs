//! One-shot advisor question.

use anyhow::Result;
use inkpaper_advisor::FALLBACK_REPLY;
use serde_json::json;

use super::AskArgs;
use crate::context::Context;

/// Run the ask command.
pub async fn run(args: AskArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut session = ctx.advisor_session(&catalog)?;
    let name = &ctx.config.advisor.assistant_name;
    let question = args.message.join(" ");

    if session.advisor().config().api_key.is_none() {
        ctx.output.warn(&format!(
            "{} is not set; {} cannot reach the catalog service",
            ctx.config.advisor.api_key_env, name
        ));
    }

    let spinner = ctx.output.spinner(&format!("{} is thinking...", name));
    let reply = session.send(&question).await.map(|m| m.text.clone());
    spinner.finish_and_clear();

    let Some(reply) = reply else {
        ctx.output.warn("Nothing to ask");
        return Ok(());
    };

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "question": question,
            "reply": reply,
            "fallback": reply == FALLBACK_REPLY,
        }));
        return Ok(());
    }

    ctx.output.speaker(name, &reply);
    Ok(())
}
