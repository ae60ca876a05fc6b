mod cli;
mod logging;
mod terminal;

use std::io::{self, Stdout};

use anyhow::{bail, Context, Result};
use clap::Parser;
use replay_core::{decode, AppState, LinkParams, Msg, SearchPayload};
use replay_engine::{DelayPicker, InstantDelay, PageConfig, PageOutcome, PageRuntime, RandomDelay};
use replay_logging::{replay_info, replay_warn};
use url::Url;

use crate::cli::{Cli, Command, FormArgs};
use crate::terminal::TerminalSurface;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log, cli.verbose);

    let mut config = PageConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(page) = cli.page {
        config.page_url = page;
    }

    match cli.command {
        Command::Share(form) => share(&config, form).await,
        Command::Open { link, instant } => open(&config, &link, instant).await,
        Command::Search(form) => search(&config, form).await,
    }
}

async fn share(config: &PageConfig, form: FormArgs) -> Result<()> {
    let mut runtime = page(config.initial_state()?, RandomDelay::from_os_rng());
    send_form(&runtime, form, Msg::ShareClicked)?;
    runtime.run().await;

    let surface = runtime.surface();
    if surface.focus_requested() || surface.share_link().is_none() {
        bail!("nothing to share: the query is empty");
    }
    Ok(())
}

async fn search(config: &PageConfig, form: FormArgs) -> Result<()> {
    let mut runtime = page(config.initial_state()?, RandomDelay::from_os_rng());
    send_form(&runtime, form, Msg::SubmitClicked)?;

    runtime.run().await;
    match runtime.surface().navigated_to() {
        Some(url) => {
            replay_info!("Direct search target url_len={}", url.len());
            Ok(())
        }
        None => bail!("nothing to search: the query is empty"),
    }
}

async fn open(config: &PageConfig, link: &str, instant: bool) -> Result<()> {
    let params = parse_link(link)?;
    let Some(payload) = decode(&params) else {
        println!("Not a replay link: there is nothing to replay.");
        return Ok(());
    };
    replay_info!("Replaying link query_len={}", payload.query_len());

    let state = config.initial_state()?;
    let outcome = if instant {
        play(page(state, InstantDelay), payload).await
    } else {
        play(page(state, RandomDelay::from_os_rng()), payload).await
    };

    match outcome {
        PageOutcome::Navigated { .. } => Ok(()),
        other => bail!("playback ended without a redirect: {other:?}"),
    }
}

async fn play<D: DelayPicker>(
    mut runtime: PageRuntime<D, TerminalSurface<Stdout>>,
    payload: SearchPayload,
) -> PageOutcome {
    if let Some(handle) = runtime.handle() {
        handle.send(Msg::LinkOpened(payload));
    }
    runtime.run().await
}

fn page<D: DelayPicker>(state: AppState, delays: D) -> PageRuntime<D, TerminalSurface<Stdout>> {
    PageRuntime::new(state, delays, TerminalSurface::new(io::stdout()))
}

fn send_form<D: DelayPicker>(
    runtime: &PageRuntime<D, TerminalSurface<Stdout>>,
    form: FormArgs,
    action: Msg,
) -> Result<()> {
    let handle = runtime
        .handle()
        .context("page runtime already started")?;

    if let Some(engine) = form.engine {
        if !runtime.state().registry().contains(&engine) {
            replay_warn!("Unknown engine `{}`, keeping the default", engine);
        }
        handle.send(Msg::EngineSelected(engine));
    }
    handle.send(Msg::QueryEdited(form.query));
    if let Some(custom) = form.custom {
        handle.send(Msg::CustomDestinationEdited(custom));
    }
    handle.send(action);
    Ok(())
}

/// Accepts a full URL or a bare query string.
fn parse_link(link: &str) -> Result<LinkParams> {
    let link = link.trim();
    if link.starts_with('?') {
        return Ok(LinkParams::parse(link));
    }
    match Url::parse(link) {
        Ok(url) => Ok(LinkParams::from_url(&url)),
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(LinkParams::parse(link)),
        Err(err) => Err(err).with_context(|| format!("invalid link `{link}`")),
    }
}
