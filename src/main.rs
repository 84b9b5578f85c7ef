use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

use tripguide::render;
use tripguide::services::guide::GuideGateway;
use tripguide::state::conversation::{Speaker, Turn};
use tripguide::widget::GuideWidget;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("stdin read failed: {0}")]
    Stdin(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "tripguide", about = "Terminal panel for the Inteleza '26 trip guide")]
struct Cli {
    /// Start with the chat panel open instead of the launcher.
    #[arg(long, env = "GUIDE_START_OPEN")]
    open: bool,
}

enum Command<'a> {
    Open,
    Close,
    Toggle,
    Quit,
    Say(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            "/open" => Self::Open,
            "/close" => Self::Close,
            "/toggle" => Self::Toggle,
            "/quit" | "/exit" => Self::Quit,
            _ => Self::Say(line),
        }
    }
}

fn draw(widget: &mut GuideWidget) {
    let grew = widget.scroll_target().is_some();
    let convo = widget.snapshot();
    if grew && !widget.visibility().is_expanded() && convo.last().map(Turn::speaker) == Some(Speaker::Assistant) {
        println!("(the guide replied, /open to read)");
    }
    print!("{}", render::panel(widget.visibility(), &convo, widget.draft()));
}

async fn join(in_flight: &mut Option<JoinHandle<()>>) {
    if let Some(handle) = in_flight {
        if let Err(e) = handle.await {
            tracing::warn!(error = %e, "guide: send task ended abnormally");
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let cli = Cli::parse();
    let gateway = Arc::new(GuideGateway::from_env());
    let mut widget = GuideWidget::mount(gateway);
    if cli.open {
        widget.open();
    }
    tracing::info!(open = cli.open, "tripguide started");
    draw(&mut widget);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight: Option<JoinHandle<()>> = None;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Command::Quit => break,
                    Command::Open => widget.open(),
                    Command::Close => widget.close(),
                    Command::Toggle => widget.toggle_visibility(),
                    Command::Say(text) => {
                        widget.update_draft(text);
                        if let Some(handle) = widget.submit_draft() {
                            in_flight = Some(handle);
                        }
                    }
                }
                draw(&mut widget);
            }
            () = join(&mut in_flight), if in_flight.is_some() => {
                in_flight = None;
                draw(&mut widget);
            }
        }
    }

    if in_flight.is_some() {
        join(&mut in_flight).await;
        draw(&mut widget);
    }
    Ok(())
}
