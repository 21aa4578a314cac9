use clap::Parser;
use deckgen::client::{
    render_document, DocumentPrint, HttpDeckApi, Notifier, PresentationSession, SlideshowController,
    SlideshowFactory, SlideshowOptions,
};
use deckgen::logger;
use std::path::PathBuf;
use std::sync::Arc;

/// Generate a slide deck from a brief and save it as a reveal.js document.
#[derive(Parser, Debug)]
#[command(name = "deck", version, about)]
struct Args {
    /// Free-text description of the deck.
    brief: String,

    /// Base URL of a running deckgen server.
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server: String,

    /// Where to write the HTML document.
    #[arg(short, long, default_value = "deck.html")]
    output: PathBuf,

    /// Print the URL of the paginated print view after writing.
    #[arg(long)]
    pdf: bool,
}

struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// The document is written once at the end, so controllers only log.
struct LoggedSlideshow;

impl SlideshowController for LoggedSlideshow {
    fn destroy(&mut self) {}
}

impl SlideshowFactory for LoggedSlideshow {
    fn create(&self, markup: &str, options: &SlideshowOptions) -> Box<dyn SlideshowController> {
        log::debug!(
            "Slideshow {}x{} with {} bytes of markup",
            options.width,
            options.height,
            markup.len()
        );
        Box::new(LoggedSlideshow)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    logger::init_with_config(logger::LoggerConfig::new().with_env_level())?;

    let args = Args::parse();
    if args.brief.trim().is_empty() {
        return Err("brief must not be empty".into());
    }
    let location = format!(
        "file://{}",
        std::env::current_dir()?.join(&args.output).display()
    );

    let mut session = PresentationSession::new(
        Arc::new(HttpDeckApi::new(&args.server)),
        Arc::new(StderrNotifier),
        Arc::new(DocumentPrint::new(location)),
        Box::new(LoggedSlideshow),
    );
    session.set_brief(args.brief.clone());

    if !session.submit().await {
        return Err("deck generation failed".into());
    }

    let deck = session.deck();
    let document = render_document(deck, &args.brief)?;
    std::fs::write(&args.output, document)?;
    log::info!(
        "📝 Wrote {} slides ({} theme) to {}",
        deck.slides.len(),
        deck.theme,
        args.output.display()
    );

    if args.pdf {
        session.export_pdf();
    }
    Ok(())
}
