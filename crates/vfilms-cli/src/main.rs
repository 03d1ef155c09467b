use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::watch;
use vfilms_core::config::ConfigLoader;
use vfilms_core::counter::LoopExit;
use vfilms_core::{
    ContactField, ContactFormSubmitter, CounterFrame, FrameLoop, NewsletterSignup, ServiceCatalog,
    SiteConfig, SubmissionStatus, SystemClock,
};

mod render;

#[derive(Parser, Debug)]
#[clap(
    name = "vfilms",
    author,
    version = "0.1.0",
    about = "V Films site components from the terminal"
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(
        long,
        short,
        help = "Path to a YAML site configuration (defaults are used when omitted)"
    )]
    config: Option<String>,

    #[clap(long, short, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate and send the contact form
    Contact {
        #[clap(long, default_value = "")]
        name: String,
        #[clap(long, default_value = "")]
        email: String,
        #[clap(long, default_value = "")]
        phone: String,
        #[clap(long, default_value = "")]
        message: String,
    },
    /// Play the stats counters
    Stats {
        #[clap(long, help = "Override the configured frame interval in milliseconds")]
        frame_ms: Option<u64>,
    },
    /// Check an address the way the footer newsletter box does
    Newsletter { email: String },
    /// List the services with a detail page
    Services,
    /// Show one service detail page
    Service { slug: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    let config = match &cli.config {
        Some(path) => ConfigLoader::from_file(path).await?,
        None => ConfigLoader::from_env()?,
    };

    match cli.command {
        Commands::Contact {
            name,
            email,
            phone,
            message,
        } => run_contact(&config, [name, email, phone, message]).await,
        Commands::Stats { frame_ms } => run_stats(&config, frame_ms).await,
        Commands::Newsletter { email } => run_newsletter(&config, &email),
        Commands::Services => {
            let catalog = ServiceCatalog;
            for entry in catalog.all() {
                println!("{}", render::service_line(entry));
            }
            Ok(())
        }
        Commands::Service { slug } => match ServiceCatalog.find(&slug) {
            Some(entry) => {
                println!("{}", render::service_detail(entry));
                Ok(())
            }
            None => anyhow::bail!("Service Not Found: {}", slug),
        },
    }
}

async fn run_contact(config: &SiteConfig, values: [String; 4]) -> Result<()> {
    let mut form = ContactFormSubmitter::from_config(&config.contact)?;
    let fields = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];
    for (field, value) in fields.into_iter().zip(values.iter()) {
        form.edit(field, value);
    }

    log::info!("sending contact form to {}", config.contact.endpoint);
    if let Err(e) = form.submit().await {
        log::debug!("submit finished with {}", e);
    }

    println!("{}", render::form_report(form.state(), form.notification()));
    if form.state().status != SubmissionStatus::Succeeded {
        anyhow::bail!("contact form was not sent ({})", form.state().status);
    }
    Ok(())
}

async fn run_stats(config: &SiteConfig, frame_ms: Option<u64>) -> Result<()> {
    let interval = frame_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.stats.frame_interval());
    let frame_loop = FrameLoop::new(SystemClock::new(), interval);
    let mut animator = config.stats.animator();
    let labels = render::counter_labels(&config.stats.counters);

    let token = frame_loop.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });

    let (tx, mut rx) = watch::channel(CounterFrame::default());
    let painter = tokio::spawn(async move {
        let mut stdout = io::stdout();
        while rx.changed().await.is_ok() {
            let line = render::counter_line(&rx.borrow_and_update(), &labels);
            let _ = write!(stdout, "\r{}", line);
            let _ = stdout.flush();
        }
        let _ = writeln!(stdout);
    });

    animator.on_visible(frame_loop.now_ms());
    let exit = frame_loop.run(&mut animator, &tx).await;
    drop(tx);
    painter.await?;

    match exit {
        LoopExit::Completed => Ok(()),
        LoopExit::Cancelled => {
            log::info!("stats animation cancelled");
            Ok(())
        }
        LoopExit::NotStarted => anyhow::bail!("stats animation never started"),
    }
}

fn run_newsletter(config: &SiteConfig, email: &str) -> Result<()> {
    let mut signup = NewsletterSignup::new(SystemClock::new(), config.newsletter.message_ttl_ms);
    signup.edit(email);
    let accepted = signup.subscribe();

    if let Some(message) = signup.message() {
        println!("{}", render::notification_line(message));
    }
    if !accepted {
        anyhow::bail!("newsletter address rejected");
    }
    Ok(())
}
