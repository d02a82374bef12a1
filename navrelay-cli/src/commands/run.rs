//! Replay a recorded notification feed through the relay pipeline
//!
//! The feed is JSON lines, one source post per line:
//!
//! ```text
//! {"package":"com.google.android.apps.maps","title":"200 ft","text":"Turn left onto Elm St","sub_text":"1 min · 200 ft"}
//! ```
//!
//! Posted notifications print as they arrive; the accumulated log prints
//! when the feed ends.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Args;
use tokio::sync::Mutex;
use tracing::debug;

use navrelay_core::{
    BroadcastRelayBus, CapturePipeline, DisplayService, Monitor, NotificationPoster,
    NotificationSource, Normalizer, RelayBus, RelayConfig, RelayNotification, SourceError,
    SourcePost, ToggleOutcome,
};

#[derive(Args)]
pub struct RunArgs {
    /// JSON-lines feed of source posts (stdin when omitted)
    #[arg(long)]
    pub feed: Option<PathBuf>,

    /// Config file (built-in defaults when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start without listener access, exercising the disabled path
    #[arg(long)]
    pub no_permission: bool,
}

/// Stand-in for the platform listener: the feed only flows while observing
#[derive(Default)]
struct FeedGate {
    observing: AtomicBool,
}

impl FeedGate {
    fn observing(&self) -> bool {
        self.observing.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationSource for FeedGate {
    async fn start(&self) -> Result<(), SourceError> {
        self.observing.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn stop(&self) -> Result<(), SourceError> {
        self.observing.store(false, Ordering::SeqCst);
        Ok(())
    }
}

/// Prints re-posted notifications to the terminal
struct TerminalPoster;

impl NotificationPoster for TerminalPoster {
    fn post(&self, notification: &RelayNotification) {
        println!("🔔 {}", notification.title);
        println!("   {}", notification.body);
    }
}

pub async fn run(args: RunArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => RelayConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RelayConfig::default(),
    };

    let bus = Arc::new(BroadcastRelayBus::new(config.channel_capacity));
    let rx = bus.subscribe();
    let bus_dyn: Arc<dyn RelayBus> = bus.clone();
    let pipeline = Arc::new(Mutex::new(CapturePipeline::new(
        &config.source_package,
        Normalizer::new(&config.initial_distance),
        bus_dyn,
    )));

    let source = Arc::new(FeedGate::default());
    let mut monitor = Monitor::new(source.clone(), !args.no_permission);

    let display = Arc::new(DisplayService::new(
        Arc::new(TerminalPoster),
        config.notification.clone(),
    ));
    let display_task = {
        let display = display.clone();
        tokio::spawn(async move { display.run(rx).await })
    };

    if monitor.toggle().await? == ToggleOutcome::PermissionRequired {
        println!("🔐 Listener access is not granted. Enable notification access and retry.");
        return Ok(());
    }

    let posts = read_feed(args.feed.as_deref())?;
    debug!("Replaying {} posts", posts.len());
    for post in posts {
        if !source.observing() {
            continue;
        }
        pipeline.lock().await.on_posted(post);
    }

    monitor.toggle().await?;

    // Drop every bus handle so the display service drains and exits
    drop(pipeline);
    drop(bus);
    let _ = display_task.await;

    println!("\n--- log ---");
    print!("{}", display.log_snapshot().await);
    Ok(())
}

fn read_feed(path: Option<&Path>) -> Result<Vec<SourcePost>> {
    let reader: Box<dyn BufRead> = match path {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening feed {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut posts = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let post: SourcePost =
            serde_json::from_str(&line).with_context(|| format!("parsing feed line: {line}"))?;
        posts.push(post);
    }
    Ok(posts)
}
