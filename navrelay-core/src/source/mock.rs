//! Mock notification source for testing
//!
//! Records start/stop calls and delivers scripted posts to the capture
//! pipeline only while observing, mirroring the platform listener's
//! behavior closely enough for monitor and pipeline tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::capture::CapturePipeline;
use super::traits::NotificationSource;
use super::types::SourcePost;
use crate::error::SourceError;

/// A recorded call on the source hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceCall {
    Start,
    Stop,
}

/// Mock implementation of NotificationSource for testing
pub struct MockSource {
    pipeline: Arc<Mutex<CapturePipeline>>,
    observing: AtomicBool,
    calls: std::sync::Mutex<Vec<SourceCall>>,
    fail_next_start: AtomicBool,
}

impl MockSource {
    /// Create a mock source delivering into the given pipeline
    pub fn new(pipeline: Arc<Mutex<CapturePipeline>>) -> Self {
        Self {
            pipeline,
            observing: AtomicBool::new(false),
            calls: std::sync::Mutex::new(Vec::new()),
            fail_next_start: AtomicBool::new(false),
        }
    }

    /// Whether the source is currently observing
    pub fn observing(&self) -> bool {
        self.observing.load(Ordering::SeqCst)
    }

    /// Calls recorded so far
    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Make the next start() call fail
    pub fn fail_next_start(&self) {
        self.fail_next_start.store(true, Ordering::SeqCst);
    }

    /// Deliver a post as the platform would; dropped unless observing.
    ///
    /// Returns whether the post reached the pipeline.
    pub async fn post(&self, post: SourcePost) -> bool {
        if !self.observing() {
            return false;
        }
        self.pipeline.lock().await.on_posted(post);
        true
    }
}

#[async_trait]
impl NotificationSource for MockSource {
    async fn start(&self) -> Result<(), SourceError> {
        self.calls.lock().unwrap().push(SourceCall::Start);
        if self.fail_next_start.swap(false, Ordering::SeqCst) {
            return Err(SourceError::StartFailed("scripted failure".to_string()));
        }
        self.observing.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn stop(&self) -> Result<(), SourceError> {
        self.calls.lock().unwrap().push(SourceCall::Stop);
        self.observing.store(false, Ordering::SeqCst);
        Ok(())
    }
}
