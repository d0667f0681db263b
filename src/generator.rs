use crate::error::GenerationError;
use crate::session::{render, PromptRequest};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Turns a request into prompt text. A real text-generation backend would
/// plug in here.
pub trait Generator {
    fn generate(&self, request: &PromptRequest) -> Result<String, GenerationError>;
}

/// Waits for `delay`, then fills in the template. Never fails.
#[derive(Debug, Clone)]
pub struct SimulatedGenerator {
    pub delay: Duration,
}

impl SimulatedGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Generator for SimulatedGenerator {
    fn generate(&self, request: &PromptRequest) -> Result<String, GenerationError> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(render(request.expertise, request.style, &request.input))
    }
}

type GenerationResult = Result<String, GenerationError>;

/// Runs one request at a time on a background thread so the UI loop can
/// keep drawing while the session is `Generating`.
pub struct GenerationWorker {
    generator: Arc<dyn Generator + Send + Sync>,
    pending: Option<Receiver<GenerationResult>>,
}

impl GenerationWorker {
    pub fn new(generator: Arc<dyn Generator + Send + Sync>) -> Self {
        Self {
            generator,
            pending: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn spawn(&mut self, request: PromptRequest) -> Result<(), GenerationError> {
        let (tx, rx) = mpsc::channel();
        let generator = Arc::clone(&self.generator);

        thread::Builder::new()
            .name("generation".to_string())
            .spawn(move || {
                let result = generator.generate(&request);
                // receiver gone means the app is shutting down
                let _ = tx.send(result);
            })
            .map_err(|e| GenerationError::Backend(format!("could not start worker: {}", e)))?;

        self.pending = Some(rx);
        Ok(())
    }

    /// Non-blocking. Yields the result once, then goes back to idle. A
    /// worker that died without sending reports `WorkerLost`.
    pub fn poll(&mut self) -> Option<GenerationResult> {
        let rx = self.pending.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(GenerationError::WorkerLost),
        };
        self.pending = None;
        Some(result)
    }
}
