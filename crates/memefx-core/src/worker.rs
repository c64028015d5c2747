//! Background effect worker.
//!
//! A single named thread drains a job queue and runs effects one at a
//! time. Callers get a [`JobHandle`] per job and block on it, or poll it,
//! while their own thread stays free.

use crate::config::EffectsConfig;
use crate::effects::{process_bytes, process_file, Effect, EffectError};
use crossbeam::channel::{bounded, unbounded, Receiver, Sender, TryRecvError};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error(transparent)]
    Effect(#[from] EffectError),

    #[error("Effect job panicked: {0}")]
    Panicked(String),

    #[error("Effect worker is no longer running")]
    Disconnected,

    #[error("Failed to start effect worker: {0}")]
    Spawn(String),
}

/// Where a job reads its image from and where the result goes.
#[derive(Debug, Clone, PartialEq)]
pub enum JobInput {
    /// Encoded image bytes; the result comes back as JPEG bytes.
    Bytes(Vec<u8>),
    /// Read `input`, write the result to `output`.
    File { input: PathBuf, output: PathBuf },
}

#[derive(Debug, Clone, PartialEq)]
pub enum JobOutput {
    Bytes(Vec<u8>),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EffectJob {
    pub input: JobInput,
    pub effect: Effect,
}

impl EffectJob {
    pub fn bytes(bytes: Vec<u8>, effect: Effect) -> Self {
        Self {
            input: JobInput::Bytes(bytes),
            effect,
        }
    }

    pub fn file(input: impl Into<PathBuf>, output: impl Into<PathBuf>, effect: Effect) -> Self {
        Self {
            input: JobInput::File {
                input: input.into(),
                output: output.into(),
            },
            effect,
        }
    }
}

type JobResult = Result<JobOutput, WorkerError>;

struct Envelope {
    id: u64,
    job: EffectJob,
    reply: Sender<JobResult>,
}

/// Receiving end for one submitted job.
#[derive(Debug)]
pub struct JobHandle {
    id: u64,
    receiver: Receiver<JobResult>,
}

impl JobHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Block until the job finishes.
    pub fn wait(self) -> JobResult {
        self.receiver.recv().map_err(|_| WorkerError::Disconnected)?
    }

    /// Return the result if the job has finished, without blocking.
    pub fn try_result(&self) -> Option<JobResult> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(WorkerError::Disconnected)),
        }
    }
}

/// Owns the worker thread. Dropping it finishes queued jobs and joins.
pub struct EffectWorker {
    sender: Option<Sender<Envelope>>,
    thread: Option<JoinHandle<()>>,
    next_id: u64,
}

impl EffectWorker {
    pub fn spawn(config: EffectsConfig) -> Result<Self, WorkerError> {
        config.validate().map_err(EffectError::from)?;
        let config = Arc::new(config);
        let (sender, receiver) = unbounded::<Envelope>();

        let thread = thread::Builder::new()
            .name("memefx-worker".to_string())
            .spawn(move || {
                while let Ok(envelope) = receiver.recv() {
                    log::debug!("job[{}] {} started", envelope.id, envelope.job.effect);
                    let result = run_job(&envelope.job, &config);
                    if let Err(e) = &result {
                        log::warn!("job[{}] {} failed: {}", envelope.id, envelope.job.effect, e);
                    }
                    if envelope.reply.send(result).is_err() {
                        log::debug!("job[{}] handle dropped before completion", envelope.id);
                    }
                }
                log::info!("effect worker exit");
            })
            .map_err(|e| WorkerError::Spawn(e.to_string()))?;

        Ok(Self {
            sender: Some(sender),
            thread: Some(thread),
            next_id: 0,
        })
    }

    /// Queue a job. Jobs run strictly in submission order.
    pub fn submit(&mut self, job: EffectJob) -> Result<JobHandle, WorkerError> {
        let sender = self.sender.as_ref().ok_or(WorkerError::Disconnected)?;
        let (reply, receiver) = bounded(1);
        let id = self.next_id;
        self.next_id += 1;

        sender
            .send(Envelope { id, job, reply })
            .map_err(|_| WorkerError::Disconnected)?;
        Ok(JobHandle { id, receiver })
    }
}

impl Drop for EffectWorker {
    fn drop(&mut self) {
        self.sender.take();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::warn!("effect worker thread panicked");
            }
        }
    }
}

fn run_job(job: &EffectJob, config: &EffectsConfig) -> JobResult {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| match &job.input {
        JobInput::Bytes(bytes) => process_bytes(bytes, job.effect, config).map(JobOutput::Bytes),
        JobInput::File { input, output } => {
            process_file(input, output, job.effect, config).map(JobOutput::File)
        }
    }));

    match outcome {
        Ok(result) => result.map_err(WorkerError::from),
        Err(payload) => Err(WorkerError::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
