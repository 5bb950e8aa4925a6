use std::{
    panic::{self, AssertUnwindSafe},
    thread,
};

use flume::{Receiver, Sender};
use tracing::{debug, warn};

use crate::error::{Result, SortError};

type Job = Box<dyn FnOnce() + Send + 'static>;

struct Worker {
    id: usize,
    thread: Option<thread::JoinHandle<()>>,
}

/// Fixed set of worker threads pulling jobs from a shared queue.
pub struct ThreadPool {
    workers: Vec<Worker>,
    sender: Option<Sender<Job>>,
}

impl ThreadPool {
    pub fn new(n: usize) -> Result<ThreadPool> {
        if n == 0 {
            return Err(SortError::Config("a thread pool needs at least one worker".into()));
        }
        let mut workers = Vec::with_capacity(n);
        let (sender, receiver) = flume::unbounded();
        for id in 0..n {
            workers.push(Worker::new(id, receiver.clone())?);
        }
        debug!("started thread pool with {n} workers");

        Ok(ThreadPool {
            workers,
            sender: Some(sender),
        })
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    pub fn execute<F: FnOnce() + Send + 'static>(&self, f: F) -> Result<()> {
        let job: Job = Box::new(f);
        self.sender
            .as_ref()
            .ok_or(SortError::WorkerLost)?
            .send(job)
            .map_err(|_| SortError::WorkerLost)
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        // Closing the queue lets every worker fall out of its loop
        drop(self.sender.take());
        for worker in &mut self.workers {
            if let Some(thread) = worker.thread.take() {
                if thread.join().is_err() {
                    warn!("sort worker {} did not shut down cleanly", worker.id);
                }
            }
        }
    }
}

impl Worker {
    fn new(id: usize, receiver: Receiver<Job>) -> Result<Worker> {
        let thread = thread::Builder::new()
            .name(format!("sort-worker-{id}"))
            .spawn(move || {
                while let Ok(job) = receiver.recv() {
                    // A panicking job must not take the worker down with it,
                    // otherwise queued jobs would never run
                    if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
                        warn!("job panicked on sort worker {id}");
                    }
                }
                debug!("sort worker {id} stopped");
            })
            .map_err(SortError::Spawn)?;
        Ok(Worker {
            id,
            thread: Some(thread),
        })
    }
}
