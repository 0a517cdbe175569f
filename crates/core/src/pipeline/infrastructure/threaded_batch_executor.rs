use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};

use crate::pipeline::batch_executor::{BatchExecutor, BatchReport, JobFailure, JobFn, JobReport};
use crate::pipeline::batch_logger::BatchLogger;

/// Runs jobs on a fixed pool of worker threads fed from a shared queue.
///
/// Layout: `queue → N workers → coordinator [logger, report]`
///
/// Each worker pulls one path at a time until the queue is drained. Outcomes
/// flow back to the calling thread, which alone touches the logger. The run
/// returns once every worker has been joined.
pub struct ThreadedBatchExecutor {
    workers: usize,
}

impl ThreadedBatchExecutor {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// One worker per available processing unit.
    pub fn with_available_parallelism() -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::new(workers)
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Default for ThreadedBatchExecutor {
    fn default() -> Self {
        Self::with_available_parallelism()
    }
}

impl BatchExecutor for ThreadedBatchExecutor {
    fn run(
        &self,
        inputs: &[PathBuf],
        job: &JobFn<'_>,
        logger: &mut dyn BatchLogger,
    ) -> BatchReport {
        let total = inputs.len();
        let workers = self.workers.min(total).max(1);
        logger.started(total, workers);

        let (job_tx, job_rx) = crossbeam_channel::unbounded::<PathBuf>();
        for input in inputs {
            if job_tx.send(input.clone()).is_err() {
                break;
            }
        }
        drop(job_tx);

        let (report_tx, report_rx) = crossbeam_channel::unbounded::<JobReport>();
        let mut report = BatchReport::default();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    let job_rx = job_rx.clone();
                    let report_tx = report_tx.clone();
                    scope.spawn(move || run_worker(job_rx, report_tx, job))
                })
                .collect();
            drop(report_tx);

            for (completed, job_report) in report_rx.iter().enumerate() {
                logger.job_finished(&job_report, completed + 1, total);
                report.record(job_report);
            }

            for handle in handles {
                if handle.join().is_err() {
                    log::error!("Worker thread panicked");
                }
            }
        });

        logger.summary();
        report
    }
}

fn run_worker(job_rx: Receiver<PathBuf>, report_tx: Sender<JobReport>, job: &JobFn<'_>) {
    for input in job_rx {
        let start = Instant::now();
        let result = match panic::catch_unwind(AssertUnwindSafe(|| job(&input))) {
            Ok(outcome) => outcome.map_err(JobFailure::from),
            Err(payload) => Err(JobFailure::Panicked(panic_message(payload.as_ref()))),
        };
        let job_report = JobReport {
            input,
            result,
            duration_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        if report_tx.send(job_report).is_err() {
            break;
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
