use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::BatchMonitor;

pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
    monitor: BatchMonitor,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: BatchMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting QR batch...");
        self.monitor.log_stats("Start");

        // Extract
        let records = self.pipeline.extract().await?;
        tracing::info!("Read {} contact rows", records.len());
        self.monitor.log_stats("Extract");

        // Transform
        let result = self.pipeline.transform(records).await?;
        tracing::info!("Prepared {} QR payloads", result.jobs.len());
        self.monitor.log_stats("Transform");

        // Load
        let job_count = result.jobs.len();
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Wrote {} QR codes to: {}", job_count, output_path);
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Record, RenderJob, TransformResult};
    use crate::utils::error::StaffQrError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingPipeline {
        loaded: AtomicUsize,
        fail_extract: bool,
    }

    #[async_trait::async_trait]
    impl Pipeline for CountingPipeline {
        async fn extract(&self) -> Result<Vec<Record>> {
            if self.fail_extract {
                return Err(StaffQrError::ProcessingError {
                    message: "boom".to_string(),
                });
            }
            Ok(vec![Record::default(), Record::default()])
        }

        async fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
            let jobs = data
                .iter()
                .map(|_| RenderJob {
                    pen: String::new(),
                    file_name: " - .png".to_string(),
                    payload: String::new(),
                })
                .collect();
            Ok(TransformResult { jobs })
        }

        async fn load(&self, result: TransformResult) -> Result<String> {
            self.loaded.store(result.jobs.len(), Ordering::SeqCst);
            Ok("out".to_string())
        }
    }

    #[tokio::test]
    async fn test_run_passes_every_phase() {
        let engine = BatchEngine::new(CountingPipeline {
            loaded: AtomicUsize::new(0),
            fail_extract: false,
        });

        assert_eq!(engine.run().await.unwrap(), "out");
        assert_eq!(engine.pipeline.loaded.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_run_stops_on_first_error() {
        let engine = BatchEngine::new(CountingPipeline {
            loaded: AtomicUsize::new(0),
            fail_extract: true,
        });

        assert!(engine.run().await.is_err());
        assert_eq!(engine.pipeline.loaded.load(Ordering::SeqCst), 0);
    }
}
