use crate::core::compose::{attach_logo, decode_logo, encode_png};
use crate::core::input::load_records;
use crate::core::qr::generate_qr;
use crate::core::vcard::{build_vcard, lookup_link, output_file_name};
use crate::core::{ConfigProvider, Pipeline, Record, RenderJob, Storage, TransformResult};
use crate::domain::model::{ContactRecord, PayloadMode};
use crate::utils::error::Result;
use image::DynamicImage;
use std::path::Path;

pub struct BadgePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> BadgePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn build_job(&self, record: &Record) -> RenderJob {
        let contact = ContactRecord::from_record(record);
        let payload = match self.config.payload_mode() {
            PayloadMode::VCard => build_vcard(&contact, self.config.phone_prefix()).to_text(),
            PayloadMode::Link => lookup_link(self.config.base_url(), contact.pen_or_empty()),
        };

        RenderJob {
            pen: contact.pen_or_empty().to_string(),
            file_name: output_file_name(&contact),
            payload,
        }
    }

    /// 每張 QR 都重新讀取 logo，檔案不存在時回傳 None
    async fn load_logo(&self) -> Result<Option<DynamicImage>> {
        let logo_path = self.config.logo_path();
        if !self.storage.exists(logo_path).await {
            tracing::warn!("Logo not found at {}, saving QR without logo.", logo_path);
            return Ok(None);
        }

        let data = self.storage.read_file(logo_path).await?;
        let logo = decode_logo(&data)?;
        tracing::debug!("Loaded logo {} ({}x{})", logo_path, logo.width(), logo.height());
        Ok(Some(logo))
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BadgePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        load_records(&self.storage, self.config.input_path()).await
    }

    async fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
        let jobs = data
            .iter()
            .map(|record| {
                let job = self.build_job(record);
                tracing::debug!("Payload for {}:\n{}", job.pen, job.payload);
                job
            })
            .collect();

        Ok(TransformResult { jobs })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_dir = self.config.output_path();
        let settings = self.config.render_settings();
        self.storage.create_dir(output_dir).await?;

        for job in &result.jobs {
            let qr = generate_qr(&job.payload, settings)?;
            let logo = self.load_logo().await?;
            let image = match &logo {
                Some(logo) => attach_logo(&qr, logo, settings),
                None => qr,
            };
            let png = encode_png(&image)?;

            let file_path = Path::new(output_dir).join(&job.file_name);
            let file_path = file_path.to_string_lossy();
            self.storage.write_file(&file_path, &png).await?;
            tracing::info!("QR code saved as {}", file_path);
        }

        Ok(output_dir.to_string())
    }
}
