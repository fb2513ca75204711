//! One-request analysis lifecycle
//!
//! Extraction, prompting, and parsing are synchronous CPU-bound steps; the
//! model call is the only await point. Persistence is best-effort: a failed
//! append is logged and never turns a completed analysis into a failure.

use crate::error::{OptiScoreError, Result};
use crate::input::{DocumentUpload, InputManager};
use crate::llm::client::ModelClient;
use crate::llm::parser::{parse_response, AnalysisResult};
use crate::llm::prompts::{AnalysisRequest, PromptTemplates};
use crate::records::store::{AnalysisRecord, RecordStore};
use log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Idle,
    Extracting,
    Prompting,
    AwaitingModel,
    Parsing,
    Recording,
}

/// Per-session request state, passed explicitly into each invocation. The
/// `processing` flag guards against re-entrant submission; it is cleared on
/// every exit path, success or failure.
#[derive(Debug)]
pub struct SessionState {
    processing: bool,
    stage: PipelineStage,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            processing: false,
            stage: PipelineStage::Idle,
        }
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    fn enter(&mut self, stage: PipelineStage) {
        debug!("Pipeline stage: {:?} -> {:?}", self.stage, stage);
        self.stage = stage;
    }

    fn finish(&mut self) {
        self.processing = false;
        self.stage = PipelineStage::Idle;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AnalysisPipeline<C: ModelClient> {
    input: InputManager,
    prompts: PromptTemplates,
    client: C,
    store: RecordStore,
}

impl<C: ModelClient> AnalysisPipeline<C> {
    pub fn new(client: C, store: RecordStore) -> Self {
        Self {
            input: InputManager::new(),
            prompts: PromptTemplates::default(),
            client,
            store,
        }
    }

    /// Runs one full analysis. Rejects the submission outright when the
    /// session already has a request in flight.
    pub async fn run(
        &self,
        session: &mut SessionState,
        upload: &DocumentUpload,
        job_description: &str,
    ) -> Result<AnalysisResult> {
        if session.processing {
            return Err(OptiScoreError::InvalidInput(
                "An analysis is already in progress for this session".to_string(),
            ));
        }
        session.processing = true;

        let outcome = self.run_stages(session, upload, job_description).await;
        session.finish();
        outcome
    }

    async fn run_stages(
        &self,
        session: &mut SessionState,
        upload: &DocumentUpload,
        job_description: &str,
    ) -> Result<AnalysisResult> {
        session.enter(PipelineStage::Extracting);
        let resume_text = self.input.extract_text(upload)?;

        session.enter(PipelineStage::Prompting);
        let request = AnalysisRequest::new(resume_text, job_description)?;
        let prompt = self.prompts.render_analysis(&request);

        session.enter(PipelineStage::AwaitingModel);
        let raw = self.client.generate(&prompt).await?;

        session.enter(PipelineStage::Parsing);
        let result = parse_response(&raw)?;

        session.enter(PipelineStage::Recording);
        let record = AnalysisRecord::from_analysis(&upload.file_name, &result);
        if let Err(e) = self.store.append(&record) {
            warn!(
                "Failed to persist analysis record to {}: {}",
                self.store.path().display(),
                e
            );
        }

        Ok(result)
    }
}
