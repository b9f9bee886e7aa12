//! Pipeline orchestration: the fixed INGEST → PROFILE → SEGMENT →
//! CAMPAIGN → OUTPUT → DONE run for one client.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cdp_core::{AgentResult, ClientRecord, LogEntry, Stage};

use crate::composer::compose_html;
use crate::profiler::synthesize_profile;
use crate::segmenter::segment_client;
use crate::selector::select_campaign;

/// Sequences the pipeline stages for one client at a time.
///
/// Owns only the random source; the log buffer is a local of
/// [`Pipeline::execute`], so repeated or batched runs can never leak
/// entries into each other. Concurrent callers should construct one
/// `Pipeline` each.
pub struct Pipeline {
    rng: StdRng,
}

impl Pipeline {
    /// Pipeline with an OS-seeded random source.
    #[must_use]
    pub fn new() -> Self {
        Pipeline {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Pipeline with a fixed seed, for reproducible profile synthesis.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Pipeline {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Run all stages for one client, in fixed order.
    ///
    /// Appends exactly one log entry per stage; the PROFILE/SEGMENT/
    /// CAMPAIGN entries carry the computed artifact as a JSON payload.
    /// Every stage is a total function, so completion is all-or-nothing
    /// by construction.
    pub fn execute(&mut self, client: &ClientRecord) -> AgentResult {
        fn entry(stage: Stage, message: String, data: Option<serde_json::Value>) -> LogEntry {
            LogEntry {
                stage,
                timestamp: Utc::now(),
                message,
                data,
            }
        }

        let mut log: Vec<LogEntry> = Vec::with_capacity(Stage::SEQUENCE.len());

        tracing::debug!(client = %client.id, "pipeline run started");

        log.push(entry(
            Stage::Ingest,
            format!("Client loaded: {}", client.name),
            serde_json::to_value(client).ok(),
        ));

        let profile = synthesize_profile(client.network, &mut self.rng);
        log.push(entry(
            Stage::Profile,
            "Social profile synthesized".to_string(),
            serde_json::to_value(&profile).ok(),
        ));

        let segment = segment_client(client, &profile);
        tracing::debug!(client = %client.id, category = %segment.category, score = segment.score, "segmented");
        log.push(entry(
            Stage::Segment,
            format!("Segmentation complete: {}", segment.category),
            serde_json::to_value(&segment).ok(),
        ));

        let campaign = select_campaign(&segment);
        log.push(entry(
            Stage::Campaign,
            format!("Campaign selected: {}", campaign.template),
            serde_json::to_value(&campaign).ok(),
        ));

        let html = compose_html(client, &campaign, Utc::now());
        log.push(entry(
            Stage::Output,
            "HTML artifact generated".to_string(),
            None,
        ));

        log.push(entry(
            Stage::Done,
            format!("Run complete for {}", client.name),
            None,
        ));

        AgentResult {
            client: client.clone(),
            profile,
            segment,
            campaign,
            log,
            html,
        }
    }

    /// Run the pipeline for each client in submission order.
    ///
    /// Each client gets an independent result; there is no shared state
    /// between runs beyond the random source.
    pub fn execute_batch(&mut self, clients: &[ClientRecord]) -> Vec<AgentResult> {
        clients.iter().map(|c| self.execute(c)).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
