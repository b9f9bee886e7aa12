use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::campaign::{Campaign, TemplateId};
use crate::client::{ClientRecord, RiskTier, SocialNetwork};
use crate::csv::{escape_field, split_fields};
use crate::profile::SocialProfile;
use crate::segment::{Segment, SegmentCategory};

/// Pipeline stage tag. Every run traverses all six, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    Ingest,
    Profile,
    Segment,
    Campaign,
    Output,
    Done,
}

impl Stage {
    /// The fixed, total stage order of one pipeline run.
    pub const SEQUENCE: [Stage; 6] = [
        Stage::Ingest,
        Stage::Profile,
        Stage::Segment,
        Stage::Campaign,
        Stage::Output,
        Stage::Done,
    ];
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Ingest => write!(f, "INGEST"),
            Stage::Profile => write!(f, "PROFILE"),
            Stage::Segment => write!(f, "SEGMENT"),
            Stage::Campaign => write!(f, "CAMPAIGN"),
            Stage::Output => write!(f, "OUTPUT"),
            Stage::Done => write!(f, "DONE"),
        }
    }
}

/// One timestamped entry in a run's log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub stage: Stage,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    /// Structured artifact for the PROFILE/SEGMENT/CAMPAIGN stages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Aggregate outcome of one pipeline run for one client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResult {
    pub client: ClientRecord,
    pub profile: SocialProfile,
    pub segment: Segment,
    pub campaign: Campaign,
    pub log: Vec<LogEntry>,
    pub html: String,
}

impl AgentResult {
    /// Stage tags of the log, in order.
    #[must_use]
    pub fn stages(&self) -> Vec<Stage> {
        self.log.iter().map(|e| e.stage).collect()
    }
}

/// Flat tabular projection of an [`AgentResult`] for CSV-style export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub id: String,
    pub name: String,
    pub sector: String,
    pub spend: f64,
    pub risk: RiskTier,
    pub network: SocialNetwork,
    pub category: SegmentCategory,
    pub score: u8,
    pub template: TemplateId,
    pub title: String,
    pub cta: String,
}

impl ResultRow {
    /// Column header matching [`ResultRow::to_csv_line`].
    pub const HEADER: &'static str =
        "id,name,sector,spend,risk,network,segment,score,template,title,cta";

    /// Render the row as one CSV line, quoting embedded commas.
    #[must_use]
    pub fn to_csv_line(&self) -> String {
        [
            escape_field(&self.id),
            escape_field(&self.name),
            escape_field(&self.sector),
            self.spend.to_string(),
            self.risk.to_string(),
            self.network.to_string(),
            self.category.to_string(),
            self.score.to_string(),
            self.template.to_string(),
            escape_field(&self.title),
            escape_field(&self.cta),
        ]
        .join(",")
    }

    /// Parse a line produced by [`ResultRow::to_csv_line`].
    ///
    /// Returns `None` if the line does not have exactly eleven fields or
    /// the numeric fields do not parse.
    #[must_use]
    pub fn parse_csv_line(line: &str) -> Option<Self> {
        let fields = split_fields(line);
        if fields.len() != 11 {
            return None;
        }
        Some(ResultRow {
            id: fields[0].clone(),
            name: fields[1].clone(),
            sector: fields[2].clone(),
            spend: fields[3].parse().ok()?,
            risk: RiskTier::normalize(&fields[4]),
            network: SocialNetwork::normalize(&fields[5]),
            category: SegmentCategory::normalize(&fields[6]),
            score: fields[7].parse().ok()?,
            template: TemplateId::normalize(&fields[8]),
            title: fields[9].clone(),
            cta: fields[10].clone(),
        })
    }
}

impl From<&AgentResult> for ResultRow {
    fn from(result: &AgentResult) -> Self {
        ResultRow {
            id: result.client.id.clone(),
            name: result.client.name.clone(),
            sector: result.client.sector.clone(),
            spend: result.client.avg_spend,
            risk: result.client.risk,
            network: result.client.network,
            category: result.segment.category,
            score: result.segment.score,
            template: result.campaign.template,
            title: result.campaign.title.clone(),
            cta: result.campaign.cta.clone(),
        }
    }
}
