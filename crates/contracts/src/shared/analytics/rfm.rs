//! RFM (Recency, Frequency, Monetary) scoring and the segment catalog.

use crate::enums::Segment;
use serde::Serialize;

/// Score a raw value 1–5 against ascending quartile boundaries `[q1, q2, q3, q4]`.
///
/// The score is the position of the first boundary the value does not exceed
/// (5 when it exceeds all of them). With `reverse` the score is mirrored
/// (`6 - score`), for dimensions where smaller is better such as recency in days.
pub fn calculate_rfm_score(value: f64, quartiles: &[f64; 4], reverse: bool) -> u8 {
    let score = quartiles
        .iter()
        .position(|boundary| value <= *boundary)
        .map(|index| index as u8 + 1)
        .unwrap_or(5);

    if reverse {
        6 - score
    } else {
        score
    }
}

/// Scores of one customer on the three RFM axes, each 1–5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RfmScores {
    pub r: u8,
    pub f: u8,
    pub m: u8,
}

impl RfmScores {
    pub fn new(r: u8, f: u8, m: u8) -> Self {
        Self { r, f, m }
    }

    /// Classic concatenated code, e.g. `"545"`.
    pub fn code(&self) -> String {
        format!("{}{}{}", self.r, self.f, self.m)
    }
}

/// Inclusive score ranges a segment requires on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RfmCriteria {
    #[serde(rename = "R")]
    pub r: (u8, u8),
    #[serde(rename = "F")]
    pub f: (u8, u8),
    #[serde(rename = "M")]
    pub m: (u8, u8),
}

impl RfmCriteria {
    pub fn matches(&self, scores: RfmScores) -> bool {
        in_range(scores.r, self.r) && in_range(scores.f, self.f) && in_range(scores.m, self.m)
    }
}

fn in_range(score: u8, (lo, hi): (u8, u8)) -> bool {
    (lo..=hi).contains(&score)
}

/// Reference definition of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RfmSegmentDef {
    pub id: Segment,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub criteria: RfmCriteria,
}

/// The segment catalog, in classification priority order.
pub const RFM_SEGMENTS: [RfmSegmentDef; 11] = [
    RfmSegmentDef {
        id: Segment::Champions,
        name: "Champions",
        description: "Melhores clientes - compram frequentemente e recentemente",
        color: "#10b981",
        criteria: RfmCriteria { r: (4, 5), f: (4, 5), m: (4, 5) },
    },
    RfmSegmentDef {
        id: Segment::Loyal,
        name: "Loyal Customers",
        description: "Clientes fiéis - compram regularmente",
        color: "#2563eb",
        criteria: RfmCriteria { r: (2, 5), f: (3, 5), m: (3, 5) },
    },
    RfmSegmentDef {
        id: Segment::PotentialLoyalist,
        name: "Potential Loyalists",
        description: "Clientes recentes com potencial",
        color: "#06b6d4",
        criteria: RfmCriteria { r: (3, 5), f: (1, 3), m: (1, 3) },
    },
    RfmSegmentDef {
        id: Segment::RecentCustomers,
        name: "Recent Customers",
        description: "Compraram recentemente pela primeira vez",
        color: "#8b5cf6",
        criteria: RfmCriteria { r: (4, 5), f: (1, 1), m: (1, 1) },
    },
    RfmSegmentDef {
        id: Segment::Promising,
        name: "Promising",
        description: "Clientes recentes com bom valor",
        color: "#14b8a6",
        criteria: RfmCriteria { r: (3, 4), f: (1, 1), m: (2, 3) },
    },
    RfmSegmentDef {
        id: Segment::NeedAttention,
        name: "Need Attention",
        description: "Acima da média mas não compraram recentemente",
        color: "#f59e0b",
        criteria: RfmCriteria { r: (2, 3), f: (2, 3), m: (2, 3) },
    },
    RfmSegmentDef {
        id: Segment::AboutToSleep,
        name: "About to Sleep",
        description: "Abaixo da média, risco de perda",
        color: "#f97316",
        criteria: RfmCriteria { r: (2, 3), f: (1, 2), m: (1, 2) },
    },
    RfmSegmentDef {
        id: Segment::AtRisk,
        name: "At Risk",
        description: "Gastaram muito mas há muito tempo",
        color: "#ef4444",
        criteria: RfmCriteria { r: (1, 2), f: (2, 5), m: (2, 5) },
    },
    RfmSegmentDef {
        id: Segment::CantLose,
        name: "Can't Lose Them",
        description: "Eram os melhores, mas não compram há tempo",
        color: "#dc2626",
        criteria: RfmCriteria { r: (1, 1), f: (4, 5), m: (4, 5) },
    },
    RfmSegmentDef {
        id: Segment::Hibernating,
        name: "Hibernating",
        description: "Última compra há muito tempo, baixa frequência",
        color: "#9ca3af",
        criteria: RfmCriteria { r: (1, 2), f: (1, 2), m: (1, 2) },
    },
    RfmSegmentDef {
        id: Segment::Lost,
        name: "Lost",
        description: "Clientes perdidos",
        color: "#6b7280",
        criteria: RfmCriteria { r: (1, 1), f: (1, 1), m: (1, 1) },
    },
];

/// First catalog segment whose criteria contain `scores`.
///
/// The catalog ranges overlap, so order decides: a customer scoring 5/5/5 is a
/// Champion even though the Loyal ranges also contain it.
pub fn classify_rfm(scores: RfmScores) -> Option<&'static RfmSegmentDef> {
    RFM_SEGMENTS
        .iter()
        .find(|segment| segment.criteria.matches(scores))
}

pub fn segment_def(id: Segment) -> Option<&'static RfmSegmentDef> {
    RFM_SEGMENTS.iter().find(|segment| segment.id == id)
}
