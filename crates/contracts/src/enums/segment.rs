use serde::{Deserialize, Serialize};

/// Customer segment filter.
///
/// `All` is the "no filter" value; every other variant names one of the RFM
/// segments in [`crate::shared::analytics::rfm::RFM_SEGMENTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    #[default]
    All,
    Champions,
    Loyal,
    PotentialLoyalist,
    RecentCustomers,
    Promising,
    NeedAttention,
    AboutToSleep,
    AtRisk,
    CantLose,
    Hibernating,
    Lost,
}

impl Segment {
    /// Code used in the state tree, fixtures and CSS class names.
    pub fn code(&self) -> &'static str {
        match self {
            Segment::All => "all",
            Segment::Champions => "champions",
            Segment::Loyal => "loyal",
            Segment::PotentialLoyalist => "potential_loyalist",
            Segment::RecentCustomers => "recent_customers",
            Segment::Promising => "promising",
            Segment::NeedAttention => "need_attention",
            Segment::AboutToSleep => "about_to_sleep",
            Segment::AtRisk => "at_risk",
            Segment::CantLose => "cant_lose",
            Segment::Hibernating => "hibernating",
            Segment::Lost => "lost",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Segment::All => "Todos",
            Segment::Champions => "Champions",
            Segment::Loyal => "Loyal Customers",
            Segment::PotentialLoyalist => "Potential Loyalists",
            Segment::RecentCustomers => "Recent Customers",
            Segment::Promising => "Promising",
            Segment::NeedAttention => "Need Attention",
            Segment::AboutToSleep => "About to Sleep",
            Segment::AtRisk => "At Risk",
            Segment::CantLose => "Can't Lose Them",
            Segment::Hibernating => "Hibernating",
            Segment::Lost => "Lost",
        }
    }

    /// All segments, `All` first, then catalog order.
    pub fn all() -> Vec<Segment> {
        vec![
            Segment::All,
            Segment::Champions,
            Segment::Loyal,
            Segment::PotentialLoyalist,
            Segment::RecentCustomers,
            Segment::Promising,
            Segment::NeedAttention,
            Segment::AboutToSleep,
            Segment::AtRisk,
            Segment::CantLose,
            Segment::Hibernating,
            Segment::Lost,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|segment| segment.code() == code)
    }

    /// CSS modifier, e.g. `potential-loyalist`.
    pub fn css_class(&self) -> String {
        self.code().replace('_', "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for segment in Segment::all() {
            assert_eq!(Segment::from_code(segment.code()), Some(segment));
        }
        assert_eq!(Segment::from_code("vip"), None);
    }

    #[test]
    fn serde_uses_codes() {
        let json = serde_json::to_string(&Segment::CantLose).unwrap();
        assert_eq!(json, "\"cant_lose\"");
        let back: Segment = serde_json::from_str("\"at_risk\"").unwrap();
        assert_eq!(back, Segment::AtRisk);
    }
}
