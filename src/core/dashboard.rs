//! SaaS metrics dashboard the assistant can explain and report on.
//!
//! The data set is fixed sample data; the only mutable state is which
//! metric the assistant last explained.

use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MetricId {
    Mrr,
    ActiveUsers,
    ChurnRate,
    ConversionRate,
    AvgTicketTime,
    Nps,
}

impl MetricId {
    pub const ALL: [Self; 6] = [
        Self::Mrr,
        Self::ActiveUsers,
        Self::ChurnRate,
        Self::ConversionRate,
        Self::AvgTicketTime,
        Self::Nps,
    ];

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn valid_names() -> String {
        Self::ALL.map(Self::name).join(", ")
    }

    pub fn explanation(self) -> &'static MetricExplanation {
        let index = Self::ALL.iter().position(|&id| id == self).unwrap_or_default();
        &EXPLANATIONS[index]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    pub value: f64,
    pub change: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub mrr: Metric,
    pub active_users: Metric,
    pub churn_rate: Metric,
    pub conversion_rate: Metric,
    pub avg_ticket_time: Metric,
    pub nps: Metric,
}

impl Metrics {
    pub fn get(&self, id: MetricId) -> Metric {
        match id {
            MetricId::Mrr => self.mrr,
            MetricId::ActiveUsers => self.active_users,
            MetricId::ChurnRate => self.churn_rate,
            MetricId::ConversionRate => self.conversion_rate,
            MetricId::AvgTicketTime => self.avg_ticket_time,
            MetricId::Nps => self.nps,
        }
    }
}

pub const METRICS: Metrics = Metrics {
    mrr: Metric { value: 62000.0, change: 6.9, trend: Trend::Up },
    active_users: Metric { value: 8420.0, change: 12.3, trend: Trend::Up },
    churn_rate: Metric { value: 2.8, change: 0.4, trend: Trend::Down },
    conversion_rate: Metric { value: 3.2, change: -0.3, trend: Trend::Down },
    avg_ticket_time: Metric { value: 4.2, change: -1.1, trend: Trend::Up },
    nps: Metric { value: 72.0, change: 5.0, trend: Trend::Up },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevenuePoint {
    pub month: &'static str,
    pub revenue: u32,
    pub target: u32,
}

pub const REVENUE: [RevenuePoint; 6] = [
    RevenuePoint { month: "Aug", revenue: 42000, target: 40000 },
    RevenuePoint { month: "Sep", revenue: 48000, target: 45000 },
    RevenuePoint { month: "Oct", revenue: 51000, target: 50000 },
    RevenuePoint { month: "Nov", revenue: 47000, target: 52000 },
    RevenuePoint { month: "Dec", revenue: 58000, target: 55000 },
    RevenuePoint { month: "Jan", revenue: 62000, target: 58000 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityPoint {
    pub day: &'static str,
    pub active: u32,
    pub new: u32,
}

pub const USER_ACTIVITY: [ActivityPoint; 7] = [
    ActivityPoint { day: "Mon", active: 1240, new: 89 },
    ActivityPoint { day: "Tue", active: 1180, new: 72 },
    ActivityPoint { day: "Wed", active: 1350, new: 95 },
    ActivityPoint { day: "Thu", active: 1420, new: 118 },
    ActivityPoint { day: "Fri", active: 1280, new: 86 },
    ActivityPoint { day: "Sat", active: 890, new: 45 },
    ActivityPoint { day: "Sun", active: 760, new: 38 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub name: &'static str,
    pub value: u32,
}

pub const CUSTOMER_SEGMENTS: [Segment; 3] = [
    Segment { name: "Enterprise", value: 35 },
    Segment { name: "SMB", value: 45 },
    Segment { name: "Startup", value: 20 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChurnReason {
    pub reason: &'static str,
    pub count: u32,
}

pub const CHURN_BY_REASON: [ChurnReason; 5] = [
    ChurnReason { reason: "Price", count: 23 },
    ChurnReason { reason: "Features", count: 18 },
    ChurnReason { reason: "Support", count: 12 },
    ChurnReason { reason: "Competitor", count: 15 },
    ChurnReason { reason: "Other", count: 8 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyKind {
    Warning,
    Info,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Anomaly {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: AnomalyKind,
    pub message: &'static str,
    pub time: &'static str,
}

pub const RECENT_ANOMALIES: [Anomaly; 3] = [
    Anomaly {
        id: 1,
        kind: AnomalyKind::Warning,
        message: "Signup rate dropped 23% yesterday",
        time: "2 hours ago",
    },
    Anomaly {
        id: 2,
        kind: AnomalyKind::Info,
        message: "Enterprise segment grew 15% this week",
        time: "5 hours ago",
    },
    Anomaly {
        id: 3,
        kind: AnomalyKind::Alert,
        message: "Support tickets up 34% from last week",
        time: "1 day ago",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricExplanation {
    pub title: &'static str,
    pub explanation: &'static str,
    pub suggestions: [&'static str; 3],
}

/// In `MetricId::ALL` order.
const EXPLANATIONS: [MetricExplanation; 6] = [
    MetricExplanation {
        title: "Monthly Recurring Revenue (MRR)",
        explanation: "Your predictable monthly revenue from subscriptions. Currently at $62,000, up 6.9% from last month. You exceeded your target of $58,000.",
        suggestions: [
            "View revenue by plan tier",
            "See expansion revenue breakdown",
            "Compare to industry benchmarks",
        ],
    },
    MetricExplanation {
        title: "Active Users",
        explanation: "8,420 users were active in the last 30 days. This is up 12.3% and represents strong engagement. Thursday had the highest activity.",
        suggestions: [
            "View user activity by feature",
            "See cohort retention",
            "Identify power users",
        ],
    },
    MetricExplanation {
        title: "Churn Rate",
        explanation: "Currently at 2.8%, down 0.4% (good news!). Main reasons: Price (30%), Missing features (24%), Competitor switch (20%).",
        suggestions: [
            "View churned accounts",
            "See churn by segment",
            "Analyze exit surveys",
        ],
    },
    MetricExplanation {
        title: "Conversion Rate",
        explanation: "Trial-to-paid conversion is at 3.2%, down 0.3% from last month. The pricing page has a 45% drop-off rate.",
        suggestions: [
            "View conversion funnel",
            "Compare by traffic source",
            "See A/B test results",
        ],
    },
    MetricExplanation {
        title: "Average Support Response Time",
        explanation: "Currently at 4.2 hours, improved by 1.1 hours! This correlates with the improved NPS score.",
        suggestions: [
            "View tickets by category",
            "See agent performance",
            "Check SLA compliance",
        ],
    },
    MetricExplanation {
        title: "Net Promoter Score (NPS)",
        explanation: "NPS is 72, up 5 points. Promoters (9-10): 58%, Passives (7-8): 28%, Detractors (0-6): 14%.",
        suggestions: [
            "Read recent feedback",
            "View NPS by segment",
            "See trend over time",
        ],
    },
];

/// Severity of an assistant-detected anomaly; anything unrecognised reads as medium.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    pub fn parse_lenient(raw: &str) -> Self {
        raw.trim().parse().unwrap_or_default()
    }
}

pub const REPORT_HEADING: &str = "Weekly Performance Summary";

pub const REPORT_WINS: [&str; 3] = [
    "Revenue hit $62K (+6.9% vs target)",
    "Active users grew 12.3% to 8,420",
    "Support response time improved by 1.1 hours",
];

pub const REPORT_CONCERNS: [&str; 2] = [
    "Conversion rate dropped 0.3%",
    "Support ticket volume up 34%",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    selected_metric: Option<MetricId>,
}

impl DashboardState {
    pub fn selected_metric(&self) -> Option<MetricId> {
        self.selected_metric
    }

    pub fn select(&mut self, metric: MetricId) {
        self.selected_metric = Some(metric);
    }

    /// Everything the dashboard shows, as one serialisable snapshot.
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            metrics: METRICS,
            revenue_data: &REVENUE,
            user_activity_data: &USER_ACTIVITY,
            customer_segments: &CUSTOMER_SEGMENTS,
            churn_by_reason: &CHURN_BY_REASON,
            recent_anomalies: &RECENT_ANOMALIES,
            selected_metric: self.selected_metric,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub metrics: Metrics,
    pub revenue_data: &'static [RevenuePoint],
    pub user_activity_data: &'static [ActivityPoint],
    pub customer_segments: &'static [Segment],
    pub churn_by_reason: &'static [ChurnReason],
    pub recent_anomalies: &'static [Anomaly],
    pub selected_metric: Option<MetricId>,
}
