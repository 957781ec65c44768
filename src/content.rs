//! Static content for every section of the presentation.
//!
//! Nothing here is ever mutated; views borrow these constants directly.

use crate::models::{
    BusinessRule, DisputeTimeDatum, Kpi, MilestoneDetails, Section, TicketVolumeDatum, UserStory,
};
use crate::theme::{CHART_AUTOMATED, CHART_MANUAL};

pub const PRODUCT_NAME: &str = "GigFlow";

pub const CASE_STUDY_TITLE: &str = "Milestone Auto-Approval & Structured Rejection";

// ============================================================================
// Executive Summary
// ============================================================================

pub const SUMMARY_SECTIONS: &[Section] = &[
    Section {
        heading: "Problem",
        body: "Freelancers wait an average of 14 days for payment when a client goes quiet after a \
               milestone is submitted. Every stalled milestone eventually becomes a support ticket \
               that an admin resolves by hand, and rejections arrive as free text that nobody can \
               analyse.",
    },
    Section {
        heading: "Solution",
        body: "Start a 7-day auto-approval timer on submission, give clients one-click approval, \
               and require a standardized reason code before a rejection can be confirmed. Funds \
               held in escrow are released automatically when the timer expires.",
    },
    Section {
        heading: "Impact",
        body: "Average resolution time drops from 14 days to 2, monthly dispute tickets fall \
               from 450 to 80 over the pilot, and rejection data becomes structured enough to \
               report on.",
    },
];

pub const SUMMARY_KPIS: &[Kpi] = &[
    Kpi {
        value: "86%",
        label: "FASTER RESOLUTION",
    },
    Kpi {
        value: "82%",
        label: "FEWER TICKETS",
    },
    Kpi {
        value: "7 DAYS",
        label: "AUTO-RELEASE WINDOW",
    },
];

// ============================================================================
// Process Modelling
// ============================================================================

pub const DIAGRAM_CURRENT_STATE_ID: &str = "current-state";

pub const DIAGRAM_FUTURE_STATE_ID: &str = "future-state";

pub const DIAGRAM_CURRENT_STATE: &str = r#"
graph TD
    A[Freelancer Submits Milestone] -->|Email Notification| B(Client)
    B --> C{Client Actions?}
    C -->|No Action| D[Wait 14 Days]
    D --> E[Support Ticket Created]
    E --> F[Manual Admin Review]
    F --> G[Funds Released/Returned]
    C -->|Dispute| E
    C -->|Approve| H[Funds Released]

    style A fill:#f1f5f9,stroke:#64748b
    style F fill:#fee2e2,stroke:#ef4444,stroke-width:2px
    style D fill:#fee2e2,stroke:#ef4444
"#;

pub const DIAGRAM_FUTURE_STATE: &str = r#"
sequenceDiagram
    participant F as Freelancer
    participant S as System (GigFlow)
    participant C as Client

    F->>S: Submit Milestone
    S->>C: Notification (Push/Email)
    S->>S: Start 168hr Timer (7 Days)

    rect rgb(240, 253, 250)
    Note over S,C: Auto-Approval Workflow
    alt Client Approves
        C->>S: Click "Approve"
        S->>F: Release Funds Immediate
    else Client Rejects
        C->>S: Click "Reject" + Reason Code
        S->>F: Notify & Pause Timer
    else Timer Expires
        S->>F: Auto-Release Funds
        S->>C: Notification of Auto-Approval
    end
    end
"#;

// ============================================================================
// Data Analysis
// ============================================================================

pub const DISPUTE_TIME_DATA: &[DisputeTimeDatum] = &[
    DisputeTimeDatum {
        name: "Manual Process",
        days: 14,
        fill: CHART_MANUAL,
    },
    DisputeTimeDatum {
        name: "Automated Workflow",
        days: 2,
        fill: CHART_AUTOMATED,
    },
];

pub const TICKET_VOLUME_DATA: &[TicketVolumeDatum] = &[
    TicketVolumeDatum {
        month: "Jan",
        tickets: 450,
    },
    TicketVolumeDatum {
        month: "Feb",
        tickets: 420,
    },
    TicketVolumeDatum {
        month: "Mar",
        tickets: 380,
    },
    TicketVolumeDatum {
        month: "Apr",
        tickets: 200,
    },
    TicketVolumeDatum {
        month: "May",
        tickets: 120,
    },
    TicketVolumeDatum {
        month: "Jun",
        tickets: 80,
    },
];

pub const SQL_QUERY: &str = r#"
SELECT
  DATE_TRUNC('month', created_at) as month,
  AVG(EXTRACT(EPOCH FROM (resolved_at - created_at))/86400) as avg_resolution_days,
  COUNT(CASE WHEN resolution_type = 'auto' THEN 1 END) as auto_approvals
FROM disputes
WHERE created_at >= '2023-01-01'
GROUP BY 1
ORDER BY 1 DESC;
"#;

// ============================================================================
// Requirements
// ============================================================================

pub const BUSINESS_RULES: &[BusinessRule] = &[
    BusinessRule {
        id: "BR-01",
        rule: "Auto-Release Timer",
        description: "Funds must be automatically released to the freelancer 168 hours (7 days) \
                      after milestone submission if no action is taken by the client.",
    },
    BusinessRule {
        id: "BR-02",
        rule: "Mandatory Rejection Reason",
        description: "Clients cannot reject a milestone without selecting a standardized Reason \
                      Code from the provided list.",
    },
    BusinessRule {
        id: "BR-03",
        rule: "Dispute Escalation Window",
        description: "Manual dispute escalation is only available after a rejection has occurred \
                      and the freelancer contests the rejection.",
    },
];

pub const USER_STORIES: &[UserStory] = &[
    UserStory {
        id: "GF-1024",
        title: "Automated 7-Day Approval Timer",
        description: "As a Freelancer, I want my funds auto-released after 7 days so that I \
                      don\u{2019}t have to chase unresponsive clients.",
        points: 5,
        criteria: &[
            "System starts countdown upon submission",
            "Timer pauses if \"Reject\" is clicked",
            "Funds transfer triggered at T=0",
            "Email sent to both parties on execution",
        ],
    },
    UserStory {
        id: "GF-1025",
        title: "Rejection Reason Enforcement",
        description: "As a Product Manager, I want to capture structured data on rejections so \
                      we can analyze dispute trends.",
        points: 3,
        criteria: &[
            "Reject button opens modal/dropdown",
            "Submit disabled until reason selected",
            "Reason saved to transaction log",
        ],
    },
    UserStory {
        id: "GF-1026",
        title: "Client Action Dashboard Widget",
        description: "As a Client, I want a clear card showing pending approvals so I can act \
                      quickly.",
        points: 8,
        criteria: &[
            "Visual countdown timer visible",
            "One-click approval action",
            "Mobile responsive layout",
        ],
    },
];

// ============================================================================
// Prototype
// ============================================================================

pub const DEMO_MILESTONE: MilestoneDetails = MilestoneDetails {
    id: "#8821",
    title: "Website Redesign Phase 1",
    submitted_by: "Alex Dev",
    amount: "$1,500.00",
    transaction_id: "tx_992831",
};

pub const PROTOTYPE_INTRO: &str = "Interactive mock of the client-side approval card. Time runs \
                                   at 60x speed; nothing is persisted and no funds move.";

// ============================================================================
// Full Case Study
// ============================================================================

pub const CASE_STUDY_SECTIONS: &[Section] = &[
    Section {
        heading: "Background",
        body: "GigFlow holds client payments in escrow against contracted milestones. Release \
               depends on the client approving submitted work, and an unresponsive client leaves \
               the freelancer unpaid with no recourse except a support ticket.",
    },
    Section {
        heading: "Current State",
        body: "Submission sends an email and nothing else. After 14 days without action the \
               freelancer opens a ticket and an admin manually reviews the work before releasing \
               or returning funds. Disputes follow the same manual path.",
    },
    Section {
        heading: "Future State",
        body: "Submission starts a 168-hour timer. Approval releases funds immediately, a \
               rejection requires a reason code and notifies the freelancer, and timer expiry \
               releases funds automatically with a notification to both parties.",
    },
    Section {
        heading: "Open Questions",
        body: "The prototype keeps counting down while a rejection is being drafted and performs \
               no release at zero; both behaviours need product confirmation before build.",
    },
];

/// Total story points across the backlog
pub fn total_story_points() -> u32 {
    USER_STORIES.iter().map(|s| s.points).sum()
}

/// Percentage reduction between the first and last ticket volume months
pub fn ticket_reduction_percent() -> u64 {
    match (TICKET_VOLUME_DATA.first(), TICKET_VOLUME_DATA.last()) {
        (Some(first), Some(last)) if first.tickets > 0 => {
            (first.tickets.saturating_sub(last.tickets) * 100) / first.tickets
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_series_sizes() {
        assert_eq!(DISPUTE_TIME_DATA.len(), 2);
        assert_eq!(TICKET_VOLUME_DATA.len(), 6);
    }

    #[test]
    fn test_dispute_time_bars_carry_their_colour() {
        let manual = DISPUTE_TIME_DATA.iter().find(|d| d.name == "Manual Process").unwrap();
        let automated = DISPUTE_TIME_DATA
            .iter()
            .find(|d| d.name == "Automated Workflow")
            .unwrap();
        assert_eq!(manual.fill, CHART_MANUAL);
        assert_eq!(automated.fill, CHART_AUTOMATED);
    }

    #[test]
    fn test_total_story_points() {
        assert_eq!(total_story_points(), 16);
    }

    #[test]
    fn test_ticket_reduction_percent() {
        // 450 -> 80
        assert_eq!(ticket_reduction_percent(), 82);
    }

    #[test]
    fn test_business_rule_ids_unique() {
        let mut ids: Vec<_> = BUSINESS_RULES.iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), BUSINESS_RULES.len());
    }

    #[test]
    fn test_diagram_headers() {
        assert!(DIAGRAM_CURRENT_STATE.trim_start().starts_with("graph TD"));
        assert!(DIAGRAM_FUTURE_STATE
            .trim_start()
            .starts_with("sequenceDiagram"));
    }
}
