//! The six analytical modules and their generic theory content.

use levermap_core::ModuleId;

/// Glyph identity for a module, fixed per module.
///
/// A closed set so a module can never reference an unknown glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleIcon {
    /// Attention marker, for problem framing.
    AlertCircle,
    /// Node graph, for the metric map.
    Network,
    /// Signpost, for path selection.
    Route,
    /// Cylinder, for the analysis library.
    Database,
    /// Prompt, for tool translation.
    Terminal,
    /// Launch, for decision and impact.
    Rocket,
}

impl ModuleIcon {
    /// Terminal glyph for this icon.
    pub fn glyph(self) -> &'static str {
        match self {
            ModuleIcon::AlertCircle => "[!]",
            ModuleIcon::Network => "[#]",
            ModuleIcon::Route => "[>]",
            ModuleIcon::Database => "[=]",
            ModuleIcon::Terminal => "[$]",
            ModuleIcon::Rocket => "[^]",
        }
    }
}

/// Generic theory content for one module, fixed regardless of the active
/// context.
#[derive(Debug, Clone, Copy)]
pub struct ModuleDefinition {
    /// Which module this is.
    pub id: ModuleId,
    /// Display title.
    pub title: &'static str,
    /// Display glyph.
    pub icon: ModuleIcon,
    /// One-line statement of what the module is for.
    pub purpose: &'static str,
    /// The concrete steps a learner works through.
    pub what_you_do: &'static [&'static str],
    /// Typical inputs consumed at this stage.
    pub inputs: &'static [&'static str],
    /// Typical outputs produced at this stage.
    pub outputs: &'static [&'static str],
    /// A generic worked example.
    pub example: &'static str,
    /// Label for the navigation step that follows this module.
    pub next_step_label: &'static str,
}

/// All six module definitions, in learning order.
pub fn modules() -> &'static [ModuleDefinition] {
    &MODULES
}

/// The definition for one module. Infallible: the table is total.
pub fn module(id: ModuleId) -> &'static ModuleDefinition {
    &MODULES[id.index()]
}

static MODULES: [ModuleDefinition; ModuleId::COUNT] = [
    ModuleDefinition {
        id: ModuleId::ProblemFraming,
        title: "Real Business Problem",
        icon: ModuleIcon::AlertCircle,
        purpose: "Translate 'vague stress' into a specific, testable business question.",
        what_you_do: &[
            "Write down the primary complaint (e.g., 'Sales are low').",
            "Identify the timeframe of the change (e.g., 'Since last Tuesday').",
            "Define the scope - is it one SKU, one channel, or store-wide?",
            "Draft a hypothesis (e.g., 'I think the new Meta creative is attracting the wrong audience').",
            "Estimate the daily revenue loss to determine priority level.",
        ],
        inputs: &["Slack alerts", "Daily trade reports", "Ad manager status changes"],
        outputs: &["Testable Hypothesis", "Priority Score Card"],
        example: "'ROAS is down' becomes 'Did the price increase on SKU-A lead to a significant drop in Checkout-to-Purchase conversion?'",
        next_step_label: "Go to Metric Map",
    },
    ModuleDefinition {
        id: ModuleId::MetricMap,
        title: "Metric Map",
        icon: ModuleIcon::Network,
        purpose: "Understand the mathematical relationship between metrics to find the lever.",
        what_you_do: &[
            "Start with GMV and break it into: Traffic x Conversion x AOV.",
            "Identify which of those three 'trunk' metrics shifted most.",
            "Drill into 'Traffic' (CPC, CPM, CTR) vs 'Conversion' (ATC, Checkout).",
            "Label metrics as 'Levers' (CPC) or 'Outcomes' (ROAS).",
            "Check for lead-lag effects (e.g., high CPM today = low GMV next week).",
        ],
        inputs: &["Google Analytics 4", "Shopify Analytics", "Advertising Dashboards"],
        outputs: &["Metric Hierarchy Map", "Baseline Performance Index"],
        example: "If AOV is flat and Conversion is stable, but ROAS is down, the issue MUST be Traffic Cost (CPC/CPM).",
        next_step_label: "Go to Path Selector",
    },
    ModuleDefinition {
        id: ModuleId::PathSelector,
        title: "Analysis Path Selector",
        icon: ModuleIcon::Route,
        purpose: "Choose the right thinking scaffold to solve the specific business problem.",
        what_you_do: &[
            "Determine if the issue is a Funnel leak, a Cohort shift, or an Experiment failure.",
            "Map the business problem to specific technical steps (SQL/Spreadsheets).",
            "Identify the 'Decision Memo' format needed for stakeholders.",
            "Set statistical confidence thresholds before looking at data.",
            "Isolate the primary comparison: Control group vs. Test group.",
        ],
        inputs: &["Business Problem", "Metric Map findings"],
        outputs: &["Ranked Analysis Path", "Selected Thinking Framework"],
        example: "A drop in ROI requires a 'Funnel Efficiency' scaffold rather than an 'LTV Cohort' scaffold.",
        next_step_label: "Go to Analysis Library",
    },
    ModuleDefinition {
        id: ModuleId::AnalysisLibrary,
        title: "Analysis Library",
        icon: ModuleIcon::Database,
        purpose: "Technical execution: calculating the numbers to see the truth.",
        what_you_do: &[
            "Clean raw data by removing duplicates or internal test orders.",
            "Calculate 'Post-Click' vs 'View-Through' attribution weights.",
            "Plot the conversion funnel - look for the 'leak' (e.g., 80% drop at shipping info).",
            "Segment results by Device (Mobile vs Desktop) and New vs Returning.",
            "Apply a 'Confidence Interval' check to ensure findings aren't random noise.",
        ],
        inputs: &["Raw CSV exports", "SQL database access", "BI tools"],
        outputs: &["Cleaned Data Set", "Visual Charts & Pivot Tables"],
        example: "Segmenting CVR by browser reveals that Safari users are failing at checkout due to a tech bug.",
        next_step_label: "Go to Tool Translation",
    },
    ModuleDefinition {
        id: ModuleId::ToolTranslation,
        title: "Tool Translation",
        icon: ModuleIcon::Terminal,
        purpose: "Map the logic to specific software workflows for ongoing monitoring.",
        what_you_do: &[
            "Write the SQL query to pull this data automatically next time.",
            "Create an Excel template with the specific formulas (VLOOKUP/Pivot).",
            "Set up an automated alert in Slack/Email for metric thresholds.",
            "Build a Looker/Tableau dashboard for executive visibility.",
            "Document the 'Data Dictionary' so the team knows what each column means.",
        ],
        inputs: &["Validated Analysis logic"],
        outputs: &["SQL Code Snippets", "Dashboard Templates", "Automated Alerts"],
        example: "A complex cohort calculation in the Analysis Library is turned into a `SELECT DATE_TRUNC` query for a weekly auto-report.",
        next_step_label: "Go to Decision & Impact",
    },
    ModuleDefinition {
        id: ModuleId::DecisionImpact,
        title: "Decision & Impact",
        icon: ModuleIcon::Rocket,
        purpose: "Communicate findings and trigger a specific business action.",
        what_you_do: &[
            "Write the 'TL;DR' summary - what happened and why it matters.",
            "Propose the 'Stop / Start / Continue' actions.",
            "Quantify the expected ROI of the recommendation.",
            "Prepare the 'Communication Memo' for stakeholders.",
            "Schedule the follow-up review to see if the action worked.",
        ],
        inputs: &["Charts from the Analysis Library", "Context from the framed problem"],
        outputs: &["Decision Memo", "Stakeholder Email", "Budget Reallocation Plan"],
        example: "Instead of saying 'Ads are bad', say 'Cutting $5k from Audience A and moving it to Audience B will likely increase ROI by 0.5x based on the last 14 days.'",
        next_step_label: "Complete Journey",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_in_learning_order() {
        for (index, def) in modules().iter().enumerate() {
            assert_eq!(def.id.index(), index);
            assert_eq!(module(def.id).title, def.title);
        }
    }

    #[test]
    fn every_module_has_substance() {
        for def in modules() {
            assert!(!def.title.is_empty());
            assert!(!def.purpose.is_empty());
            assert!(!def.what_you_do.is_empty());
            assert!(!def.inputs.is_empty());
            assert!(!def.outputs.is_empty());
            assert!(!def.example.is_empty());
            assert!(!def.next_step_label.is_empty());
        }
    }
}
