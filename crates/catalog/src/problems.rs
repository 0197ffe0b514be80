//! The business-problem scenarios and their per-module blueprints.

use levermap_core::{ModuleId, ProblemId};

/// Glyph identity for a problem scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemIcon {
    /// Falling line, for the ROI drop.
    TrendingDown,
    /// Cursor click, for the conversion drop.
    MousePointerClick,
    /// New user, for acquisition cost.
    UserPlus,
    /// Basket, for order value.
    ShoppingBag,
    /// Returning user, for retention.
    UserCheck,
    /// Percent sign, for promotions.
    Percent,
}

impl ProblemIcon {
    /// Terminal glyph for this icon.
    pub fn glyph(self) -> &'static str {
        match self {
            ProblemIcon::TrendingDown => "[\\]",
            ProblemIcon::MousePointerClick => "[.]",
            ProblemIcon::UserPlus => "[+]",
            ProblemIcon::ShoppingBag => "[o]",
            ProblemIcon::UserCheck => "[u]",
            ProblemIcon::Percent => "[%]",
        }
    }
}

/// Problem-specific guidance override for one module.
#[derive(Debug, Clone, Copy)]
pub struct Blueprint {
    /// Tailored headline for the module under this problem.
    pub title: &'static str,
    /// How to think about the module for this problem.
    pub advice: &'static str,
    /// The concrete next action to take.
    pub action: &'static str,
}

/// A selectable business-problem scenario.
///
/// Every problem carries a blueprint for every module; a gap in that table
/// is a catalog defect caught by [`crate::validate`], not a runtime state.
#[derive(Debug, Clone, Copy)]
pub struct ProblemDefinition {
    /// Which problem this is.
    pub id: ProblemId,
    /// Short display label.
    pub label: &'static str,
    /// Display glyph.
    pub icon: ProblemIcon,
    /// One-line description of the pain.
    pub description: &'static str,
    /// The modules this problem leans on hardest.
    pub suggested_modules: &'static [ModuleId],
    /// Metrics worth watching while working this problem.
    pub metrics_to_watch: &'static [&'static str],
    /// Tailored guidance per module.
    pub blueprints: &'static [(ModuleId, Blueprint)],
}

impl ProblemDefinition {
    /// The blueprint for one module, if the table carries it.
    pub fn blueprint(&self, module: ModuleId) -> Option<&'static Blueprint> {
        self.blueprints
            .iter()
            .find(|(id, _)| *id == module)
            .map(|(_, blueprint)| blueprint)
    }

    /// Whether this problem highlights the given module on the map.
    pub fn highlights(&self, module: ModuleId) -> bool {
        self.suggested_modules.contains(&module)
    }
}

/// All problem definitions, in canonical order.
pub fn problems() -> &'static [ProblemDefinition] {
    &PROBLEMS
}

/// The definition for one problem. Infallible: the table is total.
pub fn problem(id: ProblemId) -> &'static ProblemDefinition {
    match id {
        ProblemId::RoiDropped => &PROBLEMS[0],
        ProblemId::CvrDropped => &PROBLEMS[1],
        ProblemId::CacHigh => &PROBLEMS[2],
        ProblemId::AovLow => &PROBLEMS[3],
        ProblemId::RetentionLow => &PROBLEMS[4],
        ProblemId::PromoUnclear => &PROBLEMS[5],
    }
}

static PROBLEMS: [ProblemDefinition; 6] = [
    ProblemDefinition {
        id: ProblemId::RoiDropped,
        label: "ROI dropped",
        icon: ProblemIcon::TrendingDown,
        description: "Your return on spend is suddenly below target.",
        suggested_modules: &[
            ModuleId::ProblemFraming,
            ModuleId::MetricMap,
            ModuleId::AnalysisLibrary,
        ],
        metrics_to_watch: &["ROAS", "CPC", "CR", "CPM"],
        blueprints: &[
            (ModuleId::ProblemFraming, Blueprint {
                title: "Framing the Drop",
                advice: "Isolate exactly which creative group or campaign started the decline. Don't assume it's store-wide.",
                action: "Draft a hypothesis: 'Recent CPM spikes in Top-of-Funnel are outstripping stable CVR.'",
            }),
            (ModuleId::MetricMap, Blueprint {
                title: "Mapping the Lever",
                advice: "Prioritize CPC and CPM. If these are up while CVR is flat, your ads are simply too expensive.",
                action: "Compare last 7 days vs baseline for CPC by Campaign.",
            }),
            (ModuleId::PathSelector, Blueprint {
                title: "Selecting the Path",
                advice: "Choose the 'Ad Spend Efficiency' path. This focuses on marginal returns per ad set.",
                action: "Set a 95% confidence threshold for your creative test.",
            }),
            (ModuleId::AnalysisLibrary, Blueprint {
                title: "Library Execution",
                advice: "Run a 'CPM vs ROAS' correlation chart to see which audiences are saturating.",
                action: "Calculate 1st-day ROAS per creative.",
            }),
            (ModuleId::ToolTranslation, Blueprint {
                title: "Tool Setup",
                advice: "Build a 'Creative Fatigue' alert in Slack that triggers when CPC > $2.50.",
                action: "Write a JOIN query connecting UTMs to Shopify Orders.",
            }),
            (ModuleId::DecisionImpact, Blueprint {
                title: "Decision Making",
                advice: "Stop spend on campaigns with ROAS < 1.5x immediately. Reallocate to high-CTR legacy winners.",
                action: "Draft 'Urgent Ad Shift' memo for the CEO.",
            }),
        ],
    },
    ProblemDefinition {
        id: ProblemId::CvrDropped,
        label: "Conversion Rate dropped",
        icon: ProblemIcon::MousePointerClick,
        description: "CVR is down despite steady traffic.",
        suggested_modules: &[
            ModuleId::MetricMap,
            ModuleId::AnalysisLibrary,
            ModuleId::ToolTranslation,
        ],
        metrics_to_watch: &["CR", "ATC Rate", "Checkout Start Rate"],
        blueprints: &[
            (ModuleId::ProblemFraming, Blueprint {
                title: "Technical Frame",
                advice: "Check for site speed or tech bugs first. This is rarely a creative issue if traffic is the same.",
                action: "Hypothesize: 'New checkout update broke Mobile Safari.'",
            }),
            (ModuleId::MetricMap, Blueprint {
                title: "Funnel Mapping",
                advice: "Drill into ATC (Add to Cart) and IC (Initiate Checkout). Where does the line break?",
                action: "Analyze ATC-to-Checkout conversion ratio.",
            }),
            (ModuleId::PathSelector, Blueprint {
                title: "Choosing the Framework",
                advice: "Use the 'Friction Funnel' framework. This isolates technical drop-offs from intent.",
                action: "Identify the high-drop funnel step.",
            }),
            (ModuleId::AnalysisLibrary, Blueprint {
                title: "Deep Dive",
                advice: "Segment your conversion funnel by Device and Browser. Look for outliers.",
                action: "Run a segment analysis: Chrome vs Safari.",
            }),
            (ModuleId::ToolTranslation, Blueprint {
                title: "Automation",
                advice: "Set up a GTM trigger to track 'Error messages' seen by users at checkout.",
                action: "Create a 'Friction Dashboard' in GA4.",
            }),
            (ModuleId::DecisionImpact, Blueprint {
                title: "The Solution",
                advice: "Brief the developers on the specific browser/device combo failing. Revert last code push.",
                action: "Write a bug report with impact quantified in lost GMV.",
            }),
        ],
    },
    ProblemDefinition {
        id: ProblemId::CacHigh,
        label: "CAC too high",
        icon: ProblemIcon::UserPlus,
        description: "Acquisition cost is exceeding first-purchase margin.",
        suggested_modules: &[ModuleId::AnalysisLibrary, ModuleId::DecisionImpact],
        metrics_to_watch: &["CAC", "CPM", "CTR", "1st Purchase Margin"],
        blueprints: &[
            (ModuleId::ProblemFraming, Blueprint {
                title: "Margin Frame",
                advice: "Frame this as a 'Unit Economics' problem. How much can we actually afford to pay?",
                action: "Calculate 'Break-even CAC' based on COGS.",
            }),
            (ModuleId::MetricMap, Blueprint {
                title: "LTV Context",
                advice: "Look at Day-60 LTV. A high CAC might be fine if repeat rate is high.",
                action: "Map CAC to LTV for current cohorts.",
            }),
            (ModuleId::PathSelector, Blueprint {
                title: "Strategy Path",
                advice: "Select the 'Profitability Ceiling' scaffold to find your absolute spend limits.",
                action: "Establish a max-bid strategy.",
            }),
            (ModuleId::AnalysisLibrary, Blueprint {
                title: "Margin Analysis",
                advice: "Deduct COGS and Ad Spend from GMV to see true Contribution Margin.",
                action: "Build a pivot table for Contribution Margin per Channel.",
            }),
            (ModuleId::ToolTranslation, Blueprint {
                title: "Systemization",
                advice: "Connect your Shopify COGS data to your Ad Manager via an API tool like TripleWhale.",
                action: "Automate 'Net Profit' reporting.",
            }),
            (ModuleId::DecisionImpact, Blueprint {
                title: "Executive Memo",
                advice: "Recommend lowering daily caps on Meta until blended CAC drops below target.",
                action: "Quantify how much spend must be cut to reach profitability.",
            }),
        ],
    },
    ProblemDefinition {
        id: ProblemId::AovLow,
        label: "AOV too low",
        icon: ProblemIcon::ShoppingBag,
        description: "Basket sizes are shrinking.",
        suggested_modules: &[ModuleId::MetricMap, ModuleId::AnalysisLibrary],
        metrics_to_watch: &["AOV", "UPT", "Discount Rate"],
        blueprints: &[
            (ModuleId::ProblemFraming, Blueprint {
                title: "Basket Framing",
                advice: "Is it a price drop, or are people just buying fewer items per order?",
                action: "Compare Units Per Transaction (UPT) year-over-year.",
            }),
            (ModuleId::MetricMap, Blueprint {
                title: "Bundling Logic",
                advice: "Map which products are usually bought alone. These are your bundle targets.",
                action: "Identify 'Solo-Purchased' SKUs.",
            }),
            (ModuleId::PathSelector, Blueprint {
                title: "Growth Path",
                advice: "Use the 'Basket Affinity' framework to identify cross-sell opportunities.",
                action: "Map product pairings.",
            }),
            (ModuleId::AnalysisLibrary, Blueprint {
                title: "Data Mining",
                advice: "Perform a 'Market Basket Analysis' to find SKUs that correlate strongly with each other.",
                action: "Calculate SKU correlation coefficients.",
            }),
            (ModuleId::ToolTranslation, Blueprint {
                title: "Technical Trigger",
                advice: "Implement a 'Frequently Bought Together' widget based on the correlations found.",
                action: "Export bundle lists for the site team.",
            }),
            (ModuleId::DecisionImpact, Blueprint {
                title: "Strategic Proposal",
                advice: "Propose a 'Free Shipping at $X' threshold to push users to add one more item.",
                action: "Calculate the ideal shipping threshold to maximize margin.",
            }),
        ],
    },
    ProblemDefinition {
        id: ProblemId::RetentionLow,
        label: "Retention low",
        icon: ProblemIcon::UserCheck,
        description: "One-and-done customers are becoming the norm.",
        suggested_modules: &[
            ModuleId::AnalysisLibrary,
            ModuleId::ToolTranslation,
            ModuleId::DecisionImpact,
        ],
        metrics_to_watch: &["Retention Rate", "CLV", "Repeat Ratio"],
        blueprints: &[
            (ModuleId::ProblemFraming, Blueprint {
                title: "Quality Frame",
                advice: "Is the problem the product or the acquisition source? Discount-hunters don't return.",
                action: "Hypothesize: 'Black Friday discount-seekers are low-LTV.'",
            }),
            (ModuleId::MetricMap, Blueprint {
                title: "Cohort Mapping",
                advice: "Map repeat purchase rate by acquisition month. Are newer cohorts worse than older ones?",
                action: "Visualize 2nd-order time lag.",
            }),
            (ModuleId::PathSelector, Blueprint {
                title: "LTV Framework",
                advice: "Select the 'Cohort Decay' framework to identify the exact drop-off month.",
                action: "Determine the 'churn' window.",
            }),
            (ModuleId::AnalysisLibrary, Blueprint {
                title: "Cohort Analysis",
                advice: "Compare repeat rates between 'Discount' customers and 'Full Price' customers.",
                action: "Calculate LTV by Discount Code.",
            }),
            (ModuleId::ToolTranslation, Blueprint {
                title: "CRM Setup",
                advice: "Build an automated Klaviyo segment for customers who haven't returned after 45 days.",
                action: "Automate 'Win-back' triggers.",
            }),
            (ModuleId::DecisionImpact, Blueprint {
                title: "Strategic Move",
                advice: "Move 20% of acquisition budget to retention ads targeting high-intent lapsed users.",
                action: "Draft a 'Retention-First' growth plan.",
            }),
        ],
    },
    ProblemDefinition {
        id: ProblemId::PromoUnclear,
        label: "Big promo results unclear",
        icon: ProblemIcon::Percent,
        description: "A major sale ended, but it's hard to tell if it actually drove incremental profit.",
        suggested_modules: &[
            ModuleId::ProblemFraming,
            ModuleId::AnalysisLibrary,
            ModuleId::DecisionImpact,
        ],
        metrics_to_watch: &["GMV", "Contribution Margin", "Discount Rate", "Incremental Lift"],
        blueprints: &[
            (ModuleId::ProblemFraming, Blueprint {
                title: "Incrementality Frame",
                advice: "The core question isn't 'how much did we sell', but 'how much more did we sell vs a normal week'.",
                action: "Identify the 14-day 'Control Period' before the promo started.",
            }),
            (ModuleId::MetricMap, Blueprint {
                title: "Margin Sensitivity",
                advice: "Map the discount depth to the volume increase. Did a 20% discount drive >25% volume lift?",
                action: "Calculate 'Break-even Volume Lift' required for the discount.",
            }),
            (ModuleId::PathSelector, Blueprint {
                title: "Pre-Post Path",
                advice: "Choose the 'Pre-Post Incrementality' scaffold. This compares time-series behavior.",
                action: "Establish a baseline daily GMV average.",
            }),
            (ModuleId::AnalysisLibrary, Blueprint {
                title: "Halo Execution",
                advice: "Analyze 'Halo Effects': did the promo on SKU-A lead to full-price sales of SKU-B?",
                action: "Calculate 'Attached Revenue' for promo items.",
            }),
            (ModuleId::ToolTranslation, Blueprint {
                title: "Promo Dashboard",
                advice: "Build a real-time 'Discount vs Margin' tracker in Looker for future sales.",
                action: "Automate daily Contribution Margin reporting during sale events.",
            }),
            (ModuleId::DecisionImpact, Blueprint {
                title: "Post-Mortem",
                advice: "Decide if the 'Customer Acquisition' quality was worth the 'Margin Compression'.",
                action: "Draft a 'Promo ROI Summary' recommending 15% vs 20% depth for the next event.",
            }),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_table_order() {
        for def in problems() {
            assert_eq!(problem(def.id).label, def.label);
        }
    }

    #[test]
    fn every_problem_covers_every_module() {
        for def in problems() {
            for module in ModuleId::ALL {
                let blueprint = def.blueprint(module);
                assert!(
                    blueprint.is_some(),
                    "{} is missing a blueprint for module {}",
                    def.id,
                    module
                );
            }
        }
    }

    #[test]
    fn suggested_modules_are_a_strict_subset() {
        for def in problems() {
            assert!(!def.suggested_modules.is_empty());
            assert!(def.suggested_modules.len() < ModuleId::COUNT);
        }
    }

    #[test]
    fn blueprint_lookup_reports_gaps() {
        let partial = ProblemDefinition {
            id: ProblemId::RoiDropped,
            label: "partial",
            icon: ProblemIcon::TrendingDown,
            description: "authoring mistake",
            suggested_modules: &[ModuleId::ProblemFraming],
            metrics_to_watch: &["ROAS"],
            blueprints: &[(
                ModuleId::ProblemFraming,
                Blueprint { title: "t", advice: "a", action: "c" },
            )],
        };

        assert!(partial.blueprint(ModuleId::ProblemFraming).is_some());
        assert!(partial.blueprint(ModuleId::MetricMap).is_none());
    }

    #[test]
    fn highlights_follows_the_suggestion_list() {
        let roi = problem(levermap_core::ProblemId::RoiDropped);
        assert!(roi.highlights(ModuleId::ProblemFraming));
        assert!(!roi.highlights(ModuleId::ToolTranslation));
    }
}
