//! Worked case-study walkthroughs.

/// A complete worked analysis, from raw symptom to stakeholder email.
#[derive(Debug, Clone, Copy)]
pub struct CaseStudy {
    /// Stable identifier.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Functional area the case sits in.
    pub category: &'static str,
    /// The situation as first reported.
    pub context: &'static str,
    /// Candidate explanations, most likely first.
    pub hypothesis_tree: &'static [&'static str],
    /// Data sources needed to test the hypotheses.
    pub required_data: &'static [&'static str],
    /// The analysis, step by step.
    pub analysis_steps: &'static [&'static str],
    /// The resulting recommendation.
    pub recommendation: &'static str,
    /// The email that carried the recommendation.
    pub email_template: &'static str,
}

/// All case studies.
pub fn cases() -> &'static [CaseStudy] {
    &CASES
}

/// Look up a case study by id.
pub fn case(id: &str) -> Option<&'static CaseStudy> {
    CASES.iter().find(|c| c.id == id)
}

static CASES: [CaseStudy; 2] = [
    CaseStudy {
        id: "case-a",
        title: "ROI Decline After Creative Refresh",
        category: "Media Buying",
        context: "A brand updated its hero videos on Meta. Spend increased, but ROAS dropped from 3.2x to 2.1x overnight.",
        hypothesis_tree: &[
            "New creative is attracting lower-quality traffic (High CTR, low CVR)",
            "Technical tracking issue with new UTM parameters",
            "Landing page mismatch with new video 'hook'",
        ],
        required_data: &["Meta Ad Manager", "Shopify Orders", "GA4 Sessions"],
        analysis_steps: &[
            "Isolate 'New' vs 'Old' creative performance in a side-by-side table",
            "Calculate Post-Click CVR for each creative group",
            "Compare Checkout-Start to Purchase ratio for the new traffic source",
        ],
        recommendation: "Revert 60% of spend to top-performing legacy creatives while testing a new 'hybrid' hook that better matches the landing page value prop.",
        email_template: "Subject: Urgent Update: Ad Creative Performance Anomaly\n\nHi Team,\n\nI've analyzed the ROAS drop following Monday's creative launch. While the new videos have a 25% higher CTR, the Purchase CVR is 40% lower than our baseline.\n\nProposed Action: Revert spend to Legacy V3 video for 48 hours to stabilize revenue while we adjust the landing page for the new creative series.\n\nBest, [Name]",
    },
    CaseStudy {
        id: "case-b",
        title: "Repeat Purchase Paradox",
        category: "Operations",
        context: "Monthly active customers are growing, but the % of repeat customers has dropped from 35% to 22% over 6 months.",
        hypothesis_tree: &[
            "New customer quality is lower due to aggressive promo acquisition",
            "Post-purchase email flow broke or has high unsubscribe rates",
            "Product quality/shipping issues causing one-time-buy frustration",
        ],
        required_data: &["Customer Lifetime CSV", "Klaviyo Rates", "Support ticket volume"],
        analysis_steps: &[
            "Run a 30/60/90 day Cohort Retention analysis",
            "Calculate Second-Order Time Lag by month of acquisition",
            "Filter retention by 'Discount Code Used' vs 'Full Price'",
        ],
        recommendation: "Shift budget from broad-market 'New Acquisition' to a 'Second-Order Upsell' campaign targeting month-3 customers with non-discounted bundles.",
        email_template: "Subject: Strategic Shift: Optimizing Customer Retention\n\nHi Team,\n\nOur data shows our recent growth is driven by 'low-loyalty' discount seekers who aren't returning. Our 90-day retention has dropped significantly.\n\nStrategy: Implement a Month-2 product education sequence to increase perceived value before the next purchase window. Target: Increase repeat rate back to 30% by Q4.\n\nBest, [Name]",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        assert_eq!(case("case-a").unwrap().category, "Media Buying");
        assert_eq!(case("case-b").unwrap().category, "Operations");
        assert!(case("case-z").is_none());
    }

    #[test]
    fn every_case_walks_the_full_arc() {
        for case in cases() {
            assert!(!case.hypothesis_tree.is_empty());
            assert!(!case.required_data.is_empty());
            assert!(!case.analysis_steps.is_empty());
            assert!(!case.recommendation.is_empty());
            assert!(case.email_template.starts_with("Subject:"));
        }
    }
}
