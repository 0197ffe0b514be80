//! Metric and jargon glossary.

/// Term/definition pairs, as shown in the glossary view.
pub fn glossary() -> &'static [(&'static str, &'static str)] {
    DEFINITIONS
}

/// Look up a term, ignoring case.
pub fn define(term: &str) -> Option<&'static str> {
    DEFINITIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(term))
        .map(|(_, definition)| *definition)
}

static DEFINITIONS: &[(&str, &str)] = &[
    ("GMV", "Gross Merchandise Volume: Total value of merchandise sold through the store over a period."),
    ("ROAS", "Return on Ad Spend: Revenue generated for every dollar spent on advertising (Revenue / Spend)."),
    ("CPC", "Cost Per Click: The price you pay for each click in your marketing campaigns."),
    ("CPM", "Cost Per Mille: The cost for 1,000 impressions (views) of an advertisement."),
    ("CTR", "Click-Through Rate: Percentage of people who click an ad after seeing it."),
    ("CVR", "Conversion Rate: Percentage of visitors who complete a purchase."),
    ("CR", "Conversion Rate: Same as CVR. The percentage of visitors who purchase."),
    ("CAC", "Customer Acquisition Cost: The total cost to acquire a new customer."),
    ("LTV", "Lifetime Value: Average revenue a customer generates throughout their relationship with you."),
    ("CLV", "Customer Lifetime Value: Same as LTV."),
    ("AOV", "Average Order Value: The average amount spent per transaction."),
    ("UPT", "Units Per Transaction: Average number of items purchased in a single order."),
    ("ATC", "Add To Cart: Percentage of sessions where an item was added to the cart."),
    ("IC", "Initiate Checkout: Percentage of sessions that reach the checkout stage."),
    ("Cohort", "A group of customers who made their first purchase in the same time period."),
    ("Funnel", "The visual representation of steps a user takes toward a conversion."),
    ("Unit Economics", "The revenues and costs of your business model on a per-customer basis."),
    ("Contribution Margin", "Revenue minus variable costs (COGS, shipping, ad spend)."),
    ("SKU", "Stock Keeping Unit: A unique identifier for each distinct product."),
    ("UTM", "Urchin Tracking Module: Tags added to a URL to track the source of traffic."),
];
