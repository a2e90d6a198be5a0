//! Dominant industry per state and a short flavor quote per industry.
//!
//! Both tables are immutable; the lookups fall back to [`UNKNOWN_INDUSTRY`] and
//! [`DEFAULT_VIBE`] so they are total over any input.

/// Industry reported for a state missing from [`STATE_INDUSTRIES`].
pub const UNKNOWN_INDUSTRY: &str = "Unknown";

/// A quote and its emoji badge.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Vibe {
    pub quote: &'static str,
    pub emoji: &'static str,
}

/// Quote used for an industry missing from [`INDUSTRY_VIBES`].
pub const DEFAULT_VIBE: Vibe = Vibe {
    quote: "Driven by ambition",
    emoji: "🌟",
};

/// State abbreviation to its most common income source.
pub const STATE_INDUSTRIES: &[(&str, &str)] = &[
    ("AL", "Automotive"),
    ("AK", "Oil & Gas"),
    ("AZ", "Aerospace"),
    ("AR", "Agriculture"),
    ("CA", "Technology"),
    ("CO", "Tourism"),
    ("CT", "Insurance"),
    ("DE", "Chemicals"),
    ("FL", "Tourism"),
    ("GA", "Logistics"),
    ("HI", "Hospitality"),
    ("ID", "Agriculture"),
    ("IL", "Manufacturing"),
    ("IN", "Automotive"),
    ("IA", "Agriculture"),
    ("KS", "Aviation"),
    ("KY", "Bourbon & Manufacturing"),
    ("LA", "Petrochemicals"),
    ("ME", "Paper & Forestry"),
    ("MD", "Defense"),
    ("MA", "Biotech"),
    ("MI", "Automotive"),
    ("MN", "Healthcare"),
    ("MS", "Agriculture"),
    ("MO", "Aerospace"),
    ("MT", "Mining"),
    ("NE", "Agriculture"),
    ("NV", "Gaming & Tourism"),
    ("NH", "Manufacturing"),
    ("NJ", "Pharmaceuticals"),
    ("NM", "Energy"),
    ("NY", "Finance"),
    ("NC", "Banking"),
    ("ND", "Energy"),
    ("OH", "Automotive"),
    ("OK", "Oil & Gas"),
    ("OR", "Technology"),
    ("PA", "Healthcare"),
    ("RI", "Jewelry & Design"),
    ("SC", "Automotive"),
    ("SD", "Agriculture"),
    ("TN", "Music & Manufacturing"),
    ("TX", "Oil & Gas"),
    ("UT", "Tech Startups"),
    ("VT", "Dairy"),
    ("VA", "Defense"),
    ("WA", "Software"),
    ("WV", "Coal Mining"),
    ("WI", "Dairy"),
    ("WY", "Mining"),
];

/// Industry label to its quote.
pub const INDUSTRY_VIBES: &[(&str, Vibe)] = &[
    ("Agriculture", Vibe { quote: "Grounded, steady, and feeding the nation", emoji: "🌾" }),
    ("Automotive", Vibe { quote: "Fast lanes and high torque dreams", emoji: "🚗" }),
    ("Oil & Gas", Vibe { quote: "Fueled by fire, driving the economy", emoji: "🔥" }),
    ("Technology", Vibe { quote: "Innovating the future with every click", emoji: "💻" }),
    ("Tourism", Vibe { quote: "Always open, always welcoming", emoji: "🏝️" }),
    ("Finance", Vibe { quote: "Money never sleeps", emoji: "💰" }),
    ("Aerospace", Vibe { quote: "Soaring above the rest", emoji: "🚀" }),
    ("Biotech", Vibe { quote: "Science with a heartbeat", emoji: "🧬" }),
    ("Healthcare", Vibe { quote: "Healing hands and healthy hearts", emoji: "❤️" }),
    ("Defense", Vibe { quote: "Strength in service and security", emoji: "🛡️" }),
    ("Music & Manufacturing", Vibe { quote: "Beats, bolts, and brilliance", emoji: "🎶🔧" }),
    ("Gaming & Tourism", Vibe { quote: "Play hard, relax harder", emoji: "🎰" }),
    ("Energy", Vibe { quote: "Powering everything", emoji: "🌞⚡" }),
    ("Dairy", Vibe { quote: "Cream of the crop", emoji: "🐄" }),
    ("Mining", Vibe { quote: "Digging deep for growth", emoji: "⛏️" }),
    ("Software", Vibe { quote: "Coding the new world", emoji: "🌐" }),
    ("Jewelry & Design", Vibe { quote: "Shining bright with elegance", emoji: "💎" }),
    ("Pharmaceuticals", Vibe { quote: "Health in every capsule", emoji: "💊" }),
    ("Paper & Forestry", Vibe { quote: "Rooted in nature", emoji: "🌲" }),
    ("Banking", Vibe { quote: "Where money meets trust", emoji: "🏦" }),
    ("Aviation", Vibe { quote: "Wings of opportunity", emoji: "✈️" }),
    ("Insurance", Vibe { quote: "Peace of mind, policy by policy", emoji: "📄" }),
];

/// Dominant industry for a state abbreviation, or [`UNKNOWN_INDUSTRY`].
pub fn industry_for(state_abbr: &str) -> &'static str {
    STATE_INDUSTRIES
        .iter()
        .find(|(abbr, _)| *abbr == state_abbr)
        .map(|(_, industry)| *industry)
        .unwrap_or(UNKNOWN_INDUSTRY)
}

/// Quote and badge for an industry label, or [`DEFAULT_VIBE`].
pub fn vibe_for(industry: &str) -> Vibe {
    INDUSTRY_VIBES
        .iter()
        .find(|(label, _)| *label == industry)
        .map(|(_, vibe)| *vibe)
        .unwrap_or(DEFAULT_VIBE)
}

/// Quote text for an industry label, or the default quote.
pub fn quote_for(industry: &str) -> &'static str {
    vibe_for(industry).quote
}
