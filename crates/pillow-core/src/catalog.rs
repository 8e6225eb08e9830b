use crate::constants::FALLBACK_NOMINAL_INCHES;

/// One purchasable pillow size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeTier {
    pub label: &'static str,
    pub size_label: &'static str,
    pub nominal_inches: f64,
    pub price: &'static str,
    pub strike_price: &'static str,
}

pub const SIZE_TIERS: &[SizeTier] = &[
    SizeTier {
        label: "$60",
        size_label: "18\"",
        nominal_inches: 18.0,
        price: "$60",
        strike_price: "$85",
    },
    SizeTier {
        label: "$70",
        size_label: "22\"",
        nominal_inches: 22.0,
        price: "$70",
        strike_price: "$100",
    },
    SizeTier {
        label: "$90",
        size_label: "26\"",
        nominal_inches: 26.0,
        price: "$90",
        strike_price: "$120",
    },
];

pub const DEFAULT_TIER_LABEL: &str = "$70";

#[inline]
pub fn tier_by_label(label: &str) -> Option<&'static SizeTier> {
    SIZE_TIERS.iter().find(|t| t.label == label)
}

#[inline]
pub fn default_tier() -> &'static SizeTier {
    tier_by_label(DEFAULT_TIER_LABEL).unwrap_or(&SIZE_TIERS[0])
}

/// Nominal size for a label, falling back to 22" for unknown labels.
#[inline]
pub fn nominal_inches_for(label: &str) -> f64 {
    tier_by_label(label)
        .map(|t| t.nominal_inches)
        .unwrap_or(FALLBACK_NOMINAL_INCHES)
}
