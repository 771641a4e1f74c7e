pub type Candidate = &'static str;

pub const CATALOG: [Candidate; 20] = [
    "Honesty",
    "Integrity",
    "Responsibility",
    "Respect",
    "Courage",
    "Compassion",
    "Fairness",
    "Equality",
    "Freedom",
    "Peace",
    "Love",
    "Wisdom",
    "Humility",
    "Sympathy",
    "Empathy",
    "Spirituality",
    "Trustworthiness",
    "Loyalty",
    "Gratitude",
    "Generosity",
];

pub fn filter_catalog(query: &str) -> Vec<Candidate> {
    let needle = query.to_lowercase();
    CATALOG
        .iter()
        .copied()
        .filter(|value| value.to_lowercase().contains(&needle))
        .collect()
}
