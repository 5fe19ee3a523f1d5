//! Filler text: sentences, paragraphs and business buzzwords.

use rand::Rng;

use super::pick;

const WORDS: &[&str] = &[
    "account", "review", "payment", "transfer", "balance", "client", "policy", "record",
    "report", "statement", "deposit", "invoice", "branch", "office", "customer", "service",
    "period", "request", "process", "update", "approval", "document", "reference", "team",
    "quarter", "order", "contract", "schedule", "summary", "amount", "settlement", "note",
    "follow", "confirm", "receive", "provide", "complete", "submit", "verify", "monitor",
    "regular", "pending", "annual", "internal", "external", "standard", "additional",
    "current", "previous", "final",
];

const BS_VERBS: &[&str] = &[
    "streamline", "leverage", "integrate", "monetize", "optimize", "scale", "deliver",
    "orchestrate", "syndicate", "empower", "transform", "incubate",
];

const BS_ADJECTIVES: &[&str] = &[
    "scalable", "end-to-end", "cross-platform", "value-added", "mission-critical",
    "customer-centric", "best-of-breed", "data-driven", "turnkey", "real-time", "robust",
    "next-generation",
];

const BS_NOUNS: &[&str] = &[
    "solutions", "platforms", "supply-chains", "infrastructures", "markets", "channels",
    "partnerships", "services", "logistics", "networks", "portfolios", "synergies",
];

fn word<R: Rng + ?Sized>(rng: &mut R, list: &[&'static str]) -> &'static str {
    pick(rng, list)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Sentence of 4-10 words ending with a period.
pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.gen_range(4..=10);
    let words: Vec<&str> = (0..count).map(|_| word(rng, WORDS)).collect();
    format!("{}.", capitalize(&words.join(" ")))
}

/// Sentences joined until the next one would exceed `max_chars`.
///
/// Always returns at least one (possibly truncated) sentence.
pub fn text<R: Rng + ?Sized>(rng: &mut R, max_chars: usize) -> String {
    let mut out = String::new();
    loop {
        let next = sentence(rng);
        let needed = if out.is_empty() { next.len() } else { out.len() + 1 + next.len() };
        if needed > max_chars {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&next);
    }
    if out.is_empty() {
        let first = sentence(rng);
        let cut = max_chars.saturating_sub(1).min(first.len().saturating_sub(1));
        out = format!("{}.", first[..cut].trim_end());
    }
    out
}

/// Corporate buzzword phrase, e.g. "leverage real-time solutions".
pub fn bs<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        word(rng, BS_VERBS),
        word(rng, BS_ADJECTIVES),
        word(rng, BS_NOUNS)
    )
}
