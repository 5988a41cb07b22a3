//! Status classification
//!
//! Rules are tried in table order and the first match wins. The keyword
//! sets overlap in real data ("Pendiente de aprobación"), so reordering
//! the table changes results.

use std::sync::LazyLock;

use regex::Regex;

use crate::markup::CLASS_CHIP;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Warning,
    Danger,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
        }
    }

    /// Tone-suffixed chip class, e.g. `andes-chip--warning`
    pub fn chip_class(self) -> String {
        format!("{}--{}", CLASS_CHIP, self.as_str())
    }
}

const STATUS_PATTERNS: [(&str, Tone); 3] = [
    (
        r"(?i)\b(aprobad[oa]s?|completad[oa]s?|cerrad[oa]s?|vigentes?|activ[oa]s?|approved|completed|closed|current|active)\b",
        Tone::Success,
    ),
    (
        r"(?i)\b(pendientes?|en curso|en proceso|en revisi[oó]n|observad[oa]s?|pending|in[- ]progress|in[- ]process|under[- ]review|observed)\b",
        Tone::Warning,
    ),
    (
        r"(?i)\b(rechazad[oa]s?|bloquead[oa]s?|cr[ií]tic[oa]s?|en riesgo|vencid[oa]s?|rejected|blocked|critical|at[- ]risk|expired)\b",
        Tone::Danger,
    ),
];

struct StatusRule {
    pattern: Regex,
    tone: Tone,
}

static STATUS_RULES: LazyLock<Vec<StatusRule>> = LazyLock::new(|| {
    STATUS_PATTERNS
        .iter()
        .map(|&(pattern, tone)| StatusRule {
            pattern: Regex::new(pattern).expect("valid status pattern"),
            tone,
        })
        .collect()
});

/// Tone of the first rule matching `text`, or `None` for plain text
pub fn classify_status(text: &str) -> Option<Tone> {
    STATUS_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(text))
        .map(|rule| rule.tone)
}
