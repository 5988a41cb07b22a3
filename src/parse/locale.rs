use serde::Deserialize;

/// Number rendering rules for the target locale (es-CL by default)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NumberLocale {
    pub grouping_separator: char,
    pub decimal_separator: char,
    /// Integers shorter than `3 + min_grouping_digits` digits stay ungrouped
    pub min_grouping_digits: usize,
    pub max_fraction_digits: usize,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::es_cl()
    }
}

impl NumberLocale {
    pub fn es_cl() -> Self {
        Self {
            grouping_separator: '.',
            decimal_separator: ',',
            min_grouping_digits: 1,
            max_fraction_digits: 2,
        }
    }

    /// Insert grouping separators into a run of ASCII digits
    pub fn group_integer(&self, digits: &str) -> String {
        if digits.len() < 3 + self.min_grouping_digits {
            return digits.to_string();
        }
        let separator = self.grouping_separator.to_string();
        digits
            .as_bytes()
            .rchunks(3)
            .rev()
            .map(|chunk| String::from_utf8_lossy(chunk))
            .collect::<Vec<_>>()
            .join(&separator)
    }
}
