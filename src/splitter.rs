use crate::models::SectionKind;

pub const UNKNOWN_LOCATION: &str = "unknown";
pub const UNKNOWN_CURRENCY: &str = "Unknown";
pub const DOMESTIC_CURRENCY: &str = "INR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDescription {
    pub description: String,
    pub location: String,
    pub currency: String,
}

/// Peel location and currency off the tail of a statement description.
///
/// Domestic lines end in a city; international lines end in
/// `<city> <currency>`. Rows outside any section are treated as international.
pub fn split_description(description: &str, section: SectionKind) -> SplitDescription {
    let words: Vec<&str> = description.split_whitespace().collect();

    let (rest, location, currency): (&[&str], Option<&str>, Option<&str>) = match section {
        SectionKind::Domestic => match words.split_last() {
            Some((last, rest)) => (rest, Some(*last), Some(DOMESTIC_CURRENCY)),
            None => (&words[..], None, Some(DOMESTIC_CURRENCY)),
        },
        SectionKind::International | SectionKind::Unknown => match words.len() {
            n if n > 2 => (&words[..n - 2], Some(words[n - 2]), Some(words[n - 1])),
            2 => (&words[..1], None, Some(words[1])),
            _ => (&words[..], None, None),
        },
    };

    SplitDescription {
        description: rest.join(" "),
        location: location
            .map(str::to_lowercase)
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
        currency: currency.unwrap_or(UNKNOWN_CURRENCY).to_string(),
    }
}
