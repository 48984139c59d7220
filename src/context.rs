use crate::models::{CardHolder, SectionKind};

/// A banner row's effect on the running context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Section(SectionKind),
    CardHolder(CardHolder),
}

/// Section and cardholder carried from banner rows onto the rows below them.
/// Build one per file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextTracker {
    section: SectionKind,
    card_holder: CardHolder,
}

impl ContextTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self) -> SectionKind {
        self.section
    }

    pub fn card_holder(&self) -> CardHolder {
        self.card_holder
    }

    /// Apply a banner row. Returns the banner when the row was consumed, in
    /// which case it must not be treated as a transaction.
    pub fn observe(&mut self, row_text: &str) -> Option<Banner> {
        let banner = if row_text.contains("Domestic Transactions") {
            Banner::Section(SectionKind::Domestic)
        } else if row_text.contains("International Transaction") {
            Banner::Section(SectionKind::International)
        } else {
            Banner::CardHolder(CardHolder::find_in(row_text)?)
        };
        match banner {
            Banner::Section(section) => self.section = section,
            Banner::CardHolder(holder) => self.card_holder = holder,
        }
        Some(banner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unknown() {
        let ctx = ContextTracker::new();
        assert_eq!(ctx.section(), SectionKind::Unknown);
        assert_eq!(ctx.card_holder(), CardHolder::Unknown);
    }

    #[test]
    fn test_section_persists_until_changed() {
        let mut ctx = ContextTracker::new();
        assert_eq!(
            ctx.observe("Domestic Transactions"),
            Some(Banner::Section(SectionKind::Domestic))
        );
        assert_eq!(ctx.observe("01-01-2023 Coffee 100"), None);
        assert_eq!(ctx.section(), SectionKind::Domestic);
        assert_eq!(ctx.observe("02-01-2023 Tea 50"), None);
        assert_eq!(ctx.section(), SectionKind::Domestic);

        ctx.observe("International Transactions");
        assert_eq!(ctx.section(), SectionKind::International);
    }

    #[test]
    fn test_singular_international_banner() {
        let mut ctx = ContextTracker::new();
        assert!(ctx.observe("International Transaction").is_some());
        assert_eq!(ctx.section(), SectionKind::International);
    }

    #[test]
    fn test_card_holder_banner_keeps_section() {
        let mut ctx = ContextTracker::new();
        ctx.observe("Domestic Transactions");
        assert_eq!(
            ctx.observe("Rahul"),
            Some(Banner::CardHolder(CardHolder::Rahul))
        );
        assert_eq!(ctx.section(), SectionKind::Domestic);
        ctx.observe("Card holder: Ritu");
        assert_eq!(ctx.card_holder(), CardHolder::Ritu);
    }

    #[test]
    fn test_section_banner_checked_before_names() {
        let mut ctx = ContextTracker::new();
        assert_eq!(
            ctx.observe("Domestic Transactions Rahul"),
            Some(Banner::Section(SectionKind::Domestic))
        );
        assert_eq!(ctx.card_holder(), CardHolder::Unknown);
    }
}
