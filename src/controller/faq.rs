/// Accordion with at most one open entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggled(self, index: usize) -> Self {
        if self.is_open(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(FaqAccordion::default().open, None);
    }

    #[test]
    fn toggling_twice_closes() {
        let faq = FaqAccordion::default().toggled(2).toggled(2);
        assert_eq!(faq.open, None);
    }

    #[test]
    fn second_entry_replaces_first() {
        let faq = FaqAccordion::default().toggled(1).toggled(4);
        assert_eq!(faq.open, Some(4));
        assert!(!faq.is_open(1));
    }
}
