/// FAQ list with at most one item open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Opening an item closes whichever one was open before.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_item_is_open() {
        let mut acc = Accordion::default();
        acc.toggle(1);
        acc.toggle(3);
        assert!(!acc.is_open(1));
        assert!(acc.is_open(3));
        assert_eq!(acc.open_item(), Some(3));
    }

    #[test]
    fn toggling_open_item_closes_it() {
        let mut acc = Accordion::default();
        acc.toggle(0);
        acc.toggle(0);
        assert_eq!(acc.open_item(), None);
    }
}
