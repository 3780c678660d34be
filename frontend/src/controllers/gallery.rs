#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub caption: String,
}

/// Modal viewer over a fixed list of images. Navigation wraps around.
#[derive(Clone, Debug)]
pub struct Gallery {
    images: Vec<GalleryImage>,
    current: usize,
    open: bool,
}

impl Gallery {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Gallery {
            images,
            current: 0,
            open: false,
        }
    }

    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.current = index;
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.current = (self.current + 1) % self.images.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.images.is_empty() {
            self.current = (self.current + self.images.len() - 1) % self.images.len();
        }
    }

    /// Arrow keys only navigate while the modal is showing.
    pub fn on_key(&mut self, key: &str) -> bool {
        if !self.open {
            return false;
        }
        match key {
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            "Escape" => self.close(),
            _ => return false,
        }
        true
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&GalleryImage> {
        self.images.get(self.current)
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> Gallery {
        Gallery::new(
            (0..n)
                .map(|i| GalleryImage {
                    src: format!("/assets/gallery/{}.jpg", i),
                    caption: format!("Still {}", i),
                })
                .collect(),
        )
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut g = gallery(3);
        g.open(0);
        g.prev();
        assert_eq!(g.index(), 2);
        g.next();
        assert_eq!(g.index(), 0);
        g.open(2);
        g.next();
        assert_eq!(g.current().unwrap().caption, "Still 0");
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut g = gallery(3);
        assert!(!g.on_key("ArrowRight"));
        assert_eq!(g.index(), 0);

        g.open(1);
        assert!(g.on_key("ArrowRight"));
        assert_eq!(g.index(), 2);
        assert!(!g.on_key("Enter"));
        assert!(g.on_key("Escape"));
        assert!(!g.is_open());
    }

    #[test]
    fn out_of_range_open_is_rejected() {
        let mut g = gallery(2);
        assert!(!g.open(2));
        assert!(!g.is_open());

        let mut empty = gallery(0);
        empty.next();
        empty.prev();
        assert_eq!(empty.current(), None);
    }
}
