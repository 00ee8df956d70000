use api::content::GalleryImage;

// lightbox state
//
// which image is in focus and whether the overlay is showing.  navigation
// wraps around in both directions, and an empty gallery can never be opened
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lightbox {
    images: Vec<GalleryImage>,
    current: usize,
    open: bool,
}

impl Lightbox {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Lightbox {
            images,
            current: 0,
            open: false,
        }
    }

    // fetched images replace the placeholders; an open overlay stays open as
    // long as there is still something to show
    pub fn set_images(&mut self, images: Vec<GalleryImage>) {
        self.images = images;

        if self.images.is_empty() {
            self.current = 0;
            self.open = false;
        } else if self.current >= self.images.len() {
            self.current = 0;
        }
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&GalleryImage> {
        self.open.then(|| self.images.get(self.current)).flatten()
    }

    pub fn open(&mut self, index: usize) {
        if index >= self.images.len() {
            return;
        }

        self.current = index;
        self.open = true;
    }

    pub fn next(&mut self) {
        if self.images.is_empty() {
            return;
        }

        self.current = (self.current + 1) % self.images.len();
    }

    pub fn previous(&mut self) {
        if self.images.is_empty() {
            return;
        }

        let len = self.images.len();
        self.current = (self.current + len - 1) % len;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    // returns whether the key meant anything, so the caller knows to
    // swallow the event
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.open {
            return false;
        }

        match key {
            "ArrowRight" => self.next(),
            "ArrowLeft" => self.previous(),
            "Escape" => self.close(),
            _ => return false,
        }

        true
    }

    pub fn counter(&self) -> String {
        format!("{} / {}", self.current + 1, self.images.len())
    }
}
