//! Pre-rendered page content.

use twilight_model::channel::message::embed::Embed;

/// The fixed pages of one session. Exactly one content kind is active.
#[derive(Clone, Debug, PartialEq)]
pub enum Pages {
    Text(Vec<String>),
    Rich(Vec<Embed>),
}

/// Borrowed view of one page, handed to the message on re-render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageView<'a> {
    Text(&'a str),
    Rich(&'a Embed),
}

impl Pages {
    pub fn len(&self) -> usize {
        match self {
            Self::Text(pages) => pages.len(),
            Self::Rich(pages) => pages.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the page at `index`, if it exists.
    pub fn view(&self, index: usize) -> Option<PageView<'_>> {
        match self {
            Self::Text(pages) => pages.get(index).map(|page| PageView::Text(page.as_str())),
            Self::Rich(pages) => pages.get(index).map(PageView::Rich),
        }
    }
}
