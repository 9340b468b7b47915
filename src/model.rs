// Lightbox gallery: items collected from the markup and the one on screen

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    /// Full-size image URL (the trigger's `href`).
    pub src: String,
    /// From `data-title`, falling back to the thumbnail's `alt`.
    pub caption: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightboxState {
    pub items: Rc<Vec<GalleryItem>>,
    pub current: Option<usize>,
    pub loop_gallery: bool,
}

impl LightboxState {
    pub fn new(loop_gallery: bool) -> Self {
        Self {
            loop_gallery,
            ..Default::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_item(&self) -> Option<&GalleryItem> {
        self.current.and_then(|i| self.items.get(i))
    }

    pub fn has_next(&self) -> bool {
        match self.current {
            Some(i) => (self.loop_gallery && self.items.len() > 1) || i + 1 < self.items.len(),
            None => false,
        }
    }

    pub fn has_prev(&self) -> bool {
        match self.current {
            Some(i) => (self.loop_gallery && self.items.len() > 1) || i > 0,
            None => false,
        }
    }
}

#[derive(Clone, Debug)]
pub enum LightboxAction {
    SetItems(Vec<GalleryItem>),
    Open(usize),
    Close,
    Next,
    Prev,
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use LightboxAction::*;
        let len = self.items.len();
        let current = match action {
            SetItems(items) => {
                let mut new = (*self).clone();
                new.current = new.current.filter(|&i| i < items.len());
                new.items = Rc::new(items);
                return Rc::new(new);
            }
            Open(i) if i < len => Some(i),
            Open(_) => return self,
            Close => None,
            Next => match self.current {
                Some(i) if i + 1 < len => Some(i + 1),
                Some(_) if self.loop_gallery && len > 1 => Some(0),
                _ => return self,
            },
            Prev => match self.current {
                Some(i) if i > 0 => Some(i - 1),
                Some(_) if self.loop_gallery && len > 1 => Some(len - 1),
                _ => return self,
            },
        };
        if current == self.current {
            return self;
        }
        Rc::new(Self {
            current,
            ..(*self).clone()
        })
    }
}
