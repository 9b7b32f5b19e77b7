mod construct;
mod pair;

use crate::Element;
use std::{cell::RefCell, rc::Rc};

#[derive(Element, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Empty;

#[derive(Element, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Other {}

#[derive(Element, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[element(sealed)]
pub(crate) struct Final;

/// Records its label into a shared log when dropped.
#[derive(Element)]
pub(crate) struct Tracked {
    label: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl Tracked {
    pub(crate) fn new(label: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Self {
        Self {
            label,
            log: Rc::clone(log),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.label);
    }
}

pub(crate) fn new_log() -> Rc<RefCell<Vec<&'static str>>> {
    Rc::new(RefCell::new(Vec::new()))
}
