use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

/// A value that increments a shared counter when dropped, used to check that a collection drops
/// each of its values exactly once.
#[derive(Debug, Clone)]
pub struct CountedDrop {
    pub id: u32,
    pub drops: Rc<RefCell<usize>>,
}

impl CountedDrop {
    pub fn new(id: u32, drops: &Rc<RefCell<usize>>) -> CountedDrop {
        CountedDrop {
            id,
            drops: Rc::clone(drops),
        }
    }

    pub fn counter() -> Rc<RefCell<usize>> {
        Rc::new(RefCell::new(0))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.drops
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.drops.replace_with(|v| *v + 1);
    }
}
