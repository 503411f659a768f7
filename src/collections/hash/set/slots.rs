use std::mem;

use crate::util::option::OptionExtension;

pub(crate) type Link = Option<usize>;

/// A stored element along with its key, the bucket hash of that key and its neighbours in
/// insertion order.
#[derive(Debug, Clone)]
pub(crate) struct Slot<K, T> {
    pub hash: u64,
    pub key: K,
    pub value: T,
    pub prev: Link,
    pub next: Link,
}

#[derive(Debug, Clone)]
pub(crate) enum Cell<K, T> {
    Occupied(Slot<K, T>),
    /// A freed cell, holding the next entry of the free list.
    Vacant(Link),
}

use Cell::*;

/// An arena of slots threaded into a doubly linked list by insertion order.
///
/// Slot ids are stable for as long as the slot is occupied, which is what the bucket index stores.
/// Freed cells are pushed onto a free list and reused by the next insertion, so the list itself
/// never contains holes.
#[derive(Debug, Clone)]
pub(crate) struct Slots<K, T> {
    cells: Vec<Cell<K, T>>,
    free: Link,
    head: Link,
    tail: Link,
    len: usize,
}

impl<K, T> Slots<K, T> {
    pub const fn new() -> Slots<K, T> {
        Slots {
            cells: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn with_cap(cap: usize) -> Slots<K, T> {
        Slots {
            cells: Vec::with_capacity(cap),
            ..Slots::new()
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn head(&self) -> Link {
        self.head
    }

    pub const fn tail(&self) -> Link {
        self.tail
    }

    pub fn get(&self, id: usize) -> Option<&Slot<K, T>> {
        match self.cells.get(id) {
            Some(Occupied(slot)) => Some(slot),
            _ => None,
        }
    }

    fn get_mut(&mut self, id: usize) -> Option<&mut Slot<K, T>> {
        match self.cells.get_mut(id) {
            Some(Occupied(slot)) => Some(slot),
            _ => None,
        }
    }

    /// Links a new slot after the current tail, returning its id.
    pub fn push_back(&mut self, hash: u64, key: K, value: T) -> usize {
        let slot = Slot {
            hash,
            key,
            value,
            prev: self.tail,
            next: None,
        };

        let id = match self.free {
            Some(id) => {
                let next_free = match mem::replace(&mut self.cells[id], Occupied(slot)) {
                    Vacant(next_free) => next_free,
                    Occupied(_) => unreachable!("free list points at an occupied cell"),
                };
                self.free = next_free;
                id
            },
            None => {
                self.cells.push(Occupied(slot));
                self.cells.len() - 1
            },
        };

        match self.tail {
            // UNREACHABLE: The tail is always occupied.
            Some(tail) => self.get_mut(tail).unreachable().next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;

        id
    }

    /// Unlinks the slot with the provided `id`, returning it if it was occupied.
    pub fn remove(&mut self, id: usize) -> Option<Slot<K, T>> {
        self.get(id)?;

        let slot = match mem::replace(&mut self.cells[id], Vacant(self.free)) {
            Occupied(slot) => slot,
            Vacant(_) => unreachable!("slot {id} was checked to be occupied"),
        };
        self.free = Some(id);
        self.len -= 1;

        // Stitch the neighbours together, updating the ends of the list where the slot was one.
        match slot.prev {
            Some(prev) => self.get_mut(prev).unreachable().next = slot.next,
            None => self.head = slot.next,
        }
        match slot.next {
            Some(next) => self.get_mut(next).unreachable().prev = slot.prev,
            None => self.tail = slot.prev,
        }

        Some(slot)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn reserve(&mut self, extra: usize) {
        self.cells.reserve(extra);
    }

    pub fn iter(&self) -> SlotIter<'_, K, T> {
        SlotIter {
            slots: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }
}

impl<K, T> Default for Slots<K, T> {
    fn default() -> Self {
        Slots::new()
    }
}

impl<K, T> IntoIterator for Slots<K, T> {
    type Item = Slot<K, T>;

    type IntoIter = IntoSlots<K, T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoSlots {
            front: self.head,
            back: self.tail,
            remaining: self.len,
            cells: self.cells,
        }
    }
}

/// Borrowed iteration over occupied slots, following the links from either end.
#[derive(Debug)]
pub(crate) struct SlotIter<'a, K, T> {
    slots: &'a Slots<K, T>,
    front: Link,
    back: Link,
    // Stops the two ends from crossing when iterating from both directions.
    remaining: usize,
}

impl<K, T> Clone for SlotIter<'_, K, T> {
    fn clone(&self) -> Self {
        SlotIter { ..*self }
    }
}

impl<'a, K, T> Iterator for SlotIter<'a, K, T> {
    type Item = &'a Slot<K, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let slot = self.slots.get(self.front?).unreachable();
        self.front = slot.next;
        self.remaining -= 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, T> DoubleEndedIterator for SlotIter<'_, K, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let slot = self.slots.get(self.back?).unreachable();
        self.back = slot.prev;
        self.remaining -= 1;
        Some(slot)
    }
}

/// Owned iteration over slots in insertion order.
#[derive(Debug)]
pub(crate) struct IntoSlots<K, T> {
    cells: Vec<Cell<K, T>>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<K, T> IntoSlots<K, T> {
    fn take(&mut self, id: usize) -> Slot<K, T> {
        match mem::replace(&mut self.cells[id], Vacant(None)) {
            Occupied(slot) => slot,
            Vacant(_) => unreachable!("linked slot {id} is vacant"),
        }
    }
}

impl<K, T> Iterator for IntoSlots<K, T> {
    type Item = Slot<K, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let slot = self.take(self.front?);
        self.front = slot.next;
        self.remaining -= 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, T> DoubleEndedIterator for IntoSlots<K, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let slot = self.take(self.back?);
        self.back = slot.prev;
        self.remaining -= 1;
        Some(slot)
    }
}
