use std::{fmt, marker::PhantomData, ptr::NonNull};

pub struct SinglyLinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    // For dropck; we own the nodes even though we only hold raw links.
    _marker: PhantomData<Box<Node<T>>>,
}

struct Node<T> {
    elt: T,
    next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    fn new(elt: T) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { elt, next: None })))
    }
    fn into_elt(this: NonNull<Self>) -> T {
        unsafe { Box::from_raw(this.as_ptr()) }.elt
    }
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, tail: None, len: 0, _marker: PhantomData }
    }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    pub fn push_back(&mut self, elt: T) {
        let node = Node::new(elt);
        if let Some(tail) = self.tail {
            unsafe { (*tail.as_ptr()).next = Some(node) };
        } else {
            self.head = Some(node);
        }
        self.tail = Some(node);
        self.len += 1;
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        if self.len == 1 {
            self.head = None;
            self.tail = None;
        } else {
            // Links are forward-only, so finding the new tail takes a
            // full walk from the head.
            let before_tail = self.node_at(self.len - 2).unwrap();
            unsafe { (*before_tail.as_ptr()).next = None };
            self.tail = Some(before_tail);
        }
        self.len -= 1;
        Some(Node::into_elt(tail))
    }

    pub fn push_front(&mut self, elt: T) {
        if self.is_empty() {
            return self.push_back(elt);
        }
        let node = Node::new(elt);
        unsafe { (*node.as_ptr()).next = self.head };
        self.head = Some(node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.len <= 1 {
            return self.pop_back();
        }
        let head = self.head.unwrap();
        self.head = unsafe { (*head.as_ptr()).next };
        self.len -= 1;
        Some(Node::into_elt(head))
    }

    pub fn get(&self, i: usize) -> Option<&T> {
        self.node_at(i).map(|node| unsafe { &(*node.as_ptr()).elt })
    }

    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.node_at(i).map(|node| unsafe { &mut (*node.as_ptr()).elt })
    }

    pub fn set(&mut self, i: usize, elt: T) -> bool {
        match self.get_mut(i) {
            Some(slot) => {
                *slot = elt;
                true
            }
            None => false,
        }
    }

    pub fn insert(&mut self, i: usize, elt: T) -> bool {
        if i > self.len {
            return false;
        }
        if i == 0 {
            self.push_front(elt);
        } else if i == self.len {
            self.push_back(elt);
        } else {
            let prev = self.node_at(i - 1).unwrap();
            let node = Node::new(elt);
            unsafe {
                (*node.as_ptr()).next = (*prev.as_ptr()).next;
                (*prev.as_ptr()).next = Some(node);
            }
            self.len += 1;
        }
        true
    }

    pub fn remove(&mut self, i: usize) -> Option<T> {
        if i >= self.len {
            None
        } else if i == 0 {
            self.pop_front()
        } else if i == self.len - 1 {
            self.pop_back()
        } else {
            let prev = self.node_at(i - 1).unwrap();
            let node = unsafe { (*prev.as_ptr()).next }.unwrap();
            unsafe { (*prev.as_ptr()).next = (*node.as_ptr()).next };
            self.len -= 1;
            Some(Node::into_elt(node))
        }
    }

    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut cur = self.head;
        while let Some(node) = cur {
            // Save the forward link before overwriting it, or the rest
            // of the chain is lost.
            let next = unsafe { (*node.as_ptr()).next };
            unsafe { (*node.as_ptr()).next = prev };
            prev = cur;
            cur = next;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { cur: self.head, len: self.len, _marker: PhantomData }
    }

    fn node_at(&self, i: usize) -> Option<NonNull<Node<T>>> {
        if i >= self.len {
            return None;
        }
        let mut cur = self.head.unwrap();
        for _ in 0..i {
            cur = unsafe { (*cur.as_ptr()).next }.unwrap();
        }
        Some(cur)
    }
}

unsafe impl<T: Send> Send for SinglyLinkedList<T> {}
unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(node) = cur {
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            cur = node.next;
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self { Self::new() }
}

pub struct Iter<'a, T> {
    cur: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a Node<T>>,
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let node = self.cur?;
        self.cur = unsafe { (*node.as_ptr()).next };
        self.len -= 1;
        Some(unsafe { &(*node.as_ptr()).elt })
    }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

pub struct IntoIter<T>(SinglyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.pop_front() }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter(self) }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.push_back(elt);
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self { self.iter().cloned().collect() }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for elt in self {
            write!(f, "{elt} -> ")?;
        }
        write!(f, "nil")
    }
}
