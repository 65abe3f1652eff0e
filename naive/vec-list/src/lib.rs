pub struct VecList<T>(Vec<T>);

impl<T> VecList<T> {
    pub fn new() -> Self { Self(vec![]) }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn push_back(&mut self, elt: T) { self.0.push(elt) }
    pub fn pop_back(&mut self) -> Option<T> { self.0.pop() }
    pub fn push_front(&mut self, elt: T) { self.0.insert(0, elt) }
    pub fn pop_front(&mut self) -> Option<T> {
        if self.0.is_empty() { None } else { Some(self.0.remove(0)) }
    }
    pub fn get(&self, i: usize) -> Option<&T> { self.0.get(i) }
    pub fn set(&mut self, i: usize, elt: T) -> bool {
        match self.0.get_mut(i) {
            Some(slot) => {
                *slot = elt;
                true
            }
            None => false,
        }
    }
    pub fn insert(&mut self, i: usize, elt: T) -> bool {
        if i > self.0.len() {
            return false;
        }
        self.0.insert(i, elt);
        true
    }
    pub fn remove(&mut self, i: usize) -> Option<T> {
        if i < self.0.len() { Some(self.0.remove(i)) } else { None }
    }
    pub fn reverse(&mut self) { self.0.reverse() }
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }
}

impl<T> Default for VecList<T> {
    fn default() -> Self { Self::new() }
}
