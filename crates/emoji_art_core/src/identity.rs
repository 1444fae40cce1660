//! Identity-based lookup over ordered collections.
//!
//! Elements are matched by a stable key, not by full value equality. Every
//! lookup is a linear scan where the first match wins.

pub trait Identifiable {
    type Id: PartialEq;

    fn id(&self) -> Self::Id;
}

pub trait IdentifiedCollection<T: Identifiable> {
    /// Position of the first element sharing `element`'s identity.
    fn index_matching(&self, element: &T) -> Option<usize>;

    /// The stored element with `element`'s identity, or `element` itself when
    /// absent. Never inserts.
    fn matching_or<'a>(&'a self, element: &'a T) -> &'a T;
}

pub trait IdentifiedVec<T: Identifiable>: IdentifiedCollection<T> {
    /// Removes the matching element, if any.
    fn remove_matching(&mut self, element: &T);

    /// Replaces the matching element. Elements with no match are dropped and
    /// `false` is returned.
    fn replace_matching(&mut self, element: T) -> bool;
}

impl<T: Identifiable> IdentifiedCollection<T> for [T] {
    fn index_matching(&self, element: &T) -> Option<usize> {
        let id = element.id();
        self.iter().position(|candidate| candidate.id() == id)
    }

    fn matching_or<'a>(&'a self, element: &'a T) -> &'a T {
        match self.index_matching(element) {
            Some(index) => &self[index],
            None => element,
        }
    }
}

impl<T: Identifiable> IdentifiedCollection<T> for Vec<T> {
    fn index_matching(&self, element: &T) -> Option<usize> {
        self.as_slice().index_matching(element)
    }

    fn matching_or<'a>(&'a self, element: &'a T) -> &'a T {
        self.as_slice().matching_or(element)
    }
}

impl<T: Identifiable> IdentifiedVec<T> for Vec<T> {
    fn remove_matching(&mut self, element: &T) {
        if let Some(index) = self.index_matching(element) {
            self.remove(index);
        }
    }

    fn replace_matching(&mut self, element: T) -> bool {
        match self.index_matching(&element) {
            Some(index) => {
                self[index] = element;
                true
            }
            None => false,
        }
    }
}
