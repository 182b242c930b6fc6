use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cons<T: Clone>(pub T, pub LinkedList<T>);

/// Persistent singly linked list, newest element first.
///
/// Cloning shares the whole spine, so a child position can extend its parent's
/// history with [LinkedList::push] without copying or aliasing the parent's list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkedList<T: Clone>(pub Option<Arc<Cons<T>>>);

impl<T: Clone> Default for LinkedList<T> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<T: Clone> LinkedList<T> {
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn head(&self) -> Option<T> {
        self.0.as_ref().map(|rc| rc.0.clone())
    }

    /// Returns a new list with `x` in front, sharing `self` as its tail.
    #[inline]
    pub fn push(&self, x: T) -> LinkedList<T> {
        LinkedList(Some(Arc::new(Cons(x, self.clone()))))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.0.as_deref())
    }

    /// Elements oldest first.
    pub fn to_vec_oldest_first(&self) -> Vec<T> {
        let mut v: Vec<T> = self.iter().cloned().collect();
        v.reverse();
        v
    }
}

pub struct Iter<'a, T: Clone>(Option<&'a Cons<T>>);

impl<'a, T: Clone> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let cons = self.0?;
        self.0 = cons.1 .0.as_deref();
        Some(&cons.0)
    }
}

impl<T: Clone> Iterator for LinkedList<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match &self.0 {
            None => None,
            Some(rc) => {
                let x = rc.0.clone();
                *self = rc.1.clone();
                Some(x)
            }
        }
    }
}

impl<T: Clone> FromIterator<T> for LinkedList<T> {
    /// Builds a list whose head is the last element yielded.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(LinkedList::default(), |list, x| list.push(x))
    }
}

#[macro_export]
macro_rules! cons {
    ($x: expr, $xs: expr) => {
        $crate::data_structures::linked_list::LinkedList(Some(::std::sync::Arc::new(
            $crate::data_structures::linked_list::Cons($x, $xs),
        )))
    };
}

#[macro_export]
macro_rules! linked_list {
    ($(,)?) => {
        $crate::data_structures::linked_list::LinkedList(
            None
        )
    };
    ($x: expr $(,)?) => {
        $crate::data_structures::linked_list::LinkedList(
            Some(::std::sync::Arc::new(
                $crate::data_structures::linked_list::Cons(
                    $x, $crate::linked_list![]
                )
            ))
        )
    };
    ($x: expr, $($xs: expr),+) => {
        $crate::cons!($x, $crate::linked_list![$($xs),+])
    };
}
