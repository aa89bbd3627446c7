use anyhow::{anyhow, Result};
use bumpalo::Bump;
use core::fmt;
use std::fmt::Display;

/*
 * A single list cell : a value and the rest of the list.
 * Cells live in a bump arena so tails can be shared between lists.
 */
pub struct Node<'a, T> {
    value: T,
    next: List<'a, T>,
}

/*
 * An immutable singly linked list : either empty or a reference to a
 * head cell. Copying a List copies the reference, so every list built
 * on top of another one shares its whole tail with it.
 */
pub struct List<'a, T>(Option<&'a Node<'a, T>>);

// Manual impls : a derive would wrongly require T: Clone / T: Copy
impl<'a, T> Clone for List<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for List<'a, T> {}

impl<'a, T> List<'a, T> {
    /*
     * The terminal marker : a list with no elements.
     */
    pub fn empty() -> Self {
        List(None)
    }

    /*
     * Prepend <value> : allocates one fresh cell in <bump> whose tail
     * is this list. The receiver is untouched and remains valid.
     */
    pub fn cons(self, bump: &'a Bump, value: T) -> Self {
        List(Some(bump.alloc(Node { value, next: self })))
    }

    /*
     * Value of the head cell. Fails on the empty list.
     */
    pub fn first(&self) -> Result<&'a T> {
        let node = self.0.ok_or(anyhow!("invalid access: list is empty"))?;
        Ok(&node.value)
    }

    /*
     * Everything after the head cell. Fails on the empty list.
     */
    pub fn rest(&self) -> Result<List<'a, T>> {
        let node = self.0.ok_or(anyhow!("invalid access: list is empty"))?;
        Ok(node.next)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> Iter<'a, T> {
        Iter { current: self.0 }
    }

    /*
     * Rebuild the list with <transform> applied to every value, head
     * to tail. The result is freshly allocated : no cell is shared
     * with the input, which stays valid and unchanged.
     *
     * Recursion depth equals the list length.
     */
    pub fn map<U>(self, bump: &'a Bump, transform: impl Fn(&T) -> U) -> List<'a, U> {
        map_rec(self, bump, &transform)
    }
}

fn map_rec<'a, T, U, F>(list: List<'a, T>, bump: &'a Bump, transform: &F) -> List<'a, U>
where
    F: Fn(&T) -> U,
{
    match list.0 {
        None => List::empty(),
        Some(node) => {
            let value = transform(&node.value);
            let next = map_rec(node.next, bump, transform);
            List(Some(bump.alloc(Node { value, next })))
        }
    }
}

pub struct Iter<'a, T> {
    current: Option<&'a Node<'a, T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.current?;
        self.current = node.next.0;
        Some(&node.value)
    }
}

/*
 * Display the chain head to tail : v1 -> v2 -> v3, or () when empty.
 */
impl<'a, T: Display> Display for List<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_none() {
            return write!(f, "()");
        }
        let mut curr = self.0;
        while let Some(node) = curr {
            write!(f, "{}", node.value)?;
            if node.next.0.is_some() {
                write!(f, " -> ")?;
            }
            curr = node.next.0;
        }
        Ok(())
    }
}
