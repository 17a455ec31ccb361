use super::Node;

/// A handle to a subtree that can be split into its left subtree, its entry, and its right
/// subtree.
pub trait NodeRef: Sized {
    type Item;
    fn split(self) -> (Option<Self>, Self::Item, Option<Self>);
}

impl<'a, K, V> NodeRef for &'a Node<K, V> {
    type Item = (&'a K, &'a V);

    fn split(self) -> (Option<Self>, (&'a K, &'a V), Option<Self>) {
        (self.left.as_deref(), (&self.key, &self.value), self.right.as_deref())
    }
}

impl<'a, K, V> NodeRef for &'a mut Node<K, V> {
    type Item = (&'a K, &'a mut V);

    fn split(self) -> (Option<Self>, (&'a K, &'a mut V), Option<Self>) {
        let Node { ref mut left, ref mut right, ref key, ref mut value, .. } = *self;
        (left.as_deref_mut(), (key, value), right.as_deref_mut())
    }
}

impl<K, V> NodeRef for Box<Node<K, V>> {
    type Item = (K, V);

    fn split(self) -> (Option<Self>, (K, V), Option<Self>) {
        let node = *self;
        (node.left, (node.key, node.value), node.right)
    }
}

/// An in-order traversal that holds the entries of the ancestors still to be yielded, each
/// paired with its unvisited right subtree.
pub struct Iter<N> where N: NodeRef {
    pending: Vec<(N::Item, Option<N>)>,
    size: usize,
}

impl<N> Iter<N> where N: NodeRef {
    pub fn new(root: Option<N>, size: usize) -> Iter<N> {
        let mut it = Iter { pending: vec![], size };
        it.descend(root);
        it
    }

    fn descend(&mut self, mut link: Option<N>) {
        while let Some(node) = link {
            let (left, item, right) = node.split();
            self.pending.push((item, right));
            link = left;
        }
    }
}

impl<N> Clone for Iter<N> where N: NodeRef + Clone, N::Item: Clone {
    fn clone(&self) -> Iter<N> {
        Iter { pending: self.pending.clone(), size: self.size }
    }
}

impl<N> Iterator for Iter<N> where N: NodeRef {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        let (item, right) = self.pending.pop()?;
        self.descend(right);
        self.size -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}
