//! A set of lowercase ASCII words, based on a 26-ary prefix tree.

use core::fmt;
use core::mem;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::InvalidCharacter;


/// A set of words over `'a'..='z'`, stored as a prefix tree.
///
/// Every node has one child slot per letter. Nodes are only ever created
/// on the path of an inserted word, so two trees holding the same words
/// have the same shape, and compare equal regardless of insertion order.
pub struct PrefixTree {
    root: Node,
    len: usize,
    node_count: usize,
}

impl Default for PrefixTree {
    fn default() -> Self {
        PrefixTree::new()
    }
}

impl PrefixTree {
    /// Creates a tree consisting of a single empty root. The same as `Default`.
    pub const fn new() -> Self {
        PrefixTree { root: Node::new(), len: 0, node_count: 1 }
    }

    /// Returns the number of distinct words in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if and only if no word (not even the empty word) was inserted.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes in the tree, including the root.
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Inserts a word, creating the nodes missing along its path.
    ///
    /// Returns `Ok(true)` if the word was not yet in the tree, and
    /// `Ok(false)` if it already was. If the word contains anything other
    /// than `'a'..='z'`, an error is returned and the tree is left untouched.
    pub fn insert<Q>(&mut self, word: &Q) -> Result<bool, InvalidCharacter>
    where
        Q: ?Sized + AsRef<[u8]>,
    {
        let word = word.as_ref();

        let slots = match alphabet::slots(word) {
            Ok(slots) => slots,
            Err(error) => {
                tracing::debug!(
                    byte = error.byte(),
                    position = error.position(),
                    "rejected word with a character outside 'a'..='z'"
                );
                return Err(error);
            }
        };

        let mut created = 0;
        let node = self.root.search_or_insert(&slots, &mut created);
        let is_new = !mem::replace(&mut node.terminal, true);

        self.node_count += created;
        if is_new {
            self.len += 1;
        }

        tracing::trace!(length = word.len(), created, is_new, "inserted word");

        Ok(is_new)
    }

    /// Inserts every word in order, stopping at the first invalid one.
    ///
    /// Words preceding the invalid one remain inserted.
    pub fn insert_all<I>(&mut self, words: I) -> Result<(), InvalidCharacter>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        for word in words {
            self.insert(&word)?;
        }
        Ok(())
    }

    /// Returns `true` if and only if exactly this word was inserted.
    ///
    /// Words containing characters outside of `'a'..='z'` are never found.
    pub fn search<Q>(&self, word: &Q) -> bool
    where
        Q: ?Sized + AsRef<[u8]>,
    {
        self.root
            .search(word.as_ref())
            .is_some_and(|node| node.terminal)
    }

    /// Returns `true` if some inserted word starts with `prefix`.
    ///
    /// The empty prefix is always found, even in an empty tree.
    pub fn starts_with<Q>(&self, prefix: &Q) -> bool
    where
        Q: ?Sized + AsRef<[u8]>,
    {
        self.root.search(prefix.as_ref()).is_some()
    }

    /// An iterator over all words.
    ///
    /// Iteration proceeds in lexicographic order.
    pub fn iter(&self) -> Words<'_> {
        Words::new(&self.root, String::new())
    }

    /// An iterator over the words starting with `prefix`, including
    /// `prefix` itself if it was inserted.
    ///
    /// Iteration proceeds in lexicographic order.
    pub fn words_with_prefix<Q>(&self, prefix: &Q) -> Words<'_>
    where
        Q: ?Sized + AsRef<[u8]>,
    {
        let prefix = prefix.as_ref();

        // a successful search implies the prefix is plain ASCII
        self.root.search(prefix).map_or_else(
            Words::empty,
            |node| Words::new(node, prefix.iter().copied().map(char::from).collect()),
        )
    }
}

impl<S, const N: usize> TryFrom<[S; N]> for PrefixTree
where
    S: AsRef<[u8]>,
{
    type Error = InvalidCharacter;

    fn try_from(words: [S; N]) -> Result<Self, Self::Error> {
        let mut tree = PrefixTree::new();
        tree.insert_all(words)?;
        Ok(tree)
    }
}

impl<'a> IntoIterator for &'a PrefixTree {
    type IntoIter = Words<'a>;
    type Item = String;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Copies the nodes bottom-up from an explicit stack of partially
/// copied ancestors, so that the stack does not grow with word length.
impl Clone for PrefixTree {
    fn clone(&self) -> Self {
        let mut ancestors: Vec<CloneFrame<'_>> = Vec::new();
        let mut current = CloneFrame::new(&self.root);

        let root = loop {
            if let Some(child) = current.next_child() {
                ancestors.push(mem::replace(&mut current, CloneFrame::new(child)));
                continue;
            }

            let copy = current.copy;
            match ancestors.pop() {
                Some(parent) => {
                    current = parent;
                    current.copy.children[current.next_slot - 1] = Some(Box::new(copy));
                }
                None => break copy,
            }
        };

        PrefixTree { root, len: self.len, node_count: self.node_count }
    }
}

struct CloneFrame<'a> {
    source: &'a Node,
    /// Slot after the child most recently handed out.
    next_slot: usize,
    copy: Node,
}

impl<'a> CloneFrame<'a> {
    fn new(source: &'a Node) -> Self {
        let mut copy = Node::new();
        copy.terminal = source.terminal;
        CloneFrame { source, next_slot: 0, copy }
    }

    fn next_child(&mut self) -> Option<&'a Node> {
        let source = self.source;

        while self.next_slot < ALPHABET_LEN {
            let slot = self.next_slot;
            self.next_slot += 1;

            if let Some(child) = source.children[slot].as_deref() {
                return Some(child);
            }
        }

        None
    }
}

impl PartialEq for PrefixTree {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len || self.node_count != other.node_count {
            return false;
        }

        let mut pending = vec![(&self.root, &other.root)];

        while let Some((left, right)) = pending.pop() {
            if left.terminal != right.terminal {
                return false;
            }

            for (left, right) in left.children.iter().zip(&right.children) {
                match (left.as_deref(), right.as_deref()) {
                    (Some(left), Some(right)) => pending.push((left, right)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl Eq for PrefixTree {}

/// Hashes the shape of the tree in preorder: for every node, its terminal
/// flag and the set of occupied slots.
impl Hash for PrefixTree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);

        let mut pending = vec![&self.root];

        while let Some(node) = pending.pop() {
            let mut occupied = 0u32;

            for (slot, child) in node.children.iter().enumerate().rev() {
                if let Some(child) = child.as_deref() {
                    occupied |= 1u32 << slot;
                    pending.push(child);
                }
            }

            node.terminal.hash(state);
            occupied.hash(state);
        }
    }
}

impl fmt::Debug for PrefixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Releases the nodes one by one instead of through nested drop glue,
/// so that the stack does not grow with the length of the longest word.
impl Drop for PrefixTree {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take_children().collect();

        while let Some(mut node) = pending.pop() {
            pending.extend(node.take_children());
        }
    }
}

struct Node {
    children: [Option<Box<Node>>; ALPHABET_LEN],
    terminal: bool,
}

impl Node {
    const EMPTY_SLOT: Option<Box<Node>> = None;

    const fn new() -> Self {
        Node {
            children: [Self::EMPTY_SLOT; ALPHABET_LEN],
            terminal: false,
        }
    }

    /// Occupied slots in letter order.
    fn children(&self) -> impl DoubleEndedIterator<Item = (char, &Node)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(slot, child)| Some((alphabet::letter(slot), child.as_deref()?)))
    }

    fn take_children(&mut self) -> impl Iterator<Item = Box<Node>> + '_ {
        self.children.iter_mut().filter_map(Option::take)
    }

    fn search(&self, bytes: &[u8]) -> Option<&Self> {
        bytes.iter().try_fold(self, |node, &byte| {
            node.children[alphabet::slot(byte)?].as_deref()
        })
    }

    /// Walks the given slots, creating each missing node on the way.
    /// `created` is incremented once per new node.
    fn search_or_insert(&mut self, slots: &[usize], created: &mut usize) -> &mut Self {
        let mut node = self;

        for &slot in slots {
            node = &mut **node.children[slot].get_or_insert_with(|| {
                *created += 1;
                Box::new(Node::new())
            });
        }

        node
    }
}

/// Iterator over the words of a (sub)tree.
///
/// The words are produced in lexicographic order: a word comes before all
/// of its extensions, and siblings are visited in letter order.
#[derive(Clone)]
pub struct Words<'a> {
    stack: Vec<Frame<'a>>,
    word: String,
}

#[derive(Clone)]
struct Frame<'a> {
    node: &'a Node,
    /// Length of the word leading to the parent of `node`.
    depth: usize,
    letter: Option<char>,
}

impl<'a> Words<'a> {
    fn new(node: &'a Node, prefix: String) -> Self {
        let depth = prefix.len();
        Words {
            stack: vec![Frame { node, depth, letter: None }],
            word: prefix,
        }
    }

    fn empty() -> Self {
        Words { stack: Vec::new(), word: String::new() }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(Frame { node, depth, letter }) = self.stack.pop() {
            self.word.truncate(depth);
            self.word.extend(letter);

            // pushed in reverse, so that the smallest letter is popped first
            let depth = self.word.len();
            self.stack.extend(node.children().rev().map(|(letter, child)| {
                Frame { node: child, depth, letter: Some(letter) }
            }));

            if node.terminal {
                return Some(self.word.clone());
            }
        }

        None
    }
}

impl FusedIterator for Words<'_> {}
