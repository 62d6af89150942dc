// see https://en.wikipedia.org/wiki/Trie
// Nodes live in a flat arena (a `Vec`), addressed by index, with the root at index 0.

mod iteration;


use iteration::Words;

const ALPHABET_SIZE: usize = 26;
const ROOT: NodeId = NodeId(0);

/// Whitespace trimmed from both ends of every word and prefix.
const TRIM_CHARS: [char; 4] = [' ', '\t', '\n', '\r'];

/// Index of a node in the arena of its `PrefixIndex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeId(usize);

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
struct Node {
    /// One slot per lowercase ASCII letter, `children[0]` is 'a'.
    children: [Option<NodeId>; ALPHABET_SIZE],
    /// The path from the root to this node spells a stored word.
    terminal: bool,
}

impl Node {
    fn child(&self, letter: u8) -> Option<NodeId> {
        self.children[slot(letter)]
    }

    /// Children in alphabetical order, together with their edge letter.
    fn children(&self) -> impl DoubleEndedIterator<Item = (u8, NodeId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, child)| child.map(|id| (b'a' + i as u8, id)))
    }
}

fn slot(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "edge keys must be lowercase ASCII letters");
    (letter - b'a') as usize
}

/// A set of words, queryable by prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrefixIndex {
    nodes: Vec<Node>,
    word_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertResult {
    /// The word was new and has been stored.
    Inserted,
    /// The word (after normalization) was already stored, nothing changed.
    AlreadyPresent,
    /// The word contained no letters, nothing was stored.
    Ignored,
}

/// Normalizes a word or prefix: trims surrounding whitespace, drops everything that is not an
/// ASCII letter, and lowercases the rest.
///
/// Insertion and lookup share this, so "Apple!" is stored as "apple" and the prefix "AP-" finds it.
pub fn normalize(input: &str) -> String {
    input
        .trim_matches(&TRIM_CHARS[..])
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            word_count: 0,
        }
    }

    /// Number of distinct (normalized) words stored.
    /// O(1).
    pub fn count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes in the tree, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Stores `word`. O(L), where L is the length of the word.
    ///
    /// Inserting the same word twice is a no-op the second time, and so is inserting a word that
    /// normalizes to the empty string.
    pub fn insert(&mut self, word: &str) -> InsertResult {
        let word = normalize(word);
        if word.is_empty() {
            return InsertResult::Ignored;
        }

        let mut current = ROOT;
        for letter in word.bytes() {
            current = match self.node(current).child(letter) {
                Some(child) => child,
                None => {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(Node::default());
                    self.nodes[current.0].children[slot(letter)] = Some(child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current.0];
        if node.terminal {
            InsertResult::AlreadyPresent
        } else {
            node.terminal = true;
            self.word_count += 1;
            InsertResult::Inserted
        }
    }

    /// Returns all stored words starting with `prefix`, sorted alphabetically.
    /// The empty prefix matches every word.
    ///
    /// O(L + K*M + K*log(K)), where L is the prefix length, K the number of results, and M their
    /// average length.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        let prefix = normalize(prefix);
        let Some(start) = self.find(&prefix) else {
            return Vec::new();
        };
        let mut words: Vec<String> = Words::new(self, start, prefix).collect();
        // The traversal already visits children in alphabetical order, but don't rely on it.
        words.sort_unstable();
        words
    }

    /// Number of stored words starting with `prefix`, without materializing them.
    pub fn count_with_prefix(&self, prefix: &str) -> usize {
        let prefix = normalize(prefix);
        let Some(start) = self.find(&prefix) else {
            return 0;
        };
        let mut count = 0;
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.terminal {
                count += 1;
            }
            stack.extend(node.children().map(|(_, child)| child));
        }
        count
    }

    /// Follows one edge per letter of the (already normalized) `prefix`, starting at the root.
    fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .bytes()
            .try_fold(ROOT, |current, letter| self.node(current).child(letter))
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut index = Self::new();
        index.extend(words);
        index
    }
}
