use std::iter::FusedIterator;

use super::{NodeId, PrefixIndex};

enum Work {
    /// Visit a node, which is reached via `letter` (`None` for the start node).
    Visit { letter: Option<u8>, node: NodeId },
    /// Remove the last letter from the current path, after its subtree has been processed.
    Backtrack,
}

/// External pre-order depth-first iterator over the words below a node.
///
/// Uses an explicit work stack instead of recursion, so long common prefixes cannot overflow the
/// call stack. Children are visited in alphabetical order, and a word comes before its extensions,
/// hence the words are yielded in sorted order.
pub struct Words<'index> {
    index: &'index PrefixIndex,

    /// A worklist of nodes still to process, interleaved with markers where to backtrack.
    stack: Vec<Work>,

    /// The word spelled by the path from the root to the current node.
    path: String,
}

impl<'index> Words<'index> {
    /// `prefix` must be the word spelled by the path from the root to `start`.
    pub(super) fn new(index: &'index PrefixIndex, start: NodeId, prefix: String) -> Self {
        Self {
            index,
            stack: vec![Work::Visit { letter: None, node: start }],
            path: prefix,
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(work) = self.stack.pop() {
            match work {
                Work::Visit { letter, node } => {
                    if let Some(letter) = letter {
                        self.path.push(char::from(letter));
                        self.stack.push(Work::Backtrack);
                    }
                    let node = self.index.node(node);
                    // Reversed, so that the alphabetically first child is popped first.
                    self.stack.extend(
                        node.children()
                            .rev()
                            .map(|(letter, node)| Work::Visit { letter: Some(letter), node }),
                    );
                    if node.terminal {
                        return Some(self.path.clone());
                    }
                }
                Work::Backtrack => {
                    self.path.pop();
                }
            }
        }
        None
    }
}

impl FusedIterator for Words<'_> {}
