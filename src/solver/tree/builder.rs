//! Outcome tree construction
//!
//! Partitions a candidate list by the color each letter of a guess would
//! receive, one letter position per level.

use crate::core::{Color, Constraint, PROBE_GROUP, WORD_LENGTH, Word};
use crate::solver::matcher::matches;

/// Final partition cell reached after the last letter position
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf<'w> {
    p: f64,
    list: Vec<&'w Word>,
}

impl<'w> Leaf<'w> {
    /// Probability of reaching this leaf from its parent
    #[must_use]
    pub const fn p(&self) -> f64 {
        self.p
    }

    #[must_use]
    pub fn list(&self) -> &[&'w Word] {
        &self.list
    }
}

/// A child of an [`OutcomeNode`]
#[derive(Debug, Clone, PartialEq)]
pub enum Branch<'w> {
    Node(Box<OutcomeNode<'w>>),
    Leaf(Leaf<'w>),
}

impl<'w> Branch<'w> {
    /// Conditional probability of this branch given its parent
    #[must_use]
    pub fn p(&self) -> f64 {
        match self {
            Self::Node(node) => node.p,
            Self::Leaf(leaf) => leaf.p,
        }
    }

    /// Candidates consistent with the path down to this branch
    #[must_use]
    pub fn list(&self) -> &[&'w Word] {
        match self {
            Self::Node(node) => &node.list,
            Self::Leaf(leaf) => &leaf.list,
        }
    }
}

/// One level of the outcome tree
///
/// Children are indexed by [`Color::index`]. A color whose partition is
/// empty has no child.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeNode<'w> {
    p: f64,
    list: Vec<&'w Word>,
    children: [Option<Branch<'w>>; 3],
}

impl<'w> OutcomeNode<'w> {
    /// Conditional probability of reaching this node from its parent (1 at the root)
    #[must_use]
    pub const fn p(&self) -> f64 {
        self.p
    }

    #[must_use]
    pub fn list(&self) -> &[&'w Word] {
        &self.list
    }

    #[must_use]
    pub fn child(&self, color: Color) -> Option<&Branch<'w>> {
        self.children[color.index()].as_ref()
    }

    /// Existing children in green, yellow, black order
    pub fn children(&self) -> impl Iterator<Item = (Color, &Branch<'w>)> {
        Color::ALL
            .into_iter()
            .zip(&self.children)
            .filter_map(|(color, child)| child.as_ref().map(|branch| (color, branch)))
    }
}

/// Build the outcome tree of `guess` over `candidates`
///
/// Every candidate is treated as equally likely to be the answer. Level `d`
/// splits each node's list by the color letter `d` of the guess would
/// receive on its own: green when the candidate has it at `d`, yellow when
/// elsewhere, black when absent.
///
/// # Examples
/// ```
/// use wordle_collision::core::{Color, Word};
/// use wordle_collision::solver::build_tree;
///
/// let words: Vec<Word> = ["cigar", "rebut"].iter().map(|w| Word::new(*w).unwrap()).collect();
/// let candidates: Vec<&Word> = words.iter().collect();
///
/// let tree = build_tree(&words[0], &candidates);
/// let green = tree.child(Color::Green).unwrap();
/// assert_eq!(green.list(), &[&words[0]]);
/// assert!((green.p() - 0.5).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn build_tree<'w>(guess: &Word, candidates: &[&'w Word]) -> OutcomeNode<'w> {
    grow(guess, 1.0, candidates.to_vec(), 0)
}

fn grow<'w>(guess: &Word, p: f64, list: Vec<&'w Word>, depth: usize) -> OutcomeNode<'w> {
    let letter = guess.char_at(depth);

    let children = Color::ALL.map(|color| {
        if list.is_empty() {
            return None;
        }

        let probe = Constraint::for_word(color, depth, letter, PROBE_GROUP);
        let matched = matches(list.iter().copied(), &[probe]);
        if matched.is_empty() {
            return None;
        }

        let child_p = matched.len() as f64 / list.len() as f64;
        let branch = if depth + 1 == WORD_LENGTH {
            Branch::Leaf(Leaf {
                p: child_p,
                list: matched,
            })
        } else {
            Branch::Node(Box::new(grow(guess, child_p, matched, depth + 1)))
        };
        Some(branch)
    });

    OutcomeNode { p, list, children }
}
