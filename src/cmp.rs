//! The outcome of comparing domain names.
//!
//! This is a private module. Its public types are re-exported by the crate
//! root.

use core::cmp::Ordering;
use core::fmt;

//------------ NameRelation --------------------------------------------------

/// How two label sequences relate to each other in the DNS name tree.
///
/// The relation is determined by comparing the sequences label by label
/// starting at the root-ward end. It is reported from the point of view of
/// the sequence the comparison was called on: if that sequence is an
/// ancestor of the argument, the relation is [`Superdomain`]; if it is a
/// descendant, [`Subdomain`].
///
/// [`Superdomain`]: NameRelation::Superdomain
/// [`Subdomain`]: NameRelation::Subdomain
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NameRelation {
    /// Both sequences consist of the same labels.
    Equal,

    /// The sequence is a proper descendant of the other sequence.
    Subdomain,

    /// The sequence is a proper ancestor of the other sequence.
    Superdomain,

    /// The sequences share a non-empty suffix but diverge above it.
    CommonAncestor,

    /// The sequences share no labels at all.
    ///
    /// This is also the outcome when one sequence is absolute and the
    /// other is not: such sequences never share a position in the name
    /// tree, whatever their labels look like.
    Disjoint,
}

//--- Display

impl fmt::Display for NameRelation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            NameRelation::Equal => "equal",
            NameRelation::Subdomain => "subdomain",
            NameRelation::Superdomain => "superdomain",
            NameRelation::CommonAncestor => "common ancestor",
            NameRelation::Disjoint => "disjoint",
        })
    }
}

//------------ NameComparison ------------------------------------------------

/// The result of comparing two label sequences.
///
/// This combines the [relation][NameRelation] between the sequences with
/// the number of labels they share and, where the sequences diverge, the
/// ordering of the first differing label pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NameComparison {
    relation: NameRelation,
    common_labels: usize,
    order: Ordering,
}

impl NameComparison {
    /// Creates a new comparison result from its parts.
    pub(crate) fn new(
        relation: NameRelation,
        common_labels: usize,
        order: Ordering,
    ) -> Self {
        NameComparison {
            relation,
            common_labels,
            order,
        }
    }

    /// Returns the relation between the two sequences.
    #[must_use]
    pub fn relation(&self) -> NameRelation {
        self.relation
    }

    /// Returns the number of labels the two sequences share.
    ///
    /// Shared labels are counted from the root-ward end inward. For
    /// [`NameRelation::Equal`] this is the full label count, for
    /// [`NameRelation::Disjoint`] it is zero.
    #[must_use]
    pub fn common_labels(&self) -> usize {
        self.common_labels
    }

    /// Returns the ordering between the first differing labels.
    ///
    /// This is only meaningful for [`NameRelation::CommonAncestor`], where
    /// it carries the canonical ordering of the label pair at which the
    /// sequences diverge. For all other relations it is
    /// [`Ordering::Equal`].
    #[must_use]
    pub fn order(&self) -> Ordering {
        self.order
    }
}
