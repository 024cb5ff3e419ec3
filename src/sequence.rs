//! Label sequences: trimmable views into wire-format domain names.
//!
//! This is a private module. Its public types are re-exported by the crate
//! root.

use crate::cmp::{NameComparison, NameRelation};
use crate::label::Label;
use core::cmp::Ordering;
use core::{fmt, hash};

/// Fixed keys so hash values are stable across processes and platforms.
const HASH_KEY_0: u64 = 0x6c61_6265_6c73_6571;
const HASH_KEY_1: u64 = 0x7fa0_97ab_34a8_2c45;

//------------ LabelSequence -------------------------------------------------

/// A view of a contiguous run of labels of a wire-format domain name.
///
/// A label sequence borrows the octets and offset table of a
/// [`WireName`][crate::WireName] and selects a sub-range of its labels. It
/// never copies any of the name’s octets. Instead, it acts as a cursor:
/// the two trim operations [`strip_left`][Self::strip_left] and
/// [`strip_right`][Self::strip_right] narrow the range of retained labels,
/// label by label, and the range can never grow again or be re-attached to
/// a different name. At least one label is always retained.
///
/// The sequence carries the comparison logic of domain names: equality,
/// hashing, and the canonical DNS name comparison that determines whether
/// one name is an ancestor of another. All of these exist in two flavours.
/// The case-insensitive flavour folds ASCII letters before comparing,
/// which is how names are matched in the DNS; it backs the `PartialEq` and
/// `Hash` impls. The case-sensitive flavour – [`eq_case`][Self::eq_case],
/// [`compare_case`][Self::compare_case],
/// [`name_hash_case`][Self::name_hash_case] – compares the octets exactly
/// as given.
///
/// Any number of sequences can exist over the same name; trimming one
/// never affects another.
#[derive(Clone)]
pub struct LabelSequence<'a> {
    /// The wire-format octets of the whole underlying name.
    data: &'a [u8],

    /// The label offset table of the whole underlying name.
    offsets: &'a [u8],

    /// The index in `offsets` of the first retained label.
    first: usize,

    /// The index in `offsets` one past the last retained label.
    last: usize,
}

impl<'a> LabelSequence<'a> {
    /// Creates a sequence covering all labels of a name.
    pub(crate) fn new(data: &'a [u8], offsets: &'a [u8]) -> Self {
        LabelSequence {
            data,
            offsets,
            first: 0,
            last: offsets.len(),
        }
    }
}

/// # Trimming
///
impl LabelSequence<'_> {
    /// Removes the given number of labels from the left of the sequence.
    ///
    /// The leftmost labels are the most specific ones. At least one label
    /// has to remain, so `count` must be less than the current label
    /// count. Otherwise the method fails and the sequence is left exactly
    /// as it was. A count of zero is a no-op.
    pub fn strip_left(&mut self, count: usize) -> Result<(), OutOfRangeError> {
        if count >= self.label_count() {
            return Err(OutOfRangeError(()));
        }
        self.first += count;
        Ok(())
    }

    /// Removes the given number of labels from the right of the sequence.
    ///
    /// The rightmost label is the one nearest the root. At least one label
    /// has to remain, so `count` must be less than the current label
    /// count. Otherwise the method fails and the sequence is left exactly
    /// as it was. A count of zero is a no-op.
    pub fn strip_right(
        &mut self,
        count: usize,
    ) -> Result<(), OutOfRangeError> {
        if count >= self.label_count() {
            return Err(OutOfRangeError(()));
        }
        self.last -= count;
        Ok(())
    }
}

/// # Properties and Data Access
///
impl<'a> LabelSequence<'a> {
    /// Returns the number of labels currently retained.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.last - self.first
    }

    /// Returns whether the sequence still ends in the root label.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.data[usize::from(self.offsets[self.last - 1])] == 0
    }

    /// Returns the octets window spanning exactly the retained labels.
    ///
    /// The window is a direct view into the underlying name’s octets and
    /// includes the length octet of every retained label as well as the
    /// root terminator if the sequence still ends in the root label.
    #[must_use]
    pub fn as_slice(&self) -> &'a [u8] {
        let start = usize::from(self.offsets[self.first]);
        let end = if self.last == self.offsets.len() {
            self.data.len()
        } else {
            usize::from(self.offsets[self.last])
        };
        &self.data[start..end]
    }

    /// Returns the length in octets of the retained window.
    #[must_use]
    pub fn data_len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns a reference to the first retained label.
    #[must_use]
    pub fn first(&self) -> &'a Label {
        label_at(self.data, usize::from(self.offsets[self.first]))
    }

    /// Returns an iterator over the retained labels.
    ///
    /// The iterator starts at the most specific label. It is double-ended,
    /// so the root-ward walk used by the canonical comparison is simply
    /// the reverse direction.
    #[must_use]
    pub fn iter(&self) -> LabelIter<'a> {
        LabelIter {
            data: self.data,
            offsets: &self.offsets[self.first..self.last],
        }
    }
}

/// # Comparison and Hashing
///
impl LabelSequence<'_> {
    /// Compares two sequences, ignoring ASCII case.
    ///
    /// The sequences are compared label by label, starting at the
    /// root-ward end and moving towards the most specific label, as long
    /// as the labels match. The result carries the
    /// [relation][NameRelation] between the sequences, the number of
    /// labels that matched, and, if the sequences diverge below a shared
    /// suffix, the ordering of the first differing label pair.
    ///
    /// An absolute and a relative sequence are always
    /// [disjoint][NameRelation::Disjoint], as are two sequences whose
    /// root-ward-most labels already differ.
    #[must_use]
    pub fn compare(&self, other: &Self) -> NameComparison {
        self.compare_labels(other, false)
    }

    /// Compares two sequences, taking ASCII case into account.
    ///
    /// This is [`compare`][Self::compare] without the case folding: label
    /// octets have to match exactly.
    #[must_use]
    pub fn compare_case(&self, other: &Self) -> NameComparison {
        self.compare_labels(other, true)
    }

    fn compare_labels(
        &self,
        other: &Self,
        case_sensitive: bool,
    ) -> NameComparison {
        if self.is_absolute() != other.is_absolute() {
            return NameComparison::new(
                NameRelation::Disjoint,
                0,
                Ordering::Equal,
            );
        }
        let mut this = self.iter();
        let mut that = other.iter();
        let mut common = 0;
        loop {
            match (this.next_back(), that.next_back()) {
                (Some(left), Some(right)) => {
                    let order = if case_sensitive {
                        left.as_slice().cmp(right.as_slice())
                    } else {
                        left.cmp(right)
                    };
                    if order != Ordering::Equal {
                        return if common == 0 {
                            NameComparison::new(
                                NameRelation::Disjoint,
                                0,
                                Ordering::Equal,
                            )
                        } else {
                            NameComparison::new(
                                NameRelation::CommonAncestor,
                                common,
                                order,
                            )
                        };
                    }
                    common += 1;
                }
                (Some(_), None) => {
                    return NameComparison::new(
                        NameRelation::Subdomain,
                        common,
                        Ordering::Equal,
                    )
                }
                (None, Some(_)) => {
                    return NameComparison::new(
                        NameRelation::Superdomain,
                        common,
                        Ordering::Equal,
                    )
                }
                (None, None) => {
                    return NameComparison::new(
                        NameRelation::Equal,
                        common,
                        Ordering::Equal,
                    )
                }
            }
        }
    }

    /// Returns whether two sequences consist of exactly the same octets.
    ///
    /// This is the case-sensitive flavour of equality. The `PartialEq`
    /// impl provides the case-insensitive flavour used for matching names
    /// in the DNS. Sequences that are equal under this method are always
    /// equal under `==` as well.
    #[must_use]
    pub fn eq_case(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }

    /// Returns a hash value over the retained labels, ignoring ASCII case.
    ///
    /// The value is computed over each retained label’s length and
    /// case-folded content octets and is stable across processes, so it
    /// can be used for hash tables that outlive the process as well as
    /// message compression tables. Two sequences that compare equal under
    /// `==` always hash equal.
    #[must_use]
    pub fn name_hash(&self) -> u64 {
        use core::hash::{Hash, Hasher};

        let mut hasher =
            siphasher::sip::SipHasher13::new_with_keys(HASH_KEY_0, HASH_KEY_1);
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Returns a hash value over the retained labels’ exact octets.
    ///
    /// Like [`name_hash`][Self::name_hash] but without case folding:
    /// sequences that are equal under [`eq_case`][Self::eq_case] hash
    /// equal.
    #[must_use]
    pub fn name_hash_case(&self) -> u64 {
        use core::hash::Hasher;

        let mut hasher =
            siphasher::sip::SipHasher13::new_with_keys(HASH_KEY_0, HASH_KEY_1);
        hasher.write(self.as_slice());
        hasher.finish()
    }

    /// Writes the retained labels in presentation order for diagnostics.
    pub(crate) fn fmt_labels(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.label_count() == 1 && self.is_absolute() {
            return f.write_str(".");
        }
        for (index, label) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

//--- PartialEq and Eq

impl PartialEq for LabelSequence<'_> {
    /// Returns whether two sequences are equal, ignoring ASCII case.
    ///
    /// Sequences are equal if they consist of the same number of labels
    /// and all their labels are equal ignoring the case of ASCII letters.
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for LabelSequence<'_> {}

//--- Hash

impl hash::Hash for LabelSequence<'_> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        // Each label hashes its length and folded content, so hashing the
        // labels in order is consistent with the PartialEq impl.
        for label in self.iter() {
            label.hash(state)
        }
    }
}

//--- Debug

impl fmt::Debug for LabelSequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("LabelSequence(")?;
        self.fmt_labels(f)?;
        f.write_str(")")
    }
}

//------------ LabelIter -----------------------------------------------------

/// An iterator over the labels retained by a label sequence.
#[derive(Clone, Debug)]
pub struct LabelIter<'a> {
    /// The wire-format octets of the whole underlying name.
    data: &'a [u8],

    /// The offsets of the labels still to be returned.
    offsets: &'a [u8],
}

impl<'a> Iterator for LabelIter<'a> {
    type Item = &'a Label;

    fn next(&mut self) -> Option<Self::Item> {
        let (&pos, rest) = self.offsets.split_first()?;
        self.offsets = rest;
        Some(label_at(self.data, usize::from(pos)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.offsets.len(), Some(self.offsets.len()))
    }
}

impl<'a> DoubleEndedIterator for LabelIter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (&pos, rest) = self.offsets.split_last()?;
        self.offsets = rest;
        Some(label_at(self.data, usize::from(pos)))
    }
}

impl ExactSizeIterator for LabelIter<'_> {}

/// Returns the label starting at the given position.
fn label_at(data: &[u8], pos: usize) -> &Label {
    let len = usize::from(data[pos]);
    unsafe { Label::from_slice_unchecked(&data[pos + 1..pos + 1 + len]) }
}

//============ Error Types ===================================================

//------------ OutOfRangeError -----------------------------------------------

/// A trim operation would have removed every label of a sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OutOfRangeError(());

//--- Display and Error

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("label strip count out of range")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfRangeError {}

//============ Testing =======================================================
