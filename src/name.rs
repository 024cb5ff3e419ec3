//! Wire-format domain names with a per-label offset table.
//!
//! This is a private module. Its public types are re-exported by the crate
//! root.

use crate::label::{Label, LabelTypeError, SplitLabelError};
use crate::sequence::LabelSequence;
use core::{fmt, hash};
use octseq::octets::Octets;
use smallvec::SmallVec;

//------------ WireName ------------------------------------------------------

/// A domain name in wire format with a precomputed label offset table.
///
/// The type wraps an octets sequence and guarantees that it always contains
/// a correctly encoded domain name: a sequence of labels, each consisting
/// of a length octet between 0 and 63 followed by that many content octets.
/// An absolute name ends in the empty root label; a relative name simply
/// lacks this terminator. Case is preserved as given.
///
/// Alongside the octets, the name keeps the position of every label, so
/// that views into the name can be taken without rescanning the encoding.
/// The name is immutable once built; all slicing, comparing and hashing
/// happens through [`LabelSequence`] views obtained via
/// [`label_sequence`][Self::label_sequence], any number of which can exist
/// independently over the same name.
#[derive(Clone)]
pub struct WireName<Octs> {
    /// The wire-format octets of the name.
    octets: Octs,

    /// The position of each label in `octets`, left to right.
    ///
    /// Never empty. Since a name is at most 255 octets long, the
    /// positions always fit into a `u8`.
    offsets: SmallVec<[u8; 24]>,
}

/// # Creating Values
///
impl<Octs> WireName<Octs> {
    /// Domain names have a maximum length of 255 octets.
    pub const MAX_LEN: usize = 255;

    /// Creates a name from an octets sequence.
    ///
    /// This will only succeed if `octets` contains a properly encoded
    /// domain name, absolute or relative. The label offset table is built
    /// while checking.
    pub fn from_octets(octets: Octs) -> Result<Self, NameError>
    where
        Octs: AsRef<[u8]>,
    {
        let offsets = Self::scan_slice(octets.as_ref())?;
        Ok(WireName { octets, offsets })
    }

    /// Returns a name consisting of the root label only.
    pub fn root() -> Self
    where
        Octs: From<&'static [u8]>,
    {
        WireName {
            octets: b"\0".as_ref().into(),
            offsets: SmallVec::from_slice(&[0]),
        }
    }

    /// Checks an octets slice and collects the label positions.
    fn scan_slice(slice: &[u8]) -> Result<SmallVec<[u8; 24]>, NameError> {
        if slice.is_empty() {
            return Err(NameError::ShortInput);
        }
        if slice.len() > Self::MAX_LEN {
            return Err(NameError::LongName);
        }
        let mut offsets = SmallVec::new();
        let mut pos = 0;
        let mut tmp = slice;
        while !tmp.is_empty() {
            offsets.push(pos as u8);
            let (label, tail) = Label::split_from(tmp)?;
            if label.is_root() && !tail.is_empty() {
                return Err(NameError::TrailingData);
            }
            pos += label.len() + 1;
            tmp = tail;
        }
        Ok(offsets)
    }
}

/// # Conversions
///
impl<Octs> WireName<Octs> {
    /// Returns a reference to the underlying octets sequence.
    pub fn as_octets(&self) -> &Octs {
        &self.octets
    }

    /// Converts the name into the underlying octets sequence.
    pub fn into_octets(self) -> Octs {
        self.octets
    }

    /// Returns a reference to the underlying octets slice.
    pub fn as_slice(&self) -> &[u8]
    where
        Octs: AsRef<[u8]>,
    {
        self.octets.as_ref()
    }
}

/// # Properties
///
impl<Octs: AsRef<[u8]>> WireName<Octs> {
    /// Returns the length of the name in octets.
    pub fn len(&self) -> usize {
        self.octets.as_ref().len()
    }

    /// Returns whether the name is the root label only.
    pub fn is_root(&self) -> bool {
        self.octets.as_ref().len() == 1
    }

    /// Returns whether the name is absolute.
    ///
    /// An absolute name ends in the root label.
    pub fn is_absolute(&self) -> bool {
        let last = self.offsets[self.offsets.len() - 1];
        self.octets.as_ref()[usize::from(last)] == 0
    }
}

/// # Working with Labels
///
impl<Octs: AsRef<[u8]>> WireName<Octs> {
    /// Returns the number of labels in the name.
    pub fn label_count(&self) -> usize {
        self.offsets.len()
    }

    /// Returns the position of the given label in the octets.
    ///
    /// Labels are indexed left to right, i.e., starting at the
    /// most-specific label.
    ///
    /// # Panics
    ///
    /// The method panics if `label` is not less than
    /// [`label_count`][Self::label_count].
    pub fn label_offset(&self, label: usize) -> usize {
        self.check_label(label);
        usize::from(self.offsets[label])
    }

    /// Returns the octets of the name from the given label on.
    ///
    /// # Panics
    ///
    /// The method panics if `label` is not less than
    /// [`label_count`][Self::label_count].
    pub fn slice_from(&self, label: usize) -> &[u8] {
        &self.octets.as_ref()[self.label_offset(label)..]
    }

    /// Returns a new name covering the suffix starting at the given label.
    ///
    /// The returned name shares the underlying octets via their range
    /// mechanism and carries its own offset table, so it is independent of
    /// `self`.
    ///
    /// # Panics
    ///
    /// The method panics if `label` is not less than
    /// [`label_count`][Self::label_count].
    pub fn split(&self, label: usize) -> WireName<Octs::Range<'_>>
    where
        Octs: Octets,
    {
        self.check_label(label);
        let base = self.offsets[label];
        WireName {
            octets: self.octets.range(usize::from(base)..),
            offsets: self.offsets[label..]
                .iter()
                .map(|&pos| pos - base)
                .collect(),
        }
    }

    /// Returns a label sequence covering the whole name.
    pub fn label_sequence(&self) -> LabelSequence<'_> {
        LabelSequence::new(self.octets.as_ref(), &self.offsets)
    }

    /// Panics if `label` is not a valid label index.
    fn check_label(&self, label: usize) {
        if label >= self.offsets.len() {
            panic!("label index out of range");
        }
    }
}

//--- PartialEq and Eq

impl<Octs, Other> PartialEq<WireName<Other>> for WireName<Octs>
where
    Octs: AsRef<[u8]>,
    Other: AsRef<[u8]>,
{
    /// Returns whether two names are equal, ignoring ASCII case.
    fn eq(&self, other: &WireName<Other>) -> bool {
        self.label_sequence() == other.label_sequence()
    }
}

impl<Octs: AsRef<[u8]>> Eq for WireName<Octs> {}

//--- Hash

impl<Octs: AsRef<[u8]>> hash::Hash for WireName<Octs> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.label_sequence().hash(state)
    }
}

//--- Debug

impl<Octs: AsRef<[u8]>> fmt::Debug for WireName<Octs> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("WireName(")?;
        self.label_sequence().fmt_labels(f)?;
        f.write_str(")")
    }
}

//============ Error Types ===================================================

//------------ NameError -----------------------------------------------------

/// A domain name wasn’t encoded correctly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    /// The encoding contained an unknown or disallowed label type.
    BadLabel(LabelTypeError),

    /// The encoding contained a compression pointer.
    CompressedName,

    /// The name was longer than 255 octets.
    LongName,

    /// There was more data after the root label was encountered.
    TrailingData,

    /// The input was empty or ended in the middle of a label.
    ShortInput,
}

//--- From

impl From<LabelTypeError> for NameError {
    fn from(err: LabelTypeError) -> NameError {
        NameError::BadLabel(err)
    }
}

impl From<SplitLabelError> for NameError {
    fn from(err: SplitLabelError) -> NameError {
        match err {
            SplitLabelError::Pointer(_) => NameError::CompressedName,
            SplitLabelError::BadType(t) => NameError::BadLabel(t),
            SplitLabelError::ShortInput => NameError::ShortInput,
        }
    }
}

//--- Display and Error

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            NameError::BadLabel(ref err) => err.fmt(f),
            NameError::CompressedName => {
                f.write_str("compressed domain name")
            }
            NameError::LongName => f.write_str("long domain name"),
            NameError::TrailingData => f.write_str("trailing data"),
            NameError::ShortInput => f.write_str("unexpected end of input"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NameError {}

//============ Testing =======================================================
