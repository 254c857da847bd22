//! Sets of countries and their fixed-width binary encoding.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::bitset::CountryBitset;
use crate::constants::{COUNTRY_COUNT, ENCODED_LEN};
use crate::country::Country;
use crate::error::Result;
use crate::traits::FixedWidthColumn;

/// The countries attached to one record.
///
/// Order and repeated entries carry no meaning: two values are equal when
/// they hold the same distinct countries. Serializes as a JSON-style array of
/// codes, which is the structured-text encoding the bitset is compared against.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct Countries(Vec<Country>);

impl Countries {
    pub fn new() -> Self {
        Countries(Vec::new())
    }

    pub fn push(&mut self, country: Country) {
        self.0.push(country);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.0.iter()
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Country] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Country> {
        self.0
    }

    pub fn contains(&self, country: Country) -> bool {
        self.0.contains(&country)
    }

    /// Sorted copy with duplicates removed.
    pub fn distinct(&self) -> Countries {
        let mut codes = self.0.clone();
        codes.sort_unstable();
        codes.dedup();
        Countries(codes)
    }

    pub fn to_bitset(&self) -> CountryBitset {
        self.0.iter().copied().collect()
    }

    /// Serializes the set as `ENCODED_LEN` bytes.
    pub fn encode(&self) -> [u8; ENCODED_LEN] {
        self.to_bitset().to_be_bytes()
    }

    /// Parses bytes written by [`Countries::encode`]. Fails on any other length.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(CountryBitset::from_be_bytes(bytes)?.to_countries())
    }

    /// Random set: size drawn from `0..COUNTRY_COUNT`, members drawn
    /// independently, so the same country may appear more than once.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let number = rng.gen_range(0..COUNTRY_COUNT);
        (0..number).map(|_| Country::random(rng)).collect()
    }
}

/// Random set drawn with the thread-local RNG.
pub fn random_countries() -> Countries {
    Countries::random(&mut rand::thread_rng())
}

impl PartialEq for Countries {
    fn eq(&self, other: &Self) -> bool {
        self.to_bitset() == other.to_bitset()
    }
}

impl Eq for Countries {}

impl From<Vec<Country>> for Countries {
    fn from(countries: Vec<Country>) -> Self {
        Countries(countries)
    }
}

impl From<CountryBitset> for Countries {
    fn from(bitset: CountryBitset) -> Self {
        bitset.to_countries()
    }
}

impl FromIterator<Country> for Countries {
    fn from_iter<I: IntoIterator<Item = Country>>(iter: I) -> Self {
        Countries(iter.into_iter().collect())
    }
}

impl Extend<Country> for Countries {
    fn extend<I: IntoIterator<Item = Country>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Countries {
    type Item = Country;
    type IntoIter = std::vec::IntoIter<Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Countries {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FixedWidthColumn for Countries {
    const WIDTH: usize = ENCODED_LEN;

    fn to_column_bytes(&self) -> Vec<u8> {
        self.encode().to_vec()
    }

    fn from_column_bytes(bytes: &[u8]) -> Result<Self> {
        Countries::decode(bytes)
    }
}
