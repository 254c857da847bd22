use countryset_core::constants::{BITSET_WORDS, COUNTRY_COUNT, ENCODED_LEN};
use countryset_core::{CodecError, Countries, Country, CountryBitset};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn country() -> impl Strategy<Value = Country> {
    (0..COUNTRY_COUNT as u16).prop_map(|code| Country::try_from(code).unwrap())
}

/// Distinct countries, any size from empty up to the whole domain, in random order.
fn distinct_countries() -> impl Strategy<Value = Vec<Country>> {
    let all: Vec<Country> = Country::all().collect();
    prop::sample::subsequence(all, 0..=COUNTRY_COUNT).prop_shuffle()
}

fn codes(countries: &Countries) -> BTreeSet<u8> {
    countries.iter().map(|c| c.code()).collect()
}

proptest! {
    #[test]
    fn set_bitset_set_keeps_membership(
        members in distinct_countries(),
    ) {
        let countries: Countries = members.iter().copied().collect();
        let decoded = countries.to_bitset().to_countries();

        let expected: BTreeSet<u8> = members.iter().map(|c| c.code()).collect();
        prop_assert_eq!(codes(&decoded), expected);
        prop_assert_eq!(decoded.len(), members.len());
    }

    #[test]
    fn bitset_set_bitset_is_exact(words in prop::array::uniform4(any::<u64>())) {
        let bitset = CountryBitset(words);
        let countries = bitset.to_countries();
        prop_assert_eq!(countries.to_bitset(), bitset);
    }

    #[test]
    fn bytes_round_trip_through_decode(words in prop::array::uniform4(any::<u64>())) {
        let bitset = CountryBitset(words);
        let decoded = Countries::decode(&bitset.to_be_bytes()).unwrap();
        prop_assert_eq!(decoded.encode(), bitset.to_be_bytes());
    }

    #[test]
    fn duplicates_do_not_change_encoding(
        members in prop::collection::vec(country(), 0..64),
        repeats in prop::collection::vec(any::<prop::sample::Index>(), 1..32),
    ) {
        let unique: Countries = members.iter().copied().collect();
        let mut with_duplicates = unique.clone();
        if !members.is_empty() {
            with_duplicates.extend(repeats.iter().map(|idx| *idx.get(&members)));
        }
        prop_assert_eq!(unique.encode(), with_duplicates.encode());
    }

    #[test]
    fn order_does_not_change_encoding(
        members in prop::collection::vec(country(), 0..128).prop_shuffle(),
    ) {
        let shuffled: Countries = members.iter().copied().collect();
        let mut sorted_members = members.clone();
        sorted_members.sort();
        let sorted: Countries = sorted_members.into_iter().collect();
        prop_assert_eq!(shuffled.encode(), sorted.encode());
        prop_assert_eq!(shuffled, sorted);
    }

    #[test]
    fn wrong_length_always_fails(bytes in prop::collection::vec(any::<u8>(), 0..96)) {
        prop_assume!(bytes.len() != ENCODED_LEN);
        prop_assert_eq!(
            Countries::decode(&bytes),
            Err(CodecError::Format { expected: ENCODED_LEN, actual: bytes.len() })
        );
    }
}

#[test]
fn encodes_codes_spanning_several_words() {
    let countries = Countries::from(vec![
        Country::AD,
        Country::FR,
        Country::AG,
        Country::NU,
    ]);
    let bitset = countries.to_bitset();

    let mut expected = [0u64; BITSET_WORDS];
    for country in countries.iter() {
        let code = country.code() as usize;
        expected[code / 64] |= 1u64 << (code % 64);
    }
    assert_eq!(bitset.words(), expected);
    assert_eq!(bitset.words()[0], 1u64 << 5 | 1u64 << 9);
    assert_eq!(bitset.words()[1], 1u64 << 12);
    assert_eq!(bitset.words()[2], 1u64 << 33);
    assert_eq!(bitset.words()[3], 0);
}

#[test]
fn every_set_size_round_trips() {
    let all: Vec<Country> = Country::all().collect();
    for size in 0..=COUNTRY_COUNT {
        let countries = Countries::from(all[..size].to_vec());
        let decoded = Countries::decode(&countries.encode()).unwrap();
        assert_eq!(decoded, countries);
        assert_eq!(decoded.len(), size);
    }
}
