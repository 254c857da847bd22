//! Country domain: the fixed, ordered list of ISO 3166 entries.
//!
//! Every country is identified by a dense code in `0..COUNTRY_COUNT`, taken
//! from its position in [`COUNTRY_TABLE`]. Codes at or past `COUNTRY_COUNT`
//! only ever come out of a decoded bitset and render as "Unknown".

use std::fmt;

use rand::Rng;
use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};

use crate::constants::{COUNTRY_COUNT, UNKNOWN_COUNTRY_ISO, UNKNOWN_COUNTRY_NAME};
use crate::error::CodecError;

/// A single country code.
///
/// The raw code is only reachable through [`TryFrom`], which rejects anything
/// outside the domain, so sets built by callers never contain out-of-range codes.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u16")]
pub struct Country(u8);

impl Country {
    pub const AF: Country = Country(0);
    pub const AX: Country = Country(1);
    pub const AL: Country = Country(2);
    pub const DZ: Country = Country(3);
    pub const AS: Country = Country(4);
    pub const AD: Country = Country(5);
    pub const AO: Country = Country(6);
    pub const AI: Country = Country(7);
    pub const ATA: Country = Country(8);
    pub const AG: Country = Country(9);
    pub const AR: Country = Country(10);
    pub const AM: Country = Country(11);
    pub const AW: Country = Country(12);
    pub const AUS: Country = Country(13);
    pub const AT: Country = Country(14);
    pub const AZ: Country = Country(15);
    pub const BS: Country = Country(16);
    pub const BH: Country = Country(17);
    pub const BD: Country = Country(18);
    pub const BB: Country = Country(19);
    pub const BY: Country = Country(20);
    pub const BE: Country = Country(21);
    pub const BZ: Country = Country(22);
    pub const BJ: Country = Country(23);
    pub const BM: Country = Country(24);
    pub const BT: Country = Country(25);
    pub const BO: Country = Country(26);
    pub const BQ: Country = Country(27);
    pub const BA: Country = Country(28);
    pub const BW: Country = Country(29);
    pub const BV: Country = Country(30);
    pub const BR: Country = Country(31);
    pub const IO: Country = Country(32);
    pub const BRN: Country = Country(33);
    pub const BG: Country = Country(34);
    pub const BF: Country = Country(35);
    pub const BI: Country = Country(36);
    pub const CV: Country = Country(37);
    pub const KH: Country = Country(38);
    pub const CM: Country = Country(39);
    pub const CA: Country = Country(40);
    pub const KY: Country = Country(41);
    pub const CF: Country = Country(42);
    pub const TD: Country = Country(43);
    pub const CL: Country = Country(44);
    pub const CN: Country = Country(45);
    pub const CX: Country = Country(46);
    pub const CC: Country = Country(47);
    pub const CO: Country = Country(48);
    pub const KM: Country = Country(49);
    pub const CD: Country = Country(50);
    pub const CG: Country = Country(51);
    pub const CK: Country = Country(52);
    pub const CR: Country = Country(53);
    pub const CI: Country = Country(54);
    pub const HR: Country = Country(55);
    pub const CU: Country = Country(56);
    pub const CW: Country = Country(57);
    pub const CY: Country = Country(58);
    pub const CZ: Country = Country(59);
    pub const DK: Country = Country(60);
    pub const DJ: Country = Country(61);
    pub const DM: Country = Country(62);
    pub const DO: Country = Country(63);
    pub const EC: Country = Country(64);
    pub const EG: Country = Country(65);
    pub const SV: Country = Country(66);
    pub const GQ: Country = Country(67);
    pub const ER: Country = Country(68);
    pub const EE: Country = Country(69);
    pub const SZ: Country = Country(70);
    pub const ET: Country = Country(71);
    pub const FLK: Country = Country(72);
    pub const FO: Country = Country(73);
    pub const FJ: Country = Country(74);
    pub const FI: Country = Country(75);
    pub const FR: Country = Country(76);
    pub const GF: Country = Country(77);
    pub const PF: Country = Country(78);
    pub const ATF: Country = Country(79);
    pub const GA: Country = Country(80);
    pub const GM: Country = Country(81);
    pub const GE: Country = Country(82);
    pub const DE: Country = Country(83);
    pub const GH: Country = Country(84);
    pub const GI: Country = Country(85);
    pub const GR: Country = Country(86);
    pub const GL: Country = Country(87);
    pub const GD: Country = Country(88);
    pub const GP: Country = Country(89);
    pub const GU: Country = Country(90);
    pub const GT: Country = Country(91);
    pub const GG: Country = Country(92);
    pub const GN: Country = Country(93);
    pub const GW: Country = Country(94);
    pub const GY: Country = Country(95);
    pub const HT: Country = Country(96);
    pub const HM: Country = Country(97);
    pub const HN: Country = Country(98);
    pub const HK: Country = Country(99);
    pub const HU: Country = Country(100);
    pub const IS: Country = Country(101);
    pub const IN: Country = Country(102);
    pub const ID: Country = Country(103);
    pub const IR: Country = Country(104);
    pub const IQ: Country = Country(105);
    pub const IE: Country = Country(106);
    pub const IM: Country = Country(107);
    pub const IL: Country = Country(108);
    pub const IT: Country = Country(109);
    pub const JM: Country = Country(110);
    pub const JP: Country = Country(111);
    pub const JE: Country = Country(112);
    pub const JO: Country = Country(113);
    pub const KZ: Country = Country(114);
    pub const KE: Country = Country(115);
    pub const KI: Country = Country(116);
    pub const KP: Country = Country(117);
    pub const KR: Country = Country(118);
    pub const KW: Country = Country(119);
    pub const KG: Country = Country(120);
    pub const LA: Country = Country(121);
    pub const LV: Country = Country(122);
    pub const LB: Country = Country(123);
    pub const LS: Country = Country(124);
    pub const LR: Country = Country(125);
    pub const LY: Country = Country(126);
    pub const LI: Country = Country(127);
    pub const LT: Country = Country(128);
    pub const LU: Country = Country(129);
    pub const MAC: Country = Country(130);
    pub const MG: Country = Country(131);
    pub const MW: Country = Country(132);
    pub const MY: Country = Country(133);
    pub const MV: Country = Country(134);
    pub const ML: Country = Country(135);
    pub const MT: Country = Country(136);
    pub const MH: Country = Country(137);
    pub const MQ: Country = Country(138);
    pub const MR: Country = Country(139);
    pub const MU: Country = Country(140);
    pub const YT: Country = Country(141);
    pub const MX: Country = Country(142);
    pub const FM: Country = Country(143);
    pub const MD: Country = Country(144);
    pub const MC: Country = Country(145);
    pub const MN: Country = Country(146);
    pub const ME: Country = Country(147);
    pub const MS: Country = Country(148);
    pub const MA: Country = Country(149);
    pub const MZ: Country = Country(150);
    pub const MMR: Country = Country(151);
    pub const NA: Country = Country(152);
    pub const NR: Country = Country(153);
    pub const NP: Country = Country(154);
    pub const NL: Country = Country(155);
    pub const NC: Country = Country(156);
    pub const NZ: Country = Country(157);
    pub const NI: Country = Country(158);
    pub const NE: Country = Country(159);
    pub const NG: Country = Country(160);
    pub const NU: Country = Country(161);
    pub const NF: Country = Country(162);
    pub const MKD: Country = Country(163);
    pub const MP: Country = Country(164);
    pub const NO: Country = Country(165);
    pub const OM: Country = Country(166);
    pub const PK: Country = Country(167);
    pub const PW: Country = Country(168);
    pub const PS: Country = Country(169);
    pub const PA: Country = Country(170);
    pub const PG: Country = Country(171);
    pub const PY: Country = Country(172);
    pub const PE: Country = Country(173);
    pub const PH: Country = Country(174);
    pub const PCN: Country = Country(175);
    pub const PL: Country = Country(176);
    pub const PT: Country = Country(177);
    pub const PR: Country = Country(178);
    pub const QA: Country = Country(179);
    pub const RE: Country = Country(180);
    pub const RO: Country = Country(181);
    pub const RU: Country = Country(182);
    pub const RW: Country = Country(183);
    pub const BL: Country = Country(184);
    pub const SH: Country = Country(185);
    pub const KN: Country = Country(186);
    pub const LC: Country = Country(187);
    pub const MF: Country = Country(188);
    pub const PM: Country = Country(189);
    pub const VC: Country = Country(190);
    pub const WS: Country = Country(191);
    pub const SM: Country = Country(192);
    pub const ST: Country = Country(193);
    pub const SA: Country = Country(194);
    pub const SN: Country = Country(195);
    pub const RS: Country = Country(196);
    pub const SC: Country = Country(197);
    pub const SL: Country = Country(198);
    pub const SG: Country = Country(199);
    pub const SX: Country = Country(200);
    pub const SK: Country = Country(201);
    pub const SI: Country = Country(202);
    pub const SB: Country = Country(203);
    pub const SO: Country = Country(204);
    pub const ZA: Country = Country(205);
    pub const GS: Country = Country(206);
    pub const SS: Country = Country(207);
    pub const ES: Country = Country(208);
    pub const LK: Country = Country(209);
    pub const SD: Country = Country(210);
    pub const SR: Country = Country(211);
    pub const SJ: Country = Country(212);
    pub const SE: Country = Country(213);
    pub const CH: Country = Country(214);
    pub const SY: Country = Country(215);
    pub const TJ: Country = Country(216);
    pub const TZ: Country = Country(217);
    pub const TH: Country = Country(218);
    pub const TL: Country = Country(219);
    pub const TG: Country = Country(220);
    pub const TK: Country = Country(221);
    pub const TO: Country = Country(222);
    pub const TT: Country = Country(223);
    pub const TN: Country = Country(224);
    pub const TR: Country = Country(225);
    pub const TM: Country = Country(226);
    pub const TC: Country = Country(227);
    pub const TV: Country = Country(228);
    pub const UG: Country = Country(229);
    pub const UA: Country = Country(230);
    pub const AE: Country = Country(231);
    pub const GB: Country = Country(232);
    pub const UMI: Country = Country(233);
    pub const US: Country = Country(234);
    pub const UY: Country = Country(235);
    pub const UZ: Country = Country(236);
    pub const VU: Country = Country(237);
    pub const VE: Country = Country(238);
    pub const VN: Country = Country(239);
    pub const VGB: Country = Country(240);
    pub const VI: Country = Country(241);
    pub const WF: Country = Country(242);
    pub const YE: Country = Country(243);
    pub const ZM: Country = Country(244);
    pub const ZW: Country = Country(245);
}

impl Country {
    /// Builds a country from a bit position of a decoded bitset.
    /// `index` must be below `BITSET_CAPACITY`; it may lie past the domain.
    pub(crate) const fn from_bit_index(index: usize) -> Self {
        Country(index as u8)
    }

    /// Raw numeric code.
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Whether this code has an entry in the country table.
    pub const fn is_known(self) -> bool {
        (self.0 as usize) < COUNTRY_COUNT
    }

    /// Canonical display name, or `"Unknown"` for codes without an entry.
    pub fn name(self) -> &'static str {
        COUNTRY_TABLE
            .get(self.0 as usize)
            .map_or(UNKNOWN_COUNTRY_NAME, |(_, name)| name)
    }

    /// ISO 3166 code, or `"??"` for codes without an entry.
    pub fn iso_code(self) -> &'static str {
        COUNTRY_TABLE
            .get(self.0 as usize)
            .map_or(UNKNOWN_COUNTRY_ISO, |(iso, _)| iso)
    }

    /// Looks a country up by its ISO code (case-insensitive).
    pub fn from_iso(code: &str) -> Option<Self> {
        COUNTRY_TABLE
            .iter()
            .position(|(iso, _)| iso.eq_ignore_ascii_case(code))
            .map(|idx| Country(idx as u8))
    }

    /// Every valid country, in code order.
    pub fn all() -> impl Iterator<Item = Country> {
        (0..COUNTRY_COUNT).map(|idx| Country(idx as u8))
    }

    /// Draws a country uniformly from the domain.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Country(rng.gen_range(0..COUNTRY_COUNT) as u8)
    }
}

/// Exclusive upper bound on valid country codes.
pub fn domain_size() -> usize {
    COUNTRY_COUNT
}

/// Draws a country uniformly from the domain using the thread-local RNG.
pub fn random_country() -> Country {
    Country::random(&mut rand::thread_rng())
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Country({}, {})", self.name(), self.0)
    }
}

impl TryFrom<i64> for Country {
    type Error = CodecError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..COUNTRY_COUNT as i64).contains(&value) {
            Ok(Country(value as u8))
        } else {
            Err(CodecError::Domain(value))
        }
    }
}

impl TryFrom<u16> for Country {
    type Error = CodecError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Country::try_from(i64::from(value))
    }
}

impl TryFrom<usize> for Country {
    type Error = CodecError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Country::try_from(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<Country> for u16 {
    fn from(country: Country) -> Self {
        u16::from(country.0)
    }
}

/// Serialized as its integer code. Codes past the domain only come out of the
/// bitset decoder and are refused here, the same way deserialization refuses them.
impl Serialize for Country {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.is_known() {
            return Err(S::Error::custom(CodecError::Domain(i64::from(self.0))));
        }
        serializer.serialize_u16(u16::from(*self))
    }
}

/// `(ISO code, display name)` for every country, indexed by code.
/// Taken from https://en.wikipedia.org/wiki/List_of_ISO_3166_country_codes
pub const COUNTRY_TABLE: [(&str, &str); COUNTRY_COUNT] = [
    ("AF", "Afghanistan"),
    ("AX", "Åland Islands"),
    ("AL", "Albania"),
    ("DZ", "Algeria"),
    ("AS", "American Samoa"),
    ("AD", "Andorra"),
    ("AO", "Angola"),
    ("AI", "Anguilla"),
    ("ATA", "Antarctica"),
    ("AG", "Antigua and Barbuda"),
    ("AR", "Argentina"),
    ("AM", "Armenia"),
    ("AW", "Aruba"),
    ("AUS", "Australia"),
    ("AT", "Austria"),
    ("AZ", "Azerbaijan"),
    ("BS", "Bahamas (the)"),
    ("BH", "Bahrain"),
    ("BD", "Bangladesh"),
    ("BB", "Barbados"),
    ("BY", "Belarus"),
    ("BE", "Belgium"),
    ("BZ", "Belize"),
    ("BJ", "Benin"),
    ("BM", "Bermuda"),
    ("BT", "Bhutan"),
    ("BO", "Bolivia (Plurinational State of)"),
    ("BQ", "Bonaire;Sint Eustatius;Saba"),
    ("BA", "Bosnia and Herzegovina"),
    ("BW", "Botswana"),
    ("BV", "Bouvet Island"),
    ("BR", "Brazil"),
    ("IO", "British Indian Ocean Territory (the)"),
    ("BRN", "Brunei Darussalam"),
    ("BG", "Bulgaria"),
    ("BF", "Burkina Faso"),
    ("BI", "Burundi"),
    ("CV", "Cabo Verde"),
    ("KH", "Cambodia"),
    ("CM", "Cameroon"),
    ("CA", "Canada"),
    ("KY", "Cayman Islands (the)"),
    ("CF", "Central African Republic (the)"),
    ("TD", "Chad"),
    ("CL", "Chile"),
    ("CN", "China"),
    ("CX", "Christmas Island"),
    ("CC", "Cocos (Keeling) Islands (the)"),
    ("CO", "Colombia"),
    ("KM", "Comoros (the)"),
    ("CD", "Congo (the Democratic Republic of the)"),
    ("CG", "Congo (the)"),
    ("CK", "Cook Islands (the)"),
    ("CR", "Costa Rica"),
    ("CI", "Côte d'Ivoire"),
    ("HR", "Croatia"),
    ("CU", "Cuba"),
    ("CW", "Curaçao"),
    ("CY", "Cyprus"),
    ("CZ", "Czechia"),
    ("DK", "Denmark"),
    ("DJ", "Djibouti"),
    ("DM", "Dominica"),
    ("DO", "Dominican Republic (the)"),
    ("EC", "Ecuador"),
    ("EG", "Egypt"),
    ("SV", "El Salvador"),
    ("GQ", "Equatorial Guinea"),
    ("ER", "Eritrea"),
    ("EE", "Estonia"),
    ("SZ", "Eswatini"),
    ("ET", "Ethiopia"),
    ("FLK", "Falkland Islands (the)"),
    ("FO", "Faroe Islands (the)"),
    ("FJ", "Fiji"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("GF", "French Guiana"),
    ("PF", "French Polynesia"),
    ("ATF", "French Southern Territories (the)"),
    ("GA", "Gabon"),
    ("GM", "Gambia (the)"),
    ("GE", "Georgia"),
    ("DE", "Germany"),
    ("GH", "Ghana"),
    ("GI", "Gibraltar"),
    ("GR", "Greece"),
    ("GL", "Greenland"),
    ("GD", "Grenada"),
    ("GP", "Guadeloupe"),
    ("GU", "Guam"),
    ("GT", "Guatemala"),
    ("GG", "Guernsey"),
    ("GN", "Guinea"),
    ("GW", "Guinea-Bissau"),
    ("GY", "Guyana"),
    ("HT", "Haiti"),
    ("HM", "Heard Island and McDonald Islands"),
    ("HN", "Honduras"),
    ("HK", "Hong Kong"),
    ("HU", "Hungary"),
    ("IS", "Iceland"),
    ("IN", "India"),
    ("ID", "Indonesia"),
    ("IR", "Iran (Islamic Republic of)"),
    ("IQ", "Iraq"),
    ("IE", "Ireland"),
    ("IM", "Isle of Man"),
    ("IL", "Israel"),
    ("IT", "Italy"),
    ("JM", "Jamaica"),
    ("JP", "Japan"),
    ("JE", "Jersey"),
    ("JO", "Jordan"),
    ("KZ", "Kazakhstan"),
    ("KE", "Kenya"),
    ("KI", "Kiribati"),
    ("KP", "Korea (the Democratic People's Republic of)"),
    ("KR", "Korea (the Republic of)"),
    ("KW", "Kuwait"),
    ("KG", "Kyrgyzstan"),
    ("LA", "Lao People's Democratic Republic (the)"),
    ("LV", "Latvia"),
    ("LB", "Lebanon"),
    ("LS", "Lesotho"),
    ("LR", "Liberia"),
    ("LY", "Libya"),
    ("LI", "Liechtenstein"),
    ("LT", "Lithuania"),
    ("LU", "Luxembourg"),
    ("MAC", "Macao"),
    ("MG", "Madagascar"),
    ("MW", "Malawi"),
    ("MY", "Malaysia"),
    ("MV", "Maldives"),
    ("ML", "Mali"),
    ("MT", "Malta"),
    ("MH", "Marshall Islands (the)"),
    ("MQ", "Martinique"),
    ("MR", "Mauritania"),
    ("MU", "Mauritius"),
    ("YT", "Mayotte"),
    ("MX", "Mexico"),
    ("FM", "Micronesia (Federated States of)"),
    ("MD", "Moldova (the Republic of)"),
    ("MC", "Monaco"),
    ("MN", "Mongolia"),
    ("ME", "Montenegro"),
    ("MS", "Montserrat"),
    ("MA", "Morocco"),
    ("MZ", "Mozambique"),
    ("MMR", "Myanmar"),
    ("NA", "Namibia"),
    ("NR", "Nauru"),
    ("NP", "Nepal"),
    ("NL", "Netherlands (Kingdom of the)"),
    ("NC", "New Caledonia"),
    ("NZ", "New Zealand"),
    ("NI", "Nicaragua"),
    ("NE", "Niger (the)"),
    ("NG", "Nigeria"),
    ("NU", "Niue"),
    ("NF", "Norfolk Island"),
    ("MKD", "North Macedonia"),
    ("MP", "Northern Mariana Islands (the)"),
    ("NO", "Norway"),
    ("OM", "Oman"),
    ("PK", "Pakistan"),
    ("PW", "Palau"),
    ("PS", "Palestine, State of"),
    ("PA", "Panama"),
    ("PG", "Papua New Guinea"),
    ("PY", "Paraguay"),
    ("PE", "Peru"),
    ("PH", "Philippines (the)"),
    ("PCN", "Pitcairn"),
    ("PL", "Poland"),
    ("PT", "Portugal"),
    ("PR", "Puerto Rico"),
    ("QA", "Qatar"),
    ("RE", "Réunion"),
    ("RO", "Romania"),
    ("RU", "Russian Federation (the)"),
    ("RW", "Rwanda"),
    ("BL", "Saint Barthélemy"),
    ("SH", "Saint Helena Ascension Island Tristan da Cunha"),
    ("KN", "Saint Kitts and Nevis"),
    ("LC", "Saint Lucia"),
    ("MF", "Saint Martin (French part)"),
    ("PM", "Saint Pierre and Miquelon"),
    ("VC", "Saint Vincent and the Grenadines"),
    ("WS", "Samoa"),
    ("SM", "San Marino"),
    ("ST", "Sao Tome and Principe"),
    ("SA", "Saudi Arabia"),
    ("SN", "Senegal"),
    ("RS", "Serbia"),
    ("SC", "Seychelles"),
    ("SL", "Sierra Leone"),
    ("SG", "Singapore"),
    ("SX", "Sint Maarten (Dutch part)"),
    ("SK", "Slovakia"),
    ("SI", "Slovenia"),
    ("SB", "Solomon Islands"),
    ("SO", "Somalia"),
    ("ZA", "South Africa"),
    ("GS", "South Georgia and the South Sandwich Islands"),
    ("SS", "South Sudan"),
    ("ES", "Spain"),
    ("LK", "Sri Lanka"),
    ("SD", "Sudan (the)"),
    ("SR", "Suriname"),
    ("SJ", "Svalbard Jan Mayen"),
    ("SE", "Sweden"),
    ("CH", "Switzerland"),
    ("SY", "Syrian Arab Republic (the)"),
    ("TJ", "Tajikistan"),
    ("TZ", "Tanzania, the United Republic of"),
    ("TH", "Thailand"),
    ("TL", "Timor-Leste"),
    ("TG", "Togo"),
    ("TK", "Tokelau"),
    ("TO", "Tonga"),
    ("TT", "Trinidad and Tobago"),
    ("TN", "Tunisia"),
    ("TR", "Türkiye"),
    ("TM", "Turkmenistan"),
    ("TC", "Turks and Caicos Islands (the)"),
    ("TV", "Tuvalu"),
    ("UG", "Uganda"),
    ("UA", "Ukraine"),
    ("AE", "United Arab Emirates (the)"),
    ("GB", "United Kingdom of Great Britain and Northern Ireland (the)"),
    ("UMI", "United States Minor Outlying Islands (the)"),
    ("US", "United States of America (the)"),
    ("UY", "Uruguay"),
    ("UZ", "Uzbekistan"),
    ("VU", "Vanuatu"),
    ("VE", "Venezuela (Bolivarian Republic of)"),
    ("VN", "Viet Nam"),
    ("VGB", "Virgin Islands (British)"),
    ("VI", "Virgin Islands (U.S.)"),
    ("WF", "Wallis and Futuna"),
    ("YE", "Yemen"),
    ("ZM", "Zambia"),
    ("ZW", "Zimbabwe"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_names() {
        assert_eq!(Country::AF.name(), "Afghanistan");
        assert_eq!(Country::AD.name(), "Andorra");
        assert_eq!(Country::FR.name(), "France");
        assert_eq!(Country::ZW.name(), "Zimbabwe");
    }

    #[test]
    fn test_codes_follow_table_order() {
        assert_eq!(Country::AF.code(), 0);
        assert_eq!(Country::AD.code(), 5);
        assert_eq!(Country::AG.code(), 9);
        assert_eq!(Country::FR.code(), 76);
        assert_eq!(Country::NU.code(), 161);
        assert_eq!(Country::ZW.code() as usize, COUNTRY_COUNT - 1);
    }

    #[test]
    fn test_unknown_code_renders_placeholder() {
        let sentinel = Country::from_bit_index(COUNTRY_COUNT);
        assert!(!sentinel.is_known());
        assert_eq!(sentinel.name(), "Unknown");
        assert_eq!(sentinel.iso_code(), "??");
        assert_eq!(Country::from_bit_index(255).name(), "Unknown");
        assert_eq!(
            Country::from_bit_index(250).to_string(),
            "Country(Unknown, 250)"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Country::FR.to_string(), "Country(France, 76)");
    }

    #[test]
    fn test_try_from_rejects_out_of_domain() {
        assert_eq!(Country::try_from(76i64), Ok(Country::FR));
        assert_eq!(Country::try_from(0u16), Ok(Country::AF));
        assert_eq!(
            Country::try_from(COUNTRY_COUNT as i64),
            Err(CodecError::Domain(COUNTRY_COUNT as i64))
        );
        assert_eq!(Country::try_from(-1i64), Err(CodecError::Domain(-1)));
        assert!(Country::try_from(usize::MAX).is_err());
        assert!(Country::try_from(u16::MAX).is_err());
    }

    #[test]
    fn test_iso_lookup() {
        assert_eq!(Country::from_iso("FR"), Some(Country::FR));
        assert_eq!(Country::from_iso("nu"), Some(Country::NU));
        assert_eq!(Country::from_iso("XX"), None);
        for country in Country::all() {
            assert_eq!(Country::from_iso(country.iso_code()), Some(country));
        }
    }

    #[test]
    fn test_table_is_well_formed() {
        let mut seen = HashSet::new();
        for (iso, name) in COUNTRY_TABLE {
            assert!(!name.is_empty());
            assert_eq!(name.trim(), name);
            assert!(seen.insert(iso), "duplicate ISO code {iso}");
        }
        assert_eq!(Country::all().count(), domain_size());
    }

    #[test]
    fn test_public_constructors_stay_in_domain() {
        assert!(Country::all().all(Country::is_known));
        assert!(Country::ZW.is_known());
        for (iso, _) in COUNTRY_TABLE {
            assert!(Country::from_iso(iso).is_some_and(Country::is_known));
        }
        for code in 0..=u16::MAX {
            if let Ok(country) = Country::try_from(code) {
                assert!(country.is_known(), "code {code} built an unknown country");
            }
        }
        let mut rng = rand::thread_rng();
        assert!((0..1000).all(|_| Country::random(&mut rng).is_known()));
    }

    #[test]
    fn test_json_refuses_unknown_codes_both_ways() {
        assert_eq!(serde_json::to_string(&Country::FR).unwrap(), "76");
        assert_eq!(serde_json::from_str::<Country>("76").unwrap(), Country::FR);

        let err = serde_json::to_string(&Country::from_bit_index(COUNTRY_COUNT)).unwrap_err();
        assert!(err.to_string().contains("246"));
        assert!(serde_json::from_str::<Country>("246").is_err());
    }

    #[test]
    fn test_random_country_stays_in_domain() {
        for _ in 0..1000 {
            assert!(random_country().is_known());
        }
    }
}
