//! Table of English syllable fragments used to build
//! pronounceable passwords.
use bitflags::bitflags;

bitflags! {
    /// Phonetic categories of a fragment.
    #[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
    pub struct Phonetic: u8 {
        /// Consonant sound.
        const CONSONANT         =        0b00000001;
        /// Vowel sound.
        const VOWEL             =        0b00000010;
        /// Two letters making a single sound.
        const DIPHTHONG         =        0b00000100;
        /// May not start a password.
        const NOT_FIRST         =        0b00001000;
    }
}

const C: Phonetic = Phonetic::CONSONANT;
const V: Phonetic = Phonetic::VOWEL;
const CD: Phonetic = C.union(Phonetic::DIPHTHONG);
const VD: Phonetic = V.union(Phonetic::DIPHTHONG);
const CDN: Phonetic = CD.union(Phonetic::NOT_FIRST);

/// Fragment of text tagged with phonetic categories.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Element {
    /// Text of the fragment.
    pub text: &'static str,
    /// Phonetic categories.
    pub phonetic: Phonetic,
}

impl Element {
    const fn new(text: &'static str, phonetic: Phonetic) -> Self {
        Self { text, phonetic }
    }

    /// Determine if this element shares any category with `phonetic`.
    pub fn is(&self, phonetic: Phonetic) -> bool {
        self.phonetic.intersects(phonetic)
    }

    /// Length of the fragment.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Determine if the fragment is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Fragments available for sampling.
///
/// Output has a recognisable feel that depends on this
/// exact table so it must not be changed lightly.
pub const ELEMENTS: &[Element] = &[
    Element::new("a", V),
    Element::new("ae", VD),
    Element::new("ah", VD),
    Element::new("ai", VD),
    Element::new("b", C),
    Element::new("c", C),
    Element::new("ch", CD),
    Element::new("d", C),
    Element::new("e", V),
    Element::new("ee", VD),
    Element::new("ei", VD),
    Element::new("f", C),
    Element::new("g", C),
    Element::new("gh", CDN),
    Element::new("h", C),
    Element::new("i", V),
    Element::new("ie", VD),
    Element::new("j", C),
    Element::new("k", C),
    Element::new("l", C),
    Element::new("m", C),
    Element::new("n", C),
    Element::new("ng", CDN),
    Element::new("o", V),
    Element::new("oh", VD),
    Element::new("oo", VD),
    Element::new("p", C),
    Element::new("ph", CD),
    Element::new("qu", CD),
    Element::new("r", C),
    Element::new("s", C),
    Element::new("sh", CD),
    Element::new("t", C),
    Element::new("th", CD),
    Element::new("u", V),
    Element::new("v", C),
    Element::new("w", C),
    Element::new("x", C),
    Element::new("y", C),
    Element::new("z", C),
];
