//! Clue/answer entries and answer normalization.
//!
//! The grid only ever stores the plain letters `A`-`Z`. Answers are uppercased,
//! accented and special letters are folded to fixed plain-letter expansions,
//! and everything else (spaces, digits, punctuation) is dropped.

/// A raw clue/answer pair as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub clue: String,
    pub answer: String,
}

impl Entry {
    pub fn new(clue: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            clue: clue.into(),
            answer: answer.into(),
        }
    }
}

/// An entry whose answer is non-empty and restricted to `A`-`Z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEntry {
    pub clue: String,
    pub answer: String,
    /// Bit `i` is set if the answer contains the letter `'A' + i`.
    pub letters: u32,
}

impl NormalizedEntry {
    /// Normalizes an entry, returning `None` if nothing placeable remains.
    pub fn new(entry: &Entry) -> Option<Self> {
        let answer = normalize_answer(&entry.answer);
        if answer.is_empty() {
            return None;
        }
        let letters = letter_mask(&answer);
        Some(Self {
            clue: entry.clue.trim().to_string(),
            answer,
            letters,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.answer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        self.answer.as_bytes()
    }

    /// Whether the two answers have at least one letter in common.
    #[inline]
    pub fn shares_letter_with(&self, other_letters: u32) -> bool {
        self.letters & other_letters != 0
    }
}

/// Plain-letter expansion for a recognized accented or special uppercase letter.
fn fold(letter: char) -> Option<&'static str> {
    let expansion = match letter {
        'Ä' => "AE",
        'Ö' => "OE",
        'Ü' => "UE",
        'ẞ' => "SS",
        'Æ' => "AE",
        'Œ' => "OE",
        'Ø' => "OE",
        'Å' => "AA",
        'À' | 'Á' | 'Â' | 'Ã' => "A",
        'Ç' => "C",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'Ì' | 'Í' | 'Î' | 'Ï' => "I",
        'Ñ' => "N",
        'Ò' | 'Ó' | 'Ô' | 'Õ' => "O",
        'Ù' | 'Ú' | 'Û' => "U",
        'Ý' | 'Ÿ' => "Y",
        _ => return None,
    };
    Some(expansion)
}

/// Maps a raw answer to the letters the grid can hold.
///
/// Never fails: an answer with no usable letters becomes the empty string.
/// Applying it to its own output returns the output unchanged.
pub fn normalize_answer(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());

    // `to_uppercase` already expands 'ß' to "SS"
    for upper in raw.chars().flat_map(char::to_uppercase) {
        if upper.is_ascii_uppercase() {
            normalized.push(upper);
        } else if let Some(expansion) = fold(upper) {
            normalized.push_str(expansion);
        }
    }

    normalized
}

/// Normalizes every entry, dropping those whose answer ends up empty.
pub fn normalize_entries(entries: &[Entry]) -> Vec<NormalizedEntry> {
    entries.iter().filter_map(NormalizedEntry::new).collect()
}

/// Bitmask of the letters in a normalized answer.
pub fn letter_mask(answer: &str) -> u32 {
    answer
        .bytes()
        .filter(u8::is_ascii_uppercase)
        .fold(0, |mask, letter| mask | 1 << (letter - b'A'))
}

/// Orderings used by the greedy strategy to decide which word goes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOrder {
    /// Longest answers first.
    LongestFirst,
    /// Answers whose letters appear in the most other answers first.
    SharedLetters,
    /// Twice the length plus the number of distinct letters.
    Balanced,
}

impl WordOrder {
    pub const ALL: [WordOrder; 3] = [
        WordOrder::LongestFirst,
        WordOrder::SharedLetters,
        WordOrder::Balanced,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WordOrder::LongestFirst => "greedy-longest",
            WordOrder::SharedLetters => "greedy-shared",
            WordOrder::Balanced => "greedy-balanced",
        }
    }

    /// Returns entry indices in this order. Equal keys keep input order.
    pub fn arrange(self, entries: &[NormalizedEntry]) -> Vec<usize> {
        let keys: Vec<usize> = match self {
            WordOrder::LongestFirst => entries.iter().map(NormalizedEntry::len).collect(),
            WordOrder::SharedLetters => {
                let frequency = letter_frequency(entries);
                entries
                    .iter()
                    .map(|entry| {
                        (0..26)
                            .filter(|bit| entry.letters & (1 << bit) != 0)
                            .map(|bit| frequency[bit] - 1)
                            .sum()
                    })
                    .collect()
            }
            WordOrder::Balanced => entries
                .iter()
                .map(|entry| 2 * entry.len() + entry.letters.count_ones() as usize)
                .collect(),
        };

        let mut order: Vec<usize> = (0..entries.len()).collect();
        order.sort_by(|&a, &b| keys[b].cmp(&keys[a]));
        order
    }
}

/// For each letter, how many entries contain it at least once.
fn letter_frequency(entries: &[NormalizedEntry]) -> [usize; 26] {
    let mut frequency = [0; 26];
    for entry in entries {
        for (bit, count) in frequency.iter_mut().enumerate() {
            if entry.letters & (1 << bit) != 0 {
                *count += 1;
            }
        }
    }
    frequency
}
