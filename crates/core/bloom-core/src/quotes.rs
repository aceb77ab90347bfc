//! Rotating Sanskrit quotes shown on the landing page.

#[derive(Clone, Debug)]
pub struct Quote {
    pub sanskrit: &'static str,
    pub transliteration: &'static str,
    pub meaning: &'static str,
    pub hindi: &'static str,
}

pub const QUOTES: &[Quote] = &[
    Quote {
        sanskrit: "सर्वे भवन्तु सुखिनः सर्वे सन्तु निरामयाः",
        transliteration: "Sarve bhavantu sukhinah sarve santu niramayah",
        meaning: "May all beings be happy, may all beings be free from disease",
        hindi: "सभी प्राणी सुखी हों, सभी निरोगी हों",
    },
    Quote {
        sanskrit: "आत्मानो मोक्षार्थं जगद्धिताय च",
        transliteration: "Atmano mokshartham jagaddhitaya cha",
        meaning: "For one's own liberation and for the welfare of the world",
        hindi: "अपनी मुक्ति और जगत के कल्याण के लिए",
    },
    Quote {
        sanskrit: "यत्र नार्यस्तु पूज्यन्ते रमन्ते तत्र देवताः",
        transliteration: "Yatra naryastu pujyante ramante tatra devatah",
        meaning: "Where women are honored, divinity blossoms there",
        hindi: "जहाँ नारी की पूजा होती है, वहाँ देवता निवास करते हैं",
    },
    Quote {
        sanskrit: "सत्यं वद धर्मं चर",
        transliteration: "Satyam vada dharmam chara",
        meaning: "Speak the truth, walk the righteous path",
        hindi: "सत्य बोलो, धर्म का आचरण करो",
    },
    Quote {
        sanskrit: "वसुधैव कुटुम्बकम्",
        transliteration: "Vasudhaiva kutumbakam",
        meaning: "The world is one family",
        hindi: "सारा संसार एक परिवार है",
    },
    Quote {
        sanskrit: "श्रद्धावान् लभते ज्ञानं",
        transliteration: "Shraddhavan labhate gyanam",
        meaning: "The faithful attains wisdom",
        hindi: "श्रद्धावान व्यक्ति ज्ञान प्राप्त करता है",
    },
];

/// Cycles through [`QUOTES`], one step per rotation tick.
#[derive(Debug, Default)]
pub struct QuoteRotator {
    index: usize,
}

impl QuoteRotator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &'static Quote {
        &QUOTES[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        QUOTES.len()
    }

    pub fn is_empty(&self) -> bool {
        QUOTES.is_empty()
    }

    /// Advances one step, wrapping at the end of the list.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % QUOTES.len();
    }

    /// Jumps to a specific quote; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < QUOTES.len() {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_modulo_quote_count() {
        let mut rotator = QuoteRotator::new();
        let n = 17;
        for _ in 0..n {
            rotator.advance();
        }
        assert_eq!(rotator.index(), n % QUOTES.len());
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut rotator = QuoteRotator::new();
        let first = rotator.current().sanskrit;
        for _ in 0..QUOTES.len() {
            rotator.advance();
        }
        assert_eq!(rotator.current().sanskrit, first);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut rotator = QuoteRotator::new();
        rotator.select(2);
        assert_eq!(rotator.index(), 2);
        rotator.select(QUOTES.len());
        assert_eq!(rotator.index(), 2);
    }
}
