use std::fmt;
use std::str::FromStr;

/// Shape printed on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Shape {
    Circle = 0,
    Diamond = 1,
    Squiggle = 2,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Diamond, Shape::Squiggle];

    /// Zero-based index used by the match rule.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(i: u8) -> Option<Self> {
        match i {
            0 => Some(Shape::Circle),
            1 => Some(Shape::Diamond),
            2 => Some(Shape::Squiggle),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Shape::Circle => 'c',
            Shape::Diamond => 'd',
            Shape::Squiggle => 'q',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Diamond => "diamond",
            Shape::Squiggle => "squiggle",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShapeParseError {
    #[error("invalid shape: '{0}'")]
    Invalid(String),
}

impl FromStr for Shape {
    type Err = ShapeParseError;

    /// Accepts the one-character code or the full name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        Shape::ALL
            .into_iter()
            .find(|x| t == x.name() || t.chars().eq([x.to_char()]))
            .ok_or_else(|| ShapeParseError::Invalid(s.to_string()))
    }
}

impl TryFrom<char> for Shape {
    type Error = ShapeParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Shape::Circle),
            'd' => Ok(Shape::Diamond),
            'q' => Ok(Shape::Squiggle),
            _ => Err(ShapeParseError::Invalid(c.to_string())),
        }
    }
}

/// Ink color of the symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Color {
    Green = 0,
    Purple = 1,
    Red = 2,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Green, Color::Purple, Color::Red];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(i: u8) -> Option<Self> {
        match i {
            0 => Some(Color::Green),
            1 => Some(Color::Purple),
            2 => Some(Color::Red),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Color::Green => 'g',
            Color::Purple => 'p',
            Color::Red => 'r',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Red => "red",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColorParseError {
    #[error("invalid color: '{0}'")]
    Invalid(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts the one-character code or the full name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        Color::ALL
            .into_iter()
            .find(|x| t == x.name() || t.chars().eq([x.to_char()]))
            .ok_or_else(|| ColorParseError::Invalid(s.to_string()))
    }
}

impl TryFrom<char> for Color {
    type Error = ColorParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'g' => Ok(Color::Green),
            'p' => Ok(Color::Purple),
            'r' => Ok(Color::Red),
            _ => Err(ColorParseError::Invalid(c.to_string())),
        }
    }
}

/// Fill pattern inside the symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Fill {
    Empty = 0,
    Shaded = 1,
    Solid = 2,
}

impl Fill {
    pub const ALL: [Fill; 3] = [Fill::Empty, Fill::Shaded, Fill::Solid];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(i: u8) -> Option<Self> {
        match i {
            0 => Some(Fill::Empty),
            1 => Some(Fill::Shaded),
            2 => Some(Fill::Solid),
            _ => None,
        }
    }

    /// `h` (hatched) stands for shaded so that `s` can mean solid.
    pub const fn to_char(self) -> char {
        match self {
            Fill::Empty => 'e',
            Fill::Shaded => 'h',
            Fill::Solid => 's',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Fill::Empty => "empty",
            Fill::Shaded => "shaded",
            Fill::Solid => "solid",
        }
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FillParseError {
    #[error("invalid fill: '{0}'")]
    Invalid(String),
}

impl FromStr for Fill {
    type Err = FillParseError;

    /// Accepts the one-character code or the full name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        Fill::ALL
            .into_iter()
            .find(|x| t == x.name() || t.chars().eq([x.to_char()]))
            .ok_or_else(|| FillParseError::Invalid(s.to_string()))
    }
}

impl TryFrom<char> for Fill {
    type Error = FillParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'e' => Ok(Fill::Empty),
            'h' => Ok(Fill::Shaded),
            's' => Ok(Fill::Solid),
            _ => Err(FillParseError::Invalid(c.to_string())),
        }
    }
}

/// Number of symbols on a card (one to three).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Count {
    One = 0,
    Two = 1,
    Three = 2,
}

impl Count {
    pub const ALL: [Count; 3] = [Count::One, Count::Two, Count::Three];

    /// Zero-based index: `One` is 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Number of symbols actually drawn.
    pub const fn symbols(self) -> u8 {
        self as u8 + 1
    }

    pub const fn from_index(i: u8) -> Option<Self> {
        match i {
            0 => Some(Count::One),
            1 => Some(Count::Two),
            2 => Some(Count::Three),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Count::One => '1',
            Count::Two => '2',
            Count::Three => '3',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Count::One => "one",
            Count::Two => "two",
            Count::Three => "three",
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CountParseError {
    #[error("invalid count: '{0}'")]
    Invalid(String),
}

impl FromStr for Count {
    type Err = CountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        Count::ALL
            .into_iter()
            .find(|x| t == x.name() || t.chars().eq([x.to_char()]))
            .ok_or_else(|| CountParseError::Invalid(s.to_string()))
    }
}

impl TryFrom<char> for Count {
    type Error = CountParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '1' => Ok(Count::One),
            '2' => Ok(Count::Two),
            '3' => Ok(Count::Three),
            _ => Err(CountParseError::Invalid(c.to_string())),
        }
    }
}

/// Stable identity of a card, assigned in generation order (`0..=80`).
///
/// Independent of where the card sits in the deck after shuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(pub u8);

impl CardId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The four attributes of a card without its identity.
///
/// ```
/// use set_engine::cards::{CardTraits, Color, Count, Fill, Shape};
///
/// let t: CardTraits = "2psd".parse().unwrap();
/// assert_eq!(t, CardTraits::new(Shape::Diamond, Color::Purple, Fill::Solid, Count::Two));
/// assert_eq!(t.to_string(), "2psd");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardTraits {
    pub shape: Shape,
    pub color: Color,
    pub fill: Fill,
    pub count: Count,
}

impl CardTraits {
    pub const fn new(shape: Shape, color: Color, fill: Fill, count: Count) -> Self {
        Self { shape, color, fill, count }
    }

    /// Zero-based values in dimension order: shape, color, fill, count.
    pub const fn indices(self) -> [u8; 4] {
        [self.shape.index(), self.color.index(), self.fill.index(), self.count.index()]
    }

    /// Inverse of [`CardTraits::indices`]; `None` if any value is above 2.
    pub fn from_indices(ix: [u8; 4]) -> Option<Self> {
        Some(Self {
            shape: Shape::from_index(ix[0])?,
            color: Color::from_index(ix[1])?,
            fill: Fill::from_index(ix[2])?,
            count: Count::from_index(ix[3])?,
        })
    }
}

impl fmt::Display for CardTraits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}{}", self.count, self.color, self.fill, self.shape)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card code: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Shape(#[from] ShapeParseError),
    #[error(transparent)]
    Color(#[from] ColorParseError),
    #[error(transparent)]
    Fill(#[from] FillParseError),
    #[error(transparent)]
    Count(#[from] CountParseError),
}

impl FromStr for CardTraits {
    type Err = CardParseError;

    /// Codes are `{count}{color}{fill}{shape}`, e.g. `3rhq`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        let &[n, c, f, sh] = chars.as_slice() else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        Ok(Self {
            count: Count::try_from(n)?,
            color: Color::try_from(c)?,
            fill: Fill::try_from(f)?,
            shape: Shape::try_from(sh)?,
        })
    }
}

/// Parse multiple card codes separated by whitespace or commas.
///
/// ```
/// use set_engine::cards::parse_traits;
///
/// let xs = parse_traits("1gec 2psd, 3rhq").unwrap();
/// assert_eq!(xs.len(), 3);
/// assert_eq!(xs[2].to_string(), "3rhq");
/// ```
pub fn parse_traits(input: &str) -> Result<Vec<CardTraits>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(CardTraits::from_str)
        .collect()
}

/// A Set card: an identity plus four immutable attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    id: CardId,
    traits: CardTraits,
}

impl Card {
    pub const fn new(id: CardId, traits: CardTraits) -> Self {
        Self { id, traits }
    }

    pub const fn id(self) -> CardId {
        self.id
    }
    pub const fn traits(self) -> CardTraits {
        self.traits
    }
    pub const fn shape(self) -> Shape {
        self.traits.shape
    }
    pub const fn color(self) -> Color {
        self.traits.color
    }
    pub const fn fill(self) -> Fill {
        self.traits.fill
    }
    pub const fn count(self) -> Count {
        self.traits.count
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.traits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_indices_are_zero_based() {
        assert_eq!(Shape::Circle.index(), 0);
        assert_eq!(Color::Red.index(), 2);
        assert_eq!(Fill::Shaded.index(), 1);
        assert_eq!(Count::One.index(), 0);
        assert_eq!(Count::Three.symbols(), 3);
        assert_eq!(Shape::from_index(3), None);
    }

    #[test]
    fn attributes_parse_from_code_and_name() {
        assert_eq!(Shape::from_str("Squiggle").unwrap(), Shape::Squiggle);
        assert_eq!(Shape::from_str("q").unwrap(), Shape::Squiggle);
        assert_eq!(Color::from_str("PURPLE").unwrap(), Color::Purple);
        assert_eq!(Fill::from_str("h").unwrap(), Fill::Shaded);
        assert_eq!(Fill::from_str("solid").unwrap(), Fill::Solid);
        assert_eq!(Count::from_str("two").unwrap(), Count::Two);
        assert!(Shape::from_str("oval").is_err());
        assert!(Count::from_str("0").is_err());
        assert!(Fill::from_str("").is_err());
    }

    #[test]
    fn names_parse_back_to_the_same_attribute() {
        for s in Shape::ALL {
            assert_eq!(Shape::from_str(s.name()).unwrap(), s);
            assert_eq!(Shape::from_str(&s.to_string()).unwrap(), s);
        }
        for c in Color::ALL {
            assert_eq!(Color::from_str(c.name()).unwrap(), c);
        }
        for f in Fill::ALL {
            assert_eq!(Fill::from_str(&f.name().to_ascii_uppercase()).unwrap(), f);
        }
        for n in Count::ALL {
            assert_eq!(Count::from_str(n.name()).unwrap(), n);
            assert_eq!(Count::from_str(&n.to_string()).unwrap(), n);
        }
        assert_eq!(Shape::Squiggle.name(), "squiggle");
        assert_eq!(Count::Three.name(), "three");
    }

    #[test]
    fn traits_display_and_from_str() {
        let t = CardTraits::new(Shape::Circle, Color::Green, Fill::Empty, Count::One);
        assert_eq!(t.to_string(), "1gec");
        assert_eq!(CardTraits::from_str("1gec").unwrap(), t);
        assert_eq!(CardTraits::from_str(" 1GEC ").unwrap(), t);
    }

    #[test]
    fn traits_parse_errors_name_the_bad_attribute() {
        assert!(matches!(CardTraits::from_str("1ge"), Err(CardParseError::Invalid(_))));
        assert!(matches!(CardTraits::from_str("4gec"), Err(CardParseError::Count(_))));
        assert!(matches!(CardTraits::from_str("1xec"), Err(CardParseError::Color(_))));
        assert!(matches!(CardTraits::from_str("1gxc"), Err(CardParseError::Fill(_))));
        assert!(matches!(CardTraits::from_str("1gex"), Err(CardParseError::Shape(_))));
    }

    #[test]
    fn indices_round_trip() {
        let t = CardTraits::new(Shape::Diamond, Color::Red, Fill::Solid, Count::Two);
        assert_eq!(t.indices(), [1, 2, 2, 1]);
        assert_eq!(CardTraits::from_indices(t.indices()), Some(t));
        assert_eq!(CardTraits::from_indices([0, 0, 3, 0]), None);
    }

    #[test]
    fn card_exposes_its_traits() {
        let t = CardTraits::new(Shape::Squiggle, Color::Purple, Fill::Shaded, Count::Three);
        let c = Card::new(CardId(80), t);
        assert_eq!(c.id(), CardId(80));
        assert_eq!(c.shape(), Shape::Squiggle);
        assert_eq!(c.color(), Color::Purple);
        assert_eq!(c.fill(), Fill::Shaded);
        assert_eq!(c.count(), Count::Three);
        assert_eq!(c.to_string(), "3phq");
        assert_eq!(c.id().to_string(), "#80");
    }
}
