use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoothId(String);

impl BoothId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoothId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BoothId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A booth as it appears on the floor. The price is kept as the raw
/// attribute text and only parsed when the booth goes into a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Booth {
    pub id: BoothId,
    pub price_attr: Option<String>,
    pub pre_booked: bool,
    pub selected: bool,
}

impl Booth {
    pub fn new(id: impl Into<String>, price_attr: Option<&str>) -> Self {
        Self {
            id: BoothId::new(id),
            price_attr: price_attr.map(str::to_string),
            pre_booked: false,
            selected: false,
        }
    }

    pub fn pre_booked(mut self) -> Self {
        self.pre_booked = true;
        self
    }

    pub fn price(&self) -> u32 {
        parse_price(self.price_attr.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub id: BoothId,
    pub price: u32,
}

fn leading_integer() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*([+-]?)(?:0[xX]([0-9a-fA-F]+)|(\d+))").expect("static pattern")
    })
}

/// Reads the leading integer of a price attribute, decimal or `0x` hex.
/// Missing, non-numeric and negative values come out as 0; values past
/// `u32::MAX` are clamped to it.
pub fn parse_price(attr: Option<&str>) -> u32 {
    let Some(raw) = attr else {
        return 0;
    };

    let Some(caps) = leading_integer().captures(raw) else {
        return 0;
    };

    if &caps[1] == "-" {
        return 0;
    }

    let parsed = match (caps.get(2), caps.get(3)) {
        (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16),
        (None, Some(dec)) => dec.as_str().parse::<u32>(),
        (None, None) => return 0,
    };

    // Only overflow can fail here; the pattern guarantees valid digits.
    parsed.unwrap_or(u32::MAX)
}
