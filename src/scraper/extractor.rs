use std::num::NonZeroU64;

use tracing::debug;

use crate::domain::record::{NON_STOP, NO_DURATION, ONE_PLUS_STOPS, UNKNOWN_AIRLINE};
use crate::scraper::{CardSnapshot, ScraperConfig};

/// One way of reading a text field from a card.
///
/// Rules return `None` when they do not apply, so the next rule in the
/// chain gets a turn.
pub trait FieldRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, card: &CardSnapshot) -> Option<String>;
}

/// Ordered list of rules for one field, with a sentinel when all miss
pub struct FieldChain {
    rules: Vec<Box<dyn FieldRule>>,
    fallback: &'static str,
}

impl FieldChain {
    pub fn new(fallback: &'static str) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    pub fn then(mut self, rule: impl FieldRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// First rule to produce a value wins
    pub fn resolve(&self, card: &CardSnapshot) -> String {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(card))
            .unwrap_or_else(|| self.fallback.to_string())
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Text of the dedicated airline label
struct LabelText;

impl FieldRule for LabelText {
    fn name(&self) -> &'static str {
        "label"
    }

    fn apply(&self, card: &CardSnapshot) -> Option<String> {
        non_blank(card.label.as_ref())
    }
}

/// Alt text of the airline logo
struct ImageAlt;

impl FieldRule for ImageAlt {
    fn name(&self) -> &'static str {
        "image-alt"
    }

    fn apply(&self, card: &CardSnapshot) -> Option<String> {
        non_blank(card.image_alt.as_ref())
    }
}

/// "Non-stop" or "Direct" anywhere in the card
struct DirectMarker;

impl FieldRule for DirectMarker {
    fn name(&self) -> &'static str {
        "direct-marker"
    }

    fn apply(&self, card: &CardSnapshot) -> Option<String> {
        (card.text.contains("Non-stop") || card.text.contains("Direct")).then(|| NON_STOP.to_string())
    }
}

/// First full line mentioning a stop
struct StopLine;

impl FieldRule for StopLine {
    fn name(&self) -> &'static str {
        "stop-line"
    }

    fn apply(&self, card: &CardSnapshot) -> Option<String> {
        card.text
            .lines()
            .find(|line| line.contains("stop"))
            .map(str::to_string)
    }
}

/// First line shaped like "3 hr 30 min"
struct HourMinuteLine;

impl FieldRule for HourMinuteLine {
    fn name(&self) -> &'static str {
        "hour-minute-line"
    }

    fn apply(&self, card: &CardSnapshot) -> Option<String> {
        card.text
            .lines()
            .find(|line| line.contains("hr") && line.contains("min"))
            .map(str::to_string)
    }
}

/// Finds the price line by its currency marker.
///
/// The first line that carries a marker and at least one digit wins; every
/// non-digit on that line is dropped, so `"₹ 12,500"` reads as `12500`.
#[derive(Debug, Clone)]
pub struct PriceScanner {
    markers: Vec<String>,
}

impl PriceScanner {
    pub fn new(markers: Vec<String>) -> Self {
        Self { markers }
    }

    /// Returns 0 when no line qualifies
    pub fn scan(&self, text: &str) -> u64 {
        text.lines()
            .filter(|line| self.markers.iter().any(|m| line.contains(m.as_str())))
            .find_map(|line| {
                let digits: String = line.chars().filter(|c| c.is_ascii_digit()).collect();
                digits.parse::<u64>().ok()
            })
            .unwrap_or(0)
    }
}

/// The fields of an accepted card, before route/date tagging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedCard {
    pub airline: String,
    pub price: NonZeroU64,
    pub duration: String,
    pub stops: String,
}

/// Converts card snapshots into flight fields
pub struct RecordExtractor {
    airline: FieldChain,
    stops: FieldChain,
    duration: FieldChain,
    price: PriceScanner,
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self::new(&ScraperConfig::default())
    }
}

impl RecordExtractor {
    pub fn new(config: &ScraperConfig) -> Self {
        let extractor = Self {
            airline: FieldChain::new(UNKNOWN_AIRLINE).then(LabelText).then(ImageAlt),
            stops: FieldChain::new(ONE_PLUS_STOPS).then(DirectMarker).then(StopLine),
            duration: FieldChain::new(NO_DURATION).then(HourMinuteLine),
            price: PriceScanner::new(config.currency_markers.clone()),
        };

        debug!(
            "Extraction rules: airline {:?}, stops {:?}, duration {:?}, price markers {:?}",
            extractor.airline.rule_names(),
            extractor.stops.rule_names(),
            extractor.duration.rule_names(),
            config.currency_markers
        );
        extractor
    }

    /// Read one card. `None` means the card has no usable price and is rejected.
    pub fn extract(&self, card: &CardSnapshot) -> Option<ExtractedCard> {
        let price = NonZeroU64::new(self.price.scan(&card.text))?;

        Some(ExtractedCard {
            airline: self.airline.resolve(card),
            price,
            duration: self.duration.resolve(card),
            stops: self.stops.resolve(card),
        })
    }
}
