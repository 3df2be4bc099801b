use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::app::Result;
use crate::domain::RouteSpec;

const GOOGLE_FLIGHTS_BASE: &str = "https://www.google.com/travel/flights";
const SKYSCANNER_BASE: &str = "https://www.skyscanner.co.in/transport/flights/";

/// A flight search site the campaign knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    GoogleFlights,
    Skyscanner,
}

/// Selectors describing where result cards live on a provider's page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardQuery {
    /// Marker shared by every result card
    pub card: &'static str,
    /// Dedicated airline label inside a card
    pub label: &'static str,
    /// Image whose alt text names the airline
    pub image: &'static str,
    /// Positional cap, applied in DOM order
    pub limit: Option<usize>,
}

impl Provider {
    /// Name written to the `source` column.
    pub fn source_name(&self) -> &'static str {
        match self {
            Self::GoogleFlights => "Google Flights",
            Self::Skyscanner => "Skyscanner",
        }
    }

    /// Build the one-way search URL for a route on a given date.
    ///
    /// Google Flights takes a free-text query naming destination, origin and
    /// an ISO date; Skyscanner takes lower-cased codes and a `yymmdd` date as
    /// path segments.
    pub fn search_url(&self, route: &RouteSpec, date: NaiveDate) -> Result<Url> {
        match self {
            Self::GoogleFlights => {
                let query = format!(
                    "Flights to {} from {} on {} one-way",
                    route.destination,
                    route.origin,
                    date.format("%Y-%m-%d")
                );
                Ok(Url::parse_with_params(GOOGLE_FLIGHTS_BASE, &[("q", query)])?)
            }
            Self::Skyscanner => {
                let path = format!(
                    "{}/{}/{}/",
                    route.origin.to_lowercase(),
                    route.destination.to_lowercase(),
                    date.format("%y%m%d")
                );
                Ok(Url::parse(SKYSCANNER_BASE)?.join(&path)?)
            }
        }
    }

    fn card_selector(&self) -> &'static str {
        match self {
            Self::GoogleFlights => ".pIav2d",
            Self::Skyscanner => "div[class*='FlightsTicket_container']",
        }
    }

    fn label_selector(&self) -> &'static str {
        match self {
            Self::GoogleFlights => ".sSHqwe",
            Self::Skyscanner => "span[class*='CarrierName']",
        }
    }

    /// Visible text of the control that expands the result list.
    pub fn more_results_text(&self) -> &'static str {
        match self {
            Self::GoogleFlights => "more flights",
            Self::Skyscanner => "Show more results",
        }
    }
}

/// A provider as enabled in the campaign configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub provider: Provider,

    /// Read at most this many cards per page, first in DOM order.
    ///
    /// This is not a cheapest-N filter: the page order decides.
    #[serde(default)]
    pub max_results: Option<usize>,
}

impl ProviderSettings {
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            max_results: None,
        }
    }

    pub fn capped(provider: Provider, max_results: usize) -> Self {
        Self {
            provider,
            max_results: Some(max_results),
        }
    }

    pub fn card_query(&self) -> CardQuery {
        CardQuery {
            card: self.provider.card_selector(),
            label: self.provider.label_selector(),
            image: "img",
            limit: self.max_results,
        }
    }
}
