use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::app::Result;
use crate::domain::{travel_date, FlightRecord, ProviderSettings, RouteSpec};
use crate::scraper::{ContentRevealer, Pacer, PageDriver, RecordExtractor, ScraperConfig};

/// Scrapes one (route, day offset) page from one provider
pub struct RouteDayScraper<'a, D: PageDriver + ?Sized> {
    page: &'a D,
    extractor: &'a RecordExtractor,
    revealer: ContentRevealer,
    pacer: Pacer,
    today: NaiveDate,
}

impl<'a, D: PageDriver + ?Sized> RouteDayScraper<'a, D> {
    pub fn new(
        page: &'a D,
        config: &ScraperConfig,
        extractor: &'a RecordExtractor,
        today: NaiveDate,
    ) -> Self {
        Self {
            page,
            extractor,
            revealer: ContentRevealer::new(config),
            pacer: Pacer::new(config.min_delay(), config.max_delay()),
            today,
        }
    }

    /// Collect every priced card for the route on `today + day_offset`.
    ///
    /// Page-level failures are logged and produce an empty result.
    pub async fn scrape(
        &self,
        settings: &ProviderSettings,
        route: &RouteSpec,
        day_offset: u32,
    ) -> Vec<FlightRecord> {
        match self.try_scrape(settings, route, day_offset).await {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "Skipping {} day {} on {}: {}",
                    route,
                    day_offset,
                    settings.provider.source_name(),
                    e
                );
                Vec::new()
            }
        }
    }

    async fn try_scrape(
        &self,
        settings: &ProviderSettings,
        route: &RouteSpec,
        day_offset: u32,
    ) -> Result<Vec<FlightRecord>> {
        let provider = settings.provider;
        let flight_date = travel_date(self.today, day_offset)?;
        let url = provider.search_url(route, flight_date)?;

        info!("Day {}: loading all flight results...", day_offset);
        self.page.navigate(url.as_str()).await?;

        let waited = self.pacer.pause().await;
        debug!("Paced {} ms after load", waited.as_millis());

        let stats = self
            .revealer
            .reveal(self.page, provider.more_results_text())
            .await;
        debug!("Reveal: {} scrolls, {} clicks", stats.scrolls, stats.clicks);

        let cards = self.page.card_snapshots(&settings.card_query()).await?;
        info!("Found {} listings.", cards.len());

        let total = cards.len();
        let records: Vec<FlightRecord> = cards
            .iter()
            .filter_map(|card| self.extractor.extract(card))
            .map(|card| FlightRecord {
                route: route.clone(),
                flight_date,
                days_to_departure: day_offset,
                airline: card.airline,
                price: card.price,
                duration: card.duration,
                stops: card.stops,
                source: provider.source_name().to_string(),
            })
            .collect();

        if records.len() < total {
            debug!("Rejected {} cards without a price", total - records.len());
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Provider;
    use crate::scraper::testing::{instant_config, FakePage};
    use crate::scraper::CardSnapshot;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 29).unwrap()
    }

    fn card(label: &str, text: &str) -> CardSnapshot {
        CardSnapshot {
            label: Some(label.into()),
            image_alt: None,
            text: text.into(),
        }
    }

    #[tokio::test]
    async fn test_tags_records_with_route_and_date() {
        let page = FakePage::new().with_default_cards(vec![
            card("Indigo", "10:00 - 14:00\nIndigo\nDirect\n₹ 12,500"),
            card("Emirates", "Emirates\n1 stop\n₹ 18,200"),
        ]);
        let config = instant_config();
        let extractor = RecordExtractor::new(&config);
        let scraper = RouteDayScraper::new(&page, &config, &extractor, today());
        let route = RouteSpec::new("DEL", "DXB");

        let records = scraper
            .scrape(&ProviderSettings::new(Provider::GoogleFlights), &route, 3)
            .await;

        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record.route, route);
            assert_eq!(record.flight_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
            assert_eq!(record.days_to_departure, 3);
            assert_eq!(record.source, "Google Flights");
        }
        assert_eq!(records[0].stops, "Non-stop");
        assert_eq!(records[1].stops, "1 stop");

        let visited = page.visited();
        assert_eq!(visited.len(), 1);
        assert!(visited[0].contains("2024-06-01"));
    }

    #[tokio::test]
    async fn test_unpriced_cards_are_dropped() {
        let page = FakePage::new().with_default_cards(vec![
            card("Indigo", "Indigo\nSold out"),
            card("Vistara", "Vistara\n₹ 7,450"),
        ]);
        let config = instant_config();
        let extractor = RecordExtractor::new(&config);
        let scraper = RouteDayScraper::new(&page, &config, &extractor, today());

        let records = scraper
            .scrape(
                &ProviderSettings::new(Provider::GoogleFlights),
                &RouteSpec::new("DEL", "SIN"),
                1,
            )
            .await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].airline, "Vistara");
        assert!(records.iter().all(|r| r.price.get() > 0));
    }

    #[tokio::test]
    async fn test_navigation_failure_yields_empty() {
        let page = FakePage::new()
            .with_default_cards(vec![card("Indigo", "₹ 5,000")])
            .with_broken("google.com");
        let config = instant_config();
        let extractor = RecordExtractor::new(&config);
        let scraper = RouteDayScraper::new(&page, &config, &extractor, today());

        let records = scraper
            .scrape(
                &ProviderSettings::new(Provider::GoogleFlights),
                &RouteSpec::new("BOM", "DOH"),
                2,
            )
            .await;

        assert!(records.is_empty());
        assert_eq!(page.scroll_count(), 0);
    }

    #[tokio::test]
    async fn test_zero_cards_is_not_an_error() {
        let page = FakePage::new();
        let config = instant_config();
        let extractor = RecordExtractor::new(&config);
        let scraper = RouteDayScraper::new(&page, &config, &extractor, today());

        let records = scraper
            .scrape(
                &ProviderSettings::new(Provider::GoogleFlights),
                &RouteSpec::new("DEL", "JFK"),
                4,
            )
            .await;

        assert!(records.is_empty());
        assert_eq!(page.scroll_count(), config.scroll_passes);
    }

    #[tokio::test]
    async fn test_cap_is_positional() {
        let page = FakePage::new().with_default_cards(vec![
            card("A", "₹ 30,000"),
            card("B", "₹ 20,000"),
            card("C", "₹ 10,000"),
        ]);
        let config = instant_config();
        let extractor = RecordExtractor::new(&config);
        let scraper = RouteDayScraper::new(&page, &config, &extractor, today());

        let records = scraper
            .scrape(
                &ProviderSettings::capped(Provider::Skyscanner, 2),
                &RouteSpec::new("DEL", "DXB"),
                3,
            )
            .await;

        let airlines: Vec<_> = records.iter().map(|r| r.airline.as_str()).collect();
        assert_eq!(airlines, vec!["A", "B"]);
        assert_eq!(page.queries()[0].limit, Some(2));
        assert!(page.visited()[0].contains("/del/dxb/240601/"));
        assert!(records.iter().all(|r| r.source == "Skyscanner"));
    }
}
