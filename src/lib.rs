//! # farescout
//!
//! A single-operator flight fare collector.
//!
//! ## Architecture
//!
//! farescout sweeps a fixed list of routes over a range of future travel
//! dates, one browser page at a time:
//!
//! ```text
//! Campaign → RouteDayScraper → (ContentRevealer, RecordExtractor) → RunAccumulator → CsvStore
//!                                                                         ↘ FallbackSynthesizer (if empty)
//! ```
//!
//! - [`scraper`]: page loading, lazy-content reveal, card extraction
//! - [`campaign`]: the route × day sweep, session lifetime, synthetic fallback
//! - [`store`]: sorted, de-duplicated CSV output
//!
//! ## Quick Start
//!
//! ```bash
//! # Collect with the defaults (creates ~/.config/farescout/config.toml)
//! farescout
//!
//! # More detail
//! RUST_LOG=farescout=debug farescout
//! ```
//!
//! ## Modules
//!
//! - [`app`]: Application context and error types
//! - [`campaign`]: Campaign runner, session and fallback
//! - [`config`]: TOML configuration
//! - [`domain`]: Flight records, routes, schedules, providers
//! - [`scraper`]: Browser driving and extraction
//! - [`store`]: Output persistence

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the extractor,
/// the synthesizer and the store, and runs one collection end to end.
pub mod app;

/// Campaign orchestration.
///
/// - [`CampaignRunner`](campaign::CampaignRunner): sequential provider × route × day sweep
/// - [`CampaignSession`](campaign::CampaignSession): owns the page and the accumulator
/// - [`FallbackSynthesizer`](campaign::FallbackSynthesizer): simulated rows for empty runs
pub mod campaign;

/// Configuration management.
///
/// Loads from `~/.config/farescout/config.toml`, supporting:
/// - Routes, day schedule and providers
/// - Pacing and reveal settings
/// - Fallback price bounds
pub mod config;

/// Core domain models.
///
/// - [`FlightRecord`](domain::FlightRecord): one flight offer, price always positive
/// - [`RouteSpec`](domain::RouteSpec): origin/destination pair
/// - [`Provider`](domain::Provider): supported search sites and their URL shapes
pub mod domain;

/// Browser-driven page scraping.
///
/// Uses Chrome via chromiumoxide behind the [`PageDriver`](scraper::PageDriver)
/// trait.
///
/// - [`RecordExtractor`](scraper::RecordExtractor): ordered fallback rules per field
/// - [`ContentRevealer`](scraper::ContentRevealer): scroll and "more results" clicks
/// - [`RouteDayScraper`](scraper::RouteDayScraper): one page, failures contained
pub mod scraper;

/// Output persistence.
///
/// - [`RecordStore`](store::RecordStore): Trait for persisting a finished run
/// - [`CsvStore`](store::CsvStore): CSV implementation
pub mod store;
