//! Application state and main app structure

use anyhow::Result;
use crossterm::{
    event::{self, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use rd_core::browse::{filter_reviews, BrowseSession, NumberedReview, PageView};
use rd_core::config::{AnalysisConfig, BrowseConfig};
use rd_core::keywords::{keywords_for_rating, ratings_present, KeywordEntry, KeywordRanker};
use rd_core::review::BrandDataset;
use rd_core::stats::{BrandSummary, RatingDistribution};
use rd_core::tokenize::Tokenizer;
use rd_core::types::{FilterKey, PageDirection};
use std::io::{self, Stdout};
use std::time::Duration;

use crate::render;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay
    Help,
}

/// Selection state for the dashboard
///
/// Indexes are clamped against the recomputed tables on every draw, so
/// they can be moved freely by input handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Status message
    pub message: Option<String>,
    /// Should quit
    pub should_quit: bool,
    /// Selected brand tab
    pub brand_idx: usize,
    /// Selected rating, as an index into the ratings present for the brand
    pub rating_idx: usize,
    /// Selected keyword, as an index into the ranked keywords for the rating
    pub keyword_idx: usize,
}

impl AppState {
    /// Create a new app state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Cycle to the next brand tab; selections restart for the new brand
    pub fn next_brand(&mut self, brand_count: usize) {
        if brand_count == 0 {
            return;
        }
        self.brand_idx = (self.brand_idx + 1) % brand_count;
        self.rating_idx = 0;
        self.keyword_idx = 0;
    }

    /// Cycle to the previous brand tab
    pub fn prev_brand(&mut self, brand_count: usize) {
        if brand_count == 0 {
            return;
        }
        self.brand_idx = (self.brand_idx + brand_count - 1) % brand_count;
        self.rating_idx = 0;
        self.keyword_idx = 0;
    }

    /// Move the rating selection, clamped to the available ratings
    pub fn select_rating(&mut self, delta: isize, rating_count: usize) {
        if rating_count == 0 {
            return;
        }
        let max = rating_count - 1;
        let next = self.rating_idx as isize + delta;
        self.rating_idx = next.clamp(0, max as isize) as usize;
        self.keyword_idx = 0;
    }

    /// Move the keyword selection, clamped to the ranked keywords
    pub fn select_keyword(&mut self, delta: isize, keyword_count: usize) {
        if keyword_count == 0 {
            return;
        }
        let max = keyword_count - 1;
        let next = self.keyword_idx as isize + delta;
        self.keyword_idx = next.clamp(0, max as isize) as usize;
    }
}

/// Everything one draw pass needs, recomputed from the datasets on each
/// interaction (no caching between frames)
pub struct DashboardView {
    /// Labels for the brand tabs
    pub brand_labels: Vec<String>,
    /// Selected brand tab
    pub brand_idx: usize,
    /// Summary row of the selected brand
    pub summary: BrandSummary,
    /// Rating distribution of the selected brand
    pub distribution: RatingDistribution,
    /// Full ranked keyword table of the selected brand
    pub keywords: Vec<KeywordEntry>,
    /// Ratings present for the brand, ascending
    pub ratings: Vec<u8>,
    /// Selected rating (None when the dataset has no rated reviews)
    pub selected_rating: Option<u8>,
    /// Index of the selected rating within `ratings`
    pub rating_idx: usize,
    /// Keywords ranked for the selected rating
    pub rating_keywords: Vec<KeywordEntry>,
    /// Index of the selected keyword within `rating_keywords`
    pub keyword_idx: usize,
    /// Selected keyword
    pub selected_keyword: Option<String>,
    /// Visible page of matching example reviews
    pub page: PageView,
}

/// Main application
pub struct App {
    /// Selection state
    pub state: AppState,
    /// Loaded brand datasets, read-only
    datasets: Vec<BrandDataset>,
    /// Keyword ranking settings
    ranker: KeywordRanker,
    /// Pagination cursors, keyed by (brand, rating, keyword)
    browse: BrowseSession,
    /// Terminal
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new app over the loaded datasets
    pub fn new(
        datasets: Vec<BrandDataset>,
        analysis: &AnalysisConfig,
        browse: &BrowseConfig,
    ) -> Result<Self> {
        // Install panic hook to restore terminal on panic
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let tokenizer =
            Tokenizer::new().with_extra_stopwords(analysis.extra_stopwords.iter().cloned());

        Ok(Self {
            state: AppState::new(),
            datasets,
            ranker: KeywordRanker::new(tokenizer, analysis.top_n),
            browse: BrowseSession::new(browse.page_size),
            terminal,
        })
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.draw()?;

            if event::poll(Duration::from_millis(100))? {
                if let event::Event::Key(key) = event::read()? {
                    self.handle_input(key);
                }
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Draw the UI
    fn draw(&mut self) -> Result<()> {
        let view = build_view(
            &self.datasets,
            &self.ranker,
            &self.browse,
            &mut self.state,
        );
        let state = self.state.clone();

        self.terminal.draw(|frame| {
            let area = frame.area();
            render::render_dashboard(frame, area, &view, &state);
            if state.mode == AppMode::Help {
                render::render_help(frame, area);
            }
        })?;
        Ok(())
    }

    /// Handle keyboard input
    fn handle_input(&mut self, key: KeyEvent) {
        if self.state.mode == AppMode::Help {
            self.state.mode = AppMode::Normal;
            return;
        }

        self.state.clear_message();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.state.should_quit = true,
            KeyCode::Char('?') => self.state.mode = AppMode::Help,

            // Brand tabs
            KeyCode::Tab | KeyCode::Char('l') => self.state.next_brand(self.datasets.len()),
            KeyCode::BackTab | KeyCode::Char('h') => self.state.prev_brand(self.datasets.len()),

            // Rating selection
            KeyCode::Char('j') | KeyCode::Down => self.move_rating(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_rating(-1),
            KeyCode::Char(c @ '1'..='5') => self.jump_to_rating(c as u8 - b'0'),

            // Keyword selection
            KeyCode::Char('n') => self.move_keyword(1),
            KeyCode::Char('p') => self.move_keyword(-1),

            // Review pagination
            KeyCode::Left => self.turn_page(PageDirection::Prev),
            KeyCode::Right => self.turn_page(PageDirection::Next),

            _ => {}
        }
    }

    fn current_dataset(&self) -> Option<&BrandDataset> {
        self.datasets.get(self.state.brand_idx)
    }

    fn move_rating(&mut self, delta: isize) {
        let count = self
            .current_dataset()
            .map(|ds| ratings_present(&self.ranker.rank(ds)).len())
            .unwrap_or(0);
        self.state.select_rating(delta, count);
    }

    fn jump_to_rating(&mut self, rating: u8) {
        let Some(dataset) = self.current_dataset() else {
            return;
        };
        let ratings = ratings_present(&self.ranker.rank(dataset));
        match ratings.iter().position(|&r| r == rating) {
            Some(idx) => {
                self.state.rating_idx = idx;
                self.state.keyword_idx = 0;
            }
            None => self
                .state
                .set_message(format!("no {rating}-star reviews for this brand")),
        }
    }

    fn move_keyword(&mut self, delta: isize) {
        let Some(dataset) = self.current_dataset() else {
            return;
        };
        let keywords = self.ranker.rank(dataset);
        let ratings = ratings_present(&keywords);
        let count = ratings
            .get(self.state.rating_idx.min(ratings.len().saturating_sub(1)))
            .map(|&r| keywords_for_rating(&keywords, r).len())
            .unwrap_or(0);
        self.state.select_keyword(delta, count);
    }

    fn turn_page(&mut self, direction: PageDirection) {
        let Some(selection) = current_selection(
            &self.datasets,
            &self.ranker,
            &self.state,
        ) else {
            return;
        };
        let (key, filtered) = selection;
        if filtered.is_empty() {
            self.state.set_message("no matching reviews");
            return;
        }
        self.browse.advance(&key, direction, filtered.len());
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Resolve the state's selection against a brand's recomputed tables
///
/// Returns the pagination key and the filtered subset for the current
/// (brand, rating, keyword) choice, or `None` when nothing is selectable.
fn current_selection(
    datasets: &[BrandDataset],
    ranker: &KeywordRanker,
    state: &AppState,
) -> Option<(FilterKey, Vec<NumberedReview>)> {
    let dataset = datasets.get(state.brand_idx)?;
    let keywords = ranker.rank(dataset);
    let ratings = ratings_present(&keywords);
    let rating = *ratings.get(state.rating_idx.min(ratings.len().checked_sub(1)?))?;
    let rating_keywords = keywords_for_rating(&keywords, rating);
    let entry = rating_keywords.get(
        state
            .keyword_idx
            .min(rating_keywords.len().checked_sub(1)?),
    )?;

    let key = FilterKey::new(dataset.brand.id.clone(), rating, entry.keyword.clone());
    let filtered = filter_reviews(dataset, rating, &entry.keyword);
    Some((key, filtered))
}

/// Recompute the full view model for the selected brand
///
/// Every interaction triggers a fresh pass over the in-memory dataset;
/// the only state carried across interactions is the selection indexes
/// (clamped here) and the pagination cursors in the browse session.
pub fn build_view(
    datasets: &[BrandDataset],
    ranker: &KeywordRanker,
    browse: &BrowseSession,
    state: &mut AppState,
) -> DashboardView {
    let brand_labels: Vec<String> = datasets.iter().map(|d| d.brand.label.clone()).collect();
    state.brand_idx = state.brand_idx.min(datasets.len().saturating_sub(1));

    let dataset = &datasets[state.brand_idx];
    let keywords = ranker.rank(dataset);
    let ratings = ratings_present(&keywords);

    state.rating_idx = state.rating_idx.min(ratings.len().saturating_sub(1));
    let selected_rating = ratings.get(state.rating_idx).copied();

    let rating_keywords: Vec<KeywordEntry> = selected_rating
        .map(|r| {
            keywords_for_rating(&keywords, r)
                .into_iter()
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    state.keyword_idx = state.keyword_idx.min(rating_keywords.len().saturating_sub(1));
    let selected_keyword = rating_keywords
        .get(state.keyword_idx)
        .map(|e| e.keyword.clone());

    let page = match (selected_rating, selected_keyword.as_deref()) {
        (Some(rating), Some(keyword)) => {
            let key = FilterKey::new(dataset.brand.id.clone(), rating, keyword);
            let filtered = filter_reviews(dataset, rating, keyword);
            browse.page_view(&key, &filtered)
        }
        _ => browse.page_view(
            &FilterKey::new(dataset.brand.id.clone(), 0, ""),
            &[],
        ),
    };

    DashboardView {
        brand_labels,
        brand_idx: state.brand_idx,
        summary: BrandSummary::of(dataset),
        distribution: RatingDistribution::compute(dataset),
        keywords,
        ratings,
        selected_rating,
        rating_idx: state.rating_idx,
        rating_keywords,
        keyword_idx: state.keyword_idx,
        selected_keyword,
        page,
    }
}
