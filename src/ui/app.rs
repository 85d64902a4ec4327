use crate::api::{FetchError, SearchEndpoint, SearchPage, Story};
use crate::derived::{extract_search_term, get_last_searches, sum_comments, SortKey};
use crate::persist::SemiPersistentValue;
use crate::ui::mvi::Reducer;
use crate::ui::sort::{SortIntent, SortReducer, SortState};
use crate::ui::stories::{StoriesIntent, StoriesReducer, StoriesState};
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Search,
    List,
}

/// One request for the fetch worker.
///
/// `generation` identifies the request; only the result for the latest
/// generation is applied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FetchRequest {
    pub generation: u64,
    pub url: String,
}

#[derive(Debug)]
pub enum UiCommand {
    Fetch(FetchRequest),
}

pub type UiCommandSender = mpsc::UnboundedSender<UiCommand>;

#[derive(Clone, Copy, Debug)]
struct InFlight {
    generation: u64,
    page: u32,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Session host: owns the story list, the sort state, the search input and
/// the request log, and turns user intents into dispatches and fetches.
pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Story list state (MVI pattern).
    stories: StoriesState,
    /// Sort state of the list view (MVI pattern).
    sort: SortState,
    endpoint: SearchEndpoint,
    /// Text in the search box, persisted across runs.
    search_term: SemiPersistentValue,
    /// Every request URL issued this session, oldest first.
    urls: Vec<String>,
    generation: u64,
    in_flight: Option<InFlight>,
    /// Page whose request failed; the next page request retries it.
    failed_page: Option<u32>,
    /// Upstream reported no pages beyond the current one.
    reached_end: bool,
    /// Index into the sorted view.
    selected: usize,
    last_error: Option<&'static str>,
    command_sender: Option<UiCommandSender>,
}

impl App {
    pub fn new(endpoint: SearchEndpoint, search_term: SemiPersistentValue) -> Self {
        Self {
            should_quit: false,
            focus: Focus::List,
            stories: StoriesState::default(),
            sort: SortState::default(),
            endpoint,
            search_term,
            urls: Vec::new(),
            generation: 0,
            in_flight: None,
            failed_page: None,
            reached_end: false,
            selected: 0,
            last_error: None,
            command_sender: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Search => Focus::List,
            Focus::List => Focus::Search,
        };
    }

    pub fn stories(&self) -> &StoriesState {
        &self.stories
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn search_term(&self) -> &str {
        self.search_term.get()
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn last_error(&self) -> Option<&'static str> {
        self.last_error
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn reached_end(&self) -> bool {
        self.reached_end
    }

    /// Stories in display order.
    pub fn visible_stories(&self) -> Vec<Story> {
        self.sort.apply(&self.stories.data)
    }

    pub fn sum_comments(&self) -> u64 {
        sum_comments(&self.stories)
    }

    pub fn last_searches(&self) -> Vec<String> {
        get_last_searches(&self.urls)
    }

    /// Term of the query currently shown, which may differ from the input.
    pub fn active_term(&self) -> Option<String> {
        self.urls.last().map(|url| extract_search_term(url))
    }

    /// Initial fetch for the persisted (or default) term.
    pub fn start(&mut self) {
        let term = self.search_term.get().to_string();
        self.issue_fetch(&term, 0);
    }

    pub fn push_search_char(&mut self, ch: char) {
        let mut term = self.search_term.get().to_string();
        term.push(ch);
        self.search_term.set(term);
    }

    pub fn pop_search_char(&mut self) {
        let mut term = self.search_term.get().to_string();
        if term.pop().is_some() {
            self.search_term.set(term);
        }
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term.set(term);
    }

    /// Search for the input text. An empty input issues nothing.
    pub fn submit_search(&mut self) -> bool {
        let term = self.search_term.get().to_string();
        if term.is_empty() {
            return false;
        }
        self.new_search(&term);
        true
    }

    /// Re-run the `index`-th entry of [`App::last_searches`].
    pub fn select_last_search(&mut self, index: usize) -> bool {
        let Some(term) = self.last_searches().into_iter().nth(index) else {
            return false;
        };
        self.search_term.set(term.as_str());
        self.new_search(&term);
        true
    }

    /// Fetch the page after the current one for the active query.
    ///
    /// Ignored while a request is in flight, before the first query, and
    /// once the upstream has no further pages. A page whose request failed is
    /// requested again instead of skipped.
    pub fn request_next_page(&mut self) -> bool {
        if self.in_flight.is_some() || self.reached_end || self.stories.page == u32::MAX {
            return false;
        }
        let Some(term) = self.active_term() else {
            return false;
        };

        let page = match self.failed_page.take() {
            Some(page) => page,
            None => {
                dispatch_mvi!(self, stories, StoriesReducer, StoriesIntent::NextPage);
                self.stories.page
            }
        };
        self.issue_fetch(&term, page);
        true
    }

    pub fn select_sort(&mut self, key: SortKey) {
        dispatch_mvi!(self, sort, SortReducer, SortIntent::Select(key));
        self.selected = 0;
    }

    pub fn reset_sort(&mut self) {
        dispatch_mvi!(self, sort, SortReducer, SortIntent::Reset);
        self.selected = 0;
    }

    /// Move the selection by `delta` rows. Landing on the last row asks for
    /// the next page.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.stories.data.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let last = len - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
        if self.selected == last && delta > 0 {
            self.request_next_page();
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.move_selection(isize::MAX);
    }

    /// Dismiss the selected story.
    pub fn remove_selected(&mut self) -> Option<Story> {
        let story = self.visible_stories().into_iter().nth(self.selected)?;
        self.remove_story(story.clone());
        Some(story)
    }

    pub fn remove_story(&mut self, story: Story) {
        dispatch_mvi!(
            self,
            stories,
            StoriesReducer,
            StoriesIntent::RemoveStory { story }
        );
        self.clamp_selection();
    }

    /// Apply a settled request. Results for anything but the latest request
    /// are dropped; returns whether state changed.
    pub fn on_stories_fetched(
        &mut self,
        generation: u64,
        result: Result<SearchPage, FetchError>,
    ) -> bool {
        let Some(in_flight) = self.in_flight.filter(|f| f.generation == generation) else {
            tracing::debug!(generation, latest = self.generation, "dropping stale response");
            return false;
        };
        self.in_flight = None;

        match result {
            Ok(page) => {
                self.reached_end =
                    page.is_last() || page.hits.is_empty() || page.page == u32::MAX;
                self.failed_page = None;
                self.last_error = None;
                let replace = page.page == 0;
                dispatch_mvi!(
                    self,
                    stories,
                    StoriesReducer,
                    StoriesIntent::FetchSuccess {
                        list: page.hits,
                        page: page.page,
                    }
                );
                if replace {
                    self.selected = 0;
                }
                self.clamp_selection();
            }
            Err(err) => {
                tracing::warn!(generation, page = in_flight.page, error = %err, "fetch failed");
                self.last_error = Some(err.user_message());
                self.failed_page = Some(in_flight.page);
                dispatch_mvi!(self, stories, StoriesReducer, StoriesIntent::FetchFailure);
            }
        }
        true
    }

    fn new_search(&mut self, term: &str) {
        dispatch_mvi!(self, sort, SortReducer, SortIntent::Reset);
        self.reached_end = false;
        self.failed_page = None;
        self.selected = 0;
        self.issue_fetch(term, 0);
    }

    fn issue_fetch(&mut self, term: &str, page: u32) {
        self.generation += 1;
        let request = FetchRequest {
            generation: self.generation,
            url: self.endpoint.url(term, page),
        };
        self.urls.push(request.url.clone());
        self.in_flight = Some(InFlight {
            generation: request.generation,
            page,
        });
        dispatch_mvi!(self, stories, StoriesReducer, StoriesIntent::FetchInit);
        tracing::debug!(generation = request.generation, url = %request.url, "issuing fetch");

        if let Some(sender) = &self.command_sender {
            if sender.send(UiCommand::Fetch(request)).is_err() {
                tracing::warn!("fetch worker is gone");
                self.in_flight = None;
                self.last_error = Some("Fetch worker stopped");
                self.failed_page = Some(page);
                dispatch_mvi!(self, stories, StoriesReducer, StoriesIntent::FetchFailure);
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.stories.data.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
