//! The central [`AppState`] container mutated by the event and logic layers
//! and read by the renderers.

use std::collections::BTreeSet;

use ratatui::widgets::{ListState, TableState};

use crate::state::modal::Modal;
use crate::state::types::{Criteria, Focus, Product, SortDir, SortField, ViewMode};

/// Global application state shared by the event, logic, and UI layers.
///
/// Everything session-scoped lives here: the immutable catalog, the derived
/// (filtered + sorted) view, filter criteria, sort state, the bounded
/// selection set, and per-surface open-detail slots. Nothing in this struct
/// is persisted between runs.
#[derive(Debug)]
pub struct AppState {
    /// Full catalog as loaded at startup. Never mutated after load.
    pub catalog: Vec<Product>,
    /// Derived view: products matching the criteria, in sort order. Always
    /// rebuilt in full by the pipeline, never patched.
    pub view: Vec<Product>,
    /// Active filter criteria.
    pub criteria: Criteria,
    /// Lowest price observed in the catalog.
    pub price_floor: u64,
    /// Highest price observed in the catalog.
    pub price_ceil: u64,
    /// Minimum distance kept between the two price bounds.
    pub price_gap: u64,
    /// Step used when nudging a price bound from the filter pane.
    pub price_step: u64,
    /// Every color present in the catalog, in display order.
    pub all_colors: Vec<String>,

    /// Active sort field.
    pub sort_field: SortField,
    /// Active sort direction.
    pub sort_dir: SortDir,

    /// Selected product ids for comparison (0..=4 members). Independent of
    /// view membership; filtering never clears it.
    pub selection: BTreeSet<u32>,

    /// Id of the expanded detail panel on the table surface, if any.
    pub open_detail_table: Option<u32>,
    /// Id of the expanded detail panel on the card surface, if any.
    pub open_detail_cards: Option<u32>,

    /// Cursor index into `view`.
    pub cursor: usize,
    /// Widget state for the table surface.
    pub table_state: TableState,
    /// Widget state for the card surface.
    pub card_state: ListState,

    /// Active rendering surface.
    pub view_mode: ViewMode,
    /// Focused region.
    pub focus: Focus,
    /// Active modal overlay.
    pub modal: Modal,
    /// Cursor row in the filter pane: 0 = min price, 1 = max price,
    /// 2.. = color checkboxes.
    pub filter_cursor: usize,

    /// True while the initial catalog load is pending; interactive controls
    /// are inert until it completes.
    pub loading: bool,
    /// Load failure message, when the catalog could not be read or parsed.
    pub load_error: Option<String>,
}

impl Default for AppState {
    /// Construct an empty state: no catalog, table view, Id-ascending sort,
    /// results focus, everything else at rest.
    fn default() -> Self {
        Self {
            catalog: Vec::new(),
            view: Vec::new(),
            criteria: Criteria::default(),
            price_floor: 0,
            price_ceil: 0,
            price_gap: 0,
            price_step: 1,
            all_colors: Vec::new(),
            sort_field: SortField::Id,
            sort_dir: SortDir::Asc,
            selection: BTreeSet::new(),
            open_detail_table: None,
            open_detail_cards: None,
            cursor: 0,
            table_state: TableState::default(),
            card_state: ListState::default(),
            view_mode: ViewMode::Table,
            focus: Focus::Results,
            modal: Modal::None,
            filter_cursor: 0,
            loading: true,
            load_error: None,
        }
    }
}

impl AppState {
    /// What: Product under the results cursor, if the view is non-empty.
    ///
    /// Inputs: none
    ///
    /// Output: Reference into the derived view.
    #[must_use]
    pub fn product_under_cursor(&self) -> Option<&Product> {
        self.view.get(self.cursor)
    }

    /// What: Open-detail slot for the active surface.
    ///
    /// Inputs: none
    ///
    /// Output: The id currently expanded on the table or card surface.
    #[must_use]
    pub const fn open_detail(&self) -> Option<u32> {
        match self.view_mode {
            ViewMode::Table => self.open_detail_table,
            ViewMode::Cards => self.open_detail_cards,
        }
    }

    /// What: Replace the open-detail slot for the active surface.
    ///
    /// Inputs:
    /// - `id`: New slot value (`None` closes the panel).
    ///
    /// Output: none. The other surface's slot is untouched; the two are
    /// independent by design.
    pub const fn set_open_detail(&mut self, id: Option<u32>) {
        match self.view_mode {
            ViewMode::Table => self.open_detail_table = id,
            ViewMode::Cards => self.open_detail_cards = id,
        }
    }

    /// What: Move the results cursor and mirror it into both widget states.
    ///
    /// Inputs:
    /// - `index`: Target index, clamped to the view; `None` selection when
    ///   the view is empty.
    ///
    /// Output: none.
    pub fn select_row(&mut self, index: usize) {
        if self.view.is_empty() {
            self.cursor = 0;
            self.table_state.select(None);
            self.card_state.select(None);
        } else {
            self.cursor = index.min(self.view.len() - 1);
            self.table_state.select(Some(self.cursor));
            self.card_state.select(Some(self.cursor));
        }
    }

    /// What: Whether the UI should accept filter/sort/selection input.
    ///
    /// Inputs: none
    ///
    /// Output: `false` while loading or after a failed load.
    #[must_use]
    pub const fn controls_active(&self) -> bool {
        !self.loading && self.load_error.is_none()
    }
}
