use std::cell::RefCell;
use std::rc::Rc;

use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement};

use tessera::{
    body_rows, bulk_action_buttons, header_action_buttons, header_row,
    selected_phrase, ActionSpec, ColumnSpec, ComponentError, Row, TableState,
    TemplateProvider, FRAGMENT_DATA_TABLE,
};

use crate::helpers::{closest, event_target_element, js_error, DomListener};
use crate::mount::mount_fragment;

pub const DEFAULT_CONTAINER: &str = "data-table-container";

/// Toolbar action; always visible next to the search box.
pub struct HeaderAction {
    pub spec: ActionSpec,
    pub on_click: Box<dyn Fn()>,
}

impl HeaderAction {
    pub fn new(spec: ActionSpec, on_click: impl Fn() + 'static) -> Self {
        HeaderAction {
            spec,
            on_click: Box::new(on_click),
        }
    }
}

/// Bulk action; shown while rows are selected. The callback receives
/// the selected rows and their indices.
pub struct BulkAction {
    pub spec: ActionSpec,
    pub on_click: Box<dyn Fn(&[Row], &[usize])>,
}

impl BulkAction {
    pub fn new(
        spec: ActionSpec,
        on_click: impl Fn(&[Row], &[usize]) + 'static,
    ) -> Self {
        BulkAction {
            spec,
            on_click: Box::new(on_click),
        }
    }
}

pub struct TableConfig {
    pub container_id: String,
    pub columns: Vec<ColumnSpec>,
    pub data: Vec<Row>,
    /// Label next to the row-count badge.
    pub badge_label: String,
    pub header_actions: Vec<HeaderAction>,
    pub bulk_actions: Vec<BulkAction>,
    /// Clicks anywhere in a row except checkboxes and the actions
    /// trigger; receives the visible row and its index.
    pub on_row_click: Option<Box<dyn Fn(&Row, usize)>>,
    /// Clicks on a row's actions trigger; receives the visible row,
    /// its index and the trigger element for menu positioning.
    pub on_action_click: Option<Box<dyn Fn(&Row, usize, &Element)>>,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            container_id: DEFAULT_CONTAINER.to_string(),
            columns: Vec::new(),
            data: Vec::new(),
            badge_label: "Items".to_string(),
            header_actions: Vec::new(),
            bulk_actions: Vec::new(),
            on_row_click: None,
            on_action_click: None,
        }
    }
}

/// A mounted data table. Dropping the handle detaches both listeners;
/// call `detach` before remounting into the same container.
pub struct DataTable {
    _click_listener: DomListener,
    _search_listener: Option<DomListener>,
}

impl DataTable {
    pub fn detach(self) {}
}

/// Mounts the data-table skeleton, renders headers and rows from the
/// configured columns and dataset, and wires exactly two listeners:
/// one delegated click listener on the table wrapper and one input
/// listener on the search box. All row, checkbox, action-button and
/// action-trigger clicks route through the delegated listener.
pub async fn init_data_table(
    provider: &dyn TemplateProvider,
    config: TableConfig,
) -> Result<DataTable, ComponentError> {
    let container =
        mount_fragment(provider, &config.container_id, FRAGMENT_DATA_TABLE)
            .await?;
    let wrapper = container
        .query_selector(".data-table-wrapper")
        .map_err(js_error)?
        .ok_or_else(|| {
            ComponentError::Dom("data table wrapper missing".to_string())
        })?;

    let TableConfig {
        columns,
        data,
        badge_label,
        header_actions,
        bulk_actions,
        on_row_click,
        on_action_click,
        ..
    } = config;

    let instance = Rc::new(TableInstance {
        wrapper: wrapper.clone(),
        columns,
        state: RefCell::new(TableState::new(data)),
        header_actions,
        bulk_actions,
        on_row_click,
        on_action_click,
    });

    set_text(&wrapper, ".table-badge-label", &badge_label)?;
    if !instance.header_actions.is_empty() {
        let specs: Vec<ActionSpec> = instance
            .header_actions
            .iter()
            .map(|action| action.spec.clone())
            .collect();
        set_html(
            &wrapper,
            "#header-actions-container",
            &header_action_buttons(&specs),
        )?;
    }
    if instance.has_bulk_actions() {
        let specs: Vec<ActionSpec> = instance
            .bulk_actions
            .iter()
            .map(|action| action.spec.clone())
            .collect();
        set_html(
            &wrapper,
            "#bulk-actions-buttons",
            &bulk_action_buttons(&specs),
        )?;
    }
    set_html(
        &wrapper,
        "#table-header-row",
        &header_row(&instance.columns),
    )?;
    instance.render_body()?;
    instance.refresh_badge()?;

    let click_listener = {
        let instance = Rc::clone(&instance);
        let callback =
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                if let Err(err) = instance.handle_click(&event) {
                    error!("table click dispatch failed: {}", err);
                }
            });
        DomListener::attach(&wrapper, "click", callback)?
    };

    let search_listener = match wrapper
        .query_selector(".search-input-table")
        .map_err(js_error)?
    {
        Some(input) => {
            let input: HtmlInputElement =
                input.dyn_into().map_err(|_| {
                    ComponentError::Dom(
                        "search input is not an input element".to_string(),
                    )
                })?;
            let instance = Rc::clone(&instance);
            let input_for_closure = input.clone();
            let callback =
                Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                    let query = input_for_closure.value();
                    if let Err(err) = instance.handle_search(&query) {
                        error!("table search failed: {}", err);
                    }
                });
            Some(DomListener::attach(&input, "input", callback)?)
        }
        None => None,
    };

    Ok(DataTable {
        _click_listener: click_listener,
        _search_listener: search_listener,
    })
}

struct TableInstance {
    wrapper: Element,
    columns: Vec<ColumnSpec>,
    state: RefCell<TableState>,
    header_actions: Vec<HeaderAction>,
    bulk_actions: Vec<BulkAction>,
    on_row_click: Option<Box<dyn Fn(&Row, usize)>>,
    on_action_click: Option<Box<dyn Fn(&Row, usize, &Element)>>,
}

impl TableInstance {
    fn has_bulk_actions(&self) -> bool {
        !self.bulk_actions.is_empty()
    }

    /// Routes one click to the matching region. Order matters: the
    /// checkbox and trigger branches return before the row branch, so
    /// a row click never fires for them.
    fn handle_click(&self, event: &Event) -> Result<(), ComponentError> {
        let target = match event_target_element(event) {
            Some(target) => target,
            None => return Ok(()),
        };
        if closest(&target, ".select-all-checkbox").is_some() {
            return self.handle_select_all(&target);
        }
        if let Some(checkbox) = closest(&target, ".row-checkbox") {
            return self.handle_row_checkbox(&checkbox);
        }
        if let Some(button) = closest(&target, ".actions-menu-btn") {
            event.stop_propagation();
            return self.handle_action_trigger(&button);
        }
        if let Some(button) = closest(&target, "[data-action]") {
            return self.handle_action_button(&button);
        }
        if let Some(row) = closest(&target, "tr[data-row-index]") {
            return self.handle_row_activation(&row);
        }
        Ok(())
    }

    fn handle_select_all(
        &self,
        target: &Element,
    ) -> Result<(), ComponentError> {
        let checked = match target.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.checked(),
            None => return Ok(()),
        };
        {
            let mut state = self.state.borrow_mut();
            if checked {
                state.select_all();
            } else {
                state.clear_selection();
            }
        }
        self.render_body()?;
        if self.has_bulk_actions() {
            self.update_bulk_bar()?;
        }
        Ok(())
    }

    fn handle_row_checkbox(
        &self,
        checkbox: &Element,
    ) -> Result<(), ComponentError> {
        let index = match row_index_of(checkbox) {
            Some(index) => index,
            None => return Ok(()),
        };
        let checked = match checkbox.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.checked(),
            None => return Ok(()),
        };
        self.state.borrow_mut().set_selected(index, checked);
        self.sync_select_all()?;
        if self.has_bulk_actions() {
            self.update_bulk_bar()?;
        }
        Ok(())
    }

    fn handle_action_trigger(
        &self,
        button: &Element,
    ) -> Result<(), ComponentError> {
        let index = match row_index_of(button) {
            Some(index) => index,
            None => return Ok(()),
        };
        let row = {
            let state = self.state.borrow();
            match state.visible_row(index) {
                Some(row) => row.clone(),
                None => return Ok(()),
            }
        };
        if let Some(on_action_click) = &self.on_action_click {
            on_action_click(&row, index, button);
        }
        Ok(())
    }

    fn handle_action_button(
        &self,
        button: &Element,
    ) -> Result<(), ComponentError> {
        let id = button.get_attribute("data-action").unwrap_or_default();
        if closest(button, "#bulk-actions-buttons").is_some() {
            if let Some(action) =
                self.bulk_actions.iter().find(|action| action.spec.id == id)
            {
                let (rows, indices) = {
                    let state = self.state.borrow();
                    let rows: Vec<Row> = state
                        .selected_rows()
                        .into_iter()
                        .cloned()
                        .collect();
                    (rows, state.selected_indices())
                };
                (action.on_click)(&rows, &indices);
            }
        } else if closest(button, "#header-actions-container").is_some() {
            if let Some(action) = self
                .header_actions
                .iter()
                .find(|action| action.spec.id == id)
            {
                (action.on_click)();
            }
        }
        Ok(())
    }

    fn handle_row_activation(
        &self,
        row_element: &Element,
    ) -> Result<(), ComponentError> {
        let index = match row_index_of(row_element) {
            Some(index) => index,
            None => return Ok(()),
        };
        let row = {
            let state = self.state.borrow();
            match state.visible_row(index) {
                Some(row) => row.clone(),
                None => return Ok(()),
            }
        };
        if let Some(on_row_click) = &self.on_row_click {
            on_row_click(&row, index);
        }
        Ok(())
    }

    fn handle_search(&self, query: &str) -> Result<(), ComponentError> {
        self.state.borrow_mut().apply_filter(query, &self.columns);
        self.refresh_badge()?;
        self.render_body()?;
        self.sync_select_all()?;
        if self.has_bulk_actions() {
            self.update_bulk_bar()?;
        }
        Ok(())
    }

    fn render_body(&self) -> Result<(), ComponentError> {
        let state = self.state.borrow();
        set_html(
            &self.wrapper,
            "#table-body",
            &body_rows(&self.columns, &state),
        )
    }

    fn refresh_badge(&self) -> Result<(), ComponentError> {
        let count = self.state.borrow().visible_len();
        set_text(&self.wrapper, ".table-badge", &count.to_string())
    }

    fn sync_select_all(&self) -> Result<(), ComponentError> {
        let all = self.state.borrow().all_selected();
        if let Some(element) = self
            .wrapper
            .query_selector("#select-all-checkbox")
            .map_err(js_error)?
        {
            if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                input.set_checked(all);
            }
        }
        Ok(())
    }

    /// Swaps the badge for the bulk bar while a selection exists and
    /// keeps the "k items selected" overlay current.
    fn update_bulk_bar(&self) -> Result<(), ComponentError> {
        let count = self.state.borrow().selected_count();
        if count > 0 {
            set_display(&self.wrapper, "#bulk-actions-bar", "flex")?;
            set_display(&self.wrapper, "#bulk-selected-overlay", "block")?;
            set_display(&self.wrapper, ".table-badge-container", "none")?;
            set_text(
                &self.wrapper,
                "#bulk-selected-count",
                &selected_phrase(count),
            )?;
        } else {
            set_display(&self.wrapper, "#bulk-actions-bar", "none")?;
            set_display(&self.wrapper, "#bulk-selected-overlay", "none")?;
            set_display(&self.wrapper, ".table-badge-container", "flex")?;
        }
        if let Some(th) = self
            .wrapper
            .query_selector(".data-table thead th:nth-child(2)")
            .map_err(js_error)?
        {
            if count > 0 {
                th.class_list()
                    .add_1("bulk-selection-active")
                    .map_err(js_error)?;
            } else {
                th.class_list()
                    .remove_1("bulk-selection-active")
                    .map_err(js_error)?;
            }
        }
        Ok(())
    }
}

fn row_index_of(element: &Element) -> Option<usize> {
    element
        .get_attribute("data-row-index")
        .and_then(|value| value.parse::<usize>().ok())
}

fn set_html(
    root: &Element,
    selector: &str,
    html: &str,
) -> Result<(), ComponentError> {
    if let Some(element) = root.query_selector(selector).map_err(js_error)? {
        element.set_inner_html(html);
    }
    Ok(())
}

fn set_text(
    root: &Element,
    selector: &str,
    text: &str,
) -> Result<(), ComponentError> {
    if let Some(element) = root.query_selector(selector).map_err(js_error)? {
        element.set_text_content(Some(text));
    }
    Ok(())
}

fn set_display(
    root: &Element,
    selector: &str,
    value: &str,
) -> Result<(), ComponentError> {
    if let Some(element) = root.query_selector(selector).map_err(js_error)? {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            html.style()
                .set_property("display", value)
                .map_err(js_error)?;
        }
    }
    Ok(())
}
