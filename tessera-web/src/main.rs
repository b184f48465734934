use std::mem;
use std::panic::{self, PanicInfo};
use std::rc::Rc;

use log::debug;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;

use tessera::{
    ActionSpec, ActionStyle, Badge, ColumnSpec, EmbeddedProvider, NavEntry,
    NavGroup, NavItem, PageslideOptions, PanelSize, Row,
};
use tessera_web::{
    init_all, init_data_table, BreadcrumbSpec, BulkAction, HeaderAction,
    PageConfig, PageHeaderConfig, Pageslide, SideNavConfig, TableConfig,
    TabsConfig,
};

fn custom_panic_hook(info: &PanicInfo) {
    // print panic message only - not entire stack trace
    let message = info.to_string();
    log::error!("{}", message);
}

pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    panic::set_hook(Box::new(custom_panic_hook));
    spawn_local(run_demo());
}

async fn run_demo() {
    let provider = EmbeddedProvider::new();

    let page = PageConfig {
        breadcrumb: Some(BreadcrumbSpec {
            items: Some("Home|Sales|Contacts".to_string()),
            ..Default::default()
        }),
        side_nav: Some(SideNavConfig {
            entries: demo_nav(),
            on_change: Some(Box::new(|nav_index, nav_id, _item| {
                debug!("nav change: {} ({})", nav_id, nav_index);
            })),
            ..Default::default()
        }),
        page_header: Some(PageHeaderConfig {
            title: "Contacts".to_string(),
            subtitle: Some("Everyone your team works with".to_string()),
            badges: vec![Badge::new("Active", "green")],
            has_breadcrumb: true,
            ..Default::default()
        }),
        tabs: Some(TabsConfig {
            tabs: vec![
                "Overview".to_string(),
                "Activity".to_string(),
                "Files".to_string(),
            ],
            has_breadcrumb: true,
            on_change: Some(Box::new(|index, label| {
                debug!("tab {} selected: {}", index, label);
            })),
            ..Default::default()
        }),
        pageslide: Some("pageslide-container".to_string()),
        ..Default::default()
    };
    let mut handles = init_all(&provider, page).await;
    let pageslide = handles.pageslide.take().map(Rc::new);

    let table = TableConfig {
        columns: demo_columns(),
        data: demo_rows(),
        badge_label: "Contacts".to_string(),
        header_actions: vec![new_contact_action(pageslide)],
        bulk_actions: vec![
            BulkAction::new(
                ActionSpec::new("assign", "Assign")
                    .with_icon("fas fa-user-plus")
                    .with_style(ActionStyle::Primary),
                |rows, indices| {
                    debug!("assign {} rows: {:?}", rows.len(), indices);
                },
            ),
            BulkAction::new(
                ActionSpec::new("delete", "Delete")
                    .with_icon("fas fa-trash")
                    .with_style(ActionStyle::LightDanger),
                |rows, _indices| {
                    debug!("delete {} rows", rows.len());
                },
            ),
        ],
        on_row_click: Some(Box::new(|row, index| {
            debug!("row {} clicked: {:?}", index, row.get("name"));
        })),
        on_action_click: Some(Box::new(|row, index, _trigger| {
            debug!("actions for row {}: {:?}", index, row.get("name"));
        })),
        ..Default::default()
    };
    match init_data_table(&provider, table).await {
        // page-lifetime instance, listeners stay attached
        Ok(table) => mem::forget(table),
        Err(error) => log::error!("data table skipped: {}", error),
    }
    mem::forget(handles);
}

fn new_contact_action(pageslide: Option<Rc<Pageslide>>) -> HeaderAction {
    HeaderAction::new(
        ActionSpec::new("new-contact", "New Contact")
            .with_icon("fas fa-plus"),
        move || {
            let panel = match &pageslide {
                Some(panel) => panel,
                None => return,
            };
            let options = PageslideOptions::new()
                .with_title("New Contact")
                .with_content("<p>Contact form goes here.</p>")
                .with_size(PanelSize::Md);
            if let Err(error) = panel.open(&options) {
                log::error!("pageslide open failed: {}", error);
            }
        },
    )
}

fn demo_nav() -> Vec<NavEntry> {
    vec![
        NavEntry::Item(
            NavItem::new("home", "Home").with_icon("fas fa-house"),
        ),
        NavEntry::Divider,
        NavEntry::Group(NavGroup {
            title: Some("Records".to_string()),
            items: vec![
                NavItem::new("accounts", "Accounts")
                    .with_icon("fas fa-building"),
                NavItem::new("contacts", "Contacts")
                    .with_icon("fas fa-address-book")
                    .with_badge("12"),
                NavItem::new("reports", "Reports")
                    .with_icon("fas fa-chart-line")
                    .with_submenu(vec![
                        NavItem::new("pipeline", "Pipeline"),
                        NavItem::new("forecast", "Forecast"),
                    ]),
            ],
        }),
    ]
}

fn demo_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::checkbox(),
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("company", "Company"),
        ColumnSpec::new("status", "Status").with_render(|value, _row| {
            let status = value.as_str().unwrap_or("unknown");
            format!(
                "<span class=\"status-badge status-{}\">{}</span>",
                status, status
            )
        }),
        ColumnSpec::actions(""),
    ]
}

fn demo_rows() -> Vec<Row> {
    let names = [
        ("Alice Moreau", "Northwind", "active"),
        ("Bob Tanaka", "Contoso", "active"),
        ("Carla Jensen", "Fabrikam", "inactive"),
        ("Derek Okafor", "Northwind", "active"),
    ];
    names
        .iter()
        .map(|(name, company, status)| {
            let value = json!({
                "name": name,
                "company": company,
                "status": status,
            });
            match value {
                serde_json::Value::Object(map) => map,
                _ => Row::new(),
            }
        })
        .collect()
}
