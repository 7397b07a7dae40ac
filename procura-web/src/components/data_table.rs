//! Generic table used by every collection page.

use i18nrs::yew::use_translation;
use yew::{Html, Properties, function_component, html};
use yew_router::prelude::Link;

use crate::format::format_money;
use crate::routes::AppRoute;

/// One rendered table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// A translation key, resolved at render time.
    Translated(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn translated(key: impl Into<String>) -> Self {
        Self::Translated(key.into())
    }

    pub fn flag(value: bool) -> Self {
        Self::translated(if value { "common.yes" } else { "common.no" })
    }

    /// Money total, or a translated marker when it overflowed.
    pub fn money(minor: Option<i64>, currency: &str) -> Self {
        minor.map_or_else(
            || Self::translated("common.overflow"),
            |minor| Self::text(format_money(minor, currency)),
        )
    }

    pub fn optional(value: Option<&str>) -> Self {
        value.map_or_else(|| Self::translated("common.none"), Self::text)
    }
}

/// A record that can be listed in a [`DataTable`].
pub trait TableRow: Clone + PartialEq + 'static {
    /// Translation keys of the column headers.
    fn columns() -> Vec<&'static str>;
    /// Cells in the same order as [`TableRow::columns`].
    fn cells(&self) -> Vec<Cell>;
    fn detail_route(&self) -> AppRoute;
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps<R: TableRow> {
    pub rows: Vec<R>,
}

#[function_component(DataTable)]
pub fn data_table<R: TableRow>(props: &DataTableProps<R>) -> Html {
    let (i18n, ..) = use_translation();

    if props.rows.is_empty() {
        return html! {
            <div class="alert">{ i18n.t("common.empty") }</div>
        };
    }

    let render_cell = |cell: Cell| match cell {
        Cell::Text(text) => text,
        Cell::Translated(key) => i18n.t(&key),
    };

    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        { for R::columns().into_iter().map(|key| html! { <th>{ i18n.t(key) }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for props.rows.iter().map(|row| {
                        let route = row.detail_route();
                        let mut cells = row.cells().into_iter().map(render_cell);
                        let first = cells.next().unwrap_or_default();
                        html! {
                            <tr class="hover">
                                <td>
                                    <Link<AppRoute> to={route} classes="link link-primary">{ first }</Link<AppRoute>>
                                </td>
                                { for cells.map(|text| html! { <td>{ text }</td> }) }
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helper_cells_pick_translation_keys() {
        assert_eq!(Cell::flag(true), Cell::Translated("common.yes".to_string()));
        assert_eq!(Cell::flag(false), Cell::Translated("common.no".to_string()));
        assert_eq!(Cell::optional(None), Cell::Translated("common.none".to_string()));
        assert_eq!(Cell::optional(Some("x")), Cell::Text("x".to_string()));
    }

    #[test]
    fn money_cell_marks_overflow() {
        assert_eq!(Cell::money(Some(2_100), "EUR"), Cell::text("€21.00"));
        assert_eq!(Cell::money(None, "EUR"), Cell::translated("common.overflow"));
    }
}
