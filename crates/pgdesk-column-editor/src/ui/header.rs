use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{
    button::{Button, ButtonVariants},
    h_flex,
    tooltip::Tooltip,
    ActiveTheme, IconName, Sizable,
};

use crate::panel::ColumnManagementPanel;

/// "Columns" title with the import actions for new tables
pub(in crate::panel) fn render_title_bar(
    this: &ColumnManagementPanel,
    cx: &mut Context<ColumnManagementPanel>,
) -> impl IntoElement {
    let shows_import_actions = this.management.shows_import_actions();
    let has_import_content = this.management.has_import_content();

    h_flex()
        .w_full()
        .justify_between()
        .child(div().text_base().font_weight(FontWeight::SEMIBOLD).child("Columns"))
        .when(shows_import_actions && has_import_content, |el| {
            el.child(
                h_flex()
                    .gap_2()
                    .child(
                        Button::new("edit-import-content")
                            .label("Edit content")
                            .small()
                            .outline()
                            .on_click(cx.listener(|this, _, _window, cx| {
                                this.handle_select_import_data(cx);
                            })),
                    )
                    .child(
                        Button::new("remove-import-content")
                            .label("Remove content")
                            .small()
                            .danger()
                            .on_click(cx.listener(|this, _, _window, cx| {
                                this.handle_clear_import_content(cx);
                            })),
                    ),
            )
        })
        .when(shows_import_actions && !has_import_content, |el| {
            el.child(
                Button::new("import-data")
                    .label("Import data via spreadsheet")
                    .small()
                    .outline()
                    .on_click(cx.listener(|this, _, _window, cx| {
                        this.handle_select_import_data(cx);
                    })),
            )
        })
}

/// Header row labelling the column cells
pub(in crate::panel) fn render_column_header(
    this: &ColumnManagementPanel,
    cx: &mut Context<ColumnManagementPanel>,
) -> impl IntoElement {
    let theme = cx.theme();

    let cells = this.management.header_cells().into_iter().map(|cell| {
        h_flex()
            .w(relative(cell.width))
            .gap_1()
            .text_xs()
            .text_color(theme.muted_foreground)
            .when_some(cell.label, |el, label| el.child(label))
            .when_some(cell.hint, |el, hint| {
                el.child(
                    div()
                        .id("default-value-hint")
                        .child("?")
                        .tooltip(move |window, cx| Tooltip::new(hint).build(window, cx)),
                )
            })
    });

    h_flex()
        .w_full()
        .px_3()
        .py_1()
        .bg(theme.table_head)
        .border_b_1()
        .border_color(theme.border)
        .children(cells)
}

/// "Add column" button, hidden while import content is staged
pub(in crate::panel) fn render_add_column_button(
    cx: &mut Context<ColumnManagementPanel>,
) -> impl IntoElement {
    Button::new("add-column")
        .icon(IconName::Plus)
        .label("Add column")
        .small()
        .outline()
        .on_click(cx.listener(|this, _, _window, cx| {
            this.handle_add_column(cx);
        }))
}
