use gpui::*;
use gpui_component::{
    button::{Button, ButtonVariants},
    h_flex, v_flex, ActiveTheme, IconName, Sizable,
};

use crate::panel::ColumnManagementPanel;

/// Selectable entry of the table or column list
fn list_button(id: SharedString, label: SharedString, is_selected: bool) -> Button {
    let button = Button::new(id).label(label).xsmall().w_full();
    if is_selected {
        button.primary()
    } else {
        button.ghost()
    }
}

/// Modal for picking the table and column a column references
pub(in crate::panel) fn render_relation_modal(
    this: &ColumnManagementPanel,
    cx: &mut Context<ColumnManagementPanel>,
) -> impl IntoElement {
    let Some(editor) = this.management.relation_editor() else {
        return div().into_any_element();
    };

    let column_name: SharedString = editor.column().name.clone().into();
    let selected_table = editor
        .selected_table()
        .map(|t| (t.schema.clone(), t.name.clone()));
    let selected_column = editor.selected_column().map(|c| c.name.clone());

    let mut table_items: Vec<AnyElement> = Vec::with_capacity(editor.tables().len());
    for table in editor.tables() {
        let schema: SharedString = table.schema.clone().into();
        let name: SharedString = table.name.clone().into();
        let is_selected = selected_table
            .as_ref()
            .is_some_and(|(s, n)| *s == table.schema && *n == table.name);

        table_items.push(
            list_button(
                SharedString::from(format!("relation-table-{}", table.id)),
                table.qualified_name().into(),
                is_selected,
            )
            .on_click(cx.listener(move |this, _, _window, cx| {
                this.handle_select_relation_table(schema.clone(), name.clone(), cx);
            }))
            .into_any_element(),
        );
    }

    let mut column_items: Vec<AnyElement> = Vec::with_capacity(editor.available_columns().len());
    for column in editor.available_columns() {
        let name: SharedString = column.name.clone().into();
        let is_selected = selected_column.as_deref() == Some(column.name.as_str());
        let label: SharedString = format!("{} ({})", column.name, column.format).into();

        let item = list_button(
            SharedString::from(format!("relation-column-{}", column.id)),
            label,
            is_selected,
        );
        // Mark what the column references today
        let item = if editor.is_current_target(column) {
            item.icon(IconName::Check).tooltip("Current reference")
        } else {
            item
        };

        column_items.push(
            item.on_click(cx.listener(move |this, _, _window, cx| {
                this.handle_select_relation_column(name.clone(), cx);
            }))
            .into_any_element(),
        );
    }

    let theme = cx.theme();

    let error = this
        .relation_error
        .clone()
        .map(|message| div().text_xs().text_color(theme.danger).child(message));

    div()
        .id("relation-modal-overlay")
        .absolute()
        .inset_0()
        .flex()
        .items_center()
        .justify_center()
        .bg(theme.background.opacity(0.8))
        .child(
            v_flex()
                .id("relation-modal")
                .w(px(560.0))
                .gap_3()
                .p_4()
                .rounded(theme.radius)
                .border_1()
                .border_color(theme.border)
                .bg(theme.popover)
                .text_color(theme.popover_foreground)
                .child(
                    div()
                        .text_base()
                        .font_weight(FontWeight::SEMIBOLD)
                        .child(format!("Edit foreign key relation for \"{}\"", column_name)),
                )
                .child(
                    h_flex()
                        .items_start()
                        .gap_3()
                        .child(
                            v_flex()
                                .id("relation-tables")
                                .flex_1()
                                .gap_1()
                                .max_h(px(280.0))
                                .overflow_y_scroll()
                                .child(div().text_xs().text_color(theme.muted_foreground).child("Table"))
                                .children(table_items),
                        )
                        .child(
                            v_flex()
                                .id("relation-columns")
                                .flex_1()
                                .gap_1()
                                .max_h(px(280.0))
                                .overflow_y_scroll()
                                .child(div().text_xs().text_color(theme.muted_foreground).child("Column"))
                                .children(column_items),
                        ),
                )
                .children(error)
                .child(
                    h_flex()
                        .justify_end()
                        .gap_2()
                        .child(
                            Button::new("relation-remove")
                                .label("Remove relation")
                                .small()
                                .danger()
                                .on_click(cx.listener(|this, _, _window, cx| {
                                    this.handle_clear_relation(cx);
                                })),
                        )
                        .child(
                            Button::new("relation-cancel")
                                .label("Cancel")
                                .small()
                                .outline()
                                .on_click(cx.listener(|this, _, _window, cx| {
                                    this.handle_cancel_relation(cx);
                                })),
                        )
                        .child(
                            Button::new("relation-save")
                                .label("Save")
                                .small()
                                .primary()
                                .on_click(cx.listener(|this, _, _window, cx| {
                                    this.handle_save_relation(cx);
                                })),
                        ),
                ),
        )
        .into_any_element()
}
