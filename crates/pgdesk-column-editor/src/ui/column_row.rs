use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{
    button::{Button, ButtonVariants},
    checkbox::Checkbox,
    h_flex,
    input::{Input, InputState},
    select::{Select, SelectState},
    v_flex, ActiveTheme, IconName, Sizable,
};

use crate::columns::ColumnGroup;
use crate::layout::HeaderCellKind;
use crate::models::{ColumnField, ColumnTypeOption};
use crate::panel::{ColumnManagementPanel, DraggedColumn};

/// Widgets of one row, cloned out of the panel before building elements
struct RowWidgets {
    name_input: Entity<InputState>,
    default_input: Entity<InputState>,
    type_select: Entity<SelectState<Vec<ColumnTypeOption>>>,
}

/// One drop area holding the rows of a group.
///
/// Rows only accept drops coming from the same group of the same panel.
pub(in crate::panel) fn render_group(
    this: &ColumnManagementPanel,
    group: ColumnGroup,
    columns: Vec<ColumnField>,
    cx: &mut Context<ColumnManagementPanel>,
) -> impl IntoElement {
    let is_new_record = this.management.props().is_new_record;
    let has_import_content = this.management.has_import_content();
    let widths: Vec<(HeaderCellKind, f32)> = this
        .management
        .header_cells()
        .into_iter()
        .map(|cell| (cell.kind, cell.width))
        .collect();

    let mut rows: Vec<AnyElement> = Vec::with_capacity(columns.len());
    for (index, column) in columns.into_iter().enumerate() {
        let widgets = this.row_editors.get(&column.id).map(|editor| RowWidgets {
            name_input: editor.name_input.clone(),
            default_input: editor.default_input.clone(),
            type_select: editor.type_select.clone(),
        });
        rows.push(
            render_row(
                group,
                index,
                column,
                widgets,
                &widths,
                is_new_record,
                has_import_content,
                cx,
            )
            .into_any_element(),
        );
    }

    let theme = cx.theme();

    v_flex()
        .id(group.droppable_id())
        .gap_1()
        .py_2()
        .rounded(theme.radius)
        .when(is_new_record, |el| el.px_3())
        .when(group == ColumnGroup::PrimaryKeys, |el| el.px_3().bg(theme.muted))
        .children(rows)
}

fn width_of(widths: &[(HeaderCellKind, f32)], kind: HeaderCellKind) -> f32 {
    widths
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, w)| *w)
        .unwrap_or(0.0)
}

#[allow(clippy::too_many_arguments)]
fn render_row(
    group: ColumnGroup,
    index: usize,
    column: ColumnField,
    widgets: Option<RowWidgets>,
    widths: &[(HeaderCellKind, f32)],
    is_new_record: bool,
    has_import_content: bool,
    cx: &mut Context<ColumnManagementPanel>,
) -> impl IntoElement {
    let theme = cx.theme();

    let id = column.id;
    let is_primary_key = column.is_primary_key;
    let is_nullable = column.is_nullable;
    let name: SharedString = if column.name.is_empty() {
        "column_name".into()
    } else {
        column.name.clone().into()
    };
    let relation: Option<SharedString> = column
        .foreign_key
        .as_ref()
        .map(|fk| format!("→ {}", fk.target_path()).into());
    let (name_input, default_input, type_select) = match widgets {
        Some(w) => (Some(w.name_input), Some(w.default_input), Some(w.type_select)),
        None => (None, None, None),
    };

    let dragged = DraggedColumn {
        entity_id: cx.entity_id(),
        group,
        index,
        name: name.clone(),
    };

    h_flex()
        .id(SharedString::from(format!("column-{}", id)))
        .w_full()
        .gap_1()
        .py_1()
        .rounded(theme.radius)
        .bg(if index % 2 == 0 { theme.table_even } else { theme.table })
        .when(is_new_record, |el| {
            el.on_drag(dragged, |drag, _, _, cx| {
                cx.stop_propagation();
                cx.new(|_| drag.clone())
            })
            .drag_over::<DraggedColumn>(move |style, drag, _, cx| {
                if drag.group == group {
                    style.border_t_2().border_color(cx.theme().drag_border)
                } else {
                    style
                }
            })
            .on_drop(cx.listener(move |this, drag: &DraggedColumn, _window, cx| {
                this.handle_drop(drag, group, index, cx);
            }))
        })
        .when(is_new_record, |el| {
            el.child(
                div()
                    .w(relative(width_of(widths, HeaderCellKind::DragHandle)))
                    .cursor_grab()
                    .text_color(theme.muted_foreground)
                    .child("⋮⋮"),
            )
        })
        // Name, with the referenced column underneath
        .child(
            v_flex()
                .w(relative(width_of(widths, HeaderCellKind::Name)))
                .gap_1()
                .map(|el| match name_input {
                    Some(input) => el.child(Input::new(&input).xsmall().w_full()),
                    None => el.child(div().text_sm().child(name)),
                })
                .children(
                    relation.map(|r| div().text_xs().text_color(theme.muted_foreground).child(r)),
                ),
        )
        // Type picker
        .child(
            div()
                .w(relative(width_of(widths, HeaderCellKind::Type)))
                .when_some(type_select, |el, ts| {
                    el.child(Select::new(&ts).xsmall().placeholder("Choose a type"))
                }),
        )
        // Default value and nullability
        .child(
            h_flex()
                .w(relative(width_of(widths, HeaderCellKind::DefaultValue)))
                .gap_2()
                .when_some(default_input, |el, input| {
                    el.child(div().flex_1().child(Input::new(&input).xsmall().w_full()))
                })
                .child(
                    Checkbox::new(SharedString::from(format!("column-nullable-{}", id)))
                        .label("Null")
                        .checked(is_nullable)
                        .on_click(cx.listener(move |this, checked: &bool, _window, cx| {
                            this.handle_set_nullable(id, *checked, cx);
                        })),
                ),
        )
        .child(
            div()
                .w(relative(width_of(widths, HeaderCellKind::Primary)))
                .flex()
                .justify_center()
                .child(
                    Checkbox::new(SharedString::from(format!("column-pk-{}", id)))
                        .checked(is_primary_key)
                        .on_click(cx.listener(move |this, checked: &bool, _window, cx| {
                            this.handle_set_primary_key(id, *checked, cx);
                        })),
                ),
        )
        .child(div().w(relative(width_of(widths, HeaderCellKind::Spacer))))
        .child(
            div()
                .w(relative(width_of(widths, HeaderCellKind::Configure)))
                .child(
                    Button::new(SharedString::from(format!("column-relation-{}", id)))
                        .icon(IconName::ExternalLink)
                        .xsmall()
                        .ghost()
                        .tooltip("Edit foreign key relation")
                        .on_click(cx.listener(move |this, _, _window, cx| {
                            this.handle_edit_relation(id, cx);
                        })),
                ),
        )
        .when(!has_import_content, |el| {
            el.child(
                div()
                    .w(relative(width_of(widths, HeaderCellKind::Remove)))
                    .child(
                        Button::new(SharedString::from(format!("column-remove-{}", id)))
                            .icon(IconName::CircleX)
                            .xsmall()
                            .ghost()
                            .tooltip("Remove column")
                            .on_click(cx.listener(move |this, _, _window, cx| {
                                this.handle_remove_column(id, cx);
                            })),
                    ),
            )
        })
}
