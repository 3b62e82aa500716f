use gpui::*;
use gpui_component::{v_flex, ActiveTheme};

use crate::notices::NoticeSeverity;
use crate::panel::ColumnManagementPanel;

/// Import summary and primary key banners
pub(in crate::panel) fn render_notices(
    this: &ColumnManagementPanel,
    cx: &mut Context<ColumnManagementPanel>,
) -> impl IntoElement {
    let theme = cx.theme();

    let summary = this.management.import_summary().map(|summary| {
        div()
            .my_2()
            .text_sm()
            .text_color(theme.muted_foreground)
            .child(summary)
    });

    let banner = this.management.primary_key_notice().map(|notice| {
        let accent = match notice.severity() {
            NoticeSeverity::Warning => theme.warning,
            NoticeSeverity::Info => theme.info,
        };

        v_flex()
            .gap_1()
            .p_3()
            .rounded(theme.radius)
            .border_1()
            .border_color(accent)
            .bg(theme.muted)
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(accent)
                    .child(notice.title()),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(theme.muted_foreground)
                    .child(notice.description()),
            )
    });

    v_flex().gap_2().children(summary).children(banner)
}
