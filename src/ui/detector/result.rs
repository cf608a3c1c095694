use crate::analysis::{Inline, RenderedResult, ResultBlock};
use dioxus::prelude::*;

/// Verdict badge followed by the reply's sections
#[component]
pub fn ResultCard(rendered: RenderedResult) -> Element {
    let content_class = if rendered.is_unsegmented() {
        "result-content unsegmented"
    } else {
        "result-content"
    };

    rsx! {
        div {
            class: "result-card",

            if let Some(badge) = rendered.badge {
                div {
                    class: "result-header",
                    span {
                        class: "verdict-badge {badge.class()}",
                        "{badge.icon} {badge.label}"
                    }
                }
            }

            div {
                class: content_class,
                for (idx, block) in rendered.blocks.into_iter().enumerate() {
                    ResultBlockView { key: "{idx}", block }
                }
            }
        }
    }
}

#[component]
fn ResultBlockView(block: ResultBlock) -> Element {
    match block {
        ResultBlock::Panel { title, icon, body } => rsx! {
            div {
                class: "result-panel",
                div {
                    class: "panel-heading",
                    span { class: "panel-icon", "{icon}" }
                    strong { "{title}" }
                }
                p { class: "panel-body", InlineText { spans: body } }
            }
        },
        ResultBlock::Score { headline, percentage, tier } => rsx! {
            div {
                class: "score-panel score-{tier.as_str()}",
                div {
                    class: "panel-heading",
                    span { class: "panel-icon", "📊" }
                    strong { "Credibility Score" }
                }
                div {
                    class: "score-body",
                    div {
                        class: "score-figure",
                        style: "color: {tier.color()};",
                        "{headline}"
                    }
                    div {
                        class: "score-track",
                        div {
                            class: "score-fill",
                            style: "background: {tier.color()}; width: {percentage}%;",
                        }
                    }
                }
            }
        },
        ResultBlock::Paragraph(spans) => rsx! {
            p { class: "result-text", InlineText { spans } }
        },
    }
}

#[component]
fn InlineText(spans: Vec<Inline>) -> Element {
    rsx! {
        for span in spans {
            {inline_node(span)}
        }
    }
}

fn inline_node(span: Inline) -> Element {
    match span {
        Inline::Text(text) => rsx! { "{text}" },
        Inline::Strong(text) => rsx! { strong { class: "emphasis", "{text}" } },
        Inline::LineBreak => rsx! { br {} },
    }
}
