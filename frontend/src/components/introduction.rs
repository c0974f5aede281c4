//! "Why choose us" feature cards.
//!
//! Card paragraphs are plain strings. A paragraph written as
//! `intro- item- item` renders as an intro line followed by a bullet list.

use leptos::*;

use crate::services::scroll_to_section;

struct Feature {
    icon: &'static str,
    image: &'static str,
    title: &'static str,
    subtitle: &'static str,
    paragraphs: &'static [&'static str],
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "🧠",
        image: "assets/ai-tech.jpg",
        title: "尖端AI技术，重新定义质量检测",
        subtitle: "超越表面纠错，赋能深度学术洞察",
        paragraphs: &[
            "我们依托前沿的人工智能技术，打造出新一代学术质量检测引擎。它不仅能处理文本，更能深度理解学术内涵。",
            "- 底层架构：基于强大的自然语言处理（NLP）与深度学习架构，具备像人类专家一样的语义解析与逻辑推理能力。- 多维分析：对文本进行语法、结构、逻辑、论证效力及学术规范性的全方位、多模态扫描，精准定位深层问题。- 智能进化：系统依托持续学习机制，在不断处理海量优质学术文本中自我迭代，确保检测能力始终位于行业前沿。",
        ],
    },
    Feature {
        icon: "🗄️",
        image: "assets/database.jpg",
        title: "超庞大的数据库，更精准",
        subtitle: "海量学术数据，您的专属评分标准",
        paragraphs: &[
            "判断精准，因为我们见识广。我们的系统经过海量优质学术数据的训练。",
            "覆盖全面： 内含百万篇各学科论文、作业和课件数据，支撑起庞大的知识点地图。- 对标标杆： 无论您是什么专业，您的作品都在与高质量的学术基准进行比对。- 洞察趋势： 了解不同院校的常见要求与误区，让您的作业更符合期待。",
        ],
    },
    Feature {
        icon: "🛡️",
        image: "assets/privacy.jpg",
        title: "超严格的隐私保护，更放心",
        subtitle: "您的隐私和安全，是我们第一原则",
        paragraphs: &[
            "您的心血之作，我们用心守护。我们郑重承诺：",
            "绝对专用： 您的文件仅用于本次质量分析，我们绝不会将其用于任何其他用途，更不会泄露给任何第三方。- 匿名处理： 分析过程中，您的个人信息会被剥离，仅分析内容本身。- 及时销毁： 分析完成后，您的原始文件将在24小时内自动删除，不留存任何底稿，请放心使用。",
        ],
    },
];

/// A rendered paragraph.
#[derive(Debug, PartialEq)]
enum Block<'a> {
    Text(&'a str),
    List {
        intro: Option<&'a str>,
        items: Vec<&'a str>,
    },
}

/// Split `intro- item- item` into an intro and list items.
fn parse_block(paragraph: &str) -> Block<'_> {
    if !paragraph.contains("- ") {
        return Block::Text(paragraph);
    }
    let leading_item = paragraph.trim_start().starts_with("- ");
    let mut parts = paragraph
        .split("- ")
        .map(str::trim)
        .filter(|part| !part.is_empty());
    let intro = if leading_item { None } else { parts.next() };
    Block::List {
        intro,
        items: parts.collect(),
    }
}

fn render_block(paragraph: &'static str) -> View {
    match parse_block(paragraph) {
        Block::Text(text) => view! { <p class="feature-text">{text}</p> }.into_view(),
        Block::List { intro, items } => view! {
            <div class="feature-list">
                {intro.map(|text| view! { <p class="feature-text">{text}</p> })}
                <ul>
                    {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                </ul>
            </div>
        }
        .into_view(),
    }
}

#[component]
fn FeatureCard(feature: &'static Feature, reversed: bool) -> impl IntoView {
    view! {
        <div class="feature-card" class:reversed=reversed>
            <div class="feature-image">
                <img src=feature.image alt=feature.title/>
                <div class="feature-icon">{feature.icon}</div>
            </div>
            <div class="feature-body">
                <h3>{feature.title}</h3>
                <h4>{feature.subtitle}</h4>
                {feature.paragraphs.iter().copied().map(render_block).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Introduction(
    /// This section, for scroll links
    section_ref: NodeRef<html::Section>,
    /// The QC section, target of the closing call to action
    qc_ref: NodeRef<html::Section>,
) -> impl IntoView {
    view! {
        <section class="introduction" node_ref=section_ref>
            <div class="section-heading">
                <h2>"为什么选择我们"</h2>
                <p>
                    "专业的AI技术、海量的数据支撑、严格的隐私保护，让每一份作业都获得最优质的质量检测服务"
                </p>
            </div>

            <div class="feature-cards">
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(i, feature)| view! { <FeatureCard feature=feature reversed=i % 2 == 1/> })
                    .collect_view()}
            </div>

            <div class="introduction-cta">
                <h3>"开始您的专业质量检测之旅"</h3>
                <p>"上传您的作业，体验前所未有的AI质量检测服务"</p>
                <button class="button-light" on:click=move |_| scroll_to_section(qc_ref)>
                    "立即开始检测"
                </button>
            </div>
        </section>
    }
}
