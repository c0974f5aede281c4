//! Hero section component

use leptos::*;

use crate::config::HERO_IMAGE_SRC;
use crate::services::scroll_to_section;
use crate::types::SectionRefs;

const HIGHLIGHTS: &[&str] = &[
    "🎯 精准检测语法与逻辑",
    "📊 海量数据库对比",
    "🔒 24小时内自动删除",
    "⚡ 30秒生成专业报告",
];

const STATS: &[(&str, &str)] = &[
    ("50K+", "已检测文稿"),
    ("98%", "准确率"),
    ("30s", "平均检测时间"),
    ("24h", "数据保护期限"),
];

#[component]
pub fn Hero(sections: SectionRefs) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-background">
                <img src=HERO_IMAGE_SRC alt="AI Quality Control"/>
            </div>

            <div class="hero-content">
                <div class="hero-badge">"✨ AI 智能质量检测"</div>
                <h1>"作业质量智能检测"</h1>
                <p class="subtitle">
                    "基于前沿AI技术，为您的作业和论文提供专业的质量分析与优化建议"
                    <br/>
                    <span class="accent">"无需登录，即刻体验"</span>
                </p>

                <div class="hero-highlights">
                    {HIGHLIGHTS
                        .iter()
                        .map(|text| view! { <div class="hero-highlight">{*text}</div> })
                        .collect_view()}
                </div>

                <div class="hero-actions">
                    <button class="button-primary" on:click=move |_| scroll_to_section(sections.qc)>
                        "开始免费检测 →"
                    </button>
                    <button
                        class="button-outline"
                        on:click=move |_| scroll_to_section(sections.introduction)
                    >
                        "了解更多"
                    </button>
                </div>

                <div class="hero-stats">
                    {STATS
                        .iter()
                        .map(|(number, label)| {
                            view! {
                                <div class="hero-stat">
                                    <div class="hero-stat-number">{*number}</div>
                                    <div class="hero-stat-label">{*label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
