//! Footer component

use leptos::*;

use crate::config::{COMPANY_NAME, REPORT_DELIVERY_HOURS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">{COMPANY_NAME}</div>
                    <p>"专业的AI质量检测平台，为您的学术作业提供智能化的质量分析与优化建议。"</p>
                </div>
                <div>
                    <h4>"服务特色"</h4>
                    <ul>
                        <li>"海量学术数据库"</li>
                        <li>"严格隐私保护"</li>
                        <li>"30秒快速分析"</li>
                    </ul>
                </div>
                <div>
                    <h4>"支持格式"</h4>
                    <p>"文档: DOC, DOCX, PDF, TXT"</p>
                    <p>"演示: PPT, PPTX, KEY"</p>
                    <p>"表格: XLS, XLSX"</p>
                    <p>"图片: JPG, PNG"</p>
                </div>
                <div>
                    <h4>"获取帮助"</h4>
                    <p>"📱 添加企业微信获取QC报告"</p>
                    <p>{format!("⏰ {}小时内发送完整报告", REPORT_DELIVERY_HOURS)}</p>
                    <p>"🔒 文件24小时后自动删除"</p>
                </div>
            </div>

            <div class="footer-privacy">
                <strong>"隐私承诺:"</strong>
                " 您上传的所有文件仅用于本次质量分析，我们承诺不会将其用于任何其他用途，"
                "分析完成后24小时内自动删除，绝不留存备份。"
            </div>

            <div class="footer-bottom">
                <div>{format!("© 2024 {}. 保护您的学术隐私，提升作业质量。", COMPANY_NAME)}</div>
                <div class="footer-links">
                    <span>"🚀 基于前沿AI技术"</span>
                    <span>"🛡️ 隐私优先原则"</span>
                    <span>"⚡ 极速质量检测"</span>
                </div>
            </div>
        </footer>
    }
}
