//! The ten-slide narrative and deck assembly.

use crate::bullets;
use crate::ooxml::pptx::Presentation;
use serde::Serialize;

use super::brand::Brand;
use super::builders::{add_cover_slide, add_simple_slide};
use super::bullets::BulletItem;

/// File the deck is written to, in the working directory.
pub const OUTPUT_FILE_NAME: &str = "AI工业营销Agent-产品定义_10页版.pptx";

/// Number of slides, as shown in every page-number footer.
pub const TOTAL_SLIDES: usize = 10;

/// Title and bullets of one content slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideContent {
    /// 1-based slide number
    pub index: usize,
    pub title: String,
    pub bullets: Vec<BulletItem>,
}

impl SlideContent {
    fn new(index: usize, title: &str, bullets: Vec<BulletItem>) -> Self {
        Self {
            index,
            title: title.to_string(),
            bullets,
        }
    }
}

/// Slides 2 to 10, in order.
pub fn content_slides() -> Vec<SlideContent> {
    vec![
        SlideContent::new(2, "愿景与定位 + 核心价值", bullets![
            "愿景：成为工业企业“营销内容生产力中枢”",
            "定位：面向工业的多Agent编排平台，覆盖视频/海报/宣传册",
            "核心价值：",
            ("速度：从“想法+素材”到“可投放物料”分钟级", 1),
            ("专业：工业知识图谱 + LLM 推理，合规表达", 1),
            ("一致性：品牌规范/术语/尺寸与配色统一", 1),
            ("降本增效：减少外包与反复沟通成本", 1),
            ("优化闭环：A/B 测试与投放数据驱动", 1),
        ]),
        SlideContent::new(3, "背景与痛点", bullets![
            "行业复杂：参数/标准/工况/法规差异大，内容易“外行化”",
            "周期冗长：方案撰写、物料制作、审校耗时",
            "工具分散：多供应商工具，资产难沉淀",
            "闭环弱：投放效果难反哺内容优化",
            "合规风险：用词/承诺/版权/认证引用易出错",
        ]),
        SlideContent::new(4, "目标用户与应用场景", bullets![
            "目标用户：市场/品牌/公关、售前工程、渠道团队、代理商",
            "典型场景：",
            ("新品发布：30s亮点视频 + KV海报 + 4P宣传册", 1),
            ("方案营销：工况/行业应用视频与单页", 1),
            ("展会速产：展前一周批量物料生成", 1),
            ("渠道共创：伙伴素材输入，统一风格输出", 1),
            ("海外本地化：多语言字幕/配音/度量单位/法规适配", 1),
        ]),
        SlideContent::new(5, "核心能力与输出类型", bullets![
            "输入：想法/brief、参数表、素材库（CAD/渲染/视频）、案例文档",
            "输出：广告视频（15/30/60s）、多规格海报、宣传册/白皮书",
            "智能增强：",
            ("要点提炼、痛点-卖点映射、脚本/镜头联动", 1),
            ("配音/字幕/动效建议与套版", 1),
            ("品牌与合规校验；A/B版本与效果预测", 1),
        ]),
        SlideContent::new(6, "端到端体验与Demo要点", bullets![
            "流程：选模板 → 输入想法/素材 → 初稿预览 → 多版本生成 → 校验 → 导出/投放",
            "视频故事板（30s）：",
            ("场景（痛点）→ 卖点（性能/可靠性/TCO） → 证据（数据/认证） → CTA", 1),
            "海报/宣传册：标题/主视觉/卖点与参数/证据区/CTA/品牌规范自动套用",
        ]),
        SlideContent::new(7, "技术架构与多模型生态 + 协议", bullets![
            "Agent中枢：任务编排、意图识别、技能路由、版本管理",
            // label restored from a corrupted "语��与推理" in the source copy
            "语言与推理：自研工业LLM、gemini3-pro、GPT5（规划）、deepseek",
            "视觉/视频：可灵、火山、Veo3、sora2、通义万相、Vidu、海螺",
            "协议：Function Call、MCP（Model Context Protocol）、A2A（Agent-to-Agent）",
            "适配层：能力声明、成本/时延画像、质量档案、故障转移/降级",
        ]),
        SlideContent::new(8, "工业知识图谱与数据治理 + 合规", bullets![
            "知识图谱：行业→工艺→设备→部件→材料→参数→标准→认证→案例",
            "用途：卖点生成、术语统一、选型逻辑、合规守则",
            "数据治理：资产/模板库、权限与水印、检索与生命周期",
            "合规：禁用词与承诺用语、认证引用格式、版权许可与溯源",
        ]),
        SlideContent::new(9, "商业模式、KPI与路线图", bullets![
            "商业模式：订阅；企业版（私有化/SLA/定制）；生态分成；增值服务（审校/品牌/数据治理）",
            "KPI：TTV↓≥70%；外包成本↓≥40%；一致性≥90；合规≥98%；投放指标提升",
            "路线图：",
            ("Q1：核心闭环与2家视觉工具打通", 1),
            ("Q2：多Agent稳定、A2A跨系统、合规1.0", 1),
            ("Q3：多语言本地化、自动AB测试、≥5工具接入", 1),
            ("Q4：行业包、私有化SLA、生态伙伴计划", 1),
        ]),
        SlideContent::new(10, "下一步与CTA", bullets![
            "预约“从Brief到导出”的实机演示",
            "选定试点产品线与素材，一周交付首批物料",
            "提供品牌手册/LOGO/色板，生成品牌化模板",
            "如需我直接上传PPTX至GitHub，请提供 owner/repo 与目标分支",
        ]),
    ]
}

/// Build the whole deck: the cover, then every content slide.
pub fn build_deck(brand: &Brand) -> Presentation {
    let mut pres = Presentation::new();
    pres.set_properties(brand.document_properties());

    add_cover_slide(&mut pres, TOTAL_SLIDES, brand);
    for slide in content_slides() {
        add_simple_slide(
            &mut pres,
            slide.index,
            TOTAL_SLIDES,
            &slide.title,
            &slide.bullets,
            brand,
        );
    }

    tracing::debug!(slides = pres.slide_count(), "deck built");
    pres
}
