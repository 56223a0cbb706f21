use crate::services::providers::GenerationParams;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const PROMPT_REQUIRED: &str = "Prompt is required";

const SYSTEM_INSTRUCTION: &str = "你是一位深刻的灵魂分析师和心理洞察专家。你的任务是基于用户提供的一系列哲学和心理测试答案，为他们撰写一份温暖、深刻且个性化的总结报告。请不要重复问题，而是综合所有答案，提炼出用户的核心特质、内在驱动力、他们与世界互动的方式，以及他们灵魂深处的向往。你的语言应充满智慧和同理心。";

/// Generation settings used for every summary. Not configurable at runtime.
pub const SUMMARY_GENERATION: GenerationParams = GenerationParams {
    model: "gemini-2.5-flash-preview-09-2025",
    system_instruction: SYSTEM_INSTRUCTION,
    temperature: 0.7,
    top_k: 10,
};

#[derive(Debug, Deserialize, Validate)]
pub struct SummaryRequest {
    #[validate(
        required(message = "Prompt is required"),
        length(min = 1, message = "Prompt is required")
    )]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}
