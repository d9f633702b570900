// Resume analysis engine: fixed rubric prompts, per-resume fan-out pipeline,
// and the final ranking aggregation. All LLM calls go through llm_client —
// no direct Gemini API calls here.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod ranking;
pub mod report;
pub mod sections;
