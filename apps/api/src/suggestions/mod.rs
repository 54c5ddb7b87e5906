// LLM-assisted field suggestions: item descriptions and terms/payment
// blocks. The prompts are fixed constants; all calls go through llm_client.

pub mod handlers;
pub mod prompts;
