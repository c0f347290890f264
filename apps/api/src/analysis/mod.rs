// Resume-vs-JD analysis: input validation, prompt assembly, one model call,
// and recovery of the typed report relayed to callers.
// All LLM calls go through llm_client, no direct provider calls here.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
pub mod report;
