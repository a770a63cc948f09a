// Cross-cutting prompt fragments. Operation-specific templates live in
// generation::prompts next to the pipeline that fills them.

/// System prompt for every résumé-writing call: plain text only, no framing.
pub const RESUME_WRITER_SYSTEM: &str = "You are an expert resume writer. \
    Respond with the requested resume text only. \
    Do NOT include markdown code fences, headings, or commentary. \
    Do NOT invent employers, titles, or credentials that are not in the input.";
