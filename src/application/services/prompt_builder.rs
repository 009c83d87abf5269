use crate::domain::{GuideType, OutputMode};

const DESCRIPTION_TASK: &str = "A) LPV DESCRIPTION (short, conversion-focused)";

/// Assembles the instruction prompt sent to the model.
///
/// Pure and infallible: the brochure text is appended verbatim, and a mode
/// that selects no task simply leaves the `TASKS:` section empty.
pub fn build_prompt(
    project_name: &str,
    output: OutputMode,
    guide_type: GuideType,
    brochure_text: &str,
) -> String {
    let mut tasks: Vec<String> = Vec::with_capacity(2);

    if output.includes_description() {
        tasks.push(DESCRIPTION_TASK.to_string());
    }
    if output.includes_guide() {
        tasks.push(guide_task(guide_type));
    }

    let mut prompt = preamble(project_name);
    prompt.push_str("\nTASKS:\n");
    prompt.push_str(&tasks.join("\n"));
    prompt.push_str("\n\nBROCHURE TEXT:\n");
    prompt.push_str(brochure_text);
    prompt
}

fn preamble(project_name: &str) -> String {
    format!(
        "You are a Bayut content expert.\n\
         Rules:\n\
         - Use ONLY the brochure text provided.\n\
         - Do NOT hallucinate.\n\
         - If something is missing, list it under: MISSING INFORMATION.\n\
         PROJECT NAME: {project_name}\n"
    )
}

fn guide_task(guide_type: GuideType) -> String {
    let mut block = format!("B) {} using ONLY these headers:", guide_type.title());
    for header in guide_type.headers() {
        block.push('\n');
        block.push_str(header);
    }
    block
}
