/// Diagram style used when a request does not name one
pub const DEFAULT_DIAGRAM_TYPE: &str = "flowchart";

/// Build the system instruction for a transcript analysis.
///
/// `diagram_type` is a free-form hint ("flowchart", "blueprint", "mermaid", ...)
/// and is interpolated as-is.
pub fn system_prompt(diagram_type: &str) -> String {
    format!(
        r#"You are an expert technical analyst. Analyze meeting transcripts and extract:
1. A concise summary of the technical solution or process discussed
2. Key decisions and action items
3. Technical requirements and constraints

Then generate a {diagram_type} diagram using Mermaid syntax that visualizes the solution/process.

For flowcharts, use standard flowchart syntax with decision nodes, processes, and data flows.
For blueprints, use graph TD with detailed nodes showing system components and their relationships.
For general diagrams, choose the most appropriate Mermaid diagram type (flowchart, sequence, class, etc.).

Return ONLY valid JSON with this structure:
{{
  "summary": "Clear summary of the discussion",
  "keyPoints": ["point 1", "point 2", "point 3"],
  "mermaidCode": "Valid mermaid diagram code"
}}"#
    )
}
