use serde::{Deserialize, Serialize};

/// Anki note layout; `{input}` and `{result}` are substituted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteTemplate {
    pub deck: String,
    pub model: String,
    pub front_template: String,
    pub back_template: String,
}

impl NoteTemplate {
    pub fn new(deck: String, model: String, front: String, back: String) -> Self {
        Self {
            deck,
            model,
            front_template: front,
            back_template: back,
        }
    }

    /// Format the front of the card
    pub fn format_front(&self, input: &str, result: &str) -> String {
        fill(&self.front_template, input, result)
    }

    /// Format the back of the card
    pub fn format_back(&self, input: &str, result: &str) -> String {
        fill(&self.back_template, input, result)
    }
}

/// Substitute placeholders in one pass; inserted text is never rescanned
fn fill(template: &str, input: &str, result: &str) -> String {
    let mut out = String::with_capacity(template.len() + input.len() + result.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        if let Some(after) = tail.strip_prefix("{input}") {
            out.push_str(input);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{result}") {
            out.push_str(result);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}
