use std::collections::HashMap;

/// Resolves message codes to display text
///
/// Templates use positional `{0}`, `{1}`, ... placeholders. A placeholder with
/// no matching argument is left as written.
#[derive(Debug, Clone)]
pub struct MessageSource {
    templates: HashMap<String, String>,
}

impl Default for MessageSource {
    fn default() -> Self {
        let mut templates = HashMap::new();
        templates.insert(
            "cargo.unknown_id".to_string(),
            "{0} is not a valid tracking id.".to_string(),
        );
        Self { templates }
    }
}

impl MessageSource {
    /// Source with no templates, every lookup falls back to the default message
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Default templates overlaid with the given ones
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut source = Self::default();
        for (code, template) in overrides {
            source.templates.insert(code.clone(), template.clone());
        }
        source
    }

    pub fn template(&self, code: &str) -> Option<&str> {
        self.templates.get(code).map(String::as_str)
    }

    pub fn resolve(&self, code: &str, args: &[String], default_message: &str) -> String {
        match self.template(code) {
            Some(template) => format_message(template, args),
            None => default_message.to_string(),
        }
    }
}

fn format_message(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let arg = after.find('}').and_then(|close| {
            after[..close]
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index))
                .map(|arg| (arg, close))
        });

        match arg {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
