use crate::{guidance, topic::Topic};
use anyhow::{Context, Result};
use tera::{Context as TeraContext, Tera};

pub const ANALYZE_TEMPLATE: &str = "analyze.tera";

/// Label used in prose when the caller did not name a language.
pub const GENERIC_LANGUAGE_LABEL: &str = "generic";

/// Inputs for one analysis prompt.
pub struct PromptInput<'a> {
    pub topic: Topic,
    pub language: Option<&'a str>,
    pub code: &'a str,
    pub request: &'a str,
}

/// Builds the template environment. Templates are compiled into the binary.
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_template(ANALYZE_TEMPLATE, include_str!("../templates/analyze.tera"))
        .context("Failed to load analyze template")?;
    tera.autoescape_on(vec![]); // prompts are plain text
    Ok(tera)
}

pub fn render_prompt(tera: &Tera, input: &PromptInput<'_>) -> Result<String> {
    let language_guidance = input
        .language
        .and_then(guidance::language_guidance)
        .unwrap_or(guidance::GENERIC_LANGUAGE_GUIDANCE);

    let mut context = TeraContext::new();
    context.insert("topic", input.topic.as_str());
    context.insert("language", input.language.unwrap_or(GENERIC_LANGUAGE_LABEL));
    context.insert("fence_tag", input.language.unwrap_or_default());
    context.insert("topic_guidance", guidance::topic_guidance(input.topic));
    context.insert("language_guidance", language_guidance);
    context.insert("code", input.code);
    context.insert("request", input.request);

    tera.render(ANALYZE_TEMPLATE, &context)
        .context(format!("Failed to render template: {}", ANALYZE_TEMPLATE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::{language_guidance, topic_guidance, GENERIC_LANGUAGE_GUIDANCE};

    fn render(input: &PromptInput<'_>) -> String {
        let tera = load_templates().unwrap();
        render_prompt(&tera, input).unwrap()
    }

    #[test]
    fn embeds_topic_and_language_blocks() {
        let prompt = render(&PromptInput {
            topic: Topic::Performance,
            language: Some("javascript"),
            code: "for(i=0;i<10;i++){}",
            request: "make this faster",
        });

        assert!(prompt.starts_with(
            "As an expert game developer specializing in performance, analyze and improve this javascript code."
        ));
        assert!(prompt.contains(topic_guidance(Topic::Performance)));
        assert!(prompt.contains(language_guidance("javascript").unwrap()));
        assert!(prompt.contains("```javascript\nfor(i=0;i<10;i++){}\n```"));
        assert!(prompt.contains("User's specific request: make this faster"));
        assert!(prompt.contains("\nExplanation:\n"));
    }

    #[test]
    fn unknown_language_uses_generic_block() {
        let prompt = render(&PromptInput {
            topic: Topic::Audio,
            language: Some("Haxe"),
            code: "x",
            request: "y",
        });
        assert!(prompt.contains(GENERIC_LANGUAGE_GUIDANCE));
        assert!(prompt.contains("```Haxe\nx\n```"));
    }

    #[test]
    fn missing_language_leaves_fences_untagged() {
        let prompt = render(&PromptInput {
            topic: Topic::Tools,
            language: None,
            code: "print(1)",
            request: "add a test",
        });
        assert!(prompt.contains("improve this generic code."));
        assert!(prompt.contains("```\nprint(1)\n```"));
        assert!(prompt.contains(GENERIC_LANGUAGE_GUIDANCE));
    }

    #[test]
    fn user_text_is_not_escaped_or_interpreted() {
        let code = "if (a < b && c > d) { x = \"{{ y }}\"; }";
        let prompt = render(&PromptInput {
            topic: Topic::Gameplay,
            language: Some("cpp"),
            code,
            request: "<b>fix</b>",
        });
        assert!(prompt.contains(code));
        assert!(prompt.contains("<b>fix</b>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let input = PromptInput {
            topic: Topic::Graphics,
            language: Some("csharp"),
            code: "void Update() {}",
            request: "smoother camera",
        };
        assert_eq!(render(&input), render(&input));
    }

    #[test]
    fn empty_inputs_still_render() {
        let prompt = render(&PromptInput {
            topic: Topic::Performance,
            language: Some(""),
            code: "",
            request: "",
        });
        assert!(prompt.contains("User's specific request: \n"));
    }
}
