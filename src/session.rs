use crate::error::{GenerationError, PromptError};
use crate::generator::Generator;
use crate::models::{Expertise, Style};
use crate::utils::strings;

pub const MAX_INPUT_CHARS: usize = 1200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Generating,
}

/// Snapshot of the selections taken when a generation starts. Edits made
/// while it is in flight do not leak into the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub expertise: Expertise,
    pub style: Style,
    pub input: String,
}

pub fn render(expertise: Expertise, style: Style, input: &str) -> String {
    format!(
        "You're an expert in {} communication with a focus on {} delivery. Your task is: {}",
        expertise, style, input
    )
}

#[derive(Debug, Clone, Default)]
pub struct PromptSession {
    input: String,
    style: Style,
    expertise: Expertise,
    output: String,
    status: GenerationStatus,
}

impl PromptSession {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selections(style: Style, expertise: Expertise) -> Self {
        Self {
            style,
            expertise,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn expertise(&self) -> Expertise {
        self.expertise
    }

    /// Most recent result, empty until the first successful generation.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    pub fn is_generating(&self) -> bool {
        self.status == GenerationStatus::Generating
    }

    pub fn can_generate(&self) -> bool {
        !self.is_generating() && !self.input.trim().is_empty()
    }

    pub fn set_input(&mut self, text: impl Into<String>) -> Result<(), PromptError> {
        let text = text.into();
        let len = strings::char_count(&text);
        if len > MAX_INPUT_CHARS {
            return Err(PromptError::InputTooLong {
                len,
                max: MAX_INPUT_CHARS,
            });
        }
        self.input = text;
        Ok(())
    }

    pub fn set_style(&mut self, id: &str) -> Result<(), PromptError> {
        self.style = id.parse()?;
        Ok(())
    }

    pub fn set_expertise(&mut self, id: &str) -> Result<(), PromptError> {
        self.expertise = id.parse()?;
        Ok(())
    }

    pub fn select_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn select_expertise(&mut self, expertise: Expertise) {
        self.expertise = expertise;
    }

    /// `Idle -> Generating`. Returns `None` without changing anything when
    /// the input is blank.
    pub fn begin_generate(&mut self) -> Result<Option<PromptRequest>, PromptError> {
        if self.is_generating() {
            return Err(PromptError::GenerationInProgress);
        }
        if self.input.trim().is_empty() {
            return Ok(None);
        }

        self.status = GenerationStatus::Generating;
        tracing::info!(
            style = %self.style,
            expertise = %self.expertise,
            chars = strings::char_count(&self.input),
            "generation started"
        );

        Ok(Some(PromptRequest {
            expertise: self.expertise,
            style: self.style,
            input: self.input.clone(),
        }))
    }

    /// `Generating -> Idle`, whatever the result. A failure leaves the
    /// previous output in place.
    pub fn finish_generate(
        &mut self,
        result: Result<String, GenerationError>,
    ) -> Result<(), PromptError> {
        if !self.is_generating() {
            tracing::warn!("generation result arrived while idle, dropping it");
            return Ok(());
        }
        self.status = GenerationStatus::Idle;

        match result {
            Ok(text) => {
                tracing::info!(chars = strings::char_count(&text), "generation finished");
                self.output = text;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "generation failed");
                Err(err.into())
            }
        }
    }

    /// Runs a whole generation on the calling thread. Returns `false` if
    /// the input was blank and nothing ran.
    pub fn generate(&mut self, generator: &dyn Generator) -> Result<bool, PromptError> {
        let Some(request) = self.begin_generate()? else {
            return Ok(false);
        };
        let result = generator.generate(&request);
        self.finish_generate(result)?;
        Ok(true)
    }
}
