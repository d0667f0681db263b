use crate::error::PromptError;

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), PromptError>;
}

/// The desktop clipboard. On X11/Wayland the contents are owned by this
/// handle, so it has to live as long as the app.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, PromptError> {
        let inner = arboard::Clipboard::new().map_err(|e| PromptError::clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), PromptError> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| PromptError::clipboard(e.to_string()))
    }
}

/// Copies `output`. Empty output is never written; `Ok(false)` says so.
pub fn copy_output(output: &str, clipboard: &mut dyn Clipboard) -> Result<bool, PromptError> {
    if output.is_empty() {
        return Ok(false);
    }
    clipboard.write_text(output)?;
    Ok(true)
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;

    #[derive(Default)]
    pub struct MemoryClipboard {
        pub contents: Option<String>,
        pub writes: usize,
        pub fail: bool,
    }

    impl Clipboard for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), PromptError> {
            self.writes += 1;
            if self.fail {
                return Err(PromptError::clipboard("permission denied"));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::MemoryClipboard;
    use super::*;

    #[test]
    fn copies_non_empty_output() {
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(copy_output("prompt", &mut clipboard), Ok(true));
        assert_eq!(clipboard.contents.as_deref(), Some("prompt"));
    }

    #[test]
    fn empty_output_never_reaches_the_clipboard() {
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(copy_output("", &mut clipboard), Ok(false));
        assert_eq!(clipboard.writes, 0);
    }

    #[test]
    fn write_failures_are_reported() {
        let mut clipboard = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        assert!(matches!(
            copy_output("prompt", &mut clipboard),
            Err(PromptError::ClipboardUnavailable(_))
        ));
    }
}
