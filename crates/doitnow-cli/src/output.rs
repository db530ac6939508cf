//! Text or JSON rendering of command results

use serde::Serialize;

pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print `value` as pretty JSON, or the text built by `text`
    pub fn emit<T, F>(&self, value: &T, text: F) -> Result<(), Box<dyn std::error::Error>>
    where
        T: Serialize + ?Sized,
        F: FnOnce() -> String,
    {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            let rendered = text();
            if !rendered.is_empty() {
                println!("{}", rendered);
            }
        }
        Ok(())
    }
}
